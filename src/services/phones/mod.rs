//! 전화번호 관리 서비스 모듈

pub mod phone_service;

pub use phone_service::*;
