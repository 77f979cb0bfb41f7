//! # HTTP Handlers Module
//!
//! REST API 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 핸들러는 얇게 유지됩니다: 입력 검증, 서비스 호출, 응답 DTO 변환만
//! 수행하고 도메인 규칙(소유권, 대표 주소 재조정, 1:1 제약)은 서비스
//! 계층에 위임합니다.
//!
//! ## 인증 모델
//!
//! protected 라우트의 핸들러는 인증 검사를 직접 수행하지 않습니다.
//! `AuthMiddleware`가 토큰 검증과 사용자 조회를 마친 뒤 request extension에
//! 넣어 둔 `AuthenticatedUser`를 [`current_identity`]로 꺼내 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 로그인(토큰 발급), 토큰 갱신, 로그아웃, 회원가입
//! - [`users`] - 현재 사용자 프로필 조회/수정
//! - [`addresses`] - 소유자 범위 주소 CRUD
//! - [`phones`] - 소유자 범위 전화번호 CRUD
//! - [`files`] - 파일 업로드/다운로드/삭제

use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::errors::AppError;
use actix_web::{HttpMessage, HttpRequest};

pub mod addresses;
pub mod auth;
pub mod files;
pub mod phones;
pub mod users;

/// Request Extensions에서 인증된 사용자 정보를 꺼냅니다.
///
/// protected 스코프의 핸들러에서만 호출됩니다. 미들웨어가 삽입한 값이
/// 없다면 라우트 구성 오류이므로 401로 응답합니다.
pub(crate) fn current_identity(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
    req.extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| {
            AppError::AuthenticationError(
                "Authentication credentials were not provided.".to_string(),
            )
        })
}
