//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - JWT 액세스 토큰 기반 인증 검증
//! - Bearer 토큰 추출 및 검증
//! - 토큰 주체 사용자 조회 (삭제/비활성 계정 거부)
//! - 해석된 사용자 정보를 request extension에 저장
//!
//! # 사용 방법
//!
//! 라우트는 public/protected 두 분류로 나뉩니다. protected 스코프만
//! 미들웨어로 감싸고, public 라우트(로그인, 회원가입, 토큰 갱신)는
//! 미들웨어를 거치지 않습니다. 핸들러는 인증 검사를 반복 구현하지 않고
//! extension의 `AuthenticatedUser`만 읽습니다.
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/addresses")
//!             .wrap(AuthMiddleware::required()) // 보호된 라우트
//!             .service(handlers::addresses::list_addresses)
//!     )
//!     .service(
//!         web::scope("/api/token")
//!             .service(handlers::auth::obtain_token) // public
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
