//! Authentication HTTP Handlers
//!
//! 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 이메일/패스워드 로그인과 JWT 토큰 기반의 상태 없는 인증을 구현합니다.
//!
//! # Endpoints
//!
//! - `POST /api/token` - 로그인 (토큰 쌍 발급)
//! - `POST /api/token/refresh` - 액세스 토큰 갱신
//! - `POST /api/register` - 회원가입
//! - `POST /api/logout` - 로그아웃 (리프레시 토큰 무효화)

use crate::domain::dto::users::request::auth_request::{
    LocalLoginRequest, LogoutRequest, RefreshRequest,
};
use crate::domain::dto::users::request::create_user_request::CreateUserRequest;
use crate::domain::dto::users::response::user_response::{
    AccessTokenResponse, AuthTokensResponse, UserResponse,
};
use crate::errors::errors::AppError;
use crate::handlers::current_identity;
use crate::services::{auth::TokenService, users::user_service::UserService};
use actix_web::{HttpRequest, HttpResponse, post, web};
use serde_json::json;
use validator::Validate;

/// 로그인 핸들러 (토큰 발급)
///
/// 이메일과 패스워드를 검증하고 액세스/리프레시 토큰 쌍을 발급합니다.
///
/// # Endpoint
/// `POST /api/token`
#[post("")]
pub async fn obtain_token(
    payload: web::Json<LocalLoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_service = UserService::instance();
    let token_service = TokenService::instance();

    // 사용자 인증
    let user = user_service
        .verify_password(&payload.email, &payload.password)
        .await?;

    log::info!(
        "로그인 성공 - 사용자: {}, ID: {}",
        user.email,
        user.id_string().unwrap_or_default()
    );

    // JWT 토큰 쌍 생성
    let token_pair = token_service.generate_token_pair(&user)?;

    Ok(HttpResponse::Ok().json(AuthTokensResponse {
        access: token_pair.access_token,
        refresh: token_pair.refresh_token.unwrap_or_default(),
        user: UserResponse::from(user),
    }))
}

/// 토큰 갱신 핸들러
///
/// 리프레시 토큰을 검증하고 새 액세스 토큰을 발급합니다.
/// 리프레시 토큰은 회전되지 않으며 만료까지 재사용할 수 있습니다.
///
/// # Endpoint
/// `POST /api/token/refresh`
#[post("/refresh")]
pub async fn refresh_token(payload: web::Json<RefreshRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token_service = TokenService::instance();

    let access = token_service.refresh_access_token(&payload.refresh).await?;

    Ok(HttpResponse::Ok().json(AccessTokenResponse { access }))
}

/// 회원가입 핸들러
///
/// 새 계정을 생성하고 즉시 로그인된 상태로 토큰 쌍을 함께 반환합니다.
///
/// # Endpoint
/// `POST /api/register`
#[post("")]
pub async fn register(payload: web::Json<CreateUserRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_service = UserService::instance();
    let token_service = TokenService::instance();

    let user = user_service.create_user(payload.into_inner()).await?;

    let token_pair = token_service.generate_token_pair(&user)?;

    Ok(HttpResponse::Created().json(AuthTokensResponse {
        access: token_pair.access_token,
        refresh: token_pair.refresh_token.unwrap_or_default(),
        user: UserResponse::from(user),
    }))
}

/// 로그아웃 핸들러
///
/// 본문으로 전달된 리프레시 토큰을 블랙리스트에 추가합니다.
/// 이후 같은 토큰으로의 갱신 요청은 만료 전이라도 거부됩니다.
/// 잘못된 토큰은 조용히 성공하지 않고 400으로 응답합니다.
///
/// # Endpoint
/// `POST /api/logout`
#[post("")]
pub async fn logout(
    req: HttpRequest,
    payload: web::Json<LogoutRequest>,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token_service = TokenService::instance();

    match token_service
        .revoke_refresh_token(&payload.refresh_token)
        .await
    {
        Ok(()) => {
            log::info!("로그아웃 성공 - 사용자: {}", identity.user_id);
            Ok(HttpResponse::Ok().json(json!({
                "message": "Successfully logged out."
            })))
        }
        Err(e) => {
            log::error!("로그아웃 실패 - 사용자: {}, 에러: {}", identity.user_id, e);
            Err(AppError::ValidationError("Logout failed.".to_string()))
        }
    }
}
