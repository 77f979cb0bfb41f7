//! User Profile HTTP Handlers
//!
//! 현재 인증된 사용자의 프로필 조회/수정 엔드포인트입니다.
//!
//! # Endpoints
//!
//! - `GET /api/me` - 현재 사용자 프로필 조회
//! - `PATCH /api/me` - 표시 이름 수정

use crate::domain::dto::users::request::update_profile_request::UpdateProfileRequest;
use crate::domain::dto::users::response::user_response::UserResponse;
use crate::errors::errors::AppError;
use crate::handlers::current_identity;
use crate::services::users::user_service::UserService;
use actix_web::{HttpRequest, HttpResponse, get, patch, web};
use validator::Validate;

/// 현재 사용자 프로필 조회 핸들러
///
/// 미들웨어가 해석한 신원으로 저장소의 최신 사용자 정보를 반환합니다.
///
/// # Endpoint
/// `GET /api/me`
#[get("")]
pub async fn get_me(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;

    let user_service = UserService::instance();

    let user = user_service
        .find_by_id(&identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 표시 이름 수정 핸들러
///
/// # Endpoint
/// `PATCH /api/me`
#[patch("")]
pub async fn update_me(
    req: HttpRequest,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_service = UserService::instance();

    let updated = user_service
        .update_name(&identity.user_id, &payload.name)
        .await?;

    log::info!("프로필 이름 수정됨 - 사용자: {}", identity.user_id);

    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}
