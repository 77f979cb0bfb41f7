//! Phone Number HTTP Handlers
//!
//! 소유자 범위 전화번호 CRUD 엔드포인트입니다.
//! 생성 시 소유자당 1개 제약이 적용됩니다.
//!
//! # Endpoints
//!
//! - `GET /api/phones` - 목록 조회
//! - `POST /api/phones` - 생성 (1:1 제약)
//! - `GET /api/phones/{id}` - 단건 조회
//! - `PUT|PATCH /api/phones/{id}` - 수정
//! - `DELETE /api/phones/{id}` - 삭제

use crate::domain::dto::phones::request::{CreatePhoneRequest, UpdatePhoneRequest};
use crate::domain::dto::phones::response::PhoneResponse;
use crate::errors::errors::AppError;
use crate::handlers::current_identity;
use crate::services::phones::phone_service::PhoneService;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, route, web};
use validator::Validate;

/// 전화번호 목록 조회 핸들러
///
/// # Endpoint
/// `GET /api/phones`
#[get("")]
pub async fn list_phones(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;

    let phones = PhoneService::instance().list(&identity).await?;

    let response: Vec<PhoneResponse> = phones.into_iter().map(PhoneResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// 전화번호 생성 핸들러
///
/// 소유자에게 이미 전화번호가 있으면 400으로 거부됩니다.
///
/// # Endpoint
/// `POST /api/phones`
#[post("")]
pub async fn create_phone(
    req: HttpRequest,
    payload: web::Json<CreatePhoneRequest>,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let created = PhoneService::instance()
        .create(&identity, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(PhoneResponse::from(created)))
}

/// 전화번호 단건 조회 핸들러
///
/// # Endpoint
/// `GET /api/phones/{phone_id}`
#[get("/{phone_id}")]
pub async fn get_phone(
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;
    let phone_id = path.into_inner();

    let phone = PhoneService::instance().get(&identity, &phone_id).await?;

    Ok(HttpResponse::Ok().json(PhoneResponse::from(phone)))
}

/// 전화번호 수정 핸들러
///
/// # Endpoint
/// `PUT|PATCH /api/phones/{phone_id}`
#[route("/{phone_id}", method = "PUT", method = "PATCH")]
pub async fn update_phone(
    req: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<UpdatePhoneRequest>,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;
    let phone_id = path.into_inner();

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = PhoneService::instance()
        .update(&identity, &phone_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(PhoneResponse::from(updated)))
}

/// 전화번호 삭제 핸들러
///
/// # Endpoint
/// `DELETE /api/phones/{phone_id}`
#[delete("/{phone_id}")]
pub async fn delete_phone(
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;
    let phone_id = path.into_inner();

    PhoneService::instance().delete(&identity, &phone_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
