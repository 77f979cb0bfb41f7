//! Address HTTP Handlers
//!
//! 소유자 범위 주소 CRUD 엔드포인트입니다.
//! 대표 주소 플래그 재조정은 서비스/리포지토리 계층에서 처리됩니다.
//!
//! # Endpoints
//!
//! - `GET /api/addresses` - 목록 조회
//! - `POST /api/addresses` - 생성
//! - `GET /api/addresses/{id}` - 단건 조회
//! - `PUT|PATCH /api/addresses/{id}` - 수정
//! - `DELETE /api/addresses/{id}` - 삭제

use crate::domain::dto::addresses::request::{CreateAddressRequest, UpdateAddressRequest};
use crate::domain::dto::addresses::response::AddressResponse;
use crate::errors::errors::AppError;
use crate::handlers::current_identity;
use crate::services::addresses::address_service::AddressService;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, route, web};
use validator::Validate;

/// 주소 목록 조회 핸들러
///
/// # Endpoint
/// `GET /api/addresses`
#[get("")]
pub async fn list_addresses(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;

    let addresses = AddressService::instance().list(&identity).await?;

    let response: Vec<AddressResponse> = addresses.into_iter().map(AddressResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// 주소 생성 핸들러
///
/// `is_primary = true`로 생성하면 같은 소유자의 기존 대표 주소 플래그가
/// 해제된 뒤 삽입됩니다.
///
/// # Endpoint
/// `POST /api/addresses`
#[post("")]
pub async fn create_address(
    req: HttpRequest,
    payload: web::Json<CreateAddressRequest>,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let created = AddressService::instance()
        .create(&identity, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(AddressResponse::from(created)))
}

/// 주소 단건 조회 핸들러
///
/// # Endpoint
/// `GET /api/addresses/{address_id}`
#[get("/{address_id}")]
pub async fn get_address(
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;
    let address_id = path.into_inner();

    let address = AddressService::instance().get(&identity, &address_id).await?;

    Ok(HttpResponse::Ok().json(AddressResponse::from(address)))
}

/// 주소 수정 핸들러
///
/// PUT과 PATCH 모두 부분 수정으로 처리되며, 생략된 필드는 기존 값을
/// 유지합니다.
///
/// # Endpoint
/// `PUT|PATCH /api/addresses/{address_id}`
#[route("/{address_id}", method = "PUT", method = "PATCH")]
pub async fn update_address(
    req: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<UpdateAddressRequest>,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;
    let address_id = path.into_inner();

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = AddressService::instance()
        .update(&identity, &address_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(AddressResponse::from(updated)))
}

/// 주소 삭제 핸들러
///
/// # Endpoint
/// `DELETE /api/addresses/{address_id}`
#[delete("/{address_id}")]
pub async fn delete_address(
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;
    let address_id = path.into_inner();

    AddressService::instance()
        .delete(&identity, &address_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
