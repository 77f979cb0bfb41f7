//! File HTTP Handlers
//!
//! 파일 업로드/조회/다운로드/삭제 엔드포인트입니다.
//! 업로드는 multipart 폼(`file` 필드 + 선택적 `description` 필드)으로
//! 수신하며, 컨텐츠 타입과 크기는 수신한 바이트를 기준으로 검증됩니다.
//!
//! # Endpoints
//!
//! - `GET /api/files` - 목록 조회
//! - `POST /api/files` - 업로드
//! - `GET /api/files/{id}` - 메타데이터 조회
//! - `GET /api/files/{id}/download` - 첨부파일 다운로드
//! - `DELETE /api/files/{id}` - 삭제

use crate::config::UploadConfig;
use crate::domain::dto::files::response::FileResponse;
use crate::errors::errors::AppError;
use crate::handlers::current_identity;
use crate::services::files::file_service::FileService;
use actix_files::NamedFile;
use actix_multipart::Multipart;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpRequest, HttpResponse, delete, get, post, web};
use futures_util::StreamExt;

/// 업로드 폼에서 추출한 파일 파트
struct UploadedPart {
    file_name: String,
    content_type: String,
    data: Vec<u8>,
}

/// 파일 목록 조회 핸들러
///
/// # Endpoint
/// `GET /api/files`
#[get("")]
pub async fn list_files(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;

    let files = FileService::instance().list(&identity).await?;

    let response: Vec<FileResponse> = files.into_iter().map(FileResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// 파일 업로드 핸들러
///
/// multipart 폼의 `file` 파트에서 파일명/컨텐츠 타입/바이트를 읽고,
/// `description` 파트가 있으면 설명으로 저장합니다.
/// 크기 제한은 수신 중에도 검사하여 제한을 넘는 업로드를 조기에 끊습니다.
///
/// # Endpoint
/// `POST /api/files`
#[post("")]
pub async fn upload_file(
    req: HttpRequest,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;

    let mut uploaded: Option<UploadedPart> = None;
    let mut description: Option<String> = None;

    while let Some(field) = payload.next().await {
        let mut field = field
            .map_err(|e| AppError::ValidationError(format!("Malformed multipart request: {}", e)))?;

        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "file" => {
                let file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or_default()
                    .to_string();

                let content_type = field
                    .content_type()
                    .map(|mime| mime.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let mut data: Vec<u8> = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk.map_err(|e| {
                        AppError::ValidationError(format!("Failed to read upload: {}", e))
                    })?;

                    if data.len() + chunk.len() > UploadConfig::MAX_FILE_SIZE {
                        return Err(AppError::ValidationError(
                            "File size must be less than 5MB".to_string(),
                        ));
                    }
                    data.extend_from_slice(&chunk);
                }

                uploaded = Some(UploadedPart {
                    file_name,
                    content_type,
                    data,
                });
            }
            "description" => {
                let mut text: Vec<u8> = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk.map_err(|e| {
                        AppError::ValidationError(format!("Failed to read upload: {}", e))
                    })?;
                    text.extend_from_slice(&chunk);
                }
                description = Some(String::from_utf8_lossy(&text).to_string());
            }
            // 알 수 없는 파트는 무시
            _ => {}
        }
    }

    let uploaded = uploaded
        .ok_or_else(|| AppError::ValidationError("No file was uploaded".to_string()))?;

    let created = FileService::instance()
        .store_upload(
            &identity,
            uploaded.file_name,
            uploaded.content_type,
            uploaded.data,
            description,
        )
        .await?;

    Ok(HttpResponse::Created().json(FileResponse::from(created)))
}

/// 파일 메타데이터 조회 핸들러
///
/// # Endpoint
/// `GET /api/files/{file_id}`
#[get("/{file_id}")]
pub async fn get_file(
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;
    let file_id = path.into_inner();

    let file = FileService::instance().get(&identity, &file_id).await?;

    Ok(HttpResponse::Ok().json(FileResponse::from(file)))
}

/// 파일 다운로드 핸들러
///
/// 소유권 검사 후 파일 바이트를 첨부파일로 스트리밍합니다.
/// 응답 컨텐츠 타입은 저장된 파일의 확장자에서 추정하며,
/// 추정할 수 없으면 `application/octet-stream`을 사용합니다.
///
/// # Endpoint
/// `GET /api/files/{file_id}/download`
#[get("/{file_id}/download")]
pub async fn download_file(
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;
    let file_id = path.into_inner();

    let (file, disk_path, content_type) = FileService::instance()
        .resolve_download(&identity, &file_id)
        .await?;

    let named = NamedFile::open_async(&disk_path)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to open file: {}", e)))?;

    let response = named
        .set_content_type(content_type)
        .set_content_disposition(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(file.file_name.clone())],
        })
        .into_response(&req);

    Ok(response)
}

/// 파일 삭제 핸들러
///
/// # Endpoint
/// `DELETE /api/files/{file_id}`
#[delete("/{file_id}")]
pub async fn delete_file(
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;
    let file_id = path.into_inner();

    FileService::instance().delete(&identity, &file_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
