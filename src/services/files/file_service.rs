//! # 파일 관리 서비스 구현
//!
//! 업로드 검증, 디스크 저장, 다운로드 경로 해석, 삭제를 담당합니다.
//!
//! ## 업로드 정책
//!
//! - 허용 타입: PDF, Excel(xlsx), Word(docx/doc), 일반 텍스트
//! - 크기 제한: 5 MiB
//! - `file_type`과 `file_size`는 수신한 바이트에서 파생 (클라이언트
//!   메타데이터 필드 불신)
//! - 저장 이름은 UUID로 생성하고 원본 확장자만 유지. 원본 파일명은
//!   메타데이터로 보관되어 다운로드 시 Content-Disposition에 사용
//!
//! ## 다운로드 정책
//!
//! - 소유권 검사 후 저장된 파일의 확장자에서 컨텐츠 타입을 추정,
//!   추정 불가 시 `application/octet-stream`

use crate::{
    config::UploadConfig,
    domain::entities::files::stored_file::StoredFile,
    domain::models::auth::authenticated_user::AuthenticatedUser,
    errors::errors::{AppError, ErrorContext},
    repositories::files::file_repo::FileRepository,
    services::auth::ownership::assert_owner,
    utils::string_utils::clean_optional_string,
};
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// 파일 관리 서비스
#[service(name = "file")]
pub struct FileService {
    file_repository: Arc<FileRepository>,
}

fn owner_object_id(identity: &AuthenticatedUser) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(&identity.user_id)
        .map_err(|_| AppError::InternalError("Invalid identity user id".to_string()))
}

/// 업로드 파일의 컨텐츠 타입과 크기를 검증합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 허용되지 않는 타입 또는 크기 초과
pub fn validate_upload(content_type: &str, size: usize) -> Result<(), AppError> {
    if !UploadConfig::is_allowed_content_type(content_type) {
        return Err(AppError::ValidationError(
            "Only PDF, Excel, Word, and TXT files are allowed".to_string(),
        ));
    }

    if size > UploadConfig::MAX_FILE_SIZE {
        return Err(AppError::ValidationError(
            "File size must be less than 5MB".to_string(),
        ));
    }

    Ok(())
}

/// 원본 파일명의 확장자를 유지한 채 UUID 기반 저장 이름을 생성합니다.
fn generate_storage_name(original_name: &str) -> String {
    match Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) if !ext.is_empty() => format!("{}.{}", Uuid::new_v4(), ext),
        _ => Uuid::new_v4().to_string(),
    }
}

impl FileService {
    /// 소유자의 파일 목록 조회
    pub async fn list(&self, identity: &AuthenticatedUser) -> Result<Vec<StoredFile>, AppError> {
        let owner = owner_object_id(identity)?;
        self.file_repository.find_by_owner(&owner).await
    }

    /// 단건 파일 메타데이터 조회
    pub async fn get(
        &self,
        identity: &AuthenticatedUser,
        id: &str,
    ) -> Result<StoredFile, AppError> {
        let file = self
            .file_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

        assert_owner(&file.user_id, identity, "access this file")?;

        Ok(file)
    }

    /// 업로드 파일 저장
    ///
    /// 검증을 통과한 바이트를 `{MEDIA_ROOT}/uploads/` 아래 생성된 이름으로
    /// 기록하고 메타데이터를 저장합니다. 디스크 기록은 블로킹 풀에서
    /// 수행됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 타입/크기 검증 실패
    /// * `AppError::InternalError` - 디스크 기록 실패
    pub async fn store_upload(
        &self,
        identity: &AuthenticatedUser,
        original_name: String,
        content_type: String,
        data: Vec<u8>,
        description: Option<String>,
    ) -> Result<StoredFile, AppError> {
        validate_upload(&content_type, data.len())?;

        if original_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "No file was uploaded".to_string(),
            ));
        }

        let owner = owner_object_id(identity)?;
        let storage_name = generate_storage_name(&original_name);
        let relative_path = format!("uploads/{}", storage_name);

        let absolute_path = PathBuf::from(UploadConfig::media_root()).join(&relative_path);
        let file_size = data.len() as i64;

        actix_web::web::block(move || -> std::io::Result<()> {
            if let Some(parent) = absolute_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&absolute_path, &data)
        })
        .await
        .context("Blocking task failed")?
        .map_err(|e| AppError::InternalError(format!("Failed to write file: {}", e)))?;

        let file = StoredFile::new(
            owner,
            original_name,
            relative_path,
            content_type,
            file_size,
            clean_optional_string(description),
        );

        let created = self.file_repository.create(file).await?;

        log::info!(
            "파일 업로드됨 - 소유자: {}, 파일: {}, 크기: {} bytes",
            identity.user_id,
            created.file_name,
            created.file_size
        );

        Ok(created)
    }

    /// 다운로드 대상 해석
    ///
    /// 소유권 검사를 통과한 파일의 디스크 경로와 응답 컨텐츠 타입을
    /// 반환합니다. 메타데이터는 있으나 바이트가 디스크에 없으면 404입니다.
    pub async fn resolve_download(
        &self,
        identity: &AuthenticatedUser,
        id: &str,
    ) -> Result<(StoredFile, PathBuf, mime_guess::mime::Mime), AppError> {
        let file = self
            .file_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

        assert_owner(&file.user_id, identity, "download this file")?;

        let path = PathBuf::from(UploadConfig::media_root()).join(&file.storage_path);

        if !path.exists() {
            log::error!("메타데이터는 있으나 파일이 디스크에 없음: {:?}", path);
            return Err(AppError::NotFound("File not found".to_string()));
        }

        let content_type = mime_guess::from_path(&path).first_or_octet_stream();

        Ok((file, path, content_type))
    }

    /// 파일 삭제
    ///
    /// 메타데이터를 삭제한 뒤 디스크의 바이트 제거를 시도합니다.
    /// 바이트 제거 실패는 로그만 남기고 성공으로 처리합니다.
    pub async fn delete(&self, identity: &AuthenticatedUser, id: &str) -> Result<(), AppError> {
        let file = self
            .file_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

        assert_owner(&file.user_id, identity, "delete this file")?;

        let file_id = file
            .id
            .ok_or_else(|| AppError::InternalError("Stored file has no id".to_string()))?;

        let deleted = self.file_repository.delete(&file_id).await?;

        if !deleted {
            return Err(AppError::NotFound("File not found".to_string()));
        }

        let path = PathBuf::from(UploadConfig::media_root()).join(&file.storage_path);
        let removal = actix_web::web::block(move || std::fs::remove_file(&path))
            .await
            .context("Blocking task failed")?;

        if let Err(e) = removal {
            log::warn!("파일 바이트 삭제 실패 (메타데이터는 삭제됨): {}", e);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_upload_rejected_naming_allowed_types() {
        let result = validate_upload("image/png", 1024);

        match result {
            Err(AppError::ValidationError(msg)) => {
                assert!(msg.contains("PDF"));
                assert!(msg.contains("TXT"));
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_oversized_pdf_rejected_for_size() {
        let six_mib = 6 * 1024 * 1024;
        let result = validate_upload("application/pdf", six_mib);

        match result {
            Err(AppError::ValidationError(msg)) => {
                assert!(msg.contains("5MB"));
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_allowed_upload_passes() {
        assert!(validate_upload("application/pdf", 1024).is_ok());
        assert!(validate_upload("text/plain", UploadConfig::MAX_FILE_SIZE).is_ok());
        assert!(validate_upload("application/msword", 0).is_ok());
    }

    #[test]
    fn test_storage_name_keeps_extension_only() {
        let name = generate_storage_name("report.pdf");
        assert!(name.ends_with(".pdf"));
        assert!(!name.contains("report"));
    }

    #[test]
    fn test_storage_name_without_extension() {
        let name = generate_storage_name("README");
        assert!(!name.contains('.'));
    }
}
