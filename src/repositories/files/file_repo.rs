//! 파일 메타데이터 리포지토리 구현
//!
//! 업로드 파일의 메타데이터를 관리합니다. 실제 바이트는 디스크에 있으며,
//! 디스크 경로는 `storage_path` 필드로 연결됩니다.

use crate::{
    core::registry::Repository,
    db::Database,
    domain::entities::files::stored_file::StoredFile,
    errors::errors::AppError,
};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use singleton_macro::repository;
use std::sync::Arc;

/// 파일 메타데이터 데이터 액세스 리포지토리
#[repository(name = "file", collection = "files")]
pub struct FileRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
}

impl FileRepository {
    /// 소유자의 파일 목록 조회
    pub async fn find_by_owner(&self, owner: &ObjectId) -> Result<Vec<StoredFile>, AppError> {
        let cursor = self
            .collection::<StoredFile>()
            .find(doc! { "user_id": *owner })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 파일 메타데이터 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<StoredFile>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid file id format".to_string()))?;

        self.collection::<StoredFile>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 파일 메타데이터 저장
    pub async fn create(&self, mut file: StoredFile) -> Result<StoredFile, AppError> {
        let result = self
            .collection::<StoredFile>()
            .insert_one(&file)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        file.id = result.inserted_id.as_object_id();

        Ok(file)
    }

    /// 파일 메타데이터 삭제
    pub async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection::<StoredFile>()
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
