//! 전화번호 리포지토리 구현
//!
//! 소유자당 1개 제약을 가진 전화번호 엔티티의 데이터 액세스 계층입니다.

use crate::{
    core::registry::Repository,
    db::Database,
    domain::entities::phones::phone_number::PhoneNumber,
    errors::errors::AppError,
};
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use singleton_macro::repository;
use std::sync::Arc;

/// 전화번호 데이터 액세스 리포지토리
#[repository(name = "phone", collection = "phone_numbers")]
pub struct PhoneRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
}

impl PhoneRepository {
    /// 소유자의 전화번호 목록 조회
    ///
    /// 1:1 제약이 있으므로 실제로는 0개 또는 1개가 반환되지만,
    /// 목록 API 계약을 위해 벡터 형태를 유지합니다.
    pub async fn find_by_owner(&self, owner: &ObjectId) -> Result<Vec<PhoneNumber>, AppError> {
        let cursor = self
            .collection::<PhoneNumber>()
            .find(doc! { "user_id": *owner })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소유자에게 전화번호가 이미 존재하는지 확인
    ///
    /// 생성 시점의 1:1 제약 검사에 사용됩니다.
    pub async fn exists_for_owner(&self, owner: &ObjectId) -> Result<bool, AppError> {
        let count = self
            .collection::<PhoneNumber>()
            .count_documents(doc! { "user_id": *owner })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    /// ID로 전화번호 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<PhoneNumber>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid phone id format".to_string()))?;

        self.collection::<PhoneNumber>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 전화번호 저장
    pub async fn create(&self, mut phone: PhoneNumber) -> Result<PhoneNumber, AppError> {
        let result = self
            .collection::<PhoneNumber>()
            .insert_one(&phone)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        phone.id = result.inserted_id.as_object_id();

        Ok(phone)
    }

    /// 전화번호 업데이트
    pub async fn update(
        &self,
        id: &ObjectId,
        update_doc: Document,
    ) -> Result<Option<PhoneNumber>, AppError> {
        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<PhoneNumber>()
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전화번호 삭제
    pub async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection::<PhoneNumber>()
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
