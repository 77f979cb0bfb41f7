//! # 주소 리포지토리 구현
//!
//! 주소 엔티티의 데이터 액세스 계층입니다.
//! 대표 주소(primary) 플래그의 "clear 후 write" 재조정을 하나의
//! 클라이언트 세션 트랜잭션으로 묶어, 같은 소유자의 동시 요청이
//! 두 개의 대표 주소를 남기는 경합을 차단합니다.

use crate::{
    core::registry::Repository,
    db::Database,
    domain::entities::addresses::address::Address,
    errors::errors::AppError,
};
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use singleton_macro::repository;
use std::sync::Arc;

/// 주소 데이터 액세스 리포지토리
///
/// 모든 목록 조회는 쿼리 단계에서 `user_id`로 필터링됩니다.
#[repository(name = "address", collection = "addresses")]
pub struct AddressRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
}

impl AddressRepository {
    /// 소유자의 모든 주소 조회
    pub async fn find_by_owner(&self, owner: &ObjectId) -> Result<Vec<Address>, AppError> {
        let cursor = self
            .collection::<Address>()
            .find(doc! { "user_id": *owner })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 주소 조회
    ///
    /// 소유자 필터 없이 primary key로 조회합니다. 소유권 검사는
    /// 조회 결과를 받은 서비스 계층에서 수행됩니다 (소유자 불일치는
    /// 404가 아니라 403으로 구분하기 위함).
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Address>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid address id format".to_string()))?;

        self.collection::<Address>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 주소 저장
    ///
    /// `is_primary = true`인 주소는 같은 소유자의 기존 대표 플래그를
    /// 모두 해제한 뒤 삽입하며, 두 단계는 하나의 트랜잭션으로 커밋됩니다.
    /// 일반 주소는 재조정 없이 바로 삽입됩니다.
    pub async fn create(&self, mut address: Address) -> Result<Address, AppError> {
        if !address.is_primary {
            let result = self
                .collection::<Address>()
                .insert_one(&address)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            address.id = result.inserted_id.as_object_id();
            return Ok(address);
        }

        let mut session = self
            .db
            .client()
            .start_session()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        session
            .start_transaction()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let outcome = async {
            self.collection::<Address>()
                .update_many(
                    doc! { "user_id": address.user_id, "is_primary": true },
                    doc! { "$set": { "is_primary": false } },
                )
                .session(&mut session)
                .await?;

            self.collection::<Address>()
                .insert_one(&address)
                .session(&mut session)
                .await
        }
        .await;

        match outcome {
            Ok(result) => {
                session
                    .commit_transaction()
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                address.id = result.inserted_id.as_object_id();
                Ok(address)
            }
            Err(e) => {
                let _ = session.abort_transaction().await;
                Err(AppError::DatabaseError(e.to_string()))
            }
        }
    }

    /// 주소 업데이트
    ///
    /// `clear_others`가 true이면 같은 소유자의 다른 주소들에서 대표 플래그를
    /// 해제한 뒤 업데이트를 적용하며, 두 단계는 하나의 트랜잭션으로 커밋됩니다.
    /// 수정 대상 주소 자신은 해제 대상에서 제외됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Address))` - 업데이트된 주소
    /// * `Ok(None)` - 해당 ID의 주소가 존재하지 않음
    pub async fn update(
        &self,
        owner: &ObjectId,
        id: &ObjectId,
        update_doc: Document,
        clear_others: bool,
    ) -> Result<Option<Address>, AppError> {
        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        if !clear_others {
            return self
                .collection::<Address>()
                .find_one_and_update(doc! { "_id": *id }, doc! { "$set": update_doc })
                .with_options(options)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()));
        }

        let mut session = self
            .db
            .client()
            .start_session()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        session
            .start_transaction()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let outcome = async {
            self.collection::<Address>()
                .update_many(
                    doc! { "user_id": *owner, "_id": { "$ne": *id } },
                    doc! { "$set": { "is_primary": false } },
                )
                .session(&mut session)
                .await?;

            self.collection::<Address>()
                .find_one_and_update(doc! { "_id": *id }, doc! { "$set": update_doc })
                .with_options(options)
                .session(&mut session)
                .await
        }
        .await;

        match outcome {
            Ok(updated) => {
                session
                    .commit_transaction()
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;
                Ok(updated)
            }
            Err(e) => {
                let _ = session.abort_transaction().await;
                Err(AppError::DatabaseError(e.to_string()))
            }
        }
    }

    /// 주소 삭제
    ///
    /// 대표 주소를 삭제해도 다른 주소가 자동 승격되지 않습니다.
    /// 소유자에게 대표 주소가 없는 상태는 허용됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 해당 ID의 주소가 존재하지 않음
    pub async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection::<Address>()
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 소유자 기준 목록 조회가 가장 빈번한 경로이므로 `user_id` 인덱스를
    /// 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let owner_index = mongodb::IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(
                mongodb::options::IndexOptions::builder()
                    .name("owner".to_string())
                    .build(),
            )
            .build();

        self.collection::<Address>()
            .create_index(owner_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
