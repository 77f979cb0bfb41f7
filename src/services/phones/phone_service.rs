//! 전화번호 관리 서비스 구현
//!
//! 소유자당 전화번호 1개 제약을 적용합니다. 제약은 생성 시점에만
//! 검사되며, 기존 번호의 수정/삭제는 소유자라면 항상 허용됩니다.

use crate::{
    domain::dto::phones::request::{CreatePhoneRequest, UpdatePhoneRequest},
    domain::entities::phones::phone_number::PhoneNumber,
    domain::models::auth::authenticated_user::AuthenticatedUser,
    errors::errors::AppError,
    repositories::phones::phone_repo::PhoneRepository,
    services::auth::ownership::assert_owner,
};
use mongodb::bson::{doc, oid::ObjectId};
use singleton_macro::service;
use std::sync::Arc;

/// 전화번호 관리 서비스
#[service(name = "phone")]
pub struct PhoneService {
    phone_repository: Arc<PhoneRepository>,
}

fn owner_object_id(identity: &AuthenticatedUser) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(&identity.user_id)
        .map_err(|_| AppError::InternalError("Invalid identity user id".to_string()))
}

impl PhoneService {
    /// 소유자의 전화번호 목록 조회
    pub async fn list(&self, identity: &AuthenticatedUser) -> Result<Vec<PhoneNumber>, AppError> {
        let owner = owner_object_id(identity)?;
        self.phone_repository.find_by_owner(&owner).await
    }

    /// 단건 전화번호 조회
    pub async fn get(
        &self,
        identity: &AuthenticatedUser,
        id: &str,
    ) -> Result<PhoneNumber, AppError> {
        let phone = self
            .phone_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Phone number not found".to_string()))?;

        assert_owner(&phone.user_id, identity, "access this phone number")?;

        Ok(phone)
    }

    /// 새 전화번호 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 소유자에게 이미 전화번호가 존재
    pub async fn create(
        &self,
        identity: &AuthenticatedUser,
        request: CreatePhoneRequest,
    ) -> Result<PhoneNumber, AppError> {
        let owner = owner_object_id(identity)?;

        if self.phone_repository.exists_for_owner(&owner).await? {
            return Err(AppError::ValidationError(
                "User can only have one phone number. Please edit the existing number instead."
                    .to_string(),
            ));
        }

        let phone = PhoneNumber::new(owner, request.number);

        self.phone_repository.create(phone).await
    }

    /// 전화번호 수정
    pub async fn update(
        &self,
        identity: &AuthenticatedUser,
        id: &str,
        request: UpdatePhoneRequest,
    ) -> Result<PhoneNumber, AppError> {
        let existing = self.get(identity, id).await?;
        let phone_id = existing
            .id
            .ok_or_else(|| AppError::InternalError("Stored phone number has no id".to_string()))?;

        self.phone_repository
            .update(&phone_id, doc! { "number": request.number })
            .await?
            .ok_or_else(|| AppError::NotFound("Phone number not found".to_string()))
    }

    /// 전화번호 삭제
    pub async fn delete(&self, identity: &AuthenticatedUser, id: &str) -> Result<(), AppError> {
        let existing = self.get(identity, id).await?;
        let phone_id = existing
            .id
            .ok_or_else(|| AppError::InternalError("Stored phone number has no id".to_string()))?;

        let deleted = self.phone_repository.delete(&phone_id).await?;

        if !deleted {
            return Err(AppError::NotFound("Phone number not found".to_string()));
        }

        Ok(())
    }
}
