//! # 주소 관리 서비스 구현
//!
//! 소유자 범위 주소 CRUD와 대표 주소(primary) 불변식 유지를 담당합니다.
//!
//! ## 대표 주소 불변식
//!
//! 한 소유자는 관찰 가능한 어느 시점에도 최대 하나의 대표 주소만 가집니다.
//!
//! - **생성**: 대표 주소로 생성하는 경우, 같은 소유자의 기존 대표 플래그를
//!   모두 해제한 뒤 삽입 (리포지토리가 두 단계를 한 트랜잭션으로 커밋)
//! - **수정**: 대표가 아니던 주소를 대표로 바꾸는 경우에만 재조정 수행.
//!   이미 대표인 주소의 수정이나 플래그와 무관한 수정은 재조정하지 않음
//! - **삭제**: 대표 주소를 삭제해도 다른 주소를 자동 승격하지 않음.
//!   대표 주소가 없는 상태는 허용

use crate::{
    domain::dto::addresses::request::{CreateAddressRequest, UpdateAddressRequest},
    domain::entities::addresses::address::Address,
    domain::models::auth::authenticated_user::AuthenticatedUser,
    errors::errors::AppError,
    repositories::addresses::address_repo::AddressRepository,
    services::auth::ownership::assert_owner,
};
use mongodb::bson::{Document, oid::ObjectId};
use singleton_macro::service;
use std::sync::Arc;

/// 주소 관리 서비스
#[service(name = "address")]
pub struct AddressService {
    address_repository: Arc<AddressRepository>,
}

/// 수정 요청이 대표 플래그 재조정을 필요로 하는지 판정합니다.
///
/// 요청이 `is_primary = true`로 변경을 시도하고, 저장된 값이 `false`일 때만
/// 다른 주소들의 플래그 해제가 필요합니다.
fn needs_rebalance(requested_primary: Option<bool>, stored_primary: bool) -> bool {
    requested_primary == Some(true) && !stored_primary
}

/// 신원에서 소유자 ObjectId를 파싱합니다.
fn owner_object_id(identity: &AuthenticatedUser) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(&identity.user_id)
        .map_err(|_| AppError::InternalError("Invalid identity user id".to_string()))
}

impl AddressService {
    /// 소유자의 주소 목록 조회
    ///
    /// 쿼리 단계에서 소유자로 필터링되므로 다른 사용자의 주소는
    /// 결과에 포함될 수 없습니다.
    pub async fn list(&self, identity: &AuthenticatedUser) -> Result<Vec<Address>, AppError> {
        let owner = owner_object_id(identity)?;
        self.address_repository.find_by_owner(&owner).await
    }

    /// 단건 주소 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 주소가 존재하지 않음
    /// * `AppError::AuthorizationError` - 다른 소유자의 주소
    pub async fn get(
        &self,
        identity: &AuthenticatedUser,
        id: &str,
    ) -> Result<Address, AppError> {
        let address = self
            .address_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Address not found".to_string()))?;

        assert_owner(&address.user_id, identity, "access this address")?;

        Ok(address)
    }

    /// 새 주소 생성
    ///
    /// `is_primary = true` 요청이면 리포지토리가 기존 대표 플래그 해제와
    /// 삽입을 한 트랜잭션으로 수행합니다.
    pub async fn create(
        &self,
        identity: &AuthenticatedUser,
        request: CreateAddressRequest,
    ) -> Result<Address, AppError> {
        let owner = owner_object_id(identity)?;

        let address = Address::new(
            owner,
            request.street,
            request.city,
            request.state,
            request.postal_code,
            request.country,
            request.is_primary,
        );

        let created = self.address_repository.create(address).await?;

        if created.is_primary {
            log::info!(
                "대표 주소 변경됨 - 소유자: {}, 주소: {}",
                identity.user_id,
                created.id_string().unwrap_or_default()
            );
        }

        Ok(created)
    }

    /// 주소 수정
    ///
    /// 대표가 아니던 주소가 대표로 바뀌는 경우에만 다른 주소들의 플래그를
    /// 해제하며, 해제와 수정은 한 트랜잭션으로 커밋됩니다.
    pub async fn update(
        &self,
        identity: &AuthenticatedUser,
        id: &str,
        request: UpdateAddressRequest,
    ) -> Result<Address, AppError> {
        let existing = self.get(identity, id).await?;
        let owner = owner_object_id(identity)?;
        let address_id = existing
            .id
            .ok_or_else(|| AppError::InternalError("Stored address has no id".to_string()))?;

        let clear_others = needs_rebalance(request.is_primary, existing.is_primary);

        let mut update_doc = Document::new();
        if let Some(street) = request.street {
            update_doc.insert("street", street);
        }
        if let Some(city) = request.city {
            update_doc.insert("city", city);
        }
        if let Some(state) = request.state {
            update_doc.insert("state", state);
        }
        if let Some(postal_code) = request.postal_code {
            update_doc.insert("postal_code", postal_code);
        }
        if let Some(country) = request.country {
            update_doc.insert("country", country);
        }
        if let Some(is_primary) = request.is_primary {
            update_doc.insert("is_primary", is_primary);
        }

        // 변경할 필드가 없으면 저장된 상태를 그대로 반환
        if update_doc.is_empty() {
            return Ok(existing);
        }

        let updated = self
            .address_repository
            .update(&owner, &address_id, update_doc, clear_others)
            .await?
            .ok_or_else(|| AppError::NotFound("Address not found".to_string()))?;

        if clear_others {
            log::info!(
                "대표 주소 변경됨 - 소유자: {}, 주소: {}",
                identity.user_id,
                updated.id_string().unwrap_or_default()
            );
        }

        Ok(updated)
    }

    /// 주소 삭제
    ///
    /// 삭제된 주소가 대표 주소였더라도 다른 주소를 승격하지 않습니다.
    pub async fn delete(&self, identity: &AuthenticatedUser, id: &str) -> Result<(), AppError> {
        let existing = self.get(identity, id).await?;
        let address_id = existing
            .id
            .ok_or_else(|| AppError::InternalError("Stored address has no id".to_string()))?;

        let deleted = self.address_repository.delete(&address_id).await?;

        if !deleted {
            return Err(AppError::NotFound("Address not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_primary_on_non_primary_rebalances() {
        assert!(needs_rebalance(Some(true), false));
    }

    #[test]
    fn test_already_primary_address_does_not_rebalance() {
        assert!(!needs_rebalance(Some(true), true));
    }

    #[test]
    fn test_clearing_primary_does_not_rebalance() {
        assert!(!needs_rebalance(Some(false), false));
        assert!(!needs_rebalance(Some(false), true));
    }

    #[test]
    fn test_untouched_flag_does_not_rebalance() {
        assert!(!needs_rebalance(None, false));
        assert!(!needs_rebalance(None, true));
    }
}
