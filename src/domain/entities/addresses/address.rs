//! Address Entity Implementation
//!
//! 사용자 소유 주소 엔티티입니다.
//! 소유자당 최대 하나의 주소만 `is_primary = true`를 가질 수 있으며,
//! 이 불변식은 AddressRepository의 트랜잭션 기반 재조정 로직이 유지합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 주소 엔티티
///
/// `user_id`는 생성 이후 변경되지 않으며, 모든 조회/수정 경로는
/// 소유자 기준으로 필터링됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유자 참조 (불변)
    pub user_id: ObjectId,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    /// 대표 주소 플래그
    ///
    /// 소유자당 최대 1개만 true. 대표 주소 삭제 시 다른 주소가
    /// 자동 승격되지는 않습니다.
    pub is_primary: bool,
}

impl Address {
    /// 새 주소 생성
    pub fn new(
        user_id: ObjectId,
        street: String,
        city: String,
        state: String,
        postal_code: String,
        country: String,
        is_primary: bool,
    ) -> Self {
        Self {
            id: None,
            user_id,
            street,
            city,
            state,
            postal_code,
            country,
            is_primary,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
