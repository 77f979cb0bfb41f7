//! PhoneNumber Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 전화번호 엔티티
///
/// 소유자당 최대 1개만 존재할 수 있습니다. 이 제약은 생성 시점에만
/// 검사되며, 기존 번호의 수정은 항상 허용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneNumber {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유자 참조 (불변)
    pub user_id: ObjectId,
    pub number: String,
}

impl PhoneNumber {
    /// 새 전화번호 생성
    pub fn new(user_id: ObjectId, number: String) -> Self {
        Self {
            id: None,
            user_id,
            number,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
