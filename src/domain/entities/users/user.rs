//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/패스워드 기반 로컬 인증 사용자 모델을 제공합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 이메일은 저장된 형태 그대로(대소문자 구분) 유니크 제약을 가집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 표시 이름
    pub name: String,
    /// bcrypt로 해시된 비밀번호
    pub password_hash: String,
    /// 계정 활성화 여부
    ///
    /// 비활성 계정은 로그인과 토큰 갱신이 거부됩니다.
    pub is_active: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 활성화된 상태로 시작하며, ID는 저장 시점에 MongoDB가 할당합니다.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            name,
            password_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_active_without_id() {
        let user = User::new(
            "a@x.com".to_string(),
            "A".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert!(user.is_active);
        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_id_string_matches_object_id_hex() {
        let oid = ObjectId::new();
        let mut user = User::new(
            "a@x.com".to_string(),
            "A".to_string(),
            "$2b$04$hash".to_string(),
        );
        user.id = Some(oid);

        assert_eq!(user.id_string(), Some(oid.to_hex()));
    }
}
