//! 사용자 응답 DTO

use crate::domain::entities::users::user::User;
use serde::{Deserialize, Serialize};

/// 사용자 응답 DTO
///
/// 비밀번호 해시 등 민감한 정보를 제외한 공개 프로필입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            email: user.email,
            name: user.name,
        }
    }
}

/// 로그인/회원가입 응답 DTO (JWT 토큰 포함)
///
/// 원래 프론트엔드 계약에 맞춰 `access`/`refresh` 필드명을 사용합니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthTokensResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserResponse,
}

/// 토큰 갱신 응답 DTO
///
/// 회전(rotation)이 비활성화되어 있으므로 새 액세스 토큰만 반환합니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub access: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_user_response_excludes_password_hash() {
        let mut user = User::new(
            "a@x.com".to_string(),
            "A".to_string(),
            "$2b$04$secret-hash".to_string(),
        );
        user.id = Some(ObjectId::new());

        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("password"));
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("a@x.com"));
    }
}
