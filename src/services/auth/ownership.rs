//! 리소스 소유권 검사
//!
//! 소유자 범위 리소스(주소, 전화번호, 파일)의 단건 조회/수정/삭제 경로에서
//! 공통으로 사용되는 인가 규칙입니다. 목록 조회는 이 검사를 사용하지 않고
//! 쿼리 단계에서 `user_id` 필터로 처리됩니다.
//!
//! 소유자가 아닌 리소스에 접근하면 404가 아니라 403을 반환합니다.
//! 존재 여부를 숨기는 것보다 권한 거부를 명시하는 기존 API 계약을 따릅니다.

use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::errors::AppError;
use mongodb::bson::oid::ObjectId;

/// 리소스 소유자와 요청 신원이 일치하는지 검사합니다.
///
/// # Arguments
///
/// * `owner` - 리소스의 `user_id` 필드
/// * `identity` - 인증 미들웨어가 해석한 현재 요청의 신원
/// * `action` - 에러 메시지에 들어갈 동작 설명 (예: "download this file")
///
/// # Errors
///
/// * `AppError::AuthorizationError` - 소유자 불일치 (403)
///
/// # Examples
///
/// ```rust,ignore
/// let file = file_repo.find_by_id(&id).await?
///     .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;
/// assert_owner(&file.user_id, &identity, "download this file")?;
/// ```
pub fn assert_owner(
    owner: &ObjectId,
    identity: &AuthenticatedUser,
    action: &str,
) -> Result<(), AppError> {
    if owner.to_hex() != identity.user_id {
        log::warn!(
            "소유권 불일치 - 요청자: {}, 리소스 소유자: {}",
            identity.user_id,
            owner.to_hex()
        );
        return Err(AppError::AuthorizationError(format!(
            "You do not have permission to {}",
            action
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_for(oid: &ObjectId) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: oid.to_hex(),
            email: "a@x.com".to_string(),
        }
    }

    #[test]
    fn test_owner_is_allowed() {
        let owner = ObjectId::new();
        let identity = identity_for(&owner);

        assert!(assert_owner(&owner, &identity, "update this address").is_ok());
    }

    #[test]
    fn test_other_user_is_forbidden() {
        let owner = ObjectId::new();
        let intruder = identity_for(&ObjectId::new());

        let result = assert_owner(&owner, &intruder, "delete this file");

        match result {
            Err(AppError::AuthorizationError(msg)) => {
                assert!(msg.contains("delete this file"));
            }
            _ => panic!("Expected AuthorizationError"),
        }
    }
}
