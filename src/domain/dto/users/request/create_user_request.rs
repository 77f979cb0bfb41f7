//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 이메일 중복 검사는 저장소 조회가 필요하므로 서비스 계층에서 수행됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이메일 주소 (시스템 전체에서 유니크)
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    /// 표시 이름 (공백만으로는 구성될 수 없음)
    #[validate(custom(function = "validate_name_not_blank"))]
    pub name: String,

    /// 계정 비밀번호 (평문, 서버에서 bcrypt로 해싱됨)
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// 이름이 공백만으로 구성되지 않았는지 검증
fn validate_name_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank_name")
            .with_message("Please enter a valid name".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, name: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("a@x.com", "A", "p1").validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        assert!(request("not-an-email", "A", "p1").validate().is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(request("a@x.com", "   ", "p1").validate().is_err());
        assert!(request("a@x.com", "", "p1").validate().is_err());
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(request("a@x.com", "A", "").validate().is_err());
    }
}
