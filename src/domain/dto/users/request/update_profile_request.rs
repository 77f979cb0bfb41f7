//! 프로필 수정 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 표시 이름 수정 요청
///
/// 현재 프로필에서 수정 가능한 필드는 표시 이름뿐입니다.
/// 이메일은 계정 식별자이므로 수정 대상이 아닙니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(custom(function = "validate_name_not_blank"))]
    pub name: String,
}

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

    #[test]
    fn test_blank_name_rejected() {
        let req = UpdateProfileRequest {
            name: "   ".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_valid_name_passes() {
        let req = UpdateProfileRequest {
            name: "New Name".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
