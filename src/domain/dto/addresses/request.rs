//! 주소 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 주소 생성 요청
///
/// `is_primary`를 생략하면 일반 주소로 생성됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAddressRequest {
    #[validate(length(min = 1, max = 255, message = "Street is required"))]
    pub street: String,

    #[validate(length(min = 1, max = 100, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 1, max = 100, message = "State is required"))]
    pub state: String,

    #[validate(length(min = 1, max = 20, message = "Postal code is required"))]
    pub postal_code: String,

    #[validate(length(min = 1, max = 100, message = "Country is required"))]
    pub country: String,

    /// 대표 주소로 생성할지 여부 (기본값: false)
    #[serde(default)]
    pub is_primary: bool,
}

/// 주소 수정 요청
///
/// PATCH(부분 수정)와 PUT 모두 이 구조체를 사용하며,
/// 생략된 필드는 기존 값을 유지합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAddressRequest {
    #[validate(length(min = 1, max = 255, message = "Street cannot be empty"))]
    pub street: Option<String>,

    #[validate(length(min = 1, max = 100, message = "City cannot be empty"))]
    pub city: Option<String>,

    #[validate(length(min = 1, max = 100, message = "State cannot be empty"))]
    pub state: Option<String>,

    #[validate(length(min = 1, max = 20, message = "Postal code cannot be empty"))]
    pub postal_code: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Country cannot be empty"))]
    pub country: Option<String>,

    /// 대표 주소 플래그 변경
    ///
    /// `true`로 변경되는 경우에만 다른 주소들의 플래그가 재조정됩니다.
    pub is_primary: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_to_non_primary() {
        let json = r#"{"street":"1 Main","city":"Seoul","state":"Seoul","postal_code":"04524","country":"KR"}"#;
        let req: CreateAddressRequest = serde_json::from_str(json).unwrap();

        assert!(!req.is_primary);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_empty_street() {
        let json = r#"{"street":"","city":"Seoul","state":"Seoul","postal_code":"04524","country":"KR"}"#;
        let req: CreateAddressRequest = serde_json::from_str(json).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_allows_partial_body() {
        let json = r#"{"is_primary":true}"#;
        let req: UpdateAddressRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.is_primary, Some(true));
        assert!(req.street.is_none());
        assert!(req.validate().is_ok());
    }
}
