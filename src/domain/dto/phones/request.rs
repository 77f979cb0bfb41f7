//! 전화번호 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 전화번호 생성 요청
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePhoneRequest {
    #[validate(length(min = 1, max = 20, message = "Phone number is required"))]
    pub number: String,
}

/// 전화번호 수정 요청
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePhoneRequest {
    #[validate(length(min = 1, max = 20, message = "Phone number cannot be empty"))]
    pub number: String,
}
