//! 전화번호 응답 DTO

use crate::domain::entities::phones::phone_number::PhoneNumber;
use serde::{Deserialize, Serialize};

/// 전화번호 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneResponse {
    pub id: String,
    pub number: String,
}

impl From<PhoneNumber> for PhoneResponse {
    fn from(phone: PhoneNumber) -> Self {
        Self {
            id: phone.id_string().unwrap_or_default(),
            number: phone.number,
        }
    }
}
