//! 주소 응답 DTO

use crate::domain::entities::addresses::address::Address;
use serde::{Deserialize, Serialize};

/// 주소 응답 DTO
///
/// 소유자 ObjectId는 노출하지 않습니다. 소유자는 항상 요청의
/// 인증된 사용자 본인이기 때문입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressResponse {
    pub id: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub is_primary: bool,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id_string().unwrap_or_default(),
            street: address.street,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
            country: address.country,
            is_primary: address.is_primary,
        }
    }
}
