//! JWT 인증 토큰 구조체 및 페어링 된 세트
//!
//! RFC 7519 JWT 표준 클레임과 2개의 용도별 토큰을 페어링 한 정보를 표시합니다.

use serde::{Deserialize, Serialize};

/// 토큰 용도 구분
///
/// 액세스 토큰과 리프레시 토큰은 동일한 비밀키로 서명되므로,
/// `token_type` 클레임으로 용도를 구분하여 리프레시 토큰이
/// API 접근에 사용되는 것을 막습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// API 접근용 단기 토큰
    Access,
    /// 액세스 토큰 갱신용 장기 토큰
    Refresh,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `jti`: 토큰 고유 식별자 (리프레시 토큰 블랙리스트 키로 사용)
/// - `token_type`: 토큰 용도 (access / refresh)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 토큰 고유 식별자
    pub jti: String,
    /// 토큰 용도
    pub token_type: TokenType,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// 현재 시점 기준으로 남은 수명을 초 단위로 반환합니다.
    ///
    /// 이미 만료된 토큰은 0을 반환합니다. 블랙리스트 항목의 TTL로
    /// 사용되어 블랙리스트가 토큰 수명 이상으로 커지지 않게 합니다.
    pub fn remaining_lifetime_secs(&self, now: i64) -> u64 {
        if self.exp > now {
            (self.exp - now) as u64
        } else {
            0
        }
    }
}

/// JWT 토큰 쌍 구조체
///
/// 클라이언트에게 전달되는 토큰 집합을 나타냅니다.
/// OAuth 2.0 표준의 토큰 응답 형식을 따릅니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰, 선택사항)
    pub refresh_token: Option<String>,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(exp: i64) -> TokenClaims {
        TokenClaims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            jti: "test-jti".to_string(),
            token_type: TokenType::Refresh,
            iat: 0,
            exp,
        }
    }

    #[test]
    fn test_remaining_lifetime_counts_down_to_expiry() {
        let c = claims(1_000);
        assert_eq!(c.remaining_lifetime_secs(400), 600);
    }

    #[test]
    fn test_remaining_lifetime_is_zero_after_expiry() {
        let c = claims(1_000);
        assert_eq!(c.remaining_lifetime_secs(1_000), 0);
        assert_eq!(c.remaining_lifetime_secs(5_000), 0);
    }

    #[test]
    fn test_token_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TokenType::Access).unwrap(),
            "\"access\""
        );
        assert_eq!(
            serde_json::to_string(&TokenType::Refresh).unwrap(),
            "\"refresh\""
        );
    }
}
