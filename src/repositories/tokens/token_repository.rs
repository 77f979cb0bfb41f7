//! 리프레시 토큰 블랙리스트 리포지토리
//!
//! Redis를 사용하여 로그아웃된 리프레시 토큰의 식별자(JTI)를 추적합니다.
//! 각 항목의 TTL을 토큰의 남은 수명과 동일하게 설정하므로
//! 블랙리스트는 토큰이 자연 만료되는 시점 이후로 커지지 않습니다.
//!
//! 액세스 토큰은 블랙리스트 대상이 아닙니다. 서명과 만료 시간만으로
//! 상태 없이 검증되며, 짧은 수명(15분)이 노출 창을 제한합니다.

use crate::caching::redis::RedisClient;
use crate::core::registry::Repository;
use crate::errors::errors::AppError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use singleton_macro::repository;
use std::sync::Arc;

/// 블랙리스트 항목의 최소 TTL (초)
///
/// Redis는 0 TTL을 허용하지 않으므로, 만료 직전 토큰도 짧게나마
/// 블랙리스트에 남도록 하한을 둡니다.
const MIN_BLACKLIST_TTL_SECS: u64 = 60;

/// 리프레시 토큰 블랙리스트 Repository
///
/// 키 패턴: `blacklist_token:{jti}`
#[repository(name = "token", collection = "tokens")]
pub struct TokenRepository {
    redis: Arc<RedisClient>,
}

/// 블랙리스트 토큰 정보
///
/// 운영 중 감사(audit)를 위해 무효화 시점과 원래 만료 시간을 함께 기록합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlacklistedTokenInfo {
    /// JWT ID (토큰 고유 식별자)
    pub jti: String,
    /// 사용자 ID
    pub user_id: String,
    /// 블랙리스트 추가 시간 (Unix timestamp)
    pub blacklisted_at: i64,
    /// 원래 토큰의 만료 시간 (Unix timestamp)
    pub original_exp: i64,
}

impl TokenRepository {
    /// 리프레시 토큰을 블랙리스트에 추가
    ///
    /// # Arguments
    /// * `jti` - 토큰의 JWT ID 클레임
    /// * `user_id` - 토큰 주체 사용자 ID
    /// * `original_exp` - 토큰의 원래 만료 시간 (Unix timestamp)
    /// * `ttl_seconds` - TTL (남은 토큰 수명과 동일하게 설정)
    ///
    /// # Example
    /// ```rust,ignore
    /// repo.blacklist_refresh_token(&claims.jti, &claims.sub, claims.exp, remaining).await?;
    /// ```
    pub async fn blacklist_refresh_token(
        &self,
        jti: &str,
        user_id: &str,
        original_exp: i64,
        ttl_seconds: u64,
    ) -> Result<(), AppError> {
        let key = format!("blacklist_token:{}", jti);

        let safe_ttl = if ttl_seconds < MIN_BLACKLIST_TTL_SECS {
            log::warn!(
                "블랙리스트 TTL이 너무 작습니다 ({}초). 최소값 {}초로 설정합니다.",
                ttl_seconds,
                MIN_BLACKLIST_TTL_SECS
            );
            MIN_BLACKLIST_TTL_SECS
        } else {
            ttl_seconds
        };

        let info = BlacklistedTokenInfo {
            jti: jti.to_string(),
            user_id: user_id.to_string(),
            blacklisted_at: Utc::now().timestamp(),
            original_exp,
        };

        self.redis
            .set_with_expiry(&key, &info, safe_ttl)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        log::info!(
            "리프레시 토큰이 블랙리스트에 추가됨 - JTI: {}, 사용자: {}, TTL: {}초",
            jti,
            user_id,
            safe_ttl
        );
        Ok(())
    }

    /// 리프레시 토큰이 블랙리스트에 있는지 확인
    ///
    /// # Returns
    /// * `true` - 블랙리스트에 있음 (사용 불가)
    /// * `false` - 블랙리스트에 없음 (사용 가능)
    pub async fn is_token_blacklisted(&self, jti: &str) -> Result<bool, AppError> {
        let key = format!("blacklist_token:{}", jti);

        self.redis
            .exists(&key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}
