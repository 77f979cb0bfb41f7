//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성, 검증, 갱신, 무효화를 담당합니다.
//!
//! 서명/검증은 비밀키와 클레임만의 순수 함수로 분리되어 있고,
//! 블랙리스트 조회는 리프레시 토큰 검증 경로에만 합성됩니다.
//! 액세스 토큰은 상태 없이 서명과 만료 시간만으로 검증됩니다.

use crate::{
    config::JwtConfig,
    domain::entities::users::user::User,
    domain::models::token::token::{TokenClaims, TokenPair, TokenType},
    errors::errors::AppError,
    repositories::tokens::token_repository::TokenRepository,
    repositories::users::user_repo::UserRepository,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use singleton_macro::service;
use std::sync::Arc;
use uuid::Uuid;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 JWT 토큰을 생성하고 검증합니다.
/// 액세스 토큰(15분)과 리프레시 토큰(7일)을 지원하며,
/// 리프레시 토큰은 로그아웃 시 블랙리스트로 무효화됩니다.
/// 갱신 시 리프레시 토큰은 회전되지 않고 만료까지 재사용됩니다.
#[service(name = "token")]
pub struct TokenService {
    user_repository: Arc<UserRepository>,
    token_repository: Arc<TokenRepository>,
}

/// 클레임을 서명하여 JWT 문자열을 생성합니다.
///
/// 비밀키와 클레임만의 순수 함수입니다.
fn sign_claims(secret: &str, claims: &TokenClaims) -> Result<String, AppError> {
    let header = Header::default();
    let encoding_key = EncodingKey::from_secret(secret.as_ref());

    encode(&header, claims, &encoding_key)
        .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
}

/// JWT 문자열을 검증하고 클레임을 추출합니다.
///
/// 서명과 만료 시간을 검증하는 순수 함수이며, 블랙리스트는 조회하지 않습니다.
fn decode_claims(secret: &str, token: &str) -> Result<TokenClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    decode::<TokenClaims>(token, &decoding_key, &validation)
        .map(|token_data| token_data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::AuthenticationError("Token has expired".to_string())
            }
            jsonwebtoken::errors::ErrorKind::InvalidToken
            | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                AppError::AuthenticationError("Invalid token".to_string())
            }
            _ => AppError::AuthenticationError(format!("Token verification failed: {}", e)),
        })
}

/// 클레임의 토큰 용도가 기대한 용도와 일치하는지 확인합니다.
///
/// 리프레시 토큰으로 API에 접근하거나, 액세스 토큰으로 갱신을
/// 시도하는 교차 사용을 차단합니다.
fn ensure_token_type(claims: &TokenClaims, expected: TokenType) -> Result<(), AppError> {
    if claims.token_type != expected {
        return Err(AppError::AuthenticationError(
            "Invalid token type".to_string(),
        ));
    }
    Ok(())
}

/// 용도별 클레임 집합을 구성합니다.
fn build_claims(user_id: String, token_type: TokenType, lifetime: Duration) -> TokenClaims {
    let now = Utc::now();

    TokenClaims {
        sub: user_id,
        jti: Uuid::new_v4().to_string(),
        token_type,
        iat: now.timestamp(),
        exp: (now + lifetime).timestamp(),
    }
}

impl TokenService {
    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패 또는 사용자 ID 없음
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("User has no id".to_string()))?;

        let claims = build_claims(
            user_id,
            TokenType::Access,
            Duration::minutes(JwtConfig::access_expiration_minutes()),
        );

        sign_claims(&JwtConfig::secret(), &claims)
    }

    /// 사용자를 위한 리프레시 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패 또는 사용자 ID 없음
    pub fn generate_refresh_token(&self, user: &User) -> Result<String, AppError> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("User has no id".to_string()))?;

        let claims = build_claims(
            user_id,
            TokenType::Refresh,
            Duration::days(JwtConfig::refresh_expiration_days()),
        );

        sign_claims(&JwtConfig::secret(), &claims)
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_pair = token_service.generate_token_pair(&user)?;
    /// println!("Access token: {}", token_pair.access_token);
    /// println!("Expires in: {} seconds", token_pair.expires_in);
    /// ```
    pub fn generate_token_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        let access_token = self.generate_access_token(user)?;
        let refresh_token = self.generate_refresh_token(user)?;
        let expires_in = JwtConfig::access_expiration_minutes() * 60; // 초 단위로 변환

        Ok(TokenPair {
            access_token,
            refresh_token: Some(refresh_token),
            expires_in,
        })
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명, 만료 시간, 토큰 용도를 검증합니다.
    /// 블랙리스트 조회가 필요한 리프레시 토큰은
    /// [`TokenService::verify_refresh_token`]을 사용해야 합니다.
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    /// * `expected` - 기대하는 토큰 용도
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 잘못된 서명/형식, 용도 불일치
    pub fn verify_token(&self, token: &str, expected: TokenType) -> Result<TokenClaims, AppError> {
        let claims = decode_claims(&JwtConfig::secret(), token)?;
        ensure_token_type(&claims, expected)?;
        Ok(claims)
    }

    /// 리프레시 토큰 검증 (블랙리스트 포함)
    ///
    /// 서명/만료/용도 검증에 더해 블랙리스트를 조회합니다.
    /// 로그아웃으로 무효화된 토큰은 만료 전이라도 거부됩니다.
    pub async fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let claims = self.verify_token(token, TokenType::Refresh)?;

        if self.token_repository.is_token_blacklisted(&claims.jti).await? {
            log::warn!("블랙리스트된 리프레시 토큰 사용 시도 - 사용자: {}", claims.sub);
            return Err(AppError::AuthenticationError(
                "Token has been revoked".to_string(),
            ));
        }

        Ok(claims)
    }

    /// 리프레시 토큰으로 새 액세스 토큰 발급
    ///
    /// 리프레시 토큰 자체는 무효화되지 않고 만료까지 재사용됩니다
    /// (회전 비활성화). 토큰 주체가 더 이상 존재하지 않거나 비활성
    /// 상태이면 갱신이 거부됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 무효/만료/블랙리스트,
    ///   사용자 없음, 계정 비활성화
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, AppError> {
        let claims = self.verify_refresh_token(refresh_token).await?;

        let user = self
            .user_repository
            .find_by_id(&claims.sub)
            .await
            .map_err(|_| {
                AppError::AuthenticationError("Failed to look up token subject".to_string())
            })?
            .ok_or_else(|| AppError::AuthenticationError("User not found".to_string()))?;

        if !user.is_active {
            log::warn!("비활성 사용자의 토큰 갱신 시도: {}", claims.sub);
            return Err(AppError::AuthenticationError(
                "Account is disabled".to_string(),
            ));
        }

        self.generate_access_token(&user)
    }

    /// 리프레시 토큰 무효화 (로그아웃)
    ///
    /// 토큰의 JTI를 남은 수명과 동일한 TTL로 블랙리스트에 추가합니다.
    /// 이미 잘못되었거나 만료된 토큰은 조용히 성공하지 않고
    /// 인증 에러를 반환합니다.
    pub async fn revoke_refresh_token(&self, refresh_token: &str) -> Result<(), AppError> {
        let claims = self.verify_refresh_token(refresh_token).await?;

        let ttl = claims.remaining_lifetime_secs(Utc::now().timestamp());

        self.token_repository
            .blacklist_refresh_token(&claims.jti, &claims.sub, claims.exp, ttl)
            .await
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError(
                "Invalid authorization header format".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-secret";

    #[test]
    fn test_signed_access_token_round_trips_subject() {
        let claims = build_claims(
            "507f1f77bcf86cd799439011".to_string(),
            TokenType::Access,
            Duration::minutes(15),
        );

        let token = sign_claims(SECRET, &claims).unwrap();
        let decoded = decode_claims(SECRET, &token).unwrap();

        assert_eq!(decoded.sub, "507f1f77bcf86cd799439011");
        assert_eq!(decoded.token_type, TokenType::Access);
        assert_eq!(decoded.jti, claims.jti);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            jti: "expired".to_string(),
            token_type: TokenType::Access,
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };

        let token = sign_claims(SECRET, &claims).unwrap();
        let result = decode_claims(SECRET, &token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let claims = build_claims(
            "507f1f77bcf86cd799439011".to_string(),
            TokenType::Access,
            Duration::minutes(15),
        );

        let token = sign_claims(SECRET, &claims).unwrap();
        let result = decode_claims("another-secret", &token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_refresh_token_rejected_where_access_expected() {
        let claims = build_claims(
            "507f1f77bcf86cd799439011".to_string(),
            TokenType::Refresh,
            Duration::days(7),
        );

        assert!(ensure_token_type(&claims, TokenType::Refresh).is_ok());
        assert!(matches!(
            ensure_token_type(&claims, TokenType::Access),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_each_token_gets_fresh_jti() {
        let a = build_claims(
            "507f1f77bcf86cd799439011".to_string(),
            TokenType::Refresh,
            Duration::days(7),
        );
        let b = build_claims(
            "507f1f77bcf86cd799439011".to_string(),
            TokenType::Refresh,
            Duration::days(7),
        );

        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(decode_claims(SECRET, "not-a-jwt").is_err());
        assert!(decode_claims(SECRET, "").is_err());
    }
}
