//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 캐시와 리프레시 토큰 블랙리스트 저장소를 제공합니다.
//!
//! # 주요 기능
//!
//! - Redis 통합 및 멀티플렉싱 연결
//! - JSON 기반 자동 직렬화/역직렬화
//! - TTL 지원 (블랙리스트 항목이 토큰 만료와 함께 자동 소멸)
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("user:123", &user_data, 600).await?;
//!
//! let cached_user: Option<User> = cache.get("user:123").await?;
//! let revoked = cache.exists("blacklist_token:abc").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
