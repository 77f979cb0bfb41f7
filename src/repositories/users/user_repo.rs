//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **데이터 무결성**: 이메일 유니크 제약 조건 및 인덱스 관리

use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::users::user::User,
    errors::errors::AppError,
};
use mongodb::{
    IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};
use singleton_macro::repository;
use std::sync::Arc;

/// 사용자 조회 캐시 TTL (초)
const USER_CACHE_TTL_SECS: u64 = 600;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **키 패턴**: 개별 사용자 `user:{user_id}`, 이메일 조회 `user:email:{email}`
/// - **TTL**: 10분 (600초)
/// - **쓰기 후 무효화**: 데이터 변경 시 관련 캐시 키 삭제
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결/쿼리 오류
/// - **ValidationError**: 잘못된 ObjectId 형식, 이메일 중복
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 이메일 주소로 사용자 조회
    ///
    /// 캐시 우선 조회를 통해 성능을 최적화합니다. 이메일은 저장된 형태
    /// 그대로 비교되며 정규화하지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let cache_key = format!("user:email:{}", email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self
            .collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            let _ = self
                .redis
                .set_with_expiry(&cache_key, user, USER_CACHE_TTL_SECS)
                .await;
        }

        Ok(user)
    }

    /// ID로 사용자 조회
    ///
    /// 인증 미들웨어가 매 요청마다 호출하는 가장 빈번한 조회 경로이므로
    /// 적극적인 캐싱을 적용합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid user id format".to_string()))?;

        let cache_key = format!("user:{}", id);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self
            .collection::<User>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            let _ = self
                .redis
                .set_with_expiry(&cache_key, user, USER_CACHE_TTL_SECS)
                .await;
        }

        Ok(user)
    }

    /// 새 사용자 생성
    ///
    /// 이메일 중복 여부를 사전에 검증하고 저장합니다.
    /// 중복 이메일은 사람이 읽을 수 있는 메시지와 함께 400으로 응답되도록
    /// `ValidationError`로 반환합니다. 유니크 인덱스가 동시 생성 경합의
    /// 최종 방어선 역할을 합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ValidationError)` - 이메일 중복
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ValidationError(
                "An account with this email already exists. Please login or use a different email."
                    .to_string(),
            ));
        }

        let result = self
            .collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 사용자 정보 업데이트
    ///
    /// `$set` 연산자로 지정된 필드만 변경하고 최신 사용자 정보를 반환합니다.
    /// 변경 성공 시 해당 사용자의 캐시 키를 무효화합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 업데이트된 사용자 정보
    /// * `Ok(None)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn update(
        &self,
        id: &str,
        update_doc: mongodb::bson::Document,
    ) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid user id format".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_user = self
            .collection::<User>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = updated_user {
            let _ = self.redis.del(&format!("user:{}", id)).await;
            let _ = self.redis.del(&format!("user:email:{}", user.email)).await;
        }

        Ok(updated_user)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행됩니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스**: 중복 이메일 방지 및 로그인 조회 최적화
    /// 2. **생성일 인덱스**: 최근 가입자 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<User>();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
