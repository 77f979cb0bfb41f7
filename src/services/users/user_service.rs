//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 회원가입, 비밀번호 검증, 프로필 수정을 담당합니다.
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 환경별 cost 설정으로 보안 강도 조절, 솔트 자동 생성
//! - **중복 검사**: 이메일 유니크 제약 위반을 사전에 감지하여
//!   사람이 읽을 수 있는 메시지로 응답
//! - **계정 상태 검증**: 비활성 계정의 로그인 거부
//! - **동일 에러 메시지**: 존재하지 않는 이메일과 잘못된 비밀번호를
//!   구분하지 않는 "Invalid credentials" 응답

use crate::{
    config::PasswordConfig,
    domain::dto::users::request::create_user_request::CreateUserRequest,
    domain::entities::users::user::User,
    errors::errors::AppError,
    repositories::users::user_repo::UserRepository,
    utils::string_utils::{is_valid_string, trim_string},
};
use bcrypt::hash;
use mongodb::bson::{DateTime, doc};
use singleton_macro::service;
use std::sync::Arc;

/// 사용자 관리 서비스
#[service(name = "user")]
pub struct UserService {
    user_repository: Arc<UserRepository>,
}

impl UserService {
    /// 새 사용자 계정 생성 (회원가입)
    ///
    /// 1. 표시 이름 정리 (앞뒤 공백 제거, 공백만 있는 이름 거부)
    /// 2. bcrypt 해싱 (환경별 cost)
    /// 3. 이메일 중복 검사 후 저장
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이름이 공백뿐이거나 이메일 중복
    /// * `AppError::InternalError` - 해싱 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let user_service = UserService::instance();
    /// let user = user_service.create_user(request).await?;
    /// let tokens = TokenService::instance().generate_token_pair(&user)?;
    /// ```
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, AppError> {
        if !is_valid_string(&request.name) {
            return Err(AppError::ValidationError(
                "Please enter a valid name".to_string(),
            ));
        }
        let name = trim_string(&request.name);

        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(request.email, name, password_hash);

        let created = self.user_repository.create(user).await?;

        log::info!(
            "새 사용자 생성됨 - 이메일: {}, ID: {}",
            created.email,
            created.id_string().unwrap_or_default()
        );

        Ok(created)
    }

    /// 이메일/비밀번호로 사용자 인증
    ///
    /// bcrypt의 일정한 검증 시간이 타이밍 공격을 완화하며,
    /// 이메일 미존재와 비밀번호 불일치는 동일한 메시지로 응답합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 로그인 정보, 비활성 계정
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("Invalid credentials".to_string()))?;

        let is_valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))?;

        if !is_valid {
            log::warn!("로그인 실패 (비밀번호 불일치) - 이메일: {}", email);
            return Err(AppError::AuthenticationError(
                "Invalid credentials".to_string(),
            ));
        }

        if !user.is_active {
            log::warn!("비활성 계정 로그인 시도 - 이메일: {}", email);
            return Err(AppError::AuthenticationError(
                "Account is disabled".to_string(),
            ));
        }

        Ok(user)
    }

    /// ID로 사용자 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.user_repository.find_by_id(id).await
    }

    /// 표시 이름 수정
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 공백만으로 구성된 이름
    /// * `AppError::NotFound` - 사용자 없음
    pub async fn update_name(&self, user_id: &str, name: &str) -> Result<User, AppError> {
        if !is_valid_string(name) {
            return Err(AppError::ValidationError(
                "Please enter a valid name".to_string(),
            ));
        }
        let name = trim_string(name);

        let updated = self
            .user_repository
            .update(user_id, doc! { "name": name, "updated_at": DateTime::now() })
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(updated)
    }
}
