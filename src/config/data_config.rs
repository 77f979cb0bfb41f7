//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, 실행 환경, 패스워드 해싱, 파일 업로드 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "production".to_string())
            .to_lowercase()
            .as_str()
        {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// # Returns
    ///
    /// 4-15 범위의 bcrypt cost 값
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if cost >= 4 && cost <= 15 {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// 파일 업로드 설정
///
/// 업로드 저장 경로, 크기 제한, 허용 컨텐츠 타입을 관리합니다.
/// 크기와 타입 검증은 클라이언트가 보낸 메타데이터가 아니라
/// 서버가 실제로 수신한 바이트를 기준으로 수행됩니다.
pub struct UploadConfig;

impl UploadConfig {
    /// 업로드 파일 최대 크기 (바이트)
    ///
    /// 5 MiB 고정 제한입니다.
    pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

    /// 업로드 허용 컨텐츠 타입 목록
    ///
    /// PDF, Excel(xlsx), Word(docx/doc), 일반 텍스트만 허용합니다.
    pub const ALLOWED_CONTENT_TYPES: [&'static str; 5] = [
        "application/pdf",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "application/msword",
        "text/plain",
    ];

    /// 업로드 파일이 저장될 루트 디렉터리를 반환합니다.
    ///
    /// 실제 파일은 이 디렉터리 아래 `uploads/` 경로에 저장됩니다.
    ///
    /// # Environment Variables
    ///
    /// - `MEDIA_ROOT`: 커스텀 저장 경로 (기본값: "./media")
    pub fn media_root() -> String {
        env::var("MEDIA_ROOT").unwrap_or_else(|_| "./media".to_string())
    }

    /// 주어진 컨텐츠 타입이 업로드 허용 목록에 있는지 확인합니다.
    pub fn is_allowed_content_type(content_type: &str) -> bool {
        Self::ALLOWED_CONTENT_TYPES
            .iter()
            .any(|allowed| *allowed == content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_upload_content_type_allow_list() {
        assert!(UploadConfig::is_allowed_content_type("application/pdf"));
        assert!(UploadConfig::is_allowed_content_type("text/plain"));
        assert!(!UploadConfig::is_allowed_content_type("image/png"));
        assert!(!UploadConfig::is_allowed_content_type("application/zip"));
    }

    #[test]
    fn test_upload_size_limit_is_five_mib() {
        assert_eq!(UploadConfig::MAX_FILE_SIZE, 5_242_880);
    }
}
