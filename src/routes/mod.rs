//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 라우트는 public/protected 두 분류로 나뉩니다:
//!
//! - **Public**: 로그인(토큰 발급), 토큰 갱신, 회원가입, 헬스체크.
//!   인증 미들웨어를 거치지 않습니다.
//! - **Protected**: 그 외 모든 리소스 라우트. `AuthMiddleware::required()`로
//!   감싸지며, 핸들러는 request extension의 해석된 신원을 사용합니다.
//!
//! # Route Map
//!
//! ```text
//! GET    /health                        public
//! POST   /api/token                     public   로그인
//! POST   /api/token/refresh             public   액세스 토큰 갱신
//! POST   /api/register                  public   회원가입
//! POST   /api/logout                    bearer   리프레시 토큰 무효화
//! GET    /api/me                        bearer   프로필 조회
//! PATCH  /api/me                        bearer   이름 수정
//! *      /api/addresses[/{id}]          bearer   주소 CRUD (대표 플래그 규칙)
//! *      /api/phones[/{id}]             bearer   전화번호 CRUD (1:1 제약)
//! *      /api/files[/{id}[/download]]   bearer   파일 업로드/다운로드
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_profile_routes(cfg);
    configure_resource_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 토큰 발급/갱신과 회원가입은 인증 자체를 위한 엔드포인트이므로
/// public으로 분류됩니다. 로그아웃은 유효한 액세스 토큰을 요구합니다.
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    // Public 라우트
    cfg.service(
        web::scope("/api/token")
            .service(handlers::auth::obtain_token)
            .service(handlers::auth::refresh_token),
    );

    cfg.service(web::scope("/api/register").service(handlers::auth::register));

    // Protected 라우트
    cfg.service(
        web::scope("/api/logout")
            .wrap(AuthMiddleware::required())
            .service(handlers::auth::logout),
    );
}

/// 현재 사용자 프로필 라우트를 설정합니다
fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/me")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::get_me)
            .service(handlers::users::update_me),
    );
}

/// 소유자 범위 리소스 라우트를 설정합니다
///
/// 주소, 전화번호, 파일은 모두 동일한 패턴을 따릅니다:
/// 목록/생성은 컬렉션 경로, 조회/수정/삭제는 `{id}` 경로.
fn configure_resource_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/addresses")
            .wrap(AuthMiddleware::required())
            .service(handlers::addresses::list_addresses)
            .service(handlers::addresses::create_address)
            .service(handlers::addresses::get_address)
            .service(handlers::addresses::update_address)
            .service(handlers::addresses::delete_address),
    );

    cfg.service(
        web::scope("/api/phones")
            .wrap(AuthMiddleware::required())
            .service(handlers::phones::list_phones)
            .service(handlers::phones::create_phone)
            .service(handlers::phones::get_phone)
            .service(handlers::phones::update_phone)
            .service(handlers::phones::delete_phone),
    );

    cfg.service(
        web::scope("/api/files")
            .wrap(AuthMiddleware::required())
            .service(handlers::files::list_files)
            .service(handlers::files::upload_file)
            .service(handlers::files::download_file)
            .service(handlers::files::get_file)
            .service(handlers::files::delete_file),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "userportal_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
