//! AuthMiddleware 인증 로직의 핵심적인 기능

use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::domain::models::token::token::TokenType;
use crate::errors::errors::AppError;
use crate::services::auth::TokenService;
use crate::services::users::user_service::UserService;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use std::rc::Rc;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match resolve_identity(&req).await {
                Ok(identity) => {
                    log::debug!("인증 성공: 사용자 ID {}", identity.user_id);
                    // 사용자 정보를 Request Extensions에 저장
                    req.extensions_mut().insert(identity);
                }
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 액세스 토큰을 검증하고 신원을 해석
///
/// 1. Authorization 헤더에서 Bearer 토큰 추출
/// 2. 서명/만료/용도(access) 검증
/// 3. 토큰 주체를 저장소에서 조회 - 서명이 유효해도 주체가 삭제되었거나
///    비활성 상태이면 거부
async fn resolve_identity(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let token_service = TokenService::instance();

    // Authorization 헤더 추출
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::AuthenticationError(
                "Authentication credentials were not provided.".to_string(),
            )
        })?;

    // Bearer 토큰 추출 및 검증
    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_token(token, TokenType::Access)?;

    // 토큰 주체 조회
    let user_service = UserService::instance();
    let user = user_service
        .find_by_id(&claims.sub)
        .await
        .map_err(|_| AppError::AuthenticationError("Failed to look up token subject".to_string()))?
        .ok_or_else(|| AppError::AuthenticationError("User not found".to_string()))?;

    if !user.is_active {
        return Err(AppError::AuthenticationError(
            "Account is disabled".to_string(),
        ));
    }

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        email: user.email,
    })
}
