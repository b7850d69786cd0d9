/*!
 * JWT 认证中间件
 *
 * 验证 `Authorization: Bearer <JWT_TOKEN>` 请求头中的令牌，
 * 成功后将调用者身份 [`Caller`] 写入请求扩展。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * web::scope("/api/majors")
 *     .wrap(RequireJWT)
 *     .route("", web::get().to(list_majors))
 *
 * async fn list_majors(req: HttpRequest, caller: Caller) -> ActixResult<HttpResponse> {
 *     // caller.id / caller.is_admin()
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. 从请求头提取令牌
 * 2. 使用 `web::Data<AuthService>` 校验签名、过期时间、签发者和受众
 * 3. 将 `sub` 解析为客户 ID，`role` 为 "Admin" 时视为管理员
 * 4. 令牌缺失或无效时返回 401
 */

use crate::errors::BookcaseError;
use crate::models::{ErrorCode, auth::entities::Caller};
use crate::services::AuthService;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, error, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

enum AuthFailure {
    Unauthorized(String),
    Misconfigured,
}

// 辅助函数：提取并验证 JWT
fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<Caller, AuthFailure> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| {
            AuthFailure::Unauthorized("Missing or invalid Authorization header".to_string())
        })?;

    let auth = req
        .app_data::<web::Data<AuthService>>()
        .ok_or_else(|| {
            error!("AuthService not found in app data");
            AuthFailure::Misconfigured
        })?;

    auth.authenticate(token).map_err(|err| match err {
        // 签名密钥缺失属于服务端配置问题
        BookcaseError::Configuration(msg) => {
            error!("JWT verification misconfigured: {}", msg);
            AuthFailure::Misconfigured
        }
        err => {
            info!("JWT token validation failed: {}", err);
            AuthFailure::Unauthorized("Invalid JWT token".to_string())
        }
    })
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(
                    req.into_response(HttpResponse::NoContent().finish().map_into_right_body())
                );
            }

            match extract_and_validate_jwt(&req) {
                Ok(caller) => {
                    debug!("JWT authentication successful for ID: {}", caller.id);
                    req.extensions_mut().insert(caller);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(AuthFailure::Unauthorized(err)) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
                Err(AuthFailure::Misconfigured) => {
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            ErrorCode::InternalServerError,
                            "Authentication is not configured",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}
