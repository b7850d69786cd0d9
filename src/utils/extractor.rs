//! 安全路径参数与调用者身份提取器

use actix_web::{
    FromRequest, HttpMessage, HttpRequest, HttpResponse, dev::Payload, error::InternalError,
};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode, auth::entities::Caller};

fn reject(response: HttpResponse, message: &str) -> actix_web::Error {
    InternalError::from_response(message.to_string(), response).into()
}

/// 路径中的 `{id}` 参数，必须是正整数
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|id| *id > 0);

        ready(match parsed {
            Some(id) => Ok(SafeIDI64(id)),
            None => {
                let message = "Invalid id in path";
                Err(reject(
                    HttpResponse::BadRequest()
                        .json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
                    message,
                ))
            }
        })
    }
}

/// 从请求扩展中取出 `RequireJWT` 写入的调用者身份
impl FromRequest for Caller {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match req.extensions().get::<Caller>().cloned() {
            Some(caller) => Ok(caller),
            None => {
                let message = "Authentication required";
                Err(reject(
                    HttpResponse::Unauthorized()
                        .json(ApiResponse::error_empty(ErrorCode::Unauthorized, message)),
                    message,
                ))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clients::entities::ClientRole;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_safe_id_parses_positive() {
        let req = TestRequest::default().param("id", "17").to_http_request();
        let id = SafeIDI64::extract(&req).await.unwrap();
        assert_eq!(id.0, 17);
    }

    #[actix_web::test]
    async fn test_safe_id_rejects_garbage() {
        for raw in ["abc", "-3", "0", "1.5"] {
            let req = TestRequest::default().param("id", raw).to_http_request();
            assert!(SafeIDI64::extract(&req).await.is_err(), "{raw} should fail");
        }
    }

    #[actix_web::test]
    async fn test_caller_from_extensions() {
        let req = TestRequest::default().to_http_request();
        assert!(Caller::extract(&req).await.is_err());

        req.extensions_mut().insert(Caller {
            id: 5,
            username: "eve".to_string(),
            role: ClientRole::Admin,
        });
        let caller = Caller::extract(&req).await.unwrap();
        assert_eq!(caller.id, 5);
        assert!(caller.is_admin());
    }
}
