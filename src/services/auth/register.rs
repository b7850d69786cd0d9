use actix_web::{HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::errors::Result;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::RegisterRequest, responses::AuthResponse},
    clients::{entities::ClientRole, requests::CreateClientRequest},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password, validate_username};

use super::AuthService;

impl AuthService {
    /// 注册新客户
    ///
    /// 用户名已存在时返回 `Ok(None)` 且不写入任何数据。
    /// 角色只有显式为 "Admin" 时才是管理员。
    pub async fn register(&self, request: RegisterRequest) -> Result<Option<AuthResponse>> {
        if self
            .storage()
            .get_client_by_username(&request.username)
            .await?
            .is_some()
        {
            return Ok(None);
        }

        let role = request
            .role
            .as_deref()
            .map(ClientRole::from_claim)
            .unwrap_or_default();
        let password_hash = hash_password(&request.password, self.argon2_config())?;

        let client = self
            .storage()
            .create_client(CreateClientRequest {
                username: request.username,
                password: password_hash,
                role,
            })
            .await?;

        let token = self.generate_jwt_token(&client.username, client.role, client.id)?;

        info!("Client {} registered with role {}", client.username, client.role);

        Ok(Some(AuthResponse {
            token,
            username: client.username,
            role: client.role,
        }))
    }
}

pub async fn handle_register(
    service: &AuthService,
    request: RegisterRequest,
) -> ActixResult<HttpResponse> {
    // 验证用户名合法性
    if let Err(msg) = validate_username(&request.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ClientNameInvalid, msg)));
    }

    if let Err(msg) = validate_password(&request.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ClientPasswordInvalid,
            msg,
        )));
    }

    match service.register(request).await {
        Ok(Some(response)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Registration successful")))
        }
        Ok(None) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ClientAlreadyExists,
            "Username already exists",
        ))),
        Err(e) => {
            error!("Register failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    "Registration failed",
                )),
            )
        }
    }
}
