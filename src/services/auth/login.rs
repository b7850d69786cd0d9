use actix_web::{HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::errors::Result;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::LoginRequest, responses::AuthResponse},
};
use crate::utils::password::verify_password;

use super::AuthService;

impl AuthService {
    /// 校验用户名和密码，任一不匹配时返回 `Ok(None)`
    pub async fn login(&self, request: LoginRequest) -> Result<Option<AuthResponse>> {
        let Some(client) = self
            .storage()
            .get_client_by_username(&request.username)
            .await?
        else {
            return Ok(None);
        };

        if !verify_password(&request.password, &client.password_hash) {
            return Ok(None);
        }

        let token = self.generate_jwt_token(&client.username, client.role, client.id)?;

        info!("Client {} logged in successfully", client.username);

        Ok(Some(AuthResponse {
            token,
            username: client.username,
            role: client.role,
        }))
    }
}

pub async fn handle_login(
    service: &AuthService,
    request: LoginRequest,
) -> ActixResult<HttpResponse> {
    match service.login(request).await {
        Ok(Some(response)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Username or password is incorrect",
        ))),
        Err(e) => {
            error!("Login failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
