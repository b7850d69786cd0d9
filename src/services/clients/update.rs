use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClientService;
use super::get::load_client;
use crate::models::{
    ApiResponse, ErrorCode, auth::entities::Caller, clients::requests::UpdateClientRequest,
};
use crate::services::access::ensure_owner_or_admin;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password, validate_username};

pub async fn update_client(
    service: &ClientService,
    request: &HttpRequest,
    caller: &Caller,
    client_id: i64,
    mut update_data: UpdateClientRequest,
) -> ActixResult<HttpResponse> {
    if update_data.id != client_id {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::IdMismatch,
            "Path id does not match body id",
        )));
    }

    let storage = service.get_storage(request);

    let client = match load_client(&storage, client_id).await {
        Ok(client) => client,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_owner_or_admin(caller, client.id, "client") {
        return Ok(resp);
    }

    if let Err(msg) = validate_username(&update_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ClientNameInvalid, msg)));
    }

    // 用户名变更时检查冲突
    if update_data.username != client.username {
        match storage.get_client_by_username(&update_data.username).await {
            Ok(Some(other)) if other.id != client_id => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ClientAlreadyExists,
                    "Username already exists",
                )));
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to check username: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to check username",
                    )),
                );
            }
        }
    }

    // 空密码视为不修改
    update_data.password = match update_data.password.take().filter(|p| !p.is_empty()) {
        Some(password) => {
            if let Err(msg) = validate_password(&password) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ClientPasswordInvalid,
                    msg,
                )));
            }
            match hash_password(&password, &service.get_argon2_config(request)) {
                Ok(hash) => Some(hash),
                Err(e) => {
                    error!("Password hashing failed: {}", e);
                    return Ok(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Password hashing failed",
                        )),
                    );
                }
            }
        }
        None => None,
    };

    // 只有管理员可以修改角色
    if !caller.is_admin() {
        update_data.role = None;
    }

    match storage.update_client(client_id, update_data).await {
        Ok(Some(_)) => Ok(HttpResponse::NoContent().finish()),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClientNotFound,
            "Client not found",
        ))),
        Err(e) => {
            error!("Client update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClientUpdateFailed,
                    "Client update failed",
                )),
            )
        }
    }
}
