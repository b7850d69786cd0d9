use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header::LOCATION};
use tracing::{error, info};

use super::ClientService;
use crate::models::{
    ApiResponse, ErrorCode, auth::entities::Caller, clients::requests::CreateClientRequest,
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password, validate_username};

pub async fn create_client(
    service: &ClientService,
    request: &HttpRequest,
    caller: &Caller,
    mut client_data: CreateClientRequest,
) -> ActixResult<HttpResponse> {
    // 验证用户名
    if let Err(msg) = validate_username(&client_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ClientNameInvalid, msg)));
    }

    if let Err(msg) = validate_password(&client_data.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ClientPasswordInvalid,
            msg,
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_client_by_username(&client_data.username).await {
        Ok(None) => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ClientAlreadyExists,
                "Username already exists",
            )));
        }
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

    client_data.password =
        match hash_password(&client_data.password, &service.get_argon2_config(request)) {
            Ok(hash) => hash,
            Err(e) => {
                error!("Password hashing failed: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Password hashing failed",
                    )),
                );
            }
        };

    match storage.create_client(client_data).await {
        Ok(client) => {
            info!("Admin {} created client {}", caller.id, client.id);
            Ok(HttpResponse::Created()
                .insert_header((LOCATION, format!("/api/clients/{}", client.id)))
                .json(ApiResponse::success(client, "Client created successfully")))
        }
        Err(e) => {
            error!("Client creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClientCreationFailed,
                    "Client creation failed",
                )),
            )
        }
    }
}
