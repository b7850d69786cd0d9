use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClientService;
use super::get::load_client;
use crate::models::{ApiResponse, ErrorCode, auth::entities::Caller};
use crate::services::access::ensure_owner_or_admin;

pub async fn delete_client(
    service: &ClientService,
    request: &HttpRequest,
    caller: &Caller,
    client_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let client = match load_client(&storage, client_id).await {
        Ok(client) => client,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_owner_or_admin(caller, client.id, "client") {
        return Ok(resp);
    }

    match storage.delete_client(client_id).await {
        Ok(true) => {
            info!("Client {} deleted client {}", caller.id, client_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClientNotFound,
            "Client not found",
        ))),
        Err(e) => {
            error!("Client deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClientDeleteFailed,
                    "Client deletion failed",
                )),
            )
        }
    }
}
