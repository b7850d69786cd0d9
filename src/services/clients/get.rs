use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use super::ClientService;
use crate::models::{ApiResponse, ErrorCode, auth::entities::Caller, clients::entities::Client};
use crate::services::access::ensure_owner_or_admin;
use crate::storage::Storage;

pub async fn get_client(
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

    // 客户记录的所有者就是其自身
    if let Err(resp) = ensure_owner_or_admin(caller, client.id, "client") {
        return Ok(resp);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        client,
        "Client information retrieved successfully",
    )))
}

/// 加载客户，不存在时返回 404 响应
pub(super) async fn load_client(
    storage: &Arc<dyn Storage>,
    client_id: i64,
) -> Result<Client, HttpResponse> {
    match storage.get_client_by_id(client_id).await {
        Ok(Some(client)) => Ok(client),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClientNotFound,
            "Client not found",
        ))),
        Err(e) => {
            error!("Failed to get client {}: {}", client_id, e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get client information",
                )),
            )
        }
    }
}
