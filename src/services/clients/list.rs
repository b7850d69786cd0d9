use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClientService;
use crate::models::{ApiResponse, ErrorCode, auth::entities::Caller};

pub async fn list_clients(
    service: &ClientService,
    request: &HttpRequest,
    caller: &Caller,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 普通用户只能看到自己
    let owner_filter = (!caller.is_admin()).then_some(caller.id);

    match storage.list_clients(owner_filter).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Client list retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list clients: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve client list",
                )),
            )
        }
    }
}
