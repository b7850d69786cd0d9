use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::MajorService;
use super::get::load_major;
use crate::models::{ApiResponse, ErrorCode, auth::entities::Caller};
use crate::services::access::ensure_owner_or_admin;

pub async fn delete_major(
    service: &MajorService,
    request: &HttpRequest,
    caller: &Caller,
    major_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let major = match load_major(&storage, major_id).await {
        Ok(major) => major,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_owner_or_admin(caller, major.client_id, "major") {
        return Ok(resp);
    }

    match storage.delete_major(major_id).await {
        Ok(true) => {
            info!("Client {} deleted major {}", caller.id, major_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MajorNotFound,
            "Major not found",
        ))),
        Err(e) => {
            error!("Major deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::MajorDeleteFailed,
                    "Major deletion failed",
                )),
            )
        }
    }
}
