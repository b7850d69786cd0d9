use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use super::MajorService;
use crate::models::{ApiResponse, ErrorCode, auth::entities::Caller, majors::entities::Major};
use crate::services::access::ensure_owner_or_admin;
use crate::storage::Storage;

pub async fn get_major(
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

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        major,
        "Major information retrieved successfully",
    )))
}

/// 加载专业，不存在时返回 404 响应
pub(super) async fn load_major(
    storage: &Arc<dyn Storage>,
    major_id: i64,
) -> Result<Major, HttpResponse> {
    match storage.get_major_by_id(major_id).await {
        Ok(Some(major)) => Ok(major),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MajorNotFound,
            "Major not found",
        ))),
        Err(e) => {
            error!("Failed to get major {}: {}", major_id, e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get major information",
                )),
            )
        }
    }
}
