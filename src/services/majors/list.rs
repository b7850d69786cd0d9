use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::MajorService;
use crate::models::{ApiResponse, ErrorCode, auth::entities::Caller};

pub async fn list_majors(
    service: &MajorService,
    request: &HttpRequest,
    caller: &Caller,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 管理员查看全部，普通用户只看自己的
    let owner_filter = (!caller.is_admin()).then_some(caller.id);

    match storage.list_majors(owner_filter).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Major list retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list majors: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve major list",
                )),
            )
        }
    }
}
