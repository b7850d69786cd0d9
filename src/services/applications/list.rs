use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ApplicationService;
use crate::models::{ApiResponse, ErrorCode, auth::entities::Caller};

pub async fn list_applications(
    service: &ApplicationService,
    request: &HttpRequest,
    caller: &Caller,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 普通用户只能看到自己提交的申请
    let owner_filter = (!caller.is_admin()).then_some(caller.id);

    match storage.list_applications(owner_filter).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Application list retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list applications: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve application list",
                )),
            )
        }
    }
}
