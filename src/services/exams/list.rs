use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ExamService;
use crate::models::{ApiResponse, ErrorCode, auth::entities::Caller};

pub async fn list_exams(
    service: &ExamService,
    request: &HttpRequest,
    caller: &Caller,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let owner_filter = (!caller.is_admin()).then_some(caller.id);

    match storage.list_exams(owner_filter).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Exam list retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list exams: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve exam list",
                )),
            )
        }
    }
}
