use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ExamService;
use super::get::load_exam;
use crate::models::{ApiResponse, ErrorCode, auth::entities::Caller};
use crate::services::access::ensure_owner_or_admin;

pub async fn delete_exam(
    service: &ExamService,
    request: &HttpRequest,
    caller: &Caller,
    exam_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let exam = match load_exam(&storage, exam_id).await {
        Ok(exam) => exam,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_owner_or_admin(caller, exam.client_id, "exam") {
        return Ok(resp);
    }

    match storage.delete_exam(exam_id).await {
        Ok(true) => {
            info!("Client {} deleted exam {}", caller.id, exam_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found",
        ))),
        Err(e) => {
            error!("Exam deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ExamDeleteFailed,
                    "Exam deletion failed",
                )),
            )
        }
    }
}
