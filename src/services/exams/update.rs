use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ExamService;
use super::get::load_exam;
use crate::models::{
    ApiResponse, ErrorCode, auth::entities::Caller, exams::requests::UpdateExamRequest,
};
use crate::services::access::ensure_owner_or_admin;

pub async fn update_exam(
    service: &ExamService,
    request: &HttpRequest,
    caller: &Caller,
    exam_id: i64,
    update_data: UpdateExamRequest,
) -> ActixResult<HttpResponse> {
    // 请求体中的 id 可省略，提供时必须与路径一致
    if update_data.id.is_some_and(|id| id != exam_id) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::IdMismatch,
            "Path id does not match body id",
        )));
    }

    let storage = service.get_storage(request);

    let exam = match load_exam(&storage, exam_id).await {
        Ok(exam) => exam,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_owner_or_admin(caller, exam.client_id, "exam") {
        return Ok(resp);
    }

    match storage.update_exam(exam_id, update_data).await {
        Ok(Some(_)) => Ok(HttpResponse::NoContent().finish()),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found",
        ))),
        Err(e) => {
            error!("Exam update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ExamUpdateFailed,
                    "Exam update failed",
                )),
            )
        }
    }
}
