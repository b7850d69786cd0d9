use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use super::ExamService;
use crate::models::{ApiResponse, ErrorCode, auth::entities::Caller, exams::entities::Exam};
use crate::services::access::ensure_owner_or_admin;
use crate::storage::Storage;

pub async fn get_exam(
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

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        exam,
        "Exam information retrieved successfully",
    )))
}

/// 加载考试，不存在时返回 404 响应
pub(super) async fn load_exam(storage: &Arc<dyn Storage>, exam_id: i64) -> Result<Exam, HttpResponse> {
    match storage.get_exam_by_id(exam_id).await {
        Ok(Some(exam)) => Ok(exam),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found",
        ))),
        Err(e) => {
            error!("Failed to get exam {}: {}", exam_id, e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get exam information",
                )),
            )
        }
    }
}
