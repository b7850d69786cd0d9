use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header::LOCATION};
use tracing::{error, info};

use super::ExamService;
use crate::models::{
    ApiResponse, ErrorCode, auth::entities::Caller, exams::requests::CreateExamRequest,
};
use crate::services::access::{effective_owner, ensure_owner_exists};

pub async fn create_exam(
    service: &ExamService,
    request: &HttpRequest,
    caller: &Caller,
    mut exam_data: CreateExamRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let owner_id = effective_owner(caller, exam_data.client_id);
    exam_data.client_id = Some(owner_id);

    if let Err(resp) = ensure_owner_exists(&storage, owner_id).await {
        return Ok(resp);
    }

    match storage.create_exam(exam_data).await {
        Ok(exam) => {
            info!("Client {} created exam {}", caller.id, exam.id);
            Ok(HttpResponse::Created()
                .insert_header((LOCATION, format!("/api/exams/{}", exam.id)))
                .json(ApiResponse::success(exam, "Exam created successfully")))
        }
        Err(e) => {
            error!("Exam creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ExamCreationFailed,
                    "Exam creation failed",
                )),
            )
        }
    }
}
