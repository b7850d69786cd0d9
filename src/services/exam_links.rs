//! 专业/申请与考试之间关联的校验

use actix_web::HttpResponse;
use std::sync::Arc;
use tracing::error;

use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::ids::unique_ids;

/// 校验要关联的考试全部存在，且与父资源属于同一客户
pub async fn check_exam_links(
    storage: &Arc<dyn Storage>,
    owner_id: i64,
    exam_ids: &[i64],
) -> Result<(), HttpResponse> {
    let wanted = unique_ids(exam_ids);

    if wanted.is_empty() {
        return Ok(());
    }

    let exams = match storage.list_exams_by_ids(&wanted).await {
        Ok(exams) => exams,
        Err(e) => {
            error!("Failed to load exams {:?}: {}", wanted, e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to validate exam references",
                )),
            );
        }
    };

    if let Some(missing) = wanted
        .iter()
        .find(|id| !exams.iter().any(|exam| exam.id == **id))
    {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ExamLinkInvalid,
            format!("Exam {missing} does not exist"),
        )));
    }

    if let Some(foreign) = exams.iter().find(|exam| exam.client_id != owner_id) {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ExamLinkInvalid,
            format!("Exam {} does not belong to client {owner_id}", foreign.id),
        )));
    }

    Ok(())
}
