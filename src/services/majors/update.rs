use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::MajorService;
use super::get::load_major;
use crate::models::{
    ApiResponse, ErrorCode, auth::entities::Caller, majors::requests::UpdateMajorRequest,
};
use crate::services::access::ensure_owner_or_admin;
use crate::services::exam_links::check_exam_links;

pub async fn update_major(
    service: &MajorService,
    request: &HttpRequest,
    caller: &Caller,
    major_id: i64,
    update_data: UpdateMajorRequest,
) -> ActixResult<HttpResponse> {
    if update_data.id != major_id {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::IdMismatch,
            "Path id does not match body id",
        )));
    }

    let storage = service.get_storage(request);

    let major = match load_major(&storage, major_id).await {
        Ok(major) => major,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_owner_or_admin(caller, major.client_id, "major") {
        return Ok(resp);
    }

    // 关联的考试必须属于专业的所有者
    if let Err(resp) = check_exam_links(&storage, major.client_id, &update_data.exam_ids).await {
        return Ok(resp);
    }

    match storage.update_major(major_id, update_data).await {
        Ok(Some(_)) => Ok(HttpResponse::NoContent().finish()),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MajorNotFound,
            "Major not found",
        ))),
        Err(e) => {
            error!("Major update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::MajorUpdateFailed,
                    "Major update failed",
                )),
            )
        }
    }
}
