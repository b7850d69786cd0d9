use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ApplicationService;
use super::get::{check_major_exists, load_application};
use crate::models::{
    ApiResponse, ErrorCode, applications::requests::UpdateApplicationRequest,
    auth::entities::Caller,
};
use crate::services::access::ensure_owner_or_admin;
use crate::services::exam_links::check_exam_links;

pub async fn update_application(
    service: &ApplicationService,
    request: &HttpRequest,
    caller: &Caller,
    application_id: i64,
    update_data: UpdateApplicationRequest,
) -> ActixResult<HttpResponse> {
    if update_data.id != application_id {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::IdMismatch,
            "Path id does not match body id",
        )));
    }

    let storage = service.get_storage(request);

    let application = match load_application(&storage, application_id).await {
        Ok(application) => application,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_owner_or_admin(caller, application.student_id, "application") {
        return Ok(resp);
    }

    if let Err(resp) = check_major_exists(&storage, update_data.major_id).await {
        return Ok(resp);
    }

    if let Err(resp) =
        check_exam_links(&storage, application.student_id, &update_data.exam_ids).await
    {
        return Ok(resp);
    }

    match storage.update_application(application_id, update_data).await {
        Ok(Some(_)) => Ok(HttpResponse::NoContent().finish()),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ApplicationNotFound,
            "Application not found",
        ))),
        Err(e) => {
            error!("Application update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ApplicationUpdateFailed,
                    "Application update failed",
                )),
            )
        }
    }
}
