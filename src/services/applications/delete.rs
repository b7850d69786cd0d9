use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ApplicationService;
use super::get::load_application;
use crate::models::{ApiResponse, ErrorCode, auth::entities::Caller};
use crate::services::access::ensure_owner_or_admin;

pub async fn delete_application(
    service: &ApplicationService,
    request: &HttpRequest,
    caller: &Caller,
    application_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let application = match load_application(&storage, application_id).await {
        Ok(application) => application,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_owner_or_admin(caller, application.student_id, "application") {
        return Ok(resp);
    }

    match storage.delete_application(application_id).await {
        Ok(true) => {
            info!("Client {} deleted application {}", caller.id, application_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ApplicationNotFound,
            "Application not found",
        ))),
        Err(e) => {
            error!("Application deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ApplicationDeleteFailed,
                    "Application deletion failed",
                )),
            )
        }
    }
}
