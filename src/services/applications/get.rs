use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use super::ApplicationService;
use crate::models::{
    ApiResponse, ErrorCode, applications::entities::Application, auth::entities::Caller,
};
use crate::services::access::ensure_owner_or_admin;
use crate::storage::Storage;

pub async fn get_application(
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

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        application,
        "Application information retrieved successfully",
    )))
}

/// 加载申请，不存在时返回 404 响应
pub(super) async fn load_application(
    storage: &Arc<dyn Storage>,
    application_id: i64,
) -> Result<Application, HttpResponse> {
    match storage.get_application_by_id(application_id).await {
        Ok(Some(application)) => Ok(application),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ApplicationNotFound,
            "Application not found",
        ))),
        Err(e) => {
            error!("Failed to get application {}: {}", application_id, e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get application information",
                )),
            )
        }
    }
}

/// 申请引用的专业必须存在
pub(super) async fn check_major_exists(
    storage: &Arc<dyn Storage>,
    major_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_major_by_id(major_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ApplicationMajorInvalid,
            format!("Major {major_id} does not exist"),
        ))),
        Err(e) => {
            error!("Failed to get major {}: {}", major_id, e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to validate major reference",
                )),
            )
        }
    }
}
