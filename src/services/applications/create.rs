use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header::LOCATION};
use tracing::{error, info};

use super::ApplicationService;
use super::get::check_major_exists;
use crate::models::{
    ApiResponse, ErrorCode, applications::requests::CreateApplicationRequest,
    auth::entities::Caller,
};
use crate::services::access::{effective_owner, ensure_owner_exists};
use crate::services::exam_links::check_exam_links;

pub async fn create_application(
    service: &ApplicationService,
    request: &HttpRequest,
    caller: &Caller,
    mut application_data: CreateApplicationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 普通用户提交的 student_id 一律替换为自己
    let owner_id = effective_owner(caller, application_data.student_id);
    application_data.student_id = Some(owner_id);

    if let Err(resp) = ensure_owner_exists(&storage, owner_id).await {
        return Ok(resp);
    }

    if let Err(resp) = check_major_exists(&storage, application_data.major_id).await {
        return Ok(resp);
    }

    if let Err(resp) = check_exam_links(&storage, owner_id, &application_data.exam_ids).await {
        return Ok(resp);
    }

    match storage.create_application(application_data).await {
        Ok(application) => {
            info!("Client {} created application {}", caller.id, application.id);
            Ok(HttpResponse::Created()
                .insert_header((LOCATION, format!("/api/applications/{}", application.id)))
                .json(ApiResponse::success(
                    application,
                    "Application created successfully",
                )))
        }
        Err(e) => {
            error!("Application creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ApplicationCreationFailed,
                    "Application creation failed",
                )),
            )
        }
    }
}
