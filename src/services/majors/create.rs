use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header::LOCATION};
use tracing::{error, info};

use super::MajorService;
use crate::models::{
    ApiResponse, ErrorCode, auth::entities::Caller, majors::requests::CreateMajorRequest,
};
use crate::services::access::{effective_owner, ensure_owner_exists};
use crate::services::exam_links::check_exam_links;

pub async fn create_major(
    service: &MajorService,
    request: &HttpRequest,
    caller: &Caller,
    mut major_data: CreateMajorRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 普通用户的 client_id 总是被覆盖为自己
    let owner_id = effective_owner(caller, major_data.client_id);
    major_data.client_id = Some(owner_id);

    if let Err(resp) = ensure_owner_exists(&storage, owner_id).await {
        return Ok(resp);
    }

    if let Err(resp) = check_exam_links(&storage, owner_id, &major_data.exam_ids).await {
        return Ok(resp);
    }

    match storage.create_major(major_data).await {
        Ok(major) => {
            info!("Client {} created major {}", caller.id, major.id);
            Ok(HttpResponse::Created()
                .insert_header((LOCATION, format!("/api/majors/{}", major.id)))
                .json(ApiResponse::success(major, "Major created successfully")))
        }
        Err(e) => {
            error!("Major creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::MajorCreationFailed,
                    "Major creation failed",
                )),
            )
        }
    }
}
