use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::Caller;
use crate::models::majors::requests::{CreateMajorRequest, UpdateMajorRequest};
use crate::services::MajorService;
use crate::utils::SafeIDI64;

// 懒加载的全局 MajorService 实例
static MAJOR_SERVICE: Lazy<MajorService> = Lazy::new(MajorService::new_lazy);

pub async fn list_majors(req: HttpRequest, caller: Caller) -> ActixResult<HttpResponse> {
    MAJOR_SERVICE.list_majors(&req, &caller).await
}

pub async fn create_major(
    req: HttpRequest,
    caller: Caller,
    major_data: web::Json<CreateMajorRequest>,
) -> ActixResult<HttpResponse> {
    MAJOR_SERVICE
        .create_major(&req, &caller, major_data.into_inner())
        .await
}

pub async fn get_major(
    req: HttpRequest,
    caller: Caller,
    major_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    MAJOR_SERVICE.get_major(&req, &caller, major_id.0).await
}

pub async fn update_major(
    req: HttpRequest,
    caller: Caller,
    major_id: SafeIDI64,
    update_data: web::Json<UpdateMajorRequest>,
) -> ActixResult<HttpResponse> {
    MAJOR_SERVICE
        .update_major(&req, &caller, major_id.0, update_data.into_inner())
        .await
}

pub async fn delete_major(
    req: HttpRequest,
    caller: Caller,
    major_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    MAJOR_SERVICE.delete_major(&req, &caller, major_id.0).await
}

// 配置路由
pub fn configure_major_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/majors")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_majors))
            .route("", web::post().to(create_major))
            .route("/{id}", web::get().to(get_major))
            .route("/{id}", web::put().to(update_major))
            .route("/{id}", web::delete().to(delete_major)),
    );
}
