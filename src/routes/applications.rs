use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::Caller;
use crate::models::applications::requests::{CreateApplicationRequest, UpdateApplicationRequest};
use crate::services::ApplicationService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ApplicationService 实例
static APPLICATION_SERVICE: Lazy<ApplicationService> = Lazy::new(ApplicationService::new_lazy);

pub async fn list_applications(req: HttpRequest, caller: Caller) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE.list_applications(&req, &caller).await
}

pub async fn create_application(
    req: HttpRequest,
    caller: Caller,
    application_data: web::Json<CreateApplicationRequest>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .create_application(&req, &caller, application_data.into_inner())
        .await
}

pub async fn get_application(
    req: HttpRequest,
    caller: Caller,
    application_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE.get_application(&req, &caller, application_id.0).await
}

pub async fn update_application(
    req: HttpRequest,
    caller: Caller,
    application_id: SafeIDI64,
    update_data: web::Json<UpdateApplicationRequest>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .update_application(&req, &caller, application_id.0, update_data.into_inner())
        .await
}

pub async fn delete_application(
    req: HttpRequest,
    caller: Caller,
    application_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE.delete_application(&req, &caller, application_id.0).await
}

// 配置路由
pub fn configure_application_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/applications")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_applications))
            .route("", web::post().to(create_application))
            .route("/{id}", web::get().to(get_application))
            .route("/{id}", web::put().to(update_application))
            .route("/{id}", web::delete().to(delete_application)),
    );
}
