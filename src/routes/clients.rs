use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::Caller;
use crate::models::clients::entities::ClientRole;
use crate::models::clients::requests::{CreateClientRequest, UpdateClientRequest};
use crate::services::ClientService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ClientService 实例
static CLIENT_SERVICE: Lazy<ClientService> = Lazy::new(ClientService::new_lazy);

// HTTP处理程序
pub async fn list_clients(req: HttpRequest, caller: Caller) -> ActixResult<HttpResponse> {
    CLIENT_SERVICE.list_clients(&req, &caller).await
}

pub async fn create_client(
    req: HttpRequest,
    caller: Caller,
    client_data: web::Json<CreateClientRequest>,
) -> ActixResult<HttpResponse> {
    CLIENT_SERVICE
        .create_client(&req, &caller, client_data.into_inner())
        .await
}

pub async fn get_client(
    req: HttpRequest,
    caller: Caller,
    client_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CLIENT_SERVICE.get_client(&req, &caller, client_id.0).await
}

pub async fn update_client(
    req: HttpRequest,
    caller: Caller,
    client_id: SafeIDI64,
    update_data: web::Json<UpdateClientRequest>,
) -> ActixResult<HttpResponse> {
    CLIENT_SERVICE
        .update_client(&req, &caller, client_id.0, update_data.into_inner())
        .await
}

pub async fn delete_client(
    req: HttpRequest,
    caller: Caller,
    client_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CLIENT_SERVICE
        .delete_client(&req, &caller, client_id.0)
        .await
}

// 配置路由
pub fn configure_client_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/clients")
            .wrap(middlewares::RequireJWT)
            // 仅管理员可以直接创建客户，自助注册走 /api/auth/register
            .service(
                web::resource("")
                    .guard(guard::Post())
                    .wrap(middlewares::RequireRole::new_any(ClientRole::admin_roles()))
                    .route(web::post().to(create_client)),
            )
            .route("", web::get().to(list_clients))
            .route("/{id}", web::get().to(get_client))
            .route("/{id}", web::put().to(update_client))
            .route("/{id}", web::delete().to(delete_client)),
    );
}
