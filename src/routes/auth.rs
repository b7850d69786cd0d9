use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::middlewares;
use crate::models::auth::{
    entities::Caller,
    requests::{LoginRequest, RegisterRequest},
};
use crate::services::AuthService;

pub async fn login(
    service: web::Data<AuthService>,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    service.handle_login(login_data.into_inner()).await
}

pub async fn register(
    service: web::Data<AuthService>,
    register_data: web::Json<RegisterRequest>,
) -> ActixResult<HttpResponse> {
    service.handle_register(register_data.into_inner()).await
}

pub async fn me(service: web::Data<AuthService>, caller: Caller) -> ActixResult<HttpResponse> {
    service.handle_me(caller).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .route("/login", web::post().to(login))
            .route("/register", web::post().to(register))
            .service(
                web::resource("/me")
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(me)),
            ),
    );
}
