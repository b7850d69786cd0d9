pub mod applications;
pub mod auth;
pub mod clients;
pub mod exams;
pub mod majors;

pub use applications::configure_application_routes;
pub use auth::configure_auth_routes;
pub use clients::configure_client_routes;
pub use exams::configure_exam_routes;
pub use majors::configure_major_routes;

use actix_web::web;

/// 注册全部 API 路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_client_routes)
        .configure(configure_major_routes)
        .configure(configure_exam_routes)
        .configure(configure_application_routes);
}
