//! 集成测试公共设施：内存 SQLite 存储、快速 Argon2 参数与测试用 JWT 密钥
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::http::header::{AUTHORIZATION, HeaderName};
use actix_web::web;

use bookcase_api::config::{Argon2Config, DatabaseConfig, JwtConfig};
use bookcase_api::models::auth::requests::RegisterRequest;
use bookcase_api::services::AuthService;
use bookcase_api::storage::Storage;
use bookcase_api::storage::sea_orm_storage::SeaOrmStorage;

pub const TEST_PASSWORD: &str = "correct-horse";

/// 构建与 main 相同配置的测试应用
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(
                    actix_web::web::QueryConfig::default()
                        .error_handler(bookcase_api::utils::query_error_handler),
                )
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(bookcase_api::utils::json_error_handler),
                )
                .app_data(
                    actix_web::web::PathConfig::default()
                        .error_handler(bookcase_api::utils::path_error_handler),
                )
                .app_data(actix_web::web::Data::new($ctx.storage.clone()))
                .app_data($ctx.auth.clone())
                .configure(bookcase_api::routes::configure_routes),
        )
        .await
    };
}

pub struct TestContext {
    pub storage: Arc<dyn Storage>,
    pub auth: web::Data<AuthService>,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        key: "integration-test-signing-key".to_string(),
        ..JwtConfig::default()
    }
}

pub fn fast_argon2() -> Argon2Config {
    Argon2Config {
        memory_cost: 1024,
        time_cost: 1,
        parallelism: 1,
    }
}

impl TestContext {
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        };
        let storage: Arc<dyn Storage> = Arc::new(
            SeaOrmStorage::connect(&config)
                .await
                .expect("in-memory database should open"),
        );
        let auth = web::Data::new(AuthService::new(
            storage.clone(),
            test_jwt_config(),
            fast_argon2(),
        ));
        Self { storage, auth }
    }

    /// 直接通过服务注册，返回 (客户ID, 令牌)
    pub async fn register(&self, username: &str, role: Option<&str>) -> (i64, String) {
        let response = self
            .auth
            .register(RegisterRequest {
                username: username.to_string(),
                password: TEST_PASSWORD.to_string(),
                role: role.map(str::to_string),
            })
            .await
            .expect("register should not fail")
            .expect("username should be free");
        let client = self
            .storage
            .get_client_by_username(username)
            .await
            .unwrap()
            .unwrap();
        (client.id, response.token)
    }

    pub async fn user(&self, username: &str) -> (i64, String) {
        self.register(username, None).await
    }

    pub async fn admin(&self, username: &str) -> (i64, String) {
        self.register(username, Some("Admin")).await
    }
}

pub fn bearer(token: &str) -> (HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {token}"))
}
