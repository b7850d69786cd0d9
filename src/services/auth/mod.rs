//! 认证服务
//!
//! 与资源服务不同，`AuthService` 持有存储与 JWT/Argon2 配置，
//! 以 `web::Data<AuthService>` 注册，供路由与 `RequireJWT` 中间件共享。

pub mod login;
pub mod register;
pub mod token;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::{AppConfig, Argon2Config, JwtConfig};
use crate::models::auth::{
    entities::Caller,
    requests::{LoginRequest, RegisterRequest},
};
use crate::storage::Storage;

pub struct AuthService {
    storage: Arc<dyn Storage>,
    jwt: JwtConfig,
    argon2: Argon2Config,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>, jwt: JwtConfig, argon2: Argon2Config) -> Self {
        Self {
            storage,
            jwt,
            argon2,
        }
    }

    /// 使用全局配置创建
    pub fn from_config(storage: Arc<dyn Storage>) -> Self {
        let config = AppConfig::get();
        Self::new(storage, config.jwt.clone(), config.argon2.clone())
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn jwt_config(&self) -> &JwtConfig {
        &self.jwt
    }

    pub(crate) fn argon2_config(&self) -> &Argon2Config {
        &self.argon2
    }

    // 用户注册
    pub async fn handle_register(&self, request: RegisterRequest) -> ActixResult<HttpResponse> {
        register::handle_register(self, request).await
    }

    // 登录验证
    pub async fn handle_login(&self, request: LoginRequest) -> ActixResult<HttpResponse> {
        login::handle_login(self, request).await
    }

    // 当前调用者信息
    pub async fn handle_me(&self, caller: Caller) -> ActixResult<HttpResponse> {
        token::handle_me(self, caller).await
    }
}
