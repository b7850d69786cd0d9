pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::config::{AppConfig, Argon2Config};
use crate::models::auth::entities::Caller;
use crate::models::clients::requests::{CreateClientRequest, UpdateClientRequest};
use crate::services::AuthService;
use crate::storage::Storage;

pub struct ClientService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClientService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 密码哈希参数与认证服务保持一致
    pub(crate) fn get_argon2_config(&self, request: &HttpRequest) -> Argon2Config {
        request
            .app_data::<web::Data<AuthService>>()
            .map(|auth| auth.argon2_config().clone())
            .unwrap_or_else(|| AppConfig::get().argon2.clone())
    }

    // 获取客户列表
    pub async fn list_clients(
        &self,
        request: &HttpRequest,
        caller: &Caller,
    ) -> ActixResult<HttpResponse> {
        list::list_clients(self, request, caller).await
    }

    // 创建客户（仅管理员）
    pub async fn create_client(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        client_data: CreateClientRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_client(self, request, caller, client_data).await
    }

    pub async fn get_client(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        client_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_client(self, request, caller, client_id).await
    }

    pub async fn update_client(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        client_id: i64,
        update_data: UpdateClientRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_client(self, request, caller, client_id, update_data).await
    }

    // 删除客户及其全部数据
    pub async fn delete_client(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        client_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_client(self, request, caller, client_id).await
    }
}
