pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::applications::requests::{CreateApplicationRequest, UpdateApplicationRequest};
use crate::models::auth::entities::Caller;
use crate::storage::Storage;

pub struct ApplicationService {
    storage: Option<Arc<dyn Storage>>,
}

impl ApplicationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取申请列表
    pub async fn list_applications(
        &self,
        request: &HttpRequest,
        caller: &Caller,
    ) -> ActixResult<HttpResponse> {
        list::list_applications(self, request, caller).await
    }

    pub async fn create_application(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        application_data: CreateApplicationRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_application(self, request, caller, application_data).await
    }

    pub async fn get_application(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        application_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_application(self, request, caller, application_id).await
    }

    pub async fn update_application(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        application_id: i64,
        update_data: UpdateApplicationRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_application(self, request, caller, application_id, update_data).await
    }

    pub async fn delete_application(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        application_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_application(self, request, caller, application_id).await
    }
}
