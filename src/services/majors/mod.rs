pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::auth::entities::Caller;
use crate::models::majors::requests::{CreateMajorRequest, UpdateMajorRequest};
use crate::storage::Storage;

pub struct MajorService {
    storage: Option<Arc<dyn Storage>>,
}

impl MajorService {
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

    // 获取专业列表
    pub async fn list_majors(
        &self,
        request: &HttpRequest,
        caller: &Caller,
    ) -> ActixResult<HttpResponse> {
        list::list_majors(self, request, caller).await
    }

    pub async fn create_major(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        major_data: CreateMajorRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_major(self, request, caller, major_data).await
    }

    // 根据专业 ID 获取专业信息
    pub async fn get_major(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        major_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_major(self, request, caller, major_id).await
    }

    // 更新专业信息
    pub async fn update_major(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        major_id: i64,
        update_data: UpdateMajorRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_major(self, request, caller, major_id, update_data).await
    }

    // 根据专业 ID 删除专业
    pub async fn delete_major(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        major_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_major(self, request, caller, major_id).await
    }
}
