pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::auth::entities::Caller;
use crate::models::exams::requests::{CreateExamRequest, UpdateExamRequest};
use crate::storage::Storage;

pub struct ExamService {
    storage: Option<Arc<dyn Storage>>,
}

impl ExamService {
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

    pub async fn list_exams(
        &self,
        request: &HttpRequest,
        caller: &Caller,
    ) -> ActixResult<HttpResponse> {
        list::list_exams(self, request, caller).await
    }

    pub async fn create_exam(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        exam_data: CreateExamRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_exam(self, request, caller, exam_data).await
    }

    pub async fn get_exam(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        exam_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_exam(self, request, caller, exam_id).await
    }

    pub async fn update_exam(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        exam_id: i64,
        update_data: UpdateExamRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_exam(self, request, caller, exam_id, update_data).await
    }

    pub async fn delete_exam(
        &self,
        request: &HttpRequest,
        caller: &Caller,
        exam_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_exam(self, request, caller, exam_id).await
    }
}
