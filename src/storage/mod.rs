use std::sync::Arc;

use crate::models::{
    applications::{
        entities::Application,
        requests::{CreateApplicationRequest, UpdateApplicationRequest},
        responses::ApplicationListResponse,
    },
    clients::{
        entities::Client,
        requests::{CreateClientRequest, UpdateClientRequest},
        responses::ClientListResponse,
    },
    exams::{
        entities::Exam,
        requests::{CreateExamRequest, UpdateExamRequest},
        responses::ExamListResponse,
    },
    majors::{
        entities::Major,
        requests::{CreateMajorRequest, UpdateMajorRequest},
        responses::MajorListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 存储层抽象
///
/// 列表方法的 `owner_id` 为 `None` 时返回全部记录，否则只返回该客户拥有的记录。
/// 多行变更（关联表重建、级联删除）在实现内部使用单个事务完成。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 客户管理方法
    // 创建客户（password 字段须已是哈希值）
    async fn create_client(&self, client: CreateClientRequest) -> Result<Client>;
    // 通过ID获取客户
    async fn get_client_by_id(&self, id: i64) -> Result<Option<Client>>;
    // 通过用户名获取客户
    async fn get_client_by_username(&self, username: &str) -> Result<Option<Client>>;
    // 列出客户
    async fn list_clients(&self, owner_id: Option<i64>) -> Result<ClientListResponse>;
    // 更新客户（password 为 Some 时须已是哈希值）
    async fn update_client(&self, id: i64, update: UpdateClientRequest) -> Result<Option<Client>>;
    // 删除客户及其所有专业、考试、申请和关联行
    async fn delete_client(&self, id: i64) -> Result<bool>;
    // 客户总数
    async fn count_clients(&self) -> Result<u64>;

    /// 专业管理方法
    // 创建专业（client_id 必须由服务层设置）
    async fn create_major(&self, major: CreateMajorRequest) -> Result<Major>;
    async fn get_major_by_id(&self, id: i64) -> Result<Option<Major>>;
    async fn list_majors(&self, owner_id: Option<i64>) -> Result<MajorListResponse>;
    // 更新专业并重建 MajorExam 关联
    async fn update_major(&self, id: i64, update: UpdateMajorRequest) -> Result<Option<Major>>;
    // 删除专业、其关联行以及针对它的申请
    async fn delete_major(&self, id: i64) -> Result<bool>;

    /// 考试管理方法
    // 创建考试（client_id 必须由服务层设置）
    async fn create_exam(&self, exam: CreateExamRequest) -> Result<Exam>;
    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>>;
    // 批量获取考试，不存在的 ID 直接忽略
    async fn list_exams_by_ids(&self, ids: &[i64]) -> Result<Vec<Exam>>;
    async fn list_exams(&self, owner_id: Option<i64>) -> Result<ExamListResponse>;
    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>>;
    // 删除考试及引用它的关联行
    async fn delete_exam(&self, id: i64) -> Result<bool>;

    /// 申请管理方法
    // 创建申请（student_id 必须由服务层设置）
    async fn create_application(&self, application: CreateApplicationRequest)
    -> Result<Application>;
    async fn get_application_by_id(&self, id: i64) -> Result<Option<Application>>;
    async fn list_applications(&self, owner_id: Option<i64>) -> Result<ApplicationListResponse>;
    // 更新申请并重建 ApplicationExam 关联
    async fn update_application(
        &self,
        id: i64,
        update: UpdateApplicationRequest,
    ) -> Result<Option<Application>>;
    async fn delete_application(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
