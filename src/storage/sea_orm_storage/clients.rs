//! 客户存储操作

use super::SeaOrmStorage;
use crate::entity::clients::{ActiveModel, Column, Entity as Clients};
use crate::entity::{application_exams, applications, exams, major_exams, majors};
use crate::errors::{BookcaseError, Result};
use crate::models::clients::{
    entities::Client,
    requests::{CreateClientRequest, UpdateClientRequest},
    responses::ClientListResponse,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建客户
    pub async fn create_client_impl(&self, req: CreateClientRequest) -> Result<Client> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(req.username),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| BookcaseError::database_operation(format!("创建客户失败: {e}")))?;

        Ok(result.into_client())
    }

    /// 通过 ID 获取客户
    pub async fn get_client_by_id_impl(&self, id: i64) -> Result<Option<Client>> {
        let result = Clients::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| BookcaseError::database_operation(format!("查询客户失败: {e}")))?;

        Ok(result.map(|m| m.into_client()))
    }

    /// 通过用户名获取客户
    pub async fn get_client_by_username_impl(&self, username: &str) -> Result<Option<Client>> {
        let result = Clients::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| BookcaseError::database_operation(format!("查询客户失败: {e}")))?;

        Ok(result.map(|m| m.into_client()))
    }

    /// 列出客户，owner_id 存在时只返回该客户自身
    pub async fn list_clients_impl(&self, owner_id: Option<i64>) -> Result<ClientListResponse> {
        let mut select = Clients::find();

        if let Some(id) = owner_id {
            select = select.filter(Column::Id.eq(id));
        }

        let items = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| BookcaseError::database_operation(format!("查询客户列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_client())
            .collect();

        Ok(ClientListResponse { items })
    }

    /// 更新客户
    pub async fn update_client_impl(
        &self,
        id: i64,
        update: UpdateClientRequest,
    ) -> Result<Option<Client>> {
        // 先检查客户是否存在
        if self.get_client_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            username: Set(update.username),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(password_hash) = update.password {
            model.password_hash = Set(password_hash);
        }

        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| BookcaseError::database_operation(format!("更新客户失败: {e}")))?;

        self.get_client_by_id_impl(id).await
    }

    /// 删除客户，级联删除其拥有的专业、考试、申请以及相关关联行
    pub async fn delete_client_impl(&self, id: i64) -> Result<bool> {
        let fail = |e: DbErr| BookcaseError::database_operation(format!("删除客户失败: {e}"));

        let txn = self.db.begin().await.map_err(fail)?;

        if Clients::find_by_id(id).one(&txn).await.map_err(fail)?.is_none() {
            return Ok(false);
        }

        let major_ids: Vec<i64> = majors::Entity::find()
            .filter(majors::Column::ClientId.eq(id))
            .all(&txn)
            .await
            .map_err(fail)?
            .into_iter()
            .map(|m| m.id)
            .collect();

        let exam_ids: Vec<i64> = exams::Entity::find()
            .filter(exams::Column::ClientId.eq(id))
            .all(&txn)
            .await
            .map_err(fail)?
            .into_iter()
            .map(|m| m.id)
            .collect();

        // 本人提交的申请，以及他人针对本人专业提交的申请
        let application_ids: Vec<i64> = applications::Entity::find()
            .filter(
                Condition::any()
                    .add(applications::Column::StudentId.eq(id))
                    .add(applications::Column::MajorId.is_in(major_ids.clone())),
            )
            .all(&txn)
            .await
            .map_err(fail)?
            .into_iter()
            .map(|m| m.id)
            .collect();

        application_exams::Entity::delete_many()
            .filter(
                Condition::any()
                    .add(application_exams::Column::ApplicationId.is_in(application_ids.clone()))
                    .add(application_exams::Column::ExamId.is_in(exam_ids.clone())),
            )
            .exec(&txn)
            .await
            .map_err(fail)?;

        major_exams::Entity::delete_many()
            .filter(
                Condition::any()
                    .add(major_exams::Column::MajorId.is_in(major_ids.clone()))
                    .add(major_exams::Column::ExamId.is_in(exam_ids)),
            )
            .exec(&txn)
            .await
            .map_err(fail)?;

        applications::Entity::delete_many()
            .filter(applications::Column::Id.is_in(application_ids))
            .exec(&txn)
            .await
            .map_err(fail)?;

        exams::Entity::delete_many()
            .filter(exams::Column::ClientId.eq(id))
            .exec(&txn)
            .await
            .map_err(fail)?;

        majors::Entity::delete_many()
            .filter(majors::Column::ClientId.eq(id))
            .exec(&txn)
            .await
            .map_err(fail)?;

        let result = Clients::delete_by_id(id).exec(&txn).await.map_err(fail)?;

        txn.commit().await.map_err(fail)?;

        Ok(result.rows_affected > 0)
    }

    /// 客户总数
    pub async fn count_clients_impl(&self) -> Result<u64> {
        Clients::find()
            .count(&self.db)
            .await
            .map_err(|e| BookcaseError::database_operation(format!("统计客户数量失败: {e}")))
    }
}
