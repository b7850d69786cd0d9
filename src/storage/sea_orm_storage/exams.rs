//! 考试存储操作

use super::SeaOrmStorage;
use crate::entity::exams::{ActiveModel, Column, Entity as Exams};
use crate::entity::{application_exams, major_exams};
use crate::errors::{BookcaseError, Result};
use crate::models::exams::{
    entities::Exam,
    requests::{CreateExamRequest, UpdateExamRequest},
    responses::ExamListResponse,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建考试
    pub async fn create_exam_impl(&self, req: CreateExamRequest) -> Result<Exam> {
        let now = chrono::Utc::now().timestamp();

        // client_id 必须由服务层确保已设置
        let client_id = req.client_id.ok_or_else(|| {
            BookcaseError::database_operation("client_id must be set before calling create_exam")
        })?;

        let model = ActiveModel {
            client_id: Set(client_id),
            date: Set(req.date.timestamp_millis()),
            address: Set(req.address),
            test_name: Set(req.test_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| BookcaseError::database_operation(format!("创建考试失败: {e}")))?;

        Ok(result.into_exam())
    }

    /// 通过 ID 获取考试
    pub async fn get_exam_by_id_impl(&self, id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| BookcaseError::database_operation(format!("查询考试失败: {e}")))?;

        Ok(result.map(|m| m.into_exam()))
    }

    /// 批量获取考试
    pub async fn list_exams_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<Exam>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Exams::find()
            .filter(Column::Id.is_in(ids.to_vec()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| BookcaseError::database_operation(format!("查询考试失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_exam()).collect())
    }

    /// 列出考试
    pub async fn list_exams_impl(&self, owner_id: Option<i64>) -> Result<ExamListResponse> {
        let mut select = Exams::find();

        if let Some(client_id) = owner_id {
            select = select.filter(Column::ClientId.eq(client_id));
        }

        let items = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| BookcaseError::database_operation(format!("查询考试列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_exam())
            .collect();

        Ok(ExamListResponse { items })
    }

    /// 更新考试
    pub async fn update_exam_impl(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>> {
        // 先检查考试是否存在
        if self.get_exam_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            date: Set(update.date.timestamp_millis()),
            address: Set(update.address),
            test_name: Set(update.test_name),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| BookcaseError::database_operation(format!("更新考试失败: {e}")))?;

        self.get_exam_by_id_impl(id).await
    }

    /// 删除考试及引用它的关联行
    pub async fn delete_exam_impl(&self, id: i64) -> Result<bool> {
        let fail = |e: DbErr| BookcaseError::database_operation(format!("删除考试失败: {e}"));
        let txn = self.db.begin().await.map_err(fail)?;

        major_exams::Entity::delete_many()
            .filter(major_exams::Column::ExamId.eq(id))
            .exec(&txn)
            .await
            .map_err(fail)?;

        application_exams::Entity::delete_many()
            .filter(application_exams::Column::ExamId.eq(id))
            .exec(&txn)
            .await
            .map_err(fail)?;

        let result = Exams::delete_by_id(id).exec(&txn).await.map_err(fail)?;

        txn.commit().await.map_err(fail)?;

        Ok(result.rows_affected > 0)
    }
}
