//! 申请存储操作

use super::SeaOrmStorage;
use super::exam_links::{load_exam_ids, replace_exam_links};
use crate::entity::applications::{ActiveModel, Column, Entity as Applications};
use crate::entity::application_exams;
use crate::errors::{BookcaseError, Result};
use crate::models::applications::{
    entities::Application,
    requests::{CreateApplicationRequest, UpdateApplicationRequest},
    responses::ApplicationListResponse,
};
use crate::utils::ids::unique_ids;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

type Links = application_exams::Entity;

impl SeaOrmStorage {
    /// 创建申请
    pub async fn create_application_impl(
        &self,
        req: CreateApplicationRequest,
    ) -> Result<Application> {
        let now = chrono::Utc::now().timestamp();

        // student_id 必须由服务层确保已设置
        let student_id = req.student_id.ok_or_else(|| {
            BookcaseError::database_operation(
                "student_id must be set before calling create_application",
            )
        })?;
        let exam_ids = unique_ids(&req.exam_ids);

        let fail = |e: DbErr| BookcaseError::database_operation(format!("创建申请失败: {e}"));
        let txn = self.db.begin().await.map_err(fail)?;

        let model = ActiveModel {
            major_id: Set(req.major_id),
            student_id: Set(student_id),
            deadline: Set(req.deadline.timestamp_millis()),
            stage: Set(req.stage),
            notes: Set(req.notes),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&txn).await.map_err(fail)?;
        replace_exam_links::<Links, _>(&txn, result.id, &exam_ids)
            .await
            .map_err(fail)?;

        txn.commit().await.map_err(fail)?;

        Ok(result.into_application(exam_ids))
    }

    /// 通过 ID 获取申请
    pub async fn get_application_by_id_impl(&self, id: i64) -> Result<Option<Application>> {
        let fail = |e: DbErr| BookcaseError::database_operation(format!("查询申请失败: {e}"));

        let Some(model) = Applications::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(fail)?
        else {
            return Ok(None);
        };

        let mut links = load_exam_ids::<Links, _>(&self.db, vec![id])
            .await
            .map_err(fail)?;
        let exam_ids = links.remove(&id).unwrap_or_default();

        Ok(Some(model.into_application(exam_ids)))
    }

    /// 列出申请
    pub async fn list_applications_impl(
        &self,
        owner_id: Option<i64>,
    ) -> Result<ApplicationListResponse> {
        let fail = |e: DbErr| BookcaseError::database_operation(format!("查询申请列表失败: {e}"));

        let mut select = Applications::find();

        if let Some(student_id) = owner_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let models = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(fail)?;

        let ids = models.iter().map(|m| m.id).collect();
        let mut links = load_exam_ids::<Links, _>(&self.db, ids)
            .await
            .map_err(fail)?;

        let items = models
            .into_iter()
            .map(|m| {
                let exam_ids = links.remove(&m.id).unwrap_or_default();
                m.into_application(exam_ids)
            })
            .collect();

        Ok(ApplicationListResponse { items })
    }

    /// 更新申请，student_id 保持不变
    pub async fn update_application_impl(
        &self,
        id: i64,
        update: UpdateApplicationRequest,
    ) -> Result<Option<Application>> {
        if self.get_application_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let exam_ids = unique_ids(&update.exam_ids);
        let fail = |e: DbErr| BookcaseError::database_operation(format!("更新申请失败: {e}"));
        let txn = self.db.begin().await.map_err(fail)?;

        let model = ActiveModel {
            id: Set(id),
            major_id: Set(update.major_id),
            deadline: Set(update.deadline.timestamp_millis()),
            stage: Set(update.stage),
            notes: Set(update.notes),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model.update(&txn).await.map_err(fail)?;
        replace_exam_links::<Links, _>(&txn, id, &exam_ids)
            .await
            .map_err(fail)?;

        txn.commit().await.map_err(fail)?;

        self.get_application_by_id_impl(id).await
    }

    /// 删除申请及其考试关联
    pub async fn delete_application_impl(&self, id: i64) -> Result<bool> {
        let fail = |e: DbErr| BookcaseError::database_operation(format!("删除申请失败: {e}"));
        let txn = self.db.begin().await.map_err(fail)?;

        application_exams::Entity::delete_many()
            .filter(application_exams::Column::ApplicationId.eq(id))
            .exec(&txn)
            .await
            .map_err(fail)?;

        let result = Applications::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(fail)?;

        txn.commit().await.map_err(fail)?;

        Ok(result.rows_affected > 0)
    }
}
