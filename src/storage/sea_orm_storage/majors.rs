//! 专业存储操作

use super::SeaOrmStorage;
use super::exam_links::{load_exam_ids, replace_exam_links};
use crate::entity::majors::{ActiveModel, Column, Entity as Majors};
use crate::entity::{application_exams, applications, major_exams};
use crate::errors::{BookcaseError, Result};
use crate::models::majors::{
    entities::Major,
    requests::{CreateMajorRequest, UpdateMajorRequest},
    responses::MajorListResponse,
};
use crate::utils::ids::unique_ids;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

type Links = major_exams::Entity;

impl SeaOrmStorage {
    /// 创建专业
    pub async fn create_major_impl(&self, req: CreateMajorRequest) -> Result<Major> {
        let now = chrono::Utc::now().timestamp();

        // client_id 必须由服务层确保已设置
        let client_id = req.client_id.ok_or_else(|| {
            BookcaseError::database_operation("client_id must be set before calling create_major")
        })?;
        let exam_ids = unique_ids(&req.exam_ids);

        let fail = |e: DbErr| BookcaseError::database_operation(format!("创建专业失败: {e}"));
        let txn = self.db.begin().await.map_err(fail)?;

        let model = ActiveModel {
            client_id: Set(client_id),
            name: Set(req.name),
            university_name: Set(req.university_name),
            address: Set(req.address),
            duration: Set(req.duration),
            language: Set(req.language),
            grading_system: Set(req.grading_system),
            notes: Set(req.notes),
            status: Set(req.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&txn).await.map_err(fail)?;
        replace_exam_links::<Links, _>(&txn, result.id, &exam_ids)
            .await
            .map_err(fail)?;

        txn.commit().await.map_err(fail)?;

        Ok(result.into_major(exam_ids))
    }

    /// 通过 ID 获取专业
    pub async fn get_major_by_id_impl(&self, id: i64) -> Result<Option<Major>> {
        let fail = |e: DbErr| BookcaseError::database_operation(format!("查询专业失败: {e}"));

        let Some(model) = Majors::find_by_id(id).one(&self.db).await.map_err(fail)? else {
            return Ok(None);
        };

        let mut links = load_exam_ids::<Links, _>(&self.db, vec![id])
            .await
            .map_err(fail)?;
        let exam_ids = links.remove(&id).unwrap_or_default();

        Ok(Some(model.into_major(exam_ids)))
    }

    /// 列出专业
    pub async fn list_majors_impl(&self, owner_id: Option<i64>) -> Result<MajorListResponse> {
        let fail = |e: DbErr| BookcaseError::database_operation(format!("查询专业列表失败: {e}"));

        let mut select = Majors::find();

        // 非管理员只能看到自己的专业
        if let Some(client_id) = owner_id {
            select = select.filter(Column::ClientId.eq(client_id));
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
                m.into_major(exam_ids)
            })
            .collect();

        Ok(MajorListResponse { items })
    }

    /// 更新专业，覆盖全部可变字段并重建考试关联
    pub async fn update_major_impl(
        &self,
        id: i64,
        update: UpdateMajorRequest,
    ) -> Result<Option<Major>> {
        // 先检查专业是否存在
        if self.get_major_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let exam_ids = unique_ids(&update.exam_ids);
        let fail = |e: DbErr| BookcaseError::database_operation(format!("更新专业失败: {e}"));
        let txn = self.db.begin().await.map_err(fail)?;

        let model = ActiveModel {
            id: Set(id),
            name: Set(update.name),
            university_name: Set(update.university_name),
            address: Set(update.address),
            duration: Set(update.duration),
            language: Set(update.language),
            grading_system: Set(update.grading_system),
            notes: Set(update.notes),
            status: Set(update.status.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model.update(&txn).await.map_err(fail)?;
        replace_exam_links::<Links, _>(&txn, id, &exam_ids)
            .await
            .map_err(fail)?;

        txn.commit().await.map_err(fail)?;

        self.get_major_by_id_impl(id).await
    }

    /// 删除专业，同时删除其考试关联以及针对该专业的申请
    pub async fn delete_major_impl(&self, id: i64) -> Result<bool> {
        let fail = |e: DbErr| BookcaseError::database_operation(format!("删除专业失败: {e}"));
        let txn = self.db.begin().await.map_err(fail)?;

        let application_ids: Vec<i64> = applications::Entity::find()
            .filter(applications::Column::MajorId.eq(id))
            .all(&txn)
            .await
            .map_err(fail)?
            .into_iter()
            .map(|m| m.id)
            .collect();

        if !application_ids.is_empty() {
            application_exams::Entity::delete_many()
                .filter(application_exams::Column::ApplicationId.is_in(application_ids.clone()))
                .exec(&txn)
                .await
                .map_err(fail)?;

            applications::Entity::delete_many()
                .filter(applications::Column::Id.is_in(application_ids))
                .exec(&txn)
                .await
                .map_err(fail)?;
        }

        major_exams::Entity::delete_many()
            .filter(major_exams::Column::MajorId.eq(id))
            .exec(&txn)
            .await
            .map_err(fail)?;

        let result = Majors::delete_by_id(id).exec(&txn).await.map_err(fail)?;

        txn.commit().await.map_err(fail)?;

        Ok(result.rows_affected > 0)
    }
}
