//! MajorExam / ApplicationExam 关联表的通用读写

use std::collections::HashMap;

use crate::entity::{application_exams, major_exams};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};

/// 以 (父资源ID, 考试ID) 为复合主键的关联表
pub(super) trait ExamLinkEntity: EntityTrait {
    fn parent_column() -> Self::Column;
    fn exam_column() -> Self::Column;
    fn new_link(parent_id: i64, exam_id: i64) -> Self::ActiveModel;
    fn link_ids(model: &Self::Model) -> (i64, i64);
}

impl ExamLinkEntity for major_exams::Entity {
    fn parent_column() -> Self::Column {
        major_exams::Column::MajorId
    }

    fn exam_column() -> Self::Column {
        major_exams::Column::ExamId
    }

    fn new_link(parent_id: i64, exam_id: i64) -> Self::ActiveModel {
        major_exams::ActiveModel {
            major_id: Set(parent_id),
            exam_id: Set(exam_id),
        }
    }

    fn link_ids(model: &Self::Model) -> (i64, i64) {
        (model.major_id, model.exam_id)
    }
}

impl ExamLinkEntity for application_exams::Entity {
    fn parent_column() -> Self::Column {
        application_exams::Column::ApplicationId
    }

    fn exam_column() -> Self::Column {
        application_exams::Column::ExamId
    }

    fn new_link(parent_id: i64, exam_id: i64) -> Self::ActiveModel {
        application_exams::ActiveModel {
            application_id: Set(parent_id),
            exam_id: Set(exam_id),
        }
    }

    fn link_ids(model: &Self::Model) -> (i64, i64) {
        (model.application_id, model.exam_id)
    }
}

/// 批量加载父资源关联的考试 ID，按考试 ID 升序
pub(super) async fn load_exam_ids<E, C>(
    conn: &C,
    parent_ids: Vec<i64>,
) -> Result<HashMap<i64, Vec<i64>>, DbErr>
where
    E: ExamLinkEntity,
    C: ConnectionTrait,
{
    let mut map: HashMap<i64, Vec<i64>> = HashMap::new();
    if parent_ids.is_empty() {
        return Ok(map);
    }

    let rows = E::find()
        .filter(E::parent_column().is_in(parent_ids))
        .order_by_asc(E::exam_column())
        .all(conn)
        .await?;

    for row in rows {
        let (parent_id, exam_id) = E::link_ids(&row);
        map.entry(parent_id).or_default().push(exam_id);
    }
    Ok(map)
}

/// 用给定考试集合替换父资源的全部关联行
pub(super) async fn replace_exam_links<E, C>(
    conn: &C,
    parent_id: i64,
    exam_ids: &[i64],
) -> Result<(), DbErr>
where
    E: ExamLinkEntity,
    C: ConnectionTrait,
{
    E::delete_many()
        .filter(E::parent_column().eq(parent_id))
        .exec(conn)
        .await?;

    for exam_id in exam_ids {
        E::insert(E::new_link(parent_id, *exam_id))
            .exec_without_returning(conn)
            .await?;
    }
    Ok(())
}
