//! 申请实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub major_id: i64,
    pub student_id: i64,
    pub deadline: i64, // 毫秒时间戳
    pub stage: String,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::majors::Entity",
        from = "Column::MajorId",
        to = "super::majors::Column::Id"
    )]
    Major,
    #[sea_orm(
        belongs_to = "super::clients::Entity",
        from = "Column::StudentId",
        to = "super::clients::Column::Id"
    )]
    Student,
    #[sea_orm(has_many = "super::application_exams::Entity")]
    ApplicationExams,
}

impl Related<super::majors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Major.def()
    }
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::application_exams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationExams.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_application(
        self,
        exam_ids: Vec<i64>,
    ) -> crate::models::applications::entities::Application {
        use crate::models::applications::entities::Application;
        use chrono::{DateTime, Utc};

        Application {
            id: self.id,
            major_id: self.major_id,
            student_id: self.student_id,
            deadline: DateTime::<Utc>::from_timestamp_millis(self.deadline).unwrap_or_default(),
            stage: self.stage,
            notes: self.notes,
            exam_ids,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
