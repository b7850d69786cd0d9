//! 专业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "majors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub client_id: i64,
    pub name: String,
    pub university_name: String,
    pub address: String,
    pub duration: String,
    pub language: String,
    pub grading_system: String,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clients::Entity",
        from = "Column::ClientId",
        to = "super::clients::Column::Id"
    )]
    Client,
    #[sea_orm(has_many = "super::major_exams::Entity")]
    MajorExams,
    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::major_exams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MajorExams.def()
    }
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 转换为业务模型，`exam_ids` 由存储层从关联表加载
    pub fn into_major(self, exam_ids: Vec<i64>) -> crate::models::majors::entities::Major {
        use crate::models::majors::entities::{Major, MajorStatus};
        use chrono::{DateTime, Utc};

        Major {
            id: self.id,
            client_id: self.client_id,
            name: self.name,
            university_name: self.university_name,
            address: self.address,
            duration: self.duration,
            language: self.language,
            grading_system: self.grading_system,
            notes: self.notes,
            status: self.status.parse::<MajorStatus>().unwrap_or_default(),
            exam_ids,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
