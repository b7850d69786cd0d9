use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub major_id: i64,
    // 申请人（所属客户）ID
    pub student_id: i64,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub stage: String,
    pub notes: String,
    // 关联考试ID
    pub exam_ids: Vec<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
