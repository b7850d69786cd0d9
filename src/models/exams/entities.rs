use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    // 所属客户ID
    pub client_id: i64,
    // 考试时间
    pub date: chrono::DateTime<chrono::Utc>,
    pub address: String,
    pub test_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
