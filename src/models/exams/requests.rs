use serde::Deserialize;

// 创建考试请求，client_id 规则同专业
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExamRequest {
    #[serde(default)]
    pub client_id: Option<i64>,
    pub date: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub test_name: String,
}

// 更新考试请求，id 可省略
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExamRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub test_name: String,
}
