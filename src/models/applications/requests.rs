use serde::Deserialize;

// 创建申请请求
//
// student_id 对普通用户无效，总是使用当前登录用户的 ID
#[derive(Debug, Clone, Deserialize)]
pub struct CreateApplicationRequest {
    #[serde(default)]
    pub student_id: Option<i64>,
    pub major_id: i64,
    pub deadline: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub exam_ids: Vec<i64>,
}

// 更新申请请求，student_id 不可修改
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateApplicationRequest {
    pub id: i64,
    pub major_id: i64,
    pub deadline: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub exam_ids: Vec<i64>,
}
