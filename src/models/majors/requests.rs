use serde::Deserialize;

use super::entities::MajorStatus;

// 创建专业请求
//
// # client_id 字段说明
// - **普通用户**：无论传入什么值，都会被覆盖为当前登录用户的 ID
// - **管理员**：可指定所属客户，不填写则使用管理员自己的 ID
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateMajorRequest {
    pub client_id: Option<i64>,
    pub name: String,
    pub university_name: String,
    pub address: String,
    pub duration: String,
    pub language: String,
    pub grading_system: String,
    pub notes: String,
    pub status: MajorStatus,
    pub exam_ids: Vec<i64>,
}

// 更新专业请求，全量覆盖可变字段
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMajorRequest {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub university_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub grading_system: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: MajorStatus,
    #[serde(default)]
    pub exam_ids: Vec<i64>,
}
