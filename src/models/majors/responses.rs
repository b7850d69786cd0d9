use super::entities::Major;
use serde::Serialize;

// 专业列表响应
#[derive(Debug, Serialize)]
pub struct MajorListResponse {
    pub items: Vec<Major>,
}
