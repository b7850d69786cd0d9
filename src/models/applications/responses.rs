use super::entities::Application;
use serde::Serialize;

// 申请列表响应
#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub items: Vec<Application>,
}
