use super::entities::Client;
use serde::Serialize;

// 客户列表响应
#[derive(Debug, Serialize)]
pub struct ClientListResponse {
    pub items: Vec<Client>,
}
