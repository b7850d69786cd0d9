use serde::Deserialize;

use super::entities::ClientRole;

// 创建客户请求（仅管理员）
#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub role: ClientRole,
}

// 更新客户请求
//
// - `password` 为空时保留原密码
// - `role` 仅管理员修改时生效
#[derive(Debug, Deserialize)]
pub struct UpdateClientRequest {
    pub id: i64,
    pub username: String,
    pub password: Option<String>,
    pub role: Option<ClientRole>,
}
