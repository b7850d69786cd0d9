use serde::Serialize;

use crate::models::clients::entities::ClientRole;

// 注册/登录成功响应
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub role: ClientRole,
}
