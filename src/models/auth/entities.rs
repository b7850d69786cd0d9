use serde::Serialize;

use crate::models::clients::entities::ClientRole;

/// 当前请求的调用者身份
///
/// 由 `RequireJWT` 中间件从已验证的令牌声明中解析，写入请求扩展，
/// 处理函数通过提取器显式获取。
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Caller {
    pub id: i64,
    pub username: String,
    pub role: ClientRole,
}

impl Caller {
    pub fn is_admin(&self) -> bool {
        self.role == ClientRole::Admin
    }
}
