use serde::Deserialize;

// 注册请求
//
// role 只有显式为 "Admin" 时才创建管理员，其余值一律按 "User" 处理
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
}

// 登录请求
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
