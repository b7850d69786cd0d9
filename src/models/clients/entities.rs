use serde::{Deserialize, Serialize};

// 客户角色
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClientRole {
    #[default]
    User, // 普通用户
    Admin, // 管理员
}

impl ClientRole {
    pub const USER: &'static str = "User";
    pub const ADMIN: &'static str = "Admin";

    pub fn admin_roles() -> &'static [&'static ClientRole] {
        &[&Self::Admin]
    }

    /// 宽松解析：只有 "Admin" 视为管理员，其余一律为普通用户
    pub fn from_claim(s: &str) -> Self {
        if s == Self::ADMIN {
            ClientRole::Admin
        } else {
            ClientRole::User
        }
    }
}

impl std::fmt::Display for ClientRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientRole::User => write!(f, "{}", ClientRole::USER),
            ClientRole::Admin => write!(f, "{}", ClientRole::ADMIN),
        }
    }
}

impl std::str::FromStr for ClientRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ClientRole::USER => Ok(ClientRole::User),
            ClientRole::ADMIN => Ok(ClientRole::Admin),
            _ => Err(format!("Invalid client role: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: ClientRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Client {
    pub fn is_admin(&self) -> bool {
        self.role == ClientRole::Admin
    }
}
