use crate::config::JwtConfig;
use crate::errors::Result;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // Subject (client ID)
    pub name: String, // 用户名
    pub role: String, // 客户角色
    pub iss: String,  // 签发者
    pub aud: String,  // 受众
    pub exp: usize,   // Expiration time (时间戳)
    pub iat: usize,   // Issued at (签发时间)
}

impl Claims {
    /// 解析 subject 为客户 ID
    pub fn client_id(&self) -> Option<i64> {
        self.sub.parse::<i64>().ok()
    }
}

pub struct JwtUtils;

impl JwtUtils {
    // 生成令牌，签发者/受众/有效期取自配置
    pub fn generate_token(
        config: &JwtConfig,
        client_id: i64,
        username: &str,
        role: &str,
    ) -> Result<String> {
        let key = config.signing_key()?;
        let now = chrono::Utc::now();
        let expiration = now + chrono::Duration::minutes(config.expiry_minutes);

        let claims = Claims {
            sub: client_id.to_string(),
            name: username.to_string(),
            role: role.to_string(),
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(key),
        )?;
        Ok(token)
    }

    // 验证令牌：签名、过期时间、签发者、受众
    pub fn verify_token(config: &JwtConfig, token: &str) -> Result<Claims> {
        let key = config.signing_key()?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);

        let data = decode::<Claims>(token, &DecodingKey::from_secret(key), &validation)?;
        Ok(data.claims)
    }
}
