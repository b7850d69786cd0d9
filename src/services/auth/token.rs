use actix_web::{HttpResponse, Result as ActixResult};

use crate::errors::{BookcaseError, Result};
use crate::models::{
    ApiResponse,
    auth::entities::Caller,
    clients::entities::ClientRole,
};
use crate::utils::jwt::{Claims, JwtUtils};

use super::AuthService;

impl AuthService {
    /// 生成签名令牌，未配置密钥时返回配置错误
    pub fn generate_jwt_token(
        &self,
        username: &str,
        role: ClientRole,
        client_id: i64,
    ) -> Result<String> {
        JwtUtils::generate_token(self.jwt_config(), client_id, username, &role.to_string())
    }

    /// 验证令牌并返回声明
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        JwtUtils::verify_token(self.jwt_config(), token)
    }

    /// 验证令牌并解析调用者身份
    pub fn authenticate(&self, token: &str) -> Result<Caller> {
        let claims = self.verify_token(token)?;
        let id = claims
            .client_id()
            .ok_or_else(|| BookcaseError::token("Invalid client ID in token"))?;

        Ok(Caller {
            id,
            username: claims.name,
            role: ClientRole::from_claim(&claims.role),
        })
    }
}

pub async fn handle_me(_service: &AuthService, caller: Caller) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(caller, "Caller identity")))
}
