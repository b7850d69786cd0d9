//! 资源访问控制：管理员可访问全部记录，普通用户只能访问自己拥有的记录

use actix_web::HttpResponse;
use std::sync::Arc;
use tracing::{error, info};

use crate::models::{ApiResponse, ErrorCode, auth::entities::Caller};
use crate::storage::Storage;

/// 调用者是否可以访问属于 `owner_id` 的资源
pub fn is_owner_or_admin(caller_id: i64, is_admin: bool, owner_id: i64) -> bool {
    is_admin || caller_id == owner_id
}

/// 无权访问时返回 403 响应
pub fn ensure_owner_or_admin(
    caller: &Caller,
    owner_id: i64,
    resource: &str,
) -> Result<(), HttpResponse> {
    if is_owner_or_admin(caller.id, caller.is_admin(), owner_id) {
        return Ok(());
    }

    info!(
        "Client {} denied access to {} owned by {}",
        caller.id, resource, owner_id
    );
    Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::Forbidden,
        format!("You do not have permission to access this {resource}"),
    )))
}

/// 计算新建资源的所有者
///
/// 普通用户传入的值会被静默覆盖为自己的 ID；
/// 管理员的值被保留，未提供时使用管理员自己的 ID。
pub fn effective_owner(caller: &Caller, requested: Option<i64>) -> i64 {
    if caller.is_admin() {
        requested.unwrap_or(caller.id)
    } else {
        caller.id
    }
}

/// 确认新建资源的所有者仍然存在
///
/// 令牌在客户被删除后直到过期前仍然有效，因此即使所有者就是调用者本人也要检查。
pub async fn ensure_owner_exists(
    storage: &Arc<dyn Storage>,
    owner_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_client_by_id(owner_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ClientNotFound,
            format!("Client {owner_id} does not exist"),
        ))),
        Err(e) => {
            error!("Failed to look up client {}: {}", owner_id, e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to look up owner",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clients::entities::ClientRole;

    fn caller(id: i64, role: ClientRole) -> Caller {
        Caller {
            id,
            username: format!("client{id}"),
            role,
        }
    }

    #[test]
    fn test_predicate() {
        assert!(is_owner_or_admin(1, false, 1));
        assert!(!is_owner_or_admin(1, false, 2));
        assert!(is_owner_or_admin(1, true, 2));
    }

    #[test]
    fn test_ensure_owner_or_admin() {
        let user = caller(1, ClientRole::User);
        assert!(ensure_owner_or_admin(&user, 1, "major").is_ok());

        let denied = ensure_owner_or_admin(&user, 2, "major").unwrap_err();
        assert_eq!(denied.status(), actix_web::http::StatusCode::FORBIDDEN);

        let admin = caller(9, ClientRole::Admin);
        assert!(ensure_owner_or_admin(&admin, 2, "major").is_ok());
    }

    #[test]
    fn test_effective_owner() {
        let user = caller(1, ClientRole::User);
        assert_eq!(effective_owner(&user, Some(999)), 1);
        assert_eq!(effective_owner(&user, None), 1);

        let admin = caller(9, ClientRole::Admin);
        assert_eq!(effective_owner(&admin, Some(3)), 3);
        assert_eq!(effective_owner(&admin, None), 9);
    }
}
