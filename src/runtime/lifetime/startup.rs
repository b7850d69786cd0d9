use crate::config::{AppConfig, Argon2Config};
use crate::models::clients::entities::{Client, ClientRole};
use crate::models::clients::requests::CreateClientRequest;
use crate::services::AuthService;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use actix_web::web;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub auth: web::Data<AuthService>,
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化默认管理员账号
///
/// 仅当客户表为空时创建 `admin`，密码未提供时随机生成并打印一次。
pub async fn seed_admin(
    storage: &Arc<dyn Storage>,
    argon2: &Argon2Config,
    password: Option<String>,
) -> Option<Client> {
    match storage.count_clients().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} client(s), skipping admin seed",
                count
            );
            return None;
        }
        Ok(_) => {
            info!("No clients found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count clients: {}, skipping admin seed", e);
            return None;
        }
    }

    let password = password.unwrap_or_else(|| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password, argon2) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return None;
        }
    };

    let admin_request = CreateClientRequest {
        username: "admin".to_string(),
        password: password_hash,
        role: ClientRole::Admin,
    };

    match storage.create_client(admin_request).await {
        Ok(client) => {
            info!(
                "Default admin account created successfully (ID: {}, username: {})",
                client.id, client.username
            );
            Some(client)
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
            None
        }
    }
}

/// 准备服务器启动的上下文
/// 包括 TLS 提供者、存储、迁移、管理员账号和认证服务
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = AppConfig::get();

    // 未配置签名密钥时拒绝启动
    if let Err(e) = config.jwt.signing_key() {
        error!("{}", e.format_simple());
        panic!("{}", e.message());
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    seed_admin(
        &storage,
        &config.argon2,
        std::env::var("ADMIN_PASSWORD").ok(),
    )
    .await;

    let auth = web::Data::new(AuthService::from_config(storage.clone()));

    StartupContext { storage, auth }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::utils::password::verify_password;

    fn fast_params() -> Argon2Config {
        Argon2Config {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        }
    }

    async fn memory_storage() -> Arc<dyn Storage> {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        };
        Arc::new(SeaOrmStorage::connect(&config).await.unwrap())
    }

    #[test]
    fn test_random_password_charset() {
        let pwd = generate_random_password(16);
        assert_eq!(pwd.chars().count(), 16);
        assert!(pwd.chars().all(|c| c.is_ascii_graphic()));
    }

    #[actix_web::test]
    async fn test_seed_admin_once() {
        let storage = memory_storage().await;

        let admin = seed_admin(&storage, &fast_params(), Some("s3cret".to_string()))
            .await
            .unwrap();
        assert_eq!(admin.username, "admin");
        assert!(admin.is_admin());
        assert!(verify_password("s3cret", &admin.password_hash));

        // 已有客户时不再创建
        assert!(
            seed_admin(&storage, &fast_params(), None)
                .await
                .is_none()
        );
        assert_eq!(storage.count_clients().await.unwrap(), 1);
    }
}
