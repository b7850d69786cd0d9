//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod applications;
mod clients;
mod exam_links;
mod exams;
mod majors;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{BookcaseError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 按给定数据库配置连接并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| BookcaseError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| BookcaseError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        // 内存数据库不支持 WAL
        if !url.contains(":memory:") {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory")
                .pragma("wal_autocheckpoint", "1000");
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size.max(1))
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| BookcaseError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| BookcaseError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(BookcaseError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    applications::{
        entities::Application,
        requests::{CreateApplicationRequest, UpdateApplicationRequest},
        responses::ApplicationListResponse,
    },
    clients::{
        entities::Client,
        requests::{CreateClientRequest, UpdateClientRequest},
        responses::ClientListResponse,
    },
    exams::{
        entities::Exam,
        requests::{CreateExamRequest, UpdateExamRequest},
        responses::ExamListResponse,
    },
    majors::{
        entities::Major,
        requests::{CreateMajorRequest, UpdateMajorRequest},
        responses::MajorListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 客户模块
    async fn create_client(&self, client: CreateClientRequest) -> Result<Client> {
        self.create_client_impl(client).await
    }

    async fn get_client_by_id(&self, id: i64) -> Result<Option<Client>> {
        self.get_client_by_id_impl(id).await
    }

    async fn get_client_by_username(&self, username: &str) -> Result<Option<Client>> {
        self.get_client_by_username_impl(username).await
    }

    async fn list_clients(&self, owner_id: Option<i64>) -> Result<ClientListResponse> {
        self.list_clients_impl(owner_id).await
    }

    async fn update_client(&self, id: i64, update: UpdateClientRequest) -> Result<Option<Client>> {
        self.update_client_impl(id, update).await
    }

    async fn delete_client(&self, id: i64) -> Result<bool> {
        self.delete_client_impl(id).await
    }

    async fn count_clients(&self) -> Result<u64> {
        self.count_clients_impl().await
    }

    // 专业模块
    async fn create_major(&self, major: CreateMajorRequest) -> Result<Major> {
        self.create_major_impl(major).await
    }

    async fn get_major_by_id(&self, id: i64) -> Result<Option<Major>> {
        self.get_major_by_id_impl(id).await
    }

    async fn list_majors(&self, owner_id: Option<i64>) -> Result<MajorListResponse> {
        self.list_majors_impl(owner_id).await
    }

    async fn update_major(&self, id: i64, update: UpdateMajorRequest) -> Result<Option<Major>> {
        self.update_major_impl(id, update).await
    }

    async fn delete_major(&self, id: i64) -> Result<bool> {
        self.delete_major_impl(id).await
    }

    // 考试模块
    async fn create_exam(&self, exam: CreateExamRequest) -> Result<Exam> {
        self.create_exam_impl(exam).await
    }

    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>> {
        self.get_exam_by_id_impl(id).await
    }

    async fn list_exams_by_ids(&self, ids: &[i64]) -> Result<Vec<Exam>> {
        self.list_exams_by_ids_impl(ids).await
    }

    async fn list_exams(&self, owner_id: Option<i64>) -> Result<ExamListResponse> {
        self.list_exams_impl(owner_id).await
    }

    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>> {
        self.update_exam_impl(id, update).await
    }

    async fn delete_exam(&self, id: i64) -> Result<bool> {
        self.delete_exam_impl(id).await
    }

    // 申请模块
    async fn create_application(
        &self,
        application: CreateApplicationRequest,
    ) -> Result<Application> {
        self.create_application_impl(application).await
    }

    async fn get_application_by_id(&self, id: i64) -> Result<Option<Application>> {
        self.get_application_by_id_impl(id).await
    }

    async fn list_applications(&self, owner_id: Option<i64>) -> Result<ApplicationListResponse> {
        self.list_applications_impl(owner_id).await
    }

    async fn update_application(
        &self,
        id: i64,
        update: UpdateApplicationRequest,
    ) -> Result<Option<Application>> {
        self.update_application_impl(id, update).await
    }

    async fn delete_application(&self, id: i64) -> Result<bool> {
        self.delete_application_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("bookcase.db").unwrap(),
            "sqlite://bookcase.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/db").unwrap(),
            "postgres://u:p@localhost/db"
        );
        assert!(SeaOrmStorage::build_database_url("ftp://nope").is_err());
    }
}
