//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_bookcase_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum BookcaseError {
            $($variant(String),)*
        }

        impl BookcaseError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(BookcaseError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(BookcaseError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(BookcaseError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl BookcaseError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        BookcaseError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_bookcase_errors! {
    Configuration("E001", "Configuration Error"),
    DatabaseConfig("E002", "Database Configuration Error"),
    DatabaseConnection("E003", "Database Connection Error"),
    DatabaseOperation("E004", "Database Operation Error"),
    PasswordHash("E005", "Password Hash Error"),
    Token("E006", "Token Error"),
}

impl BookcaseError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for BookcaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for BookcaseError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for BookcaseError {
    fn from(err: sea_orm::DbErr) -> Self {
        BookcaseError::DatabaseOperation(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for BookcaseError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        BookcaseError::Token(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BookcaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(BookcaseError::configuration("test").code(), "E001");
        assert_eq!(BookcaseError::database_operation("test").code(), "E004");
        assert_eq!(BookcaseError::password_hash("test").code(), "E005");
        assert_eq!(BookcaseError::token("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            BookcaseError::configuration("test").error_type(),
            "Configuration Error"
        );
        assert_eq!(
            BookcaseError::database_connection("test").error_type(),
            "Database Connection Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = BookcaseError::configuration("JWT Key not configured");
        assert_eq!(err.message(), "JWT Key not configured");
    }

    #[test]
    fn test_format_simple() {
        let err = BookcaseError::token("Invalid client ID in token");
        let formatted = err.format_simple();
        assert!(formatted.contains("Token Error"));
        assert!(formatted.contains("client ID"));
    }

    #[test]
    fn test_from_db_err() {
        let err: BookcaseError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert_eq!(err.code(), "E004");
        assert!(err.message().contains("boom"));
    }
}
