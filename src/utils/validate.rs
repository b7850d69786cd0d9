use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.@-]+$").expect("Invalid username regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：1 <= x <= 64
    if username.is_empty() || username.len() > 64 {
        return Err("Username length must be between 1 and 64 characters");
    }
    // 用户名格式校验：字母、数字、下划线、连字符、点或 @
    if !USERNAME_RE.is_match(username) {
        return Err(
            "Username must contain only letters, numbers, underscores, hyphens, dots or @",
        );
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password must not be empty");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters long");
    }
    Ok(())
}
