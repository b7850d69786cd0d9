pub mod applications;
pub mod auth;
pub mod clients;
pub mod common;
pub mod exams;
pub mod majors;

pub use common::{ApiResponse, ErrorCode};
