use super::entities::Exam;
use serde::Serialize;

// 考试列表响应
#[derive(Debug, Serialize)]
pub struct ExamListResponse {
    pub items: Vec<Exam>,
}
