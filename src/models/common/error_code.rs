use serde::Serialize;

/// 应用错误码，随 `ApiResponse.code` 返回给客户端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    IdMismatch = 1005,
    InternalServerError = 1500,

    // 认证错误
    AuthFailed = 2000,
    RegisterFailed = 2001,

    // 客户错误
    ClientNotFound = 3000,
    ClientNameInvalid = 3001,
    ClientPasswordInvalid = 3002,
    ClientAlreadyExists = 3003,
    ClientCreationFailed = 3004,
    ClientUpdateFailed = 3005,
    ClientDeleteFailed = 3006,

    // 专业错误
    MajorNotFound = 4000,
    MajorCreationFailed = 4001,
    MajorUpdateFailed = 4002,
    MajorDeleteFailed = 4003,

    // 考试错误
    ExamNotFound = 5000,
    ExamCreationFailed = 5001,
    ExamUpdateFailed = 5002,
    ExamDeleteFailed = 5003,
    ExamLinkInvalid = 5004,

    // 申请错误
    ApplicationNotFound = 6000,
    ApplicationCreationFailed = 6001,
    ApplicationUpdateFailed = 6002,
    ApplicationDeleteFailed = 6003,
    ApplicationMajorInvalid = 6004,
}
