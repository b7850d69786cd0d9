pub mod access;
pub mod applications;
pub mod auth;
pub mod clients;
pub mod exam_links;
pub mod exams;
pub mod majors;

pub use applications::ApplicationService;
pub use auth::AuthService;
pub use clients::ClientService;
pub use exams::ExamService;
pub use majors::MajorService;
