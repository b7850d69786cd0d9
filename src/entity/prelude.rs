//! 预导入模块，方便使用

pub use super::application_exams::{
    ActiveModel as ApplicationExamActiveModel, Entity as ApplicationExams,
    Model as ApplicationExamModel,
};
pub use super::applications::{
    ActiveModel as ApplicationActiveModel, Entity as Applications, Model as ApplicationModel,
};
pub use super::clients::{ActiveModel as ClientActiveModel, Entity as Clients, Model as ClientModel};
pub use super::exams::{ActiveModel as ExamActiveModel, Entity as Exams, Model as ExamModel};
pub use super::major_exams::{
    ActiveModel as MajorExamActiveModel, Entity as MajorExams, Model as MajorExamModel,
};
pub use super::majors::{ActiveModel as MajorActiveModel, Entity as Majors, Model as MajorModel};
