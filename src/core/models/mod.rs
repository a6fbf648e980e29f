//! Data models for `StudyDashboard`
//!
//! The model is a four-level tree: a [`Program`] owns its [`Semester`]s, each
//! semester owns its [`Module`]s and each module owns its [`ExamAttempt`]s.

pub mod exam_attempt;
pub mod module;
pub mod program;
pub mod semester;

pub use exam_attempt::ExamAttempt;
pub use module::Module;
pub use program::Program;
pub use semester::Semester;
