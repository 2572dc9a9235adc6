pub mod auth;
pub mod staff;
pub mod students;
pub mod teachers;

pub use self::auth::model::{LoginRequest, Session};
