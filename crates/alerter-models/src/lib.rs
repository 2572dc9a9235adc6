//! # Alerter Models
//!
//! Domain models for College Alerter.
//!
//! # Modules
//!
//! - [`users`]: users and their role-tagged data
//! - [`records`]: complaints and leave notices submitted by students
//! - [`attendance`]: attendance marks/summaries and simulated result uploads
//! - [`board`]: fixed event, meeting, attendance and grade listings
//!
//! # Example
//!
//! ```ignore
//! use alerter_models::{Role, User};
//!
//! let user = User::new("Alice", "a@test.com", "pw", "123", Role::Student {
//!     student_id: "S1001".into(),
//! });
//! assert_eq!(user.role_data(), "S1001");
//! ```

pub mod attendance;
pub mod board;
pub mod records;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use attendance::{AttendanceEntry, AttendanceMark, AttendanceSummary, ResultUpload};
pub use records::{Complaint, LeaveNotice};
pub use users::{Role, RoleKind, StaffPosition, User};
