//! # College Alerter
//!
//! A menu-driven console college portal. Users register and log in, then
//! land on a dashboard chosen by their role:
//!
//! - **Students** view events, attendance and results, and submit complaints
//!   and leave notices.
//! - **Teachers** view meetings, simulate result uploads, take attendance and
//!   read the complaints and leave notices students have submitted.
//! - **Non-teaching staff** get a placeholder screen.
//!
//! All state lives in memory for a single run. The process is
//! single-threaded and every screen blocks on console input.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── alerter-core/     # AppError, Console seam, menu input readers
//! ├── alerter-config/   # AppConfig from environment variables
//! ├── alerter-db/       # In-memory append-only record store
//! └── alerter-models/   # User/Role, Complaint, LeaveNotice, attendance
//! src/
//! ├── cli/              # Command-line flags and demo-account seeder
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Registration and login
//! │   ├── students/    # Student dashboard
//! │   ├── teachers/    # Teacher dashboard
//! │   └── staff/       # Non-teaching staff screen
//! ├── logging.rs        # tracing subscriber setup
//! ├── router.rs         # Main menu and role dispatch
//! └── state.rs          # Application state owned by the main loop
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: Console screens and menu loops
//! - `service.rs`: Business logic against the store
//! - `model.rs`: Request types and menu choices
//!
//! ## Demo accounts
//!
//! | Email | Password | Role |
//! |-------|----------|------|
//! | `student@test.com` | `pass123` | Student (S1001) |
//! | `student2@test.com` | `pass123` | Student (S1002) |
//! | `teacher@test.com` | `pass456` | Teacher (Professor) |
//! | `staff@test.com` | `pass789` | Staff (Librarian) |
//!
//! Disable them with `--no-demo-users` or `ALERTER_DEMO_USERS=false`.

pub mod cli;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use alerter_config;
pub use alerter_core;
pub use alerter_db;
pub use alerter_models;
