//! # Alerter DB
//!
//! The in-memory record store for College Alerter.
//!
//! [`Store`] owns three append-only, insertion-ordered lists: users,
//! complaints and leave notices. Nothing is ever updated or removed, and
//! every lookup is a linear scan. The store is created once at startup and
//! lives for the rest of the process; all data is lost when it exits.
//!
//! # Example
//!
//! ```ignore
//! use alerter_db::Store;
//!
//! let mut store = Store::new();
//! store.insert_user(user)?;
//! let found = store.find_user_by_credentials("a@test.com", "pw");
//! ```

use alerter_core::AppError;
use alerter_models::{Complaint, LeaveNotice, User};

#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    complaints: Vec<Complaint>,
    leave_notices: Vec<LeaveNotice>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn email_exists(&self, email: &str) -> bool {
        self.find_user_by_email(email).is_some()
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// First user whose email and password both match exactly.
    pub fn find_user_by_credentials(&self, email: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.matches_credentials(email, password))
    }

    /// Student-role users in registration order.
    pub fn students(&self) -> impl Iterator<Item = &User> {
        self.users.iter().filter(|u| u.is_student())
    }

    /// Appends a user. Fails with a conflict when the email is taken.
    pub fn insert_user(&mut self, user: User) -> Result<&User, AppError> {
        if self.email_exists(&user.email) {
            return Err(AppError::conflict(anyhow::anyhow!(
                "Email already registered"
            )));
        }

        tracing::debug!(email = %user.email, role = %user.role.kind(), "Inserting user");
        self.users.push(user);
        Ok(&self.users[self.users.len() - 1])
    }

    pub fn complaints(&self) -> &[Complaint] {
        &self.complaints
    }

    pub fn push_complaint(&mut self, complaint: Complaint) -> &Complaint {
        self.complaints.push(complaint);
        &self.complaints[self.complaints.len() - 1]
    }

    pub fn leave_notices(&self) -> &[LeaveNotice] {
        &self.leave_notices
    }

    pub fn push_leave_notice(&mut self, notice: LeaveNotice) -> &LeaveNotice {
        self.leave_notices.push(notice);
        &self.leave_notices[self.leave_notices.len() - 1]
    }
}
