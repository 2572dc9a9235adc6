//! Student-submitted records: complaints and leave notices.
//!
//! Both copy the submitter's email and name at submission time; there is no
//! live link back to the [`User`](crate::users::User).

use chrono::{DateTime, Utc};

use crate::users::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complaint {
    pub student_email: String,
    pub student_name: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl Complaint {
    pub fn new(student: &User, message: impl Into<String>) -> Self {
        Self {
            student_email: student.email.clone(),
            student_name: student.name.clone(),
            message: message.into(),
            submitted_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveNotice {
    pub student_email: String,
    pub student_name: String,
    /// Free text such as "25-27 Feb 2024".
    pub dates: String,
    pub reason: String,
    pub submitted_at: DateTime<Utc>,
}

impl LeaveNotice {
    pub fn new(student: &User, dates: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            student_email: student.email.clone(),
            student_name: student.name.clone(),
            dates: dates.into(),
            reason: reason.into(),
            submitted_at: Utc::now(),
        }
    }
}
