//! User domain models.
//!
//! A [`User`] carries exactly one [`Role`]. The role is a tagged variant whose
//! payload is the role-specific data entered at registration: a student ID,
//! a teacher's position title, or a non-teaching staff position.

use std::fmt;

/// Role selection as offered by the registration menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    Student,
    Teacher,
    Staff,
}

impl RoleKind {
    /// Maps a registration menu number (1-3) to a role kind.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Student),
            2 => Some(Self::Teacher),
            3 => Some(Self::Staff),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
            Self::Staff => "Non-Teaching Staff",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed set of non-teaching staff positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffPosition {
    Librarian,
    Watchman,
    ClericalSupport,
}

impl StaffPosition {
    /// Maps a staff menu number (1-3) to a position.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Librarian),
            2 => Some(Self::Watchman),
            3 => Some(Self::ClericalSupport),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Librarian => "Librarian",
            Self::Watchman => "Watchman",
            Self::ClericalSupport => "Clerical/Support Staff",
        }
    }
}

impl fmt::Display for StaffPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's role together with its role-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Student { student_id: String },
    Teacher { position: String },
    Staff { position: StaffPosition },
}

impl Role {
    pub fn kind(&self) -> RoleKind {
        match self {
            Self::Student { .. } => RoleKind::Student,
            Self::Teacher { .. } => RoleKind::Teacher,
            Self::Staff { .. } => RoleKind::Staff,
        }
    }

    /// The role-specific data as display text.
    pub fn role_data(&self) -> &str {
        match self {
            Self::Student { student_id } => student_id,
            Self::Teacher { position } => position,
            Self::Staff { position } => position.as_str(),
        }
    }
}

/// A registered user.
///
/// Passwords are kept and compared as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: Role,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        phone: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            phone: phone.into(),
            role,
        }
    }

    /// Exact, case-sensitive match on both email and password.
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    pub fn is_student(&self) -> bool {
        matches!(self.role, Role::Student { .. })
    }

    pub fn role_data(&self) -> &str {
        self.role.role_data()
    }
}
