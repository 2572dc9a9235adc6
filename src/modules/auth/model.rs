use alerter_models::{Role, User};

/// Registration input, collected field by field from the console.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

impl From<RegisterRequest> for User {
    fn from(dto: RegisterRequest) -> Self {
        User::new(dto.name, dto.email, dto.password, dto.phone, dto.role)
    }
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// An authenticated user's session.
///
/// Holds a copy of the user taken at login; it lasts until logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
}
