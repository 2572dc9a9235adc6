use alerter_core::AppError;
use alerter_db::Store;
use alerter_models::User;
use tracing::instrument;

use super::model::{LoginRequest, RegisterRequest, Session};

pub struct AuthService;

impl AuthService {
    /// Fails with a conflict when `email` already belongs to a user.
    pub fn ensure_email_available(store: &Store, email: &str) -> Result<(), AppError> {
        if store.email_exists(email) {
            return Err(AppError::conflict(anyhow::anyhow!(
                "Email already registered"
            )));
        }
        Ok(())
    }

    #[instrument(skip(store, dto), fields(email = %dto.email, role = %dto.role.kind()))]
    pub fn register_user(store: &mut Store, dto: RegisterRequest) -> Result<User, AppError> {
        Self::ensure_email_available(store, &dto.email)?;

        let user = store.insert_user(dto.into())?.clone();
        tracing::info!("User registered");
        Ok(user)
    }

    #[instrument(skip(store, dto), fields(email = %dto.email))]
    pub fn login_user(store: &Store, dto: LoginRequest) -> Result<Session, AppError> {
        let Some(user) = store.find_user_by_credentials(&dto.email, &dto.password) else {
            tracing::info!("Login failed");
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid email or password"
            )));
        };

        tracing::info!(role = %user.role.kind(), "Login succeeded");
        Ok(Session { user: user.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alerter_core::ErrorKind;
    use alerter_models::{Role, RoleKind, StaffPosition};

    fn register_dto(email: &str, role: Role) -> RegisterRequest {
        RegisterRequest {
            name: "Test User".to_string(),
            email: email.to_string(),
            phone: "555".to_string(),
            password: "secret".to_string(),
            role,
        }
    }

    fn login(store: &Store, email: &str, password: &str) -> Result<Session, AppError> {
        AuthService::login_user(
            store,
            LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
    }

    #[test]
    fn test_register_then_login_returns_role() {
        let mut store = Store::new();
        let role = Role::Staff {
            position: StaffPosition::Watchman,
        };
        AuthService::register_user(&mut store, register_dto("w@test.com", role.clone())).unwrap();

        let session = login(&store, "w@test.com", "secret").unwrap();

        assert_eq!(session.user.role, role);
        assert_eq!(session.user.role.kind(), RoleKind::Staff);
        assert_eq!(session.user.role_data(), "Watchman");
    }

    #[test]
    fn test_register_duplicate_email_is_conflict() {
        let mut store = Store::new();
        let teacher = Role::Teacher {
            position: "Professor".to_string(),
        };
        AuthService::register_user(&mut store, register_dto("t@test.com", teacher.clone())).unwrap();

        let err = AuthService::register_user(&mut store, register_dto("t@test.com", teacher))
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn test_login_wrong_password_is_unauthorized() {
        let mut store = Store::new();
        let student = Role::Student {
            student_id: "S1".to_string(),
        };
        AuthService::register_user(&mut store, register_dto("s@test.com", student)).unwrap();

        let err = login(&store, "s@test.com", "Secret").unwrap_err();

        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.to_string(), "Invalid email or password");
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn test_login_unknown_email_is_unauthorized() {
        let store = Store::new();

        assert_eq!(
            login(&store, "ghost@test.com", "x").unwrap_err().kind,
            ErrorKind::Unauthorized
        );
    }
}
