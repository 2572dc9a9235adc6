//! Demo account seeding.
//!
//! Registers a small fixed set of accounts at startup so every dashboard can
//! be reached without registering first.

use alerter_core::AppError;
use alerter_db::Store;
use alerter_models::{Role, StaffPosition, User};

/// Seed data for one demo account.
pub struct UserSeed {
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub phone: &'static str,
    pub role: RoleSeed,
}

/// Role of a demo account with its role-specific data.
pub enum RoleSeed {
    Student(&'static str),
    Teacher(&'static str),
    Staff(StaffPosition),
}

impl UserSeed {
    fn to_user(&self) -> User {
        let role = match self.role {
            RoleSeed::Student(id) => Role::Student {
                student_id: id.to_string(),
            },
            RoleSeed::Teacher(position) => Role::Teacher {
                position: position.to_string(),
            },
            RoleSeed::Staff(position) => Role::Staff { position },
        };
        User::new(self.name, self.email, self.password, self.phone, role)
    }
}

pub const DEMO_USERS: &[UserSeed] = &[
    UserSeed {
        name: "Alice Smith",
        email: "student@test.com",
        password: "pass123",
        phone: "1234567890",
        role: RoleSeed::Student("S1001"),
    },
    UserSeed {
        name: "Bob Johnson",
        email: "student2@test.com",
        password: "pass123",
        phone: "1122334455",
        role: RoleSeed::Student("S1002"),
    },
    UserSeed {
        name: "Prof. Davis",
        email: "teacher@test.com",
        password: "pass456",
        phone: "0987654321",
        role: RoleSeed::Teacher("Professor"),
    },
    UserSeed {
        name: "Mr. Lee",
        email: "staff@test.com",
        password: "pass789",
        phone: "5556667777",
        role: RoleSeed::Staff(StaffPosition::Librarian),
    },
];

/// Inserts the demo accounts, skipping any whose email is already taken.
///
/// Returns how many accounts were inserted.
pub fn seed_demo_users(store: &mut Store) -> Result<usize, AppError> {
    let mut inserted = 0;
    for seed in DEMO_USERS {
        match store.insert_user(seed.to_user()) {
            Ok(_) => inserted += 1,
            Err(e) if e.is_recoverable() => {
                tracing::debug!(email = seed.email, "Demo account already present, skipping");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(inserted)
}
