use alerter_core::{AppError, Console, read_choice};
use alerter_models::{Role, RoleKind, StaffPosition};

use super::model::{LoginRequest, RegisterRequest, Session};
use super::service::AuthService;
use crate::state::AppState;

const RETRY_ONE_TO_THREE: &str = "Invalid input. Please enter 1, 2, or 3: ";

/// Registration screen.
///
/// The duplicate-email check runs right after the email is entered, so a
/// taken address aborts before the remaining fields are asked for.
pub fn register<C: Console + ?Sized>(state: &mut AppState, console: &mut C) -> Result<(), AppError> {
    console.write_line("--- Registration ---")?;
    let name = console.prompt("Enter Name: ")?;
    let email = console.prompt("Enter Email: ")?;

    if let Err(e) = AuthService::ensure_email_available(&state.store, &email) {
        report_rejection(console, e)?;
        return console.pause("Press Enter to return to the main menu...");
    }

    let phone = console.prompt("Enter Phone Number: ")?;
    let password = console.prompt("Enter Password: ")?;
    let role = prompt_role(console)?;

    let dto = RegisterRequest {
        name,
        email,
        phone,
        password,
        role,
    };
    match AuthService::register_user(&mut state.store, dto) {
        Ok(_) => console.write_str("\nRegistration Successful!\n")?,
        Err(e) => report_rejection(console, e)?,
    }
    console.pause("Press Enter to return to the main menu...")
}

fn prompt_role<C: Console + ?Sized>(console: &mut C) -> Result<Role, AppError> {
    console.write_str("\nSelect Role:\n")?;
    console.write_str("1. Student\n2. Teacher\n3. Non-Teaching Staff\n")?;
    console.write_str("Enter role choice: ")?;
    let role = match read_choice(console, RoleKind::from_choice, RETRY_ONE_TO_THREE)? {
        RoleKind::Student => Role::Student {
            student_id: console.prompt("Enter Student ID Number: ")?,
        },
        RoleKind::Teacher => Role::Teacher {
            position: console
                .prompt("Enter Teacher Position (e.g., Professor, Asst. Professor): ")?,
        },
        RoleKind::Staff => Role::Staff {
            position: prompt_staff_position(console)?,
        },
    };
    Ok(role)
}

fn prompt_staff_position<C: Console + ?Sized>(console: &mut C) -> Result<StaffPosition, AppError> {
    console.write_str("\nSelect Non-Teaching Staff Role:\n")?;
    console.write_str("1. Librarian\n2. Watchman\n3. Other Clerical/Support Staff\n")?;
    console.write_str("Enter staff role choice: ")?;
    read_choice(console, StaffPosition::from_choice, RETRY_ONE_TO_THREE)
}

/// Login screen. Returns the session on success; on failure the user is
/// told and `None` sends them back to the main menu.
pub fn login<C: Console + ?Sized>(
    state: &AppState,
    console: &mut C,
) -> Result<Option<Session>, AppError> {
    console.write_line("--- Login ---")?;
    let email = console.prompt("Enter Email: ")?;
    let password = console.prompt("Enter Password: ")?;

    match AuthService::login_user(&state.store, LoginRequest { email, password }) {
        Ok(session) => {
            console.write_str(&format!(
                "\nLogin Successful! Welcome, {}.\n",
                session.user.name
            ))?;
            console.pause("Press Enter to continue...")?;
            Ok(Some(session))
        }
        Err(e) if e.is_recoverable() => {
            console.write_str(&format!("\nLogin Failed: {}.\n", e))?;
            console.pause("Press Enter to return to the main menu...")?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn report_rejection<C: Console + ?Sized>(console: &mut C, e: AppError) -> Result<(), AppError> {
    if !e.is_recoverable() {
        return Err(e);
    }
    console.write_str(&format!("\nError: {}.\n", e))
}
