//! Main menu and role-based dispatch.
//!
//! The main menu is the only place the program can end. Logging in hands
//! control to the dashboard for the user's role; when that dashboard returns
//! (logout), the session is dropped and the main menu is shown again.

use alerter_core::{AppError, Console, MenuInput, read_menu_input};
use alerter_models::Role;

use crate::modules::auth::{self, Session};
use crate::modules::{staff, students, teachers};
use crate::state::AppState;

pub const BANNER_RULE: &str = "=====================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenu {
    Login,
    Register,
    Exit,
}

impl MainMenu {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Login),
            2 => Some(Self::Register),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Handles a menu line that did not start with a number: the line is already
/// discarded, so tell the user and wait for Enter before redrawing.
pub fn reject_malformed<C: Console + ?Sized>(console: &mut C) -> Result<(), AppError> {
    console.write_str("Invalid input. Please enter a number.\n")?;
    console.pause("Press Enter to continue...")
}

fn show_main_menu<C: Console + ?Sized>(console: &mut C) -> Result<(), AppError> {
    console.write_line(BANNER_RULE)?;
    console.write_line("        Welcome to College Alerter")?;
    console.write_line(BANNER_RULE)?;
    console.write_str("1. Login\n2. Register\n3. Exit\n")?;
    console.write_line(BANNER_RULE)?;
    console.write_str("Enter your choice: ")
}

/// Runs the main menu until the user picks Exit.
///
/// Returns `Ok(())` only for Exit. Errors are non-recoverable console
/// failures, including the input stream closing.
pub fn run<C: Console + ?Sized>(state: &mut AppState, console: &mut C) -> Result<(), AppError> {
    tracing::info!(users = state.store.users().len(), "Main menu started");
    loop {
        console.clear_screen()?;
        show_main_menu(console)?;

        let choice = match read_menu_input(console)? {
            MenuInput::Number(n) => MainMenu::from_choice(n),
            MenuInput::Malformed => {
                reject_malformed(console)?;
                continue;
            }
        };

        match choice {
            Some(MainMenu::Login) => {
                console.clear_screen()?;
                if let Some(session) = auth::controller::login(state, console)? {
                    enter_session(state, console, session)?;
                }
            }
            Some(MainMenu::Register) => {
                console.clear_screen()?;
                auth::controller::register(state, console)?;
            }
            Some(MainMenu::Exit) => {
                console.write_str("Exiting College Alerter. Goodbye!\n")?;
                tracing::info!("Exit selected");
                return Ok(());
            }
            None => {
                console.write_str("Invalid choice. Please try again.\n")?;
                console.pause("Press Enter to continue...")?;
            }
        }
    }
}

/// Runs the dashboard matching the session's role. The session is consumed
/// and dropped on logout.
pub fn enter_session<C: Console + ?Sized>(
    state: &mut AppState,
    console: &mut C,
    session: Session,
) -> Result<(), AppError> {
    let user = &session.user;
    tracing::debug!(email = %user.email, role = %user.role.kind(), "Session started");

    match &user.role {
        Role::Student { .. } => students::controller::dashboard(state, console, user)?,
        Role::Teacher { .. } => teachers::controller::dashboard(state, console, user)?,
        Role::Staff { position } => staff::controller::dashboard(console, user, *position)?,
    }

    tracing::debug!(email = %user.email, "Session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_numbers() {
        assert_eq!(MainMenu::from_choice(1), Some(MainMenu::Login));
        assert_eq!(MainMenu::from_choice(2), Some(MainMenu::Register));
        assert_eq!(MainMenu::from_choice(3), Some(MainMenu::Exit));
        assert_eq!(MainMenu::from_choice(4), None);
        assert_eq!(MainMenu::from_choice(-1), None);
    }
}
