use alerter_core::{AppError, Console};
use alerter_models::{StaffPosition, User};

use crate::router::BANNER_RULE;

/// One-shot staff screen: no operations, just an acknowledgment before
/// returning to the main menu.
pub fn dashboard<C: Console + ?Sized>(
    console: &mut C,
    staff: &User,
    position: StaffPosition,
) -> Result<(), AppError> {
    console.clear_screen()?;
    console.write_line(BANNER_RULE)?;
    console.write_line(&format!(
        "   Non-Teaching Staff Dashboard - Welcome {}",
        staff.name
    ))?;
    console.write_line(&format!("        Role: {}", position))?;
    console.write_line(BANNER_RULE)?;

    match position {
        StaffPosition::Librarian => {
            console.write_line("1. Manage Books (Not Implemented)")?;
            console.write_line("2. View Overdue Books (Not Implemented)")?;
        }
        StaffPosition::Watchman | StaffPosition::ClericalSupport => {
            console.write_line("General staff features not implemented yet.")?;
        }
    }

    console.pause("\nPress Enter to Logout...")
}
