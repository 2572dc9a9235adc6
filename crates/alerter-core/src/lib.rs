//! # Alerter Core
//!
//! Core types shared by every part of College Alerter:
//!
//! - [`errors`]: the application error type
//! - [`console`]: the blocking line console the menus are written against
//! - [`input`]: menu-number and single-character readers with retry loops
//!
//! # Example
//!
//! ```ignore
//! use alerter_core::{Console, LineConsole, read_menu_input, MenuInput};
//!
//! let mut console = LineConsole::stdio(true);
//! console.write_line("1. Login")?;
//! if let MenuInput::Number(n) = read_menu_input(&mut console)? {
//!     println!("picked {n}");
//! }
//! ```

pub mod console;
pub mod errors;
pub mod input;

// Re-export commonly used types at crate root
pub use console::{Console, LineConsole};
pub use errors::{AppError, ErrorKind};
pub use input::{MenuInput, read_char, read_choice, read_menu_input};
