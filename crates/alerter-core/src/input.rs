//! Typed readers layered over [`Console`].
//!
//! Input is read a line at a time, but menu selections behave like reading
//! a single token: blank lines are skipped, only the leading token counts and
//! whatever follows it on the line is discarded.

use crate::console::Console;
use crate::errors::AppError;

/// Result of reading a numeric menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Number(i64),
    /// The line did not start with an integer. The line is already consumed.
    Malformed,
}

/// Parses the integer at the start of `token`, ignoring trailing characters.
///
/// `"12abc"` yields 12 while `"abc"` or `"+"` yield `None`.
pub fn leading_integer(token: &str) -> Option<i64> {
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits = token[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    token[..sign_len + digits].parse().ok()
}

fn next_non_blank_line<C: Console + ?Sized>(console: &mut C) -> Result<String, AppError> {
    loop {
        let line = console.read_line()?;
        if !line.trim().is_empty() {
            return Ok(line);
        }
    }
}

/// Reads one menu selection.
pub fn read_menu_input<C: Console + ?Sized>(console: &mut C) -> Result<MenuInput, AppError> {
    let line = next_non_blank_line(console)?;
    let token = line.split_whitespace().next().unwrap_or_default();

    Ok(match leading_integer(token) {
        Some(n) => MenuInput::Number(n),
        None => MenuInput::Malformed,
    })
}

/// Reads until `from_choice` maps an entered number to a value, printing
/// `retry` after every rejected line.
pub fn read_choice<C, T, F>(console: &mut C, from_choice: F, retry: &str) -> Result<T, AppError>
where
    C: Console + ?Sized,
    F: Fn(i64) -> Option<T>,
{
    loop {
        if let MenuInput::Number(n) = read_menu_input(console)? {
            if let Some(value) = from_choice(n) {
                return Ok(value);
            }
        }
        console.write_str(retry)?;
    }
}

/// Reads a single-character answer: the first non-whitespace character of
/// the next non-blank line.
pub fn read_char<C: Console + ?Sized>(console: &mut C) -> Result<char, AppError> {
    let line = next_non_blank_line(console)?;
    // Non-blank lines always contain a non-whitespace character.
    Ok(line.trim_start().chars().next().unwrap_or(' '))
}
