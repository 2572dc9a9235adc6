use std::io::Cursor;

use college_alerter::alerter_config::AppConfig;
use college_alerter::alerter_core::LineConsole;
use college_alerter::alerter_models::{Role, StaffPosition, User};
use college_alerter::state::{AppState, init_app_state};

pub type ScriptedConsole = LineConsole<Cursor<Vec<u8>>, Vec<u8>>;

/// Console that answers prompts with `lines`, one per read.
pub fn scripted(lines: &[&str]) -> ScriptedConsole {
    let mut input = lines.join("\n");
    input.push('\n');
    LineConsole::new(Cursor::new(input.into_bytes()), Vec::new())
}

/// Everything written to the console so far.
pub fn output(console: &ScriptedConsole) -> String {
    String::from_utf8_lossy(console.writer()).into_owned()
}

pub fn test_config(demo_users: bool) -> AppConfig {
    AppConfig {
        demo_users,
        clear_screen: false,
        ..AppConfig::default()
    }
}

/// State with no users at all.
pub fn empty_state() -> AppState {
    AppState::new(test_config(false))
}

/// State seeded with the demo accounts.
#[allow(dead_code)]
pub fn demo_state() -> AppState {
    init_app_state(test_config(true)).unwrap()
}

#[allow(dead_code)]
pub fn add_student(state: &mut AppState, name: &str, email: &str, student_id: &str) {
    state
        .store
        .insert_user(User::new(
            name,
            email,
            "pass123",
            "0000000000",
            Role::Student {
                student_id: student_id.to_string(),
            },
        ))
        .unwrap();
}

#[allow(dead_code)]
pub fn add_teacher(state: &mut AppState, name: &str, email: &str, position: &str) {
    state
        .store
        .insert_user(User::new(
            name,
            email,
            "pass456",
            "0000000000",
            Role::Teacher {
                position: position.to_string(),
            },
        ))
        .unwrap();
}

#[allow(dead_code)]
pub fn add_staff(state: &mut AppState, name: &str, email: &str, position: StaffPosition) {
    state
        .store
        .insert_user(User::new(
            name,
            email,
            "pass789",
            "0000000000",
            Role::Staff { position },
        ))
        .unwrap();
}

/// Input lines that log in, run `actions` on the dashboard, then log out.
///
/// `actions` must leave the dashboard at its menu prompt.
#[allow(dead_code)]
pub fn dashboard_session(email: &str, password: &str, actions: &[&str]) -> Vec<String> {
    let mut lines = vec![
        "1".to_string(),
        email.to_string(),
        password.to_string(),
        String::new(),
    ];
    lines.extend(actions.iter().map(|s| s.to_string()));
    lines.push("6".to_string());
    lines.push(String::new());
    lines
}

/// Joins session scripts and appends the final Exit selection.
#[allow(dead_code)]
pub fn with_exit(sessions: Vec<Vec<String>>) -> Vec<String> {
    let mut lines: Vec<String> = sessions.into_iter().flatten().collect();
    lines.push("3".to_string());
    lines
}

#[allow(dead_code)]
pub fn as_strs(lines: &[String]) -> Vec<&str> {
    lines.iter().map(String::as_str).collect()
}
