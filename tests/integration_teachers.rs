mod common;

use college_alerter::alerter_models::StaffPosition;
use college_alerter::router;
use common::{as_strs, dashboard_session, empty_state, output, scripted, with_exit};

const TEACHER_EMAIL: &str = "davis@test.com";
const TEACHER_PASSWORD: &str = "pass456";

fn teacher_state() -> college_alerter::state::AppState {
    let mut state = empty_state();
    common::add_teacher(&mut state, "Prof. Davis", TEACHER_EMAIL, "Professor");
    state
}

fn run_teacher(state: &mut college_alerter::state::AppState, actions: &[&str]) -> String {
    let script = with_exit(vec![dashboard_session(
        TEACHER_EMAIL,
        TEACHER_PASSWORD,
        actions,
    )]);
    let mut console = scripted(&as_strs(&script));
    router::run(state, &mut console).unwrap();
    output(&console)
}

#[test]
fn test_attendance_summary_lists_each_student() {
    let mut state = teacher_state();
    common::add_student(&mut state, "Alice", "alice@test.com", "S1001");
    common::add_student(&mut state, "Bob", "bob@test.com", "S1002");

    let out = run_teacher(
        &mut state,
        &["3", "Data Structures", "15 Feb 2024", "p", "A", ""],
    );

    assert!(out.contains("- Alice (S1001): "));
    assert!(out.contains("- Bob (S1002): "));
    assert!(out.contains("--- Attendance Summary (Data Structures - 15 Feb 2024) ---"));
    assert!(out.contains("Alice: Present\nBob: Absent\n"));
    assert!(out.contains("Attendance Recorded (Simulated Save)."));
}

#[test]
fn test_attendance_skips_non_students() {
    let mut state = teacher_state();
    common::add_staff(&mut state, "Mr. Lee", "lee@test.com", StaffPosition::Librarian);
    common::add_student(&mut state, "Alice", "alice@test.com", "S1001");

    let out = run_teacher(&mut state, &["3", "Maths", "1 Mar 2024", "p", ""]);

    assert!(!out.contains("- Mr. Lee"));
    assert!(!out.contains("- Prof. Davis"));
    assert!(out.contains("Alice: Present"));
}

#[test]
fn test_attendance_mark_reprompts_on_invalid_answer() {
    let mut state = teacher_state();
    common::add_student(&mut state, "Alice", "alice@test.com", "S1001");

    let out = run_teacher(&mut state, &["3", "Maths", "1 Mar 2024", "x", "", "absent", ""]);

    assert_eq!(out.matches("Invalid input. Enter 'p' or 'a': ").count(), 1);
    assert!(out.contains("Alice: Absent"));
}

#[test]
fn test_attendance_without_students() {
    let mut state = teacher_state();

    let out = run_teacher(&mut state, &["3", "Maths", "1 Mar 2024", ""]);

    assert!(out.contains("No students found to take attendance for."));
    assert!(!out.contains("Attendance Summary"));
}

#[test]
fn test_empty_complaint_and_leave_lists() {
    let mut state = teacher_state();

    let out = run_teacher(&mut state, &["4", "", "5", ""]);

    assert!(out.contains("4. View Student Complaints (0)"));
    assert!(out.contains("5. View Student Leave Notices (0)"));
    assert!(out.contains("No complaints have been submitted yet."));
    assert!(out.contains("No leave notices have been submitted yet."));
}

#[test]
fn test_teacher_sees_student_submissions_with_live_counts() {
    let mut state = teacher_state();
    common::add_student(&mut state, "Alice", "alice@test.com", "S1001");
    let script = with_exit(vec![
        dashboard_session("alice@test.com", "pass123", &["3", "Wifi down", ""]),
        dashboard_session(
            "alice@test.com",
            "pass123",
            &["4", "25 Feb 2024", "Fever", ""],
        ),
        dashboard_session(TEACHER_EMAIL, TEACHER_PASSWORD, &["4", "", "5", ""]),
    ]);
    let mut console = scripted(&as_strs(&script));

    router::run(&mut state, &mut console).unwrap();

    let out = output(&console);
    assert!(out.contains("4. View Student Complaints (1)"));
    assert!(out.contains("5. View Student Leave Notices (1)"));
    assert!(out.contains("1. From: Alice (alice@test.com)\n   Complaint: Wifi down\n"));
    assert!(out.contains("   Dates: 25 Feb 2024\n   Reason: Fever\n"));
}

#[test]
fn test_upload_results_has_no_effect_on_student_results() {
    let mut state = teacher_state();
    common::add_student(&mut state, "Alice", "alice@test.com", "S1001");
    let script = with_exit(vec![
        dashboard_session(
            TEACHER_EMAIL,
            TEACHER_PASSWORD,
            &["2", "Physics", "/tmp/physics.csv", ""],
        ),
        dashboard_session("alice@test.com", "pass123", &["5", ""]),
    ]);
    let mut console = scripted(&as_strs(&script));

    router::run(&mut state, &mut console).unwrap();

    let out = output(&console);
    assert!(out.contains(
        "Simulating upload of results for subject 'Physics' from file '/tmp/physics.csv'."
    ));
    assert_eq!(out.matches("Physics").count(), 1);
    assert!(out.contains("SGPA: 8.8"));
    assert!(state.store.complaints().is_empty());
}

#[test]
fn test_meetings_screen() {
    let mut state = teacher_state();

    let out = run_teacher(&mut state, &["1", ""]);

    assert!(out.contains("Teacher Dashboard - Welcome Prof. Davis"));
    assert!(out.contains("Position: Professor"));
    assert!(out.contains("--- Scheduled/Announced Meetings ---"));
    assert!(out.contains("[Placeholder for adding new meetings]"));
}
