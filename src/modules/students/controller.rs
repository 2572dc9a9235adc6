use alerter_core::{AppError, Console, MenuInput, read_menu_input};
use alerter_models::User;
use alerter_models::board::{
    COLLEGE_EVENTS, LAST_SEMESTER_GRADES, LAST_SEMESTER_SGPA, OVERALL_ATTENDANCE_PERCENT,
    SUBJECT_ATTENDANCE,
};

use super::model::{LeaveNoticeRequest, StudentMenu};
use super::service::StudentService;
use crate::router::{BANNER_RULE, reject_malformed};
use crate::state::AppState;

/// Student dashboard loop. Returns on logout.
pub fn dashboard<C: Console + ?Sized>(
    state: &mut AppState,
    console: &mut C,
    student: &User,
) -> Result<(), AppError> {
    loop {
        console.clear_screen()?;
        console.write_line(BANNER_RULE)?;
        console.write_line(&format!(
            "        Student Dashboard - Welcome {}",
            student.name
        ))?;
        console.write_line(BANNER_RULE)?;
        console.write_str(
            "1. View College Events\n\
             2. View Attendance\n\
             3. Submit Complaint\n\
             4. Submit Leave Notice\n\
             5. View Results\n\
             6. Logout\n",
        )?;
        console.write_line(BANNER_RULE)?;
        console.write_str("Enter your choice: ")?;

        let choice = match read_menu_input(console)? {
            MenuInput::Number(n) => StudentMenu::from_choice(n),
            MenuInput::Malformed => {
                reject_malformed(console)?;
                continue;
            }
        };

        match choice {
            Some(StudentMenu::ViewEvents) => show_events(console)?,
            Some(StudentMenu::ViewAttendance) => show_attendance(console)?,
            Some(StudentMenu::SubmitComplaint) => submit_complaint(state, console, student)?,
            Some(StudentMenu::SubmitLeaveNotice) => submit_leave_notice(state, console, student)?,
            Some(StudentMenu::ViewResults) => show_results(console)?,
            Some(StudentMenu::Logout) => {
                console.write_str("Logging out...\n")?;
                return console.pause("Press Enter to return to main menu...");
            }
            None => console.write_str("Invalid choice. Please try again.\n")?,
        }
        console.pause("\nPress Enter to return to the Student Dashboard...")?;
    }
}

fn show_events<C: Console + ?Sized>(console: &mut C) -> Result<(), AppError> {
    console.clear_screen()?;
    console.write_line("--- Upcoming College Events ---")?;
    for (i, event) in COLLEGE_EVENTS.iter().enumerate() {
        if i > 0 {
            console.write_str("\n")?;
        }
        console.write_line(&format!("{}. {}", i + 1, event.title))?;
        console.write_line(&format!("   Date: {}", event.date))?;
        console.write_line(&format!("   Venue: {}", event.venue))?;
    }
    console.write_line("--------------------------------")
}

fn show_attendance<C: Console + ?Sized>(console: &mut C) -> Result<(), AppError> {
    console.clear_screen()?;
    console.write_line("--- Your Attendance (Dummy Data) ---")?;
    console.write_line(&format!(
        "Overall Attendance: {}%\n",
        OVERALL_ATTENDANCE_PERCENT
    ))?;
    console.write_line("Subject Wise:")?;
    for row in SUBJECT_ATTENDANCE {
        console.write_line(&format!("- {}: {}%", row.subject, row.percent))?;
    }
    console.write_line("------------------------------------")
}

fn show_results<C: Console + ?Sized>(console: &mut C) -> Result<(), AppError> {
    console.clear_screen()?;
    console.write_line("--- Your Results (Dummy Data - Last Semester) ---")?;
    console.write_line(&format!("{:<20}| Grade", "Subject"))?;
    console.write_line("--------------------|-------")?;
    for row in LAST_SEMESTER_GRADES {
        console.write_line(&format!("{:<20}| {}", row.subject, row.grade))?;
    }
    console.write_line("--------------------|-------")?;
    console.write_line(&format!("SGPA: {}", LAST_SEMESTER_SGPA))?;
    console.write_line("---------------------------")
}

fn submit_complaint<C: Console + ?Sized>(
    state: &mut AppState,
    console: &mut C,
    student: &User,
) -> Result<(), AppError> {
    console.clear_screen()?;
    console.write_line("--- Submit Complaint ---")?;
    console.write_line("Please type your complaint below and press Enter:")?;
    console.write_line("----------------------------------------------")?;
    let message = console.read_line()?;
    console.write_line("\n----------------------------------------------")?;

    StudentService::submit_complaint(&mut state.store, student, message);

    console.write_line("Thank you. Your complaint has been recorded.")?;
    console.write_line("----------------------------------------------")
}

fn submit_leave_notice<C: Console + ?Sized>(
    state: &mut AppState,
    console: &mut C,
    student: &User,
) -> Result<(), AppError> {
    console.clear_screen()?;
    console.write_line("--- Submit Leave Notice ---")?;
    let dates =
        console.prompt("Enter Date(s) of Leave (e.g., 25 Feb 2024 or 25-27 Feb 2024): ")?;
    console.write_line("Enter Reason for Leave:")?;
    console.write_line("---------------------------")?;
    let reason = console.read_line()?;
    console.write_line("\n---------------------------")?;

    let notice = StudentService::submit_leave_notice(
        &mut state.store,
        student,
        LeaveNoticeRequest { dates, reason },
    );

    console.write_line(&format!("Leave notice submitted for {}.", notice.dates))?;
    console.write_line("---------------------------")
}
