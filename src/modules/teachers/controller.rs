use alerter_core::{AppError, Console, MenuInput, read_char, read_menu_input};
use alerter_models::board::TEACHER_MEETINGS;
use alerter_models::{AttendanceMark, User};

use super::model::{AttendanceRequest, TeacherMenu};
use super::service::TeacherService;
use crate::router::{BANNER_RULE, reject_malformed};
use crate::state::AppState;

/// Teacher dashboard loop. Returns on logout.
///
/// The complaint and leave-notice counts are read from the store every time
/// the menu is drawn.
pub fn dashboard<C: Console + ?Sized>(
    state: &AppState,
    console: &mut C,
    teacher: &User,
) -> Result<(), AppError> {
    loop {
        console.clear_screen()?;
        console.write_line(BANNER_RULE)?;
        console.write_line(&format!(
            "        Teacher Dashboard - Welcome {}",
            teacher.name
        ))?;
        console.write_line(&format!("        Position: {}", teacher.role_data()))?;
        console.write_line(BANNER_RULE)?;
        console.write_str(
            "1. View/Announce Meetings\n\
             2. Upload Student Results\n\
             3. Take/Upload Attendance\n",
        )?;
        console.write_line(&format!(
            "4. View Student Complaints ({})",
            state.store.complaints().len()
        ))?;
        console.write_line(&format!(
            "5. View Student Leave Notices ({})",
            state.store.leave_notices().len()
        ))?;
        console.write_line("6. Logout")?;
        console.write_line(BANNER_RULE)?;
        console.write_str("Enter your choice: ")?;

        let choice = match read_menu_input(console)? {
            MenuInput::Number(n) => TeacherMenu::from_choice(n),
            MenuInput::Malformed => {
                reject_malformed(console)?;
                continue;
            }
        };

        match choice {
            Some(TeacherMenu::ViewMeetings) => show_meetings(console)?,
            Some(TeacherMenu::UploadResults) => upload_results(console)?,
            Some(TeacherMenu::TakeAttendance) => take_attendance(state, console)?,
            Some(TeacherMenu::ViewComplaints) => show_complaints(state, console)?,
            Some(TeacherMenu::ViewLeaveNotices) => show_leave_notices(state, console)?,
            Some(TeacherMenu::Logout) => {
                console.write_str("Logging out...\n")?;
                return console.pause("Press Enter to return to main menu...");
            }
            None => console.write_str("Invalid choice. Please try again.\n")?,
        }
        console.pause("\nPress Enter to return to the Teacher Dashboard...")?;
    }
}

fn show_meetings<C: Console + ?Sized>(console: &mut C) -> Result<(), AppError> {
    console.clear_screen()?;
    console.write_line("--- Scheduled/Announced Meetings ---")?;
    for (i, meeting) in TEACHER_MEETINGS.iter().enumerate() {
        console.write_line(&format!("{}. {}", i + 1, meeting.title))?;
        console.write_line(&format!("   Date: {}", meeting.date))?;
        console.write_line(&format!("   Time: {}", meeting.time))?;
        console.write_line(&format!("   Venue: {}\n", meeting.venue))?;
    }
    console.write_line(&format!(
        "{}. [Placeholder for adding new meetings]",
        TEACHER_MEETINGS.len() + 1
    ))?;
    console.write_line("-------------------------------------")
}

fn upload_results<C: Console + ?Sized>(console: &mut C) -> Result<(), AppError> {
    console.clear_screen()?;
    console.write_line("--- Upload Student Results ---")?;
    let subject = console.prompt("Enter Subject Name: ")?;
    let file_path =
        console.prompt("Enter path to results file (e.g., C:\\results\\DS_results.csv): ")?;

    let upload = TeacherService::upload_results(subject, file_path);

    console.write_line("\n--- Simulation ---")?;
    console.write_line(&format!(
        "Simulating upload of results for subject '{}' from file '{}'.",
        upload.subject, upload.file_path
    ))?;
    console.write_line("In a real application, the file would be processed and data stored.")?;
    console.write_line(
        "Results are now considered 'uploaded' for students to view (in this simulation).",
    )?;
    console.write_line("-----------------------------")
}

fn take_attendance<C: Console + ?Sized>(state: &AppState, console: &mut C) -> Result<(), AppError> {
    console.clear_screen()?;
    console.write_line("--- Take Attendance ---")?;
    let subject = console.prompt("Enter Subject Name: ")?;
    let date = console.prompt("Enter Date (e.g., 15 Feb 2024): ")?;
    console.write_line("----------------------")?;
    console.write_line("Mark Attendance (P=Present, A=Absent):")?;

    let summary = TeacherService::take_attendance(
        &state.store,
        AttendanceRequest { subject, date },
        |student| {
            console.write_str(&format!(
                "- {} ({}): ",
                student.name,
                student.role_data()
            ))?;
            prompt_mark(&mut *console)
        },
    )?;

    match summary {
        None => console.write_line("No students found to take attendance for.")?,
        Some(summary) => {
            console.write_line(&format!(
                "\n--- Attendance Summary ({} - {}) ---",
                summary.subject, summary.date
            ))?;
            for entry in &summary.entries {
                console.write_line(&format!("{}: {}", entry.student_name, entry.mark))?;
            }
            console.write_line("--------------------------------------------------------")?;
            console.write_line("Attendance Recorded (Simulated Save).")?;
        }
    }
    console.write_line("----------------------")
}

fn prompt_mark<C: Console + ?Sized>(console: &mut C) -> Result<AttendanceMark, AppError> {
    loop {
        if let Some(mark) = AttendanceMark::from_char(read_char(console)?) {
            return Ok(mark);
        }
        console.write_str("Invalid input. Enter 'p' or 'a': ")?;
    }
}

fn show_complaints<C: Console + ?Sized>(state: &AppState, console: &mut C) -> Result<(), AppError> {
    console.clear_screen()?;
    console.write_line("--- Received Student Complaints ---")?;
    let complaints = state.store.complaints();
    if complaints.is_empty() {
        console.write_line("No complaints have been submitted yet.")?;
    }
    for (i, complaint) in complaints.iter().enumerate() {
        console.write_line(&format!(
            "{}. From: {} ({})",
            i + 1,
            complaint.student_name,
            complaint.student_email
        ))?;
        console.write_line(&format!("   Complaint: {}", complaint.message))?;
        console.write_line("---------------------------------------")?;
    }
    console.write_line("-----------------------------------")
}

fn show_leave_notices<C: Console + ?Sized>(
    state: &AppState,
    console: &mut C,
) -> Result<(), AppError> {
    console.clear_screen()?;
    console.write_line("--- Received Student Leave Notices ---")?;
    let notices = state.store.leave_notices();
    if notices.is_empty() {
        console.write_line("No leave notices have been submitted yet.")?;
    }
    for (i, notice) in notices.iter().enumerate() {
        console.write_line(&format!(
            "{}. From: {} ({})",
            i + 1,
            notice.student_name,
            notice.student_email
        ))?;
        console.write_line(&format!("   Dates: {}", notice.dates))?;
        console.write_line(&format!("   Reason: {}", notice.reason))?;
        console.write_line("----------------------------------------")?;
    }
    console.write_line("--------------------------------------")
}
