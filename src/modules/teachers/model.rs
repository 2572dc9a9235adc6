/// Teacher dashboard options, numbered as shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherMenu {
    ViewMeetings,
    UploadResults,
    TakeAttendance,
    ViewComplaints,
    ViewLeaveNotices,
    Logout,
}

impl TeacherMenu {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::ViewMeetings),
            2 => Some(Self::UploadResults),
            3 => Some(Self::TakeAttendance),
            4 => Some(Self::ViewComplaints),
            5 => Some(Self::ViewLeaveNotices),
            6 => Some(Self::Logout),
            _ => None,
        }
    }
}

/// Header fields for one attendance run.
#[derive(Debug, Clone)]
pub struct AttendanceRequest {
    pub subject: String,
    pub date: String,
}
