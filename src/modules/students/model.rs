/// Student dashboard options, numbered as shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentMenu {
    ViewEvents,
    ViewAttendance,
    SubmitComplaint,
    SubmitLeaveNotice,
    ViewResults,
    Logout,
}

impl StudentMenu {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::ViewEvents),
            2 => Some(Self::ViewAttendance),
            3 => Some(Self::SubmitComplaint),
            4 => Some(Self::SubmitLeaveNotice),
            5 => Some(Self::ViewResults),
            6 => Some(Self::Logout),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeaveNoticeRequest {
    pub dates: String,
    pub reason: String,
}
