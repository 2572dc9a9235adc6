//! Fixed informational content shown on the dashboards.
//!
//! None of this is derived from stored records: the student attendance and
//! results screens show the same placeholder figures for everyone, whatever
//! a teacher has uploaded or marked.

pub struct Event {
    pub title: &'static str,
    pub date: &'static str,
    pub venue: &'static str,
}

pub struct Meeting {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub venue: &'static str,
}

pub struct SubjectAttendance {
    pub subject: &'static str,
    pub percent: u8,
}

pub struct SubjectGrade {
    pub subject: &'static str,
    pub grade: &'static str,
}

pub const COLLEGE_EVENTS: &[Event] = &[
    Event {
        title: "Tech Fest 'Innovate 2024'",
        date: "20 March, 2024",
        venue: "College Auditorium",
    },
    Event {
        title: "Annual Sports Day",
        date: "05 April, 2024",
        venue: "College Sports Ground",
    },
    Event {
        title: "Guest Lecture on AI Ethics",
        date: "15 April, 2024",
        venue: "Seminar Hall B",
    },
];

pub const TEACHER_MEETINGS: &[Meeting] = &[
    Meeting {
        title: "Department Faculty Meeting",
        date: "18 February, 2024",
        time: "03:00 PM",
        venue: "Staff Room",
    },
    Meeting {
        title: "Curriculum Review Committee",
        date: "25 February, 2024",
        time: "11:00 AM",
        venue: "Conference Hall",
    },
];

pub const OVERALL_ATTENDANCE_PERCENT: u8 = 85;

pub const SUBJECT_ATTENDANCE: &[SubjectAttendance] = &[
    SubjectAttendance {
        subject: "Data Structures",
        percent: 90,
    },
    SubjectAttendance {
        subject: "Operating Systems",
        percent: 82,
    },
    SubjectAttendance {
        subject: "Database Management",
        percent: 78,
    },
    SubjectAttendance {
        subject: "Computer Networks",
        percent: 91,
    },
];

pub const LAST_SEMESTER_GRADES: &[SubjectGrade] = &[
    SubjectGrade {
        subject: "Data Structures",
        grade: "A",
    },
    SubjectGrade {
        subject: "Mathematics III",
        grade: "B+",
    },
    SubjectGrade {
        subject: "Digital Logic",
        grade: "A-",
    },
    SubjectGrade {
        subject: "Economics",
        grade: "B",
    },
];

pub const LAST_SEMESTER_SGPA: &str = "8.8";
