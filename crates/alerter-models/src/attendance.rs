//! Attendance and result-upload models used by the teacher dashboard.
//!
//! Neither is stored anywhere: an attendance sheet lives only for the
//! duration of one "take attendance" run, and a result upload is only
//! acknowledged.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceMark {
    Present,
    Absent,
}

impl AttendanceMark {
    /// Accepts `p` or `a` in either case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(Self::Present),
            'a' => Some(Self::Absent),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }
}

impl fmt::Display for AttendanceMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of an attendance summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceEntry {
    pub student_email: String,
    pub student_name: String,
    pub mark: AttendanceMark,
}

/// Summary printed after attendance is taken, ordered by student email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub subject: String,
    pub date: String,
    pub entries: Vec<AttendanceEntry>,
}

impl AttendanceSummary {
    pub fn present_count(&self) -> usize {
        self.entries.iter().filter(|e| e.mark.is_present()).count()
    }
}

/// Acknowledgement of a simulated result upload. The file is never opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultUpload {
    pub subject: String,
    pub file_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_from_char() {
        assert_eq!(AttendanceMark::from_char('p'), Some(AttendanceMark::Present));
        assert_eq!(AttendanceMark::from_char('P'), Some(AttendanceMark::Present));
        assert_eq!(AttendanceMark::from_char('a'), Some(AttendanceMark::Absent));
        assert_eq!(AttendanceMark::from_char('A'), Some(AttendanceMark::Absent));
        assert_eq!(AttendanceMark::from_char('x'), None);
        assert_eq!(AttendanceMark::from_char('1'), None);
    }

    #[test]
    fn test_present_count() {
        let entry = |name: &str, mark| AttendanceEntry {
            student_email: format!("{name}@test.com"),
            student_name: name.to_string(),
            mark,
        };
        let summary = AttendanceSummary {
            subject: "OS".to_string(),
            date: "15 Feb 2024".to_string(),
            entries: vec![
                entry("a", AttendanceMark::Present),
                entry("b", AttendanceMark::Absent),
                entry("c", AttendanceMark::Present),
            ],
        };

        assert_eq!(summary.present_count(), 2);
    }
}
