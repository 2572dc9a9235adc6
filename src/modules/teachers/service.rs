use std::collections::BTreeMap;

use alerter_core::AppError;
use alerter_db::Store;
use alerter_models::{AttendanceEntry, AttendanceMark, AttendanceSummary, ResultUpload, User};
use tracing::instrument;

use super::model::AttendanceRequest;

pub struct TeacherService;

impl TeacherService {
    /// Acknowledges a result upload without reading the file or storing
    /// anything. Student result screens are unaffected.
    #[instrument]
    pub fn upload_results(subject: String, file_path: String) -> ResultUpload {
        tracing::info!("Simulated result upload");
        ResultUpload { subject, file_path }
    }

    /// Takes attendance for every student in store order.
    ///
    /// `mark_student` is asked once per student. The marks are kept in a
    /// sheet keyed by email that only lives for this call; the returned
    /// summary is ordered by email. Returns `None` when there are no
    /// students.
    #[instrument(skip(store, mark_student), fields(subject = %dto.subject, date = %dto.date))]
    pub fn take_attendance<F>(
        store: &Store,
        dto: AttendanceRequest,
        mut mark_student: F,
    ) -> Result<Option<AttendanceSummary>, AppError>
    where
        F: FnMut(&User) -> Result<AttendanceMark, AppError>,
    {
        let mut sheet: BTreeMap<&str, AttendanceMark> = BTreeMap::new();
        for student in store.students() {
            let mark = mark_student(student)?;
            sheet.insert(student.email.as_str(), mark);
        }

        if sheet.is_empty() {
            tracing::info!("No students to take attendance for");
            return Ok(None);
        }

        let entries: Vec<AttendanceEntry> = sheet
            .into_iter()
            .map(|(email, mark)| AttendanceEntry {
                student_email: email.to_string(),
                student_name: store
                    .find_user_by_email(email)
                    .map(|u| u.name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                mark,
            })
            .collect();

        let summary = AttendanceSummary {
            subject: dto.subject,
            date: dto.date,
            entries,
        };
        tracing::info!(
            students = summary.entries.len(),
            present = summary.present_count(),
            "Attendance taken (not persisted)"
        );
        Ok(Some(summary))
    }
}
