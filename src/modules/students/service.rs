use alerter_db::Store;
use alerter_models::{Complaint, LeaveNotice, User};
use tracing::instrument;

use super::model::LeaveNoticeRequest;

pub struct StudentService;

impl StudentService {
    /// Records a complaint under the session user's email and name.
    #[instrument(skip(store, student, message), fields(email = %student.email))]
    pub fn submit_complaint<'a>(
        store: &'a mut Store,
        student: &User,
        message: impl Into<String>,
    ) -> &'a Complaint {
        let complaint = store.push_complaint(Complaint::new(student, message));
        tracing::info!(submitted_at = %complaint.submitted_at, "Complaint recorded");
        complaint
    }

    #[instrument(skip(store, student, dto), fields(email = %student.email))]
    pub fn submit_leave_notice<'a>(
        store: &'a mut Store,
        student: &User,
        dto: LeaveNoticeRequest,
    ) -> &'a LeaveNotice {
        let notice = store.push_leave_notice(LeaveNotice::new(student, dto.dates, dto.reason));
        tracing::info!(
            dates = %notice.dates,
            submitted_at = %notice.submitted_at,
            "Leave notice recorded"
        );
        notice
    }
}
