use chrono::Utc;

use crate::domain::probe_outcome::{ProbeOutcome, ProbeStatus};
use crate::domain::subscriber_email::SubscriberEmail;

/// Snapshot of the identity and the final outcome of a run, stamped with the
/// run completion time. This is the exact shape the logging sink receives.
#[derive(Debug, serde::Serialize)]
pub struct LogRecord {
    pub email: String,
    pub timestamp: String,
    pub status: ProbeStatus,
    pub message: String,
}

impl LogRecord {
    pub fn new(email: &SubscriberEmail, outcome: ProbeOutcome) -> LogRecord {
        LogRecord {
            email: String::from(email.as_ref()),
            timestamp: Utc::now().to_rfc3339(),
            status: outcome.status,
            message: outcome.message,
        }
    }
}
