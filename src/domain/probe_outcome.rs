#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProbeStatus {
    Success,
    Failed,
}

impl ProbeStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeStatus::Success)
    }

    pub fn parse(status: String) -> Result<ProbeStatus, String> {
        match status.as_str() {
            "SUCCESS" => Ok(ProbeStatus::Success),
            "FAILED" => Ok(ProbeStatus::Failed),
            _ => Err(format!("{} is not a valid probe status", status)),
        }
    }
}

impl AsRef<str> for ProbeStatus {
    fn as_ref(&self) -> &str {
        match self {
            ProbeStatus::Success => "SUCCESS",
            ProbeStatus::Failed => "FAILED",
        }
    }
}

/// Coarse verdict of a run plus the message describing the last meaningful
/// event. A run starts failed and is only ever upgraded; there is no way
/// back from Success.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub status: ProbeStatus,
    pub message: String,
}

impl ProbeOutcome {
    pub fn pending() -> ProbeOutcome {
        ProbeOutcome {
            status: ProbeStatus::Failed,
            message: String::from("Subscription failed"),
        }
    }

    pub fn mark_success(&mut self) {
        self.status = ProbeStatus::Success;
    }

    pub fn set_message(&mut self, message: String) {
        self.message = message;
    }
}
