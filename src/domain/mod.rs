pub mod log_record;
pub mod probe_outcome;
pub mod subscriber_email;
