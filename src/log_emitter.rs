use std::collections::HashMap;

use crate::dispatcher::Dispatcher;
use crate::domain::log_record::LogRecord;

/// Best-effort forward of the record to the logging sink, followed by the
/// console summary. A sink failure only produces a warning; the summary
/// prints no matter what.
#[tracing::instrument(name = "Emitting probe log record", skip(dispatcher, record))]
pub async fn emit(dispatcher: &Dispatcher, log_url: Option<&str>, record: &LogRecord) {
    if let Some(url) = log_url {
        if let Err(err) = dispatcher.dispatch(url, record, &HashMap::new()).await {
            tracing::warn!("Failed to send log record to the sink: {}", err);
        }
    }

    println!(
        "{} | {} | {}",
        record.email,
        record.status.as_ref(),
        record.message
    );
}
