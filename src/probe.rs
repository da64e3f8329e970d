use reqwest::StatusCode;
use std::collections::HashMap;

use crate::config::Settings;
use crate::dispatcher::{DispatchError, Dispatcher};
use crate::domain::log_record::LogRecord;
use crate::domain::probe_outcome::ProbeOutcome;
use crate::domain::subscriber_email::SubscriberEmail;
use crate::log_emitter;

#[derive(serde::Serialize)]
struct SubscriptionBody {
    email: String,
}

/// Runs one end-to-end probe: subscribe, unsubscribe after a successful
/// subscribe, then emit the log record. Returns the final record, or None
/// when no API url is configured and nothing was attempted.
#[tracing::instrument(name = "Running subscription probe", skip(settings))]
pub async fn execute(settings: &Settings) -> Option<LogRecord> {
    let (subscribe_url, unsubscribe_url) =
        match (settings.get_subscribe_url(), settings.get_unsubscribe_url()) {
            (Some(subscribe_url), Some(unsubscribe_url)) => (subscribe_url, unsubscribe_url),
            _ => {
                println!("PROBE_API_URL is not set, skipping the probe run");
                return None;
            }
        };

    let identity = SubscriberEmail::generate();
    // The unsubscribe call reuses the generated identity unless an override
    // is configured to exercise unknown-email handling
    let unsubscribe_identity = settings
        .get_unsubscribe_email()
        .expect("Unsubscribe email override is not valid.")
        .unwrap_or_else(|| identity.clone());

    let dispatcher = Dispatcher::new(Some(settings.get_request_timeout()));
    let mut headers = HashMap::new();

    if let Some(origin) = settings.get_origin() {
        headers.insert(String::from("Origin"), origin);
    }

    let mut outcome = ProbeOutcome::pending();

    match post_email_payload(&dispatcher, &subscribe_url, &identity, &headers).await {
        Err(err) => outcome.set_message(format!("Error sending subscribe request: {}", err)),
        Ok(status) => {
            outcome.set_message(status.to_string());

            if status.is_success() {
                outcome.mark_success();

                match post_email_payload(
                    &dispatcher,
                    &unsubscribe_url,
                    &unsubscribe_identity,
                    &headers,
                )
                .await
                {
                    Err(err) => {
                        // Subscribe already went through, the status stays
                        outcome.set_message(format!("Error sending unsubscribe request: {}", err))
                    }
                    Ok(status) => {
                        outcome.set_message(format!("Unsubscribe request: {}", status))
                    }
                }
            }
        }
    }

    let record = LogRecord::new(&identity, outcome);

    log_emitter::emit(&dispatcher, settings.get_log_url().as_deref(), &record).await;

    Some(record)
}

#[tracing::instrument(
    name = "Dispatching subscription request",
    skip(dispatcher, headers),
    fields(
        subscriber_email = %email.as_ref(),
        request_url = %url
    )
)]
async fn post_email_payload(
    dispatcher: &Dispatcher,
    url: &str,
    email: &SubscriberEmail,
    headers: &HashMap<String, String>,
) -> Result<StatusCode, DispatchError> {
    let body = SubscriptionBody {
        email: String::from(email.as_ref()),
    };

    dispatcher.dispatch(url, &body, headers).await
}
