use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::collections::HashMap;
use std::time;

const REQUEST_TIMEOUT: time::Duration = time::Duration::from_secs(10);

/// Failure crossing the dispatch boundary. A response carrying a 4xx/5xx
/// code is not one of these: HTTP-level failure is data for the caller.
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub struct Dispatcher {
    http_client: Client,
}

impl Dispatcher {
    pub fn new(timeout: Option<time::Duration>) -> Dispatcher {
        let http_client = Client::builder()
            .timeout(timeout.unwrap_or(REQUEST_TIMEOUT))
            .build()
            .unwrap();

        Dispatcher { http_client }
    }

    /// POSTs `payload` as JSON and reports back only the response status.
    /// The body is never read; dropping the response releases the connection
    /// on every exit path.
    pub async fn dispatch<T: Serialize>(
        &self,
        url: &str,
        payload: &T,
        headers: &HashMap<String, String>,
    ) -> Result<StatusCode, DispatchError> {
        let body = serde_json::to_vec(payload)?;

        let mut request = self
            .http_client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body);

        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.send().await?;

        Ok(response.status())
    }
}
