use config::{Config, ConfigError};
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time;

use crate::domain::subscriber_email::SubscriberEmail;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub api_url: Option<String>,
    pub log_url: Option<String>,
    pub origin: Option<String>,
    pub unsubscribe_email: Option<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub request_timeout_secs: u64,
}

impl Settings {
    pub fn get_api_url(&self) -> Option<String> {
        self.api_url.clone()
    }

    pub fn get_log_url(&self) -> Option<String> {
        self.log_url.clone()
    }

    pub fn get_origin(&self) -> Option<String> {
        self.origin.clone()
    }

    pub fn get_unsubscribe_email(&self) -> Result<Option<SubscriberEmail>, String> {
        match &self.unsubscribe_email {
            Some(email) => SubscriberEmail::parse(email.clone()).map(Some),
            None => Ok(None),
        }
    }

    pub fn get_request_timeout(&self) -> time::Duration {
        time::Duration::from_secs(self.request_timeout_secs)
    }

    pub fn get_subscribe_url(&self) -> Option<String> {
        self.get_endpoint_url("subscribe")
    }

    pub fn get_unsubscribe_url(&self) -> Option<String> {
        self.get_endpoint_url("unsubscribe")
    }

    fn get_endpoint_url(&self, path: &str) -> Option<String> {
        self.api_url
            .as_ref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), path))
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    // Settings come from environment variables with a prefix of PROBE
    // E.g PROBE_API_URL would set Settings.api_url
    let settings = Config::builder()
        .set_default("request_timeout_secs", 10)?
        .add_source(config::Environment::with_prefix("probe"))
        .build()?;

    settings.try_deserialize()
}
