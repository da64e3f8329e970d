use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use subscription_probe::config::Settings;
use subscription_probe::domain::log_record::LogRecord;
use subscription_probe::probe;

pub struct TestProbe {
    pub config: Settings,
    pub api_server: MockServer,
    pub log_server: MockServer,
}

impl TestProbe {
    pub async fn spawn() -> TestProbe {
        let api_server = MockServer::start().await;
        let log_server = MockServer::start().await;

        // A short timeout keeps the transport failure scenarios fast
        let config = Settings {
            api_url: Some(api_server.uri()),
            log_url: Some(log_server.uri()),
            origin: Some(String::from("https://probe.test")),
            unsubscribe_email: None,
            request_timeout_secs: 2,
        };

        TestProbe {
            config,
            api_server,
            log_server,
        }
    }

    pub async fn run(&self) -> Option<LogRecord> {
        probe::execute(&self.config).await
    }

    pub async fn mount_endpoint(&self, endpoint: &str, status: u16, expected_hits: u64) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status))
            .expect(expected_hits)
            .mount(&self.api_server)
            .await;
    }

    pub async fn mount_log_sink(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&self.log_server)
            .await;
    }

    /// The email field of the body the /subscribe endpoint actually received.
    pub async fn subscribed_email(&self) -> String {
        self.received_email("/subscribe").await
    }

    pub async fn unsubscribed_email(&self) -> String {
        self.received_email("/unsubscribe").await
    }

    async fn received_email(&self, endpoint: &str) -> String {
        let requests = self
            .api_server
            .received_requests()
            .await
            .expect("Request recording is disabled.");
        let request = requests
            .iter()
            .find(|request| request.url.path() == endpoint)
            .unwrap_or_else(|| panic!("No request was received on {}.", endpoint));
        let body: serde_json::Value =
            serde_json::from_slice(&request.body).expect("Request body is not valid JSON.");

        String::from(
            body["email"]
                .as_str()
                .expect("Request body has no email field."),
        )
    }
}
