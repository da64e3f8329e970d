use subscription_probe::config::get_configuration;
use subscription_probe::probe;
use subscription_probe::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() {
    let subscriber = get_subscriber(String::from("subscription_probe"), String::from("info"));

    init_subscriber(subscriber);

    let config = get_configuration().expect("Failed to read probe configuration.");

    // The probe reports its outcome, it never fails the process
    if let Some(record) = probe::execute(&config).await {
        tracing::info!("Probe run completed with status {}", record.status.as_ref());
    }
}
