pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod log_emitter;
pub mod probe;
pub mod telemetry;
