pub mod authentication;
pub mod configuration;
pub mod domain;
pub mod lead_sink;
pub mod routes;
pub mod startup;
pub mod telemetry;
