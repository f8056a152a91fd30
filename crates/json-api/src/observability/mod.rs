//! Logging, tracing export, Prometheus metrics and the request middleware
//! that ties them to each HTTP exchange.

use thiserror::Error;

mod init;
mod logging;
mod metrics;
mod otel;
mod request;
mod settings;

pub(crate) use init::Observability;
pub(crate) use metrics::{
    PaymentOutcome, metrics_handler, record_payment, record_purchase_created,
};
pub(crate) use request::request_logging;

#[cfg(test)]
pub(crate) use metrics::{installed_for_tests, payments_recorded, purchases_recorded};

/// Errors raised while initialising observability.
#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    /// Failed to build OTLP exporter.
    #[error("failed to build OTLP exporter: {0}")]
    OtlpExporter(#[from] opentelemetry_otlp::ExporterBuildError),

    /// Failed to register the Prometheus collectors.
    #[error("failed to register metrics: {0}")]
    Metrics(#[from] prometheus::Error),

    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}
