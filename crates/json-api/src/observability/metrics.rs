//! Prometheus metrics: HTTP traffic plus purchase and payment outcomes.

use std::sync::OnceLock;

use prometheus::{
    Encoder, Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts,
    Registry, TextEncoder, core::Collector,
};
use salvo::{
    Request, Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

use lapak_app::domain::purchases::PurchasesServiceError;

const LATENCY_BUCKETS: [f64; 13] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

const TRANSFER_BUCKETS: [f64; 6] = [1.0, 2.0, 3.0, 5.0, 8.0, 13.0];

#[derive(Debug)]
struct ServiceMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
    purchases_created_total: IntCounter,
    purchase_transfers: Histogram,
    payments_total: IntCounterVec,
}

static SERVICE_METRICS: OnceLock<ServiceMetrics> = OnceLock::new();

/// How a payment attempt ended, as recorded in `lapak_payments_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaymentOutcome {
    Received,
    MissingPayment,
    AlreadyPaid,
    InsufficientStock,
    NotFound,
    Rejected,
    Failed,
}

impl PaymentOutcome {
    pub(crate) fn from_error(error: &PurchasesServiceError) -> Self {
        match error {
            PurchasesServiceError::MissingPayment { .. } => Self::MissingPayment,
            PurchasesServiceError::AlreadyPaid => Self::AlreadyPaid,
            PurchasesServiceError::InsufficientStock { .. } => Self::InsufficientStock,
            PurchasesServiceError::NotFound => Self::NotFound,
            PurchasesServiceError::Sql(_) => Self::Failed,
            _ => Self::Rejected,
        }
    }

    fn as_label(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::MissingPayment => "missing_payment",
            Self::AlreadyPaid => "already_paid",
            Self::InsufficientStock => "insufficient_stock",
            Self::NotFound => "not_found",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        }
    }
}

impl ServiceMetrics {
    fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_total = register(
            &registry,
            IntCounterVec::new(
                Opts::new(
                    "lapak_json_http_requests_total",
                    "Total HTTP requests partitioned by method, route, status class, and status code.",
                ),
                &["method", "route", "status_class", "status_code"],
            )?,
        )?;

        let request_duration_seconds = register(
            &registry,
            HistogramVec::new(
                HistogramOpts::new(
                    "lapak_json_http_request_duration_seconds",
                    "HTTP request duration in seconds partitioned by method and route.",
                )
                .buckets(LATENCY_BUCKETS.to_vec()),
                &["method", "route"],
            )?,
        )?;

        let requests_in_flight = register(
            &registry,
            IntGauge::with_opts(Opts::new(
                "lapak_json_http_requests_in_flight",
                "Current number of in-flight HTTP requests.",
            ))?,
        )?;

        let purchases_created_total = register(
            &registry,
            IntCounter::with_opts(Opts::new(
                "lapak_purchases_created_total",
                "Purchases recorded and awaiting payment.",
            ))?,
        )?;

        let purchase_transfers = register(
            &registry,
            Histogram::with_opts(
                HistogramOpts::new(
                    "lapak_purchase_transfers",
                    "Bank transfers owed per purchase, one per seller in the cart.",
                )
                .buckets(TRANSFER_BUCKETS.to_vec()),
            )?,
        )?;

        let payments_total = register(
            &registry,
            IntCounterVec::new(
                Opts::new(
                    "lapak_payments_total",
                    "Payment submissions partitioned by outcome.",
                ),
                &["outcome"],
            )?,
        )?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
            requests_in_flight,
            purchases_created_total,
            purchase_transfers,
            payments_total,
        })
    }
}

fn register<M>(registry: &Registry, metric: M) -> Result<M, prometheus::Error>
where
    M: Collector + Clone + 'static,
{
    registry.register(Box::new(metric.clone()))?;

    Ok(metric)
}

/// Build and install the process-wide registry. Calling it again is a no-op.
pub(super) fn install() -> Result<(), prometheus::Error> {
    if SERVICE_METRICS.get().is_some() {
        return Ok(());
    }

    // A concurrent install may win the race; either registry is equivalent.
    _ = SERVICE_METRICS.set(ServiceMetrics::new()?);

    Ok(())
}

fn metrics() -> Option<&'static ServiceMetrics> {
    SERVICE_METRICS.get()
}

#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    tracked: bool,
}

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let Some(metrics) = metrics() else {
            return Self { tracked: false };
        };

        metrics.requests_in_flight.inc();

        Self { tracked: true }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if self.tracked
            && let Some(metrics) = metrics()
        {
            metrics.requests_in_flight.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let status_code_label = status_code.to_string();

    metrics
        .requests_total
        .with_label_values(&[
            method,
            route,
            status_class(status_code),
            status_code_label.as_str(),
        ])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

/// Count a created purchase and how many sellers it has to pay.
pub(crate) fn record_purchase_created(transfers: usize) {
    let Some(metrics) = metrics() else {
        return;
    };

    metrics.purchases_created_total.inc();

    #[expect(
        clippy::cast_precision_loss,
        reason = "transfer counts are far below f64's exact integer range"
    )]
    metrics.purchase_transfers.observe(transfers as f64);
}

pub(crate) fn record_payment(outcome: PaymentOutcome) {
    if let Some(metrics) = metrics() {
        metrics
            .payments_total
            .with_label_values(&[outcome.as_label()])
            .inc();
    }
}

#[cfg(test)]
pub(crate) fn installed_for_tests() -> bool {
    install().is_ok()
}

#[cfg(test)]
pub(crate) fn payments_recorded(outcome: PaymentOutcome) -> u64 {
    metrics().map_or(0, |metrics| {
        metrics
            .payments_total
            .with_label_values(&[outcome.as_label()])
            .get()
    })
}

#[cfg(test)]
pub(crate) fn purchases_recorded() -> u64 {
    metrics().map_or(0, |metrics| metrics.purchases_created_total.get())
}

#[handler]
pub(crate) async fn metrics_handler(_req: &mut Request, res: &mut Response) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);
        return;
    };

    let encoder = TextEncoder::new();
    let mut encoded = Vec::new();

    if let Err(source) = encoder.encode(&metrics.registry.gather(), &mut encoded) {
        error!("failed to encode metrics response: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

        return;
    }

    match HeaderValue::from_str(encoder.format_type()) {
        Ok(content_type) => {
            res.headers_mut().insert(CONTENT_TYPE, content_type);
            res.render(String::from_utf8_lossy(&encoded).into_owned());
        }
        Err(source) => {
            error!("failed to encode metrics content type header: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}
