#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;

use std::convert::Infallible;

use prometheus::{Encoder, Histogram, HistogramVec, IntCounter, IntCounterVec, TextEncoder};

lazy_static! {
    static ref SUCCESS: IntCounterVec = register_int_counter_vec!(
        "operation_success_total",
        "Operations that completed or were rejected as invalid input",
        &["component", "operation"]
    )
    .unwrap();
    static ref FAILURE: IntCounterVec = register_int_counter_vec!(
        "operation_failure_total",
        "Operations that failed",
        &["component", "operation"]
    )
    .unwrap();
    static ref TIMER: HistogramVec = register_histogram_vec!(
        "operation_duration_seconds",
        "Operation duration",
        &["component", "operation"]
    )
    .unwrap();
}

// This trait allows certain classes of errors to not be considered failures
pub trait IsErr {
    fn is_err(&self) -> bool {
        true
    }
}

impl IsErr for Infallible {
    fn is_err(&self) -> bool {
        false
    }
}

/// Success and failure counts plus timings for a single operation
#[derive(Clone)]
pub struct Measure {
    success: IntCounter,
    failure: IntCounter,
    timer: Histogram,
}

impl Measure {
    pub fn new(component: &str, operation: &str) -> Measure {
        Measure {
            success: SUCCESS.with_label_values(&[component, operation]),
            failure: FAILURE.with_label_values(&[component, operation]),
            timer: TIMER.with_label_values(&[component, operation]),
        }
    }

    /// Runs `inner`, recording its duration and outcome
    pub fn observe<F, T, E>(&self, inner: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: IsErr,
    {
        let r = self.timer.observe_closure_duration(inner);
        match &r {
            Ok(_) => self.success.inc(),
            Err(e) if !e.is_err() => self.success.inc(),
            Err(_) => self.failure.inc(),
        }
        r
    }
}

/// Renders every registered metric in the prometheus text format
pub fn encode() -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
