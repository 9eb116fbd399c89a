//! Fixed-rate linear extrapolation of groundwater anomalies.
//!
//! The rate is the published GRACE-period estimate, not a regression
//! computed at request time. Other endpoints fit trends dynamically with
//! `stats::compute_linear_trend`; this one intentionally does not, so its
//! output stays stable for existing dashboard clients.

use serde::Serialize;

/// Historical depletion rate in cm per year (GRACE 2002-2017).
pub const FIXED_TREND_RATE_CM_PER_YEAR: f64 = -0.81;

/// Year of the last historical observation.
pub const BASE_YEAR: i32 = 2017;

/// Horizon used when a request omits `years` or sends zero.
pub const DEFAULT_PREDICTION_YEARS: i64 = 5;

/// One extrapolated value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub year: i32,
    pub predicted_groundwater_cm: f64,
    pub confidence: &'static str,
    pub method: &'static str,
}

/// Resolves the requested horizon: missing or zero falls back to the default.
pub fn effective_years(requested: Option<i64>) -> i64 {
    match requested {
        None | Some(0) => DEFAULT_PREDICTION_YEARS,
        Some(n) => n,
    }
}

/// `years` points at `BASE_YEAR + i`, each `last_value + rate * i` for
/// `i = 1..=years`. A non-positive horizon yields no points.
pub fn extrapolate(last_value: f64, rate_per_year: f64, years: i64) -> Vec<Prediction> {
    (1..=years.max(0))
        .map(|i| Prediction {
            year: BASE_YEAR + i as i32,
            predicted_groundwater_cm: last_value + rate_per_year * i as f64,
            confidence: "medium",
            method: "Linear extrapolation",
        })
        .collect()
}
