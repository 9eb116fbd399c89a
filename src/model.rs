//! Core data types for the WaterTrace groundwater service.
//!
//! This module defines the shared domain model imported by all other modules:
//! dated observations, the records produced by the statistics functions, and
//! the error enums. It contains no I/O.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

/// Date format used by every table and every JSON payload (day precision).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days per year used to annualize a per-day regression slope.
pub const DAYS_PER_YEAR: f64 = 365.25;

// ---------------------------------------------------------------------------
// Observation types
// ---------------------------------------------------------------------------

/// A single dated value.
///
/// Sequences of samples are logically time-ordered but callers needing
/// chronological order must sort explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub date: NaiveDate,
    pub value: f64,
}

impl Sample {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A monthly model-derived sample tagged with its year and month.
///
/// `value` is an absolute soil-moisture mass per area (kg/m²), not a
/// groundwater anomaly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecentSample {
    pub date: NaiveDate,
    pub value: f64,
    pub year: i32,
    pub month: u32,
}

impl RecentSample {
    pub fn as_sample(&self) -> Sample {
        Sample::new(self.date, self.value)
    }
}

/// Anything that carries a value and belongs to a calendar year.
///
/// Baseline selection and per-year grouping are written against this trait
/// so they work on both the historical and the recent series.
pub trait Observation {
    fn value(&self) -> f64;
    fn year(&self) -> i32;
}

impl Observation for Sample {
    fn value(&self) -> f64 {
        self.value
    }

    fn year(&self) -> i32 {
        self.date.year()
    }
}

impl Observation for RecentSample {
    fn value(&self) -> f64 {
        self.value
    }

    fn year(&self) -> i32 {
        self.year
    }
}

// ---------------------------------------------------------------------------
// Statistics results
// ---------------------------------------------------------------------------

/// Arithmetic mean, minimum and maximum of a non-empty series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Result of an ordinary least-squares fit of value on elapsed days.
///
/// `slope` is annualized (value unit per year). `intercept` stays in the
/// original per-day parameterization, anchored at the first input sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Fallback returned for an empty series.
    pub const FLAT: LinearTrend = LinearTrend {
        slope: 0.0,
        intercept: 0.0,
    };

    /// `false` when the time axis had zero variance (all samples on one
    /// date, or a single sample) and the fit degenerated to NaN/Infinity.
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }
}

/// A baseline mean and the per-entry anomalies measured against it.
///
/// `anomalies[i]` corresponds to `series[i]` of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineAnomaly {
    pub baseline: f64,
    pub anomalies: Vec<f64>,
}

/// Per-calendar-year aggregate of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyAverage {
    pub year: i32,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

/// Per-sample affine map `v * scale + offset`.
///
/// Used for unit conversion and for shifting one series so it connects
/// visually with another. The conversions built from it are approximations,
/// not physically validated transforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AffineTransform {
    pub scale: f64,
    pub offset: f64,
}

impl AffineTransform {
    pub fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    pub fn apply(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    /// The transform that undoes this one. A zero scale is not invertible.
    pub fn inverse(&self) -> Result<AffineTransform, StatsError> {
        if self.scale == 0.0 || !self.scale.is_finite() {
            return Err(StatsError::DegenerateScale(self.scale));
        }
        Ok(AffineTransform {
            scale: 1.0 / self.scale,
            offset: -self.offset / self.scale,
        })
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised by the statistics functions on invalid input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// A summary was requested over an empty series.
    #[error("cannot summarize an empty series")]
    EmptySeries,
    /// The baseline selector matched no entries.
    #[error("baseline subset is empty: {0}")]
    EmptyBaseline(String),
    /// An affine transform with this scale cannot be inverted.
    #[error("scale factor {0} is not invertible")]
    DegenerateScale(f64),
}

/// Errors raised while loading the compiled-in tables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// A table row carried a date that is not `YYYY-MM-DD`.
    #[error("invalid date '{date}' in {table} table")]
    InvalidDate { table: &'static str, date: String },
    /// A recent-series row's year/month tag disagrees with its date.
    #[error("row {date} in {table} table is tagged {year}-{month:02}")]
    TagMismatch {
        table: &'static str,
        date: String,
        year: i32,
        month: u32,
    },
    /// A table that must contain data is empty.
    #[error("{0} table is empty")]
    EmptyTable(&'static str),
}

/// Errors raised while reading the service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_sample_year_comes_from_date() {
        let sample = Sample::new(date("2017-05-22"), -8.7);
        assert_eq!(Observation::year(&sample), 2017);
        assert_eq!(Observation::value(&sample), -8.7);
    }

    #[test]
    fn test_recent_sample_uses_its_year_tag() {
        let sample = RecentSample {
            date: date("2018-01-15"),
            value: 242.7,
            year: 2018,
            month: 1,
        };
        assert_eq!(Observation::year(&sample), 2018);
        assert_eq!(sample.as_sample(), Sample::new(date("2018-01-15"), 242.7));
    }

    #[test]
    fn test_affine_inverse_rejects_zero_scale() {
        let flat = AffineTransform::new(0.0, 3.0);
        assert_eq!(flat.inverse(), Err(StatsError::DegenerateScale(0.0)));
    }

    #[test]
    fn test_flat_trend_is_finite() {
        assert!(LinearTrend::FLAT.is_finite());
        let degenerate = LinearTrend {
            slope: f64::NAN,
            intercept: f64::NAN,
        };
        assert!(!degenerate.is_finite());
    }
}
