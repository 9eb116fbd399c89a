//! Derived statistics for the groundwater service.
//!
//! Everything in here is a pure function over the read-only tables; request
//! handlers compose these results into response payloads.
//!
//! Submodules:
//! - `stats`: summary, linear trend, baseline anomaly, affine rescaling,
//!   per-year aggregates.
//! - `classify`: qualitative labels for trends and districts.
//! - `predict`: fixed-rate extrapolation beyond the historical record.

pub mod classify;
pub mod predict;
pub mod stats;
