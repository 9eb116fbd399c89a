//! Qualitative labels derived from numeric results: trend interpretation,
//! trend direction and district depletion status.

use serde::Serialize;
use std::fmt;

/// Annual change (value unit per year) beyond which a trend is no longer
/// considered stable.
pub const STABLE_TREND_BAND: f64 = 2.0;

// ---------------------------------------------------------------------------
// Trend interpretation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendInterpretation {
    Declining,
    Increasing,
    Stable,
}

impl TrendInterpretation {
    /// Below `-2` per year is declining, above `+2` increasing, anything in
    /// between (inclusive) stable.
    pub fn from_annual_change(annual_change: f64) -> Self {
        if annual_change < -STABLE_TREND_BAND {
            TrendInterpretation::Declining
        } else if annual_change > STABLE_TREND_BAND {
            TrendInterpretation::Increasing
        } else {
            TrendInterpretation::Stable
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TrendInterpretation::Declining => {
                "Declining trend - likely continued groundwater depletion"
            }
            TrendInterpretation::Increasing => {
                "Increasing trend - possible stabilization or recovery"
            }
            TrendInterpretation::Stable => "Relatively stable - minimal change detected",
        }
    }
}

/// Direction of an annualized trend. Zero counts as decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
}

impl TrendDirection {
    pub fn from_annual_change(annual_change: f64) -> Self {
        if annual_change > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        }
    }
}

// ---------------------------------------------------------------------------
// District status
// ---------------------------------------------------------------------------

/// Groundwater stress level of a district, from its estimated change in cm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DistrictStatus {
    Critical,
    Warning,
    Moderate,
    Improving,
}

impl DistrictStatus {
    /// `< -10` Critical, `< -5` Warning, `< 0` Moderate, otherwise Improving.
    pub fn classify(change_cm: f64) -> Self {
        if change_cm < -10.0 {
            DistrictStatus::Critical
        } else if change_cm < -5.0 {
            DistrictStatus::Warning
        } else if change_cm < 0.0 {
            DistrictStatus::Moderate
        } else {
            DistrictStatus::Improving
        }
    }
}

impl fmt::Display for DistrictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistrictStatus::Critical => write!(f, "Critical"),
            DistrictStatus::Warning => write!(f, "Warning"),
            DistrictStatus::Moderate => write!(f, "Moderate"),
            DistrictStatus::Improving => write!(f, "Improving"),
        }
    }
}
