//! Summary statistics, linear trend, baseline anomalies and affine rescaling
//! over groundwater time series.
//!
//! Every function here is pure and deterministic. Callers own the data;
//! nothing is cached between calls.

use std::collections::BTreeMap;

use crate::model::{
    AffineTransform, BaselineAnomaly, DAYS_PER_YEAR, LinearTrend, Observation, Sample, StatsError,
    Summary, YearlyAverage,
};

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Mean, minimum and maximum of `values`.
///
/// Returns `StatsError::EmptySeries` for an empty slice instead of producing
/// `0/0`.
pub fn compute_summary(values: &[f64]) -> Result<Summary, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptySeries);
    }

    let sum: f64 = values.iter().sum();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(Summary {
        mean: sum / values.len() as f64,
        min,
        max,
    })
}

// ---------------------------------------------------------------------------
// Linear trend
// ---------------------------------------------------------------------------

/// Ordinary least-squares regression of value on elapsed days.
///
/// The independent variable is `x_i = date_i - date_0` in whole days, where
/// `date_0` is the FIRST sample in input order, not the earliest date. A
/// series presented out of order still fits (least squares is order
/// independent) but the intercept is then anchored at that first sample.
///
/// The returned slope is annualized (`daily slope * 365.25`); the intercept
/// is left in per-day units.
///
/// # Boundary conditions
/// - Empty input returns `LinearTrend::FLAT` (slope 0, intercept 0).
/// - A zero-variance time axis (one sample, or every sample on the same
///   date) divides by zero and yields NaN/Infinity. Check
///   `LinearTrend::is_finite` before presenting the result.
pub fn compute_linear_trend(samples: &[Sample]) -> LinearTrend {
    let Some(first) = samples.first() else {
        return LinearTrend::FLAT;
    };

    let n = samples.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;

    for sample in samples {
        let x = (sample.date - first.date).num_days() as f64;
        let y = sample.value;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;

    LinearTrend {
        slope: slope * DAYS_PER_YEAR,
        intercept,
    }
}

// ---------------------------------------------------------------------------
// Baseline anomaly
// ---------------------------------------------------------------------------

/// Identifies the reference subset a baseline is averaged over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineSelector {
    /// The first `n` entries in input order.
    FirstN(usize),
    /// Every entry belonging to this calendar year.
    Year(i32),
}

impl BaselineSelector {
    fn describe(&self) -> String {
        match self {
            BaselineSelector::FirstN(n) => format!("first {} entries", n),
            BaselineSelector::Year(year) => format!("entries in year {}", year),
        }
    }
}

/// Baseline = mean of the selected subset; anomaly = value - baseline for
/// every entry of `series`.
///
/// An empty subset (empty series, `FirstN(0)`, or a year with no entries)
/// is `StatsError::EmptyBaseline`. `FirstN(n)` with `n` larger than the
/// series uses the whole series.
pub fn compute_baseline_anomaly<T: Observation>(
    series: &[T],
    selector: BaselineSelector,
) -> Result<BaselineAnomaly, StatsError> {
    let subset: Vec<f64> = match selector {
        BaselineSelector::FirstN(n) => series.iter().take(n).map(Observation::value).collect(),
        BaselineSelector::Year(year) => series
            .iter()
            .filter(|obs| obs.year() == year)
            .map(Observation::value)
            .collect(),
    };

    if subset.is_empty() {
        return Err(StatsError::EmptyBaseline(selector.describe()));
    }

    let baseline = subset.iter().sum::<f64>() / subset.len() as f64;
    let anomalies = series.iter().map(|obs| obs.value() - baseline).collect();

    Ok(BaselineAnomaly {
        baseline,
        anomalies,
    })
}

// ---------------------------------------------------------------------------
// Scale and offset
// ---------------------------------------------------------------------------

/// Applies `transform` to every value.
///
/// See `AffineTransform` for the caveat on what these conversions mean.
pub fn scale_and_offset(values: &[f64], transform: AffineTransform) -> Vec<f64> {
    values.iter().map(|&v| transform.apply(v)).collect()
}

// ---------------------------------------------------------------------------
// Per-year aggregates
// ---------------------------------------------------------------------------

/// Mean, min, max and sample count per calendar year, in ascending year
/// order. Years with no samples are absent.
pub fn yearly_averages<T: Observation>(series: &[T]) -> Vec<YearlyAverage> {
    let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for obs in series {
        by_year.entry(obs.year()).or_default().push(obs.value());
    }

    by_year
        .into_iter()
        .filter_map(|(year, values)| {
            compute_summary(&values).ok().map(|s| YearlyAverage {
                year,
                mean: s.mean,
                min: s.min,
                max: s.max,
                samples: values.len(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DATE_FORMAT, RecentSample};
    use chrono::NaiveDate;

    const EPS: f64 = 1e-9;

    fn sample(date: &str, value: f64) -> Sample {
        Sample::new(NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(), value)
    }

    fn recent(date: &str, value: f64) -> RecentSample {
        let d = NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap();
        RecentSample {
            date: d,
            value,
            year: chrono::Datelike::year(&d),
            month: chrono::Datelike::month(&d),
        }
    }

    // --- Summary ------------------------------------------------------------

    #[test]
    fn test_summary_of_single_value() {
        let s = compute_summary(&[4.5]).unwrap();
        assert_eq!(s, Summary { mean: 4.5, min: 4.5, max: 4.5 });
    }

    #[test]
    fn test_summary_of_one_two_three() {
        let s = compute_summary(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s, Summary { mean: 2.0, min: 1.0, max: 3.0 });
    }

    #[test]
    fn test_summary_handles_negative_anomalies() {
        let s = compute_summary(&[-14.3, 5.8, -0.2]).unwrap();
        assert_eq!(s.min, -14.3);
        assert_eq!(s.max, 5.8);
        assert!((s.mean - (-8.7 / 3.0)).abs() < EPS);
    }

    #[test]
    fn test_summary_of_empty_series_is_an_error() {
        assert_eq!(compute_summary(&[]), Err(StatsError::EmptySeries));
    }

    // --- Linear trend -------------------------------------------------------

    #[test]
    fn test_trend_of_empty_series_is_flat() {
        assert_eq!(compute_linear_trend(&[]), LinearTrend::FLAT);
    }

    #[test]
    fn test_trend_one_unit_per_day_annualizes_to_365_25() {
        // 2020 is a leap year: 366 days between the two samples.
        let samples = [sample("2020-01-01", 0.0), sample("2021-01-01", 366.0)];
        let trend = compute_linear_trend(&samples);
        assert!((trend.slope - 365.25).abs() < EPS, "slope was {}", trend.slope);
        assert!(trend.intercept.abs() < EPS);
    }

    #[test]
    fn test_trend_two_points_one_year_apart() {
        let samples = [sample("2020-01-01", 0.0), sample("2021-01-01", 365.25)];
        let trend = compute_linear_trend(&samples);
        // 365.25 units over 366 days, annualized.
        let expected = 365.25 / 366.0 * 365.25;
        assert!((trend.slope - expected).abs() < EPS);
        assert!((trend.slope - 365.25).abs() < 1.0);
    }

    #[test]
    fn test_trend_intercept_is_value_at_first_sample() {
        let samples = [
            sample("2018-01-01", 10.0),
            sample("2018-01-11", 12.0),
            sample("2018-01-21", 14.0),
        ];
        let trend = compute_linear_trend(&samples);
        assert!((trend.intercept - 10.0).abs() < EPS);
        assert!((trend.slope - 0.2 * 365.25).abs() < EPS);
    }

    #[test]
    fn test_trend_is_anchored_at_first_element_not_earliest_date() {
        // Same points, different presentation order: slope agrees, intercept
        // follows whichever sample came first.
        let ordered = [sample("2018-01-01", 10.0), sample("2018-01-11", 12.0)];
        let reversed = [sample("2018-01-11", 12.0), sample("2018-01-01", 10.0)];
        let a = compute_linear_trend(&ordered);
        let b = compute_linear_trend(&reversed);
        assert!((a.slope - b.slope).abs() < EPS);
        assert!((a.intercept - 10.0).abs() < EPS);
        assert!((b.intercept - 12.0).abs() < EPS);
    }

    #[test]
    fn test_trend_with_single_sample_is_not_finite() {
        let trend = compute_linear_trend(&[sample("2018-01-01", 10.0)]);
        assert!(!trend.is_finite());
    }

    #[test]
    fn test_trend_with_identical_dates_is_not_finite() {
        let samples = [sample("2018-01-01", 1.0), sample("2018-01-01", 3.0)];
        assert!(!compute_linear_trend(&samples).is_finite());
    }

    // --- Baseline anomaly ---------------------------------------------------

    #[test]
    fn test_entry_equal_to_baseline_has_zero_anomaly() {
        let series = [
            recent("2018-01-15", 1.0),
            recent("2018-02-15", 3.0),
            recent("2019-01-15", 2.0),
        ];
        let result = compute_baseline_anomaly(&series, BaselineSelector::FirstN(2)).unwrap();
        assert_eq!(result.baseline, 2.0);
        assert_eq!(result.anomalies, vec![-1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_year_selector_averages_only_that_year() {
        let series = [
            recent("2018-06-15", 10.0),
            recent("2018-07-15", 20.0),
            recent("2019-06-15", 100.0),
        ];
        let result = compute_baseline_anomaly(&series, BaselineSelector::Year(2018)).unwrap();
        assert_eq!(result.baseline, 15.0);
        assert_eq!(result.anomalies.len(), 3);
        assert_eq!(result.anomalies[2], 85.0);
    }

    #[test]
    fn test_first_n_larger_than_series_uses_whole_series() {
        let series = [sample("2002-03-31", 2.0), sample("2002-04-30", 4.0)];
        let result = compute_baseline_anomaly(&series, BaselineSelector::FirstN(12)).unwrap();
        assert_eq!(result.baseline, 3.0);
    }

    #[test]
    fn test_empty_baseline_subset_is_an_error() {
        let series = [sample("2002-03-31", 2.0)];
        assert!(matches!(
            compute_baseline_anomaly(&series, BaselineSelector::Year(1999)),
            Err(StatsError::EmptyBaseline(_))
        ));
        assert!(matches!(
            compute_baseline_anomaly(&series, BaselineSelector::FirstN(0)),
            Err(StatsError::EmptyBaseline(_))
        ));
        let empty: [Sample; 0] = [];
        assert!(compute_baseline_anomaly(&empty, BaselineSelector::FirstN(12)).is_err());
    }

    // --- Scale and offset ---------------------------------------------------

    #[test]
    fn test_scale_and_offset_applies_affine_map() {
        let out = scale_and_offset(&[10.0, -20.0], AffineTransform::new(0.1, -8.0));
        assert!((out[0] - (-7.0)).abs() < EPS);
        assert!((out[1] - (-10.0)).abs() < EPS);
    }

    #[test]
    fn test_scale_and_offset_inverse_recovers_original() {
        let original = [242.72560958228482, 283.0249605257459, -1.5, 0.0];
        let forward = AffineTransform::new(0.1, -8.727905291100553);
        let converted = scale_and_offset(&original, forward);
        let restored = scale_and_offset(&converted, forward.inverse().unwrap());
        for (a, b) in original.iter().zip(&restored) {
            assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
        }
    }

    // --- Yearly averages ----------------------------------------------------

    #[test]
    fn test_yearly_averages_group_by_calendar_year() {
        let series = [
            recent("2019-01-15", 4.0),
            recent("2018-01-15", 1.0),
            recent("2018-02-15", 3.0),
        ];
        let years = yearly_averages(&series);
        assert_eq!(years.len(), 2);
        assert_eq!(years[0].year, 2018);
        assert_eq!(years[0].mean, 2.0);
        assert_eq!(years[0].samples, 2);
        assert_eq!(years[1].year, 2019);
        assert_eq!(years[1].max, 4.0);
    }
}
