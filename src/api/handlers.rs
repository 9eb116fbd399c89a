//! Route handlers.
//!
//! Each handler reads the shared `Dataset`, runs the `analysis` functions it
//! needs and shapes the result into its typed response record. Handlers hold
//! no state of their own and never mutate the dataset.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;

use super::AppState;
use super::error::ApiError;
use super::responses::*;
use crate::analysis::classify::{DistrictStatus, TrendDirection, TrendInterpretation};
use crate::analysis::predict::{self, BASE_YEAR, FIXED_TREND_RATE_CM_PER_YEAR};
use crate::analysis::stats::{
    BaselineSelector, compute_baseline_anomaly, compute_linear_trend, compute_summary,
    scale_and_offset, yearly_averages,
};
use crate::data::districts::{self, DISTRICT_REGISTRY};
use crate::data::format_date;
use crate::model::AffineTransform;

/// Every route the service answers, as listed by `/`.
pub static ENDPOINTS: &[&str] = &[
    "/api/health",
    "/api/historical/timeseries",
    "/api/recent/timeseries",
    "/api/gldas/trend-analysis",
    "/api/analysis/summary",
    "/api/combined/timeline",
    "/api/districts/groundwater",
    "/api/predict",
];

/// Reference year for GLDAS anomalies.
const GLDAS_BASELINE_YEAR: i32 = 2018;

/// Entries averaged for the recent-series baseline (one year of months).
const RECENT_BASELINE_MONTHS: usize = 12;

/// Rough conversion: 10 kg/m² of soil moisture ≈ 1 cm of water.
const KG_M2_TO_CM: f64 = 0.1;

type ApiResult<T> = Result<Json<T>, ApiError>;

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

pub async fn root() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        message: "WaterTrace API - Pakistan groundwater monitoring",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS,
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        data_loaded: !state.dataset.historical.is_empty() && !state.dataset.recent.is_empty(),
    })
}

// ---------------------------------------------------------------------------
// Time series
// ---------------------------------------------------------------------------

pub async fn historical_timeseries(
    State(state): State<AppState>,
) -> ApiResult<HistoricalResponse> {
    let dataset = &state.dataset;
    let statistics = compute_summary(&dataset.historical_values())?;

    let data = dataset
        .historical
        .iter()
        .map(|s| HistoricalPoint {
            date: format_date(s.date),
            groundwater_cm: s.value,
        })
        .collect();

    Ok(Json(HistoricalResponse {
        data,
        summary: HistoricalSummary {
            period: "2002-2017",
            data_source: "GRACE satellite",
            total_records: dataset.historical.len(),
            statistics,
            unit: "cm",
        },
    }))
}

pub async fn recent_timeseries(State(state): State<AppState>) -> ApiResult<RecentResponse> {
    let dataset = &state.dataset;
    let baseline = compute_baseline_anomaly(
        &dataset.recent,
        BaselineSelector::FirstN(RECENT_BASELINE_MONTHS),
    )?;

    let data = dataset
        .recent
        .iter()
        .zip(&baseline.anomalies)
        .map(|(s, &anomaly)| RecentPoint {
            date: format_date(s.date),
            groundwater_cm: s.value,
            data_source: "GLDAS",
            groundwater_anomaly_cm: anomaly,
        })
        .collect();

    Ok(Json(RecentResponse {
        success: true,
        data,
        summary: RecentSummary {
            period: "2018-2024",
            data_source: "GLDAS model",
            total_records: dataset.recent.len(),
            baseline_value: baseline.baseline,
            unit: "kg/m²",
        },
    }))
}

pub async fn gldas_trend_analysis(State(state): State<AppState>) -> ApiResult<TrendResponse> {
    let dataset = &state.dataset;
    let recent = &dataset.recent;

    let baseline =
        compute_baseline_anomaly(recent, BaselineSelector::Year(GLDAS_BASELINE_YEAR))?;
    let (first, last) = match (recent.first(), recent.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ApiError::Internal("recent series is empty".to_string())),
    };

    let trend = compute_linear_trend(&dataset.recent_samples());
    let annual_change = trend.slope;

    let time_series = recent
        .iter()
        .zip(&baseline.anomalies)
        .map(|(s, &anomaly)| TrendPoint {
            date: format_date(s.date),
            absolute_value: s.value,
            anomaly,
            year: s.year,
        })
        .collect();

    // Bounds by date rather than by position.
    let start = recent.iter().map(|s| s.date).min().unwrap_or(first.date);
    let end = recent.iter().map(|s| s.date).max().unwrap_or(last.date);

    Ok(Json(TrendResponse {
        success: true,
        analysis: TrendAnalysis {
            baseline_2018: baseline.baseline,
            current_value: last.value,
            total_change: last.value - first.value,
            annual_change,
            monthly_change: annual_change / 12.0,
            interpretation: TrendInterpretation::from_annual_change(annual_change).description(),
            trend_direction: TrendDirection::from_annual_change(annual_change),
            comparison_note: "GLDAS measures soil moisture, not direct groundwater. \
                              Positive values may indicate better water retention.",
        },
        yearly_averages: yearly_averages(recent),
        time_series,
        metadata: TrendMetadata {
            data_source: "GLDAS V021",
            variable: "Deep Soil Moisture (100-200cm)",
            units: "kg/m²",
            period: format!("{} to {}", start.format("%Y-%m"), end.format("%Y-%m")),
        },
    }))
}

// ---------------------------------------------------------------------------
// Project summary
// ---------------------------------------------------------------------------

static KEY_FINDINGS: &[&str] = &[
    "Pakistan lost 13.71 cm of groundwater from 2002-2017",
    "Annual depletion rate: -0.81 cm per year during GRACE period",
    "Recent GLDAS data shows slight improvement: +1.5 kg/m²/year",
    "Most affected region: Quetta with -15.3 cm depletion",
    "Critical districts: Lahore (-12.5 cm), Faisalabad (-10.8 cm)",
    "145 districts monitored across 4 provinces",
];

pub async fn analysis_summary(State(state): State<AppState>) -> Json<ProjectSummary> {
    Json(ProjectSummary {
        project: "WaterTrace - Pakistan Groundwater Monitoring",
        description: "Comprehensive groundwater depletion analysis using satellite data",
        key_findings: KEY_FINDINGS,
        data_sources: DataSources {
            historical: "GRACE satellite (2002-2017)",
            recent: "GLDAS model (2018-2024)",
        },
        coverage: "145 districts across Pakistan",
        study_area: StudyArea {
            country: "Pakistan",
            districts: 145,
            provinces: 4,
            area_km2: 881_913,
        },
        datasets: Datasets {
            historical: DatasetInfo {
                name: "GRACE",
                period: "2002-2017",
                data_points: state.dataset.historical.len(),
                source: "NASA/GFZ",
            },
            recent: DatasetInfo {
                name: "GLDAS",
                period: "2018-2024",
                data_points: state.dataset.recent.len(),
                source: "NASA LDAS",
            },
        },
    })
}

// ---------------------------------------------------------------------------
// Combined timeline
// ---------------------------------------------------------------------------

/// GRACE anomalies plus GLDAS values mapped onto the GRACE scale.
///
/// GLDAS values become anomalies against their 2018 mean, are scaled from
/// kg/m² to approximate cm, then shifted by the last GRACE value so the two
/// series meet. The result is labeled as an approximation in the summary.
pub async fn combined_timeline(State(state): State<AppState>) -> ApiResult<TimelineResponse> {
    let dataset = &state.dataset;
    let grace_end = dataset.last_historical().value;

    let baseline = compute_baseline_anomaly(
        &dataset.recent,
        BaselineSelector::Year(GLDAS_BASELINE_YEAR),
    )?;
    let transform = AffineTransform::new(KG_M2_TO_CM, grace_end);
    let estimated = scale_and_offset(&baseline.anomalies, transform);

    let mut points: Vec<_> = dataset
        .historical
        .iter()
        .map(|s| (s.date, s.value, TimelineSource::Grace, TimelineKind::MeasuredAnomaly))
        .chain(
            dataset
                .recent
                .iter()
                .zip(estimated)
                .map(|(s, v)| (s.date, v, TimelineSource::Gldas, TimelineKind::EstimatedAnomaly)),
        )
        .collect();

    // Stable: equal dates keep GRACE before GLDAS.
    points.sort_by_key(|(date, ..)| *date);

    let last_of = |source: TimelineSource| {
        points
            .iter()
            .rev()
            .find(|(_, _, s, _)| *s == source)
            .map(|(_, v, ..)| *v)
    };
    let final_value = last_of(TimelineSource::Grace);
    let estimated_current = last_of(TimelineSource::Gldas);

    let data = points
        .iter()
        .map(|&(date, value, source, kind)| TimelinePoint {
            date: format_date(date),
            value,
            source,
            kind,
        })
        .collect();

    Ok(Json(TimelineResponse {
        success: true,
        data,
        summary: TimelineSummary {
            grace_period: GracePeriod {
                start: "2002",
                end: "2017",
                final_value,
                trend: "Declining at -0.81 cm/year",
            },
            gldas_period: GldasPeriod {
                start: "2018",
                end: "2024",
                estimated_current,
                trend: "Slight improvement (+0.15 cm/year equivalent)",
            },
            conversion: ConversionInfo {
                baseline_kg_m2: baseline.baseline,
                transform,
                approximate: true,
                note: "Approximate: GLDAS anomaly vs. 2018 mean, 10 kg/m² ≈ 1 cm of water, \
                       offset to the last GRACE value for continuity. Not a validated \
                       groundwater conversion.",
            },
            interpretation: "GLDAS data suggests possible stabilization after severe depletion",
        },
    }))
}

// ---------------------------------------------------------------------------
// Districts
// ---------------------------------------------------------------------------

pub async fn districts_groundwater() -> ApiResult<DistrictResponse> {
    let changes = districts::all_changes();
    let stats = compute_summary(&changes)?;

    let features: Vec<DistrictFeature> = DISTRICT_REGISTRY
        .iter()
        .map(|d| DistrictFeature {
            kind: "Feature",
            properties: DistrictProperties {
                district: d.name,
                province: d.province,
                groundwater_change: d.groundwater_change_cm,
                status: d.status(),
            },
            geometry: PointGeometry {
                kind: "Point",
                coordinates: Vec::new(),
            },
        })
        .collect();

    let count_status = |status: DistrictStatus| {
        features
            .iter()
            .filter(|f| f.properties.status == status)
            .count()
    };
    let critical_districts = count_status(DistrictStatus::Critical);
    let improving_districts = changes.iter().filter(|&&c| c > 0.0).count();

    Ok(Json(DistrictResponse {
        success: true,
        summary: DistrictSummary {
            total_districts: features.len(),
            average_change: stats.mean,
            most_depleted: stats.min,
            most_improved: stats.max,
            critical_districts,
            improving_districts,
            data_shown: features.len(),
            most_affected: districts::most_depleted().map(|d| d.name).unwrap_or_default(),
        },
        data: FeatureCollection {
            kind: "FeatureCollection",
            features,
        },
    }))
}

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub years: Option<i64>,
}

/// Extrapolates from the last historical value at the fixed GRACE-period
/// rate. Deliberately ignores `compute_linear_trend`; see `analysis::predict`.
pub async fn predict_groundwater(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<PredictionResponse> {
    let request: PredictRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidBody)?;

    let years = predict::effective_years(request.years);
    if years > state.max_prediction_years {
        return Err(ApiError::BadRequest(format!(
            "years must be at most {}",
            state.max_prediction_years
        )));
    }

    let last_value = state.dataset.last_historical().value;
    let predictions = predict::extrapolate(last_value, FIXED_TREND_RATE_CM_PER_YEAR, years);

    Ok(Json(PredictionResponse {
        predictions,
        parameters: PredictionParameters {
            base_year: BASE_YEAR,
            trend_rate: FIXED_TREND_RATE_CM_PER_YEAR,
            years_predicted: years,
            trend_source: "fixed GRACE-period estimate",
        },
    }))
}

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
