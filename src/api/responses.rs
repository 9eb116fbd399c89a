//! Typed response bodies, one record per endpoint.
//!
//! Field names are the JSON keys the dashboard reads; do not rename them
//! without updating the frontend.

use serde::Serialize;

use crate::analysis::classify::{DistrictStatus, TrendDirection};
use crate::analysis::predict::Prediction;
use crate::model::{AffineTransform, Summary, YearlyAverage};

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub data_loaded: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Historical series
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HistoricalPoint {
    pub date: String,
    pub groundwater_cm: f64,
}

#[derive(Debug, Serialize)]
pub struct HistoricalSummary {
    pub period: &'static str,
    pub data_source: &'static str,
    pub total_records: usize,
    pub statistics: Summary,
    pub unit: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HistoricalResponse {
    pub data: Vec<HistoricalPoint>,
    pub summary: HistoricalSummary,
}

// ---------------------------------------------------------------------------
// Recent series
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RecentPoint {
    pub date: String,
    /// Soil moisture in kg/m². The key name is kept for client compatibility.
    pub groundwater_cm: f64,
    pub data_source: &'static str,
    pub groundwater_anomaly_cm: f64,
}

#[derive(Debug, Serialize)]
pub struct RecentSummary {
    pub period: &'static str,
    pub data_source: &'static str,
    pub total_records: usize,
    pub baseline_value: f64,
    pub unit: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RecentResponse {
    pub success: bool,
    pub data: Vec<RecentPoint>,
    pub summary: RecentSummary,
}

// ---------------------------------------------------------------------------
// Trend analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct TrendAnalysis {
    pub baseline_2018: f64,
    pub current_value: f64,
    pub total_change: f64,
    pub annual_change: f64,
    pub monthly_change: f64,
    pub interpretation: &'static str,
    pub trend_direction: TrendDirection,
    pub comparison_note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub absolute_value: f64,
    pub anomaly: f64,
    pub year: i32,
}

#[derive(Debug, Serialize)]
pub struct TrendMetadata {
    pub data_source: &'static str,
    pub variable: &'static str,
    pub units: &'static str,
    pub period: String,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub success: bool,
    pub analysis: TrendAnalysis,
    pub yearly_averages: Vec<YearlyAverage>,
    pub time_series: Vec<TrendPoint>,
    pub metadata: TrendMetadata,
}

// ---------------------------------------------------------------------------
// Project summary
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DataSources {
    pub historical: &'static str,
    pub recent: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StudyArea {
    pub country: &'static str,
    pub districts: u32,
    pub provinces: u32,
    pub area_km2: u32,
}

#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    pub name: &'static str,
    pub period: &'static str,
    pub data_points: usize,
    pub source: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Datasets {
    pub historical: DatasetInfo,
    pub recent: DatasetInfo,
}

#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    pub project: &'static str,
    pub description: &'static str,
    pub key_findings: &'static [&'static str],
    pub data_sources: DataSources,
    pub coverage: &'static str,
    pub study_area: StudyArea,
    pub datasets: Datasets,
}

// ---------------------------------------------------------------------------
// Combined timeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimelineSource {
    #[serde(rename = "GRACE")]
    Grace,
    #[serde(rename = "GLDAS")]
    Gldas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    MeasuredAnomaly,
    EstimatedAnomaly,
}

#[derive(Debug, Serialize)]
pub struct TimelinePoint {
    pub date: String,
    pub value: f64,
    pub source: TimelineSource,
    #[serde(rename = "type")]
    pub kind: TimelineKind,
}

#[derive(Debug, Serialize)]
pub struct GracePeriod {
    pub start: &'static str,
    pub end: &'static str,
    pub final_value: Option<f64>,
    pub trend: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GldasPeriod {
    pub start: &'static str,
    pub end: &'static str,
    pub estimated_current: Option<f64>,
    pub trend: &'static str,
}

/// Describes how GLDAS values were mapped onto the GRACE scale.
#[derive(Debug, Serialize)]
pub struct ConversionInfo {
    pub baseline_kg_m2: f64,
    pub transform: AffineTransform,
    pub approximate: bool,
    pub note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TimelineSummary {
    pub grace_period: GracePeriod,
    pub gldas_period: GldasPeriod,
    pub conversion: ConversionInfo,
    pub interpretation: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub success: bool,
    pub data: Vec<TimelinePoint>,
    pub summary: TimelineSummary,
}

// ---------------------------------------------------------------------------
// Districts
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DistrictProperties {
    pub district: &'static str,
    pub province: &'static str,
    pub groundwater_change: f64,
    pub status: DistrictStatus,
}

#[derive(Debug, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Left empty; the map resolves district coordinates client-side.
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct DistrictFeature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub properties: DistrictProperties,
    pub geometry: PointGeometry,
}

#[derive(Debug, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<DistrictFeature>,
}

#[derive(Debug, Serialize)]
pub struct DistrictSummary {
    pub total_districts: usize,
    pub average_change: f64,
    pub most_depleted: f64,
    pub most_improved: f64,
    pub critical_districts: usize,
    pub improving_districts: usize,
    pub data_shown: usize,
    pub most_affected: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DistrictResponse {
    pub success: bool,
    pub data: FeatureCollection,
    pub summary: DistrictSummary,
}

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PredictionParameters {
    pub base_year: i32,
    pub trend_rate: f64,
    pub years_predicted: i64,
    pub trend_source: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub predictions: Vec<Prediction>,
    pub parameters: PredictionParameters,
}
