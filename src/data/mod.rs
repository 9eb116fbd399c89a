//! Compiled-in groundwater tables and the typed `Dataset` built from them.
//!
//! The raw tables hold dates as strings; `Dataset::load` parses them once at
//! startup. After that the series are immutable and shared read-only by every
//! request.

pub mod districts;
pub mod historical;
pub mod recent;

use chrono::{Datelike, NaiveDate};

use crate::model::{DATE_FORMAT, DataError, RecentSample, Sample};

use historical::{HISTORICAL_SERIES, HistoricalRecord};
use recent::{RECENT_SERIES, RecentRecord};

/// Parsed, read-only copies of both time series.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// GRACE anomalies in cm, in table order.
    pub historical: Vec<Sample>,
    /// GLDAS soil moisture in kg/m², in table order.
    pub recent: Vec<RecentSample>,
}

impl Dataset {
    /// Parses the compiled-in tables.
    pub fn load() -> Result<Self, DataError> {
        Self::from_records(HISTORICAL_SERIES, RECENT_SERIES)
    }

    /// Parses arbitrary tables. Every date must be `YYYY-MM-DD`, every
    /// recent row's year/month tag must agree with its date, and neither
    /// table may be empty.
    pub fn from_records(
        historical: &[HistoricalRecord],
        recent: &[RecentRecord],
    ) -> Result<Self, DataError> {
        if historical.is_empty() {
            return Err(DataError::EmptyTable("historical"));
        }
        if recent.is_empty() {
            return Err(DataError::EmptyTable("recent"));
        }

        let historical = historical
            .iter()
            .map(|r| Ok(Sample::new(parse_date("historical", r.date)?, r.groundwater_cm)))
            .collect::<Result<Vec<_>, DataError>>()?;

        let recent = recent
            .iter()
            .map(parse_recent)
            .collect::<Result<Vec<_>, DataError>>()?;

        Ok(Self { historical, recent })
    }

    /// Last historical sample in table order.
    pub fn last_historical(&self) -> &Sample {
        // Non-empty is checked in `from_records`.
        &self.historical[self.historical.len() - 1]
    }

    pub fn historical_values(&self) -> Vec<f64> {
        self.historical.iter().map(|s| s.value).collect()
    }

    pub fn recent_values(&self) -> Vec<f64> {
        self.recent.iter().map(|s| s.value).collect()
    }

    /// Recent series viewed as plain dated samples, for trend fitting.
    pub fn recent_samples(&self) -> Vec<Sample> {
        self.recent.iter().map(RecentSample::as_sample).collect()
    }
}

fn parse_date(table: &'static str, date: &str) -> Result<NaiveDate, DataError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| DataError::InvalidDate {
        table,
        date: date.to_string(),
    })
}

fn parse_recent(record: &RecentRecord) -> Result<RecentSample, DataError> {
    let date = parse_date("recent", record.date)?;
    if date.year() != record.year || date.month() != record.month {
        return Err(DataError::TagMismatch {
            table: "recent",
            date: record.date.to_string(),
            year: record.year,
            month: record.month,
        });
    }
    Ok(RecentSample {
        date,
        value: record.soil_moisture_kg_m2,
        year: record.year,
        month: record.month,
    })
}

/// Formats a date the way every payload expects it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_tables_load() {
        let data = Dataset::load().expect("compiled-in tables should parse");
        assert_eq!(data.historical.len(), 163);
        assert_eq!(data.recent.len(), 84);
    }

    #[test]
    fn test_historical_table_spans_grace_period() {
        let data = Dataset::load().unwrap();
        assert_eq!(format_date(data.historical[0].date), "2002-03-31");
        assert_eq!(format_date(data.last_historical().date), "2017-05-22");
        assert_eq!(data.last_historical().value, -8.727905291100553);
    }

    #[test]
    fn test_historical_table_is_chronological() {
        // The trend fit anchors x at the first row, so the table must start
        // at its earliest date.
        let data = Dataset::load().unwrap();
        for pair in data.historical.windows(2) {
            assert!(pair[0].date < pair[1].date, "{} !< {}", pair[0].date, pair[1].date);
        }
    }

    #[test]
    fn test_recent_table_is_regular_monthly() {
        let data = Dataset::load().unwrap();
        for (i, s) in data.recent.iter().enumerate() {
            assert_eq!(s.year, 2018 + (i / 12) as i32);
            assert_eq!(s.month, (i % 12) as u32 + 1);
            assert_eq!(s.date.day(), 15);
        }
    }

    #[test]
    fn test_recent_2018_has_twelve_entries() {
        let data = Dataset::load().unwrap();
        assert_eq!(data.recent.iter().filter(|s| s.year == 2018).count(), 12);
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let bad = [HistoricalRecord { date: "2017/05/22", groundwater_cm: 1.0 }];
        let result = Dataset::from_records(&bad, RECENT_SERIES);
        assert!(matches!(result, Err(DataError::InvalidDate { table: "historical", .. })));
    }

    #[test]
    fn test_mismatched_tag_is_rejected() {
        let bad = [RecentRecord {
            date: "2018-01-15",
            soil_moisture_kg_m2: 240.0,
            year: 2018,
            month: 2,
        }];
        let result = Dataset::from_records(HISTORICAL_SERIES, &bad);
        assert!(matches!(result, Err(DataError::TagMismatch { month: 2, .. })));
    }

    #[test]
    fn test_empty_tables_are_rejected() {
        assert_eq!(
            Dataset::from_records(&[], RECENT_SERIES),
            Err(DataError::EmptyTable("historical"))
        );
        assert_eq!(
            Dataset::from_records(HISTORICAL_SERIES, &[]),
            Err(DataError::EmptyTable("recent"))
        );
    }
}
