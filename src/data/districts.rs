//! District registry for the groundwater map.
//!
//! Only national-level satellite data exists, so per-district values are
//! representative estimates derived from known regional water-stress
//! patterns (urban/agricultural load, coastal vs. arid, mountain recharge).
//! This is the single source of truth for the map layer; handlers should
//! read districts from here rather than hardcoding names.

use crate::analysis::classify::DistrictStatus;

// ---------------------------------------------------------------------------
// District metadata
// ---------------------------------------------------------------------------

/// A monitored district and its estimated groundwater change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct District {
    pub name: &'static str,
    pub province: &'static str,
    /// Estimated current anomaly relative to normal, in cm.
    /// National average is about -7.6 cm.
    pub groundwater_change_cm: f64,
}

impl District {
    pub fn status(&self) -> DistrictStatus {
        DistrictStatus::classify(self.groundwater_change_cm)
    }
}

const fn district(province: &'static str, name: &'static str, change: f64) -> District {
    District {
        name,
        province,
        groundwater_change_cm: change,
    }
}

/// Provinces in display order.
pub static PROVINCES: &[&str] = &["Punjab", "Sindh", "Khyber Pakhtunkhwa", "Balochistan"];

/// All districts, grouped by province in `PROVINCES` order.
pub static DISTRICT_REGISTRY: &[District] = &[
    // Punjab: heavy urban and agricultural extraction
    district("Punjab", "Lahore", -12.5),
    district("Punjab", "Faisalabad", -10.8),
    district("Punjab", "Multan", -9.2),
    district("Punjab", "Rawalpindi", -6.5),
    district("Punjab", "Gujranwala", -11.3),
    district("Punjab", "Sialkot", -9.8),
    district("Punjab", "Sargodha", -10.9),
    district("Punjab", "Bahawalpur", -8.1),
    district("Punjab", "Sheikhupura", -10.2),
    district("Punjab", "Jhang", -7.4),
    // Sindh
    district("Sindh", "Karachi", -4.3), // coastal, less agriculture
    district("Sindh", "Hyderabad", -6.5),
    district("Sindh", "Sukkur", -7.8),
    district("Sindh", "Larkana", -8.4),
    district("Sindh", "Mirpur Khas", -7.1),
    district("Sindh", "Nawabshah", -8.0),
    district("Sindh", "Jacobabad", -9.3), // hot, dry
    district("Sindh", "Shikarpur", -8.9),
    // Khyber Pakhtunkhwa
    district("Khyber Pakhtunkhwa", "Peshawar", -5.3),
    district("Khyber Pakhtunkhwa", "Mardan", -4.8),
    district("Khyber Pakhtunkhwa", "Mingora", -1.2), // mountain recharge
    district("Khyber Pakhtunkhwa", "Abbottabad", -2.1),
    district("Khyber Pakhtunkhwa", "Mansehra", -2.8),
    district("Khyber Pakhtunkhwa", "Kohat", -6.0),
    district("Khyber Pakhtunkhwa", "Dera Ismail Khan", -7.1),
    // Balochistan
    district("Balochistan", "Quetta", -15.3),
    district("Balochistan", "Gwadar", -3.5), // coastal
    district("Balochistan", "Turbat", -6.1),
    district("Balochistan", "Khuzdar", -10.0),
    district("Balochistan", "Chaman", -13.0),
    district("Balochistan", "Zhob", -8.6),
    district("Balochistan", "Sibi", -11.4),
];

/// Looks up a district by name. Returns `None` if not found.
pub fn find_district(name: &str) -> Option<&'static District> {
    DISTRICT_REGISTRY.iter().find(|d| d.name == name)
}

/// The district with the most negative change. `None` only if the registry
/// is empty.
pub fn most_depleted() -> Option<&'static District> {
    DISTRICT_REGISTRY
        .iter()
        .min_by(|a, b| a.groundwater_change_cm.total_cmp(&b.groundwater_change_cm))
}

/// All estimated changes in registry order.
pub fn all_changes() -> Vec<f64> {
    DISTRICT_REGISTRY.iter().map(|d| d.groundwater_change_cm).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_32_districts() {
        assert_eq!(DISTRICT_REGISTRY.len(), 32);
    }

    #[test]
    fn test_no_duplicate_district_names() {
        let mut seen = std::collections::HashSet::new();
        for d in DISTRICT_REGISTRY {
            assert!(seen.insert(d.name), "duplicate district '{}' in DISTRICT_REGISTRY", d.name);
        }
    }

    #[test]
    fn test_every_district_belongs_to_a_known_province() {
        for d in DISTRICT_REGISTRY {
            assert!(
                PROVINCES.contains(&d.province),
                "district '{}' has unknown province '{}'",
                d.name,
                d.province
            );
        }
    }

    #[test]
    fn test_districts_are_grouped_in_province_order() {
        // The map legend relies on provinces appearing as contiguous runs in
        // PROVINCES order.
        let mut last_index = 0;
        for d in DISTRICT_REGISTRY {
            let index = PROVINCES.iter().position(|p| *p == d.province).unwrap();
            assert!(index >= last_index, "'{}' breaks province grouping", d.name);
            last_index = index;
        }
    }

    #[test]
    fn test_quetta_is_most_depleted() {
        let worst = most_depleted().expect("registry should not be empty");
        assert_eq!(worst.name, "Quetta");
        assert_eq!(worst.status(), DistrictStatus::Critical);
    }

    #[test]
    fn test_find_district() {
        let lahore = find_district("Lahore").expect("Lahore should be in registry");
        assert_eq!(lahore.province, "Punjab");
        assert_eq!(lahore.groundwater_change_cm, -12.5);
        assert!(find_district("Atlantis").is_none());
    }

    #[test]
    fn test_status_counts() {
        let critical = DISTRICT_REGISTRY
            .iter()
            .filter(|d| d.status() == DistrictStatus::Critical)
            .count();
        let improving = DISTRICT_REGISTRY
            .iter()
            .filter(|d| d.status() == DistrictStatus::Improving)
            .count();
        // Lahore, Faisalabad, Gujranwala, Sargodha, Sheikhupura, Quetta, Chaman, Sibi
        assert_eq!(critical, 8);
        assert_eq!(improving, 0);
    }
}
