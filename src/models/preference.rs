use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::country::BudgetTier;

const DEFAULT_TRIP_DAYS: u32 = 5;

/// What a traveler told us on the planning form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPreference {
    pub destination_country: String,
    #[serde(default)]
    pub budget_type: BudgetTier,
    /// Daily budget per person, in the destination currency.
    pub budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_group_size")]
    pub group_size: u32,
    #[serde(default)]
    pub interests: Vec<String>,
    pub accommodation_type: Option<String>,
    pub transport_preference: Option<String>,
}

impl TravelPreference {
    pub fn new(destination_country: &str) -> Self {
        Self {
            destination_country: destination_country.to_string(),
            budget_type: BudgetTier::default(),
            budget: None,
            start_date: None,
            end_date: None,
            group_size: default_group_size(),
            interests: Vec::new(),
            accommodation_type: None,
            transport_preference: None,
        }
    }

    /// Trip length in days; at least one, five when dates are missing.
    pub fn trip_days(&self) -> u32 {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => (end - start).num_days().max(1) as u32,
            _ => DEFAULT_TRIP_DAYS,
        }
    }

    pub fn interests_label(&self, empty: &str) -> String {
        if self.interests.is_empty() {
            empty.to_string()
        } else {
            self.interests.join(", ")
        }
    }
}

fn default_group_size() -> u32 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_days() {
        let mut preference = TravelPreference::new("Japan");
        assert_eq!(preference.trip_days(), 5);

        preference.start_date = NaiveDate::from_ymd_opt(2025, 8, 1);
        preference.end_date = NaiveDate::from_ymd_opt(2025, 8, 8);
        assert_eq!(preference.trip_days(), 7);

        preference.end_date = NaiveDate::from_ymd_opt(2025, 7, 30);
        assert_eq!(preference.trip_days(), 1);
    }

    #[test]
    fn test_deserialize_minimal_form() {
        let preference: TravelPreference =
            serde_json::from_str(r#"{"destination_country": "Italy"}"#).unwrap();
        assert_eq!(preference.budget_type, BudgetTier::MidRange);
        assert_eq!(preference.group_size, 2);
        assert!(preference.interests.is_empty());
        assert_eq!(preference.interests_label("general tourism"), "general tourism");
    }

    #[test]
    fn test_unknown_tier_is_rejected() {
        let result: Result<TravelPreference, _> =
            serde_json::from_str(r#"{"destination_country": "Italy", "budget_type": "premium"}"#);
        assert!(result.is_err());
    }
}
