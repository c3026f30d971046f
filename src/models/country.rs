use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::BudgetError;

pub const DEFAULT_LANGUAGE: &str = "Local language";
pub const DEFAULT_BEST_TIME: &str = "Year-round";

/// Traveler spending categories, ordered by increasing daily spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Budget,
    #[default]
    MidRange,
    Luxury,
    UltraLuxury,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 4] = [
        BudgetTier::Budget,
        BudgetTier::MidRange,
        BudgetTier::Luxury,
        BudgetTier::UltraLuxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::MidRange => "mid_range",
            BudgetTier::Luxury => "luxury",
            BudgetTier::UltraLuxury => "ultra_luxury",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetTier {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BudgetTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| BudgetError::InvalidTier(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
    #[serde(default)]
    pub description: String,
}

impl BudgetRange {
    pub fn midpoint(&self) -> u32 {
        midpoint(self.min, self.max)
    }

    pub fn converted(&self, rate: f64) -> Self {
        Self {
            min: convert_amount(self.min, rate),
            max: convert_amount(self.max, rate),
            description: self.description.clone(),
        }
    }
}

/// Midpoint of a daily range, rounded half up.
pub fn midpoint(min: u32, max: u32) -> u32 {
    ((min as u64 + max as u64 + 1) / 2) as u32
}

/// Converts an amount with a positive rate, rounding to whole currency units.
pub fn convert_amount(amount: u32, rate: f64) -> u32 {
    (amount as f64 * rate).round().clamp(0.0, u32::MAX as f64) as u32
}

/// Travel-relevant metadata for one destination country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryProfile {
    pub name: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<f64>,
    pub budget_ranges: BTreeMap<BudgetTier, BudgetRange>,
    pub popular_destinations: Vec<String>,
    pub best_time: String,
    pub visa_info: String,
    pub language: String,
    pub time_zones: Vec<String>,
    pub cultural_notes: String,
}

impl CountryProfile {
    /// The profile substituted for countries missing from the catalog.
    pub fn generic(name: &str, currency: &str) -> Self {
        Self {
            name: name.to_string(),
            currency: currency.to_string(),
            currency_symbol: None,
            exchange_rate: None,
            budget_ranges: BTreeMap::new(),
            popular_destinations: Vec::new(),
            best_time: DEFAULT_BEST_TIME.to_string(),
            visa_info: "Check visa requirements with the destination's embassy".to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            time_zones: Vec::new(),
            cultural_notes: "Respect local customs and traditions.".to_string(),
        }
    }

    pub fn budget_range(&self, tier: BudgetTier) -> Option<&BudgetRange> {
        self.budget_ranges.get(&tier)
    }

    pub fn has_explicit_tiers(&self) -> bool {
        !self.budget_ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parsing() {
        assert_eq!("budget".parse::<BudgetTier>(), Ok(BudgetTier::Budget));
        assert_eq!("mid_range".parse::<BudgetTier>(), Ok(BudgetTier::MidRange));
        assert_eq!("ultra_luxury".parse::<BudgetTier>(), Ok(BudgetTier::UltraLuxury));
        assert_eq!(
            "Mid Range".parse::<BudgetTier>(),
            Err(BudgetError::InvalidTier("Mid Range".to_string()))
        );
    }

    #[test]
    fn test_tiers_ordered_by_spend() {
        let mut tiers = vec![BudgetTier::Luxury, BudgetTier::Budget, BudgetTier::UltraLuxury, BudgetTier::MidRange];
        tiers.sort();
        assert_eq!(tiers, BudgetTier::ALL.to_vec());
        assert_eq!(BudgetTier::default(), BudgetTier::MidRange);
    }

    #[test]
    fn test_tier_serializes_as_snake_case() {
        let json = serde_json::to_string(&BudgetTier::UltraLuxury).unwrap();
        assert_eq!(json, "\"ultra_luxury\"");
    }

    #[test]
    fn test_range_midpoint_and_conversion() {
        let range = BudgetRange { min: 25, max: 50, description: String::new() };
        assert_eq!(range.midpoint(), 38);
        assert_eq!(midpoint(u32::MAX - 1, u32::MAX), u32::MAX);

        let converted = range.converted(35.0);
        assert_eq!(converted.min, 875);
        assert_eq!(converted.max, 1750);
    }

    #[test]
    fn test_generic_profile_defaults() {
        let profile = CountryProfile::generic("Wakanda", "USD");
        assert_eq!(profile.currency, "USD");
        assert_eq!(profile.language, "Local language");
        assert_eq!(profile.best_time, "Year-round");
        assert!(!profile.has_explicit_tiers());
    }
}
