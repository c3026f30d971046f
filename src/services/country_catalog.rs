//! Country Catalog
//!
//! Read-only lookup of country profiles loaded once at startup from a JSON
//! document. The embedded `data/countries.json` is the default source; a file
//! path can replace it for deployments or tests.
//!
//! Amounts in a catalog entry are either already in the local currency
//! (`budget_ranges`) or in the catalog's base currency (`base_budget_ranges`),
//! in which case the entry's `exchange_rate` converts them once here, at load,
//! together with the entry's hand-authored recommendations.

use log::{debug, info};
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::errors::CatalogError;
use crate::models::country::{BudgetRange, BudgetTier, CountryProfile, DEFAULT_BEST_TIME};
use crate::models::recommendation::RecommendationCandidate;

const EMBEDDED_CATALOG: &str = include_str!("../../data/countries.json");
const DEFAULT_BASE_CURRENCY: &str = "USD";
const DEFAULT_CURRENCY_FACTOR: f64 = 1.0;
const PLACEHOLDER_DESTINATIONS: [&str; 3] = ["Capital City", "Major City", "Coastal City"];

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default = "default_base_currency")]
    base_currency: String,
    #[serde(default)]
    currency_factors: HashMap<String, f64>,
    countries: Vec<CountryEntry>,
}

#[derive(Debug, Deserialize)]
struct CountryEntry {
    name: String,
    currency: String,
    currency_symbol: Option<String>,
    exchange_rate: Option<f64>,
    #[serde(default)]
    budget_ranges: BTreeMap<BudgetTier, BudgetRange>,
    #[serde(default)]
    base_budget_ranges: BTreeMap<BudgetTier, BudgetRange>,
    #[serde(default)]
    popular_destinations: Vec<String>,
    #[serde(default = "default_best_time")]
    best_time: String,
    #[serde(default)]
    visa_info: String,
    #[serde(default)]
    language: String,
    #[serde(default)]
    time_zones: Vec<String>,
    #[serde(default)]
    cultural_notes: String,
    #[serde(default)]
    recommendations: Vec<RecommendationCandidate>,
}

fn default_base_currency() -> String {
    DEFAULT_BASE_CURRENCY.to_string()
}

fn default_best_time() -> String {
    DEFAULT_BEST_TIME.to_string()
}

#[derive(Debug, Clone)]
pub struct CountryCatalog {
    base_currency: String,
    currency_factors: HashMap<String, f64>,
    profiles: Vec<CountryProfile>,
    index: HashMap<String, usize>,
    recommendations: Vec<Vec<RecommendationCandidate>>,
}

impl CountryCatalog {
    /// Catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        info!("Loading country catalog from {}", path.display());
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        Self::from_document(document)
    }

    fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        if document.base_currency.trim().is_empty() {
            return Err(CatalogError::InvalidCatalog("base currency is empty".to_string()));
        }
        for (currency, factor) in &document.currency_factors {
            if !factor.is_finite() || *factor <= 0.0 {
                return Err(CatalogError::InvalidCatalog(format!(
                    "currency factor for {} must be positive, got {}",
                    currency, factor
                )));
            }
        }

        let mut profiles = Vec::with_capacity(document.countries.len());
        let mut recommendations = Vec::with_capacity(document.countries.len());
        let mut index = HashMap::new();

        for entry in document.countries {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::InvalidCatalog("country with empty name".to_string()));
            }
            if entry.currency.trim().is_empty() {
                return Err(CatalogError::InvalidCatalog(format!(
                    "{} has no currency code",
                    entry.name
                )));
            }
            if index.contains_key(&entry.name) {
                return Err(CatalogError::InvalidCatalog(format!(
                    "duplicate country {}",
                    entry.name
                )));
            }

            let (profile, candidates) = normalize_entry(entry)?;
            validate_tiers(&profile)?;
            debug!(
                "Catalog entry {} ({}, {} tiers, {} fallback recommendations)",
                profile.name,
                profile.currency,
                profile.budget_ranges.len(),
                candidates.len()
            );

            index.insert(profile.name.clone(), profiles.len());
            profiles.push(profile);
            recommendations.push(candidates);
        }

        info!("Country catalog ready with {} countries", profiles.len());

        Ok(Self {
            base_currency: document.base_currency,
            currency_factors: document.currency_factors,
            profiles,
            index,
            recommendations,
        })
    }

    /// Exact-match lookup.
    pub fn get_country_profile(&self, name: &str) -> Result<&CountryProfile, CatalogError> {
        self.index
            .get(name)
            .map(|&i| &self.profiles[i])
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Lookup that substitutes the generic profile for unknown countries.
    pub fn get_country_profile_or_default(&self, name: &str) -> Cow<'_, CountryProfile> {
        match self.get_country_profile(name) {
            Ok(profile) => Cow::Borrowed(profile),
            Err(_) => Cow::Owned(CountryProfile::generic(name, &self.base_currency)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Names in catalog definition order.
    pub fn list_supported_countries(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    /// Never empty: unknown countries, and countries without a list, get placeholders.
    pub fn get_popular_destinations(&self, name: &str) -> Vec<String> {
        match self.get_country_profile(name) {
            Ok(profile) if !profile.popular_destinations.is_empty() => {
                profile.popular_destinations.clone()
            }
            _ => PLACEHOLDER_DESTINATIONS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Hand-authored fallback candidates in definition order; empty when none exist.
    pub fn hand_authored_recommendations(&self, name: &str) -> &[RecommendationCandidate] {
        self.index
            .get(name)
            .map(|&i| self.recommendations[i].as_slice())
            .unwrap_or(&[])
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Factor from the base currency to `currency`; 1.0 when unrecognized.
    pub fn currency_factor(&self, currency: &str) -> f64 {
        self.currency_factors
            .get(currency)
            .copied()
            .unwrap_or(DEFAULT_CURRENCY_FACTOR)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn normalize_entry(
    entry: CountryEntry,
) -> Result<(CountryProfile, Vec<RecommendationCandidate>), CatalogError> {
    let rate = match entry.exchange_rate {
        Some(rate) if !rate.is_finite() || rate <= 0.0 => {
            return Err(CatalogError::InvalidCatalog(format!(
                "{} has a non-positive exchange rate {}",
                entry.name, rate
            )));
        }
        other => other,
    };

    let budget_ranges = match (entry.budget_ranges.is_empty(), entry.base_budget_ranges.is_empty()) {
        (_, true) => entry.budget_ranges,
        (true, false) => {
            let rate = rate.ok_or_else(|| {
                CatalogError::InvalidCatalog(format!(
                    "{} has base-currency budget ranges but no exchange rate",
                    entry.name
                ))
            })?;
            entry
                .base_budget_ranges
                .iter()
                .map(|(tier, range)| (*tier, range.converted(rate)))
                .collect()
        }
        (false, false) => {
            return Err(CatalogError::InvalidCatalog(format!(
                "{} defines both local and base-currency budget ranges",
                entry.name
            )));
        }
    };

    let recommendations = match rate {
        Some(rate) => entry
            .recommendations
            .iter()
            .map(|candidate| candidate.converted(rate))
            .collect(),
        None => entry.recommendations,
    };

    let profile = CountryProfile {
        name: entry.name,
        currency: entry.currency,
        currency_symbol: entry.currency_symbol,
        exchange_rate: rate,
        budget_ranges,
        popular_destinations: entry.popular_destinations,
        best_time: entry.best_time,
        visa_info: entry.visa_info,
        language: entry.language,
        time_zones: entry.time_zones,
        cultural_notes: entry.cultural_notes,
    };

    Ok((profile, recommendations))
}

// Explicit tier tables must be complete, with min <= max and minimums non-decreasing by tier
fn validate_tiers(profile: &CountryProfile) -> Result<(), CatalogError> {
    if !profile.has_explicit_tiers() {
        return Ok(());
    }

    let mut previous_min = 0;
    for tier in BudgetTier::ALL {
        let range = profile.budget_range(tier).ok_or_else(|| {
            CatalogError::InvalidCatalog(format!("{} is missing the {} tier", profile.name, tier))
        })?;
        if range.min > range.max {
            return Err(CatalogError::InvalidCatalog(format!(
                "{} {} tier has min {} above max {}",
                profile.name, tier, range.min, range.max
            )));
        }
        if range.min < previous_min {
            return Err(CatalogError::InvalidCatalog(format!(
                "{} {} tier minimum {} is below the previous tier's {}",
                profile.name, tier, range.min, previous_min
            )));
        }
        previous_min = range.min;
    }

    Ok(())
}
