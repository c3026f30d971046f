use log::debug;
use serde::Serialize;
use std::sync::Arc;

use crate::errors::BudgetError;
use crate::models::country::{convert_amount, midpoint, BudgetTier, CountryProfile};
use crate::services::country_catalog::CountryCatalog;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedBudget {
    pub country: String,
    pub tier: BudgetTier,
    pub min: u32,
    pub max: u32,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    pub description: String,
}

impl ResolvedBudget {
    pub fn midpoint(&self) -> u32 {
        midpoint(self.min, self.max)
    }
}

/// Turns a (country, tier) pair into a daily spend range in the country's currency.
#[derive(Clone)]
pub struct BudgetResolver {
    catalog: Arc<CountryCatalog>,
}

impl BudgetResolver {
    pub fn new(catalog: Arc<CountryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn resolve_budget(&self, country: &str, tier: BudgetTier) -> ResolvedBudget {
        let profile = self.catalog.get_country_profile_or_default(country);
        self.resolve_for_profile(&profile, tier)
    }

    /// Explicit profile tiers win; otherwise the base table scaled by the currency factor.
    pub fn resolve_for_profile(&self, profile: &CountryProfile, tier: BudgetTier) -> ResolvedBudget {
        let (min, max, description) = match profile.budget_range(tier) {
            Some(range) => (range.min, range.max, range.description.clone()),
            None => {
                let factor = self.catalog.currency_factor(&profile.currency);
                let (min, max, description) = base_range(tier);
                debug!(
                    "No {} tier for {}, scaling base range by {} ({})",
                    tier, profile.name, factor, profile.currency
                );
                (
                    convert_amount(min, factor),
                    convert_amount(max, factor),
                    description.to_string(),
                )
            }
        };

        ResolvedBudget {
            country: profile.name.clone(),
            tier,
            min,
            max,
            currency: profile.currency.clone(),
            currency_symbol: profile.currency_symbol.clone(),
            description,
        }
    }

    /// String entry point for menu values; unknown tier names are a caller error.
    pub fn suggest_daily_budget(
        &self,
        country: &str,
        tier_name: &str,
    ) -> Result<ResolvedBudget, BudgetError> {
        let tier = tier_name.parse::<BudgetTier>()?;
        Ok(self.resolve_budget(country, tier))
    }

    /// All four tiers in spend order.
    pub fn budget_table(&self, country: &str) -> Vec<ResolvedBudget> {
        let profile = self.catalog.get_country_profile_or_default(country);
        BudgetTier::ALL
            .into_iter()
            .map(|tier| self.resolve_for_profile(&profile, tier))
            .collect()
    }
}

/// Generic daily ranges in the catalog's base currency, used for profiles without explicit tiers.
/// The numbers are a product placeholder rather than researched data.
fn base_range(tier: BudgetTier) -> (u32, u32, &'static str) {
    match tier {
        BudgetTier::Budget => (30, 60, "Budget traveler - hostels, street food, public transport"),
        BudgetTier::MidRange => (60, 150, "Mid-range - comfortable hotels, local restaurants, some tours"),
        BudgetTier::Luxury => (150, 400, "Luxury - upscale hotels, fine dining, private transport"),
        BudgetTier::UltraLuxury => (400, 1000, "Ultra luxury - premium everything, exclusive experiences"),
    }
}
