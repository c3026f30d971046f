use serde::{Deserialize, Deserializer, Serialize};

use crate::models::country::{convert_amount, DEFAULT_BEST_TIME};

// Fixed split used whenever a breakdown is synthesized from a daily total
const ACCOMMODATION_SHARE: u64 = 40;
const FOOD_SHARE: u64 = 30;
const ACTIVITIES_SHARE: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSource {
    Ai,
    Fallback,
}

/// Per-day spend split into the four fixed categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    #[serde(default, deserialize_with = "deserialize_rounded_amount")]
    pub accommodation: u32,
    #[serde(default, deserialize_with = "deserialize_rounded_amount")]
    pub food: u32,
    #[serde(default, deserialize_with = "deserialize_rounded_amount")]
    pub activities: u32,
    #[serde(default, deserialize_with = "deserialize_rounded_amount")]
    pub transport: u32,
}

impl BudgetBreakdown {
    /// Splits a total 40/30/20/10; transport takes the rounding remainder so the parts sum exactly.
    pub fn from_total(total: u32) -> Self {
        let share = |percent: u64| (total as u64 * percent / 100) as u32;
        let accommodation = share(ACCOMMODATION_SHARE);
        let food = share(FOOD_SHARE);
        let activities = share(ACTIVITIES_SHARE);
        Self {
            accommodation,
            food,
            activities,
            transport: total - accommodation - food - activities,
        }
    }

    pub fn total(&self) -> u64 {
        self.accommodation as u64 + self.food as u64 + self.activities as u64 + self.transport as u64
    }

    pub fn converted(&self, rate: f64) -> Self {
        Self {
            accommodation: convert_amount(self.accommodation, rate),
            food: convert_amount(self.food, rate),
            activities: convert_amount(self.activities, rate),
            transport: convert_amount(self.transport, rate),
        }
    }
}

/// One suggested destination, sourced from the AI gateway or from fallback data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationCandidate {
    pub destination: String,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default = "default_best_time", alias = "best_time")]
    pub best_time_to_visit: String,
    #[serde(rename = "estimated_budget", alias = "budget_breakdown", default)]
    pub budget_breakdown: BudgetBreakdown,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl RecommendationCandidate {
    pub fn converted(&self, rate: f64) -> Self {
        Self {
            budget_breakdown: self.budget_breakdown.converted(rate),
            ..self.clone()
        }
    }
}

fn default_best_time() -> String {
    DEFAULT_BEST_TIME.to_string()
}

// Model output mixes integers, floats and the occasional string; anything unusable becomes 0
pub(crate) fn deserialize_rounded_amount<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value: serde_json::Value = serde_json::Value::deserialize(deserializer)?;
    let amount = match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s
            .trim()
            .trim_start_matches('$')
            .replace(',', "")
            .parse::<f64>()
            .unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(amount.round().clamp(0.0, u32::MAX as f64) as u32)
}
