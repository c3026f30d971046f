use serde::{Deserialize, Serialize};

use crate::models::recommendation::{deserialize_rounded_amount, BudgetBreakdown};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Itinerary {
    pub daily_activities: Vec<DayPlan>,
    pub budget_breakdown: TripBudget,
    pub recommended_restaurants: Vec<Restaurant>,
    pub accommodation_suggestions: Vec<AccommodationSuggestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPlan {
    pub day: u32,
    pub date: Option<String>,
    pub activities: Vec<PlannedActivity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannedActivity {
    pub time: String,
    pub activity: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_rounded_amount")]
    pub cost: u32,
    pub duration: String,
}

/// Whole-trip spend: the four categories plus their total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripBudget {
    #[serde(flatten)]
    pub categories: BudgetBreakdown,
    #[serde(default, deserialize_with = "deserialize_rounded_amount")]
    pub total: u32,
}

impl TripBudget {
    pub fn from_total(total: u32) -> Self {
        Self {
            categories: BudgetBreakdown::from_total(total),
            total,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub price_range: String,
    pub specialty: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccommodationSuggestion {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "deserialize_rounded_amount")]
    pub price_per_night: u32,
    pub rating: f32,
    pub location: String,
}
