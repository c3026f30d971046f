//! Fallback Recommendation Selector
//!
//! Static-data answers for when the AI gateway is missing or misbehaves.
//! Everything here is deterministic and infallible: identical input always
//! yields identical output, and every call returns something displayable.

use chrono::Duration;
use log::debug;
use std::sync::Arc;

use crate::models::country::{BudgetTier, DEFAULT_BEST_TIME};
use crate::models::itinerary::{
    AccommodationSuggestion, DayPlan, Itinerary, PlannedActivity, Restaurant, TripBudget,
};
use crate::models::preference::TravelPreference;
use crate::models::recommendation::{BudgetBreakdown, RecommendationCandidate};
use crate::services::budget_service::BudgetResolver;
use crate::services::country_catalog::CountryCatalog;

pub const MAX_FALLBACK_RECOMMENDATIONS: usize = 3;

const GENERIC_HIGHLIGHTS: [&str; 5] = [
    "Main attractions",
    "Local markets",
    "Cultural sites",
    "Historical landmarks",
    "Local cuisine",
];

#[derive(Clone)]
pub struct FallbackSelector {
    catalog: Arc<CountryCatalog>,
    resolver: BudgetResolver,
}

impl FallbackSelector {
    pub fn new(catalog: Arc<CountryCatalog>) -> Self {
        let resolver = BudgetResolver::new(catalog.clone());
        Self { catalog, resolver }
    }

    /// One to three candidates for `country`, hand-authored ones first.
    ///
    /// Tier and interests do not change the fallback; they are accepted so the
    /// call mirrors the AI path.
    pub fn recommendations(
        &self,
        country: &str,
        tier: BudgetTier,
        interests: &[String],
    ) -> Vec<RecommendationCandidate> {
        debug!(
            "Fallback recommendations for {} (tier {}, interests {:?})",
            country, tier, interests
        );

        let authored = self.catalog.hand_authored_recommendations(country);
        if !authored.is_empty() {
            return authored
                .iter()
                .take(MAX_FALLBACK_RECOMMENDATIONS)
                .cloned()
                .collect();
        }

        vec![self.generic_candidate(country)]
    }

    fn generic_candidate(&self, country: &str) -> RecommendationCandidate {
        // The catalog's own list only; placeholder names would read oddly as a destination
        let destination = self
            .catalog
            .get_country_profile(country)
            .ok()
            .and_then(|profile| profile.popular_destinations.first().cloned())
            .unwrap_or_else(|| format!("Capital of {}", country));

        let daily = self.resolver.resolve_budget(country, BudgetTier::MidRange).midpoint();

        RecommendationCandidate {
            destination,
            reasons: vec![
                format!("Experience the authentic culture of {}", country),
                format!("Discover the history and heritage of {}", country),
                format!("Taste the local cuisine of {}", country),
                format!("Explore the diverse landscapes of {}", country),
            ],
            best_time_to_visit: DEFAULT_BEST_TIME.to_string(),
            budget_breakdown: BudgetBreakdown::from_total(daily),
            highlights: GENERIC_HIGHLIGHTS.iter().map(|h| h.to_string()).collect(),
        }
    }

    /// Two-day starter plan with a trip budget sized from the traveler's daily budget.
    pub fn itinerary(&self, destination: &str, preferences: &TravelPreference) -> Itinerary {
        let daily = self.daily_budget(preferences);
        let trip_days = preferences.trip_days();
        let trip_total = (daily as u64 * trip_days as u64).min(u32::MAX as u64) as u32;

        // Dates past chrono's calendar range are left blank
        let date_for = |offset: i64| {
            preferences
                .start_date
                .and_then(|start| start.checked_add_signed(Duration::days(offset)))
                .map(|date| date.to_string())
        };

        let first_day = vec![
            planned("9:00 AM", &format!("Arrival in {}", destination), "Check-in to accommodation and get oriented", 0, "2 hours"),
            planned("11:00 AM", "City Walking Tour", "Explore the main historic areas and get your bearings", 25, "3 hours"),
            planned("2:00 PM", "Local Lunch", "Try traditional local cuisine", 35, "1.5 hours"),
            planned("4:00 PM", "Main Attraction Visit", &format!("Visit the most famous landmark in {}", destination), 20, "2 hours"),
        ];
        let second_day = vec![
            planned("9:00 AM", "Museum Visit", "Explore local art and history", 15, "3 hours"),
            planned("1:00 PM", "Local Market Tour", "Experience local culture and food", 30, "2 hours"),
            planned("4:00 PM", "Neighborhood Exploration", "Discover hidden gems and local life", 10, "3 hours"),
        ];

        let daily_activities = vec![
            DayPlan {
                day: 1,
                date: date_for(0),
                activities: first_day,
            },
            DayPlan {
                day: 2,
                date: date_for(1),
                activities: second_day,
            },
        ];

        Itinerary {
            daily_activities,
            budget_breakdown: TripBudget::from_total(trip_total),
            recommended_restaurants: vec![
                Restaurant {
                    name: format!("Local Bistro {}", destination),
                    cuisine: "Local".to_string(),
                    price_range: "$$".to_string(),
                    specialty: "Traditional dishes".to_string(),
                },
                Restaurant {
                    name: format!("{} Market Cafe", destination),
                    cuisine: "Casual".to_string(),
                    price_range: "$".to_string(),
                    specialty: "Fresh local ingredients".to_string(),
                },
            ],
            accommodation_suggestions: vec![AccommodationSuggestion {
                name: format!("{} Central Hotel", destination),
                kind: "hotel".to_string(),
                price_per_night: BudgetBreakdown::from_total(daily).accommodation,
                rating: 4.2,
                location: "City Center".to_string(),
            }],
        }
    }

    pub fn tips(&self, destination: &str) -> Vec<String> {
        vec![
            format!("Research local customs and etiquette before visiting {}", destination),
            "Always carry some local currency for small purchases and tips".to_string(),
            "Download offline maps and translation apps before traveling".to_string(),
            "Book popular attractions in advance to avoid long queues".to_string(),
            "Try local specialties but be cautious with street food if you have a sensitive stomach".to_string(),
            "Keep copies of important documents in separate locations".to_string(),
            "Learn a few basic phrases in the local language - locals appreciate the effort".to_string(),
        ]
    }

    // Stated budget first, otherwise the midpoint of the chosen tier for the country
    fn daily_budget(&self, preferences: &TravelPreference) -> u32 {
        match preferences.budget {
            Some(budget) if budget.is_finite() && budget > 0.0 => {
                budget.round().min(u32::MAX as f64) as u32
            }
            _ => self
                .resolver
                .resolve_budget(&preferences.destination_country, preferences.budget_type)
                .midpoint(),
        }
    }
}

fn planned(time: &str, activity: &str, description: &str, cost: u32, duration: &str) -> PlannedActivity {
    PlannedActivity {
        time: time.to_string(),
        activity: activity.to_string(),
        description: description.to_string(),
        cost,
        duration: duration.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn selector() -> FallbackSelector {
        let catalog = CountryCatalog::embedded().expect("embedded catalog should load");
        FallbackSelector::new(Arc::new(catalog))
    }

    #[test]
    fn test_hand_authored_candidates_in_catalog_order() {
        let candidates = selector().recommendations("Italy", BudgetTier::Luxury, &[]);
        let names: Vec<&str> = candidates.iter().map(|c| c.destination.as_str()).collect();
        assert_eq!(names, vec!["Rome", "Florence", "Venice"]);
    }

    #[test]
    fn test_known_country_without_authored_entries_uses_first_destination() {
        let candidates = selector().recommendations("Germany", BudgetTier::MidRange, &[]);
        assert_eq!(candidates.len(), 1);
        let candidate = &candidates[0];
        assert_eq!(candidate.destination, "Berlin");
        assert_eq!(candidate.best_time_to_visit, "Year-round");
        assert_eq!(candidate.reasons.len(), 4);
        assert!(candidate.reasons.iter().all(|r| r.contains("Germany")));
        assert_eq!(candidate.highlights.len(), 5);
        // Germany mid_range 80-180, midpoint 130
        assert_eq!(candidate.budget_breakdown.total(), 130);
        assert_eq!(candidate.budget_breakdown.accommodation, 52);
    }

    #[test]
    fn test_unknown_country_gets_capital_placeholder() {
        let candidates = selector().recommendations("Narnia", BudgetTier::Budget, &["magic".to_string()]);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].destination, "Capital of Narnia");
        assert_eq!(candidates[0].highlights[0], "Main attractions");
        // base mid_range 60-150 in USD, midpoint 105
        assert_eq!(candidates[0].budget_breakdown.total(), 105);
    }

    #[test]
    fn test_known_country_with_empty_destination_list() {
        let candidates = selector().recommendations("Portugal", BudgetTier::MidRange, &[]);
        assert_eq!(candidates[0].destination, "Capital of Portugal");
    }

    #[test]
    fn test_recommendations_never_empty_and_deterministic() {
        let selector = selector();
        let interests = vec!["food".to_string(), "culture".to_string()];
        for country in ["France", "Japan", "Thailand", "Argentina", "Wakanda", ""] {
            let first = selector.recommendations(country, BudgetTier::MidRange, &interests);
            let second = selector.recommendations(country, BudgetTier::MidRange, &interests);
            assert!(!first.is_empty());
            assert!(first.len() <= MAX_FALLBACK_RECOMMENDATIONS);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }

    #[test]
    fn test_authored_amounts_in_local_currency() {
        let thailand = selector().recommendations("Thailand", BudgetTier::Budget, &[]);
        assert_eq!(thailand[0].destination, "Bangkok");
        assert_eq!(thailand[0].budget_breakdown.accommodation, 1400);

        let japan = selector().recommendations("Japan", BudgetTier::Budget, &[]);
        assert_eq!(japan[0].budget_breakdown.accommodation, 9000);
    }

    #[test]
    fn test_fallback_itinerary_budget_and_dates() {
        let mut preferences = TravelPreference::new("France");
        preferences.budget = Some(150.0);
        preferences.start_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        preferences.end_date = NaiveDate::from_ymd_opt(2025, 6, 6);

        let itinerary = selector().itinerary("Paris", &preferences);
        assert_eq!(itinerary.daily_activities.len(), 2);
        assert_eq!(itinerary.daily_activities[0].date.as_deref(), Some("2025-06-01"));
        assert_eq!(itinerary.daily_activities[1].date.as_deref(), Some("2025-06-02"));
        assert_eq!(itinerary.daily_activities[0].activities[0].activity, "Arrival in Paris");

        let budget = &itinerary.budget_breakdown;
        assert_eq!(budget.total, 750);
        assert_eq!(budget.categories.accommodation, 300);
        assert_eq!(budget.categories.food, 225);
        assert_eq!(budget.categories.activities, 150);
        assert_eq!(budget.categories.transport, 75);

        assert_eq!(itinerary.accommodation_suggestions[0].price_per_night, 60);
        assert_eq!(itinerary.recommended_restaurants.len(), 2);
    }

    #[test]
    fn test_fallback_itinerary_without_budget_uses_tier_midpoint() {
        let mut preferences = TravelPreference::new("Japan");
        preferences.budget_type = BudgetTier::MidRange;

        let itinerary = selector().itinerary("Tokyo", &preferences);
        // midpoint 18500 over the default five days
        assert_eq!(itinerary.budget_breakdown.total, 92500);
        assert!(itinerary.daily_activities[0].date.is_none());
    }

    #[test]
    fn test_one_day_trip_still_gets_two_day_plan() {
        let mut preferences = TravelPreference::new("Spain");
        preferences.budget = Some(100.0);
        preferences.start_date = NaiveDate::from_ymd_opt(2025, 3, 1);
        preferences.end_date = NaiveDate::from_ymd_opt(2025, 3, 2);

        let itinerary = selector().itinerary("Seville", &preferences);
        assert_eq!(itinerary.daily_activities.len(), 2);
        assert_eq!(itinerary.daily_activities[1].day, 2);
        assert_eq!(itinerary.daily_activities[1].date.as_deref(), Some("2025-03-02"));
        assert_eq!(itinerary.budget_breakdown.total, 100);
    }

    #[test]
    fn test_last_calendar_day_leaves_day_two_undated() {
        let raw = format!(r#"{{"destination_country": "France", "start_date": "{}"}}"#, NaiveDate::MAX);
        let preferences: TravelPreference = serde_json::from_str(&raw).unwrap();
        assert_eq!(preferences.start_date, Some(NaiveDate::MAX));

        let itinerary = selector().itinerary("Paris", &preferences);
        assert_eq!(itinerary.daily_activities.len(), 2);
        assert_eq!(itinerary.daily_activities[0].date, Some(NaiveDate::MAX.to_string()));
        assert!(itinerary.daily_activities[1].date.is_none());
    }

    #[test]
    fn test_tips() {
        let tips = selector().tips("Kyoto");
        assert_eq!(tips.len(), 7);
        assert!(tips[0].contains("Kyoto"));
    }
}
