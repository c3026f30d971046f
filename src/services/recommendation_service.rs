use log::{info, warn};
use serde::Serialize;
use std::sync::Arc;

use crate::models::itinerary::Itinerary;
use crate::models::preference::TravelPreference;
use crate::models::recommendation::{RecommendationCandidate, RecommendationSource};
use crate::services::country_catalog::CountryCatalog;
use crate::services::fallback_service::FallbackSelector;
use crate::services::gemini_service::GeminiService;

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResult {
    pub source: RecommendationSource,
    pub country: String,
    pub recommendations: Vec<RecommendationCandidate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItineraryResult {
    pub source: RecommendationSource,
    pub destination: String,
    pub itinerary: Itinerary,
}

#[derive(Debug, Clone, Serialize)]
pub struct TipsResult {
    pub source: RecommendationSource,
    pub destination: String,
    pub tips: Vec<String>,
}

/// AI-first recommendations that degrade to fallback data on any gateway failure.
#[derive(Clone)]
pub struct RecommendationService {
    fallback: FallbackSelector,
    gemini: Option<GeminiService>,
}

impl RecommendationService {
    pub fn new(catalog: Arc<CountryCatalog>, gemini: Option<GeminiService>) -> Self {
        match &gemini {
            Some(service) => info!("Gemini recommendations enabled with model {}", service.model()),
            None => warn!("Gemini not configured. Using fallback recommendations."),
        }

        Self {
            fallback: FallbackSelector::new(catalog),
            gemini,
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.gemini.is_some()
    }

    pub async fn recommend(&self, preferences: &TravelPreference) -> RecommendationResult {
        let country = preferences.destination_country.clone();

        if let Some(gemini) = &self.gemini {
            match gemini.destination_recommendations(preferences).await {
                Ok(recommendations) => {
                    return RecommendationResult {
                        source: RecommendationSource::Ai,
                        country,
                        recommendations,
                    }
                }
                Err(e) => warn!("Gemini recommendations for {} failed, using fallback: {}", country, e),
            }
        }

        let recommendations = self.fallback.recommendations(
            &country,
            preferences.budget_type,
            &preferences.interests,
        );
        RecommendationResult {
            source: RecommendationSource::Fallback,
            country,
            recommendations,
        }
    }

    pub async fn itinerary(&self, preferences: &TravelPreference, destination: &str) -> ItineraryResult {
        if let Some(gemini) = &self.gemini {
            match gemini.itinerary(preferences, destination).await {
                Ok(itinerary) => {
                    return ItineraryResult {
                        source: RecommendationSource::Ai,
                        destination: destination.to_string(),
                        itinerary,
                    }
                }
                Err(e) => warn!("Gemini itinerary for {} failed, using fallback: {}", destination, e),
            }
        }

        ItineraryResult {
            source: RecommendationSource::Fallback,
            destination: destination.to_string(),
            itinerary: self.fallback.itinerary(destination, preferences),
        }
    }

    pub async fn tips(&self, preferences: &TravelPreference, destination: &str) -> TipsResult {
        if let Some(gemini) = &self.gemini {
            match gemini.travel_tips(preferences, destination).await {
                Ok(tips) => {
                    return TipsResult {
                        source: RecommendationSource::Ai,
                        destination: destination.to_string(),
                        tips,
                    }
                }
                Err(e) => warn!("Gemini tips for {} failed, using fallback: {}", destination, e),
            }
        }

        TipsResult {
            source: RecommendationSource::Fallback,
            destination: destination.to_string(),
            tips: self.fallback.tips(destination),
        }
    }
}
