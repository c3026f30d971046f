use log::debug;
use regex::Regex;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::sync::OnceLock;
use std::time::Duration;

use crate::config::GeminiConfig;
use crate::models::itinerary::Itinerary;
use crate::models::preference::TravelPreference;
use crate::models::recommendation::RecommendationCandidate;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug)]
pub enum GeminiError {
    NotConfigured,
    HttpError(reqwest::Error),
    ResponseError(String),
    ParseError(String),
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeminiError::NotConfigured => write!(f, "Gemini API key not configured"),
            GeminiError::HttpError(err) => write!(f, "HTTP error: {}", err),
            GeminiError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            GeminiError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl Error for GeminiError {}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        GeminiError::HttpError(err)
    }
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiService {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiService {
    pub fn from_config(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(GeminiError::NotConfigured)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GeminiError::ResponseError(format!(
                "Gemini request failed with status {}: {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ResponseError(format!("Failed to parse response: {}", e)))?;

        let text = body
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .map(|part| part.text)
            .find(|text| !text.trim().is_empty())
            .ok_or_else(|| GeminiError::ResponseError("Response contained no text".to_string()))?;

        debug!("Gemini returned {} characters", text.len());
        Ok(text)
    }

    pub async fn destination_recommendations(
        &self,
        preferences: &TravelPreference,
    ) -> Result<Vec<RecommendationCandidate>, GeminiError> {
        let text = self.generate_content(&recommendation_prompt(preferences)).await?;
        let recommendations: Vec<RecommendationCandidate> = parse_json_payload(&text)?;
        if recommendations.is_empty() {
            return Err(GeminiError::ParseError("Empty recommendation list".to_string()));
        }
        Ok(recommendations)
    }

    pub async fn itinerary(
        &self,
        preferences: &TravelPreference,
        destination: &str,
    ) -> Result<Itinerary, GeminiError> {
        let text = self
            .generate_content(&itinerary_prompt(preferences, destination))
            .await?;
        let itinerary: Itinerary = parse_json_payload(&text)?;
        if itinerary.daily_activities.is_empty() {
            return Err(GeminiError::ParseError("Itinerary has no days".to_string()));
        }
        Ok(itinerary)
    }

    pub async fn travel_tips(
        &self,
        preferences: &TravelPreference,
        destination: &str,
    ) -> Result<Vec<String>, GeminiError> {
        let text = self
            .generate_content(&tips_prompt(preferences, destination))
            .await?;
        let tips: Vec<String> = parse_json_payload(&text)?;
        if tips.is_empty() {
            return Err(GeminiError::ParseError("Empty tips list".to_string()));
        }
        Ok(tips)
    }
}

/// Strips a surrounding Markdown code fence (```json ... ```) from model output.
pub fn strip_code_fences(text: &str) -> &str {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    let fence = FENCE.get_or_init(|| {
        Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$").expect("fence pattern is valid")
    });

    match fence.captures(text).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str(),
        None => text.trim(),
    }
}

pub fn parse_json_payload<T: DeserializeOwned>(text: &str) -> Result<T, GeminiError> {
    serde_json::from_str(strip_code_fences(text))
        .map_err(|e| GeminiError::ParseError(format!("Model output is not the expected JSON: {}", e)))
}

fn daily_budget_label(preferences: &TravelPreference) -> String {
    match preferences.budget {
        Some(budget) => format!("{:.0} per day", budget),
        None => "not specified".to_string(),
    }
}

pub fn recommendation_prompt(preferences: &TravelPreference) -> String {
    format!(
        r#"As a travel expert, recommend 3 specific destinations in {country} based on these preferences:
- Budget type: {tier}
- Daily budget: {budget}
- Interests: {interests}
- Group size: {group}

For each destination, provide:
1. City/destination name
2. 3-4 reasons why it's perfect for this traveler
3. Best time to visit
4. Estimated daily budget breakdown (accommodation, food, activities, transport) in the local currency
5. Top 3-5 highlights/attractions

Format as a JSON array with this structure:
[
    {{
        "destination": "City Name",
        "reasons": ["reason1", "reason2", "reason3"],
        "best_time_to_visit": "season/months",
        "estimated_budget": {{"accommodation": 80, "food": 50, "activities": 40, "transport": 20}},
        "highlights": ["attraction1", "attraction2", "attraction3"]
    }}
]"#,
        country = preferences.destination_country,
        tier = preferences.budget_type,
        budget = daily_budget_label(preferences),
        interests = preferences.interests_label("general tourism"),
        group = preferences.group_size,
    )
}

pub fn itinerary_prompt(preferences: &TravelPreference, destination: &str) -> String {
    let dates = match (preferences.start_date, preferences.end_date) {
        (Some(start), Some(end)) => format!("{} to {}", start, end),
        _ => "flexible".to_string(),
    };

    format!(
        r#"Create a detailed {days}-day itinerary for {destination}.

Traveler preferences:
- Interests: {interests}
- Daily budget: {budget}
- Group size: {group}
- Travel dates: {dates}

Provide daily activities with time slots, a budget breakdown by category,
restaurant recommendations and accommodation suggestions.

Format as JSON:
{{
    "daily_activities": [
        {{"day": 1, "date": "YYYY-MM-DD", "activities": [
            {{"time": "9:00 AM", "activity": "Activity name", "description": "Brief description", "cost": 25, "duration": "2 hours"}}
        ]}}
    ],
    "budget_breakdown": {{"accommodation": 400, "food": 300, "activities": 200, "transport": 100, "total": 1000}},
    "recommended_restaurants": [
        {{"name": "Restaurant Name", "cuisine": "Type", "price_range": "$$", "specialty": "Famous dish"}}
    ],
    "accommodation_suggestions": [
        {{"name": "Hotel Name", "type": "hotel", "price_per_night": 80, "rating": 4.5, "location": "Area name"}}
    ]
}}"#,
        days = preferences.trip_days(),
        destination = destination,
        interests = preferences.interests_label("general sightseeing"),
        budget = daily_budget_label(preferences),
        group = preferences.group_size,
        dates = dates,
    )
}

pub fn tips_prompt(preferences: &TravelPreference, destination: &str) -> String {
    format!(
        r#"Provide 5-7 practical travel tips for visiting {destination}.
Consider:
- Budget type: {tier}
- Interests: {interests}
- Group size: {group}

Focus on local customs and etiquette, money and payment, transportation,
safety, the best times to visit attractions and local food.

Return as a JSON array of strings:
["tip1", "tip2", "tip3"]"#,
        destination = destination,
        tier = preferences.budget_type,
        interests = preferences.interests_label("general travel"),
        group = preferences.group_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n[1, 2]\n```"), "[1, 2]");
        assert_eq!(strip_code_fences("```\n{\"a\": 1}\n```  "), "{\"a\": 1}");
        assert_eq!(strip_code_fences("  [\"plain\"]  "), "[\"plain\"]");
    }

    #[test]
    fn test_parse_json_payload() {
        let tips: Vec<String> = parse_json_payload("```json\n[\"Carry cash\"]\n```").unwrap();
        assert_eq!(tips, vec!["Carry cash"]);

        let err = parse_json_payload::<Vec<String>>("Sorry, I can't help with that").unwrap_err();
        assert!(matches!(err, GeminiError::ParseError(_)));
    }

    #[test]
    fn test_parse_fenced_recommendations() {
        let text = r#"```json
[{"destination": "Osaka", "reasons": ["Street food"], "best_time_to_visit": "Spring",
  "estimated_budget": {"accommodation": 9000, "food": 4000, "activities": 3000, "transport": 1000},
  "highlights": ["Dotonbori"]}]
```"#;
        let parsed: Vec<RecommendationCandidate> = parse_json_payload(text).unwrap();
        assert_eq!(parsed[0].destination, "Osaka");
        assert_eq!(parsed[0].budget_breakdown.food, 4000);
    }

    #[test]
    fn test_missing_key_is_not_configured() {
        let mut config = GeminiConfig::default();
        config.api_key = None;
        assert!(matches!(
            GeminiService::from_config(&config),
            Err(GeminiError::NotConfigured)
        ));

        config.api_key = Some("   ".to_string());
        assert!(matches!(
            GeminiService::from_config(&config),
            Err(GeminiError::NotConfigured)
        ));
    }

    #[test]
    fn test_prompts_carry_preferences() {
        let mut preferences = TravelPreference::new("Japan");
        preferences.interests = vec!["food".to_string(), "temples".to_string()];
        preferences.budget = Some(18000.0);

        let prompt = recommendation_prompt(&preferences);
        assert!(prompt.contains("destinations in Japan"));
        assert!(prompt.contains("food, temples"));
        assert!(prompt.contains("18000 per day"));
        assert!(prompt.contains("mid_range"));

        let prompt = itinerary_prompt(&preferences, "Kyoto");
        assert!(prompt.contains("5-day itinerary for Kyoto"));
        assert!(prompt.contains("flexible"));

        let prompt = tips_prompt(&TravelPreference::new("Peru"), "Cusco");
        assert!(prompt.contains("visiting Cusco"));
        assert!(prompt.contains("general travel"));
    }
}
