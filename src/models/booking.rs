use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct WeatherInfo {
    pub destination: String,
    pub current_temp: i32,
    pub condition: String,
    pub humidity: u32,
    pub wind_speed: u32,
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastDay {
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityOption {
    pub name: String,
    pub description: String,
    pub price: u32,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlightOption {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: u32,
    pub passengers: u32,
    pub total_price: u64,
    pub duration: String,
    pub stops: u32,
    pub baggage: String,
    pub provider: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HotelOption {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub stars: u32,
    pub destination: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub price_per_night: u32,
    pub nights: u32,
    pub total_price: u64,
    pub rating: f32,
    pub reviews: u32,
    pub amenities: Vec<String>,
    pub description: String,
    pub provider: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub booking_reference: String,
    pub booking_type: String,
    pub item_id: String,
    pub status: String,
    pub booking_date: DateTime<Utc>,
    pub total_amount: f64,
    pub currency: String,
    pub confirmation_email: String,
    pub customer_service: String,
    pub cancellation_policy: String,
    pub details: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct FlightSearchRequest {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    #[serde(default = "default_party_size")]
    pub passengers: u32,
}

#[derive(Debug, Deserialize)]
pub struct HotelSearchRequest {
    pub destination: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default = "default_party_size")]
    pub guests: u32,
}

#[derive(Debug, Deserialize)]
pub struct ActivitySearchRequest {
    pub destination: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub booking_type: String,
    pub item_id: String,
    #[serde(default)]
    pub details: serde_json::Value,
}

fn default_party_size() -> u32 {
    1
}
