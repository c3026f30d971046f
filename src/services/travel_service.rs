//! Mock travel inventory: weather, activities, flights, hotels and bookings.
//!
//! Prices and schedules are random within fixed bounds so the UI looks alive.
//! The RNG is injectable so tests can pin the output.

use chrono::{NaiveDate, Utc};
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use crate::models::booking::{
    ActivityOption, BookingConfirmation, FlightOption, ForecastDay, HotelOption, WeatherInfo,
};

const FIRST_BOOKING_NUMBER: u32 = 1000;
const MAX_ACTIVITIES: usize = 8;
const DEFAULT_NIGHTS: u32 = 7;
const FLIGHT_OPTIONS: usize = 5;
const HOTEL_OPTIONS: usize = 6;

const WEATHER_CONDITIONS: [&str; 5] = ["Sunny", "Partly Cloudy", "Cloudy", "Light Rain", "Clear"];
const AIRLINES: [&str; 5] = ["SkyWings", "AirTravel", "CloudHopper", "JetStream", "FlyHigh"];
const FLIGHT_TIMES: [&str; 6] = ["06:30", "09:15", "12:45", "15:30", "18:20", "21:10"];
const HOTEL_TYPES: [&str; 5] = ["Hotel", "Resort", "Boutique Hotel", "Business Hotel", "Luxury Hotel"];
const AMENITIES: [&str; 9] = [
    "Free WiFi",
    "Pool",
    "Gym",
    "Spa",
    "Restaurant",
    "Bar",
    "Room Service",
    "Concierge",
    "Parking",
];

pub struct TravelService {
    rng: Mutex<StdRng>,
    booking_counter: AtomicU32,
}

impl Default for TravelService {
    fn default() -> Self {
        Self::new()
    }
}

impl TravelService {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            booking_counter: AtomicU32::new(FIRST_BOOKING_NUMBER),
        }
    }

    // A poisoned lock still holds a usable RNG
    fn with_rng_locked<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }

    pub fn get_weather_info(&self, destination: &str) -> WeatherInfo {
        self.with_rng_locked(|rng| {
            let forecast = ["Today", "Tomorrow", "Day 3"]
                .iter()
                .map(|day| ForecastDay {
                    day: day.to_string(),
                    high: rng.gen_range(20..=35),
                    low: rng.gen_range(10..=20),
                    condition: pick(rng, &WEATHER_CONDITIONS),
                })
                .collect();

            WeatherInfo {
                destination: destination.to_string(),
                current_temp: rng.gen_range(15..=30),
                condition: pick(rng, &WEATHER_CONDITIONS),
                humidity: rng.gen_range(40..=80),
                wind_speed: rng.gen_range(5..=25),
                forecast,
            }
        })
    }

    /// Activities for the given interests, culture and food when none match, at most eight.
    pub fn get_activities(&self, destination: &str, interests: &[String]) -> Vec<ActivityOption> {
        let mut selected: Vec<ActivityOption> = interests
            .iter()
            .flat_map(|interest| activity_pool(&interest.trim().to_lowercase(), destination))
            .collect();

        if selected.is_empty() {
            selected = activity_pool("culture", destination);
            selected.extend(activity_pool("food", destination));
        }

        selected.truncate(MAX_ACTIVITIES);
        selected
    }

    pub fn search_flights(
        &self,
        origin: &str,
        destination: &str,
        departure_date: NaiveDate,
        return_date: Option<NaiveDate>,
        passengers: u32,
    ) -> Vec<FlightOption> {
        let passengers = passengers.max(1);
        let mut flights: Vec<FlightOption> = self.with_rng_locked(|rng| {
            (1..=FLIGHT_OPTIONS)
                .map(|i| {
                    let price = rng.gen_range(200..=800);
                    let airline = pick(rng, &AIRLINES);
                    let departure_index = rng.gen_range(0..FLIGHT_TIMES.len());
                    let arrival_index = (departure_index + rng.gen_range(2..=4)) % FLIGHT_TIMES.len();

                    FlightOption {
                        id: format!("flight_{}", i),
                        flight_number: format!(
                            "{}{}",
                            airline[..2].to_uppercase(),
                            rng.gen_range(100..=999)
                        ),
                        airline,
                        origin: origin.to_string(),
                        destination: destination.to_string(),
                        departure_date,
                        return_date,
                        departure_time: FLIGHT_TIMES[departure_index].to_string(),
                        arrival_time: FLIGHT_TIMES[arrival_index].to_string(),
                        price,
                        passengers,
                        total_price: price as u64 * passengers as u64,
                        duration: format!("{}h {}m", rng.gen_range(2..=12), rng.gen_range(0..=59)),
                        stops: rng.gen_range(0..=2),
                        baggage: "1 checked bag included".to_string(),
                        provider: "FlightBooking Pro".to_string(),
                    }
                })
                .collect()
        });

        flights.sort_by_key(|flight| flight.total_price);
        flights
    }

    pub fn search_hotels(
        &self,
        destination: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
    ) -> Vec<HotelOption> {
        let nights = match (check_out - check_in).num_days() {
            n if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
            _ => DEFAULT_NIGHTS,
        };

        let mut hotels: Vec<HotelOption> = self.with_rng_locked(|rng| {
            (1..=HOTEL_OPTIONS)
                .map(|i| {
                    let price_per_night = rng.gen_range(80..=400);
                    let kind = pick(rng, &HOTEL_TYPES);
                    let amenity_count = rng.gen_range(4..=7);
                    let amenities = AMENITIES
                        .choose_multiple(rng, amenity_count)
                        .map(|a| a.to_string())
                        .collect();
                    let rating = (rng.gen_range(3.5_f32..=4.8) * 10.0).round() / 10.0;

                    HotelOption {
                        id: format!("hotel_{}", i),
                        name: format!("{} {}", destination, kind),
                        description: format!(
                            "Comfortable {} in the heart of {}",
                            kind.to_lowercase(),
                            destination
                        ),
                        kind,
                        stars: rng.gen_range(3..=5),
                        destination: destination.to_string(),
                        check_in,
                        check_out,
                        guests: guests.max(1),
                        price_per_night,
                        nights,
                        total_price: price_per_night as u64 * nights as u64,
                        rating,
                        reviews: rng.gen_range(50..=500),
                        amenities,
                        provider: "HotelBooking Plus".to_string(),
                    }
                })
                .collect()
        });

        hotels.sort_by_key(|hotel| hotel.total_price);
        hotels
    }

    pub fn create_booking(
        &self,
        booking_type: &str,
        item_id: &str,
        details: serde_json::Value,
    ) -> BookingConfirmation {
        let number = self.booking_counter.fetch_add(1, Ordering::SeqCst) + 1;
        let booking_reference = format!("{}{}", booking_type.to_uppercase(), number);
        let total_amount = ["total_price", "price"]
            .iter()
            .find_map(|key| details.get(*key).and_then(|v| v.as_f64()))
            .unwrap_or(0.0);

        info!("Created {} booking {} for {}", booking_type, booking_reference, item_id);

        BookingConfirmation {
            booking_reference,
            booking_type: booking_type.to_string(),
            item_id: item_id.to_string(),
            status: "confirmed".to_string(),
            booking_date: Utc::now(),
            total_amount,
            currency: "USD".to_string(),
            confirmation_email: "travel@example.com".to_string(),
            customer_service: "+1-800-TRAVEL".to_string(),
            cancellation_policy: "Free cancellation up to 24 hours before travel".to_string(),
            details,
        }
    }
}

fn pick(rng: &mut StdRng, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

fn activity(name: String, description: &str, price: u32, duration: &str) -> ActivityOption {
    ActivityOption {
        name,
        description: description.to_string(),
        price,
        duration: duration.to_string(),
    }
}

fn activity_pool(interest: &str, destination: &str) -> Vec<ActivityOption> {
    match interest {
        "culture" => vec![
            activity(format!("{} Historical Museum", destination), "Explore local history and culture", 25, "2-3 hours"),
            activity(format!("{} Art Gallery", destination), "Contemporary and classical art exhibitions", 20, "1-2 hours"),
            activity("Cultural Walking Tour".to_string(), "Guided tour of historical sites", 35, "3 hours"),
            activity("Traditional Craft Workshop".to_string(), "Learn local crafts and traditions", 45, "2 hours"),
        ],
        "food" => vec![
            activity("Food Market Tour".to_string(), "Explore local markets and taste specialties", 40, "3 hours"),
            activity("Cooking Class".to_string(), "Learn to cook traditional dishes", 65, "4 hours"),
            activity("Wine Tasting".to_string(), "Sample local wines and learn about production", 55, "2 hours"),
            activity("Street Food Tour".to_string(), "Discover the best street food spots", 30, "2.5 hours"),
        ],
        "adventure" => vec![
            activity("Hiking Tour".to_string(), "Explore scenic trails and viewpoints", 50, "6 hours"),
            activity("Bike Rental".to_string(), "Explore the city on two wheels", 25, "Full day"),
            activity("Kayaking Experience".to_string(), "Paddle through scenic waterways", 60, "4 hours"),
            activity("Rock Climbing".to_string(), "Guided climbing experience", 80, "5 hours"),
        ],
        "nature" => vec![
            activity("Nature Walk".to_string(), "Guided walk through natural areas", 30, "3 hours"),
            activity("Botanical Garden Visit".to_string(), "Explore diverse plant collections", 15, "2 hours"),
            activity("Wildlife Watching".to_string(), "Spot local wildlife in natural habitat", 45, "4 hours"),
            activity("Photography Tour".to_string(), "Capture stunning natural landscapes", 55, "3 hours"),
        ],
        "relaxation" => vec![
            activity("Spa Treatment".to_string(), "Rejuvenating spa experience", 120, "2 hours"),
            activity("Beach Day".to_string(), "Relax on pristine beaches", 10, "Full day"),
            activity("Meditation Class".to_string(), "Learn mindfulness and meditation", 35, "1.5 hours"),
            activity("Yoga Session".to_string(), "Outdoor yoga with scenic views", 25, "1 hour"),
        ],
        _ => Vec::new(),
    }
}
