use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::models::booking::{
    ActivitySearchRequest, BookingRequest, FlightSearchRequest, HotelSearchRequest,
};
use crate::AppState;

const BOOKING_TYPES: [&str; 3] = ["flight", "hotel", "activity"];

pub async fn weather(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(state.travel.get_weather_info(&path.into_inner()))
}

pub async fn activities(
    state: web::Data<AppState>,
    body: web::Json<ActivitySearchRequest>,
) -> HttpResponse {
    let activities = state.travel.get_activities(&body.destination, &body.interests);
    HttpResponse::Ok().json(serde_json::json!({
        "destination": body.destination,
        "activities": activities,
    }))
}

pub async fn flights(
    state: web::Data<AppState>,
    body: web::Json<FlightSearchRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Some(return_date) = body.return_date {
        if return_date < body.departure_date {
            return Err(ApiError::BadRequest(
                "return_date must not be before departure_date".to_string(),
            ));
        }
    }

    let flights = state.travel.search_flights(
        &body.origin,
        &body.destination,
        body.departure_date,
        body.return_date,
        body.passengers,
    );
    Ok(HttpResponse::Ok().json(serde_json::json!({ "flights": flights })))
}

pub async fn hotels(
    state: web::Data<AppState>,
    body: web::Json<HotelSearchRequest>,
) -> HttpResponse {
    let hotels = state
        .travel
        .search_hotels(&body.destination, body.check_in, body.check_out, body.guests);
    HttpResponse::Ok().json(serde_json::json!({ "hotels": hotels }))
}

pub async fn create_booking(
    state: web::Data<AppState>,
    body: web::Json<BookingRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    let booking_type = request.booking_type.to_lowercase();
    if !BOOKING_TYPES.contains(&booking_type.as_str()) {
        return Err(ApiError::BadRequest(format!(
            "Unsupported booking type: {}",
            request.booking_type
        )));
    }

    let confirmation = state
        .travel
        .create_booking(&booking_type, &request.item_id, request.details);
    Ok(HttpResponse::Created().json(confirmation))
}
