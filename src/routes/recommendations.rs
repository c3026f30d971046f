use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::preference::TravelPreference;
use crate::AppState;

#[derive(Deserialize)]
pub struct DestinationRequest {
    pub destination: String,
    #[serde(flatten)]
    pub preferences: TravelPreference,
}

fn require_country(preferences: &TravelPreference) -> Result<(), ApiError> {
    if preferences.destination_country.trim().is_empty() {
        return Err(ApiError::BadRequest("destination_country is required".to_string()));
    }
    Ok(())
}

fn require_destination(request: &DestinationRequest) -> Result<(), ApiError> {
    if request.destination.trim().is_empty() {
        return Err(ApiError::BadRequest("destination is required".to_string()));
    }
    Ok(())
}

pub async fn recommend(
    state: web::Data<AppState>,
    body: web::Json<TravelPreference>,
) -> Result<HttpResponse, ApiError> {
    let preferences = body.into_inner();
    require_country(&preferences)?;

    let result = state.recommendations.recommend(&preferences).await;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn itinerary(
    state: web::Data<AppState>,
    body: web::Json<DestinationRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    require_destination(&request)?;

    let result = state
        .recommendations
        .itinerary(&request.preferences, &request.destination)
        .await;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn tips(
    state: web::Data<AppState>,
    body: web::Json<DestinationRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    require_destination(&request)?;

    let result = state
        .recommendations
        .tips(&request.preferences, &request.destination)
        .await;
    Ok(HttpResponse::Ok().json(result))
}
