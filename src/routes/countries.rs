use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::models::country::CountryProfile;
use crate::AppState;

#[derive(Serialize)]
struct CountryListResponse<'a> {
    base_currency: &'a str,
    countries: Vec<&'a str>,
}

#[derive(Serialize)]
struct CountryProfileResponse<'a> {
    known: bool,
    #[serde(flatten)]
    profile: &'a CountryProfile,
}

#[derive(Deserialize)]
pub struct ProfileQuery {
    #[serde(default)]
    strict: bool,
}

#[derive(Deserialize)]
pub struct BudgetQuery {
    tier: Option<String>,
}

pub async fn list_countries(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(CountryListResponse {
        base_currency: state.catalog.base_currency(),
        countries: state.catalog.list_supported_countries(),
    })
}

/// Unknown countries get the generic profile unless `?strict=true` is passed.
pub async fn get_country(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ProfileQuery>,
) -> Result<HttpResponse, ApiError> {
    let name = path.into_inner();

    if query.strict {
        let profile = state.catalog.get_country_profile(&name)?;
        return Ok(HttpResponse::Ok().json(CountryProfileResponse {
            known: true,
            profile,
        }));
    }

    let profile = state.catalog.get_country_profile_or_default(&name);
    Ok(HttpResponse::Ok().json(CountryProfileResponse {
        known: state.catalog.contains(&name),
        profile: &profile,
    }))
}

pub async fn get_destinations(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let name = path.into_inner();
    HttpResponse::Ok().json(serde_json::json!({
        "country": name,
        "destinations": state.catalog.get_popular_destinations(&name),
    }))
}

/// One tier when `?tier=` is given, otherwise the whole table in spend order.
pub async fn get_budget(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<BudgetQuery>,
) -> Result<HttpResponse, ApiError> {
    let name = path.into_inner();

    match query.tier.as_deref() {
        Some(tier) => {
            let budget = state.budgets.suggest_daily_budget(&name, tier)?;
            Ok(HttpResponse::Ok().json(budget))
        }
        None => Ok(HttpResponse::Ok().json(state.budgets.budget_table(&name))),
    }
}
