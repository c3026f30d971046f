use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;

use crate::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: state.config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    health
        .services
        .insert("country_catalog".to_string(), check_catalog(&state));

    // Gemini being off is a supported mode, so it never degrades overall status
    health
        .services
        .insert("gemini".to_string(), check_gemini(&state));

    if health.services["country_catalog"].status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_catalog(state: &AppState) -> ServiceStatus {
    if state.catalog.is_empty() {
        ServiceStatus {
            status: "error".to_string(),
            details: Some("Country catalog is empty".to_string()),
        }
    } else {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("{} countries loaded", state.catalog.len())),
        }
    }
}

fn check_gemini(state: &AppState) -> ServiceStatus {
    if state.recommendations.ai_enabled() {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Gemini configured with model {}", state.config.gemini.model)),
        }
    } else {
        ServiceStatus {
            status: "disabled".to_string(),
            details: Some("GEMINI_API_KEY not configured, serving fallback recommendations".to_string()),
        }
    }
}
