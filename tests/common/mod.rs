use actix_web::{web, App};

use travel_planner_api::config::AppConfig;
use travel_planner_api::services::country_catalog::CountryCatalog;
use travel_planner_api::{routes, AppState};

pub const FIXTURE_CATALOG: &str = r#"{
    "base_currency": "USD",
    "currency_factors": {"USD": 1.0, "EUR": 0.92},
    "countries": [
        {
            "name": "Freedonia",
            "currency": "USD",
            "currency_symbol": "$",
            "budget_ranges": {
                "budget": {"min": 40, "max": 80, "description": "Hostels"},
                "mid_range": {"min": 80, "max": 200, "description": "Hotels"},
                "luxury": {"min": 200, "max": 500, "description": "Suites"},
                "ultra_luxury": {"min": 500, "max": 2000, "description": "Palaces"}
            },
            "popular_destinations": ["Fredville", "Port Marx"],
            "recommendations": [
                {
                    "destination": "Fredville",
                    "reasons": ["Capital sights"],
                    "best_time_to_visit": "Spring",
                    "estimated_budget": {"accommodation": 60, "food": 40, "activities": 30, "transport": 10},
                    "highlights": ["Old Palace"]
                }
            ]
        },
        {
            "name": "Sylvania",
            "currency": "EUR",
            "popular_destinations": []
        }
    ]
}"#;

pub struct TestApp {
    pub state: web::Data<AppState>,
}

impl TestApp {
    /// Embedded catalog, no AI gateway.
    pub fn new() -> Self {
        let catalog = CountryCatalog::embedded().expect("embedded catalog should load");
        Self::with_catalog(catalog)
    }

    pub fn fixture() -> Self {
        let catalog = CountryCatalog::from_json(FIXTURE_CATALOG).expect("fixture catalog should load");
        Self::with_catalog(catalog)
    }

    fn with_catalog(catalog: CountryCatalog) -> Self {
        let state = AppState::with_catalog(AppConfig::default(), catalog);
        Self {
            state: web::Data::new(state),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .configure(routes::configure)
    }
}
