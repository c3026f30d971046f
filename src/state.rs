use log::info;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::CatalogError;
use crate::services::budget_service::BudgetResolver;
use crate::services::country_catalog::CountryCatalog;
use crate::services::gemini_service::GeminiService;
use crate::services::recommendation_service::RecommendationService;
use crate::services::travel_service::TravelService;

/// Shared, read-only service graph handed to every handler through `web::Data`.
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<CountryCatalog>,
    pub budgets: BudgetResolver,
    pub recommendations: RecommendationService,
    pub travel: TravelService,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => CountryCatalog::load(path)?,
            None => CountryCatalog::embedded()?,
        };

        let gemini = match GeminiService::from_config(&config.gemini) {
            Ok(service) => Some(service),
            Err(e) => {
                info!("Gemini disabled: {}", e);
                None
            }
        };

        Ok(Self::assemble(config, Arc::new(catalog), gemini))
    }

    /// Builds state around an already-loaded catalog without an AI gateway.
    pub fn with_catalog(config: AppConfig, catalog: CountryCatalog) -> Self {
        Self::assemble(config, Arc::new(catalog), None)
    }

    fn assemble(
        config: AppConfig,
        catalog: Arc<CountryCatalog>,
        gemini: Option<GeminiService>,
    ) -> Self {
        Self {
            budgets: BudgetResolver::new(catalog.clone()),
            recommendations: RecommendationService::new(catalog.clone(), gemini),
            travel: TravelService::new(),
            catalog,
            config,
        }
    }
}
