pub mod budget_service;
pub mod country_catalog;
pub mod fallback_service;
pub mod gemini_service;
pub mod recommendation_service;
pub mod travel_service;
