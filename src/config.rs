use std::env;
use std::path::PathBuf;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const ENVIRONMENT: &str = "development";
const GEMINI_MODEL: &str = "gemini-pro";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const GEMINI_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: GEMINI_MODEL.to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
            timeout_secs: GEMINI_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    /// Replaces the embedded country catalog when set.
    pub catalog_path: Option<PathBuf>,
    pub gemini: GeminiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            environment: ENVIRONMENT.to_string(),
            catalog_path: None,
            gemini: GeminiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read settings from environment variables, keeping defaults for anything missing or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            environment: env::var("RUST_ENV").unwrap_or(defaults.environment),
            catalog_path: non_empty_var("COUNTRY_CATALOG_PATH").map(PathBuf::from),
            gemini: GeminiConfig {
                api_key: non_empty_var("GEMINI_API_KEY"),
                model: non_empty_var("GEMINI_MODEL").unwrap_or(defaults.gemini.model),
                base_url: non_empty_var("GEMINI_BASE_URL").unwrap_or(defaults.gemini.base_url),
                timeout_secs: env::var("GEMINI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .filter(|secs| *secs > 0)
                    .unwrap_or(defaults.gemini.timeout_secs),
            },
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
