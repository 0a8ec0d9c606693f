use std::env;

use config::{Config as Cfg, File};
use secrecy::Secret;
use serde::Deserialize;

use crate::error::AppError;
use crate::gateway::groq::{DEFAULT_GROQ_BASE_URL, DEFAULT_GROQ_MODEL};
use crate::gateway::GroqConfig;

/// HTTP listener settings, shared by any process-shaped deployment.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::Configuration(e.to_string()))
    }
}

/// Relay settings: the upstream credential and the optional output
/// normalization toggle.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub groq: GroqConfig,
    pub normalize_headings: bool,
}

impl RelayConfig {
    /// Strict load for the long-running server: a missing `GROQ_API_KEY`
    /// is a startup error, never a per-request surprise.
    pub fn load() -> Result<Self, AppError> {
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let api_key = get_env("GROQ_API_KEY", None, is_prod)?;
        let model = get_env("GROQ_MODEL", Some(DEFAULT_GROQ_MODEL), is_prod)?;
        let base_url = get_env("GROQ_BASE_URL", Some(DEFAULT_GROQ_BASE_URL), is_prod)?;
        let normalize_headings = get_env("MINDMAP_NORMALIZE_HEADINGS", Some("false"), is_prod)?
            .parse()
            .unwrap_or(false);

        Ok(RelayConfig {
            groq: GroqConfig::new(Secret::new(api_key))
                .with_model(model)
                .with_base_url(base_url),
            normalize_headings,
        })
    }

    /// Lenient load for per-invocation handlers: a missing credential is
    /// carried as an empty secret and reported by the provider when the
    /// request actually needs it.
    pub fn from_env() -> Self {
        let api_key = env::var("GROQ_API_KEY").unwrap_or_default();
        let model = env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_GROQ_MODEL.to_string());
        let base_url =
            env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_GROQ_BASE_URL.to_string());
        let normalize_headings = env::var("MINDMAP_NORMALIZE_HEADINGS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        RelayConfig {
            groq: GroqConfig::new(Secret::new(api_key))
                .with_model(model)
                .with_base_url(base_url),
            normalize_headings,
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::Configuration(format!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::Configuration(format!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
