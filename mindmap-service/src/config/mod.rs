use mindmap_core::config::{Config, RelayConfig};
use mindmap_core::error::AppError;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub common: Config,
    pub relay: RelayConfig,
}

impl ServiceConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = Config::load()?;
        let relay = RelayConfig::load()?;

        Ok(ServiceConfig { common, relay })
    }
}
