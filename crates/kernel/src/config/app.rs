use depot_logger::LoggingConfig;
use depot_registry::RegistryConfig;
use serde::Deserialize;

/// Top-level configuration of a Depot application.
///
/// ```toml
/// [logging]
/// level = "debug"
/// path = "logs"
///
/// [registry]
/// warn_on_overwrite = true
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub registry: RegistryConfig,
}
