mod services;
mod wiring;

use depot_kernel::config::{AppConfig, ConfigError, DEFAULT_CONFIG_STEM, load_config, load_optional_config};
use depot_kernel::logger::Logger;
use depot_kernel::registry::{Registry, RegistryErrorExt};
use services::{ReportService, ReportTarget, SummaryTarget};
use std::sync::Arc;
use tracing::info;

const SAMPLE_ROWS: &[(&str, i64)] = &[("revenue", 1_250), ("cost", -830), ("margin", 420)];

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1);
    let config = load_app_config(path.as_deref())?;
    let _logger = Logger::from_config(env!("CARGO_PKG_NAME"), config.logging)?;
    info!(source = path.as_deref().unwrap_or(DEFAULT_CONFIG_STEM), "Configuration loaded");

    let mut registry = Registry::with_config(config.registry);
    wiring::wire(&mut registry);
    let registry = Arc::new(registry);
    info!(services = registry.len(), "Registry wired");

    let report = registry
        .try_resolve_for::<ReportService, ReportTarget>()
        .context("building the report pipeline")?;
    let summary = registry
        .try_resolve_for::<ReportService, SummaryTarget>()
        .context("building the summary pipeline")?;

    for (name, service) in [("report", &report), ("summary", &summary)] {
        let rendered = service.render("Quarterly", SAMPLE_ROWS);
        info!(pipeline = name, formatter = service.formatter_name(), "\n{rendered}");
    }

    Ok(())
}

/// An explicit path must exist; without one the default file is optional.
fn load_app_config(path: Option<&str>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => load_config(Some(path)),
        None => load_optional_config(None::<&str>),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let err = load_app_config(missing.to_str()).unwrap_err();
        assert!(matches!(err, ConfigError::Config { .. }));
    }

    #[test]
    fn explicit_config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("depot.toml");
        std::fs::write(&path, "[registry]\nwarn_on_overwrite = true\n").unwrap();

        let config = load_app_config(path.to_str()).unwrap();
        assert!(config.registry.warn_on_overwrite);
    }
}
