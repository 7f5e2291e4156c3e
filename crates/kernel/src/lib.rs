//! Shared plumbing for Depot applications.
//! Keep this crate thin: it loads configuration and re-exports the registry and logger
//! so binaries depend on a single crate.
//!
//! ## Config loading
//! ```rust,no_run
//! use depot_kernel::config::{AppConfig, load_optional_config};
//! use depot_kernel::registry::Registry;
//!
//! let cfg: AppConfig = load_optional_config(None::<&str>).unwrap();
//! let registry = Registry::with_config(cfg.registry);
//! # drop(registry);
//! ```

pub mod config;

pub use depot_logger as logger;
pub use depot_registry as registry;
