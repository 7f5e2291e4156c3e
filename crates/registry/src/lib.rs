//! # Registry
//!
//! A minimal service-location registry. Factories are registered under the
//! identity of the type they produce, optionally qualified by a second
//! "target" type, and resolved later by naming the same type(s).
//!
//! * **Explicit instance**: there is no global registry; pass a `&Registry`
//!   to whatever needs to resolve.
//! * **Typed keys**: identities are derived from [`std::any::TypeId`], so two
//!   distinct types never collide.
//! * **Fail fast**: [`Registry::resolve`] panics on missing wiring. Use
//!   [`Registry::try_resolve`] to probe without panicking.
//! * **Not an IoC container**: no lifetimes, no cycle detection, no disposal.
//!   A factory decides whether it hands out fresh or shared instances.
//!
//! ## Example
//!
//! ```rust
//! use depot_registry::Registry;
//! use std::sync::Arc;
//!
//! struct Config { greeting: &'static str }
//! struct Greeter { config: Arc<Config> }
//! struct Loud;
//!
//! let mut registry = Registry::new();
//! let shared = Arc::new(Config { greeting: "hi" });
//! registry
//!     .register::<Arc<Config>>(move |_| Arc::clone(&shared))
//!     .register::<Greeter>(|r| Greeter { config: r.resolve() })
//!     .register_for::<String, Loud>(|r| r.resolve::<Greeter>().config.greeting.to_uppercase());
//!
//! assert_eq!(registry.resolve::<Greeter>().config.greeting, "hi");
//! assert_eq!(registry.resolve_for::<String, Loud>(), "HI");
//! assert!(registry.try_resolve::<String>().is_err());
//! ```

mod config;
mod error;
mod key;
mod registry;

pub use crate::config::RegistryConfig;
pub use crate::error::{RegistryError, RegistryErrorExt, Result};
pub use crate::key::{ServiceKey, TargetedKey};
pub use crate::registry::Registry;
