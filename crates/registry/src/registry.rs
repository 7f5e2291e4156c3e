use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::key::{ServiceKey, TargetedKey};
use fxhash::FxHashMap;
use std::any::{Any, type_name};
use std::fmt;
use std::hash::Hash;
use tracing::{debug, error, trace, warn};

/// A stored factory. It receives the registry so it can resolve its own dependencies.
type Factory = Box<dyn Fn(&Registry) -> Box<dyn Any> + Send + Sync>;

/// Service-location registry.
///
/// Holds two independent namespaces: services keyed by their own type, and
/// services keyed by a `(service, target)` pair. A later registration for the
/// same key replaces the earlier one.
///
/// Registration needs `&mut self` while resolution only needs `&self`, so once
/// the registry is shared (for example behind an `Arc`) it is effectively
/// frozen and may be resolved from any thread.
///
/// ```rust
/// use depot_registry::Registry;
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// struct English;
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         "hello".to_owned()
///     }
/// }
///
/// let mut registry = Registry::new();
/// registry.register::<Arc<dyn Greeter>>(|_| Arc::new(English));
///
/// let greeter = registry.resolve::<Arc<dyn Greeter>>();
/// assert_eq!(greeter.greet(), "hello");
/// ```
pub struct Registry {
    by_type: FxHashMap<ServiceKey, Factory>,
    by_target: FxHashMap<TargetedKey, Factory>,
    config: RegistryConfig,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self { by_type: FxHashMap::default(), by_target: FxHashMap::default(), config }
    }

    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Registers a factory for `S`, replacing any previous one.
    pub fn register<S: 'static>(
        &mut self,
        factory: impl Fn(&Self) -> S + Send + Sync + 'static,
    ) -> &mut Self {
        self.register_erased::<S>(move |registry| Box::new(factory(registry)) as Box<dyn Any>)
    }

    /// Registers a factory for `S` qualified by target `T`.
    ///
    /// Lives in a separate namespace from [`Registry::register`].
    pub fn register_for<S: 'static, T: ?Sized + 'static>(
        &mut self,
        factory: impl Fn(&Self) -> S + Send + Sync + 'static,
    ) -> &mut Self {
        self.register_erased_for::<S, T>(move |registry| {
            Box::new(factory(registry)) as Box<dyn Any>
        })
    }

    /// Registers an untyped factory under the identity of `S`.
    ///
    /// The produced value is only checked when `S` is resolved; a factory that
    /// yields something other than `S` surfaces as [`RegistryError::TypeMismatch`].
    /// `S` must be sized so that every stored entry stays resolvable.
    pub fn register_erased<S: 'static>(
        &mut self,
        factory: impl Fn(&Self) -> Box<dyn Any> + Send + Sync + 'static,
    ) -> &mut Self {
        let key = ServiceKey::of::<S>();
        let config = self.config;
        store(&mut self.by_type, key, Box::new(factory), &config);
        self
    }

    /// Untyped counterpart of [`Registry::register_for`].
    pub fn register_erased_for<S: 'static, T: ?Sized + 'static>(
        &mut self,
        factory: impl Fn(&Self) -> Box<dyn Any> + Send + Sync + 'static,
    ) -> &mut Self {
        let key = TargetedKey::of::<S, T>();
        let config = self.config;
        store(&mut self.by_target, key, Box::new(factory), &config);
        self
    }

    /// Builds an `S` from its registered factory.
    ///
    /// # Panics
    /// Panics if `S` was never registered or its factory produced another type.
    /// Missing wiring is a programmer error; use [`Registry::try_resolve`] to probe.
    #[must_use]
    #[track_caller]
    pub fn resolve<S: 'static>(&self) -> S {
        match self.try_resolve::<S>() {
            Ok(service) => service,
            Err(e) => fail(&e),
        }
    }

    /// Builds an `S` registered for target `T`.
    ///
    /// # Panics
    /// Panics if nothing is registered for the pair or the factory produced another type.
    #[must_use]
    #[track_caller]
    pub fn resolve_for<S: 'static, T: ?Sized + 'static>(&self) -> S {
        match self.try_resolve_for::<S, T>() {
            Ok(service) => service,
            Err(e) => fail(&e),
        }
    }

    /// Non-panicking form of [`Registry::resolve`].
    ///
    /// # Errors
    /// [`RegistryError::NotRegistered`] when no factory exists for `S`,
    /// [`RegistryError::TypeMismatch`] when the factory output is not an `S`.
    pub fn try_resolve<S: 'static>(&self) -> Result<S> {
        let key = ServiceKey::of::<S>();
        let factory = self.by_type.get(&key).ok_or_else(|| RegistryError::NotRegistered {
            key: key.to_string(),
            context: None,
        })?;
        trace!(service = %key, "Resolving service");
        downcast(factory(self), &key)
    }

    /// Non-panicking form of [`Registry::resolve_for`].
    ///
    /// # Errors
    /// Same as [`Registry::try_resolve`], against the targeted namespace.
    pub fn try_resolve_for<S: 'static, T: ?Sized + 'static>(&self) -> Result<S> {
        let key = TargetedKey::of::<S, T>();
        let factory = self.by_target.get(&key).ok_or_else(|| RegistryError::NotRegistered {
            key: key.to_string(),
            context: None,
        })?;
        trace!(service = %key.service(), target = %key.target(), "Resolving targeted service");
        downcast(factory(self), &key)
    }

    #[must_use]
    pub fn contains<S: ?Sized + 'static>(&self) -> bool {
        self.by_type.contains_key(&ServiceKey::of::<S>())
    }

    #[must_use]
    pub fn contains_for<S: ?Sized + 'static, T: ?Sized + 'static>(&self) -> bool {
        self.by_target.contains_key(&TargetedKey::of::<S, T>())
    }

    /// Total number of registrations across both namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_type.len() + self.by_target.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty() && self.by_target.is_empty()
    }

    /// Iterates over unqualified registrations (for diagnostics).
    pub fn services(&self) -> impl Iterator<Item = &ServiceKey> {
        self.by_type.keys()
    }

    /// Iterates over targeted registrations (for diagnostics).
    pub fn targeted_services(&self) -> impl Iterator<Item = &TargetedKey> {
        self.by_target.keys()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("services", &self.by_type.keys().collect::<Vec<_>>())
            .field("targeted", &self.by_target.keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

fn store<K>(map: &mut FxHashMap<K, Factory>, key: K, factory: Factory, config: &RegistryConfig)
where
    K: Copy + Eq + Hash + fmt::Display,
{
    if map.insert(key, factory).is_some() {
        if config.warn_on_overwrite {
            warn!(service = %key, "Replaced existing service registration");
        } else {
            debug!(service = %key, "Replaced existing service registration");
        }
    } else {
        trace!(service = %key, "Registered service");
    }
}

fn downcast<S: 'static>(value: Box<dyn Any>, key: &impl fmt::Display) -> Result<S> {
    value.downcast::<S>().map(|boxed| *boxed).map_err(|_| RegistryError::TypeMismatch {
        key: key.to_string(),
        expected: type_name::<S>(),
        context: None,
    })
}

#[cold]
#[track_caller]
fn fail(err: &RegistryError) -> ! {
    error!(service = err.key(), "{err}");
    panic!("{err}");
}
