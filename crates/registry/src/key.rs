//! Service identities.
//!
//! A key is derived from [`TypeId`], so two distinct types never compare equal
//! even if their [`type_name`] strings happen to match. The name is carried
//! only for diagnostics.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a single service type.
#[derive(Clone, Copy)]
pub struct ServiceKey {
    id: TypeId,
    name: &'static str,
}

impl ServiceKey {
    /// Derives the key for `T`. Unsized types (`dyn Trait`, `str`) are allowed.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self { id: TypeId::of::<T>(), name: type_name::<T>() }
    }

    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.id
    }

    /// Human-readable type name. Not guaranteed to be unique.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ServiceKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ServiceKey {}

impl Hash for ServiceKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServiceKey").field(&self.name).finish()
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Identity of a service qualified by a target type.
///
/// Displays as the concatenation of both names.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetedKey {
    service: ServiceKey,
    target: ServiceKey,
}

impl TargetedKey {
    #[must_use]
    pub fn of<S: ?Sized + 'static, T: ?Sized + 'static>() -> Self {
        Self { service: ServiceKey::of::<S>(), target: ServiceKey::of::<T>() }
    }

    #[must_use]
    pub const fn service(&self) -> ServiceKey {
        self.service
    }

    #[must_use]
    pub const fn target(&self) -> ServiceKey {
        self.target
    }
}

impl fmt::Debug for TargetedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetedKey")
            .field("service", &self.service.name)
            .field("target", &self.target.name)
            .finish()
    }
}

impl fmt::Display for TargetedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.service, self.target)
    }
}
