use std::borrow::Cow;

/// Errors produced while resolving a service.
///
/// [`Registry::resolve`](crate::Registry::resolve) turns either variant into a panic;
/// the `try_` forms hand them back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No factory is stored under the derived key.
    #[error("Service '{key}' not registered.{}", format_context(.context))]
    NotRegistered { key: String, context: Option<Cow<'static, str>> },

    /// A factory exists but its output does not downcast to the requested type.
    #[error(
        "Service '{key}' is registered but did not produce a '{expected}'.{}",
        format_context(.context)
    )]
    TypeMismatch { key: String, expected: &'static str, context: Option<Cow<'static, str>> },
}

impl RegistryError {
    /// Diagnostic form of the key that failed to resolve.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::NotRegistered { key, .. } | Self::TypeMismatch { key, .. } => key,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

pub trait RegistryErrorExt<T> {
    /// Attaches caller context to a failed resolution.
    ///
    /// # Errors
    /// Returns the original error with its context replaced.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> RegistryErrorExt<T> for Result<T> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                RegistryError::NotRegistered { context: c, .. }
                | RegistryError::TypeMismatch { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
