use serde::Deserialize;

/// Behavioral knobs for a [`Registry`](crate::Registry).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Log replaced registrations at `warn` instead of `debug`.
    ///
    /// Replacement itself always succeeds; this only changes how loudly it is reported.
    pub warn_on_overwrite: bool,
}
