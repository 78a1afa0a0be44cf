use std::time::Duration;

pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_millis(5_000);
pub const DEFAULT_REGISTRY_TIMEOUT: Duration = Duration::from_millis(1_000);

/// Engine knobs resolved from settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnginePolicy {
    pub profile: String,
    /// Upper bound on one reputation lookup. Expiry yields `Unavailable(timeout)`.
    pub provider_timeout: Duration,
    /// Upper bound on one registry lookup.
    pub registry_timeout: Duration,
    /// Also screen asset issuers with the reputation provider.
    pub issuer_reputation: bool,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            profile: "standard".to_string(),
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            registry_timeout: DEFAULT_REGISTRY_TIMEOUT,
            issuer_reputation: false,
        }
    }
}
