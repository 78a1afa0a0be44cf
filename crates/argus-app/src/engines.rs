use anyhow::Context;
use argus_domain::policy::EnginePolicy;
use argus_domain::ports::{ReputationProvider, TrustRegistry};
use argus_domain::{AssetComplianceEngine, WalletScreeningEngine};
use argus_registry::StaticTrustRegistry;
use argus_reputation::{HttpReputationProvider, ProviderConfig};
use argus_settings::{ReputationSettings, ResolvedSettings};
use std::sync::Arc;

/// Both engines, sharing one provider client and one registry snapshot.
#[derive(Clone)]
pub struct Engines {
    pub wallet: WalletScreeningEngine,
    pub asset: AssetComplianceEngine,
}

impl Engines {
    /// Build the production adapters from resolved settings.
    pub fn from_settings(settings: &ResolvedSettings, api_key: Option<String>) -> anyhow::Result<Self> {
        let registry = match &settings.registry_path {
            Some(path) => StaticTrustRegistry::load(path)?,
            None => StaticTrustRegistry::builtin()?,
        };
        let provider = HttpReputationProvider::new(ProviderConfig {
            base_url: settings.reputation.base_url.clone(),
            api_key,
            timeout: settings.policy.provider_timeout,
        })
        .context("reputation provider")?;

        tracing::debug!(
            profile = %settings.policy.profile,
            base_url = %settings.reputation.base_url,
            registry_assets = registry.asset_count(),
            issuer_reputation = settings.policy.issuer_reputation,
            "engines wired"
        );
        Ok(Self::from_parts(
            Arc::new(provider),
            Arc::new(registry),
            settings.policy.clone(),
        ))
    }

    pub fn from_parts(
        provider: Arc<dyn ReputationProvider>,
        registry: Arc<dyn TrustRegistry>,
        policy: EnginePolicy,
    ) -> Self {
        Self {
            wallet: WalletScreeningEngine::new(Arc::clone(&provider), policy.clone()),
            asset: AssetComplianceEngine::new(registry, policy).with_issuer_reputation(provider),
        }
    }
}

/// Read the provider API key from the configured environment variable. Blank counts as unset.
pub fn api_key_from_env(settings: &ReputationSettings) -> Option<String> {
    std::env::var(&settings.api_key_env)
        .ok()
        .filter(|key| !key.trim().is_empty())
}
