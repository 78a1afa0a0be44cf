use crate::evidence::{self, ReputationSubject};
use crate::gather;
use crate::lifecycle::{Lifecycle, RequestState};
use crate::policy::EnginePolicy;
use crate::ports::{ReputationProvider, TrustRegistry};
use argus_types::{
    Field, ScreeningOutcome, UnknownPolicy, ValidationError, ValidationFailure, Verdict, validate,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Checks a tokenized asset's issuer/asset pair against the trust registry and,
/// optionally, the issuer's address against the reputation provider.
///
/// A missing registry record is never safe.
#[derive(Clone)]
pub struct AssetComplianceEngine {
    registry: Arc<dyn TrustRegistry>,
    issuer_reputation: Option<Arc<dyn ReputationProvider>>,
    policy: EnginePolicy,
}

impl AssetComplianceEngine {
    pub fn new(registry: Arc<dyn TrustRegistry>, policy: EnginePolicy) -> Self {
        Self {
            registry,
            issuer_reputation: None,
            policy,
        }
    }

    /// Attach the provider used for issuer screening. Only consulted when
    /// [`EnginePolicy::issuer_reputation`] is set.
    pub fn with_issuer_reputation(mut self, provider: Arc<dyn ReputationProvider>) -> Self {
        self.issuer_reputation = Some(provider);
        self
    }

    pub fn policy(&self) -> &EnginePolicy {
        &self.policy
    }

    /// `declared_value` is recorded but does not influence the verdict.
    pub async fn verify_asset(
        &self,
        asset_id: &str,
        issuer: &str,
        declared_value: f64,
    ) -> ScreeningOutcome {
        let mut lifecycle = Lifecycle::new("asset");
        self.run(asset_id, issuer, declared_value, &mut lifecycle)
            .await
    }

    pub(crate) async fn run(
        &self,
        asset_id: &str,
        issuer_raw: &str,
        declared_value: f64,
        lifecycle: &mut Lifecycle,
    ) -> ScreeningOutcome {
        lifecycle.advance(RequestState::Validating);
        let asset_id = asset_id.trim();
        if asset_id.is_empty() {
            lifecycle.advance(RequestState::ValidationFailed);
            debug!("asset id rejected: empty");
            return ScreeningOutcome::ValidationFailed(ValidationFailure::new(
                Field::AssetId,
                ValidationError::Empty,
            ));
        }
        let issuer = match validate(issuer_raw) {
            Ok(issuer) => issuer,
            Err(rule) => {
                lifecycle.advance(RequestState::ValidationFailed);
                debug!(asset_id, rule = rule.code(), "issuer rejected");
                return ScreeningOutcome::ValidationFailed(ValidationFailure::new(
                    Field::Issuer,
                    rule,
                ));
            }
        };

        lifecycle.advance(RequestState::EvidenceGathering);
        let record = match gather::registry(
            &self.registry,
            asset_id,
            &issuer,
            self.policy.registry_timeout,
        )
        .await
        {
            Ok(record) => record,
            Err(unavailable) => {
                lifecycle.advance(RequestState::EvidenceSourceFailed);
                warn!(
                    asset_id,
                    %issuer,
                    kind = unavailable.kind.as_str(),
                    "asset verification unavailable: {}",
                    unavailable.detail
                );
                return ScreeningOutcome::Unavailable(unavailable);
            }
        };
        let mut evidence = vec![evidence::from_registry(&record)];

        if let Some(provider) = self.issuer_provider() {
            match gather::reputation(provider, &issuer, self.policy.provider_timeout).await {
                Ok(report) => {
                    evidence.extend(evidence::from_reputation(
                        &report,
                        ReputationSubject::Issuer,
                    ));
                }
                Err(unavailable) => {
                    lifecycle.advance(RequestState::EvidenceSourceFailed);
                    warn!(
                        asset_id,
                        %issuer,
                        provider = provider.name(),
                        kind = unavailable.kind.as_str(),
                        "issuer screening unavailable: {}",
                        unavailable.detail
                    );
                    return ScreeningOutcome::Unavailable(unavailable);
                }
            }
        }
        lifecycle.advance(RequestState::EvidenceGathered);

        let verdict = Verdict::reconcile(&evidence, UnknownPolicy::Deny);
        lifecycle.advance(RequestState::Reconciled);
        info!(
            asset_id,
            %issuer,
            declared_value,
            safe = verdict.is_safe(),
            flags = ?verdict.flags(),
            "asset verified"
        );
        ScreeningOutcome::Verdict(verdict)
    }

    fn issuer_provider(&self) -> Option<&Arc<dyn ReputationProvider>> {
        if self.policy.issuer_reputation {
            self.issuer_reputation.as_ref()
        } else {
            None
        }
    }
}
