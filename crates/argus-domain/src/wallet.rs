use crate::evidence::{self, ReputationSubject};
use crate::gather;
use crate::lifecycle::{Lifecycle, RequestState};
use crate::policy::EnginePolicy;
use crate::ports::ReputationProvider;
use argus_types::{
    Field, ScreeningOutcome, UnknownPolicy, ValidationFailure, Verdict, validate,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Screens wallet addresses against a reputation provider.
#[derive(Clone)]
pub struct WalletScreeningEngine {
    provider: Arc<dyn ReputationProvider>,
    policy: EnginePolicy,
}

impl WalletScreeningEngine {
    pub fn new(provider: Arc<dyn ReputationProvider>, policy: EnginePolicy) -> Self {
        Self { provider, policy }
    }

    pub fn policy(&self) -> &EnginePolicy {
        &self.policy
    }

    /// Validate, query the provider, reconcile.
    ///
    /// Invalid input returns before the provider is contacted. Provider failures and
    /// timeouts surface as [`ScreeningOutcome::Unavailable`], never as a verdict.
    pub async fn screen_wallet(&self, raw: &str) -> ScreeningOutcome {
        let mut lifecycle = Lifecycle::new("wallet");
        self.run(raw, &mut lifecycle).await
    }

    pub(crate) async fn run(&self, raw: &str, lifecycle: &mut Lifecycle) -> ScreeningOutcome {
        lifecycle.advance(RequestState::Validating);
        let address = match validate(raw) {
            Ok(address) => address,
            Err(rule) => {
                lifecycle.advance(RequestState::ValidationFailed);
                debug!(rule = rule.code(), "wallet address rejected");
                return ScreeningOutcome::ValidationFailed(ValidationFailure::new(
                    Field::Address,
                    rule,
                ));
            }
        };

        lifecycle.advance(RequestState::EvidenceGathering);
        let report =
            match gather::reputation(&self.provider, &address, self.policy.provider_timeout).await
            {
                Ok(report) => report,
                Err(unavailable) => {
                    lifecycle.advance(RequestState::EvidenceSourceFailed);
                    warn!(
                        %address,
                        provider = self.provider.name(),
                        kind = unavailable.kind.as_str(),
                        "wallet screening unavailable: {}",
                        unavailable.detail
                    );
                    return ScreeningOutcome::Unavailable(unavailable);
                }
            };
        let evidence = evidence::from_reputation(&report, ReputationSubject::Wallet);
        lifecycle.advance(RequestState::EvidenceGathered);

        let verdict = Verdict::reconcile(&evidence, UnknownPolicy::Permit);
        lifecycle.advance(RequestState::Reconciled);
        info!(
            %address,
            safe = verdict.is_safe(),
            flags = ?verdict.flags(),
            "wallet screened"
        );
        ScreeningOutcome::Verdict(verdict)
    }
}
