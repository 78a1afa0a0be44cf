//! Per-request state machine shared by both engines.
//!
//! ```text
//! Received -> Validating -> ValidationFailed                      (terminal)
//!                        -> EvidenceGathering -> EvidenceSourceFailed (terminal)
//!                                             -> EvidenceGathered -> Reconciled (terminal)
//! ```

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestState {
    Received,
    Validating,
    ValidationFailed,
    EvidenceGathering,
    EvidenceSourceFailed,
    EvidenceGathered,
    Reconciled,
}

impl RequestState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RequestState::ValidationFailed
                | RequestState::EvidenceSourceFailed
                | RequestState::Reconciled
        )
    }

    pub fn can_advance_to(self, next: RequestState) -> bool {
        use RequestState::*;
        matches!(
            (self, next),
            (Received, Validating)
                | (Validating, ValidationFailed)
                | (Validating, EvidenceGathering)
                | (EvidenceGathering, EvidenceSourceFailed)
                | (EvidenceGathering, EvidenceGathered)
                | (EvidenceGathered, Reconciled)
        )
    }
}

/// Tracks one request through [`RequestState`]. Illegal transitions are programming errors.
#[derive(Clone, Debug)]
pub struct Lifecycle {
    request: &'static str,
    history: Vec<RequestState>,
}

impl Lifecycle {
    pub fn new(request: &'static str) -> Self {
        Self {
            request,
            history: vec![RequestState::Received],
        }
    }

    pub fn state(&self) -> RequestState {
        self.history
            .last()
            .copied()
            .unwrap_or(RequestState::Received)
    }

    pub fn history(&self) -> &[RequestState] {
        &self.history
    }

    pub fn advance(&mut self, next: RequestState) {
        let from = self.state();
        debug_assert!(
            from.can_advance_to(next),
            "illegal {} transition {from:?} -> {next:?}",
            self.request
        );
        tracing::trace!(request = self.request, ?from, to = ?next, "request state");
        self.history.push(next);
    }
}
