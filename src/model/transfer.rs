//! src/model/transfer.rs
//! ============================================================================
//! # TransferPhase: Workflow State Machine
//!
//! Idle -> Confirming -> Processing -> Idle. `initiate` is only reachable
//! from Idle with a non-empty selection, which is what guarantees at most one
//! transfer task in flight.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferPhase {
    #[default]
    Idle,
    /// Confirmation modal is up, nothing has happened yet.
    Confirming,
    /// The background task is walking the selected entries.
    Processing,
}

impl TransferPhase {
    /// Idle -> Confirming, gated on a non-empty selection. Any other state
    /// (or an empty selection) is a no-op.
    #[must_use]
    pub fn initiate(self, has_selection: bool) -> Self {
        match self {
            TransferPhase::Idle if has_selection => TransferPhase::Confirming,
            other => other,
        }
    }

    /// Confirming -> Idle, no side effects.
    #[must_use]
    pub fn cancel(self) -> Self {
        match self {
            TransferPhase::Confirming => TransferPhase::Idle,
            other => other,
        }
    }

    /// Confirming -> Processing.
    #[must_use]
    pub fn confirm(self) -> Self {
        match self {
            TransferPhase::Confirming => TransferPhase::Processing,
            other => other,
        }
    }

    /// Processing -> Idle, whether the run completed, failed, or was
    /// cancelled.
    #[must_use]
    pub fn finish(self) -> Self {
        match self {
            TransferPhase::Processing => TransferPhase::Idle,
            other => other,
        }
    }

    pub fn is_idle(self) -> bool {
        self == TransferPhase::Idle
    }

    pub fn is_processing(self) -> bool {
        self == TransferPhase::Processing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle() {
        let phase = TransferPhase::Idle
            .initiate(true)
            .confirm();
        assert_eq!(phase, TransferPhase::Processing);
        assert_eq!(phase.finish(), TransferPhase::Idle);
    }

    #[test]
    fn initiate_requires_selection() {
        assert_eq!(TransferPhase::Idle.initiate(false), TransferPhase::Idle);
    }

    #[test]
    fn initiate_is_unreachable_outside_idle() {
        assert_eq!(
            TransferPhase::Processing.initiate(true),
            TransferPhase::Processing
        );
        assert_eq!(
            TransferPhase::Confirming.initiate(true),
            TransferPhase::Confirming
        );
    }

    #[test]
    fn cancel_only_leaves_confirming() {
        assert_eq!(TransferPhase::Confirming.cancel(), TransferPhase::Idle);
        assert_eq!(TransferPhase::Processing.cancel(), TransferPhase::Processing);
        assert_eq!(TransferPhase::Idle.cancel(), TransferPhase::Idle);
    }
}
