//! Fallback decision for a classified primary run.

use super::classify::OutcomeKind;

/// Decision returned by the fallback policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackDecision {
    /// Run the fallback tool on the same URL.
    Fallback,
    /// Report the primary result as final.
    GiveUp,
}

/// Whether a fallback tool may be used for this batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackPolicy {
    /// Fallback enabled by config and not disabled on the command line.
    pub enabled: bool,
    /// Fallback tool was found on the search path.
    pub available: bool,
}

impl FallbackPolicy {
    /// Only a [`OutcomeKind::NoVideo`] primary result is retried, and only when
    /// the fallback is both enabled and available.
    pub fn decide(&self, kind: OutcomeKind) -> FallbackDecision {
        match kind {
            OutcomeKind::NoVideo if self.enabled && self.available => FallbackDecision::Fallback,
            OutcomeKind::Success
            | OutcomeKind::NoVideo
            | OutcomeKind::Failed(_)
            | OutcomeKind::Killed => FallbackDecision::GiveUp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ON: FallbackPolicy = FallbackPolicy {
        enabled: true,
        available: true,
    };

    #[test]
    fn only_no_video_falls_back() {
        assert_eq!(ON.decide(OutcomeKind::NoVideo), FallbackDecision::Fallback);
        assert_eq!(ON.decide(OutcomeKind::Success), FallbackDecision::GiveUp);
        assert_eq!(ON.decide(OutcomeKind::Failed(1)), FallbackDecision::GiveUp);
        assert_eq!(ON.decide(OutcomeKind::Killed), FallbackDecision::GiveUp);
    }

    #[test]
    fn disabled_or_missing_tool_gives_up() {
        let disabled = FallbackPolicy {
            enabled: false,
            available: true,
        };
        let missing = FallbackPolicy {
            enabled: true,
            available: false,
        };
        assert_eq!(disabled.decide(OutcomeKind::NoVideo), FallbackDecision::GiveUp);
        assert_eq!(missing.decide(OutcomeKind::NoVideo), FallbackDecision::GiveUp);
    }
}
