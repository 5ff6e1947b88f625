//! Round phases and game outcomes.

use serde::{Deserialize, Serialize};

/// Where the current round stands.
///
/// `Validating` and `Resolving` are transient: the engine runs them inside
/// a single call, so a session observed between calls is in one of the
/// other phases. Renderers may still use them to label their own pacing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum RoundPhase {
    /// Nothing selected.
    Idle,
    /// Some columns hold a pick.
    Selecting,
    /// Every column holds a pick; toggles are locked until validation.
    Complete,
    /// The candidate is being checked.
    Validating,
    /// Gravity and refill are running.
    Resolving,
    /// The game has ended.
    GameOver,
}

/// Why a game ended.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum FinishReason {
    /// No list word is formable from the visible grid.
    NoWordsRemain,
    /// An external timer expired.
    TimeExpired,
}

impl FinishReason {
    /// Human-readable description.
    pub fn label(&self) -> &'static str {
        match self {
            FinishReason::NoWordsRemain => "No words remain",
            FinishReason::TimeExpired => "Time expired",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_reason_has_distinct_label() {
        let labels: HashSet<_> = FinishReason::iter().map(|r| r.label()).collect();
        assert_eq!(labels.len(), FinishReason::iter().count());
        assert!(labels.iter().all(|label| !label.is_empty()));
    }

    #[test]
    fn test_phase_names() {
        let names: Vec<String> = RoundPhase::iter().map(|p| p.to_string()).collect();
        assert_eq!(
            names,
            ["Idle", "Selecting", "Complete", "Validating", "Resolving", "GameOver"]
        );
    }
}
