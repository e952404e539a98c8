//! Enumeration policy types.

use crate::error::SearchError;

/// Match-depth and match-budget configuration for bounded enumeration.
///
/// `min_depth` gates *recording* a match and is independent of — and looser
/// than — the per-pass expansion bound. The enumeration driver starts its
/// first pass at `limit = min_depth`: there is no value in bounding below the
/// minimum match depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumeratePolicyV1 {
    /// Minimum depth at which a goal state is recorded.
    pub min_depth: u32,
    /// Stop as soon as this many matches have been recorded.
    pub max_matches: u64,
}

impl EnumeratePolicyV1 {
    /// Validate that this policy can record at least one match.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidEnumeratePolicy`] if `max_matches` is
    /// zero — such a policy would terminate every pass before recording
    /// anything.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_matches == 0 {
            return Err(SearchError::InvalidEnumeratePolicy {
                detail: "max_matches must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for EnumeratePolicyV1 {
    fn default() -> Self {
        Self {
            min_depth: 0,
            max_matches: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_passes_validation() {
        let policy = EnumeratePolicyV1::default();
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn zero_match_budget_rejected() {
        let policy = EnumeratePolicyV1 {
            max_matches: 0,
            ..EnumeratePolicyV1::default()
        };
        let err = policy.validate().unwrap_err();
        assert!(
            matches!(err, SearchError::InvalidEnumeratePolicy { .. }),
            "expected InvalidEnumeratePolicy, got {err:?}"
        );
    }
}
