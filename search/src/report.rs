//! `SearchReportV1`: per-pass audit artifact.
//!
//! The normative observability surface is the ordered list of
//! [`PassRecordV1`] entries — one per bounded pass, in execution order —
//! plus the termination reason. Drivers return a report alongside their
//! outcome so callers can audit how deep the search went and why it stopped.

/// The complete audit trail of one driver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReportV1 {
    /// Ordered bounded-pass records (normative decision surface).
    pub passes: Vec<PassRecordV1>,
    /// Why the driver stopped.
    pub termination: TerminationReasonV1,
    /// Total frontier pops across all passes.
    pub total_expansions: u64,
    /// Peak frontier size across all passes.
    pub frontier_high_water: u64,
}

/// Aggregate record of a single bounded pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassRecordV1 {
    /// The depth bound this pass ran under.
    pub limit: u32,
    /// Frontier pops during this pass.
    pub expansions: u64,
    /// Nodes pruned purely because they reached the bound.
    pub pruned: u64,
    /// Matches recorded during this pass (always 0 for single-goal passes;
    /// the goal itself is reported via the termination reason).
    pub matches_recorded: u64,
}

/// Why a driver run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A goal node was found at the given depth (single-goal driver).
    GoalReached { depth: u32 },
    /// A pass completed with no pruning: the entire reachable space was
    /// exhausted, so deeper bounds cannot help. Not an error — a negative
    /// result.
    SpaceExhausted,
    /// The enumeration accumulator reached its match budget.
    MatchBudgetReached { matches: u64 },
}

impl SearchReportV1 {
    /// Convert to a `serde_json::Value` for serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "passes": self.passes.iter().map(pass_to_json).collect::<Vec<_>>(),
            "termination": termination_to_json(self.termination),
            "total_expansions": self.total_expansions,
            "frontier_high_water": self.frontier_high_water,
        })
    }

    /// Serialize to JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails (it cannot for
    /// this shape; the `Result` mirrors the serializer's signature).
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }
}

fn pass_to_json(p: &PassRecordV1) -> serde_json::Value {
    serde_json::json!({
        "limit": p.limit,
        "expansions": p.expansions,
        "pruned": p.pruned,
        "matches_recorded": p.matches_recorded,
    })
}

fn termination_to_json(t: TerminationReasonV1) -> serde_json::Value {
    match t {
        TerminationReasonV1::GoalReached { depth } => serde_json::json!({
            "kind": "goal_reached",
            "depth": depth,
        }),
        TerminationReasonV1::SpaceExhausted => serde_json::json!({
            "kind": "space_exhausted",
        }),
        TerminationReasonV1::MatchBudgetReached { matches } => serde_json::json!({
            "kind": "match_budget_reached",
            "matches": matches,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_json_shape() {
        let report = SearchReportV1 {
            passes: vec![
                PassRecordV1 {
                    limit: 1,
                    expansions: 3,
                    pruned: 2,
                    matches_recorded: 0,
                },
                PassRecordV1 {
                    limit: 2,
                    expansions: 5,
                    pruned: 0,
                    matches_recorded: 0,
                },
            ],
            termination: TerminationReasonV1::GoalReached { depth: 2 },
            total_expansions: 8,
            frontier_high_water: 4,
        };

        let value = report.to_json_value();
        assert_eq!(value["passes"].as_array().unwrap().len(), 2);
        assert_eq!(value["passes"][0]["limit"], 1);
        assert_eq!(value["passes"][0]["pruned"], 2);
        assert_eq!(value["termination"]["kind"], "goal_reached");
        assert_eq!(value["termination"]["depth"], 2);
        assert_eq!(value["total_expansions"], 8);
        assert_eq!(value["frontier_high_water"], 4);
    }

    #[test]
    fn termination_variants_serialize_distinctly() {
        let exhausted = termination_to_json(TerminationReasonV1::SpaceExhausted);
        assert_eq!(exhausted["kind"], "space_exhausted");

        let budget = termination_to_json(TerminationReasonV1::MatchBudgetReached { matches: 10 });
        assert_eq!(budget["kind"], "match_budget_reached");
        assert_eq!(budget["matches"], 10);
    }

    #[test]
    fn report_serializes_to_bytes() {
        let report = SearchReportV1 {
            passes: Vec::new(),
            termination: TerminationReasonV1::SpaceExhausted,
            total_expansions: 0,
            frontier_high_water: 1,
        };
        let bytes = report.to_json_bytes().unwrap();
        assert!(!bytes.is_empty());
    }
}
