//! Depth-limited search and the iterative-deepening drivers.

use std::rc::Rc;

use crate::error::SearchError;
use crate::frontier::LifoFrontier;
use crate::node::{expand, SearchNodeV1};
use crate::policy::EnumeratePolicyV1;
use crate::problem::Problem;
use crate::report::{PassRecordV1, SearchReportV1, TerminationReasonV1};

/// Tagged outcome of a bounded pass (and of the single-goal driver).
///
/// A tagged enum rather than sentinel values compared by identity: a
/// legitimate state can never collide with `Failure` or `Cutoff` because
/// they are distinct variants, not distinguished states.
#[derive(Debug, Clone)]
pub enum SearchOutcomeV1<S, A> {
    /// A goal node was found. Short-circuits the current and all future
    /// bounded passes.
    Goal(Rc<SearchNodeV1<S, A>>),
    /// The entire bounded space was exhausted with no pruning and no goal.
    /// Increasing the bound cannot help.
    Failure,
    /// The pass exhausted its frontier, but at least one node was pruned
    /// purely because it reached the depth bound — a larger bound might
    /// still find a goal. Never surfaced by the drivers; internal retry
    /// signal only.
    Cutoff,
}

impl<S, A> SearchOutcomeV1<S, A> {
    /// Returns `true` if this outcome carries a goal node.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        matches!(self, Self::Goal(_))
    }

    /// The goal node, if this outcome carries one.
    #[must_use]
    pub fn goal_node(&self) -> Option<&Rc<SearchNodeV1<S, A>>> {
        match self {
            Self::Goal(node) => Some(node),
            _ => None,
        }
    }
}

/// Result of a single-goal driver run.
#[derive(Debug)]
pub struct SearchResult<S, A> {
    /// `Goal(..)` or `Failure` — the driver never surfaces `Cutoff`.
    pub outcome: SearchOutcomeV1<S, A>,
    /// The complete per-pass audit trail.
    pub report: SearchReportV1,
}

impl<S, A> SearchResult<S, A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.outcome.is_goal()
    }
}

/// Result of an enumeration driver run.
#[derive(Debug)]
pub struct EnumerationResult<S> {
    /// Matching states, at most `max_matches`, each found at depth ≥
    /// `min_depth`.
    pub matches: Vec<S>,
    /// The complete per-pass audit trail.
    pub report: SearchReportV1,
}

/// One bounded depth-first pass.
///
/// Pops from a LIFO frontier seeded with the root. On each pop: goal check
/// first (so a goal is returned regardless of the bound), then the depth
/// gate — a node at `depth >= limit` is pruned and **never expanded**;
/// otherwise its children are pushed.
///
/// # Traversal order
///
/// Children are pushed in *reverse* `actions` order, so the pop sequence
/// visits them left-to-right exactly as [`Problem::actions`] returned them.
/// Of two same-depth goals, the one reached through the earlier action is
/// found first. This is the engine's documented traversal contract.
#[must_use]
pub fn depth_limited_search<P: Problem>(
    problem: &P,
    limit: u32,
) -> SearchOutcomeV1<P::State, P::Action> {
    bounded_pass(problem, limit).0
}

fn bounded_pass<P: Problem>(
    problem: &P,
    limit: u32,
) -> (SearchOutcomeV1<P::State, P::Action>, PassRecordV1, u64) {
    let mut frontier = LifoFrontier::seeded(SearchNodeV1::root(problem.initial()));
    let mut record = PassRecordV1 {
        limit,
        expansions: 0,
        pruned: 0,
        matches_recorded: 0,
    };

    while let Some(node) = frontier.pop() {
        record.expansions += 1;

        if problem.is_goal(&node.state) {
            let high_water = frontier.high_water();
            return (SearchOutcomeV1::Goal(node), record, high_water);
        }

        if node.depth() >= limit {
            record.pruned += 1;
            continue;
        }

        push_children(problem, &node, &mut frontier);
    }

    let outcome = if record.pruned > 0 {
        SearchOutcomeV1::Cutoff
    } else {
        SearchOutcomeV1::Failure
    };
    let high_water = frontier.high_water();
    (outcome, record, high_water)
}

/// Push the children of `node` in reverse `actions` order (see the
/// traversal-order contract on [`depth_limited_search`]).
fn push_children<P: Problem>(
    problem: &P,
    node: &Rc<SearchNodeV1<P::State, P::Action>>,
    frontier: &mut LifoFrontier<P::State, P::Action>,
) {
    let children: Vec<_> = expand(problem, node).collect();
    for child in children.into_iter().rev() {
        frontier.push(child);
    }
}

/// Run single-goal iterative-deepening search.
///
/// Invokes [`depth_limited_search`] for `limit = 1, 2, 3, …` with no a-priori
/// upper bound. The first pass that returns something other than `Cutoff`
/// ends the run: either a goal node, or `Failure` meaning the entire space
/// was exhausted. Terminates whenever the space is finite or a goal exists
/// at some finite depth; for an infinite space with no goal the caller must
/// impose an outer limit.
#[must_use]
pub fn iterative_deepening_search<P: Problem>(problem: &P) -> SearchResult<P::State, P::Action> {
    let mut passes = Vec::new();
    let mut total_expansions = 0;
    let mut frontier_high_water = 0;

    for limit in 1.. {
        let (outcome, record, high_water) = bounded_pass(problem, limit);
        passes.push(record);
        total_expansions += record.expansions;
        frontier_high_water = frontier_high_water.max(high_water);

        match outcome {
            SearchOutcomeV1::Cutoff => {}
            SearchOutcomeV1::Goal(node) => {
                let report = SearchReportV1 {
                    passes,
                    termination: TerminationReasonV1::GoalReached { depth: node.depth() },
                    total_expansions,
                    frontier_high_water,
                };
                return SearchResult {
                    outcome: SearchOutcomeV1::Goal(node),
                    report,
                };
            }
            SearchOutcomeV1::Failure => {
                let report = SearchReportV1 {
                    passes,
                    termination: TerminationReasonV1::SpaceExhausted,
                    total_expansions,
                    frontier_high_water,
                };
                return SearchResult {
                    outcome: SearchOutcomeV1::Failure,
                    report,
                };
            }
        }
    }
    unreachable!("the bound loop only exits by returning")
}

/// How a bounded collect pass ended.
enum CollectPassEnd {
    /// The accumulator reached the match budget mid-pass.
    BudgetReached,
    /// Frontier exhausted; at least one node was pruned by the bound.
    Cutoff,
    /// Frontier exhausted with no pruning: the space is fully explored.
    Exhausted,
}

fn bounded_collect_pass<P>(
    problem: &P,
    limit: u32,
    policy: EnumeratePolicyV1,
    matches: &mut Vec<P::State>,
) -> (CollectPassEnd, PassRecordV1, u64)
where
    P: Problem,
    P::State: Clone,
{
    let mut frontier = LifoFrontier::seeded(SearchNodeV1::root(problem.initial()));
    let mut record = PassRecordV1 {
        limit,
        expansions: 0,
        pruned: 0,
        matches_recorded: 0,
    };

    while let Some(node) = frontier.pop() {
        record.expansions += 1;
        let depth = node.depth();

        // The recording gate (min_depth) is independent of, and looser
        // than, the expansion gate (limit).
        if depth >= policy.min_depth && problem.is_goal(&node.state) {
            matches.push(node.state.clone());
            record.matches_recorded += 1;
            if matches.len() as u64 >= policy.max_matches {
                let high_water = frontier.high_water();
                return (CollectPassEnd::BudgetReached, record, high_water);
            }
        }

        if depth >= limit {
            record.pruned += 1;
            continue;
        }

        push_children(problem, &node, &mut frontier);
    }

    let end = if record.pruned > 0 {
        CollectPassEnd::Cutoff
    } else {
        CollectPassEnd::Exhausted
    };
    let high_water = frontier.high_water();
    (end, record, high_water)
}

/// Run bounded-enumeration iterative-deepening search.
///
/// Collects up to `policy.max_matches` states satisfying
/// [`Problem::is_goal`] at depth ≥ `policy.min_depth`, scanning ever deeper.
/// The first pass runs at `limit = min_depth`; the run stops when the match
/// budget fills or a pass completes without pruning (space exhausted).
///
/// Each pass restarts the accumulator: a pass at bound L re-visits
/// everything shallower passes saw, so carrying entries over would record
/// the same state once per pass. The final pass's accumulator is the result.
///
/// # Errors
///
/// Returns [`SearchError::InvalidEnumeratePolicy`] if the policy fails
/// pre-flight validation. No report is produced in this case.
pub fn iterative_deepening_collect<P>(
    problem: &P,
    policy: EnumeratePolicyV1,
) -> Result<EnumerationResult<P::State>, SearchError>
where
    P: Problem,
    P::State: Clone,
{
    policy.validate()?;

    let mut passes = Vec::new();
    let mut total_expansions = 0;
    let mut frontier_high_water = 0;
    let mut matches = Vec::new();

    for limit in policy.min_depth.. {
        matches.clear();
        let (end, record, high_water) = bounded_collect_pass(problem, limit, policy, &mut matches);
        passes.push(record);
        total_expansions += record.expansions;
        frontier_high_water = frontier_high_water.max(high_water);

        match end {
            CollectPassEnd::Cutoff => {}
            CollectPassEnd::BudgetReached => {
                let report = SearchReportV1 {
                    passes,
                    termination: TerminationReasonV1::MatchBudgetReached {
                        matches: matches.len() as u64,
                    },
                    total_expansions,
                    frontier_high_water,
                };
                return Ok(EnumerationResult { matches, report });
            }
            CollectPassEnd::Exhausted => {
                let report = SearchReportV1 {
                    passes,
                    termination: TerminationReasonV1::SpaceExhausted,
                    total_expansions,
                    frontier_high_water,
                };
                return Ok(EnumerationResult { matches, report });
            }
        }
    }
    unreachable!("the bound loop only exits by returning")
}
