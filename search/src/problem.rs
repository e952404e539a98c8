//! Search problem contract trait.

use crate::node::SearchNodeV1;

/// Trait for domains that support iterative-deepening search.
///
/// A problem is constructed once by the caller and is immutable for the
/// duration of a search. The engine never inspects `State` directly; it only
/// moves through the space via [`actions`](Problem::actions) and
/// [`result`](Problem::result).
///
/// # Contract
///
/// - `actions` must be deterministically ordered: same state → same actions
///   in the same order. Its order is the engine's traversal-order input
///   (see [`crate::search::depth_limited_search`]).
/// - `result` must be deterministic and free of side effects observable by
///   the search.
/// - A live-resource problem (e.g., a real directory tree) must swallow
///   access failures by returning an empty action list; the engine treats an
///   inaccessible state as childless and never sees the underlying error.
/// - The problem must never produce a state that is its own ancestor; the
///   engine relies on ancestor chains being acyclic but does not enforce it.
pub trait Problem {
    /// Opaque position in the state space.
    type State;
    /// Operator connecting a state to a successor state via `result`.
    type Action;

    /// The root state the search starts from.
    fn initial(&self) -> Self::State;

    /// The available operators from `state`, in traversal order.
    ///
    /// May be empty (terminal state, or inaccessible live resource).
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply `action` to `state`, producing the successor state.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Test whether `state` satisfies the goal.
    ///
    /// Defaults to `false`: lookup problems override this with equality
    /// against their goal descriptor, enumeration problems with a predicate.
    fn is_goal(&self, _state: &Self::State) -> bool {
        false
    }

    /// Cost of taking `action` from `s` to `s1`. Defaults to `1.0`.
    ///
    /// Accumulated into [`SearchNodeV1::path_cost`] for completeness;
    /// iterative deepening never consults cost for control decisions.
    fn action_cost(&self, _s: &Self::State, _a: &Self::Action, _s1: &Self::State) -> f64 {
        1.0
    }

    /// Heuristic estimate at `node`. Defaults to `0.0`.
    ///
    /// Reserved for heuristic-guided variants; never called by the
    /// iterative-deepening drivers in this crate.
    fn h(&self, _node: &SearchNodeV1<Self::State, Self::Action>) -> f64 {
        0.0
    }
}
