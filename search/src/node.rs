//! Core search-tree node type and node expansion.

use std::rc::Rc;

use crate::problem::Problem;

/// An immutable node in the search tree.
///
/// The parent link is a shared, read-only ancestor reference: every child
/// holds an `Rc` to the node that expanded it, so all descendants share one
/// ancestor chain without deep copies. A node is created exactly once (at
/// expansion time, or as the root) and never mutated; it is dropped when no
/// frontier entry or descendant references it.
///
/// Depth is derived from the parent chain, never stored.
#[derive(Debug, Clone)]
pub struct SearchNodeV1<S, A> {
    /// The state this node represents.
    pub state: S,
    /// Parent node (`None` for the root).
    pub parent: Option<Rc<SearchNodeV1<S, A>>>,
    /// The action that produced this node from its parent (`None` for the root).
    pub action: Option<A>,
    /// Cumulative path cost from the root (sum of `action_cost` along the chain).
    ///
    /// Accumulated for completeness; never consulted for control decisions.
    pub path_cost: f64,
}

impl<S, A> SearchNodeV1<S, A> {
    /// Construct the root node for `state`.
    #[must_use]
    pub fn root(state: S) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            action: None,
            path_cost: 0.0,
        })
    }

    /// Tree depth: number of actions from the root to this node.
    ///
    /// Derived by walking the parent chain (root = 0). The chain is finite
    /// and acyclic by construction, so this always terminates.
    #[must_use]
    pub fn depth(&self) -> u32 {
        let mut depth = 0;
        let mut current = self.parent.as_deref();
        while let Some(node) = current {
            depth += 1;
            current = node.parent.as_deref();
        }
        depth
    }

    /// Reconstruct the root-to-here state sequence.
    #[must_use]
    pub fn path_states(&self) -> Vec<S>
    where
        S: Clone,
    {
        let mut states = vec![self.state.clone()];
        let mut current = self.parent.as_deref();
        while let Some(node) = current {
            states.push(node.state.clone());
            current = node.parent.as_deref();
        }
        states.reverse();
        states
    }

    /// Reconstruct the root-to-here action sequence.
    ///
    /// The root contributes no action, so the result has exactly
    /// `self.depth()` entries. Replaying these through
    /// [`Problem::result`] from the initial state reproduces `self.state`.
    #[must_use]
    pub fn path_actions(&self) -> Vec<A>
    where
        A: Clone,
    {
        let mut actions = Vec::new();
        let mut current = Some(self);
        while let Some(node) = current {
            if let Some(action) = &node.action {
                actions.push(action.clone());
            }
            current = node.parent.as_deref();
        }
        actions.reverse();
        actions
    }
}

/// Lazily produce the children of `node` under `problem`.
///
/// For each action in `problem.actions(node.state)` order, applies
/// [`Problem::result`] and yields a fresh child whose parent is `node` and
/// whose `path_cost` adds [`Problem::action_cost`]. The iterator is finite,
/// non-restartable, and preserves the `actions` order exactly — that order
/// is the traversal-order input of
/// [`depth_limited_search`](crate::search::depth_limited_search).
pub fn expand<'a, P>(
    problem: &'a P,
    node: &Rc<SearchNodeV1<P::State, P::Action>>,
) -> impl Iterator<Item = Rc<SearchNodeV1<P::State, P::Action>>> + 'a
where
    P: Problem,
    P::State: 'a,
    P::Action: 'a,
{
    let actions = problem.actions(&node.state);
    let node = Rc::clone(node);
    actions.into_iter().map(move |action| {
        let next = problem.result(&node.state, &action);
        let path_cost = node.path_cost + problem.action_cost(&node.state, &action, &next);
        Rc::new(SearchNodeV1 {
            state: next,
            parent: Some(Rc::clone(&node)),
            action: Some(action),
            path_cost,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counting problem over `u32`: from n, actions `+1` and `+2` lead to
    /// n+1 and n+2.
    struct Counting;

    impl Problem for Counting {
        type State = u32;
        type Action = u32;

        fn initial(&self) -> u32 {
            0
        }

        fn actions(&self, _state: &u32) -> Vec<u32> {
            vec![1, 2]
        }

        fn result(&self, state: &u32, action: &u32) -> u32 {
            state + action
        }
    }

    #[test]
    fn root_has_depth_zero_and_no_action() {
        let root = SearchNodeV1::<u32, u32>::root(0);
        assert_eq!(root.depth(), 0);
        assert!(root.action.is_none());
        assert!(root.parent.is_none());
        assert_eq!(root.path_cost, 0.0);
    }

    #[test]
    fn depth_is_derived_from_parent_chain() {
        let problem = Counting;
        let root = SearchNodeV1::root(problem.initial());
        let child = expand(&problem, &root).next().unwrap();
        let grandchild = expand(&problem, &child).next().unwrap();
        assert_eq!(child.depth(), 1);
        assert_eq!(grandchild.depth(), 2);
    }

    #[test]
    fn expand_preserves_actions_order_and_accumulates_cost() {
        let problem = Counting;
        let root = SearchNodeV1::root(problem.initial());
        let children: Vec<_> = expand(&problem, &root).collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].state, 1);
        assert_eq!(children[1].state, 2);
        assert_eq!(children[0].action, Some(1));
        assert_eq!(children[0].path_cost, 1.0);
        assert_eq!(children[1].path_cost, 1.0);
    }

    #[test]
    fn non_unit_action_cost_is_accumulated() {
        struct Weighted;

        impl Problem for Weighted {
            type State = u32;
            type Action = u32;

            fn initial(&self) -> u32 {
                0
            }

            fn actions(&self, _state: &u32) -> Vec<u32> {
                vec![1]
            }

            fn result(&self, state: &u32, action: &u32) -> u32 {
                state + action
            }

            fn action_cost(&self, _s: &u32, _a: &u32, _s1: &u32) -> f64 {
                2.5
            }
        }

        let problem = Weighted;
        let root = SearchNodeV1::root(problem.initial());
        let child = expand(&problem, &root).next().unwrap();
        let grandchild = expand(&problem, &child).next().unwrap();
        assert_eq!(grandchild.path_cost, 5.0);
    }

    #[test]
    fn siblings_share_the_ancestor_chain() {
        let problem = Counting;
        let root = SearchNodeV1::root(problem.initial());
        let children: Vec<_> = expand(&problem, &root).collect();
        let a = children[0].parent.as_ref().unwrap();
        let b = children[1].parent.as_ref().unwrap();
        assert!(Rc::ptr_eq(a, b), "siblings must share one parent Rc");
    }

    #[test]
    fn path_reconstruction_round_trips_through_result() {
        let problem = Counting;
        let root = SearchNodeV1::root(problem.initial());
        let child = expand(&problem, &root).nth(1).unwrap();
        let leaf = expand(&problem, &child).next().unwrap();

        assert_eq!(leaf.path_states(), vec![0, 2, 3]);

        let mut state = problem.initial();
        for action in leaf.path_actions() {
            state = problem.result(&state, &action);
        }
        assert_eq!(state, leaf.state);
    }
}
