//! File lookup over a static filesystem-shaped tree.
//!
//! Each node is a named directory or file with an ordered child list; the
//! world answers "what is the route to this file?" by searching for an
//! exact name match and reconstructing the root-to-goal path from the found
//! node's ancestor chain.

use std::rc::Rc;

use fathom_search::{Problem, SearchNodeV1};

/// A named tree node with children in insertion order.
#[derive(Debug, PartialEq, Eq)]
pub struct FsTreeNode {
    pub name: String,
    pub children: Vec<Rc<FsTreeNode>>,
}

impl FsTreeNode {
    /// A leaf node (a file, or an empty directory).
    #[must_use]
    pub fn file(name: &str) -> Rc<Self> {
        Self::dir(name, Vec::new())
    }

    /// A node with the given children, kept in insertion order.
    #[must_use]
    pub fn dir(name: &str, children: Vec<Rc<FsTreeNode>>) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_owned(),
            children,
        })
    }
}

/// Lookup world: find the node named `goal` under `root`.
pub struct FileLookupProblem {
    pub root: Rc<FsTreeNode>,
    pub goal: String,
}

impl Problem for FileLookupProblem {
    type State = Rc<FsTreeNode>;
    type Action = Rc<FsTreeNode>;

    fn initial(&self) -> Rc<FsTreeNode> {
        Rc::clone(&self.root)
    }

    fn actions(&self, state: &Rc<FsTreeNode>) -> Vec<Rc<FsTreeNode>> {
        state.children.clone()
    }

    fn result(&self, _state: &Rc<FsTreeNode>, action: &Rc<FsTreeNode>) -> Rc<FsTreeNode> {
        Rc::clone(action)
    }

    fn is_goal(&self, state: &Rc<FsTreeNode>) -> bool {
        state.name == self.goal
    }
}

/// The root-to-goal node names, reconstructed from the ancestor chain.
#[must_use]
pub fn route_names(node: &SearchNodeV1<Rc<FsTreeNode>, Rc<FsTreeNode>>) -> Vec<String> {
    node.path_states()
        .iter()
        .map(|state| state.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fathom_search::search::SearchOutcomeV1;
    use fathom_search::iterative_deepening_search;

    /// root → {subdir_1, subdir_2}; subdir_1 → {file_a, subdir_3};
    /// subdir_3 → {file_b, file_d}; subdir_2 → {file_c}.
    fn sample_tree() -> Rc<FsTreeNode> {
        FsTreeNode::dir(
            "root",
            vec![
                FsTreeNode::dir(
                    "subdir_1",
                    vec![
                        FsTreeNode::file("file_a"),
                        FsTreeNode::dir(
                            "subdir_3",
                            vec![FsTreeNode::file("file_b"), FsTreeNode::file("file_d")],
                        ),
                    ],
                ),
                FsTreeNode::dir("subdir_2", vec![FsTreeNode::file("file_c")]),
            ],
        )
    }

    #[test]
    fn reconstructs_route_to_file() {
        let problem = FileLookupProblem {
            root: sample_tree(),
            goal: "file_d".into(),
        };
        let result = iterative_deepening_search(&problem);
        let node = result.outcome.goal_node().unwrap();
        assert_eq!(
            route_names(node),
            vec!["root", "subdir_1", "subdir_3", "file_d"]
        );
    }

    #[test]
    fn missing_file_is_failure() {
        let problem = FileLookupProblem {
            root: sample_tree(),
            goal: "file_z".into(),
        };
        let result = iterative_deepening_search(&problem);
        assert!(matches!(result.outcome, SearchOutcomeV1::Failure));
    }

    #[test]
    fn route_replay_reproduces_found_state() {
        let problem = FileLookupProblem {
            root: sample_tree(),
            goal: "file_d".into(),
        };
        let result = iterative_deepening_search(&problem);
        let node = result.outcome.goal_node().unwrap();

        let mut state = problem.initial();
        for action in node.path_actions() {
            state = problem.result(&state, &action);
        }
        assert!(Rc::ptr_eq(&state, &node.state));
    }
}
