//! Identifier lookup over an in-memory binary tree.
//!
//! Each tree node carries a unique user identifier; the world answers
//! "does a node with this identifier exist?" via the single-goal
//! iterative-deepening driver.

use std::rc::Rc;

use fathom_search::Problem;

/// A binary tree node with a value and two optional children.
///
/// Trees are built once from the leaves up and shared via `Rc`; nodes are
/// never mutated after construction.
#[derive(Debug, PartialEq, Eq)]
pub struct BinaryTreeNode {
    pub value: u64,
    pub left: Option<Rc<BinaryTreeNode>>,
    pub right: Option<Rc<BinaryTreeNode>>,
}

impl BinaryTreeNode {
    /// A node with no children.
    #[must_use]
    pub fn leaf(value: u64) -> Rc<Self> {
        Self::branch(value, None, None)
    }

    /// A node with the given children.
    #[must_use]
    pub fn branch(
        value: u64,
        left: Option<Rc<BinaryTreeNode>>,
        right: Option<Rc<BinaryTreeNode>>,
    ) -> Rc<Self> {
        Rc::new(Self { value, left, right })
    }
}

/// Lookup world: does a node with `goal` exist in the tree under `root`?
///
/// Actions yield the existing children in fixed (left, then right) order,
/// so the engine's traversal visits left subtrees first.
pub struct UserLookupProblem {
    pub root: Rc<BinaryTreeNode>,
    pub goal: u64,
}

impl Problem for UserLookupProblem {
    type State = Rc<BinaryTreeNode>;
    type Action = Rc<BinaryTreeNode>;

    fn initial(&self) -> Rc<BinaryTreeNode> {
        Rc::clone(&self.root)
    }

    fn actions(&self, state: &Rc<BinaryTreeNode>) -> Vec<Rc<BinaryTreeNode>> {
        let mut moves = Vec::new();
        if let Some(left) = &state.left {
            moves.push(Rc::clone(left));
        }
        if let Some(right) = &state.right {
            moves.push(Rc::clone(right));
        }
        moves
    }

    fn result(&self, _state: &Rc<BinaryTreeNode>, action: &Rc<BinaryTreeNode>) -> Rc<BinaryTreeNode> {
        Rc::clone(action)
    }

    fn is_goal(&self, state: &Rc<BinaryTreeNode>) -> bool {
        state.value == self.goal
    }
}
