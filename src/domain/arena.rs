use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::domain::token::Operator;

/// Tree node: a digit leaf or an operator owning exactly two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprNode {
    /// Single decimal digit, 0-9
    Leaf(u8),
    /// Binary operator; `left` and `right` index into the owning arena
    Operator {
        op: Operator,
        left: Index,
        right: Index,
    },
}

impl ExprNode {
    /// The character this node renders as.
    pub fn symbol(&self) -> char {
        match self {
            // digits are 0-9 by construction
            ExprNode::Leaf(digit) => char::from(b'0' + digit),
            ExprNode::Operator { op, .. } => op.symbol(),
        }
    }

    pub fn children(&self) -> Option<(Index, Index)> {
        match self {
            ExprNode::Leaf(_) => None,
            ExprNode::Operator { left, right, .. } => Some((*left, *right)),
        }
    }

}

impl fmt::Display for ExprNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Arena-based binary expression tree.
///
/// Nodes are addressed by generational index. Each node has exactly one
/// parent, so the tree has no cycles or shared subtrees. The tree is
/// read-only once the builder hands it out.
#[derive(Debug, Default)]
pub struct ExprTree {
    /// Arena storage for all tree nodes
    arena: Arena<ExprNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl ExprTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub(crate) fn insert_leaf(&mut self, digit: u8) -> Index {
        self.arena.insert(ExprNode::Leaf(digit))
    }

    pub(crate) fn insert_operator(&mut self, op: Operator, left: Index, right: Index) -> Index {
        self.arena.insert(ExprNode::Operator { op, left, right })
    }

    pub(crate) fn set_root(&mut self, idx: Index) {
        self.root = Some(idx);
    }

    /// Remove a whole subtree from the arena.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn prune(&mut self, idx: Index) {
        let mut stack = vec![idx];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.arena.remove(current) {
                if let Some((left, right)) = node.children() {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
    }

    pub fn get_node(&self, idx: Index) -> Option<&ExprNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn root_node(&self) -> Option<&ExprNode> {
        self.root.and_then(|idx| self.get_node(idx))
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        match self.get_node(node_idx) {
            Some(ExprNode::Operator { left, right, .. }) => {
                1 + self.calculate_depth(*left).max(self.calculate_depth(*right))
            }
            Some(ExprNode::Leaf(_)) => 1,
            None => unreachable!("node index {node_idx:?} does not resolve"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plus_one_two() -> ExprTree {
        let mut tree = ExprTree::new();
        let one = tree.insert_leaf(1);
        let two = tree.insert_leaf(2);
        let plus = tree.insert_operator(Operator::Add, one, two);
        tree.set_root(plus);
        tree
    }

    #[test]
    fn test_empty_tree() {
        let tree = ExprTree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.depth(), 0);
        assert!(tree.root_node().is_none());
    }

    #[test]
    fn test_insert_and_depth() {
        let tree = plus_one_two();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.depth(), 2);
        let root = tree.root_node().unwrap();
        assert_eq!(root.symbol(), '+');
        let (left, right) = root.children().unwrap();
        assert_eq!(tree.get_node(left), Some(&ExprNode::Leaf(1)));
        assert_eq!(tree.get_node(right), Some(&ExprNode::Leaf(2)));
    }

    #[test]
    fn test_prune_removes_whole_subtree() {
        let mut tree = plus_one_two();
        let stray = tree.insert_leaf(9);
        let other = tree.insert_leaf(8);
        let stray_op = tree.insert_operator(Operator::Mul, stray, other);
        assert_eq!(tree.len(), 6);
        tree.prune(stray_op);
        assert_eq!(tree.len(), 3);
        assert!(tree.get_node(stray).is_none());
        assert!(tree.get_node(other).is_none());
    }

    #[test]
    fn test_leaf_symbol() {
        for digit in 0..=9u8 {
            let ch = ExprNode::Leaf(digit).symbol();
            assert_eq!(ch.to_digit(10), Some(u32::from(digit)));
        }
    }
}
