//! Prefix, infix and postfix renderings of an expression tree.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::{ExprNode, ExprTree};

/// Traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// root, left, right
    #[default]
    Prefix,
    /// left, root, right (no parentheses)
    Infix,
    /// left, right, root
    Postfix,
}

impl Order {
    pub const ALL: [Order; 3] = [Order::Prefix, Order::Infix, Order::Postfix];
}

/// Lazy depth-first traversal yielding one symbol per node.
///
/// Uses an explicit stack of `(node, visited)` pairs; a node is emitted when it
/// is popped with `visited == true`.
pub struct Traversal<'a> {
    tree: &'a ExprTree,
    order: Order,
    stack: Vec<(Index, bool)>,
}

impl<'a> Traversal<'a> {
    fn new(tree: &'a ExprTree, order: Order) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, order, stack }
    }
}

impl Iterator for Traversal<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            let Some(node) = self.tree.get_node(current_idx) else {
                unreachable!("node index {current_idx:?} does not resolve");
            };
            if visited {
                return Some(node.symbol());
            }
            match node.children() {
                None => return Some(node.symbol()),
                // pushed in reverse of the emission order
                Some((left, right)) => match self.order {
                    Order::Prefix => {
                        self.stack.push((right, false));
                        self.stack.push((left, false));
                        self.stack.push((current_idx, true));
                    }
                    Order::Infix => {
                        self.stack.push((right, false));
                        self.stack.push((current_idx, true));
                        self.stack.push((left, false));
                    }
                    Order::Postfix => {
                        self.stack.push((current_idx, true));
                        self.stack.push((right, false));
                        self.stack.push((left, false));
                    }
                },
            }
        }
        None
    }
}

impl ExprTree {
    pub fn traverse(&self, order: Order) -> Traversal<'_> {
        Traversal::new(self, order)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn render(&self, order: Order) -> String {
        self.traverse(order).collect()
    }

    pub fn render_prefix(&self) -> String {
        self.render(Order::Prefix)
    }

    pub fn render_infix(&self) -> String {
        self.render(Order::Infix)
    }

    pub fn render_postfix(&self) -> String {
        self.render(Order::Postfix)
    }

    /// Indented view of the tree shape, left child listed before right child.
    #[instrument(level = "trace", skip(self))]
    pub fn to_display_tree(&self) -> Tree<String> {
        match self.root() {
            Some(root_idx) => self.build_display(root_idx),
            None => Tree::new("Empty tree".to_string()),
        }
    }

    fn build_display(&self, node_idx: Index) -> Tree<String> {
        match self.get_node(node_idx) {
            Some(ExprNode::Operator { op, left, right }) => Tree::new(op.to_string())
                .with_leaves([self.build_display(*left), self.build_display(*right)]),
            Some(leaf) => Tree::new(leaf.to_string()),
            None => unreachable!("node index {node_idx:?} does not resolve"),
        }
    }
}
