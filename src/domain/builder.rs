//! Tree builder for turning prefix expressions into expression trees.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::ExprTree;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::token::Token;

/// Constructs expression trees from prefix strings in a single right-to-left pass.
///
/// By default the builder is lenient: when the input leaves more than one
/// subtree on the construction stack (e.g. `"12"`), the top of the stack becomes
/// the root and the rest is discarded. A strict builder rejects such input with
/// [`DomainError::MalformedExpression`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ExprBuilder {
    strict: bool,
}

impl ExprBuilder {
    pub fn new() -> Self {
        Self { strict: false }
    }

    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build a tree from a prefix expression such as `"+12"`.
    #[instrument(level = "trace")]
    pub fn build(&self, expression: &str) -> DomainResult<ExprTree> {
        if expression.is_empty() {
            return Err(DomainError::EmptyExpression);
        }

        let mut tree = ExprTree::new();
        let mut stack: Vec<Index> = Vec::new();
        let last = expression.chars().count() - 1;

        for (offset, ch) in expression.chars().rev().enumerate() {
            let position = last - offset;
            match Token::classify(ch) {
                Some(Token::Digit(digit)) => {
                    stack.push(tree.insert_leaf(digit));
                }
                Some(Token::Operator(op)) => {
                    // reverse scan sees the second operand first, so the first pop is the left child
                    let underflow = DomainError::StackUnderflow {
                        operator: ch,
                        position,
                    };
                    let left = stack.pop().ok_or_else(|| underflow.clone())?;
                    let right = stack.pop().ok_or(underflow)?;
                    stack.push(tree.insert_operator(op, left, right));
                }
                None => {
                    return Err(DomainError::InvalidCharacter {
                        character: ch,
                        position,
                    });
                }
            }
        }

        // non-empty input always leaves at least one node
        let root = stack.pop().ok_or(DomainError::EmptyExpression)?;
        if !stack.is_empty() {
            if self.strict {
                return Err(DomainError::MalformedExpression {
                    leftover: stack.len(),
                });
            }
            for stray in stack.drain(..) {
                tree.prune(stray);
            }
        }
        tree.set_root(root);

        Ok(tree)
    }
}

/// Build with the default lenient builder.
pub fn build(expression: &str) -> DomainResult<ExprTree> {
    ExprBuilder::new().build(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::arena::ExprNode;
    use crate::domain::token::Operator;

    #[test]
    fn test_single_digit_is_leaf_root() {
        let tree = build("7").unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root_node(), Some(&ExprNode::Leaf(7)));
    }

    #[test]
    fn test_first_pop_becomes_left_child() {
        let tree = build("-92").unwrap();
        let root = tree.root_node().unwrap();
        let ExprNode::Operator { op, left, right } = *root else {
            panic!("expected operator root, got {root:?}");
        };
        assert_eq!(op, Operator::Sub);
        assert_eq!(tree.get_node(left), Some(&ExprNode::Leaf(9)));
        assert_eq!(tree.get_node(right), Some(&ExprNode::Leaf(2)));
    }

    #[test]
    fn test_error_positions() {
        assert_eq!(
            build("+1a").unwrap_err(),
            DomainError::InvalidCharacter {
                character: 'a',
                position: 2
            }
        );
        assert_eq!(
            build("+1").unwrap_err(),
            DomainError::StackUnderflow {
                operator: '+',
                position: 0
            }
        );
    }

    #[test]
    fn test_lenient_discards_leftovers() {
        let tree = build("12").unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root_node(), Some(&ExprNode::Leaf(1)));
    }

    #[test]
    fn test_strict_rejects_leftovers() {
        let err = ExprBuilder::strict().build("+1234").unwrap_err();
        assert_eq!(err, DomainError::MalformedExpression { leftover: 2 });
        let err = ExprBuilder::new().with_strict(true).build("12").unwrap_err();
        assert_eq!(err, DomainError::MalformedExpression { leftover: 1 });
    }
}
