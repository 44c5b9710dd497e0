//! Numeric evaluation of expression trees.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::{ExprNode, ExprTree};
use crate::domain::error::{DomainError, DomainResult};

impl ExprTree {
    /// Evaluate the tree bottom-up in `f64`.
    ///
    /// Division by zero is not an error: it yields `inf`, `-inf` or `NaN`
    /// exactly like `f64` division does.
    #[instrument(level = "trace", skip(self))]
    pub fn evaluate(&self) -> DomainResult<f64> {
        let root = self.root().ok_or(DomainError::EmptyTree)?;
        Ok(self.evaluate_node(root))
    }

    fn evaluate_node(&self, idx: Index) -> f64 {
        match self.get_node(idx) {
            Some(ExprNode::Leaf(digit)) => f64::from(*digit),
            Some(ExprNode::Operator { op, left, right }) => {
                let left = self.evaluate_node(*left);
                let right = self.evaluate_node(*right);
                op.apply(left, right)
            }
            None => unreachable!(
                "child index {idx:?} does not resolve: every operator owns two live children"
            ),
        }
    }
}

/// Format an evaluation result for the console.
///
/// Without a precision this follows Java's `Double.toString`: plain decimals
/// with at least one fractional digit for `1e-3 <= |v| < 1e7` (`33.0`, `0.25`),
/// scientific notation otherwise (`4.3046721E7`, `1.5241579027587258E-4`).
/// Infinities are spelled out. An explicit precision fixes the number of
/// decimals for finite values.
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if let Some(p) = precision {
        return format!("{value:.p$}");
    }

    let magnitude = value.abs();
    if value == 0.0 || (1e-3..1e7).contains(&magnitude) {
        if value.fract() == 0.0 {
            format!("{value:.1}")
        } else {
            format!("{value}")
        }
    } else {
        // shortest round-trip digits, e.g. "4.3046721e7" or "1e7"
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                format!("{mantissa}E{exponent}")
            }
            Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
            None => scientific,
        }
    }
}
