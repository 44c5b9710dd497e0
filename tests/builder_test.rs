//! Tests for ExprBuilder

use rstest::rstest;

use exptree::domain::{build, DomainError, ExprBuilder, ExprNode, Operator};
use exptree::util::testing;

const SAMPLE: &str = "+-+7*/935/82*/625";

// ============================================================
// Well-formed input
// ============================================================

#[rstest]
#[case("0", 0)]
#[case("5", 5)]
#[case("9", 9)]
fn given_single_digit_when_building_then_root_is_leaf(#[case] input: &str, #[case] digit: u8) {
    testing::init_test_setup();

    let tree = build(input).unwrap();

    assert_eq!(tree.root_node(), Some(&ExprNode::Leaf(digit)));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.depth(), 1);
}

#[test]
fn given_sample_expression_when_building_then_shape_matches() {
    let tree = build(SAMPLE).unwrap();

    assert_eq!(tree.len(), SAMPLE.len());
    assert_eq!(tree.depth(), 6);

    let Some(&ExprNode::Operator { op, left, right }) = tree.root_node() else {
        panic!("root must be an operator");
    };
    assert_eq!(op, Operator::Add);
    assert_eq!(tree.get_node(left).map(ExprNode::symbol), Some('-'));
    assert_eq!(tree.get_node(right).map(ExprNode::symbol), Some('*'));
}

#[test]
fn given_operator_when_building_then_first_operand_is_left_child() {
    let tree = build("/82").unwrap();

    let (left, right) = tree.root_node().and_then(ExprNode::children).unwrap();
    assert_eq!(tree.get_node(left), Some(&ExprNode::Leaf(8)));
    assert_eq!(tree.get_node(right), Some(&ExprNode::Leaf(2)));
}

// ============================================================
// Errors
// ============================================================

#[test]
fn given_empty_string_when_building_then_fails_with_empty_expression() {
    let err = build("").unwrap_err();

    assert_eq!(err, DomainError::EmptyExpression);
    assert_eq!(err.to_string(), "Expression string cant be null or empty");
}

#[rstest]
#[case("+1a", 'a', 2)]
#[case("+ 12", ' ', 1)]
#[case("x", 'x', 0)]
#[case("+(12", '(', 1)]
fn given_invalid_character_when_building_then_reports_it(
    #[case] input: &str,
    #[case] character: char,
    #[case] position: usize,
) {
    let err = build(input).unwrap_err();

    assert_eq!(err, DomainError::InvalidCharacter { character, position });
    assert_eq!(
        err.to_string(),
        format!("Invalid character in expression '{character}'")
    );
    assert_eq!(err.position(), Some(position));
}

#[test]
fn given_rightmost_invalid_character_when_building_then_it_is_reported_first() {
    // the scan runs from the end, so 'b' is seen before 'a'
    let err = build("a+1b").unwrap_err();

    assert_eq!(
        err,
        DomainError::InvalidCharacter {
            character: 'b',
            position: 3
        }
    );
}

#[rstest]
#[case("+1", '+', 0)]
#[case("+", '+', 0)]
#[case("*+12", '*', 0)]
#[case("1-2", '-', 1)]
fn given_too_few_operands_when_building_then_underflows(
    #[case] input: &str,
    #[case] operator: char,
    #[case] position: usize,
) {
    let err = build(input).unwrap_err();

    assert_eq!(err, DomainError::StackUnderflow { operator, position });
    assert_eq!(err.to_string(), "Underflow");
}

// ============================================================
// Leftover operands (lenient vs strict)
// ============================================================

#[rstest]
#[case("12", '1', 1)]
#[case("+1234", '+', 3)]
#[case("7+12", '7', 1)]
fn given_leftover_operands_when_lenient_then_top_of_stack_is_root(
    #[case] input: &str,
    #[case] root: char,
    #[case] nodes: usize,
) {
    let tree = ExprBuilder::new().build(input).unwrap();

    assert_eq!(tree.root_node().map(ExprNode::symbol), Some(root));
    assert_eq!(tree.len(), nodes);
    assert_eq!(tree.render_prefix().len(), nodes);
}

#[rstest]
#[case("12", 1)]
#[case("+1234", 2)]
#[case("7+12", 1)]
fn given_leftover_operands_when_strict_then_fails(#[case] input: &str, #[case] leftover: usize) {
    let err = ExprBuilder::strict().build(input).unwrap_err();

    assert_eq!(err, DomainError::MalformedExpression { leftover });
}

#[test]
fn given_well_formed_input_when_strict_then_builds() {
    let tree = ExprBuilder::strict().build(SAMPLE).unwrap();

    assert_eq!(tree.render_prefix(), SAMPLE);
}
