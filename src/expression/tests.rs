use crate::expression::ast::Expression;
use crate::expression::operator::Operator;

fn num(n: f64) -> Expression {
    Expression::Number(n)
}

#[test]
fn test_leaf_value_and_render() {
    let expr = num(7.0);
    assert_eq!(expr.value(), 7.0);
    assert_eq!(expr.render(), "7");
    assert_eq!(expr.operator(), None);
}

#[test]
fn test_fractional_leaf_render() {
    assert_eq!(num(2.5).render(), "2.5");
}

#[test]
fn test_nested_render_is_fully_parenthesized() {
    let expr = Expression::binary(
        Operator::Multiply,
        Expression::binary(Operator::Add, num(3.0), num(5.0)),
        num(2.0),
    );
    assert_eq!(expr.render(), "((3 + 5) * 2)");
    assert_eq!(format!("{}", expr), expr.render());
    assert_eq!(expr.value(), 16.0);
    assert_eq!(expr.operator(), Some(Operator::Multiply));
}

#[test]
fn test_classic_eight_eight_three_three() {
    // 8 / (3 - 8 / 3)
    let expr = Expression::binary(
        Operator::Divide,
        num(8.0),
        Expression::binary(
            Operator::Subtract,
            num(3.0),
            Expression::binary(Operator::Divide, num(8.0), num(3.0)),
        ),
    );
    assert!((expr.value() - 24.0).abs() < 1e-9);
    assert_eq!(expr.render(), "(8 / (3 - (8 / 3)))");
}

#[test]
fn test_leaves_read_left_to_right() {
    let expr = Expression::binary(
        Operator::Subtract,
        Expression::binary(Operator::Add, num(1.0), num(2.0)),
        Expression::binary(Operator::Divide, num(3.0), num(4.0)),
    );
    assert_eq!(expr.leaves(), vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(expr.card_count(), 4);
}

#[test]
fn test_division_by_zero_propagates() {
    let expr = Expression::binary(Operator::Divide, num(1.0), num(0.0));
    assert!(expr.value().is_infinite());

    let expr = Expression::binary(Operator::Divide, num(0.0), num(0.0));
    assert!(expr.value().is_nan());
}
