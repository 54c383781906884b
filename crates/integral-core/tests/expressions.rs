// File: crates/integral-core/tests/expressions.rs
// Purpose: Sandboxed expression grammar, whitelist resolution and absent-value semantics.

use integral_core::{ExprError, Expression, MAX_NESTING, MAX_SOURCE_LEN};

fn eval(src: &str, x: f64) -> Option<f64> {
    Expression::parse(src).expect("parses").eval_at(x)
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(eval("1 + 2 * 3", 0.0), Some(7.0));
    assert_eq!(eval("(1 + 2) * 3", 0.0), Some(9.0));
    assert_eq!(eval("2 ^ 3 ^ 2", 0.0), Some(512.0));
    assert_eq!(eval("-x^2", 3.0), Some(-9.0));
    assert_eq!(eval("x ** 2 - 7 % 4", 3.0), Some(6.0));
    assert_eq!(eval("10 / 4", 0.0), Some(2.5));
}

#[test]
fn functions_and_constants() {
    assert_eq!(eval("sin(0) + cos(0)", 0.0), Some(1.0));
    assert_eq!(eval("Math.max(x, 2, Math.abs(-5))", 1.0), Some(5.0));
    assert_eq!(eval("pow(2, x)", 10.0), Some(1024.0));
    assert!((eval("Math.PI", 0.0).unwrap_or_default() - std::f64::consts::PI).abs() < 1e-15);
    assert!((eval("log(e)", 0.0).unwrap_or_default() - 1.0).abs() < 1e-15);
}

#[test]
fn non_finite_results_are_absent() {
    assert_eq!(eval("1 / x", 0.0), None);
    assert_eq!(eval("sqrt(x)", -1.0), None);
    assert_eq!(eval("ln(x)", 0.0), None);
    // an intermediate infinity can still end finite
    assert_eq!(eval("1 / (1 / x)", 0.0), Some(0.0));
}

#[test]
fn absent_x_propagates() {
    let e = Expression::parse("x + 1").expect("parses");
    assert_eq!(e.evaluate(None), None);
    let c = Expression::parse("2 * pi").expect("parses");
    assert!(!c.uses_x());
    assert!(c.evaluate(None).is_some());
}

#[test]
fn rejects_unknown_names_and_bad_arity() {
    assert_eq!(Expression::parse("y + 1"), Err(ExprError::UnknownName("y".into())));
    assert_eq!(Expression::parse("alert(x)"), Err(ExprError::UnknownFunction("alert".into())));
    assert!(matches!(Expression::parse("pow(x)"), Err(ExprError::Arity { got: 1, .. })));
    assert!(matches!(Expression::parse("min()"), Err(ExprError::Arity { got: 0, .. })));
}

#[test]
fn rejects_host_code_and_garbage() {
    assert_eq!(Expression::parse("   "), Err(ExprError::Empty));
    assert!(matches!(Expression::parse("x; while(true){}"), Err(ExprError::Syntax { .. })));
    assert!(matches!(Expression::parse("Math.constructor(x)"), Err(ExprError::UnknownFunction(_))));
    assert!(matches!(Expression::parse("2 +"), Err(ExprError::Syntax { .. })));
}

#[test]
fn syntax_error_points_at_column() {
    match Expression::parse("x + ) 1") {
        Err(ExprError::Syntax { column, .. }) => assert!(column >= 2),
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn runaway_nesting_is_rejected_not_fatal() {
    let parens = format!("{}x{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(Expression::parse(&parens), Err(ExprError::TooDeep { limit: MAX_NESTING }));

    let signs = format!("{}x", "-".repeat(500));
    assert_eq!(Expression::parse(&signs), Err(ExprError::TooDeep { limit: MAX_NESTING }));

    let towers = format!("{}2", "2^".repeat(100));
    assert_eq!(Expression::parse(&towers), Err(ExprError::TooDeep { limit: MAX_NESTING }));

    let calls = format!("{}x{}", "abs(".repeat(100), ")".repeat(100));
    assert_eq!(Expression::parse(&calls), Err(ExprError::TooDeep { limit: MAX_NESTING }));

    // far past the length cap; rejected before any recursion
    let huge = format!("{}x{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(Expression::parse(&huge), Err(ExprError::TooLong { limit: MAX_SOURCE_LEN }));
}

#[test]
fn ordinary_nesting_still_parses() {
    let nested = format!("{}x{}", "(".repeat(20), ")".repeat(20));
    assert_eq!(eval(&nested, 3.0), Some(3.0));
    assert_eq!(eval("-(-(-(x)))", 2.0), Some(-2.0));
}

#[test]
fn long_sums_up_to_the_length_cap() {
    let sum = format!("{}x", "x+".repeat(500));
    assert!(sum.len() <= MAX_SOURCE_LEN);
    assert_eq!(eval(&sum, 1.0), Some(501.0));

    let too_long = format!("{}x", "x+".repeat(600));
    assert_eq!(Expression::parse(&too_long), Err(ExprError::TooLong { limit: MAX_SOURCE_LEN }));
}
