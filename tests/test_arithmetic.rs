//! Integration tests for arithmetic expressions

#[path = "common/mod.rs"]
mod common;
use common::eval;

#[test]
fn test_plus() {
    assert_eq!(eval("5 + 3"), "8");
}

#[test]
fn test_minus() {
    assert_eq!(eval("10 - 3"), "7");
}

#[test]
fn test_mul() {
    assert_eq!(eval("4 * 5"), "20");
}

#[test]
fn test_div_truncates() {
    assert_eq!(eval("10 / 4"), "2");
    assert_eq!(eval("(3 - 10) / 2"), "-3");
}

#[test]
fn test_pow() {
    assert_eq!(eval("2 ^ 5"), "32");
    assert_eq!(eval("2 ^ 0"), "1");
}

#[test]
fn test_precedence() {
    assert_eq!(eval("2 + 3 * 4"), "14");
    assert_eq!(eval("2 * 3 ^ 2"), "18");
    assert_eq!(eval("20 - 2 ^ 2 * 3"), "8");
}

#[test]
fn test_power_is_left_associative() {
    // (2 ^ 3) ^ 2
    assert_eq!(eval("2 ^ 3 ^ 2"), "64");
}

#[test]
fn test_parentheses() {
    assert_eq!(eval("(2 + 3) * 4"), "20");
    assert_eq!(eval("((2 + 3) * (4 - 1)) ^ 2"), "225");
    assert_eq!(eval("8 * 3 + 12 * (4 - 2)"), "48");
}

#[test]
fn test_sign_runs() {
    assert_eq!(eval("5 - -3"), "8");
    assert_eq!(eval("5 --- 3"), "2");
    assert_eq!(eval("5 ---- 3"), "8");
    assert_eq!(eval("5 ----- 3"), "2");
    assert_eq!(eval("5 +++ 3"), "8");
    assert_eq!(eval("5 +- 3"), "2");
    assert_eq!(eval("3 +++ 6 -- 8"), "17");
}

#[test]
fn test_whitespace_is_ignored() {
    assert_eq!(eval("  7*(2+1)  "), "21");
    assert_eq!(eval("1 0 + 1"), "11");
}

#[test]
fn test_single_literal() {
    assert_eq!(eval("42"), "42");
    assert_eq!(eval("(((42)))"), "42");
}

#[test]
fn test_idempotent() {
    let expr = "6 * (7 - 2) / 3 ^ 2";
    assert_eq!(eval(expr), eval(expr));
    assert_eq!(eval(expr), "3");
}

/// Reference for `a op1 b op2 c`: left-associative, higher precedence first
fn reference(a: i64, op1: char, b: i64, op2: char, c: i64) -> Option<i64> {
    fn prec(op: char) -> u8 {
        match op {
            '+' | '-' => 1,
            '*' | '/' => 2,
            _ => 3,
        }
    }
    fn apply(x: i64, op: char, y: i64) -> Option<i64> {
        match op {
            '+' => x.checked_add(y),
            '-' => x.checked_sub(y),
            '*' => x.checked_mul(y),
            '/' => x.checked_div(y),
            _ => x.checked_pow(u32::try_from(y).ok()?),
        }
    }
    if prec(op2) > prec(op1) {
        apply(a, op1, apply(b, op2, c)?)
    } else {
        apply(apply(a, op1, b)?, op2, c)
    }
}

#[test]
fn test_matches_reference_evaluator() {
    let ops = ['+', '-', '*', '/', '^'];
    let values = [1, 2, 3, 7];

    for &op1 in &ops {
        for &op2 in &ops {
            for &a in &values {
                for &b in &values {
                    for &c in &values {
                        let expr = format!("{} {} {} {} {}", a, op1, b, op2, c);
                        // e.g. 7 ^ 7 ^ 7 does not fit in an i64
                        let expected = match reference(a, op1, b, op2, c) {
                            Some(value) => value.to_string(),
                            None => "overflow".to_string(),
                        };
                        assert_eq!(eval(&expr), expected, "{}", expr);
                    }
                }
            }
        }
    }
}

#[test]
fn test_crate_level_eval() {
    assert_eq!(smartcalc::eval("(1 + 2) * 3"), Ok(Some(9)));
    assert_eq!(smartcalc::eval("x = 4"), Ok(None));
    assert_eq!(smartcalc::eval("x"), Err("unknown variable".to_string()));
}
