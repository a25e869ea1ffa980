use rdcalc::prelude::*;

#[test]
fn single_number_is_exact() {
    assert_eq!(calc("3").unwrap(), 3.0);
    assert_eq!(calc("0.1").unwrap(), 0.1);
}

#[test]
fn multiplication_before_addition() {
    // 1 + 2 * 3 = 7
    assert_eq!(calc("1+2*3").unwrap(), 7.0);
    assert_eq!(calc("1 + 2 * 3").unwrap(), 7.0);
}

#[test]
fn parentheses_override() {
    // (1 + 2) * 3 = 9
    assert_eq!(calc("(1+2)*3").unwrap(), 9.0);
}

#[test]
fn unary_minus() {
    assert_eq!(calc("--3").unwrap(), 3.0);
    assert_eq!(calc("---3").unwrap(), -3.0);
    assert_eq!(calc("2*-3").unwrap(), -6.0);
    assert_eq!(calc("-(1+1)*3").unwrap(), -6.0);
}

#[test]
fn additive_chains_associate_left() {
    // (10 - 2) - 3, not 10 - (2 - 3)
    assert_eq!(calc("10-2-3").unwrap(), 5.0);
    assert_eq!(calc("2-3-4").unwrap(), -5.0);
    assert_eq!(calc("1-2+3").unwrap(), 2.0);
    assert_eq!(calc("1+2+3+4").unwrap(), 10.0);
}

#[test]
fn multiplicative_chains_associate_left() {
    // (64 / 4) / 2, not 64 / (4 / 2)
    assert_eq!(calc("64/4/2").unwrap(), 8.0);
    assert_eq!(calc("8/2*4").unwrap(), 16.0);
    assert_eq!(calc("2*3/4").unwrap(), 1.5);
    assert_eq!(calc("2*3*4").unwrap(), 24.0);
}

#[test]
fn division_by_zero_is_ieee() {
    assert_eq!(calc("1/0").unwrap(), f64::INFINITY);
    assert_eq!(calc("-1/0").unwrap(), f64::NEG_INFINITY);
    assert!(calc("0/0").unwrap().is_nan());
}

#[test]
fn syntax_errors() {
    assert_eq!(calc("1+").unwrap_err().kind, SyntaxErrorKind::UnexpectedEnd);
    assert_eq!(
        calc("(1+2").unwrap_err().kind,
        SyntaxErrorKind::ExpectedCloseParen
    );

    let err = calc("1@2").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnrecognizedSymbol);
    assert_eq!(err.symbol, Some('@'));
    assert_eq!(err.position, 1);
}

#[test]
fn parsing_is_repeatable() {
    let src = "(1.5 - 2) * -4 / 8 + 3";
    let a = parse(src).unwrap();
    let b = parse(src).unwrap();

    assert_eq!(a, b);
    assert_eq!(evaluate(&a), evaluate(&b));
    assert_eq!(evaluate(&a), 3.25);
}

#[test]
fn trees_are_shareable_across_threads() {
    let expr = std::sync::Arc::new(parse("6*7").unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let expr = expr.clone();
            std::thread::spawn(move || evaluate(&expr))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 42.0);
    }
}

#[test]
fn display_matches_printf() {
    let value = Number::from(calc("10/4").unwrap());

    assert_eq!(value.to_string(), "2.500000");
    assert_eq!(format!("{value:.1}"), "2.5");
}

#[test]
fn long_flat_sum_is_not_nesting() {
    let src = vec!["1"; 1100].join("+");

    assert_eq!(calc(&src).unwrap(), 1100.0);
}
