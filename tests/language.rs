use std::fs;

use mathlang::{ParseErrorKind, SyntaxTree, parse};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (code, should_fail)) in extract_blocks(&content).into_iter().enumerate() {
            count += 1;
            match (parse(&code), should_fail) {
                (Ok(_), false) | (Err(_), true) => {},
                (Ok(tree), true) => {
                    panic!("Example {} in {:?} should fail:\n{}\nParsed as: {}",
                           i + 1,
                           path,
                           code,
                           tree);
                },
                (Err(e), false) => {
                    panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, code, e);
                },
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Returns each fenced `mathlang` block, flagged `true` when it is a
/// `mathlang-error` block that must fail to parse.
fn extract_blocks(content: &str) -> Vec<(String, bool)> {
    let mut blocks = Vec::new();
    let mut current: Option<bool> = None;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if current.is_none() {
            if let Some(tag) = trimmed.strip_prefix("```") {
                current = match tag.trim() {
                    "mathlang" => Some(false),
                    "mathlang-error" => Some(true),
                    _ => None,
                };
                buf.clear();
            }
            continue;
        }
        if trimmed.starts_with("```") {
            if let Some(should_fail) = current.take() {
                blocks.push((buf.clone(), should_fail));
            }
            continue;
        }
        buf.push_str(line);
        buf.push('\n');
    }

    blocks
}

fn eval(src: &str, x: f64, y: f64) -> f64 {
    parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
              .eval(x, y)
}

fn assert_close(src: &str, x: f64, y: f64, expected: f64) {
    let value = eval(src, x, y);
    assert!((value - expected).abs() < 1e-12,
            "{src} at ({x}, {y}) = {value}, expected {expected}");
}

fn error_kind(src: &str) -> ParseErrorKind {
    match parse(src) {
        Ok(tree) => panic!("{src:?} parsed but was expected to fail: {tree}"),
        Err(e) => e.kind(),
    }
}

#[test]
fn decimal_literals_evaluate_to_their_value() {
    for src in ["0", "7", "42", "3.25", "0.001", "100.5", "123456789", "1.", "007"] {
        let expected: f64 = src.parse().unwrap();
        assert_eq!(eval(src, 1.0, 2.0), expected, "literal {src}");
    }
}

#[test]
fn operator_precedence() {
    assert_eq!(eval("1+2*3", 0.0, 0.0), 7.0);
    assert_eq!(eval("(1+2)*3", 0.0, 0.0), 9.0);
    assert_eq!(eval("1+2*3+4", 0.0, 0.0), 11.0);
    assert_eq!(eval("2*3**2", 0.0, 0.0), 18.0);
}

#[test]
fn associativity() {
    assert_eq!(eval("2**3**2", 0.0, 0.0), 512.0);
    assert_eq!(eval("10-3-2", 0.0, 0.0), 5.0);
    assert_eq!(eval("8/4/2", 0.0, 0.0), 1.0);
    assert_close("2//4//2", 0.0, 0.0, 2.0_f64.sqrt());
}

#[test]
fn spaced_doubled_operators_still_pair_up() {
    assert_eq!(eval("2* *3", 0.0, 0.0), 8.0);
    assert_close("x/ /2", 9.0, 0.0, 3.0);
}

#[test]
fn unary_minus_binds_to_primary_only() {
    assert_eq!(eval("-x*3", 2.0, 0.0), -6.0);
    assert_eq!(eval("-2**2", 0.0, 0.0), 4.0);
    assert_eq!(eval("-(2**2)", 0.0, 0.0), -4.0);
    assert_eq!(eval("-(1)+2", 0.0, 0.0), 1.0);
    assert_eq!(eval("-(-1)", 0.0, 0.0), 1.0);
    assert_eq!(eval("-   3", 0.0, 0.0), -3.0);
    assert_eq!(eval("2**-1", 0.0, 0.0), 0.5);
    assert_close("-y", 0.0, 3.0, -3.0);
    assert_close("-cos(0)", 0.0, 0.0, -1.0);
}

#[test]
fn roots_and_powers() {
    assert_close("9**(1/2)", 0.0, 0.0, 3.0);
    assert_close("27//3", 0.0, 0.0, 3.0);
    assert_close("x//2", 16.0, 0.0, 4.0);
    assert!(eval("-8//3", 0.0, 0.0).is_nan());
}

#[test]
fn variables_and_functions() {
    assert_eq!(eval("x+y", 2.0, 3.0), 5.0);
    assert_eq!(eval("X*Y", 2.0, 3.0), 6.0);
    assert_close("sin(0) + cos(0)", 0.0, 0.0, 1.0);
    assert_close("tan(0)", 0.0, 0.0, 0.0);
    assert_close("sin(cos(0))", 0.0, 0.0, 1.0_f64.sin());
    assert_close("sin(2*x) * cos(y)", 0.5, 0.25, 1.0_f64.sin() * 0.25_f64.cos());
}

#[test]
fn juxtaposed_expressions_are_summed() {
    assert_eq!(eval("1 2 3", 0.0, 0.0), 6.0);
    assert_eq!(eval("x y", 2.0, 3.0), 5.0);
    assert_eq!(eval("2x", 5.0, 0.0), 7.0);
    assert_eq!(eval("(1)(2)", 0.0, 0.0), 3.0);
    assert_eq!(eval("", 4.0, 5.0), 0.0);
    assert_eq!(eval("   ", 4.0, 5.0), 0.0);
}

#[test]
fn undefined_operations_are_values_not_errors() {
    assert!(eval("1/0", 0.0, 0.0).is_infinite());
    assert!(eval("1/0", 0.0, 0.0) > 0.0);
    assert!(eval("0/0", 0.0, 0.0).is_nan());
    assert!(eval("1/x", 0.0, 0.0).is_infinite());
}

#[test]
fn malformed_input_fails_with_the_right_kind() {
    assert_eq!(error_kind("(1+2"), ParseErrorKind::InvalidSyntax);
    assert_eq!(error_kind("-(1+2"), ParseErrorKind::InvalidSyntax);
    assert_eq!(error_kind("sin 0"), ParseErrorKind::InvalidSyntax);
    assert_eq!(error_kind("sin(0"), ParseErrorKind::InvalidSyntax);
    assert_eq!(error_kind("abc"), ParseErrorKind::UnknownToken);
    assert_eq!(error_kind("-abc"), ParseErrorKind::UnknownToken);
    assert_eq!(error_kind("x ^ 2"), ParseErrorKind::UnknownToken);
    assert_eq!(error_kind("--1"), ParseErrorKind::InvalidState);
    assert_eq!(error_kind("-"), ParseErrorKind::InvalidState);
    assert_eq!(error_kind("1 +"), ParseErrorKind::InvalidState);
    assert_eq!(error_kind(")"), ParseErrorKind::InvalidState);
    assert_eq!(error_kind("* 2"), ParseErrorKind::InvalidState);
}

#[test]
fn errors_carry_user_facing_text() {
    let err = parse("2 + foo").unwrap_err();
    assert_eq!(err.to_string(), "Unknown token: 'foo'.");

    let err = parse("(1+2").unwrap_err();
    assert_eq!(err.to_string(), "Invalid syntax: expected ')' but found end of input.");
}

#[test]
fn overlong_literal_is_an_invalid_node() {
    let src = "9".repeat(400);
    assert_eq!(error_kind(&src), ParseErrorKind::InvalidNodeCreation);
}

#[test]
fn deep_nesting_is_rejected_gracefully() {
    let depth = 10_000;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(error_kind(&src), ParseErrorKind::NestingTooDeep);

    let src = vec!["2"; depth].join("**");
    assert_eq!(error_kind(&src), ParseErrorKind::NestingTooDeep);

    let src = format!("{}x{}", "sin(".repeat(100), ")".repeat(100));
    assert!(parse(&src).is_ok());
}

#[test]
fn long_operator_chains_are_rejected_gracefully() {
    let src = vec!["x"; 20_000].join("*");
    assert_eq!(error_kind(&src), ParseErrorKind::NestingTooDeep);

    let src = format!("{}1", "1+".repeat(200_000));
    assert_eq!(error_kind(&src), ParseErrorKind::NestingTooDeep);

    let src = format!("{}1", "8/".repeat(5_000));
    assert_eq!(error_kind(&src), ParseErrorKind::NestingTooDeep);

    // An accepted chain evaluates on a small stack.
    let src = vec!["x"; 200].join("+");
    let tree = parse(&src).unwrap();
    let value = std::thread::Builder::new().stack_size(256 * 1024)
                                           .spawn(move || tree.eval(1.5, 0.0))
                                           .unwrap()
                                           .join()
                                           .unwrap();
    assert_eq!(value, 300.0);
}

#[test]
fn reparsing_is_idempotent() {
    let src = "sin(2*x) * cos(y) - x // 3 + -y ** 2";
    let first = parse(src).unwrap();
    let second = parse(src).unwrap();
    assert_eq!(first, second);

    for i in -5..=5 {
        for j in -5..=5 {
            let (x, y) = (f64::from(i) * 0.7, f64::from(j) * 1.3);
            assert_eq!(first.eval(x, y).to_bits(), second.eval(x, y).to_bits());
        }
    }
}

#[test]
fn display_reparses_to_an_equal_tree() {
    for src in ["-2**2", "1 - -x", "sin(x) * -(y + 1) // 2", "10-3-2", "2**3**2", "1 2x"] {
        let tree = parse(src).unwrap();
        let printed = tree.to_string();
        let reparsed = parse(&printed).unwrap_or_else(|e| panic!("{printed:?}: {e}"));
        assert_eq!(tree, reparsed, "{src} printed as {printed}");
    }
}

#[test]
fn trees_evaluate_concurrently() {
    fn assert_shareable<T: Send + Sync>() {}
    assert_shareable::<SyntaxTree>();

    let tree = parse("sin(x) * cos(y)").unwrap();
    let expected: Vec<f64> = (0..100).map(|i| tree.eval(f64::from(i), 1.0)).collect();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                 let values: Vec<f64> = (0..100).map(|i| tree.eval(f64::from(i), 1.0)).collect();
                 assert_eq!(values, expected);
             });
        }
    });
}
