//! End-to-end runs: source text through normalization, scanning and
//! evaluation.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use splice_eval::{run, Interpreter, Value};
use splice_scan::{ScanConfig, ScanErrorKind, ScanResult, SourceBuffer};

fn run_script(source: &str) -> ScanResult<Vec<Value>> {
    let buffer = SourceBuffer::from_script(source, Some("test.splice"), ScanConfig::default());
    run(&buffer, &mut Interpreter::new())
}

fn rendered(source: &str) -> Vec<String> {
    run_script(source)
        .expect("script should run")
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn assignments_and_expressions() {
    let source = "\
// totals
a = {1, 2, 3};
b = sum(a) * 10;
b;
\"total: \" + b;
";
    assert_eq!(rendered(source), vec!["60", "total: 60"]);
}

#[test]
fn statements_span_lines() {
    let source = "\
total = sum(1,
            2, 3);
total;
";
    assert_eq!(rendered(source), vec!["6"]);
}

#[test]
fn quoted_text_survives_normalization() {
    let source = "greeting = \"hello,  world\"; /* block */ size(greeting);\n";
    assert_eq!(rendered(source), vec!["13"]);
}

#[test]
fn nested_lists_and_indices() {
    let source = "m = {{1, 2}, {3, 4}};\nm[1][1] + m[0][0];\nm[1];\n";
    assert_eq!(rendered(source), vec!["5", "{3, 4}"]);
}

#[test]
fn lazy_first_and_signature() {
    let source = "first(\"kept\", undefined(1, 2), more);\nsignature(x, y, z);\n";
    assert_eq!(rendered(source), vec!["kept", "{x, y, z}"]);
}

#[test]
fn interpreter_state_carries_between_runs() {
    let mut interpreter = Interpreter::new();
    let setup = SourceBuffer::from_script("n = 4;", None, ScanConfig::default());
    assert_eq!(run(&setup, &mut interpreter).unwrap(), vec![]);

    let next = SourceBuffer::from_script("n * n;", None, ScanConfig::default());
    assert_eq!(
        run(&next, &mut interpreter).unwrap(),
        vec![Value::Number(16.0)]
    );
    assert_eq!(interpreter.get("n"), Some(&Value::Number(4.0)));
}

#[test]
fn errors_point_at_original_line() {
    let err = run_script("a = 1;\nb = a + c;\n").unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::UndefinedName { name: "c".into() });
    assert_eq!(
        err.to_string(),
        "variable or function [c] doesn't exist\n  --> test.splice:2: b = a + c;"
    );
}

#[test]
fn errors_inside_indices_are_located() {
    let err = run_script("g = {1, 2};\n\ng[missing];\n").unwrap_err();
    assert_eq!(
        err.kind,
        ScanErrorKind::UndefinedName {
            name: "missing".into()
        }
    );
    let line = err.location.and_then(|location| location.line).unwrap();
    assert_eq!(line.number, 3);
}

#[test]
fn unterminated_quote() {
    let err = run_script("s = \"open;\n").unwrap_err();
    assert!(matches!(err.kind, ScanErrorKind::UnterminatedQuote { .. }));
}

#[test]
fn depth_budget_applies_to_scripts() {
    let config = ScanConfig::default().with_max_depth(2);
    let buffer = SourceBuffer::from_script("x = {{{1}}};", None, config);
    let err = run(&buffer, &mut Interpreter::new()).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NestingTooDeep { limit: 2 });
}

#[test]
fn depth_budget_reaches_into_indices() {
    let config = ScanConfig::default().with_max_depth(2);
    let buffer = SourceBuffer::from_script("x = {1};\nx[size({{{1}}})];", None, config);
    let err = run(&buffer, &mut Interpreter::new()).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NestingTooDeep { limit: 2 });
    let line = err.location.and_then(|location| location.line).unwrap();
    assert_eq!(line.number, 2);
}

#[test]
fn deeply_nested_indices_fail_cleanly() {
    let depth = 20_000;
    let source = format!("a = {{0}};\na{}0{};", "[a".repeat(depth), "]".repeat(depth));
    let err = run_script(&source).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NestingTooDeep { limit: 256 });
}

#[test]
fn long_unary_chains_fail_cleanly() {
    let source = format!("{}1;", "-".repeat(200_000));
    let err = run_script(&source).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NestingTooDeep { limit: 256 });
}

#[test]
fn conditions_and_formatting() {
    let source = "\
n = 3;
n > 2 && n < 5;
concat(\"n=\", n, \"!\");
repeat(\"-\", n);
round(n / 7, 2);
at({1, 2}, n, \"none\");
";
    assert_eq!(rendered(source), vec!["1", "n=3!", "---", "0.43", "none"]);
}
