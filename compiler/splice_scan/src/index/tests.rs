use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::{TestEvaluator, TestValue};
use crate::{ScanConfig, ScanErrorKind, SourceBuffer};

use TestValue::{Num, Tuple};

fn extract(name: &str) -> crate::ScanResult<IndexChain<'_, TestValue>> {
    let outer = SourceBuffer::new("");
    extract_indices(&outer.cursor(), name, &TestEvaluator)
}

#[test]
fn two_groups() {
    let chain = extract("arr[1][2]").unwrap();
    assert_eq!(chain.indices.as_slice(), &[Num(1.0), Num(2.0)]);
    assert_eq!(chain.stripped_name, "arr");
    assert_eq!(chain.end, 9);
}

#[test]
fn no_suffix() {
    let chain = extract("plain").unwrap();
    assert!(chain.is_empty());
    assert_eq!(chain.stripped_name, "plain");
    assert_eq!(chain.end, 0);
}

#[test]
fn trailing_text_after_suffix() {
    let chain = extract("a[0]+1").unwrap();
    assert_eq!(chain.indices.as_slice(), &[Num(0.0)]);
    assert_eq!(chain.end, 4);
}

#[test]
fn missing_close_is_malformed() {
    let err = extract("a[1").unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::MalformedIndex { name: "a[1".into() });
}

#[test]
fn empty_group_is_malformed() {
    let err = extract("a[]").unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::MalformedIndex { name: "a[]".into() });
}

fn grid() -> TestValue {
    Tuple(vec![
        TestValue::nums(&[1.0, 2.0, 3.0]),
        TestValue::nums(&[4.0]),
    ])
}

#[test]
fn descends_levels() {
    let root = grid();
    assert_eq!(apply_indices(&root, &[Num(0.0), Num(2.0)]), Ok(Num(3.0)));
    assert_eq!(apply_indices(&root, &[Num(1.0)]), Ok(TestValue::nums(&[4.0])));
    assert_eq!(apply_indices(&root, &[]), Ok(root.clone()));
}

#[test]
fn jagged_levels_check_their_own_length() {
    let err = apply_indices(&grid(), &[Num(1.0), Num(2.0)]).unwrap_err();
    assert_eq!(
        err.kind,
        ScanErrorKind::IndexOutOfRange {
            index: "2".into(),
            size: 1
        }
    );
}

#[test]
fn out_of_range_reports_index_and_size() {
    let pair = TestValue::nums(&[1.0, 2.0]);
    let err = apply_indices(&pair, &[Num(5.0)]).unwrap_err();
    assert_eq!(
        err.kind,
        ScanErrorKind::IndexOutOfRange {
            index: "5".into(),
            size: 2
        }
    );
    assert_eq!(err.to_string(), "unknown index [5] for tuple of size 2");
}

#[test]
fn negative_and_non_numeric_indices() {
    let pair = TestValue::nums(&[1.0, 2.0]);
    assert!(apply_indices(&pair, &[Num(-1.0)]).is_err());
    assert!(apply_indices(&pair, &[TestValue::text("x")]).is_err());
}

#[test]
fn scalar_level_is_not_a_tuple() {
    let err = apply_indices(&Num(7.0), &[Num(0.0)]).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NotATuple { index: "0".into() });
}

#[test]
fn extract_then_apply() {
    let chain = extract("g[0][1]").unwrap();
    assert_eq!(apply_indices(&grid(), &chain.indices), Ok(Num(2.0)));
}

#[test]
fn groups_spend_the_parent_budget() {
    let outer = SourceBuffer::with_config("", ScanConfig::default().with_max_depth(2));
    let cursor = outer.cursor();
    assert!(extract_indices(&cursor, "a[{1}]", &TestEvaluator).is_ok());

    let err = extract_indices(&cursor, "a[{{1}}]", &TestEvaluator).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NestingTooDeep { limit: 2 });
}

#[test]
fn groups_start_at_the_parent_depth() {
    let outer = SourceBuffer::with_config("", ScanConfig::default().with_max_depth(2));
    let mut cursor = outer.cursor();
    let err = cursor
        .nested(|inner| extract_indices(inner, "a[{1}]", &TestEvaluator))
        .unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NestingTooDeep { limit: 2 });
    assert_eq!(cursor.depth(), 0);
}
