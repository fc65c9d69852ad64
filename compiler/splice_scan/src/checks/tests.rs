use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::TestValue;
use crate::{ScanErrorKind, SourceBuffer};

use TestValue::Num;

#[test]
fn arg_count() {
    assert!(check_arg_count(2, 2, "f").is_ok());
    assert!(check_arg_count(3, 2, "f").is_ok());
    let err = check_arg_count(1, 2, "join").unwrap_err();
    assert_eq!(
        err.kind,
        ScanErrorKind::ArgumentCount {
            expected: 2,
            got: 1,
            name: "join".into()
        }
    );
}

#[test]
fn numbers() {
    assert_eq!(check_number(&Num(1.5)), Ok(1.5));
    let err = check_number(&TestValue::text("x")).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::ExpectedNumber { found: "x".into() });
}

#[test]
fn integers() {
    assert_eq!(check_integer(&Num(3.0)), Ok(3));
    assert_eq!(check_integer(&Num(-3.0)), Ok(-3));
    assert!(check_integer(&Num(3.5)).is_err());
    assert!(check_integer(&Num(f64::NAN)).is_err());
    assert!(check_integer(&Num(1e300)).is_err());
    let err = check_integer(&TestValue::text("x")).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::ExpectedInteger { found: "x".into() });
}

#[test]
fn signs() {
    assert_eq!(check_positive_int(&Num(1.0)), Ok(1));
    assert!(check_positive_int(&Num(0.0)).is_err());
    assert_eq!(check_non_negative_int(&Num(0.0)), Ok(0));
    let err = check_non_negative_int(&Num(-1.0)).unwrap_err();
    assert_eq!(
        err.kind,
        ScanErrorKind::ExpectedNonNegative { found: "-1".into() }
    );
}

#[test]
fn not_end_and_not_empty() {
    let buffer = SourceBuffer::new("x");
    let mut cursor = buffer.cursor();
    assert!(check_not_end(&cursor, "f").is_ok());
    assert!(check_not_empty(&cursor, "x", "f").is_ok());
    assert!(check_not_empty(&cursor, "", "f").is_err());
    cursor.advance();
    let err = check_not_end(&cursor, "f").unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::IncompleteArguments { name: "f".into() });
}

#[test]
fn safe_accessors() {
    let args = vec![Num(2.0), TestValue::text("s")];
    assert_eq!(safe_int(&args, 0, 9), Ok(2));
    assert_eq!(safe_int(&args, 5, 9), Ok(9));
    assert!(safe_int(&args, 1, 9).is_err());
    assert_eq!(safe_double(&args, 0, 0.5), Ok(2.0));
    assert_eq!(safe_double(&args, 3, 0.5), Ok(0.5));
    assert_eq!(safe_string(&args, 1, "d"), "s");
    assert_eq!(safe_string(&args, 2, "d"), "d");
    assert_eq!(safe_value(&args, 1, Num(0.0)), TestValue::text("s"));
    assert_eq!(safe_value(&args, 7, Num(0.0)), Num(0.0));
}
