//! Binary and comparison operators.

use splice_scan::checks::check_number;
use splice_scan::error::custom;
use splice_scan::ScanResult;

use crate::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    /// Additive operator at `byte`.
    pub fn additive(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(BinaryOp::Add),
            b'-' => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    /// Multiplicative operator at `byte`.
    pub fn multiplicative(byte: u8) -> Option<Self> {
        match byte {
            b'*' => Some(BinaryOp::Mul),
            b'/' => Some(BinaryOp::Div),
            b'%' => Some(BinaryOp::Rem),
            _ => None,
        }
    }
}

/// Comparison spellings, two-character ones first.
pub const COMPARISON_SIGNS: [&str; 6] = ["<=", ">=", "==", "!=", "<", ">"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl CompareOp {
    pub fn from_sign(sign: &str) -> Option<Self> {
        Some(match sign {
            "<" => CompareOp::Lt,
            "<=" => CompareOp::Le,
            ">" => CompareOp::Gt,
            ">=" => CompareOp::Ge,
            "==" => CompareOp::Eq,
            "!=" => CompareOp::Ne,
            _ => return None,
        })
    }
}

/// Compare two values, giving 1 or 0.
///
/// Two numbers compare numerically; anything else compares by string form.
pub fn compare(left: &Value, right: &Value, op: CompareOp) -> Value {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        _ => Some(left.to_string().cmp(&right.to_string())),
    };
    let holds = match ordering {
        Some(ordering) => match op {
            CompareOp::Lt => ordering.is_lt(),
            CompareOp::Le => ordering.is_le(),
            CompareOp::Gt => ordering.is_gt(),
            CompareOp::Ge => ordering.is_ge(),
            CompareOp::Eq => ordering.is_eq(),
            CompareOp::Ne => ordering.is_ne(),
        },
        None => op == CompareOp::Ne,
    };
    Value::from(holds)
}

/// Apply `op` to two values.
///
/// `+` adds numbers, concatenates when either side is a string, and
/// appends to tuples. Everything else is numeric only.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> ScanResult<Value> {
    if op == BinaryOp::Add {
        return add(left, right);
    }

    let a = check_number(&left)?;
    let b = check_number(&right)?;
    let result = match op {
        BinaryOp::Add | BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div if b == 0.0 => return Err(custom("division by zero")),
        BinaryOp::Div => a / b,
        BinaryOp::Rem if b == 0.0 => return Err(custom("modulo by zero")),
        BinaryOp::Rem => a % b,
    };
    Ok(Value::Number(result))
}

fn add(left: Value, right: Value) -> ScanResult<Value> {
    match (left, right) {
        (Value::Empty, other) | (other, Value::Empty) => Ok(other),
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Tuple(mut a), Value::Tuple(b)) => {
            a.extend(b);
            Ok(Value::Tuple(a))
        }
        (Value::Tuple(mut a), other) => {
            a.push(other);
            Ok(Value::Tuple(a))
        }
        (left, right) => Ok(Value::Str(format!("{left}{right}"))),
    }
}

/// Negate a number.
pub fn negate(value: &Value) -> ScanResult<Value> {
    Ok(Value::Number(-check_number(value)?))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests {
    use pretty_assertions::assert_eq;
    use splice_scan::ScanErrorKind;

    use super::*;

    #[test]
    fn arithmetic() {
        let n = Value::Number;
        assert_eq!(evaluate_binary(n(2.0), n(3.0), BinaryOp::Add), Ok(n(5.0)));
        assert_eq!(evaluate_binary(n(2.0), n(3.0), BinaryOp::Sub), Ok(n(-1.0)));
        assert_eq!(evaluate_binary(n(2.0), n(3.0), BinaryOp::Mul), Ok(n(6.0)));
        assert_eq!(evaluate_binary(n(3.0), n(2.0), BinaryOp::Div), Ok(n(1.5)));
        assert_eq!(evaluate_binary(n(7.0), n(4.0), BinaryOp::Rem), Ok(n(3.0)));
    }

    #[test]
    fn division_by_zero() {
        let err = evaluate_binary(Value::Number(1.0), Value::Number(0.0), BinaryOp::Div);
        assert_eq!(err.unwrap_err().to_string(), "division by zero");
    }

    #[test]
    fn concatenation() {
        assert_eq!(
            evaluate_binary("a".into(), Value::Number(1.0), BinaryOp::Add),
            Ok(Value::string("a1"))
        );
        assert_eq!(
            evaluate_binary(Value::Tuple(vec![1.0.into()]), 2.0.into(), BinaryOp::Add),
            Ok(Value::Tuple(vec![1.0.into(), 2.0.into()]))
        );
        assert_eq!(
            evaluate_binary(Value::Empty, 2.0.into(), BinaryOp::Add),
            Ok(Value::Number(2.0))
        );
    }

    #[test]
    fn non_numeric_operands() {
        let err = evaluate_binary("a".into(), Value::Number(1.0), BinaryOp::Mul).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::ExpectedNumber { found: "a".into() });
        assert!(negate(&"x".into()).is_err());
        assert_eq!(negate(&Value::Number(2.0)), Ok(Value::Number(-2.0)));
    }

    #[test]
    fn comparisons() {
        let n = Value::Number;
        assert_eq!(compare(&n(1.0), &n(2.0), CompareOp::Lt), n(1.0));
        assert_eq!(compare(&n(2.0), &n(2.0), CompareOp::Le), n(1.0));
        assert_eq!(compare(&n(10.0), &n(9.0), CompareOp::Gt), n(1.0));
        assert_eq!(compare(&"10".into(), &"9".into(), CompareOp::Gt), n(0.0));
        assert_eq!(compare(&"a".into(), &"a".into(), CompareOp::Eq), n(1.0));
        assert_eq!(compare(&n(3.0), &"3".into(), CompareOp::Eq), n(1.0));
        assert_eq!(compare(&n(f64::NAN), &n(f64::NAN), CompareOp::Ne), n(1.0));
        assert_eq!(compare(&n(f64::NAN), &n(1.0), CompareOp::Ge), n(0.0));
    }

    #[test]
    fn comparison_signs_resolve() {
        for sign in COMPARISON_SIGNS {
            assert!(CompareOp::from_sign(sign).is_some(), "{sign}");
        }
        assert_eq!(CompareOp::from_sign("="), None);
    }

    #[test]
    fn operator_bytes() {
        assert_eq!(BinaryOp::additive(b'-'), Some(BinaryOp::Sub));
        assert_eq!(BinaryOp::additive(b'*'), None);
        assert_eq!(BinaryOp::multiplicative(b'%'), Some(BinaryOp::Rem));
    }
}
