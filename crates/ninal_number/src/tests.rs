use super::*;
use rand::Rng;

fn n(s: &str) -> NinalNumber {
    NinalNumber::from_digits(s.as_bytes()).unwrap()
}

#[test]
fn parse_test() {
    assert_eq!(n("0"), NinalNumber::Small(0));
    assert_eq!(n("00042"), NinalNumber::Small(42));
    assert!(n("9223372036854775807").is_small());
    assert!(!n("9223372036854775808").is_small());
    assert_eq!(n("123456789012345678901234567890").to_string(), "123456789012345678901234567890");

    assert_eq!(NinalNumber::from_digits(b""), Err(NumericParseError::Empty));
    assert_eq!(NinalNumber::from_digits(b"12a"), Err(NumericParseError::NotADigit(b'a')));
}

#[test]
fn overflow_widens() {
    let max = NinalNumber::Small(i64::MAX);
    let one = NinalNumber::Small(1);
    let res = max.arith(ArithOp::Add, &one).unwrap();

    assert!(!res.is_small());
    assert_eq!(res.to_string(), "9223372036854775808");

    let min = NinalNumber::Small(i64::MIN);
    let res = min.arith(ArithOp::Sub, &one).unwrap();
    assert_eq!(res.to_string(), "-9223372036854775809");

    let res = max.arith(ArithOp::Mul, &NinalNumber::Small(2)).unwrap();
    assert_eq!(res.to_string(), "18446744073709551614");

    let res = min.arith(ArithOp::Div, &NinalNumber::Small(-1)).unwrap();
    assert_eq!(res.to_string(), "9223372036854775808");
}

#[test]
fn big_results_are_not_narrowed() {
    let big = n("9223372036854775808");
    let res = big.arith(ArithOp::Sub, &NinalNumber::Small(9223372036854775800)).unwrap();

    assert!(!res.is_small());
    assert_eq!(res.to_string(), "8");
    assert_eq!(res, NinalNumber::Small(8));
}

#[test]
fn division_truncates() {
    let seven = NinalNumber::Small(7);
    let minus_seven = NinalNumber::Small(-7);
    let two = NinalNumber::Small(2);

    assert_eq!(seven.arith(ArithOp::Div, &two).unwrap(), NinalNumber::Small(3));
    assert_eq!(minus_seven.arith(ArithOp::Div, &two).unwrap(), NinalNumber::Small(-3));

    let big_minus_seven = NinalNumber::Big(minus_seven.to_big());
    let res = big_minus_seven.arith(ArithOp::Div, &two).unwrap();

    assert!(!res.is_small());
    assert_eq!(res.to_string(), "-3");
}

#[test]
fn division_by_zero() {
    let zero = NinalNumber::Small(0);

    assert_eq!(NinalNumber::Small(1).arith(ArithOp::Div, &zero).unwrap_err(), NumberError::DivisionByZero);
    assert_eq!(n("99999999999999999999").arith(ArithOp::Div, &zero).unwrap_err(), NumberError::DivisionByZero);
    assert_eq!(NinalNumber::Small(1).arith(ArithOp::Div, &NinalNumber::Big(zero.to_big())).unwrap_err(), NumberError::DivisionByZero);
}

#[test]
fn comparisons() {
    let big = n("99999999999999999999");
    let small = NinalNumber::Small(3);

    assert!(small.compare(CmpOp::Lt, &big));
    assert!(small.compare(CmpOp::Le, &small));
    assert!(big.compare(CmpOp::Gt, &small));
    assert!(big.compare(CmpOp::Ge, &big));
    assert!(!big.compare(CmpOp::Lt, &big));
    assert!(!small.compare(CmpOp::Gt, &NinalNumber::Small(4)));
}

// random operands near the edges of `i64`, checked against `i128`
#[test]
fn random_widening() {
    let mut rng = rand::thread_rng();

    for _ in 0..512 {
        let a: i64 = if rng.gen_bool(0.5) { rng.gen() } else { rng.gen_range(-1000..1000) };
        let b: i64 = if rng.gen_bool(0.5) { rng.gen() } else { rng.gen_range(-1000..1000) };
        let (m, n) = (NinalNumber::Small(a), NinalNumber::Small(b));

        let expected = [
            (ArithOp::Add, a as i128 + b as i128),
            (ArithOp::Sub, a as i128 - b as i128),
            (ArithOp::Mul, a as i128 * b as i128),
        ];

        for (op, expected) in expected.into_iter() {
            let res = m.arith(op, &n).unwrap();

            assert_eq!(res.to_string(), expected.to_string());
            assert_eq!(res.is_small(), i64::try_from(expected).is_ok());
        }

        if b != 0 {
            let res = m.arith(ArithOp::Div, &n).unwrap();
            assert_eq!(res.to_string(), (a as i128 / b as i128).to_string());
        }

        assert_eq!(m.compare(CmpOp::Lt, &n), a < b);
        assert_eq!(NinalNumber::Big(m.to_big()).compare(CmpOp::Ge, &n), a >= b);
    }
}

#[test]
fn widening_from_min() {
    let min = NinalNumber::Small(i64::MIN);

    assert_eq!(min.to_big().to_string(), "-9223372036854775808");
    assert!(min.compare(CmpOp::Lt, &n("9223372036854775808")));
    assert!(!min.compare(CmpOp::Ge, &NinalNumber::Big(min.to_big())));
    assert!(min.compare(CmpOp::Le, &NinalNumber::Big(min.to_big())));

    let res = min.arith(ArithOp::Mul, &NinalNumber::Small(-1)).unwrap();
    assert_eq!(res.to_string(), "9223372036854775808");
}
