use crate::*;
use ninal_error::NinalError;

fn read_one(s: &str) -> List {
    let mut reader = Reader::new(s.as_bytes());

    reader.parse_list().unwrap()
}

fn read_err(s: &str) -> ReadErrorKind {
    match read_all(s.as_bytes()) {
        Ok(forms) => panic!("{s:?} is read into {forms:?}"),
        Err(e) => e.err_kind().clone(),
    }
}

#[test]
fn simple_list() {
    let list = read_one("(+ 1 2)");

    assert_eq!(list.len(), 3);
    assert_eq!(list.get(0), Some(&Value::new_symbol("+")));
    assert_eq!(list.get(1), Some(&Value::Int(1)));
    assert_eq!(list.get(2), Some(&Value::Int(2)));
}

#[test]
fn nested_lists_and_texts() {
    let list = read_one("(print (a 'b c' \"d\") ())");

    assert_eq!(list.len(), 3);
    assert_eq!(list.to_string(), "(print (a \"b c\" \"d\") ())");
    assert!(list.get(2).unwrap().try_as_list().unwrap().is_empty());
}

#[test]
fn commas_are_whitespaces() {
    let list = read_one(",(x,1 ,\t2\r\n)");

    assert_eq!(list.len(), 3);
    assert_eq!(list.get(0), Some(&Value::new_symbol("x")));
    assert_eq!(list.get(2), Some(&Value::Int(2)));
}

#[test]
fn numerals() {
    let list = read_one("(9223372036854775807 9223372036854775808 007)");

    assert_eq!(list.get(0), Some(&Value::Int(i64::MAX)));
    assert!(matches!(list.get(1), Some(Value::BigInt(_))));
    assert_eq!(list.get(1).unwrap().to_string(), "9223372036854775808");
    assert_eq!(list.get(2), Some(&Value::Int(7)));
}

#[test]
fn symbol_boundaries() {
    // a digit run ends a numeral, but `(` doesn't end a symbol
    let list = read_one("(1a b(c d)");

    assert_eq!(list.len(), 4);
    assert_eq!(list.get(0), Some(&Value::Int(1)));
    assert_eq!(list.get(1), Some(&Value::new_symbol("a")));
    assert_eq!(list.get(2), Some(&Value::new_symbol("b(c")));
    assert_eq!(list.get(3), Some(&Value::new_symbol("d")));
}

#[test]
fn at_end_skips_whitespaces() {
    let mut reader = Reader::new(b"  (a)\n , ");

    assert!(!reader.at_end().unwrap());
    reader.parse_list().unwrap();
    assert!(reader.at_end().unwrap());
    assert_eq!(reader.cursor(), 9);
}

#[test]
fn read_all_forms() {
    let forms = read_all(b"(var x 5) (print x)").unwrap();

    assert_eq!(forms.len(), 2);
    assert_eq!(forms[1].to_string(), "(print x)");
    assert!(read_all(b"  ").unwrap().is_empty());
}

#[test]
fn read_errors() {
    assert_eq!(read_err("(a (b c)"), ReadErrorKind::PrematureEof(EofIn::List));
    assert_eq!(read_err("(print 'abc)"), ReadErrorKind::PrematureEof(EofIn::Text(b'\'')));
    assert_eq!(read_err("x"), ReadErrorKind::Expected { expected: b'(', got: b'x' });
    assert_eq!(read_err(")"), ReadErrorKind::Expected { expected: b'(', got: b')' });
    assert_eq!(read_err("(print \"caf\u{e9}\")"), ReadErrorKind::NonAscii(0xc3));
    assert_eq!(read_err("(a) \u{e9}"), ReadErrorKind::NonAscii(0xc3));
}

#[test]
fn error_spans() {
    let e = read_all(b"(a)\n(b (c)").unwrap_err();

    assert_eq!(e.get_first_span(), Some(SpanRange::new(4, 5)));
    assert!(e.render_error(b"(a)\n(b (c)", false).contains("E0101"));
}

#[test]
fn nesting_limit() {
    let ok = format!("{}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert_eq!(read_one(&ok).len(), 1);

    let deep = "(".repeat(1_000_000);
    assert_eq!(read_err(&deep), ReadErrorKind::TooDeeplyNested { limit: MAX_NESTING });

    let e = read_all(deep.as_bytes()).unwrap_err();
    assert_eq!(e.get_first_span(), Some(SpanRange::new(MAX_NESTING, MAX_NESTING + 1)));

    // the depth is per form
    let forms = format!("{ok} {ok}");
    assert_eq!(read_all(forms.as_bytes()).unwrap().len(), 2);
}
