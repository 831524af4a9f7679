use crate::*;
use ninal_ast::build_unit;
use ninal_error::NinalError;
use ninal_reader::read_all;

// runs every form and returns what's printed and the first error
fn run(code: &str, max_call_depth: usize) -> (Vec<String>, Option<EvalErrorKind>) {
    let sink = BufferedSink::new();
    let mut ctxt = EvalCtxt::new(Box::new(sink.clone()), max_call_depth);

    for form in read_all(code.as_bytes()).unwrap() {
        let (unit, _) = build_unit(&form).unwrap_or_else(
            |e| panic!("{}", e.render_error(code.as_bytes(), false))
        );

        if let Err(e) = run_unit(&unit, &mut ctxt) {
            return (sink.lines(), Some(e.err_kind().clone()));
        }
    }

    (sink.lines(), None)
}

fn output(code: &str) -> Vec<String> {
    match run(code, 64) {
        (lines, None) => lines,
        (_, Some(e)) => panic!("{code:?}: {e:?}"),
    }
}

fn error(code: &str) -> EvalErrorKind {
    match run(code, 64) {
        (_, Some(e)) => e,
        (lines, None) => panic!("{code:?} printed {lines:?}"),
    }
}

#[test]
fn print_and_var() {
    assert_eq!(output("((var x 5) (print x))"), vec!["5"]);
    assert_eq!(output("(print 'yes')"), vec!["yes"]);
    assert_eq!(output("(print (1 'a' ()))"), vec!["(1 \"a\" ())"]);
    assert_eq!(output("(print (print 1))"), vec!["1", "()"]);
    assert_eq!(output("(print (var x 1))"), vec!["()"]);
}

#[test]
fn widening() {
    assert_eq!(output("(print (+ 9223372036854775807 1))"), vec!["9223372036854775808"]);
    assert_eq!(output("(print (- 0 (- 9223372036854775807 (- 0 1))))"), vec!["-9223372036854775808"]);
    assert_eq!(output("(print (* 4294967296 4294967296))"), vec!["18446744073709551616"]);

    // no narrowing
    let (lines, _) = run("(print (- (+ 9223372036854775807 1) 1))", 64);
    assert_eq!(lines, vec!["9223372036854775807"]);
}

#[test]
fn truncating_division() {
    assert_eq!(output("(print (/ 7 2))"), vec!["3"]);
    assert_eq!(output("(print (/ (- 0 7) 2))"), vec!["-3"]);
    assert_eq!(output("(print (/ (- 0 99999999999999999999) 2))"), vec!["-49999999999999999999"]);
}

#[test]
fn division_by_zero() {
    assert!(matches!(error("(/ 1 0)"), EvalErrorKind::DivisionByZero { .. }));
    assert!(matches!(error("(/ 99999999999999999999 0)"), EvalErrorKind::DivisionByZero { .. }));
    assert!(matches!(error("(/ 1 (- 99999999999999999999 99999999999999999999))"), EvalErrorKind::DivisionByZero { .. }));
}

#[test]
fn comparisons() {
    assert_eq!(output("(print ((< 1 2) (<= 2 2) (> 1 2) (>= 99999999999999999999 1)))"), vec!["(true true false true)"]);
    assert!(matches!(error("(< 'a' 1)"), EvalErrorKind::InvalidOperandType { .. }));
    assert!(matches!(error("(+ 1 ())"), EvalErrorKind::InvalidOperandType { .. }));
}

#[test]
fn conditionals() {
    assert_eq!(output("(if (< 1 2) (print \"yes\") (print \"no\"))"), vec!["yes"]);
    assert_eq!(output("(if (> 1 2) (print \"yes\") (print \"no\"))"), vec!["no"]);
    assert!(matches!(error("(if 1 2 3)"), EvalErrorKind::NonBooleanCondition(Value::Int(1))));
}

#[test]
fn functions() {
    assert_eq!(output("(def add (a b) (+ a b)) (print (add 3 4))"), vec!["7"]);
    assert_eq!(
        output("(def fib (n) (if (< n 2) n (+ (fib (- n 1)) (fib (- n 2))))) (print (fib 15))"),
        vec!["610"],
    );

    // redefinition overwrites
    assert_eq!(output("(def f () 1) (def f () 2) (print (f))"), vec!["2"]);
}

#[test]
fn argument_order() {
    let (lines, e) = run("(def sub (a b) (- a b)) (print (sub (print 1) (print 2)))", 64);

    // `print` evaluates to `()`, which `-` rejects
    assert_eq!(lines, vec!["1", "2"]);
    assert!(matches!(e, Some(EvalErrorKind::InvalidOperandType { .. })));
}

#[test]
fn call_errors() {
    assert!(matches!(
        error("(def f (a) a) (f 1 2)"),
        EvalErrorKind::WrongArgumentCount { expected: 1, got: 2, .. },
    ));
    assert!(matches!(
        error("(x 1 2)"),
        EvalErrorKind::UndefinedFunction { suggestions, .. } if suggestions.is_empty(),
    ));
    assert!(matches!(
        error("(def square (n) (* n n)) (sqaure 3)"),
        EvalErrorKind::UndefinedFunction { suggestions, .. } if suggestions.len() == 1,
    ));
}

#[test]
fn call_depth_limit() {
    let (lines, e) = run("(def loop (n) (loop (+ n 1))) (print 1) (loop 0)", 32);

    assert_eq!(lines, vec!["1"]);
    assert!(matches!(e, Some(EvalErrorKind::CallDepthLimitExceeded { limit: 32, .. })));

    // it's reset after an error
    let sink = BufferedSink::new();
    let mut ctxt = EvalCtxt::new(Box::new(sink.clone()), 8);
    let forms = read_all(b"(def down (n) (if (< n 1) 0 (down (- n 1)))) (down 100) (print (down 5))").unwrap();

    assert!(run_unit(&build_unit(&forms[0]).unwrap().0, &mut ctxt).is_ok());
    assert!(run_unit(&build_unit(&forms[1]).unwrap().0, &mut ctxt).is_err());
    assert_eq!(ctxt.call_depth(), 0);
    assert!(run_unit(&build_unit(&forms[2]).unwrap().0, &mut ctxt).is_ok());
    assert_eq!(sink.lines(), vec!["0"]);
}

#[test]
fn uninitialized_slot() {
    assert!(matches!(
        error("((if (< 1 0) (var x 1) 0) x)"),
        EvalErrorKind::UninitializedSlot(_),
    ));
}

#[test]
fn frames_are_not_shared() {
    assert_eq!(
        output("(def f (a) ((var b (* a 2)) b)) (print ((f 1) (f 2)))"),
        vec!["((() 2) (() 4))"],
    );
}

#[test]
fn literal_list_with_local_head() {
    assert_eq!(output("(print ((var x 5) (x 1 2)))"), vec!["(() (5 1 2))"]);
}

#[test]
fn deep_recursion_does_not_overflow() {
    let (lines, e) = run("(def down (n) (if (< n 1) 0 (down (- n 1)))) (print (down 10000))", 16384);

    assert!(e.is_none());
    assert_eq!(lines, vec!["0"]);

    let (_, e) = run("(def forever (n) (+ 1 (forever n))) (forever 0)", 16384);
    assert!(matches!(e, Some(EvalErrorKind::CallDepthLimitExceeded { limit: 16384, .. })));
}

#[test]
fn widening_at_min() {
    let min = "(- (- 0 9223372036854775807) 1)";

    assert_eq!(output(&format!("(print {min})")), vec!["-9223372036854775808"]);
    assert_eq!(output(&format!("(print (- {min} 1))")), vec!["-9223372036854775809"]);
    assert_eq!(output(&format!("(print (/ {min} (- 0 1)))")), vec!["9223372036854775808"]);
    assert_eq!(output(&format!("(print (< {min} 9223372036854775808))")), vec!["true"]);
    assert_eq!(output(&format!("(print (>= {min} (- 0 9223372036854775808)))")), vec!["true"]);
}
