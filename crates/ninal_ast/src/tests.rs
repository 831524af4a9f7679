use crate::*;
use ninal_error::NinalError;
use ninal_reader::Reader;
use ninal_value::Symbol;

fn read(s: &str) -> List {
    Reader::new(s.as_bytes()).parse_list().unwrap()
}

fn build_ok(s: &str) -> (Unit, Vec<AstWarning>) {
    match build_unit(&read(s)) {
        Ok(r) => r,
        Err(e) => panic!("{s:?}: {}", e.render_error(s.as_bytes(), false)),
    }
}

fn build_err(s: &str) -> AstErrorKind {
    match build_unit(&read(s)) {
        Ok((unit, _)) => panic!("{s:?} is built into\n{unit}"),
        Err(e) => e.err_kind().clone(),
    }
}

#[test]
fn special_forms() {
    assert!(matches!(build_ok("(+ 1 2)").0.body, Node::Arith { op: ArithOp::Add, .. }));
    assert!(matches!(build_ok("(>= 1 2)").0.body, Node::Compare { op: CmpOp::Ge, .. }));
    assert!(matches!(build_ok("(print 'a')").0.body, Node::Print(_)));
    assert!(matches!(build_ok("(if (< 1 2) 3 4)").0.body, Node::If { .. }));
    assert!(matches!(build_ok("(foo 1 2)").0.body, Node::Call { args, .. } if args.len() == 2));
    assert!(matches!(build_ok("()").0.body, Node::LiteralList(elements) if elements.is_empty()));
    assert!(matches!(build_ok("(1 'two' (3))").0.body, Node::LiteralList(elements) if elements.len() == 3));
}

#[test]
fn var_allocates_slots() {
    let (unit, warnings) = build_ok("((var x 5) (var y x) (print y))");

    assert_eq!(unit.frame_size, 2);
    assert!(warnings.is_empty());

    match &unit.body {
        Node::LiteralList(elements) => match &elements[1] {
            Node::VarStore { slot, init, .. } => {
                assert_eq!(slot.index(), 1);
                assert!(matches!(init.as_ref(), Node::VarLoad { slot, .. } if slot.index() == 0));
            },
            _ => panic!(),
        },
        _ => panic!(),
    }
}

#[test]
fn redeclaration_shadows() {
    let (unit, warnings) = build_ok("((var x 1) (var x (+ x 1)) x)");

    assert_eq!(unit.frame_size, 2);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].err_kind(), &AstWarningKind::ShadowedLocal(Symbol::new(b"x")));

    match &unit.body {
        Node::LiteralList(elements) => {
            // the init expression still sees the first `x`
            match &elements[1] {
                Node::VarStore { slot, init, .. } => {
                    assert_eq!(slot.index(), 1);
                    assert!(matches!(init.as_ref(), Node::Arith { lhs, .. } if matches!(lhs.as_ref(), Node::VarLoad { slot, .. } if slot.index() == 0)));
                },
                _ => panic!(),
            }

            assert!(matches!(&elements[2], Node::VarLoad { slot, .. } if slot.index() == 1));
        },
        _ => panic!(),
    }
}

#[test]
fn local_head_makes_a_literal_list() {
    let (unit, _) = build_ok("((var x 5) (x 1 2))");

    match &unit.body {
        Node::LiteralList(elements) => match &elements[1] {
            Node::LiteralList(inner) => {
                assert_eq!(inner.len(), 3);
                assert!(matches!(&inner[0], Node::VarLoad { .. }));
            },
            _ => panic!(),
        },
        _ => panic!(),
    }

    // without the declaration, it's a call
    assert!(matches!(build_ok("(x 1 2)").0.body, Node::Call { .. }));
}

#[test]
fn def_builds_body_in_fresh_scope() {
    let (unit, _) = build_ok("(def add (a b) ((var c (+ a b)) c))");

    // the outer unit doesn't see the parameters
    assert_eq!(unit.frame_size, 0);

    match &unit.body {
        Node::Def(f) => {
            assert_eq!(f.name, Symbol::new(b"add"));
            assert_eq!(f.params.iter().map(|s| s.index()).collect::<Vec<_>>(), vec![0, 1]);
            assert_eq!(f.frame_size, 3);
        },
        _ => panic!(),
    }

    // the body cannot see the enclosing unit
    assert!(matches!(
        build_err("((var y 1) (def f (a) y))"),
        AstErrorKind::UnknownLocalSymbol { .. },
    ));
}

#[test]
fn duplicate_parameters() {
    let (unit, warnings) = build_ok("(def f (a a) a)");

    assert_eq!(warnings.len(), 1);

    match &unit.body {
        Node::Def(f) => assert!(matches!(&f.body, Node::VarLoad { slot, .. } if slot.index() == 1)),
        _ => panic!(),
    }
}

#[test]
fn shape_errors() {
    assert_eq!(
        build_err("(var x)"),
        AstErrorKind::WrongArity { form: Keyword::Var, expected: 2, got: 1 },
    );
    assert_eq!(
        build_err("(+ 1 2 3)"),
        AstErrorKind::WrongArity { form: Keyword::Add, expected: 2, got: 3 },
    );
    assert!(matches!(
        build_err("(var 1 2)"),
        AstErrorKind::InvalidArgument { form: Keyword::Var, index: 1, expected: ArgShape::Symbol, .. },
    ));
    assert!(matches!(
        build_err("(def f a a)"),
        AstErrorKind::InvalidArgument { form: Keyword::Def, index: 2, expected: ArgShape::Parameters, .. },
    ));
    assert!(matches!(
        build_err("(def f (a 1) a)"),
        AstErrorKind::InvalidParameterName { form: Keyword::Def, index: 2, .. },
    ));
}

#[test]
fn unknown_symbol_suggestions() {
    let form = "((var count 0) (print cnt))";

    match build_unit(&read(form)) {
        Err(e) => {
            assert!(matches!(
                e.err_kind(),
                AstErrorKind::UnknownLocalSymbol { suggestions, .. } if suggestions == &vec![Symbol::new(b"count")],
            ));
            assert!(e.render_error(form.as_bytes(), false).contains("Do you mean `count`?"));
        },
        Ok(_) => panic!(),
    }
}

#[test]
fn tree_dump() {
    let (unit, _) = build_ok("(def f (a) (+ a 1))");
    let dump = unit.to_string();

    assert!(dump.contains("Def f (params: [@0], frame_size: 1)"));
    assert!(dump.contains("    VarLoad a @0"));
}

fn nested_value(depth: usize) -> Value {
    let mut value = Value::Int(0);

    for _ in 0..depth {
        value = Value::List(List::of(vec![value]));
    }

    value
}

#[test]
fn nesting_limit() {
    let mut scope = Scope::new();
    assert!(build(&nested_value(MAX_NESTING - 1), &mut scope).is_ok());

    let mut scope = Scope::new();
    let e = build(&nested_value(MAX_NESTING + 1), &mut scope).unwrap_err();
    assert_eq!(e.err_kind(), &AstErrorKind::TooDeeplyNested { limit: MAX_NESTING });

    // a function body doesn't reset the depth
    let mut scope = Scope::new();
    let deep_def = Value::List(List::of(vec![
        Value::new_symbol("def"),
        Value::new_symbol("f"),
        Value::empty_list(),
        nested_value(MAX_NESTING),
    ]));
    let e = build(&deep_def, &mut scope).unwrap_err();
    assert_eq!(e.err_kind(), &AstErrorKind::TooDeeplyNested { limit: MAX_NESTING });
}
