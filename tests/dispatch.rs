//! Routing properties of the visit and const-visit dispatchers.

mod common;

use common::{Recorder, sample, samples};
use fuser::{
    Float, Int, NodeKind, OptInConstDispatch, OptInDispatch, OptOutDispatch, Statement, Val,
};
use pretty_assertions::assert_eq;

#[test]
fn test_visit_reaches_every_kind_exactly_once() {
    for kind in NodeKind::ALL {
        let original = sample(kind);
        let mut stmt = original.clone();
        let mut recorder = Recorder::default();

        OptInDispatch::handle_statement(&mut recorder, &mut stmt);

        assert_eq!(recorder.calls, [(kind, original)], "visiting {}", kind);
    }
}

#[test]
fn test_const_visit_reaches_every_kind_exactly_once() {
    for kind in NodeKind::ALL {
        let stmt = sample(kind);
        let mut recorder = Recorder::default();

        OptInConstDispatch::handle_statement(&mut recorder, &stmt);

        assert_eq!(recorder.calls, [(kind, stmt.clone())], "visiting {}", kind);
    }
}

#[test]
fn test_statement_entry_matches_category_entry() {
    for stmt in samples() {
        let mut through_statement = Recorder::default();
        OptInConstDispatch::handle_statement(&mut through_statement, &stmt);

        let mut through_category = Recorder::default();
        match &stmt {
            Statement::Val(val) => OptInConstDispatch::handle_val(&mut through_category, val),
            Statement::Expr(expr) => OptInConstDispatch::handle_expr(&mut through_category, expr),
        }

        assert_eq!(through_statement.calls, through_category.calls);
    }
}

#[test]
fn test_mutable_statement_entry_matches_category_entry() {
    for original in samples() {
        let mut stmt = original.clone();
        let mut through_statement = Recorder::default();
        OptInDispatch::handle_statement(&mut through_statement, &mut stmt);

        let mut stmt = original;
        let mut through_category = Recorder::default();
        match &mut stmt {
            Statement::Val(val) => OptInDispatch::handle_val(&mut through_category, val),
            Statement::Expr(expr) => OptInDispatch::handle_expr(&mut through_category, expr),
        }

        assert_eq!(through_statement.calls, through_category.calls);
    }
}

#[test]
fn test_statement_category_agrees_with_kind() {
    for kind in NodeKind::ALL {
        let stmt = sample(kind);
        assert_eq!(stmt.kind(), kind);
        assert_eq!(stmt.category(), kind.category());
        assert_eq!(stmt.is_val(), stmt.as_val().is_some());
        assert_eq!(stmt.is_expr(), stmt.as_expr().is_some());
    }
}

/// Only cares about floats; every other kind falls through to the no-op.
#[derive(Default)]
struct FloatsOnly {
    seen: Vec<Float>,
}

impl OptOutDispatch for FloatsOnly {
    fn handle_float(&mut self, node: &mut Float) {
        self.seen.push(node.clone());
    }
}

#[test]
fn test_opt_out_float_handler_sees_exactly_the_float() {
    let float = Float::constant(3, 1.5);
    let mut stmt = Statement::from(float.clone());
    let mut visitor = FloatsOnly::default();

    visitor.handle_statement(&mut stmt);

    assert_eq!(visitor.seen, [float.clone()]);
    assert_eq!(stmt, Statement::from(float));
}

#[test]
fn test_opt_out_unhandled_kinds_are_no_ops() {
    for original in samples() {
        if original.kind() == NodeKind::Float {
            continue;
        }
        let mut stmt = original.clone();
        let mut visitor = FloatsOnly::default();

        visitor.handle_statement(&mut stmt);

        assert!(visitor.seen.is_empty(), "{} reached handle_float", original.kind());
        assert_eq!(stmt, original);
    }
}

#[test]
fn test_opt_out_defaults_do_not_descend() {
    // Index, range bounds and body operands are all ints.
    #[derive(Default)]
    struct Ints(usize);

    impl OptOutDispatch for Ints {
        fn handle_int(&mut self, _node: &mut Int) {
            self.0 += 1;
        }
    }

    let mut stmt = sample(NodeKind::ForLoop);
    let mut visitor = Ints::default();
    visitor.handle_statement(&mut stmt);
    assert_eq!(visitor.0, 0);
}

#[test]
fn test_const_visit_leaves_node_unchanged() {
    for stmt in samples() {
        let before = stmt.clone();
        let mut recorder = Recorder::default();

        OptInConstDispatch::handle_statement(&mut recorder, &stmt);
        let _ = fuser::KindCensus::of(&stmt);
        let _ = stmt.to_string();

        assert_eq!(stmt, before);
    }
}

#[test]
fn test_val_entry_accepts_scalars_of_both_data_types() {
    let mut recorder = Recorder::default();
    OptInConstDispatch::handle_val(&mut recorder, &Val::from(Float::new(1)));
    OptInConstDispatch::handle_val(&mut recorder, &Val::from(Int::new(2)));

    let kinds: Vec<NodeKind> = recorder.calls.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, [NodeKind::Float, NodeKind::Int]);
}
