use std::error::Error;

use error_graft::{Context, ErrorRef, GraftError, StringError, Value};


#[test]
fn new_records_message_and_location() {
    let err = GraftError::new("copy failed");
    assert_eq!(err.to_string(), "copy failed");
    assert!(!err.is_nil());

    let ctx = err.context().unwrap();
    let location = ctx[GraftError::LOCATION_KEY].as_str().unwrap();
    assert!(location.starts_with("tests/types/mod.rs"));

    // file:line:column, with numeric line and column
    let mut parts = location.rsplit(':');
    assert!(parts.next().unwrap().parse::<u32>().is_ok());
    assert!(parts.next().unwrap().parse::<u32>().is_ok());
}

#[test]
fn wrap_keeps_the_wrapped_errors_identity() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no manifest");
    let err = GraftError::wrap(io);

    assert_eq!(err.to_string(), "no manifest");
    assert_eq!(
        err.wrapped().unwrap().type_name(),
        std::any::type_name::<std::io::Error>()
    );
}

#[test]
fn graft_errors_nest_as_messages() {
    let inner = GraftError::new("root");
    let outer = GraftError::wrap(inner);

    assert_eq!(outer.to_string(), "root");
    assert_eq!(
        outer.wrapped().unwrap().type_name(),
        std::any::type_name::<GraftError>()
    );
}

#[test]
fn wrap_opt_none_is_valid_but_empty() {
    let err = GraftError::wrap_opt(None);
    assert!(!err.is_nil());
    assert!(err.wrapped().is_none());
    assert_eq!(err.to_string(), "<nil>");
    // Location capture still happens.
    assert!(err.context().unwrap().contains_key(GraftError::LOCATION_KEY));
}

#[test]
fn nil_state_reports_nothing() {
    let err = GraftError::nil();
    assert!(err.is_nil());
    assert!(err.wrapped().is_none());
    assert!(err.cause().is_none());
    assert!(err.context().is_none());
    assert_eq!(err.to_string(), "<nil>");
}

#[test]
fn default_is_the_nil_state() {
    assert!(GraftError::default().is_nil());
}

#[test]
fn builders_are_no_ops_on_the_nil_state() {
    let err = GraftError::nil()
        .with_cause(GraftError::new("cause"))
        .with_context("k", "v")
        .without_location();

    assert!(err.is_nil());
    assert!(err.cause().is_none());
    assert!(err.context().is_none());
}

#[test]
fn with_cause_last_call_wins() {
    let first = ErrorRef::new(StringError::new("first"));
    let second = ErrorRef::new(StringError::new("second"));
    let err = GraftError::new("boom").with_cause(first).with_cause(second.clone());

    assert!(err.cause().unwrap().ptr_eq(&second));
    assert_eq!(err.cause().unwrap().to_string(), "second");
}

#[test]
fn with_context_overwrites_per_key() {
    let err = GraftError::new("boom")
        .with_context("attempt", 1)
        .with_context("attempt", 2)
        .with_context("stage", "upload");

    let ctx = err.context().unwrap();
    assert_eq!(ctx["attempt"], 2);
    assert_eq!(ctx["stage"], "upload");
}

#[test]
fn with_contexts_merges_with_later_wins() {
    let mut batch = Context::new();
    batch.insert("stage".to_owned(), Value::from("verify"));
    batch.insert("attempt".to_owned(), Value::from(9));

    let err = GraftError::new("boom")
        .with_context("stage", "upload")
        .with_contexts(batch);

    let ctx = err.context().unwrap();
    assert_eq!(ctx["stage"], "verify");
    assert_eq!(ctx["attempt"], 9);
}

#[test]
fn without_location_removes_only_that_entry() {
    let err = GraftError::new("boom").with_context("k", "v").without_location();

    let ctx = err.context().unwrap();
    assert!(!ctx.contains_key(GraftError::LOCATION_KEY));
    assert_eq!(ctx["k"], "v");
}

#[test]
fn context_iterates_in_key_order() {
    let err = GraftError::new("boom")
        .without_location()
        .with_context("zeta", 1)
        .with_context("alpha", 2)
        .with_context("mid", 3);

    let keys: Vec<&str> = err.context().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["alpha", "mid", "zeta"]);
}

#[test]
fn source_returns_the_message_never_the_cause() {
    let cause = ErrorRef::new(StringError::new("cause"));
    let err = GraftError::new("surface").with_cause(cause);

    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "surface");
    assert!(source.is::<StringError>());

    assert!(GraftError::nil().source().is_none());
    assert!(GraftError::wrap_opt(None).source().is_none());
}

#[test]
fn clones_share_the_same_refs() {
    let cause = ErrorRef::new(StringError::new("shared cause"));
    let err = GraftError::new("boom").with_cause(cause.clone());
    let copy = err.clone();

    assert!(copy.cause().unwrap().ptr_eq(&cause));
    assert!(copy.cause().unwrap().ptr_eq(err.cause().unwrap()));
}

#[test]
fn error_ref_downcasts_and_reports_its_type() {
    let io = std::io::Error::other("wat");
    let err = ErrorRef::new(io);

    assert!(err.downcast_ref::<std::io::Error>().is_some());
    assert!(err.downcast_ref::<StringError>().is_none());
    assert_eq!(err.type_name(), std::any::type_name::<std::io::Error>());
}
