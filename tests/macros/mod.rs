use error_graft::{context, Context, GraftError, Value};

#[test]
fn builds_a_context_map() {
    let ctx = context! {
        "host" => "db-03",
        "port" => 5432,
    };
    assert_eq!(ctx.len(), 2);
    assert_eq!(ctx["host"], "db-03");
    assert_eq!(ctx["port"], 5432);
}

#[test]
fn later_duplicates_win() {
    let ctx = context! {
        "attempt" => 1,
        "attempt" => 2,
    };
    assert_eq!(ctx.len(), 1);
    assert_eq!(ctx["attempt"], 2);
}

#[test]
fn accepts_heterogeneous_values() {
    let ctx = context! {
        "enabled" => true,
        "ratio" => 0.75,
        "count" => 12u64,
        "name" => String::from("job-7"),
        "payload" => Value::Null,
    };
    assert_eq!(ctx["enabled"], true);
    assert_eq!(ctx["ratio"], 0.75);
    assert_eq!(ctx["count"], 12u64);
    assert_eq!(ctx["name"], "job-7");
    assert_eq!(ctx["payload"], Value::Null);
}

#[test]
fn trailing_comma_is_optional() {
    let with_comma: Context = context! { "k" => "v", };
    let without: Context = context! { "k" => "v" };
    assert_eq!(with_comma, without);
}

#[test]
fn feeds_with_contexts_directly() {
    let err = GraftError::new("upload stalled").with_contexts(context! {
        "bucket" => "media",
        "retries" => 4,
    });
    let ctx = err.context().unwrap();
    assert_eq!(ctx["bucket"], "media");
    assert_eq!(ctx["retries"], 4);
    assert!(ctx.contains_key(GraftError::LOCATION_KEY));
}
