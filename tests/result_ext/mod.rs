use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use error_graft::{GraftError, ResultExt};

fn fail() -> Result<u32, io::Error> {
    Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
}

#[test]
fn graft_wraps_the_error_side() {
    let err = fail().graft().unwrap_err();

    assert_eq!(err.to_string(), "pipe closed");
    let io = err.wrapped().unwrap().downcast_ref::<io::Error>().unwrap();
    assert_eq!(io.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn graft_records_the_call_site() {
    let err = fail().graft().unwrap_err();
    let location = &err.context().unwrap()[GraftError::LOCATION_KEY];

    assert!(location
        .as_str()
        .unwrap()
        .starts_with("tests/result_ext/mod.rs"));
}

#[test]
fn graft_passes_ok_through() {
    let ok: Result<u32, io::Error> = Ok(17);
    assert_eq!(ok.graft().unwrap(), 17);
}

#[test]
fn graft_ctx_attaches_the_entry() {
    let err = fail().graft_ctx("stream", "stdout").unwrap_err();
    assert_eq!(err.context().unwrap()["stream"], "stdout");
}

#[test]
fn graft_with_builds_on_the_wrapped_error() {
    let err = fail()
        .graft_with(|e| e.with_cause(GraftError::new("peer went away")))
        .unwrap_err();

    assert_eq!(err.to_string(), "pipe closed");
    assert_eq!(err.cause().unwrap().to_string(), "peer went away");
}

#[test]
fn graft_with_skips_the_closure_on_ok() {
    let calls = AtomicUsize::new(0);
    let ok: Result<u32, io::Error> = Ok(1);

    let result = ok.graft_with(|e| {
        calls.fetch_add(1, Ordering::Relaxed);
        e
    });

    assert_eq!(result.unwrap(), 1);
    assert_eq!(calls.load(Ordering::Relaxed), 0);
}
