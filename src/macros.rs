//! Convenience macros for building context maps.

/// Builds a [`Context`](crate::Context) map from `key => value` pairs.
///
/// Values go through [`Value::from`](serde_json::Value::from), so anything
/// `Into<Value>` works on the right-hand side. Later duplicates of a key
/// win, matching [`with_contexts`](crate::GraftError::with_contexts).
///
/// # Examples
///
/// ```
/// use error_graft::{context, GraftError};
///
/// let err = GraftError::new("payment rejected").with_contexts(context! {
///     "order_id" => 7031,
///     "currency" => "EUR",
/// });
/// let ctx = err.context().unwrap();
/// assert_eq!(ctx["order_id"], 7031);
/// assert_eq!(ctx["currency"], "EUR");
/// ```
#[macro_export]
macro_rules! context {
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Context::new();
        $(
            map.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        map
    }};
}
