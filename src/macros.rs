/// Builds a [`ConfigMap`](crate::ConfigMap) from Rust literals.
///
/// Values go through `ConfigValue::from`, so strings, integers, floats and
/// booleans are all accepted. Later entries with the same key replace earlier
/// ones, just like [`Document::to_map`](crate::Document::to_map).
///
/// # Examples
///
/// ```rust
/// use kvconf::{config, parse};
///
/// let expected = config!({
///     "api_key": "FDA23E8B9C987D",
///     "email": "a@b.com",
/// });
///
/// let doc = parse("api_key = FDA23E8B9C987D\nemail = a@b.com").unwrap();
/// assert_eq!(doc.to_map(), expected);
/// ```
#[macro_export]
macro_rules! config {
    // Handle empty map
    ({}) => {
        $crate::ConfigMap::new()
    };

    // Handle non-empty map
    ({ $($key:literal : $value:expr),* $(,)? }) => {{
        let mut map = $crate::ConfigMap::new();
        $(
            map.insert($key.to_string(), $crate::ConfigValue::from($value));
        )*
        map
    }};
}
