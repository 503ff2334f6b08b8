//! Namespace prefixing for action types.
//!
//! Every action type has the shape `"<namespace>/<key>"`. Neither part is
//! escaped, so a `/` inside a namespace or key can make two types ambiguous.
//! Keeping namespaces unique and slash-free is the caller's responsibility.

/// Separator between a namespace and an operation key.
pub const SEPARATOR: char = '/';

/// Build the fully-qualified action type for `key` under `namespace`.
///
/// # Example
///
/// ```rust
/// use instant_reducer::core::apply_prefix;
///
/// assert_eq!(apply_prefix("TestCounter", "increment"), "TestCounter/increment");
/// ```
pub fn apply_prefix(namespace: &str, key: &str) -> String {
    let mut tag = String::with_capacity(namespace.len() + key.len() + 1);
    tag.push_str(namespace);
    tag.push(SEPARATOR);
    tag.push_str(key);
    tag
}

/// Strip `namespace/` from the front of `tag`, returning the operation key.
///
/// Returns `None` when `tag` does not literally start with the namespace
/// followed by the separator. A foreign prefix of the same length is not a
/// match.
///
/// # Example
///
/// ```rust
/// use instant_reducer::core::remove_prefix;
///
/// assert_eq!(remove_prefix("TestCounter", "TestCounter/reset"), Some("reset"));
/// assert_eq!(remove_prefix("TestCounter", "11chrprefix/reset"), None);
/// ```
pub fn remove_prefix<'a>(namespace: &str, tag: &'a str) -> Option<&'a str> {
    tag.strip_prefix(namespace)?.strip_prefix(SEPARATOR)
}
