//! Request targets: the path and query string of a request, split apart and
//! decoded exactly once.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

/// The parsed target of a request.
///
/// Derived once when the request line is parsed and immutable afterwards.
/// Query keys and values are percent-decoded here; the path is kept as
/// received, and the segments used for file lookups are decoded by
/// [`RequestTarget::decoded_suffix`] so that nothing is ever decoded twice.
#[derive(Debug, Clone, Default)]
pub struct RequestTarget {
    /// The path portion, percent-encoded as it arrived on the wire.
    pub path: String,
    /// Query parameters as repeated key/value pairs, in arrival order.
    pub query: HashMap<String, Vec<String>>,
}

impl RequestTarget {
    /// Split a raw request target into its path and query parameters.
    ///
    /// The query string is parsed as `&`-separated `key=value` pairs; a pair
    /// without `=` becomes a key with an empty value, and repeated keys
    /// accumulate their values in order.
    pub fn parse(raw: &str) -> Self {
        let (path, query_string) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };

        let mut query: HashMap<String, Vec<String>> = HashMap::new();
        for pair in query_string.unwrap_or_default().split('&').filter(|s| !s.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            query.entry(decode(key)).or_default().push(decode(value));
        }

        Self {
            path: path.to_string(),
            query,
        }
    }

    /// Get the first value supplied for a query parameter.
    ///
    /// Downstream resolvers only ever consult the first value of a key.
    pub fn first_query_value(&self, key: &str) -> Option<&str> {
        self.query
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Strip a literal route prefix from the path and percent-decode the
    /// remainder.
    ///
    /// Returns `None` when the path does not start with the prefix. This is
    /// the only place a path segment destined for a file lookup is decoded.
    pub fn decoded_suffix(&self, prefix: &str) -> Option<String> {
        self.path.strip_prefix(prefix).map(decode)
    }

    /// The whole path, percent-decoded.
    pub fn decoded_path(&self) -> String {
        decode(&self.path)
    }
}

fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}
