//! Named request parameters with `None` pruning.
//!
//! Every dispatcher call carries a [`Params`] map from parameter names to
//! JSON values. Setting a parameter to a `None` option (or any other value
//! that serializes to JSON `null`) is a no-op, so absent values never reach
//! the wire — neither in a query string nor in a request body.

use serde_json::{Map, Value};

/// A mapping of named request parameters.
///
/// For GET requests the map is rendered into the URL query (scalars
/// stringified, lists comma-joined); for POST requests it becomes the JSON
/// body as-is.
///
/// # Example
///
/// ```rust
/// use digiseller_api::Params;
///
/// let params = Params::new()
///     .set("page", 1)
///     .set("pagesize", 200)
///     .set("email", None::<&str>); // pruned
///
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, dropping it when the value is JSON `null`.
    ///
    /// Accepts anything convertible into a [`serde_json::Value`], which
    /// covers scalars, strings, lists and `Option`s of those.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        if !value.is_null() {
            self.0.insert(name.into(), value);
        }
        self
    }

    /// Returns the number of parameters that survived pruning.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the map into query pairs.
    ///
    /// Numbers and booleans are stringified, lists are comma-joined; any
    /// other nested value falls back to its JSON representation.
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(name, value)| (name.clone(), render(value)))
            .collect()
    }

    /// Consumes the map into a JSON request body.
    pub(crate) fn into_body(self) -> Value {
        Value::Object(self.0)
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
