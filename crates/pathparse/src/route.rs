//! Route record produced by the namer
//!
//! Immutable value type: fields are private and only readable through accessors.

use std::fmt;

/// A Rails-style description of a single route
///
/// # Examples
///
/// ```
/// use pathparse::Route;
///
/// let route = Route::new("user", "GET", "users/:id");
/// assert_eq!(route.prefix(), "user");
/// assert_eq!(route.verb(), "GET");
/// assert_eq!(route.pattern(), "users/:id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Rails-style key of the URL path, e.g. `root` or `edit_user`
    prefix: String,
    /// HTTP verb, passed through as given
    verb: String,
    /// URL pattern with one leading and one trailing `/` stripped
    pattern: String,
}

impl Route {
    /// Creates a route from already known parts
    pub fn new(
        prefix: impl Into<String>,
        verb: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            verb: verb.into(),
            pattern: pattern.into(),
        }
    }

    /// The derived route name
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The HTTP verb
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// The normalized URL pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.prefix, self.verb, self.pattern)
    }
}
