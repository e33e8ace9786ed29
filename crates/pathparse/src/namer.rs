//! Rails-style route naming
//!
//! Pure functional derivation of a route prefix from a URL pattern. The
//! only collaborator is a read-only [`Inflector`].

use std::collections::VecDeque;

use crate::inflect::Inflector;
use crate::Route;

/// Placeholder segment dropped from the prefix (except in last position)
const ID_PARAM: &str = ":id";

/// Prefix used for the root pattern `/`
const ROOT_PREFIX: &str = "root";

/// Derives Rails-style route names using an injected inflector
///
/// # Examples
///
/// ```
/// use pathparse::{English, RouteNamer};
///
/// let namer = RouteNamer::new(English::shared());
///
/// assert_eq!(namer.parse("GET", "/").prefix(), "root");
/// assert_eq!(namer.parse("GET", "/users").prefix(), "users");
/// assert_eq!(namer.parse("GET", "/users/:id/edit").prefix(), "edit_user");
/// ```
pub struct RouteNamer<'a, I: Inflector + ?Sized> {
    inflector: &'a I,
}

impl<I: Inflector + ?Sized> Clone for RouteNamer<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: Inflector + ?Sized> Copy for RouteNamer<'_, I> {}

impl<'a, I: Inflector + ?Sized> RouteNamer<'a, I> {
    /// Creates a namer that consults `inflector` for every segment
    pub fn new(inflector: &'a I) -> Self {
        Self { inflector }
    }

    /// Builds a [`Route`] from an HTTP verb and a URL pattern
    ///
    /// Never fails. The verb is carried through untouched and does not take
    /// part in naming.
    ///
    /// # Naming Rules
    ///
    /// 1. `/` is named `root`
    /// 2. One leading and one trailing `/` are stripped, then the pattern is
    ///    split on `/`
    /// 3. The last segment goes to the front of the name if singular,
    ///    otherwise to the end
    /// 4. Other `:id` segments are dropped
    /// 5. Other plural segments are singularized
    /// 6. Words are joined with `_`
    ///
    /// So `users/:id/profile` is named `profile_user`.
    pub fn parse(&self, verb: &str, pattern: &str) -> Route {
        if pattern == "/" {
            return Route::new(ROOT_PREFIX, verb, pattern);
        }

        let pattern = pattern.strip_prefix('/').unwrap_or(pattern);
        let pattern = pattern.strip_suffix('/').unwrap_or(pattern);

        let segments: Vec<&str> = pattern.split('/').collect();
        let last = segments.len() - 1;

        let words = segments
            .iter()
            .enumerate()
            .fold(VecDeque::with_capacity(segments.len()), |mut words, (i, &segment)| {
                match segment {
                    _ if i == last => {
                        if self.inflector.is_singular(segment) {
                            words.push_front(segment.to_string());
                        } else {
                            words.push_back(segment.to_string());
                        }
                    }
                    ID_PARAM => {}
                    _ if self.inflector.is_plural(segment) => {
                        words.push_back(self.inflector.singularize(segment));
                    }
                    _ => words.push_back(segment.to_string()),
                }
                words
            });

        let prefix = Vec::from(words).join("_");
        tracing::trace!(pattern, prefix = %prefix, "named route");

        Route::new(prefix, verb, pattern)
    }
}
