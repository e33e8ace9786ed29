//! # pathparse
//!
//! Rails-style route names for URL patterns:
//! - Root pattern (`/` → `root`)
//! - Collections (`/users` → `users`)
//! - Members and actions (`/users/:id/edit` → `edit_user`)
//! - Nested resources (`/posts/:id/comments` → `post_comments`)
//!
//! Naming consults an [`Inflector`] for singular/plural questions. The
//! bundled [`English`] inflector is used by [`parse_route`]; any other
//! implementation can be injected through [`RouteNamer`].
//!
//! Routes can be listed as an aligned table, like `rails routes` prints them.
//!
//! ## Example
//!
//! ```
//! use pathparse::{parse_route, routes};
//!
//! let list = vec![
//!     parse_route("GET", "/"),
//!     parse_route("GET", "/users"),
//!     parse_route("GET", "/users/:id/edit"),
//! ];
//!
//! assert_eq!(list[2].prefix(), "edit_user");
//! assert_eq!(
//!     routes(&list),
//!     "Prefix    Verb URI Pattern\n\
//!      root      GET  /\n\
//!      users     GET  users\n\
//!      edit_user GET  users/:id/edit\n"
//! );
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod inflect;
mod namer;
mod route;
pub mod table;

pub use error::TableError;
pub use inflect::{English, Inflector};
pub use namer::RouteNamer;
pub use route::Route;
pub use table::{routes, write_routes, RouteTable, TabConfig, TabWriter};

/// Names a route using the shared [`English`] inflector
///
/// # Examples
///
/// ```
/// use pathparse::parse_route;
///
/// let route = parse_route("GET", "/users/:id/profile");
/// assert_eq!(route.prefix(), "profile_user");
/// assert_eq!(route.pattern(), "users/:id/profile");
/// ```
pub fn parse_route(verb: &str, pattern: &str) -> Route {
    RouteNamer::new(English::shared()).parse(verb, pattern)
}
