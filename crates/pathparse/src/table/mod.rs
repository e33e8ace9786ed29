//! Route table rendering
//!
//! Renders routes the way `rails routes` lists them: a `Prefix`, `Verb` and
//! `URI Pattern` column, aligned with [`TabWriter`].

use std::io::Write;

use crate::error::Result;
use crate::Route;

pub mod tabwriter;

pub use tabwriter::{TabConfig, TabWriter};

const HEADER: &str = "Prefix\tVerb\tURI Pattern\n";

/// Route table renderer with configurable alignment
///
/// # Examples
///
/// ```
/// use pathparse::{Route, RouteTable, TabConfig};
///
/// let table = RouteTable::with_config(TabConfig::default().with_pad_char('.'));
/// let out = table.render(&[Route::new("users", "GET", "users")]).unwrap();
/// assert_eq!(out, "Prefix.Verb.URI Pattern\nusers..GET..users\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteTable {
    config: TabConfig,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TabConfig) -> Self {
        Self { config }
    }

    /// Writes the header and one row per route, in input order
    pub fn write<W: Write>(&self, writer: W, routes: &[Route]) -> Result<()> {
        let mut tw = TabWriter::new(writer, self.config);

        tw.write_all(HEADER.as_bytes())?;
        for route in routes {
            writeln!(tw, "{}\t{}\t{}", route.prefix(), route.verb(), route.pattern())?;
        }
        tw.flush()?;

        tracing::debug!(routes = routes.len(), "rendered route table");
        Ok(())
    }

    /// Renders the table into a string
    ///
    /// Every cell comes from a `&str`, so the buffer is always valid UTF-8.
    pub fn render(&self, routes: &[Route]) -> Result<String> {
        let mut buf = Vec::new();
        self.write(&mut buf, routes)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Writes the route table into `writer`
///
/// Uses the default layout: min width 1, tab width 4, padding 1, spaces.
pub fn write_routes<W: Write>(writer: W, routes: &[Route]) -> Result<()> {
    RouteTable::new().write(writer, routes)
}

/// Returns the route table as a string
///
/// # Panics
///
/// Panics if the table cannot be formatted. Rendering targets an in-memory
/// buffer, so a failure means the buffer itself is broken and no partial
/// table is returned.
///
/// # Examples
///
/// ```
/// use pathparse::routes;
///
/// assert_eq!(routes(&[]), "Prefix Verb URI Pattern\n");
/// ```
pub fn routes(routes: &[Route]) -> String {
    unwrap_table(RouteTable::new().render(routes))
}

/// A failed render leaves no usable table behind
fn unwrap_table(rendered: Result<String>) -> String {
    rendered.unwrap_or_else(|err| panic!("{err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TableError;
    use pretty_assertions::assert_eq;
    use std::io;

    /// Accepts nothing and counts the attempts
    #[derive(Default)]
    struct BrokenPipe {
        attempts: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::other("pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(routes(&[]), "Prefix Verb URI Pattern\n");
    }

    #[test]
    fn test_rows_in_input_order() {
        let table = routes(&[
            Route::new("users", "GET", "users"),
            Route::new("root", "GET", "/"),
        ]);
        assert_eq!(
            table,
            "Prefix Verb URI Pattern\n\
             users  GET  users\n\
             root   GET  /\n"
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let route = Route::new("users", "GET", "users");
        let table = routes(&[route.clone(), route]);
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn test_long_verb_widens_column() {
        let table = routes(&[Route::new("user", "OPTIONS", "users/:id")]);
        assert_eq!(
            table,
            "Prefix Verb    URI Pattern\n\
             user   OPTIONS users/:id\n"
        );
    }

    #[test]
    fn test_write_routes_into_writer() {
        let mut buf = Vec::new();
        write_routes(&mut buf, &[Route::new("root", "GET", "/")]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Prefix Verb URI Pattern\nroot   GET  /\n"
        );
    }

    #[test]
    fn test_write_routes_error() {
        let mut pipe = BrokenPipe::default();
        let err = write_routes(&mut pipe, &[Route::new("root", "GET", "/")]).unwrap_err();

        assert!(matches!(err, TableError::Io(_)));
        assert_eq!(err.to_string(), "failed to write route table: pipe closed");
        // The whole table is handed over in one write at flush time
        assert_eq!(pipe.attempts, 1);
    }

    #[test]
    fn test_route_table_write_error() {
        let table = RouteTable::with_config(TabConfig::default().with_padding(2));
        let err = table.write(BrokenPipe::default(), &[]).unwrap_err();
        assert!(matches!(err, TableError::Io(_)));
    }

    #[test]
    fn test_unwrap_table_passes_rendered_text() {
        assert_eq!(unwrap_table(Ok("table\n".to_string())), "table\n");
    }

    #[test]
    #[should_panic(expected = "failed to write route table: pipe closed")]
    fn test_unwrap_table_panics_on_error() {
        unwrap_table(Err(TableError::Io(io::Error::other("pipe closed"))));
    }
}
