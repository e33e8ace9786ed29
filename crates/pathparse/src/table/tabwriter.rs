//! Elastic tabstop writer
//!
//! Aligns tab-separated cells into columns. A cell is text terminated by a
//! horizontal tab (`\t`) or a vertical tab (`\x0b`, a "soft" cell). The
//! last cell of a line is never terminated and is not part of any column.
//!
//! Consecutive lines that all have a cell in a given column form a *column
//! block*; every cell of the block is padded to the widest cell plus the
//! configured padding. A line without any tab ends every open block, so
//! output is written as soon as such a line is complete. Everything else is
//! buffered until [`Write::flush`].

use std::io::{self, Write};
use std::mem;

/// Formatting options for [`TabWriter`]
///
/// Immutable builder API: every `with_*` method returns an updated copy.
///
/// # Examples
///
/// ```
/// use pathparse::TabConfig;
///
/// let config = TabConfig::default()
///     .with_padding(2)
///     .with_pad_char('.')
///     .with_align_right(true);
///
/// assert_eq!(config.padding(), 2);
/// assert_eq!(config.pad_char(), '.');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabConfig {
    min_width: usize,
    tab_width: usize,
    padding: usize,
    pad_char: char,
    align_right: bool,
    discard_empty_columns: bool,
    tab_indent: bool,
    debug: bool,
}

impl Default for TabConfig {
    /// Settings used by the route table: min width 1, tab width 4,
    /// padding 1, space padded, no flags
    fn default() -> Self {
        Self {
            min_width: 1,
            tab_width: 4,
            padding: 1,
            pad_char: ' ',
            align_right: false,
            discard_empty_columns: false,
            tab_indent: false,
            debug: false,
        }
    }
}

impl TabConfig {
    /// Minimal cell width, padding included
    pub fn with_min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    /// Width of a tab character, used when padding with tabs
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Extra characters added to the widest cell of a column
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Character used for padding; `'\t'` pads to tab stops
    ///
    /// Padding with tabs always aligns left.
    pub fn with_pad_char(mut self, pad_char: char) -> Self {
        self.pad_char = pad_char;
        self
    }

    /// Pad before the cell text instead of after it
    pub fn with_align_right(mut self, align_right: bool) -> Self {
        self.align_right = align_right;
        self
    }

    /// Give columns of empty soft cells zero width
    pub fn with_discard_empty_columns(mut self, discard: bool) -> Self {
        self.discard_empty_columns = discard;
        self
    }

    /// Pad leading empty cells with tabs regardless of the pad char
    pub fn with_tab_indent(mut self, tab_indent: bool) -> Self {
        self.tab_indent = tab_indent;
        self
    }

    /// Print `|` between columns
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn min_width(&self) -> usize {
        self.min_width
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn pad_char(&self) -> char {
        self.pad_char
    }

    fn pads_with_tabs(&self) -> bool {
        self.pad_char == '\t'
    }

    fn aligns_right(&self) -> bool {
        self.align_right && !self.pads_with_tabs()
    }
}

/// A terminated cell
#[derive(Debug)]
struct Cell {
    text: Vec<u8>,
    /// Width in Unicode scalar values
    width: usize,
    /// Terminated by `\t` rather than `\x0b`
    htab: bool,
}

/// Column-aligning writer
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use pathparse::{TabConfig, TabWriter};
///
/// let mut tw = TabWriter::new(Vec::new(), TabConfig::default());
/// tw.write_all(b"a\tb\tc\naaa\tbbbb\tc\n").unwrap();
///
/// let out = String::from_utf8(tw.into_inner().unwrap()).unwrap();
/// assert_eq!(out, "a   b    c\naaa bbbb c\n");
/// ```
pub struct TabWriter<W: Write> {
    inner: W,
    config: TabConfig,
    /// Buffered lines; the last one is being filled
    lines: Vec<Vec<Cell>>,
    /// Bytes of the cell being filled
    cell: Vec<u8>,
}

impl<W: Write> TabWriter<W> {
    pub fn new(inner: W, config: TabConfig) -> Self {
        Self {
            inner,
            config,
            lines: vec![Vec::new()],
            cell: Vec::new(),
        }
    }

    pub fn config(&self) -> &TabConfig {
        &self.config
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Flushes buffered text and returns the underlying writer
    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.inner)
    }

    /// Closes the current cell, returning the cell count of its line
    fn terminate_cell(&mut self, htab: bool) -> usize {
        let text = mem::take(&mut self.cell);
        let width = String::from_utf8_lossy(&text).chars().count();

        // `new` and `flush_lines` always leave an open line behind
        let last = self.lines.len() - 1;
        let line = &mut self.lines[last];
        line.push(Cell { text, width, htab });
        line.len()
    }

    /// Formats every buffered line into the underlying writer
    fn flush_lines(&mut self) -> io::Result<()> {
        let mut out = Vec::new();
        self.format(&mut Vec::new(), &mut out, 0, self.lines.len());

        self.lines.clear();
        self.lines.push(Vec::new());

        self.inner.write_all(&out)
    }

    /// Lays out lines `line0..line1` given the widths of the enclosing columns
    fn format(&self, widths: &mut Vec<usize>, out: &mut Vec<u8>, mut line0: usize, line1: usize) {
        let column = widths.len();
        let mut this = line0;

        while this < line1 {
            if !self.has_column(this, column) {
                this += 1;
                continue;
            }

            // Lines above the block are complete at this depth
            self.write_lines(widths, out, line0, this);
            line0 = this;

            let mut width = self.config.min_width;
            let mut discardable = true;
            while this < line1 && self.has_column(this, column) {
                let cell = &self.lines[this][column];
                width = width.max(cell.width + self.config.padding);
                if cell.width > 0 || cell.htab {
                    discardable = false;
                }
                this += 1;
            }

            if discardable && self.config.discard_empty_columns {
                width = 0;
            }

            widths.push(width);
            self.format(widths, out, line0, this);
            widths.pop();
            line0 = this;
        }

        self.write_lines(widths, out, line0, line1);
    }

    /// Whether `line` has a terminated cell in `column`
    fn has_column(&self, line: usize, column: usize) -> bool {
        column + 1 < self.lines[line].len()
    }

    fn write_lines(&self, widths: &[usize], out: &mut Vec<u8>, line0: usize, line1: usize) {
        for i in line0..line1 {
            let mut use_tabs = self.config.tab_indent;

            for (j, cell) in self.lines[i].iter().enumerate() {
                if j > 0 && self.config.debug {
                    out.push(b'|');
                }

                let column_width = widths.get(j).copied();

                if cell.text.is_empty() {
                    if let Some(cell_width) = column_width {
                        self.write_padding(out, cell.width, cell_width, use_tabs);
                    }
                    continue;
                }

                use_tabs = false;
                if self.config.aligns_right() {
                    if let Some(cell_width) = column_width {
                        self.write_padding(out, cell.width, cell_width, false);
                    }
                    out.extend_from_slice(&cell.text);
                } else {
                    out.extend_from_slice(&cell.text);
                    if let Some(cell_width) = column_width {
                        self.write_padding(out, cell.width, cell_width, false);
                    }
                }
            }

            // The last buffered line is still open
            if i + 1 < self.lines.len() {
                out.push(b'\n');
            }
        }
    }

    fn write_padding(&self, out: &mut Vec<u8>, text_width: usize, cell_width: usize, use_tabs: bool) {
        if self.config.pads_with_tabs() || use_tabs {
            let tab_width = self.config.tab_width;
            if tab_width == 0 {
                return;
            }
            let cell_width = cell_width.div_ceil(tab_width) * tab_width;
            let n = cell_width.saturating_sub(text_width);
            out.extend(std::iter::repeat_n(b'\t', n.div_ceil(tab_width)));
            return;
        }

        let mut encoded = [0u8; 4];
        let pad = self.config.pad_char.encode_utf8(&mut encoded).as_bytes();
        for _ in 0..cell_width.saturating_sub(text_width) {
            out.extend_from_slice(pad);
        }
    }
}

impl<W: Write> Write for TabWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &byte in buf {
            match byte {
                b'\t' | b'\x0b' => {
                    self.terminate_cell(byte == b'\t');
                }
                b'\n' => {
                    let cells = self.terminate_cell(false);
                    self.lines.push(Vec::new());
                    // A line without tabs closes every column block
                    if cells == 1 {
                        self.flush_lines()?;
                    }
                }
                _ => self.cell.push(byte),
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.cell.is_empty() {
            self.terminate_cell(false);
        }
        self.flush_lines()?;
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(config: TabConfig, input: &str) -> String {
        let mut tw = TabWriter::new(Vec::new(), config);
        tw.write_all(input.as_bytes()).unwrap();
        String::from_utf8(tw.into_inner().unwrap()).unwrap()
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_aligns_columns() {
        let out = render(TabConfig::default(), "a\tb\tc\naaa\tbbbb\tc\n");
        assert_eq!(out, "a   b    c\naaa bbbb c\n");
    }

    #[test]
    fn test_single_line() {
        let out = render(TabConfig::default(), "Prefix\tVerb\tURI Pattern\n");
        assert_eq!(out, "Prefix Verb URI Pattern\n");
    }

    #[test]
    fn test_unterminated_last_line() {
        let out = render(TabConfig::default(), "a\tb\nccc\td");
        assert_eq!(out, "a   b\nccc d");
    }

    #[test]
    fn test_min_width() {
        let out = render(TabConfig::default().with_min_width(6), "a\tb\n");
        assert_eq!(out, "a     b\n");
    }

    #[test]
    fn test_column_blocks_are_independent() {
        let out = render(
            TabConfig::default(),
            "a\tb\nlonger line no tab\nxxxxx\ty\n",
        );
        assert_eq!(out, "a b\nlonger line no tab\nxxxxx y\n");
    }

    #[test]
    fn test_align_right() {
        let out = render(TabConfig::default().with_align_right(true), "a\tx\naaa\ty\n");
        assert_eq!(out, "   ax\n aaay\n");
    }

    #[test]
    fn test_pad_with_tabs() {
        let config = TabConfig::default().with_pad_char('\t');
        let out = render(config, "a\tb\naaaaa\tc\n");
        assert_eq!(out, "a\t\tb\naaaaa\tc\n");
    }

    #[test]
    fn test_pad_with_tabs_ignores_align_right() {
        let config = TabConfig::default().with_pad_char('\t').with_align_right(true);
        let out = render(config, "a\tb\n");
        assert_eq!(out, "a\tb\n");
    }

    #[test]
    fn test_debug_separators() {
        let out = render(TabConfig::default().with_debug(true), "a\tb\tc\n");
        assert_eq!(out, "a |b |c\n");
    }

    #[test]
    fn test_discard_empty_soft_columns() {
        let input = "a\x0b\x0bc\n";
        assert_eq!(render(TabConfig::default(), input), "a  c\n");
        let config = TabConfig::default().with_discard_empty_columns(true);
        assert_eq!(render(config, input), "a c\n");
    }

    #[test]
    fn test_tab_indent() {
        let config = TabConfig::default().with_tab_indent(true);
        let out = render(config, "\tx\n");
        assert_eq!(out, "\tx\n");
    }

    #[test]
    fn test_width_counts_chars() {
        let out = render(TabConfig::default(), "héllo\tx\nab\ty\n");
        assert_eq!(out, "héllo x\nab    y\n");
    }

    #[test]
    fn test_flush_resets_columns() {
        let mut tw = TabWriter::new(Vec::new(), TabConfig::default());
        tw.write_all(b"aaaaaa\tb\n").unwrap();
        tw.flush().unwrap();
        tw.write_all(b"a\tb\n").unwrap();
        let out = String::from_utf8(tw.into_inner().unwrap()).unwrap();
        assert_eq!(out, "aaaaaa b\na b\n");
    }

    #[test]
    fn test_nothing_written_before_flush() {
        let mut tw = TabWriter::new(Vec::new(), TabConfig::default());
        tw.write_all(b"a\tb\n").unwrap();
        assert!(tw.get_ref().is_empty());
        tw.flush().unwrap();
        assert_eq!(tw.get_ref().as_slice(), b"a b\n");
    }

    #[test]
    fn test_writer_error_is_returned() {
        let mut tw = TabWriter::new(FailingWriter, TabConfig::default());
        tw.write_all(b"a\tb\n").unwrap();
        let err = tw.flush().unwrap_err();
        assert_eq!(err.to_string(), "disk on fire");
    }
}
