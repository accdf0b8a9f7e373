//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each tree line as
//! soon as `TreeWalker` reaches it, for use with any `termcolor` writer.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Entry, TreeOutput, connector};

use super::config::OutputConfig;
use super::style::StyleTable;
use super::utils::{format_mode, format_mtime, format_size};

/// Write `text` in `spec`, then reset so nothing bleeds into the next column.
fn write_styled<W: WriteColor>(out: &mut W, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{}", text)?;
    out.reset()
}

/// Streaming output formatter. Implements `TreeOutput` for use with
/// `TreeWalker`; color is up to the wrapped writer.
pub struct StreamingFormatter<W: WriteColor> {
    config: OutputConfig,
    styles: StyleTable,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    pub fn stdout(config: OutputConfig, styles: StyleTable) -> Self {
        // Color detection already happened when building the config
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(config, styles, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn new(config: OutputConfig, styles: StyleTable, out: W) -> Self {
        Self {
            config,
            styles,
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// `<root>:` line printed before each tree when several roots are listed.
    /// Every heading after the first is preceded by a blank line.
    pub fn write_heading(&mut self, root: &Path, first: bool) -> io::Result<()> {
        if !first {
            writeln!(self.out)?;
        }
        writeln!(self.out, "{}:", root.display())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn write_long_columns(&mut self, entry: &Entry) -> io::Result<()> {
        write!(self.out, " ")?;
        write_styled(
            &mut self.out,
            &self.styles.permissions,
            &format_mode(entry.metadata()),
        )?;
        write!(self.out, " ")?;
        write_styled(&mut self.out, &self.styles.size, &format_size(entry.size()))?;
        write!(self.out, " ")?;
        write_styled(
            &mut self.out,
            &self.styles.modified,
            &format_mtime(entry.modified()),
        )
    }
}

impl<W: WriteColor> TreeOutput for StreamingFormatter<W> {
    fn output_node(
        &mut self,
        entry: &Entry,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<()> {
        let style = self.styles.for_kind(entry.kind());

        if is_root {
            write_styled(&mut self.out, style, &entry.display_name())?;
            return writeln!(self.out);
        }

        write!(self.out, "{}{}", prefix, connector(is_last))?;
        write_styled(&mut self.out, style, &entry.display_name())?;

        if self.config.long_format {
            self.write_long_columns(entry)?;
        }
        writeln!(self.out)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use termcolor::{Buffer, NoColor};

    use super::*;
    use crate::test_utils::TestTree;
    use crate::tree::{TreeWalker, WalkerConfig};

    fn render(tree: &TestTree, walker: WalkerConfig, output: OutputConfig) -> String {
        let mut formatter =
            StreamingFormatter::new(output, StyleTable::new(), NoColor::new(Vec::new()));
        TreeWalker::new(walker)
            .walk(tree.path(), &mut formatter)
            .expect("walk should succeed");
        String::from_utf8(formatter.into_inner().into_inner()).unwrap()
    }

    fn plain() -> OutputConfig {
        OutputConfig {
            use_color: false,
            long_format: false,
        }
    }

    #[test]
    fn test_short_format_lines() {
        let tree = TestTree::sample();
        let output = render(&tree, WalkerConfig::default(), plain());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(&lines[1..], ["├─ a.txt", "╰─ sub", "   ╰─ b.txt"]);
    }

    #[test]
    fn test_root_line_has_no_glyph_or_columns() {
        let tree = TestTree::sample();
        let config = OutputConfig {
            use_color: false,
            long_format: true,
        };
        let output = render(&tree, WalkerConfig::default(), config);
        let root = output.lines().next().unwrap();
        let expected = tree.path().file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(root, expected);
    }

    #[test]
    fn test_long_format_columns() {
        let tree = TestTree::new();
        tree.add_file("data.bin", "hello");
        let config = OutputConfig {
            use_color: false,
            long_format: true,
        };
        let output = render(&tree, WalkerConfig::default(), config);
        let line = output.lines().nth(1).unwrap();

        assert!(line.starts_with("╰─ data.bin "), "got: {}", line);
        let columns: Vec<&str> = line["╰─ data.bin ".len()..].split_whitespace().collect();
        // mode, size, date, time
        assert_eq!(columns.len(), 4, "got: {:?}", columns);
        assert!(columns[0].starts_with('-'));
        assert_eq!(columns[1], "5");
        assert!(line.contains("         5 "), "size is right-justified: {}", line);
    }

    #[cfg(unix)]
    #[test]
    fn test_long_format_symlink_keeps_arrow() {
        let tree = TestTree::new();
        tree.add_symlink("elsewhere", "link");
        let config = OutputConfig {
            use_color: false,
            long_format: true,
        };
        let output = render(&tree, WalkerConfig::default(), config);
        let line = output.lines().nth(1).unwrap();
        assert!(line.starts_with("╰─ link -> elsewhere L"), "got: {}", line);
    }

    #[test]
    fn test_colored_output_uses_style_table() {
        let tree = TestTree::sample();
        let mut formatter = StreamingFormatter::new(
            OutputConfig::default(),
            StyleTable::new(),
            Buffer::ansi(),
        );
        TreeWalker::new(WalkerConfig::default())
            .walk(tree.path(), &mut formatter)
            .unwrap();
        let output = String::from_utf8(formatter.into_inner().into_inner()).unwrap();

        // Directory green, file blue
        assert!(output.contains("\x1b[38;2;78;154;6m"), "got: {:?}", output);
        assert!(output.contains("\x1b[38;2;114;159;207m"), "got: {:?}", output);
        // Glyphs are never colored
        assert!(output.contains("\n├─ \x1b[0m"), "got: {:?}", output);
    }

    #[test]
    fn test_headings_for_multiple_roots() {
        let mut formatter =
            StreamingFormatter::new(plain(), StyleTable::new(), NoColor::new(Vec::new()));
        formatter.write_heading(&PathBuf::from("first"), true).unwrap();
        formatter.write_heading(&PathBuf::from("second"), false).unwrap();
        let output = String::from_utf8(formatter.into_inner().into_inner()).unwrap();
        assert_eq!(output, "first:\n\nsecond:\n");
    }
}
