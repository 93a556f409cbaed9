//! Append-only code buffer with indentation tracking
//!
//! Generated fragments are accumulated here. Text may span several lines; indentation is written lazily at the
//! start of every non-empty line, so blank lines never carry trailing whitespace.

use super::config::{FormatConfig, MAX_INDENT_WIDTH};

/// Writer that tracks indentation and builds generated code
#[derive(Debug)]
pub struct CodeWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Configuration
    config: FormatConfig,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl CodeWriter {
    /// Create a new code writer with the given config
    pub fn new(config: FormatConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            at_line_start: true,
        }
    }

    /// Get the generated output
    pub fn finish(self) -> String {
        self.output
    }

    /// Get current buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Get current indentation level
    #[cfg(test)]
    fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn unindent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            let width = self
                .indent_level
                .saturating_mul(self.config.indent_width.min(MAX_INDENT_WIDTH));
            self.output.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
    }

    fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Append text (with auto-indent on every line it starts)
    pub fn add(&mut self, text: &str) {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.newline();
            }
            if !line.is_empty() {
                self.write_indent();
                self.output.push_str(line);
            }
        }
    }

    /// Write a braced scope: `header {`, the indented body, then `}`.
    ///
    /// The closing brace is not followed by a newline so the scope can end inside an enclosing expression.
    pub fn block<F>(&mut self, header: &str, body: F)
    where
        F: FnOnce(&mut Self),
    {
        self.add(header);
        self.add(" {\n");
        self.indent();
        body(self);
        self.unindent();
        self.add("}");
    }
}

/// Quote `text` as a Java string literal.
pub fn java_string_literal(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for c in text.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
