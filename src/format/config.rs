//! Formatting configuration for generated Java code

/// Widest indentation level the writer emits
pub const MAX_INDENT_WIDTH: usize = 16;

/// Formatting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        // Two-space indentation, as in other generated Java sources
        Self { indent_width: 2 }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width (capped at [`MAX_INDENT_WIDTH`])
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width.min(MAX_INDENT_WIDTH);
        self
    }
}
