//! Code buffer for generated Java fragments
//!
//! This module provides the append-only [`CodeWriter`] that supplier generation writes into:
//! - inline appends of literal text (which may span several lines)
//! - braced scopes that indent their body and are always closed
//! - 2-space indentation by default

mod config;
mod writer;

pub use config::{FormatConfig, MAX_INDENT_WIDTH};
pub use writer::{CodeWriter, java_string_literal};
