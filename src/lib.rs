#![forbid(unsafe_code)]
//! Beangen: ahead-of-time bean instance supplier generator
//!
//! Given pre-resolved metadata about how a bean is created (a constructor or factory method) and which members are
//! injected afterwards, beangen writes the Java source of a lazily evaluated instance supplier for it.
//!
//! This crate provides the code buffer (`format`), supplier generation (`backend`), manifest loading (`input`)
//! and the command-line driver (`cli`). The descriptor model lives in `beangen_core`.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod format;
pub mod input;

pub use beangen_core::{BeanDefinition, BeanInstanceDescriptor, Executable, InjectionPoint, Member, TypeRef};

pub use backend::{FailurePolicy, InstanceSupplierWriter, SupplierCodegen, SupplierError};
pub use format::{CodeWriter, FormatConfig};
pub use input::{BeanSpec, load_manifest, parse_manifest};
