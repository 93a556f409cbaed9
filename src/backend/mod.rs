//! Beangen Backend
//!
//! This module turns resolved bean descriptors into Java instance supplier code.
//!
//! ## Module Organization
//!
//! - `supplier.rs` - `InstanceSupplierWriter`: chooses between shortcut and deferred-factory suppliers
//! - `injection.rs` - Writer contracts for instantiation/injection text and their default implementation
//! - `codegen.rs` - `SupplierCodegen`: batch generation with a failure policy
//! - `errors.rs` - Generation errors

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod codegen;
pub mod errors;
pub mod injection;
pub mod supplier;

pub use codegen::{FailurePolicy, GeneratedSupplier, GeneratedSuppliers, SupplierCodegen};
pub use errors::SupplierError;
pub use injection::{InjectionPointWriter, InjectionWriter, InstantiationWriter};
pub use supplier::InstanceSupplierWriter;
