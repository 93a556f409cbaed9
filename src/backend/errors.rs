//! Define error types for instance supplier generation.
//!
//! ## Notes
//!
//! - There is a single failure: the descriptor names no constructor or factory method. It is raised before
//!   anything is written, so the target buffer never holds a partial supplier.

use beangen_core::BeanDefinition;
use miette::Diagnostic;
use thiserror::Error;

/// Error during instance supplier generation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SupplierError {
    /// No constructor or factory method was resolved for the bean.
    #[error("could not handle {definition}: no instance creator available")]
    #[diagnostic(
        code(beangen::unresolvable_creator),
        help("the bean needs exactly one resolved constructor or factory method")
    )]
    UnresolvableCreator { definition: BeanDefinition },
}

impl SupplierError {
    /// Bean definition the failure refers to.
    pub fn definition(&self) -> &BeanDefinition {
        match self {
            SupplierError::UnresolvableCreator { definition } => definition,
        }
    }
}
