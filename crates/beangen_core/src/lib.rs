//! Provide the pre-resolved descriptor model and generated-code vocabulary for the beangen supplier generator.
//!
//! This crate is intentionally small and dependency-light. It contains plain data that an external analysis phase
//! fills in once per bean (which constructor or factory method creates it, and which members are injected
//! afterwards), so that code generation only branches on fields and never inspects types itself.
//!
//! ## Notes
//!
//! - This is a “model core” crate: **no IO**, no global state, and no generator-specific types.
//! - `serde` support is opt-in through the `serde` feature.

pub mod conventions;
pub mod descriptor;

pub use descriptor::{
    BeanDefinition, BeanInstanceDescriptor, ConstructorInfo, Executable, FactoryMethodInfo, FieldInfo, InjectionPoint,
    Member, MethodInfo, TypeRef,
};
