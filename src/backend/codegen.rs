//! Supplier generation facade
//!
//! This module provides `SupplierCodegen`, which writes the instance supplier of every bean in a manifest:
//!
//! ```text
//! BeanSpec → InstanceSupplierWriter → CodeWriter → GeneratedSupplier
//! ```
//!
//! ## Error Handling
//!
//! An unresolvable bean either aborts the whole run ([`FailurePolicy::Abort`], the default) or is reported and
//! skipped ([`FailurePolicy::Skip`]). Each bean is written into its own buffer, so a failure never leaves partial
//! code behind in either mode.

use serde::Serialize;

use super::errors::SupplierError;
use super::supplier::InstanceSupplierWriter;
use crate::format::{CodeWriter, FormatConfig};
use crate::input::BeanSpec;

/// What to do when a bean has no resolvable instance creator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first unresolvable bean.
    #[default]
    Abort,
    /// Log the failure, record it, and continue with the next bean.
    Skip,
}

/// Instance supplier code for one bean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSupplier {
    #[serde(rename = "bean")]
    pub bean_name: String,
    pub code: String,
}

/// Result of a generation run, in input order.
#[derive(Debug, Default)]
pub struct GeneratedSuppliers {
    pub suppliers: Vec<GeneratedSupplier>,
    /// Beans left out under [`FailurePolicy::Skip`].
    pub skipped: Vec<SupplierError>,
}

/// Generate instance suppliers for a batch of beans.
#[derive(Debug, Clone, Default)]
pub struct SupplierCodegen {
    config: FormatConfig,
    failure_policy: FailurePolicy,
}

impl SupplierCodegen {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            config,
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Generate suppliers for all `beans`.
    ///
    /// ## Errors
    ///
    /// Under [`FailurePolicy::Abort`], returns the first [`SupplierError`]. Under [`FailurePolicy::Skip`] this
    /// never fails.
    #[tracing::instrument(skip_all, fields(bean_count = beans.len(), policy = ?self.failure_policy))]
    pub fn generate(&self, beans: &[BeanSpec]) -> Result<GeneratedSuppliers, SupplierError> {
        let mut generated = GeneratedSuppliers::default();
        for bean in beans {
            match self.generate_one(bean) {
                Ok(code) => generated.suppliers.push(GeneratedSupplier {
                    bean_name: bean.definition.name.clone(),
                    code,
                }),
                Err(err) => match self.failure_policy {
                    FailurePolicy::Abort => return Err(err),
                    FailurePolicy::Skip => {
                        tracing::warn!(bean = %bean.definition.name, "skipping bean: {}", err);
                        generated.skipped.push(err);
                    }
                },
            }
        }
        tracing::debug!(
            generated = generated.suppliers.len(),
            skipped = generated.skipped.len(),
            "supplier generation finished"
        );
        Ok(generated)
    }

    /// Generate the supplier of a single bean into a fresh buffer.
    pub fn generate_one(&self, bean: &BeanSpec) -> Result<String, SupplierError> {
        let mut code = CodeWriter::new(self.config.clone());
        InstanceSupplierWriter::new(&bean.descriptor, &bean.definition, &self.config).write_instance_supplier(&mut code)?;
        Ok(code.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beangen_core::{BeanDefinition, BeanInstanceDescriptor, ConstructorInfo, TypeRef};

    fn resolvable(name: &str, ty: &str) -> BeanSpec {
        BeanSpec {
            definition: BeanDefinition::new(name),
            descriptor: BeanInstanceDescriptor::for_constructor(ConstructorInfo::new(TypeRef::new(ty))),
        }
    }

    fn unresolvable(name: &str) -> BeanSpec {
        BeanSpec {
            definition: BeanDefinition::new(name),
            descriptor: BeanInstanceDescriptor::new(TypeRef::new("com.example.Broken"), None),
        }
    }

    #[test]
    fn test_generate_keeps_input_order() {
        let beans = vec![resolvable("b", "com.example.B"), resolvable("a", "com.example.A")];
        let generated = SupplierCodegen::default().generate(&beans).unwrap();
        let names: Vec<&str> = generated.suppliers.iter().map(|s| s.bean_name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(generated.suppliers[0].code, "com.example.B::new");
        assert!(generated.skipped.is_empty());
    }

    #[test]
    fn test_abort_policy_stops_at_first_failure() {
        let beans = vec![resolvable("a", "com.example.A"), unresolvable("broken"), unresolvable("other")];
        let err = SupplierCodegen::default().generate(&beans).unwrap_err();
        assert_eq!(err.definition().name, "broken");
    }

    #[test]
    fn test_skip_policy_collects_failures() {
        let beans = vec![unresolvable("broken"), resolvable("a", "com.example.A"), unresolvable("other")];
        let generated = SupplierCodegen::default()
            .with_failure_policy(FailurePolicy::Skip)
            .generate(&beans)
            .unwrap();
        assert_eq!(generated.suppliers.len(), 1);
        assert_eq!(generated.suppliers[0].bean_name, "a");
        let skipped: Vec<&str> = generated.skipped.iter().map(|e| e.definition().name.as_str()).collect();
        assert_eq!(skipped, vec!["broken", "other"]);
    }

    #[test]
    fn test_oversized_indent_width_does_not_overflow() {
        let mut bean = resolvable("a", "com.example.A");
        bean.descriptor = bean.descriptor.with_injection_point(beangen_core::InjectionPoint::required(
            beangen_core::Member::Method(beangen_core::MethodInfo {
                declaring_type: TypeRef::new("com.example.A"),
                name: "init".to_string(),
                parameter_types: Vec::new(),
            }),
        ));
        let config = FormatConfig {
            indent_width: usize::MAX,
        };
        let generated = SupplierCodegen::new(config).generate(&[bean]).unwrap();
        let code = &generated.suppliers[0].code;
        assert!(code.starts_with("(instanceContext) -> {\n                com.example.A bean = "));
        assert!(code.ends_with("return bean;\n}"));
    }

    #[test]
    fn test_generate_one_uses_configured_indent() {
        let mut bean = resolvable("a", "com.example.A");
        bean.descriptor = bean.descriptor.with_injection_point(beangen_core::InjectionPoint::required(
            beangen_core::Member::Method(beangen_core::MethodInfo {
                declaring_type: TypeRef::new("com.example.A"),
                name: "init".to_string(),
                parameter_types: Vec::new(),
            }),
        ));
        let code = SupplierCodegen::new(FormatConfig::new().with_indent_width(4))
            .generate_one(&bean)
            .unwrap();
        assert_eq!(
            code,
            "(instanceContext) -> {\n    com.example.A bean = new com.example.A();\n    instanceContext.method(\"init\")\n            .invoke(context, (attributes) -> bean.init());\n    return bean;\n}"
        );
    }
}
