//! Write the instance supplier of a bean: a deferred factory that creates the instance and injects its members.
//!
//! Two shapes are produced:
//! - a *shortcut* when nothing is injected and argument resolution is trivial: `Foo::new`, `() -> new Foo()`,
//!   `() -> context.getBean(Outer.class).new Inner()`, `() -> Config.foo()`;
//! - a *deferred factory* `(instanceContext) -> ...` otherwise. With injection points it becomes a block that binds
//!   the instance to `bean`, runs every injection in order, and returns `bean`.
//!
//! ## Notes
//! - The descriptor is checked before anything is written; an unresolvable bean leaves the buffer untouched.
//! - Injection points are written in the order given, with `required` forwarded unchanged.

use beangen_core::conventions::{BEAN_VAR, INSTANCE_CONTEXT_VAR};
use beangen_core::{BeanDefinition, BeanInstanceDescriptor, ConstructorInfo, Executable, FactoryMethodInfo, TypeRef};

use super::errors::SupplierError;
use super::injection::{InjectionPointWriter, InjectionWriter, InstantiationWriter, bean_lookup, method_target};
use crate::format::{CodeWriter, FormatConfig};

/// Write the instance supplier of one bean.
pub struct InstanceSupplierWriter<'a, W = InjectionPointWriter> {
    descriptor: &'a BeanInstanceDescriptor,
    definition: &'a BeanDefinition,
    writer: W,
}

impl<'a> InstanceSupplierWriter<'a> {
    /// Use the default [`InjectionPointWriter`] for instantiation and injection text.
    pub fn new(descriptor: &'a BeanInstanceDescriptor, definition: &'a BeanDefinition, config: &FormatConfig) -> Self {
        Self::with_writer(descriptor, definition, InjectionPointWriter::new(config.clone()))
    }
}

impl<'a, W> InstanceSupplierWriter<'a, W>
where
    W: InstantiationWriter + InjectionWriter,
{
    pub fn with_writer(descriptor: &'a BeanInstanceDescriptor, definition: &'a BeanDefinition, writer: W) -> Self {
        Self {
            descriptor,
            definition,
            writer,
        }
    }

    /// Append the supplier expression to `code`.
    ///
    /// ## Errors
    ///
    /// Returns [`SupplierError::UnresolvableCreator`] when the descriptor has no constructor or factory method.
    /// Nothing is appended in that case.
    #[tracing::instrument(skip_all, fields(bean = %self.definition.name))]
    pub fn write_instance_supplier(&self, code: &mut CodeWriter) -> Result<(), SupplierError> {
        let creator =
            self.descriptor
                .instance_creator
                .as_ref()
                .ok_or_else(|| SupplierError::UnresolvableCreator {
                    definition: self.definition.clone(),
                })?;
        match creator {
            Executable::Constructor(constructor) => self.write_constructor_instantiation(code, creator, constructor),
            Executable::FactoryMethod(method) => self.write_method_instantiation(code, creator, method),
        }
        Ok(())
    }

    fn has_injection_points(&self) -> bool {
        !self.descriptor.injection_points.is_empty()
    }

    fn write_constructor_instantiation(&self, code: &mut CodeWriter, creator: &Executable, constructor: &ConstructorInfo) {
        let declaring_type = &constructor.declaring_type;
        // Inner classes always take the outer instance
        let min_args = if constructor.is_inner_class() { 2 } else { 1 };
        if !self.has_injection_points() && constructor.parameter_types.len() < min_args {
            tracing::debug!(form = "shortcut", "constructor supplier");
            match &constructor.enclosing_type {
                Some(enclosing) => code.add(&format!(
                    "() -> {}.new {}()",
                    bean_lookup(enclosing),
                    declaring_type.simple_name()
                )),
                // Method reference is ambiguous with overloaded constructors
                None if constructor.declared_constructor_count > 1 => {
                    code.add(&format!("() -> new {}()", declaring_type))
                }
                None => code.add(&format!("{}::new", declaring_type)),
            }
            return;
        }
        self.write_deferred_factory(code, creator, declaring_type);
    }

    fn write_method_instantiation(&self, code: &mut CodeWriter, creator: &Executable, method: &FactoryMethodInfo) {
        if !self.has_injection_points() && method.parameter_types.is_empty() {
            tracing::debug!(form = "shortcut", "factory method supplier");
            code.add(&format!("() -> {}.{}()", method_target(method), method.name));
            return;
        }
        self.write_deferred_factory(code, creator, &self.descriptor.user_bean_class);
    }

    /// `(instanceContext) -> <instantiation>`, or a block binding `bean` when members are injected.
    fn write_deferred_factory(&self, code: &mut CodeWriter, creator: &Executable, bean_type: &TypeRef) {
        let instantiation = self.writer.write_instantiation(creator);
        code.add(&format!("({}) ->", INSTANCE_CONTEXT_VAR));
        if !self.has_injection_points() {
            tracing::debug!(form = "expression", "deferred supplier");
            code.add(" ");
            code.add(&instantiation);
            return;
        }
        tracing::debug!(
            form = "block",
            injection_points = self.descriptor.injection_points.len(),
            "deferred supplier"
        );
        code.block("", |code| {
            code.add(&format!("{} {} = ", bean_type, BEAN_VAR));
            code.add(&instantiation);
            code.add(";\n");
            for injection_point in &self.descriptor.injection_points {
                code.add(&self.writer.write_injection(&injection_point.member, injection_point.required));
                code.add(";\n");
            }
            code.add(&format!("return {};\n", BEAN_VAR));
        });
    }
}
