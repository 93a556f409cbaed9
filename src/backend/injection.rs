//! Write the expressions that instantiate a bean and the statements that inject its members.
//!
//! The supplier writer only decides the *shape* of a supplier; the text of the creation call and of each injection
//! comes from the two contracts below. [`InjectionPointWriter`] is the default implementation of both.
//!
//! ## Notes
//! - Generated code runs inside a deferred factory whose parameter is `instanceContext`; `context` is the bean
//!   factory and `attributes` carries resolved arguments.
//! - Argument `i` is read with `attributes.get(i, T.class)`, or `attributes.get(i)` when `T` is parameterized and
//!   a class literal would lose its type arguments.

use beangen_core::conventions::{
    ATTRIBUTES_VAR, BEAN_VAR, CONTEXT_VAR, FIELD_LOCAL_SUFFIX, GET_BEAN_METHOD, INSTANCE_CONTEXT_VAR,
    REFLECT_FIELD_TYPE, REFLECTION_UTILS_TYPE,
};
use beangen_core::{ConstructorInfo, Executable, FactoryMethodInfo, FieldInfo, Member, MethodInfo, TypeRef};

use crate::format::{CodeWriter, FormatConfig, java_string_literal};

/// Produce the expression that invokes a resolved constructor or factory method.
pub trait InstantiationWriter {
    fn write_instantiation(&self, executable: &Executable) -> String;
}

/// Produce one statement injecting `member` into the local `bean`.
///
/// `required` is forwarded as given; optional injections are skipped at runtime when nothing resolves.
pub trait InjectionWriter {
    fn write_injection(&self, member: &Member, required: bool) -> String;
}

/// Default writer for instantiation expressions and injection statements.
#[derive(Debug, Clone, Default)]
pub struct InjectionPointWriter {
    config: FormatConfig,
}

impl InjectionPointWriter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    fn write_constructor(&self, constructor: &ConstructorInfo) -> String {
        let declaring_type = &constructor.declaring_type;
        let parameter_count = constructor.parameter_types.len();
        match &constructor.enclosing_type {
            // Only the synthetic outer instance
            Some(enclosing) if parameter_count <= 1 => {
                return inner_instantiation(enclosing, declaring_type, "");
            }
            None if parameter_count == 0 => return format!("new {}()", declaring_type),
            _ => {}
        }
        let target = match &constructor.enclosing_type {
            Some(enclosing) => {
                inner_instantiation(enclosing, declaring_type, &resolve_arguments(&constructor.parameter_types, 1))
            }
            None => format!(
                "new {}({})",
                declaring_type,
                resolve_arguments(&constructor.parameter_types, 0)
            ),
        };
        deferred_create(&target)
    }

    fn write_factory_method(&self, method: &FactoryMethodInfo) -> String {
        let call = format!(
            "{}.{}({})",
            method_target(method),
            method.name,
            resolve_arguments(&method.parameter_types, 0)
        );
        if method.parameter_types.is_empty() {
            call
        } else {
            deferred_create(&call)
        }
    }

    fn write_field_injection(&self, field: &FieldInfo, required: bool) -> String {
        let mut code = CodeWriter::new(self.config.clone());
        code.add(&format!(
            "{}.field({}, {})\n",
            INSTANCE_CONTEXT_VAR,
            java_string_literal(&field.name),
            class_literal(&field.field_type)
        ));
        code.indent();
        code.indent();
        code.add(&attributes_resolver(required));
        if field.is_private {
            let local = format!("{}{}", field.name, FIELD_LOCAL_SUFFIX);
            code.block("", |code| {
                code.add(&format!(
                    "{} {} = {}.findField({}, {}, {});\n",
                    REFLECT_FIELD_TYPE,
                    local,
                    REFLECTION_UTILS_TYPE,
                    class_literal(&field.declaring_type),
                    java_string_literal(&field.name),
                    class_literal(&field.field_type)
                ));
                code.add(&format!("{}.makeAccessible({});\n", REFLECTION_UTILS_TYPE, local));
                code.add(&format!(
                    "{}.setField({}, {}, {}.get(0));\n",
                    REFLECTION_UTILS_TYPE, local, BEAN_VAR, ATTRIBUTES_VAR
                ));
            });
        } else {
            code.add(&format!(" {}.{} = {}.get(0)", BEAN_VAR, field.name, ATTRIBUTES_VAR));
        }
        code.add(")");
        code.finish()
    }

    fn write_method_injection(&self, method: &MethodInfo, required: bool) -> String {
        let mut code = CodeWriter::new(self.config.clone());
        let lookup_arguments: Vec<String> = std::iter::once(java_string_literal(&method.name))
            .chain(method.parameter_types.iter().map(class_literal))
            .collect();
        code.add(&format!("{}.method({})\n", INSTANCE_CONTEXT_VAR, lookup_arguments.join(", ")));
        code.indent();
        code.indent();
        code.add(&attributes_resolver(required));
        code.add(&format!(
            " {}.{}({}))",
            BEAN_VAR,
            method.name,
            resolve_arguments(&method.parameter_types, 0)
        ));
        code.finish()
    }
}

impl InstantiationWriter for InjectionPointWriter {
    fn write_instantiation(&self, executable: &Executable) -> String {
        match executable {
            Executable::Constructor(constructor) => self.write_constructor(constructor),
            Executable::FactoryMethod(method) => self.write_factory_method(method),
        }
    }
}

impl InjectionWriter for InjectionPointWriter {
    fn write_injection(&self, member: &Member, required: bool) -> String {
        match member {
            Member::Field(field) => self.write_field_injection(field, required),
            Member::Method(method) => self.write_method_injection(method, required),
        }
    }
}

/// `T.class`
pub(crate) fn class_literal(ty: &TypeRef) -> String {
    format!("{}.class", ty)
}

/// `context.getBean(T.class)`
pub(crate) fn bean_lookup(ty: &TypeRef) -> String {
    format!("{}.{}({})", CONTEXT_VAR, GET_BEAN_METHOD, class_literal(ty))
}

/// The receiver of a factory method call: the type itself for static methods, its bean otherwise.
pub(crate) fn method_target(method: &FactoryMethodInfo) -> String {
    if method.is_static {
        method.declaring_type.to_string()
    } else {
        bean_lookup(&method.declaring_type)
    }
}

/// `context.getBean(Outer.class).new Inner(args)`
pub(crate) fn inner_instantiation(enclosing: &TypeRef, declaring_type: &TypeRef, arguments: &str) -> String {
    format!(
        "{}.new {}({})",
        bean_lookup(enclosing),
        declaring_type.simple_name(),
        arguments
    )
}

fn deferred_create(target: &str) -> String {
    format!(
        "{}.create({}, ({}) -> {})",
        INSTANCE_CONTEXT_VAR, CONTEXT_VAR, ATTRIBUTES_VAR, target
    )
}

fn attributes_resolver(required: bool) -> String {
    if required {
        format!(".invoke({}, ({}) ->", CONTEXT_VAR, ATTRIBUTES_VAR)
    } else {
        format!(".resolve({}, false).ifResolved(({}) ->", CONTEXT_VAR, ATTRIBUTES_VAR)
    }
}

/// Comma-separated `attributes.get(..)` reads for `parameter_types[first..]`, keeping declared indices.
fn resolve_arguments(parameter_types: &[TypeRef], first: usize) -> String {
    parameter_types
        .iter()
        .enumerate()
        .skip(first)
        .map(|(index, ty)| resolve_argument(ty, index))
        .collect::<Vec<_>>()
        .join(", ")
}

fn resolve_argument(ty: &TypeRef, index: usize) -> String {
    if ty.is_parameterized() {
        format!("{}.get({})", ATTRIBUTES_VAR, index)
    } else {
        format!("{}.get({}, {})", ATTRIBUTES_VAR, index, class_literal(ty))
    }
}
