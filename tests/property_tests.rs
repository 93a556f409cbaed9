//! Property-based tests for instance supplier generation
//!
//! These tests use proptest to verify invariants across many randomly
//! generated descriptors, catching edge cases that hand-written tests might miss.

use beangen::backend::{InjectionWriter, InstantiationWriter};
use beangen::{
    BeanDefinition, BeanInstanceDescriptor, CodeWriter, Executable, FormatConfig, InjectionPoint, InstanceSupplierWriter,
    Member, SupplierError, TypeRef,
};
use beangen_core::{ConstructorInfo, FactoryMethodInfo, FieldInfo, MethodInfo};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn type_ref() -> impl Strategy<Value = TypeRef> {
    "[A-Z][a-z]{1,8}".prop_map(|name| TypeRef::new(format!("com.example.{}", name)))
}

fn constructor() -> impl Strategy<Value = ConstructorInfo> {
    (
        type_ref(),
        prop::collection::vec(type_ref(), 0..4),
        prop::option::of(type_ref()),
        1usize..4,
    )
        .prop_map(|(declaring_type, parameter_types, enclosing_type, count)| ConstructorInfo {
            declaring_type,
            parameter_types,
            enclosing_type,
            declared_constructor_count: count,
        })
}

fn factory_method() -> impl Strategy<Value = FactoryMethodInfo> {
    (type_ref(), "[a-z][a-zA-Z]{0,8}", prop::collection::vec(type_ref(), 0..4), any::<bool>()).prop_map(
        |(declaring_type, name, parameter_types, is_static)| FactoryMethodInfo {
            declaring_type,
            name,
            parameter_types,
            is_static,
        },
    )
}

fn executable() -> impl Strategy<Value = Executable> {
    prop_oneof![
        constructor().prop_map(Executable::Constructor),
        factory_method().prop_map(Executable::FactoryMethod),
    ]
}

/// Injection points named `m0`, `m1`, ... so their order is visible in the output.
fn injection_points() -> impl Strategy<Value = Vec<InjectionPoint>> {
    prop::collection::vec((any::<bool>(), any::<bool>(), type_ref()), 0..5).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (is_field, required, ty))| {
                let name = format!("m{}", i);
                let member = if is_field {
                    Member::Field(FieldInfo {
                        declaring_type: TypeRef::new("com.example.Bean"),
                        name,
                        field_type: ty,
                        is_private: required,
                    })
                } else {
                    Member::Method(MethodInfo {
                        declaring_type: TypeRef::new("com.example.Bean"),
                        name,
                        parameter_types: vec![ty],
                    })
                };
                InjectionPoint { member, required }
            })
            .collect()
    })
}

fn arb_descriptor() -> impl Strategy<Value = BeanInstanceDescriptor> {
    (type_ref(), prop::option::of(executable()), injection_points()).prop_map(
        |(user_bean_class, instance_creator, injection_points)| BeanInstanceDescriptor {
            user_bean_class,
            instance_creator,
            injection_points,
        },
    )
}

/// Placeholder writer exposing exactly what the supplier writer asked for.
struct PlaceholderWriter;

impl InstantiationWriter for PlaceholderWriter {
    fn write_instantiation(&self, _executable: &Executable) -> String {
        "create()".to_string()
    }
}

impl InjectionWriter for PlaceholderWriter {
    fn write_injection(&self, member: &Member, required: bool) -> String {
        format!("inject({}, {})", member.name(), required)
    }
}

fn write_default(descriptor: &BeanInstanceDescriptor) -> Result<String, SupplierError> {
    let definition = BeanDefinition::new("bean");
    let mut code = CodeWriter::new(FormatConfig::default());
    InstanceSupplierWriter::new(descriptor, &definition, &FormatConfig::default()).write_instance_supplier(&mut code)?;
    Ok(code.finish())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: writing the same descriptor into two fresh buffers gives identical output
    #[test]
    fn supplier_generation_is_idempotent(descriptor in arb_descriptor()) {
        let first = write_default(&descriptor);
        let second = write_default(&descriptor);
        prop_assert_eq!(first, second);
    }

    /// Property: injection points always produce a block, one statement per point, in input order
    #[test]
    fn injection_points_produce_ordered_block(
        creator in executable(),
        user_bean_class in type_ref(),
        points in injection_points().prop_filter("needs injection points", |p| !p.is_empty()),
    ) {
        let bean_type = match &creator {
            Executable::Constructor(ctor) => ctor.declaring_type.clone(),
            Executable::FactoryMethod(_) => user_bean_class.clone(),
        };
        let descriptor = BeanInstanceDescriptor {
            user_bean_class,
            instance_creator: Some(creator),
            injection_points: points.clone(),
        };
        let definition = BeanDefinition::new("bean");
        let mut code = CodeWriter::new(FormatConfig::default());
        InstanceSupplierWriter::with_writer(&descriptor, &definition, PlaceholderWriter)
            .write_instance_supplier(&mut code)
            .unwrap();

        let mut expected = format!("(instanceContext) -> {{\n  {} bean = create();\n", bean_type);
        for point in &points {
            expected.push_str(&format!("  inject({}, {});\n", point.member.name(), point.required));
        }
        expected.push_str("  return bean;\n}");
        prop_assert_eq!(code.finish(), expected);
    }

    /// Property: without injection points the supplier is a single expression
    #[test]
    fn no_injection_points_produce_expression(creator in executable(), user_bean_class in type_ref()) {
        let descriptor = BeanInstanceDescriptor::new(user_bean_class, Some(creator));
        let output = write_default(&descriptor).unwrap();
        prop_assert!(!output.contains("return bean;"));
        prop_assert!(!output.contains(" bean = "));
    }

    /// Property: a missing instance creator fails and leaves the buffer as it was
    #[test]
    fn missing_creator_appends_nothing(
        user_bean_class in type_ref(),
        points in injection_points(),
        prefix in "[a-z(]{0,12}",
    ) {
        let descriptor = BeanInstanceDescriptor {
            user_bean_class,
            instance_creator: None,
            injection_points: points,
        };
        let definition = BeanDefinition::new("broken");
        let mut code = CodeWriter::new(FormatConfig::default());
        code.add(&prefix);
        let result = InstanceSupplierWriter::new(&descriptor, &definition, &FormatConfig::default())
            .write_instance_supplier(&mut code);

        let unresolvable = matches!(result, Err(SupplierError::UnresolvableCreator { .. }));
        prop_assert!(unresolvable);
        prop_assert_eq!(code.finish(), prefix);
    }

    /// Property: no-arg constructors of top-level classes pick the shortest safe shortcut
    #[test]
    fn no_arg_constructor_shortcut(declaring_type in type_ref(), count in 1usize..5) {
        let descriptor = BeanInstanceDescriptor::for_constructor(
            ConstructorInfo::new(declaring_type.clone()).with_declared_constructor_count(count),
        );
        let output = write_default(&descriptor).unwrap();
        if count == 1 {
            prop_assert_eq!(output, format!("{}::new", declaring_type));
        } else {
            prop_assert_eq!(output, format!("() -> new {}()", declaring_type));
        }
    }

    /// Property: inner classes with only the outer instance ignore the declared-constructor count
    #[test]
    fn inner_class_shortcut_ignores_constructor_count(
        outer in type_ref(),
        inner_name in "[A-Z][a-z]{1,8}",
        count in 1usize..5,
        with_outer_parameter in any::<bool>(),
    ) {
        let inner = TypeRef::new(format!("{}.{}", outer, inner_name));
        let parameters = if with_outer_parameter { vec![outer.clone()] } else { Vec::new() };
        let descriptor = BeanInstanceDescriptor::for_constructor(
            ConstructorInfo::new(inner)
                .within(outer.clone())
                .with_parameters(parameters)
                .with_declared_constructor_count(count),
        );
        let output = write_default(&descriptor).unwrap();
        prop_assert_eq!(output, format!("() -> context.getBean({}.class).new {}()", outer, inner_name));
    }

    /// Property: no-arg factory methods call the type directly when static, its bean otherwise
    #[test]
    fn no_arg_factory_method_shortcut(method in factory_method().prop_map(|mut m| { m.parameter_types.clear(); m })) {
        let descriptor = BeanInstanceDescriptor::for_factory_method(TypeRef::new("com.example.Bean"), method.clone());
        let output = write_default(&descriptor).unwrap();
        let target = if method.is_static {
            method.declaring_type.to_string()
        } else {
            format!("context.getBean({}.class)", method.declaring_type)
        };
        prop_assert_eq!(output, format!("() -> {}.{}()", target, method.name));
    }
}
