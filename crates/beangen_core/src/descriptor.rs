//! Resolved bean creation metadata.
//!
//! Every type here is immutable input: an analysis phase decides which constructor or factory method creates a
//! bean and which members receive dependencies afterwards, and the generator only reads the result.
//!
//! ## Notes
//! - [`Executable`] is a closed sum type; there is no "unknown member" variant to validate.
//! - An absent [`BeanInstanceDescriptor::instance_creator`] marks a bean that could not be resolved upstream.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A referenced Java type, identified by its canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeRef {
    /// Canonical name, e.g. `com.example.Outer.Inner`.
    pub canonical_name: String,
    /// Generic arguments; empty for raw or non-generic types.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub type_arguments: Vec<TypeRef>,
}

impl TypeRef {
    pub fn new(canonical_name: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            type_arguments: Vec::new(),
        }
    }

    /// Attach generic arguments (`Provider<Foo>`).
    pub fn with_type_arguments(mut self, arguments: Vec<TypeRef>) -> Self {
        self.type_arguments = arguments;
        self
    }

    /// Last segment of the canonical name.
    pub fn simple_name(&self) -> &str {
        self.canonical_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.canonical_name)
    }

    pub fn is_parameterized(&self) -> bool {
        !self.type_arguments.is_empty()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name)
    }
}

/// The member that produces a bean instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Executable {
    Constructor(ConstructorInfo),
    FactoryMethod(FactoryMethodInfo),
}

impl Executable {
    pub fn declaring_type(&self) -> &TypeRef {
        match self {
            Executable::Constructor(ctor) => &ctor.declaring_type,
            Executable::FactoryMethod(method) => &method.declaring_type,
        }
    }

    pub fn parameter_types(&self) -> &[TypeRef] {
        match self {
            Executable::Constructor(ctor) => &ctor.parameter_types,
            Executable::FactoryMethod(method) => &method.parameter_types,
        }
    }
}

/// A constructor of the (user-visible) bean class.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstructorInfo {
    pub declaring_type: TypeRef,
    /// Declared parameters. For inner classes the synthetic outer-instance parameter comes first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameter_types: Vec<TypeRef>,
    /// Set when the declaring type is a non-static member class of this type.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub enclosing_type: Option<TypeRef>,
    /// Number of constructors the declaring type declares (including this one).
    #[cfg_attr(feature = "serde", serde(default = "default_constructor_count"))]
    pub declared_constructor_count: usize,
}

impl ConstructorInfo {
    /// A no-arg constructor on a type that declares only this constructor.
    pub fn new(declaring_type: TypeRef) -> Self {
        Self {
            declaring_type,
            parameter_types: Vec::new(),
            enclosing_type: None,
            declared_constructor_count: 1,
        }
    }

    pub fn with_parameters(mut self, parameter_types: Vec<TypeRef>) -> Self {
        self.parameter_types = parameter_types;
        self
    }

    /// Mark the declaring type as an inner class of `enclosing`.
    pub fn within(mut self, enclosing: TypeRef) -> Self {
        self.enclosing_type = Some(enclosing);
        self
    }

    pub fn with_declared_constructor_count(mut self, count: usize) -> Self {
        self.declared_constructor_count = count;
        self
    }

    pub fn is_inner_class(&self) -> bool {
        self.enclosing_type.is_some()
    }
}

/// A static or instance method returning the bean.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FactoryMethodInfo {
    pub declaring_type: TypeRef,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameter_types: Vec<TypeRef>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_static: bool,
}

impl FactoryMethodInfo {
    pub fn new(declaring_type: TypeRef, name: impl Into<String>) -> Self {
        Self {
            declaring_type,
            name: name.into(),
            parameter_types: Vec::new(),
            is_static: false,
        }
    }

    pub fn with_parameters(mut self, parameter_types: Vec<TypeRef>) -> Self {
        self.parameter_types = parameter_types;
        self
    }

    pub fn static_method(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// A member receiving a dependency after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Member {
    Field(FieldInfo),
    /// Setters and other injected methods.
    Method(MethodInfo),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Field(field) => &field.name,
            Member::Method(method) => &method.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldInfo {
    pub declaring_type: TypeRef,
    pub name: String,
    pub field_type: TypeRef,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_private: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MethodInfo {
    pub declaring_type: TypeRef,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameter_types: Vec<TypeRef>,
}

/// One entry of the ordered injection sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InjectionPoint {
    pub member: Member,
    #[cfg_attr(feature = "serde", serde(default = "default_required"))]
    pub required: bool,
}

impl InjectionPoint {
    pub fn required(member: Member) -> Self {
        Self { member, required: true }
    }

    pub fn optional(member: Member) -> Self {
        Self { member, required: false }
    }
}

/// Everything needed to write the instance supplier of one bean.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BeanInstanceDescriptor {
    /// The bean class with any generated proxy subclass stripped.
    pub user_bean_class: TypeRef,
    /// `None` when no constructor or factory method could be resolved.
    #[cfg_attr(feature = "serde", serde(default))]
    pub instance_creator: Option<Executable>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub injection_points: Vec<InjectionPoint>,
}

impl BeanInstanceDescriptor {
    pub fn new(user_bean_class: TypeRef, instance_creator: Option<Executable>) -> Self {
        Self {
            user_bean_class,
            instance_creator,
            injection_points: Vec::new(),
        }
    }

    /// Descriptor created by `constructor`, with the user class taken from its declaring type.
    pub fn for_constructor(constructor: ConstructorInfo) -> Self {
        Self::new(constructor.declaring_type.clone(), Some(Executable::Constructor(constructor)))
    }

    pub fn for_factory_method(user_bean_class: TypeRef, method: FactoryMethodInfo) -> Self {
        Self::new(user_bean_class, Some(Executable::FactoryMethod(method)))
    }

    pub fn with_injection_point(mut self, injection_point: InjectionPoint) -> Self {
        self.injection_points.push(injection_point);
        self
    }
}

/// Identity of the bean definition a descriptor was derived from; used for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BeanDefinition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default, rename = "resource", skip_serializing_if = "Option::is_none"))]
    pub resource_description: Option<String>,
}

impl BeanDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_description: None,
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource_description = Some(resource.into());
        self
    }
}

impl fmt::Display for BeanDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bean definition '{}'", self.name)?;
        if let Some(resource) = &self.resource_description {
            write!(f, " defined in {}", resource)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
fn default_required() -> bool {
    true
}

#[cfg(feature = "serde")]
fn default_constructor_count() -> usize {
    1
}
