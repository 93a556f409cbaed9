//! Shared generator conventions (well-known identifiers in generated code).

/// Bean factory available to every generated supplier.
pub const CONTEXT_VAR: &str = "context";

/// Parameter of the deferred single-argument factory lambda.
pub const INSTANCE_CONTEXT_VAR: &str = "instanceContext";

/// Local holding the constructed instance while injections run.
pub const BEAN_VAR: &str = "bean";

/// Parameter carrying resolved arguments inside `create`/`invoke` callbacks.
pub const ATTRIBUTES_VAR: &str = "attributes";

/// Context method used to look up an existing bean by type.
pub const GET_BEAN_METHOD: &str = "getBean";

/// Suffix of the local holding a reflected private field (`fooField`).
pub const FIELD_LOCAL_SUFFIX: &str = "Field";

/// Reflection helper used for private field injection.
pub const REFLECTION_UTILS_TYPE: &str = "org.springframework.util.ReflectionUtils";

/// Reflected field type.
pub const REFLECT_FIELD_TYPE: &str = "java.lang.reflect.Field";
