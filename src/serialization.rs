use crate::ast::*;
use crate::formatter::Formatter;
use serde::Serialize;
use std::collections::BTreeMap;

/// A summary of a model for external tooling: declared names and rendered
/// method signatures, without comments or layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

pub(crate) fn to_value(model: &Model) -> Value {
    object([
        ("package", string(model.package_name())),
        (
            "modules",
            Value::Object(
                model
                    .modules()
                    .iter()
                    .map(|module| (module.name().to_string(), string(module.path().trim_matches('"'))))
                    .collect(),
            ),
        ),
        ("types", array(model.type_definitions().iter().map(type_value))),
        (
            "functionals",
            array(model.functional_definitions().iter().map(|functional| {
                object([
                    ("name", declared_name(functional.declaration())),
                    (
                        "signature",
                        string(&signature("func", functional.parameters(), Some(functional.result()))),
                    ),
                ])
            })),
        ),
        ("classes", array(model.class_definitions().iter().map(class_value))),
        ("instances", array(model.instance_definitions().iter().map(instance_value))),
        ("aspects", array(model.aspect_definitions().iter().map(aspect_value))),
    ])
}

fn type_value(definition: &TypeDefinition) -> Value {
    let mut value = BTreeMap::from([
        ("name".to_string(), declared_name(definition.declaration())),
        ("abstraction".to_string(), string(&definition.abstraction().to_string())),
    ]);
    if let Some(enumeration) = definition.enumeration() {
        value.insert(
            "values".to_string(),
            array(enumeration.names().into_iter().map(string)),
        );
    }
    Value::Object(value)
}

fn class_value(class: &ClassDefinition) -> Value {
    let methods = class.class_methods();
    object([
        ("name", declared_name(class.declaration())),
        (
            "constructors",
            array(methods.constructor_methods().iter().map(|method| {
                let result = MethodResult::Abstraction(method.abstraction().clone());
                string(&signature(method.name(), method.parameters(), Some(&result)))
            })),
        ),
        (
            "constants",
            array(methods.constant_methods().iter().map(|method| {
                string(&format!("{}() {}", method.name(), method.abstraction()))
            })),
        ),
        (
            "functions",
            array(methods.function_methods().iter().map(|method| {
                string(&signature(method.name(), method.parameters(), Some(method.result())))
            })),
        ),
    ])
}

fn instance_value(instance: &InstanceDefinition) -> Value {
    let methods = instance.instance_methods();
    object([
        ("name", declared_name(instance.declaration())),
        (
            "public",
            array(methods.public_methods().iter().map(|method| method_value(method.method()))),
        ),
        (
            "attributes",
            array(methods.attribute_methods().iter().map(|method| match method {
                AttributeMethod::Getter(getter) => {
                    string(&format!("{}() {}", getter.name(), getter.abstraction()))
                }
                AttributeMethod::Setter(setter) => string(&signature(
                    setter.name(),
                    std::slice::from_ref(setter.parameter()),
                    None,
                )),
            })),
        ),
        (
            "aspects",
            array(
                methods
                    .aspect_interfaces()
                    .iter()
                    .map(|interface| string(&interface.abstraction().to_string())),
            ),
        ),
    ])
}

fn aspect_value(aspect: &AspectDefinition) -> Value {
    object([
        ("name", declared_name(aspect.declaration())),
        (
            "methods",
            array(aspect.aspect_methods().iter().map(|method| method_value(method.method()))),
        ),
    ])
}

fn method_value(method: &Method) -> Value {
    string(&signature(method.name(), method.parameters(), method.result()))
}

/// Renders a signature on one line: `Name(first T, second U) R`.
fn signature(name: &str, parameters: &[Parameter], result: Option<&MethodResult>) -> String {
    let result = match result {
        Some(MethodResult::Abstraction(abstraction)) => format!(" {abstraction}"),
        Some(MethodResult::Parameterized(parameterized)) => {
            format!(" ({})", inline_parameters(parameterized.parameters()))
        }
        Some(MethodResult::None(_)) | None => String::new(),
    };
    format!("{name}({}){result}", inline_parameters(parameters))
}

fn inline_parameters(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|parameter| format!("{} {}", parameter.name(), parameter.abstraction()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn declared_name(declaration: &Declaration) -> Value {
    let constraints = declaration
        .constraints()
        .map(|constraints| Formatter::new().format_constraints(constraints))
        .unwrap_or_default();
    Value::String(format!("{}{constraints}", declaration.name()))
}

fn string(text: &str) -> Value {
    Value::String(text.to_string())
}

fn array(values: impl Iterator<Item = Value>) -> Value {
    Value::Array(values.collect())
}

fn object<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
    )
}
