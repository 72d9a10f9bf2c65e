use super::{Abstraction, MethodResult, Parameter};
use serde::Serialize;

/// A class constructor: `MakeWithName(name string) FooLike`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ConstructorMethod {
    name: String,
    parameters: Vec<Parameter>,
    abstraction: Abstraction,
}

impl ConstructorMethod {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>, abstraction: Abstraction) -> Self {
        Self {
            name: name.into(),
            parameters,
            abstraction,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn abstraction(&self) -> &Abstraction {
        &self.abstraction
    }
}

/// A class constant: `Pi() float64`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ConstantMethod {
    name: String,
    abstraction: Abstraction,
}

impl ConstantMethod {
    pub fn new(name: impl Into<String>, abstraction: Abstraction) -> Self {
        Self {
            name: name.into(),
            abstraction,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abstraction(&self) -> &Abstraction {
        &self.abstraction
    }
}

/// A class function: a method bound to the class rather than to an instance.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct FunctionMethod {
    name: String,
    parameters: Vec<Parameter>,
    result: MethodResult,
}

impl FunctionMethod {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>, result: MethodResult) -> Self {
        Self {
            name: name.into(),
            parameters,
            result,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn result(&self) -> &MethodResult {
        &self.result
    }
}

/// The signature shared by public and aspect methods.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Method {
    name: String,
    parameters: Vec<Parameter>,
    result: Option<MethodResult>,
}

impl Method {
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        result: Option<MethodResult>,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            result,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn result(&self) -> Option<&MethodResult> {
        self.result.as_ref()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct PublicMethod {
    method: Method,
}

impl PublicMethod {
    pub fn new(method: Method) -> Self {
        Self { method }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct AspectMethod {
    method: Method,
}

impl AspectMethod {
    pub fn new(method: Method) -> Self {
        Self { method }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

/// An accessor for an instance attribute.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub enum AttributeMethod {
    Getter(GetterMethod),
    Setter(SetterMethod),
}

impl AttributeMethod {
    pub fn name(&self) -> &str {
        match self {
            AttributeMethod::Getter(getter) => getter.name(),
            AttributeMethod::Setter(setter) => setter.name(),
        }
    }
}

/// `GetName() string`
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct GetterMethod {
    name: String,
    abstraction: Abstraction,
}

impl GetterMethod {
    pub fn new(name: impl Into<String>, abstraction: Abstraction) -> Self {
        Self {
            name: name.into(),
            abstraction,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abstraction(&self) -> &Abstraction {
        &self.abstraction
    }
}

/// `SetName(name string)`
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct SetterMethod {
    name: String,
    parameter: Parameter,
}

impl SetterMethod {
    pub fn new(name: impl Into<String>, parameter: Parameter) -> Self {
        Self {
            name: name.into(),
            parameter,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameter(&self) -> &Parameter {
        &self.parameter
    }
}
