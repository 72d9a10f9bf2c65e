use super::{Abstraction, Declaration, MethodResult, Parameter};
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct TypeSection {
    type_definitions: Vec<TypeDefinition>,
}

impl TypeSection {
    pub fn new(type_definitions: Vec<TypeDefinition>) -> Self {
        Self { type_definitions }
    }

    pub fn type_definitions(&self) -> &[TypeDefinition] {
        &self.type_definitions
    }
}

/// `type Rank uint8` optionally followed by an enumeration of its values.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct TypeDefinition {
    declaration: Declaration,
    abstraction: Abstraction,
    enumeration: Option<Enumeration>,
}

impl TypeDefinition {
    pub fn new(
        declaration: Declaration,
        abstraction: Abstraction,
        enumeration: Option<Enumeration>,
    ) -> Self {
        Self {
            declaration,
            abstraction,
            enumeration,
        }
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn abstraction(&self) -> &Abstraction {
        &self.abstraction
    }

    pub fn enumeration(&self) -> Option<&Enumeration> {
        self.enumeration.as_ref()
    }

    pub fn name(&self) -> &str {
        self.declaration.name()
    }
}

/// `const ( First Rank = iota ... )`
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Enumeration {
    value: Value,
    additional_values: Vec<AdditionalValue>,
}

impl Enumeration {
    pub fn new(value: Value, additional_values: Vec<AdditionalValue>) -> Self {
        Self {
            value,
            additional_values,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn additional_values(&self) -> &[AdditionalValue] {
        &self.additional_values
    }

    /// The names of all enumerated values in order.
    pub fn names(&self) -> Vec<&str> {
        std::iter::once(self.value.name())
            .chain(self.additional_values.iter().map(AdditionalValue::name))
            .collect()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Value {
    name: String,
    abstraction: Abstraction,
}

impl Value {
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

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct AdditionalValue {
    name: String,
}

impl AdditionalValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct FunctionalSection {
    functional_definitions: Vec<FunctionalDefinition>,
}

impl FunctionalSection {
    pub fn new(functional_definitions: Vec<FunctionalDefinition>) -> Self {
        Self {
            functional_definitions,
        }
    }

    pub fn functional_definitions(&self) -> &[FunctionalDefinition] {
        &self.functional_definitions
    }
}

/// A function type: `type RankingFunction[V any] func(first V, second V) Rank`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct FunctionalDefinition {
    declaration: Declaration,
    parameters: Vec<Parameter>,
    result: MethodResult,
}

impl FunctionalDefinition {
    pub fn new(declaration: Declaration, parameters: Vec<Parameter>, result: MethodResult) -> Self {
        Self {
            declaration,
            parameters,
            result,
        }
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn result(&self) -> &MethodResult {
        &self.result
    }

    pub fn name(&self) -> &str {
        self.declaration.name()
    }
}
