use serde::Serialize;
use std::fmt::{self, Display};

/// The comment, name and optional type constraints that introduce every
/// top-level definition.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Declaration {
    comment: String,
    name: String,
    constraints: Option<Constraints>,
}

impl Declaration {
    pub fn new(
        comment: impl Into<String>,
        name: impl Into<String>,
        constraints: Option<Constraints>,
    ) -> Self {
        Self {
            comment: comment.into(),
            name: name.into(),
            constraints,
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constraints(&self) -> Option<&Constraints> {
        self.constraints.as_ref()
    }

    pub fn is_generic(&self) -> bool {
        self.constraints.is_some()
    }
}

/// `[V any, K comparable]`
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Constraints {
    constraint: Constraint,
    additional_constraints: Vec<AdditionalConstraint>,
}

impl Constraints {
    pub fn new(constraint: Constraint, additional_constraints: Vec<AdditionalConstraint>) -> Self {
        Self {
            constraint,
            additional_constraints,
        }
    }

    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    pub fn additional_constraints(&self) -> &[AdditionalConstraint] {
        &self.additional_constraints
    }

    /// Every constraint in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        std::iter::once(&self.constraint).chain(
            self.additional_constraints
                .iter()
                .map(AdditionalConstraint::constraint),
        )
    }

    /// The names of the type parameters, e.g. `["K", "V"]` for `[K comparable, V any]`.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(Constraint::name).collect()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Constraint {
    name: String,
    abstraction: Abstraction,
}

impl Constraint {
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
pub struct AdditionalConstraint {
    constraint: Constraint,
}

impl AdditionalConstraint {
    pub fn new(constraint: Constraint) -> Self {
        Self { constraint }
    }

    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }
}

/// A reference to a type: `[]abs.ListLike[V]`, `map[string]V`, `chan Token`.
/// When a suffix is present `name` is the module alias and the suffix holds the
/// type name inside that module.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Abstraction {
    prefix: Option<Prefix>,
    name: String,
    suffix: Option<Suffix>,
    arguments: Option<Arguments>,
}

impl Abstraction {
    pub fn new(
        prefix: Option<Prefix>,
        name: impl Into<String>,
        suffix: Option<Suffix>,
        arguments: Option<Arguments>,
    ) -> Self {
        Self {
            prefix,
            name: name.into(),
            suffix,
            arguments,
        }
    }

    /// A bare type name without prefix, suffix or arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(None, name, None, None)
    }

    pub fn prefix(&self) -> Option<&Prefix> {
        self.prefix.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn suffix(&self) -> Option<&Suffix> {
        self.suffix.as_ref()
    }

    pub fn arguments(&self) -> Option<&Arguments> {
        self.arguments.as_ref()
    }

    /// The module alias qualifying this abstraction, if any.
    pub fn module_alias(&self) -> Option<&str> {
        self.suffix.as_ref().map(|_| self.name.as_str())
    }

    /// The name of the referenced type with any module alias removed.
    pub fn type_name(&self) -> &str {
        match &self.suffix {
            Some(suffix) => suffix.name(),
            None => &self.name,
        }
    }

    /// Whether this is exactly the plain, unqualified type `name`.
    pub fn is_plain(&self, name: &str) -> bool {
        self.prefix.is_none()
            && self.suffix.is_none()
            && self.arguments.is_none()
            && self.name == name
    }
}

impl Display for Abstraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::formatter::Formatter::new().format_abstraction(self))
    }
}

/// The collection or channel marker in front of an abstraction.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub enum Prefix {
    /// `[]`
    Array,
    /// `map[name]`
    Map(Map),
    /// `chan `
    Channel,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Map {
    name: String,
}

impl Map {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// `.name`
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Suffix {
    name: String,
}

impl Suffix {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// `[String, Int]`
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Arguments {
    argument: Argument,
    additional_arguments: Vec<AdditionalArgument>,
}

impl Arguments {
    pub fn new(argument: Argument, additional_arguments: Vec<AdditionalArgument>) -> Self {
        Self {
            argument,
            additional_arguments,
        }
    }

    /// Builds an argument list from abstractions; `None` when `abstractions` is empty.
    pub fn from_abstractions(abstractions: Vec<Abstraction>) -> Option<Self> {
        let mut abstractions = abstractions.into_iter();
        let first = Argument::new(abstractions.next()?);
        let additional = abstractions
            .map(|abstraction| AdditionalArgument::new(Argument::new(abstraction)))
            .collect();
        Some(Self::new(first, additional))
    }

    pub fn argument(&self) -> &Argument {
        &self.argument
    }

    pub fn additional_arguments(&self) -> &[AdditionalArgument] {
        &self.additional_arguments
    }

    /// Every argument abstraction in order.
    pub fn iter(&self) -> impl Iterator<Item = &Abstraction> {
        std::iter::once(&self.argument)
            .chain(
                self.additional_arguments
                    .iter()
                    .map(AdditionalArgument::argument),
            )
            .map(Argument::abstraction)
    }

    pub fn len(&self) -> usize {
        1 + self.additional_arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Argument {
    abstraction: Box<Abstraction>,
}

impl Argument {
    pub fn new(abstraction: Abstraction) -> Self {
        Self {
            abstraction: Box::new(abstraction),
        }
    }

    pub fn abstraction(&self) -> &Abstraction {
        &self.abstraction
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct AdditionalArgument {
    argument: Argument,
}

impl AdditionalArgument {
    pub fn new(argument: Argument) -> Self {
        Self { argument }
    }

    pub fn argument(&self) -> &Argument {
        &self.argument
    }
}

/// A named, typed parameter of a method or functional type.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Parameter {
    name: String,
    abstraction: Abstraction,
}

impl Parameter {
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

/// What a method or functional type returns.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub enum MethodResult {
    /// Nothing is returned; holds the newline that ended the signature.
    None(String),
    Abstraction(Abstraction),
    /// Named results: `(first V, second V)`.
    Parameterized(Parameterized),
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Parameterized {
    parameters: Vec<Parameter>,
}

impl Parameterized {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}
