use crate::ast::Model;
use crate::error::ModelError;
use crate::formatter::Formatter;
use crate::generator::Generator;
use crate::parser::Parser;
use crate::serialization::{to_value, Value};
use crate::validator::Validator;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// The result of a successful analysis of a class model.
/// It holds the model as parsed together with its validated, order-normalized
/// form, and exports a summary of the latter for external tooling.
#[derive(Debug)]
pub struct AnalysisResult {
    pub model: Model,
    pub normalized_model: Model,
}

impl Serialize for AnalysisResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.to_value();
        value.serialize(serializer)
    }
}

impl AnalysisResult {
    /// Summarizes the normalized model as a generic, serializable `Value`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        to_value(&self.normalized_model)
    }

    /// Serializes the model summary into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self)
    }

    /// Serializes the model summary into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self)
    }

    /// The canonical source of the normalized model.
    #[must_use]
    pub fn to_source(&self) -> String {
        format_model(&self.normalized_model)
    }

    #[must_use]
    pub fn class_names(&self) -> Vec<&str> {
        self.normalized_model
            .class_definitions()
            .iter()
            .map(|class| class.name())
            .collect()
    }

    #[must_use]
    pub fn instance_names(&self) -> Vec<&str> {
        self.normalized_model
            .instance_definitions()
            .iter()
            .map(|instance| instance.name())
            .collect()
    }

    #[must_use]
    pub fn aspect_names(&self) -> Vec<&str> {
        self.normalized_model
            .aspect_definitions()
            .iter()
            .map(|aspect| aspect.name())
            .collect()
    }
}

/// Parses class model source into its syntax tree.
///
/// # Errors
/// Returns a `ModelError` if the source cannot be scanned or parsed.
pub fn parse_model(source: &str) -> Result<Model, ModelError> {
    Parser::new(source).parse_model()
}

/// Reprints a model in its canonical form.
#[must_use]
pub fn format_model(model: &Model) -> String {
    Formatter::new().format_model(model)
}

/// Validates a model and returns a copy with its sections in canonical order.
///
/// # Errors
/// Returns a `ModelError` naming the first violated rule.
pub fn validate_model(model: &Model) -> Result<Model, ModelError> {
    Validator::new().validate_model(model)
}

/// Generates the source of the class named `name` from a model.
///
/// # Errors
/// Returns a `ModelError` if the class is unknown or cannot be synthesized.
pub fn generate_class(model: &Model, name: &str) -> Result<String, ModelError> {
    Ok(Generator::new().generate_class(model, name)?)
}

/// Generates the source of every class in a model, keyed by class name.
///
/// # Errors
/// Returns a `ModelError` for the first class that cannot be synthesized.
pub fn generate_model_classes(model: &Model) -> Result<BTreeMap<String, String>, ModelError> {
    Ok(Generator::new().generate_model_classes(model)?)
}

/// Analyzes class model source, parsing and validating it.
///
/// This is the primary entry point for checking a model. It returns an
/// `AnalysisResult` on success, which holds both the parsed and the normalized
/// model and provides methods for serialization.
///
/// # Arguments
///
/// * `source` - The class model source code as a string.
/// * `file_name` - The name of the file being analyzed (used for error reporting).
///
/// # Errors
///
/// Returns a `ModelError` if parsing or validation fails.
pub fn analyze(source: &str, file_name: &str) -> Result<AnalysisResult, ModelError> {
    let model = Parser::new_with_name(source, file_name.to_string()).parse_model()?;
    let normalized_model = validate_model(&model)?;
    Ok(AnalysisResult {
        model,
        normalized_model,
    })
}
