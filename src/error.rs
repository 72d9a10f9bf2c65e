use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ModelError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Generator(#[from] GeneratorError),
}

/// Scan and parse failures. The `message` of each variant is the full textual
/// diagnostic: the offending token, the surrounding source lines with a caret
/// under the token, and the grammar rule the parser was pursuing.
#[derive(Error, Debug, Diagnostic)]
pub enum ParserError {
    #[error("{message}")]
    #[diagnostic(
        code(parser::unrecognized_input),
        help("The scanner could not match this character against any token pattern.")
    )]
    UnrecognizedInput {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("Unrecognized character")]
        span: SourceSpan,
    },

    #[error("{message}")]
    #[diagnostic(code(parser::unexpected_token))]
    UnexpectedToken {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("Expected {rule}, but found this")]
        span: SourceSpan,
        rule: String,
        #[help]
        expected: String,
    },

    #[error("{message}")]
    #[diagnostic(code(parser::unexpected_eof))]
    UnexpectedEof {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("File ended unexpectedly here")]
        span: SourceSpan,
        rule: String,
        #[help]
        expected: String,
    },
}

impl ParserError {
    /// The grammar rule that was being parsed when the error occurred, if any.
    pub fn rule(&self) -> Option<&str> {
        match self {
            ParserError::UnrecognizedInput { .. } => None,
            ParserError::UnexpectedToken { rule, .. } | ParserError::UnexpectedEof { rule, .. } => {
                Some(rule)
            }
        }
    }
}

#[derive(Error, Debug, Diagnostic, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The following {section} name is declared more than once: {name}")]
    #[diagnostic(
        code(validator::duplicate_name),
        help("Names must be unique within each section of a model.")
    )]
    DuplicateName { section: String, name: String },

    #[error("The following module alias is not three characters long: {name}")]
    #[diagnostic(
        code(validator::invalid_module_alias),
        help("Imported module aliases must be exactly three characters long.")
    )]
    InvalidModuleAlias { name: String },

    #[error("Found an unknown module alias name: {name}")]
    #[diagnostic(
        code(validator::unknown_module_alias),
        help("Add an import for this alias or remove the qualified reference.")
    )]
    UnknownModuleAlias { name: String },

    #[error("The following class name does not end with 'ClassLike': {name}")]
    #[diagnostic(code(validator::invalid_class_name))]
    InvalidClassName { name: String },

    #[error("The following instance name does not end with 'Like': {name}")]
    #[diagnostic(code(validator::invalid_instance_name))]
    InvalidInstanceName { name: String },

    #[error("The following class interface has no matching instance interface: {name}")]
    #[diagnostic(
        code(validator::missing_instance),
        help("Every XxxClassLike interface must be paired with an XxxLike interface.")
    )]
    MissingInstance { name: String },

    #[error("The following instance interface has no matching class interface: {name}")]
    #[diagnostic(
        code(validator::missing_class),
        help("Every XxxLike interface must be paired with an XxxClassLike interface.")
    )]
    MissingClass { name: String },

    #[error("The following instance interface does not define a GetClass() method: {name}")]
    #[diagnostic(code(validator::missing_get_class))]
    MissingGetClass { name: String },

    #[error("The GetClass() method of {name} must return {expected}")]
    #[diagnostic(code(validator::invalid_get_class))]
    InvalidGetClass { name: String, expected: String },

    #[error("The following attribute method has an invalid name: {name}")]
    #[diagnostic(
        code(validator::invalid_attribute_name),
        help("Getters start with Get, Is, Was, Are, Were, Has, Had or Have; setters start with Set.")
    )]
    InvalidAttributeName { name: String },

    #[error("The following attribute method must return a bool: {name}")]
    #[diagnostic(code(validator::non_boolean_attribute))]
    NonBooleanAttribute { name: String },

    #[error("The following type is never used in this model: {name}")]
    #[diagnostic(code(validator::unused_type))]
    UnusedType { name: String },

    #[error("The following functional type is never used in this model: {name}")]
    #[diagnostic(code(validator::unused_functional))]
    UnusedFunctional { name: String },

    #[error("The following aspect is never used in this model: {name}")]
    #[diagnostic(code(validator::unused_aspect))]
    UnusedAspect { name: String },
}

#[derive(Error, Debug, Diagnostic, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("The following class is not defined in this model: {name}")]
    #[diagnostic(code(generator::unknown_class))]
    UnknownClass { name: String },

    #[error("The following class interface has no matching instance interface: {name}")]
    #[diagnostic(code(generator::missing_instance))]
    MissingInstance { name: String },

    #[error("The following attribute method has an unknown accessor prefix: {name}")]
    #[diagnostic(
        code(generator::unknown_accessor),
        help("Validate the model before generating classes from it.")
    )]
    UnknownAccessor { name: String },

    #[error("The generic arguments of {aspect} do not match its declaration: {reason}")]
    #[diagnostic(code(generator::generic_mismatch))]
    GenericMismatch { aspect: String, reason: String },

    #[error("The copyright notice is {length} characters long but at most 78 fit in the banner")]
    #[diagnostic(code(generator::copyright_too_long))]
    CopyrightTooLong { length: usize },
}
