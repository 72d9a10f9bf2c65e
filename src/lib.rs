pub mod ast;
pub mod error;
pub mod grammar;
pub mod scanner;
pub mod parser;
pub mod processor;
pub mod visitor;
pub mod formatter;
pub mod validator;
pub mod generator;
pub mod utils;
pub mod api;
mod serialization;

pub use api::{
    analyze, format_model, generate_class, generate_model_classes, parse_model, validate_model,
    AnalysisResult,
};
pub use error::ModelError;
pub use serialization::Value;
