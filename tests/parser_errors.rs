// Parser error path tests
// Every malformed model is rejected with a diagnostic naming the rule that was
// being parsed when the mismatch occurred.

use class_model::error::ParserError;
use class_model::{parse_model, ModelError};
use miette::Diagnostic;

const MINIMAL: &str = include_str!("ok/minimal.model");

fn parser_error(source: &str) -> ParserError {
    match parse_model(source) {
        Err(ModelError::Parser(error)) => error,
        other => panic!("expected a parser error, got {other:?}"),
    }
}

fn code(error: &ParserError) -> String {
    error.code().map(|code| code.to_string()).unwrap_or_default()
}

#[test]
fn test_parser_error_empty_source() {
    let error = parser_error("");
    assert!(matches!(error, ParserError::UnexpectedEof { .. }));
    assert_eq!(code(&error), "parser::unexpected_eof");
}

#[test]
fn test_parser_error_missing_interfaces() {
    let header = "/*\nNotice\n*/\n\n/*\nPackage foo.\n*/\npackage foo\n";
    let error = parser_error(header);
    assert!(matches!(error, ParserError::UnexpectedEof { .. }));
    assert_eq!(error.rule(), Some("Model"));
    assert!(error.to_string().contains("Was expecting 'InterfaceDefinitions' from:"));
}

#[test]
fn test_parser_error_missing_instance_section() {
    let source = &MINIMAL[..MINIMAL.find("// Instance Definitions").unwrap()];
    let error = parser_error(source);
    assert_eq!(error.rule(), Some("InterfaceDefinitions"));
}

#[test]
fn test_parser_error_misspelled_keyword() {
    let error = parser_error(&MINIMAL.replace("package foo", "pakage foo"));
    assert_eq!(error.rule(), Some("Header"));
    assert_eq!(code(&error), "parser::unexpected_token");
    let message = error.to_string();
    assert!(message.starts_with(
        "An unexpected token was received by the parser: Name \"pakage\" (line 8, column 1)"
    ));
    assert!(message.contains("0008: pakage foo\n >>>─⌃\n"));
    assert!(message.contains("  Header: comment \"package\" name"));
}

#[test]
fn test_parser_error_unclosed_interface() {
    let error = parser_error(&MINIMAL.replace("\tMake() FooLike\n}\n", "\tMake() FooLike\n"));
    assert_eq!(error.rule(), Some("ClassDefinition"));
    assert!(error.to_string().contains("Delimiter \"// Instance Definitions\""));
}

#[test]
fn test_parser_error_missing_public_methods() {
    let error = parser_error(&MINIMAL.replace("\t// Public Methods\n", ""));
    assert_eq!(error.rule(), Some("InstanceMethods"));
    assert!(error.to_string().contains("Was expecting '// Public Methods'"));
}

#[test]
fn test_parser_error_unrecognized_character() {
    let error = parser_error(&MINIMAL.replace("Make() FooLike", "Make() FooLike;"));
    assert!(matches!(error, ParserError::UnrecognizedInput { .. }));
    assert_eq!(code(&error), "parser::unrecognized_input");
}

#[test]
fn test_parser_error_trailing_input() {
    let error = parser_error(&format!("{MINIMAL}type\n"));
    assert_eq!(error.rule(), Some("Model"));
    assert!(error.to_string().contains("Was expecting 'EOF'"));
}

#[test]
fn test_keyword_prefix_is_part_of_name() {
    let source = MINIMAL.replace("Make() FooLike", "MakeWithSize(chanSize uint) FooLike");
    let model = parse_model(&source).unwrap();
    let constructor = &model.class_definitions()[0]
        .class_methods()
        .constructor_methods()[0];
    assert_eq!(constructor.parameters()[0].name(), "chanSize");
    assert!(constructor.parameters()[0].abstraction().is_plain("uint"));
}

#[test]
fn test_diagnostic_carries_source_name() {
    let source = MINIMAL.replace("package foo", "pakage foo");
    let error = class_model::parser::Parser::new_with_name(&source, "foo.model".to_string())
        .parse_model()
        .unwrap_err();
    let report = format!("{:?}", miette::Report::new(error));
    assert!(report.contains("foo.model"));
}
