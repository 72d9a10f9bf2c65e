use crate::ast::*;
use crate::processor::Processor;
use crate::visitor::Visitor;

/// Reprints a model in its canonical form. Parsing the output yields the same
/// model, and formatting a canonical source reproduces it byte for byte.
#[derive(Debug, Default)]
pub struct Formatter {
    depth: usize,
    result: String,
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format_model(&mut self, model: &Model) -> String {
        self.render(|visitor| visitor.visit_model(model))
    }

    pub fn format_abstraction(&mut self, abstraction: &Abstraction) -> String {
        self.render(|visitor| visitor.visit_abstraction(abstraction))
    }

    /// Formats a parameter list as it appears between parentheses. Several
    /// parameters are placed one per line, indented one level deeper than
    /// `depth`.
    pub fn format_parameters(&mut self, parameters: &[Parameter], depth: usize) -> String {
        self.depth = depth;
        self.render(|visitor| visitor.visit_parameters(parameters))
    }

    /// Formats a result including its leading space, or nothing for `None`.
    pub fn format_result(&mut self, result: &MethodResult, depth: usize) -> String {
        self.depth = depth;
        self.render(|visitor| visitor.visit_result(result))
    }

    pub fn format_constraints(&mut self, constraints: &Constraints) -> String {
        self.render(|visitor| visitor.visit_constraints(constraints))
    }

    fn render(&mut self, visit: impl FnOnce(&mut Visitor<'_, Self>)) -> String {
        self.result.clear();
        visit(&mut Visitor::new(self));
        self.depth = 0;
        std::mem::take(&mut self.result)
    }

    fn append(&mut self, text: &str) {
        self.result.push_str(text);
    }

    fn append_newline(&mut self) {
        self.result.push('\n');
        for _ in 0..self.depth {
            self.result.push('\t');
        }
    }
}

impl Processor for Formatter {
    fn process_comment(&mut self, comment: &str) {
        self.append(comment);
    }

    fn process_name(&mut self, name: &str) {
        self.append(name);
    }

    fn process_path(&mut self, path: &str) {
        self.append(path);
    }

    // Module

    fn postprocess_notice(&mut self, _: &Notice) {
        self.append("\n");
    }

    fn process_header_slot(&mut self, _: usize) {
        self.append("package ");
    }

    fn postprocess_header(&mut self, _: &Header) {
        self.append("\n");
    }

    fn preprocess_imports(&mut self, _: &Imports) {
        self.append("\nimport (");
        self.depth += 1;
    }

    fn postprocess_imports(&mut self, _: &Imports) {
        self.depth -= 1;
        self.append_newline();
        self.append(")\n");
    }

    fn preprocess_module(&mut self, _: &Module, _: usize, _: usize) {
        self.append_newline();
    }

    fn process_module_slot(&mut self, _: usize) {
        self.append(" ");
    }

    // Primitives

    fn preprocess_type_section(&mut self, _: &TypeSection) {
        self.append("\n// Type Definitions\n");
    }

    fn preprocess_type_definition(&mut self, _: &TypeDefinition, _: usize, _: usize) {
        self.append("\n");
    }

    fn process_type_definition_slot(&mut self, slot: usize) {
        if slot == 1 {
            self.append(" ");
        }
    }

    fn postprocess_type_definition(&mut self, _: &TypeDefinition, _: usize, _: usize) {
        self.append("\n");
    }

    fn preprocess_enumeration(&mut self, _: &Enumeration) {
        self.append("\n\nconst (");
        self.depth += 1;
    }

    fn postprocess_enumeration(&mut self, _: &Enumeration) {
        self.depth -= 1;
        self.append_newline();
        self.append(")");
    }

    fn preprocess_value(&mut self, _: &Value) {
        self.append_newline();
    }

    fn process_value_slot(&mut self, _: usize) {
        self.append(" ");
    }

    fn postprocess_value(&mut self, _: &Value) {
        self.append(" = iota");
    }

    fn preprocess_additional_value(&mut self, _: &AdditionalValue, _: usize, _: usize) {
        self.append_newline();
    }

    fn preprocess_functional_section(&mut self, _: &FunctionalSection) {
        self.append("\n// Functional Definitions\n");
    }

    fn preprocess_functional_definition(&mut self, _: &FunctionalDefinition, _: usize, _: usize) {
        self.append("\n");
    }

    fn process_functional_definition_slot(&mut self, slot: usize) {
        match slot {
            1 => self.append(" func("),
            _ => self.append(")"),
        }
    }

    fn postprocess_functional_definition(
        &mut self,
        _: &FunctionalDefinition,
        _: usize,
        _: usize,
    ) {
        self.append("\n");
    }

    // Shared building blocks

    fn process_declaration_slot(&mut self, slot: usize) {
        if slot == 1 {
            self.append("type ");
        }
    }

    fn preprocess_constraints(&mut self, _: &Constraints) {
        self.append("[");
    }

    fn postprocess_constraints(&mut self, _: &Constraints) {
        self.append("]");
    }

    fn process_constraint_slot(&mut self, _: usize) {
        self.append(" ");
    }

    fn preprocess_additional_constraint(&mut self, _: &AdditionalConstraint, _: usize, _: usize) {
        self.append(", ");
    }

    fn preprocess_prefix(&mut self, prefix: &Prefix) {
        match prefix {
            Prefix::Array => self.append("[]"),
            Prefix::Map(_) => self.append("map["),
            Prefix::Channel => self.append("chan "),
        }
    }

    fn postprocess_prefix(&mut self, prefix: &Prefix) {
        if let Prefix::Map(_) = prefix {
            self.append("]");
        }
    }

    fn preprocess_suffix(&mut self, _: &Suffix) {
        self.append(".");
    }

    fn preprocess_arguments(&mut self, _: &Arguments) {
        self.append("[");
    }

    fn postprocess_arguments(&mut self, _: &Arguments) {
        self.append("]");
    }

    fn preprocess_additional_argument(&mut self, _: &AdditionalArgument, _: usize, _: usize) {
        self.append(", ");
    }

    fn preprocess_parameter(&mut self, _: &Parameter, index: usize, size: usize) {
        if size > 1 {
            if index == 1 {
                self.depth += 1;
            }
            self.append_newline();
        }
    }

    fn process_parameter_slot(&mut self, _: usize) {
        self.append(" ");
    }

    fn postprocess_parameter(&mut self, _: &Parameter, index: usize, size: usize) {
        if size > 1 {
            self.append(",");
            if index == size {
                self.depth -= 1;
                self.append_newline();
            }
        }
    }

    fn preprocess_result(&mut self, result: &MethodResult) {
        match result {
            MethodResult::None(_) => {}
            MethodResult::Abstraction(_) => self.append(" "),
            MethodResult::Parameterized(_) => self.append(" ("),
        }
    }

    fn postprocess_result(&mut self, result: &MethodResult) {
        if let MethodResult::Parameterized(_) = result {
            self.append(")");
        }
    }

    // Interfaces

    fn preprocess_class_section(&mut self, _: &ClassSection) {
        self.append("\n// Class Definitions\n");
    }

    fn preprocess_class_definition(&mut self, _: &ClassDefinition, _: usize, _: usize) {
        self.append("\n");
    }

    fn process_class_definition_slot(&mut self, _: usize) {
        self.append(" interface {");
    }

    fn postprocess_class_definition(&mut self, _: &ClassDefinition, _: usize, _: usize) {
        self.append("\n}\n");
    }

    fn preprocess_class_methods(&mut self, _: &ClassMethods) {
        self.depth += 1;
    }

    fn postprocess_class_methods(&mut self, _: &ClassMethods) {
        self.depth -= 1;
    }

    fn preprocess_constructor_subsection(&mut self, _: &ConstructorSubsection) {
        self.append_newline();
        self.append("// Constructor Methods");
    }

    fn preprocess_constructor_method(&mut self, _: &ConstructorMethod, _: usize, _: usize) {
        self.append_newline();
    }

    fn process_constructor_method_slot(&mut self, slot: usize) {
        match slot {
            1 => self.append("("),
            _ => self.append(") "),
        }
    }

    fn preprocess_constant_subsection(&mut self, _: &ConstantSubsection) {
        self.append("\n");
        self.append_newline();
        self.append("// Constant Methods");
    }

    fn preprocess_constant_method(&mut self, _: &ConstantMethod, _: usize, _: usize) {
        self.append_newline();
    }

    fn process_constant_method_slot(&mut self, _: usize) {
        self.append("() ");
    }

    fn preprocess_function_subsection(&mut self, _: &FunctionSubsection) {
        self.append("\n");
        self.append_newline();
        self.append("// Function Methods");
    }

    fn preprocess_function_method(&mut self, _: &FunctionMethod, _: usize, _: usize) {
        self.append_newline();
    }

    fn process_function_method_slot(&mut self, slot: usize) {
        match slot {
            1 => self.append("("),
            _ => self.append(")"),
        }
    }

    fn preprocess_instance_section(&mut self, _: &InstanceSection) {
        self.append("\n// Instance Definitions\n");
    }

    fn preprocess_instance_definition(&mut self, _: &InstanceDefinition, _: usize, _: usize) {
        self.append("\n");
    }

    fn process_instance_definition_slot(&mut self, _: usize) {
        self.append(" interface {");
    }

    fn postprocess_instance_definition(&mut self, _: &InstanceDefinition, _: usize, _: usize) {
        self.append("\n}\n");
    }

    fn preprocess_instance_methods(&mut self, _: &InstanceMethods) {
        self.depth += 1;
    }

    fn postprocess_instance_methods(&mut self, _: &InstanceMethods) {
        self.depth -= 1;
    }

    fn preprocess_public_subsection(&mut self, _: &PublicSubsection) {
        self.append_newline();
        self.append("// Public Methods");
    }

    fn preprocess_public_method(&mut self, _: &PublicMethod, _: usize, _: usize) {
        self.append_newline();
    }

    fn process_method_slot(&mut self, slot: usize) {
        match slot {
            1 => self.append("("),
            _ => self.append(")"),
        }
    }

    fn preprocess_attribute_subsection(&mut self, _: &AttributeSubsection) {
        self.append("\n");
        self.append_newline();
        self.append("// Attribute Methods");
    }

    fn preprocess_attribute_method(&mut self, _: &AttributeMethod, _: usize, _: usize) {
        self.append_newline();
    }

    fn process_getter_method_slot(&mut self, _: usize) {
        self.append("() ");
    }

    fn process_setter_method_slot(&mut self, _: usize) {
        self.append("(");
    }

    fn postprocess_setter_method(&mut self, _: &SetterMethod) {
        self.append(")");
    }

    fn preprocess_aspect_subsection(&mut self, _: &AspectSubsection) {
        self.append("\n");
        self.append_newline();
        self.append("// Aspect Methods");
    }

    fn preprocess_aspect_interface(&mut self, _: &AspectInterface, _: usize, _: usize) {
        self.append_newline();
    }

    fn preprocess_aspect_section(&mut self, _: &AspectSection) {
        self.append("\n// Aspect Definitions\n");
    }

    fn preprocess_aspect_definition(&mut self, _: &AspectDefinition, _: usize, _: usize) {
        self.append("\n");
    }

    fn process_aspect_definition_slot(&mut self, _: usize) {
        self.append(" interface {");
        self.depth += 1;
    }

    fn postprocess_aspect_definition(&mut self, _: &AspectDefinition, _: usize, _: usize) {
        self.depth -= 1;
        self.append("\n}\n");
    }

    fn preprocess_aspect_method(&mut self, _: &AspectMethod, _: usize, _: usize) {
        self.append_newline();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn round_trip(source: &str) {
        let model = Parser::new(source).parse_model().unwrap();
        let formatted = Formatter::new().format_model(&model);
        assert_eq!(formatted, source);
    }

    const MODEL: &str = r#"/*
Notice
*/

/*
Package example.
*/
package example

import (
	abs "github.com/craterdog/go-collection-framework/v4"
	col "github.com/craterdog/go-collection-framework/v4/collection"
)

// Type Definitions

/*
Rank is a constrained type.
*/
type Rank uint8

const (
	LesserRank Rank = iota
	EqualRank
	GreaterRank
)

/*
Lookup is a map type.
*/
type Lookup map[string]col.ListLike[Rank]

// Functional Definitions

/*
RankingFunction ranks two values.
*/
type RankingFunction[V any] func(
	first V,
	second V,
) Rank

// Class Definitions

/*
CatalogClassLike is a class interface.
*/
type CatalogClassLike[K comparable, V any] interface {
	// Constructor Methods
	Make() CatalogLike[K, V]
	MakeFromArray(associations []abs.AssociationLike[K, V]) CatalogLike[K, V]

	// Constant Methods
	DefaultRanker() RankingFunction[V]

	// Function Methods
	Merge(
		first CatalogLike[K, V],
		second CatalogLike[K, V],
	) CatalogLike[K, V]
	Lookups() (
		lookup Lookup,
		ranks chan Rank,
	)
}

// Instance Definitions

/*
CatalogLike is an instance interface.
*/
type CatalogLike[K comparable, V any] interface {
	// Public Methods
	GetClass() CatalogClassLike[K, V]
	SortValues()

	// Attribute Methods
	GetSize() int
	SetRanker(ranker RankingFunction[V])
	IsEmpty() bool

	// Aspect Methods
	Sequential[V]
}

// Aspect Definitions

/*
Sequential is an aspect interface.
*/
type Sequential[V any] interface {
	AsArray() []V
	GetIterator() abs.IteratorLike[V]
}
"#;

    #[test]
    fn test_round_trip() {
        round_trip(MODEL);
    }

    #[test]
    fn test_double_round_trip() {
        let model = Parser::new(MODEL).parse_model().unwrap();
        let formatted = Formatter::new().format_model(&model);
        let reparsed = Parser::new(&formatted).parse_model().unwrap();
        assert_eq!(reparsed, model);
    }

    #[test]
    fn test_non_canonical_input_is_normalized() {
        let source = MODEL
            .replace("MakeFromArray(associations []abs.AssociationLike[K, V])", "MakeFromArray(associations []abs.AssociationLike[K,V],)")
            .replace("// Aspect Methods", "// Aspect Interfaces");
        let model = Parser::new(&source).parse_model().unwrap();
        assert_eq!(Formatter::new().format_model(&model), MODEL);
    }

    #[test]
    fn test_format_fragments() {
        let abstraction = Abstraction::new(
            Some(Prefix::Map(Map::new("string"))),
            "abs",
            Some(Suffix::new("ListLike")),
            Arguments::from_abstractions(vec![Abstraction::named("V")]),
        );
        let mut formatter = Formatter::new();
        assert_eq!(formatter.format_abstraction(&abstraction), "map[string]abs.ListLike[V]");
        assert_eq!(abstraction.to_string(), "map[string]abs.ListLike[V]");

        let parameters = vec![
            Parameter::new("first", Abstraction::named("V")),
            Parameter::new("second", Abstraction::named("V")),
        ];
        assert_eq!(
            formatter.format_parameters(&parameters, 0),
            "\n\tfirst V,\n\tsecond V,\n"
        );
        assert_eq!(formatter.format_parameters(&parameters[..1], 0), "first V");

        let result = MethodResult::Abstraction(Abstraction::named("bool"));
        assert_eq!(formatter.format_result(&result, 0), " bool");
        assert_eq!(formatter.format_result(&MethodResult::None("\n".into()), 0), "");
    }
}
