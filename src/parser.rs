use crate::ast::*;
use crate::error::{ModelError, ParserError};
use crate::grammar;
use crate::scanner::{Scanner, Token, TokenKind, DEFAULT_CAPACITY};
use crate::utils::{get_line_and_column, source_context};
use log::debug;
use miette::NamedSource;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

/// The outcome of trying one grammar rule. `Ok(None)` means the first token did
/// not match and the rule backed out without consuming anything; `Err` means
/// the rule was already committed when a token did not fit.
type Parsed<T> = Result<Option<T>, ParserError>;

/// A recursive descent parser for class models, built according to the grammar
/// in [`grammar::RULES`]. Tokens are produced by a [`Scanner`] running on its
/// own thread and handed over through a bounded queue.
#[derive(Debug)]
pub struct Parser<'a> {
    source: Arc<NamedSource<String>>,
    source_text: &'a str,
    capacity: usize,
    tokens: Option<Receiver<Token>>,
    next: Vec<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(source_text: &'a str) -> Self {
        Self::new_with_name(source_text, "source.model".to_string())
    }

    pub fn new_with_name(source_text: &'a str, name: String) -> Self {
        let source = Arc::new(NamedSource::new(name, source_text.to_string()));
        Self {
            source,
            source_text,
            capacity: DEFAULT_CAPACITY,
            tokens: None,
            next: Vec::new(),
        }
    }

    /// Sets the capacity of the token queue. A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    // === Main Parsing Methods ===

    /// Model ::= ModuleDefinition PrimitiveDefinitions InterfaceDefinitions
    ///
    /// # Errors
    /// Returns a `ModelError::Parser` for the first token that does not fit the grammar.
    pub fn parse_model(&mut self) -> Result<Model, ModelError> {
        debug!("parsing a model of {} bytes", self.source_text.len());
        let source_text = self.source_text;
        let (sender, receiver) = mpsc::sync_channel(self.capacity);
        let result = thread::scope(|scope| {
            scope.spawn(move || Scanner::new(source_text, sender).scan());
            self.tokens = Some(receiver);
            let result = self.parse_source();
            // Dropping the receiver unblocks the scanner if parsing stopped early.
            self.tokens = None;
            self.next.clear();
            result
        });
        let model = result?;
        debug!(
            "parsed package {} with {} classes",
            model.package_name(),
            model.class_definitions().len()
        );
        Ok(model)
    }

    fn parse_source(&mut self) -> Result<Model, ParserError> {
        let module_definition =
            self.expect(Self::parse_module_definition, "ModuleDefinition", "Model")?;
        let primitive_definitions = self.parse_primitive_definitions()?;
        let interface_definitions = self.expect(
            Self::parse_interface_definitions,
            "InterfaceDefinitions",
            "Model",
        )?;
        if let Some(token) = self.next_significant(true)? {
            self.put_back(token);
            return Err(self.unexpected("EOF", "Model"));
        }
        Ok(Model::new(
            module_definition,
            primitive_definitions,
            interface_definitions,
        ))
    }

    /// ModuleDefinition ::= Notice Header Imports?
    fn parse_module_definition(&mut self) -> Parsed<ModuleDefinition> {
        let Some(notice) = self.get_token(TokenKind::Comment)? else {
            return Ok(None);
        };
        let header = self.expect(Self::parse_header, "Header", "ModuleDefinition")?;
        let imports = self.parse_imports()?;
        Ok(Some(ModuleDefinition::new(
            Notice::new(notice.value()),
            header,
            imports,
        )))
    }

    /// Header ::= comment "package" name
    fn parse_header(&mut self) -> Parsed<Header> {
        let Some(comment) = self.get_token(TokenKind::Comment)? else {
            return Ok(None);
        };
        self.expect_delimiter("package", "Header")?;
        let name = self.expect_token(TokenKind::Name, "Header")?;
        Ok(Some(Header::new(comment.value(), name.value())))
    }

    /// Imports ::= "import" "(" Module+ ")"
    fn parse_imports(&mut self) -> Parsed<Imports> {
        if self.get_delimiter("import")?.is_none() {
            return Ok(None);
        }
        self.expect_delimiter("(", "Imports")?;
        let modules = self.one_or_more(Self::parse_module, "Module", "Imports")?;
        self.expect_delimiter(")", "Imports")?;
        Ok(Some(Imports::new(modules)))
    }

    /// Module ::= name path
    fn parse_module(&mut self) -> Parsed<Module> {
        let Some(name) = self.get_token(TokenKind::Name)? else {
            return Ok(None);
        };
        let path = self.expect_token(TokenKind::Path, "Module")?;
        Ok(Some(Module::new(name.value(), path.value())))
    }

    /// PrimitiveDefinitions ::= TypeSection? FunctionalSection?
    fn parse_primitive_definitions(&mut self) -> Result<PrimitiveDefinitions, ParserError> {
        let type_section = self.parse_type_section()?;
        let functional_section = self.parse_functional_section()?;
        Ok(PrimitiveDefinitions::new(type_section, functional_section))
    }

    /// TypeSection ::= "// Type Definitions" TypeDefinition+
    fn parse_type_section(&mut self) -> Parsed<TypeSection> {
        if self.get_delimiter("// Type Definitions")?.is_none() {
            return Ok(None);
        }
        let type_definitions =
            self.one_or_more(Self::parse_type_definition, "TypeDefinition", "TypeSection")?;
        Ok(Some(TypeSection::new(type_definitions)))
    }

    /// TypeDefinition ::= Declaration Abstraction Enumeration?
    fn parse_type_definition(&mut self) -> Parsed<TypeDefinition> {
        let Some(declaration) = self.parse_declaration()? else {
            return Ok(None);
        };
        let abstraction = self.expect(Self::parse_abstraction, "Abstraction", "TypeDefinition")?;
        let enumeration = self.parse_enumeration()?;
        Ok(Some(TypeDefinition::new(declaration, abstraction, enumeration)))
    }

    /// Enumeration ::= "const" "(" Value AdditionalValue* ")"
    fn parse_enumeration(&mut self) -> Parsed<Enumeration> {
        if self.get_delimiter("const")?.is_none() {
            return Ok(None);
        }
        self.expect_delimiter("(", "Enumeration")?;
        let value = self.expect(Self::parse_value, "Value", "Enumeration")?;
        let additional_values = self.zero_or_more(Self::parse_additional_value)?;
        self.expect_delimiter(")", "Enumeration")?;
        Ok(Some(Enumeration::new(value, additional_values)))
    }

    /// Value ::= name Abstraction "=" "iota"
    fn parse_value(&mut self) -> Parsed<Value> {
        let Some(name) = self.get_token(TokenKind::Name)? else {
            return Ok(None);
        };
        let abstraction = self.expect(Self::parse_abstraction, "Abstraction", "Value")?;
        self.expect_delimiter("=", "Value")?;
        self.expect_delimiter("iota", "Value")?;
        Ok(Some(Value::new(name.value(), abstraction)))
    }

    /// AdditionalValue ::= name
    fn parse_additional_value(&mut self) -> Parsed<AdditionalValue> {
        let value = self.get_token(TokenKind::Name)?;
        Ok(value.map(|name| AdditionalValue::new(name.value())))
    }

    /// FunctionalSection ::= "// Functional Definitions" FunctionalDefinition+
    fn parse_functional_section(&mut self) -> Parsed<FunctionalSection> {
        if self.get_delimiter("// Functional Definitions")?.is_none() {
            return Ok(None);
        }
        let functional_definitions = self.one_or_more(
            Self::parse_functional_definition,
            "FunctionalDefinition",
            "FunctionalSection",
        )?;
        Ok(Some(FunctionalSection::new(functional_definitions)))
    }

    /// FunctionalDefinition ::= Declaration "func" "(" Parameter* ")" Result
    fn parse_functional_definition(&mut self) -> Parsed<FunctionalDefinition> {
        let Some(declaration) = self.parse_declaration()? else {
            return Ok(None);
        };
        self.expect_delimiter("func", "FunctionalDefinition")?;
        self.expect_delimiter("(", "FunctionalDefinition")?;
        let parameters = self.zero_or_more(Self::parse_parameter)?;
        self.expect_delimiter(")", "FunctionalDefinition")?;
        let result = self.expect(Self::parse_result, "Result", "FunctionalDefinition")?;
        Ok(Some(FunctionalDefinition::new(declaration, parameters, result)))
    }

    /// Declaration ::= comment "type" name Constraints?
    fn parse_declaration(&mut self) -> Parsed<Declaration> {
        let Some(comment) = self.get_token(TokenKind::Comment)? else {
            return Ok(None);
        };
        self.expect_delimiter("type", "Declaration")?;
        let name = self.expect_token(TokenKind::Name, "Declaration")?;
        let constraints = self.parse_constraints()?;
        Ok(Some(Declaration::new(
            comment.value(),
            name.value(),
            constraints,
        )))
    }

    /// Constraints ::= "[" Constraint AdditionalConstraint* "]"
    ///
    /// Backs out when the bracket is not followed by a name, since `[]` then
    /// starts the prefix of the abstraction that follows the declaration.
    fn parse_constraints(&mut self) -> Parsed<Constraints> {
        let Some(bracket) = self.get_adjacent_delimiter("[")? else {
            return Ok(None);
        };
        let Some(name) = self.get_token(TokenKind::Name)? else {
            self.put_back(bracket);
            return Ok(None);
        };
        let constraint = self.finish_constraint(name)?;
        let mut additional_constraints = Vec::new();
        while self.get_delimiter(",")?.is_some() {
            let name = self.expect_token(TokenKind::Name, "AdditionalConstraint")?;
            let constraint = self.finish_constraint(name)?;
            additional_constraints.push(AdditionalConstraint::new(constraint));
        }
        self.expect_delimiter("]", "Constraints")?;
        Ok(Some(Constraints::new(constraint, additional_constraints)))
    }

    /// Constraint ::= name Abstraction
    fn finish_constraint(&mut self, name: Token) -> Result<Constraint, ParserError> {
        let abstraction = self.expect(Self::parse_abstraction, "Abstraction", "Constraint")?;
        Ok(Constraint::new(name.value(), abstraction))
    }

    /// Abstraction ::= Prefix? name Suffix? Arguments?
    ///
    /// A bare name that is directly followed by `(` is the name of a method, in
    /// which case both tokens are put back and the rule backs out.
    fn parse_abstraction(&mut self) -> Parsed<Abstraction> {
        let prefix = self.parse_prefix()?;
        let Some(name) = self.get_token(TokenKind::Name)? else {
            if prefix.is_some() {
                return Err(self.unexpected("name", "Abstraction"));
            }
            return Ok(None);
        };
        if prefix.is_none() {
            if let Some(parenthesis) = self.get_adjacent_delimiter("(")? {
                self.put_back(parenthesis);
                self.put_back(name);
                return Ok(None);
            }
        }
        let suffix = self.parse_suffix()?;
        let arguments = self.parse_arguments()?;
        Ok(Some(Abstraction::new(prefix, name.value(), suffix, arguments)))
    }

    /// Prefix ::= "[" "]" | "map" "[" name "]" | "chan"
    fn parse_prefix(&mut self) -> Parsed<Prefix> {
        if let Some(bracket) = self.get_delimiter("[")? {
            if self.get_adjacent_delimiter("]")?.is_some() {
                return Ok(Some(Prefix::Array));
            }
            self.put_back(bracket);
            return Ok(None);
        }
        if self.get_delimiter("map")?.is_some() {
            self.expect_delimiter("[", "Map")?;
            let name = self.expect_token(TokenKind::Name, "Map")?;
            self.expect_delimiter("]", "Map")?;
            return Ok(Some(Prefix::Map(Map::new(name.value()))));
        }
        if self.get_delimiter("chan")?.is_some() {
            return Ok(Some(Prefix::Channel));
        }
        Ok(None)
    }

    /// Suffix ::= "." name
    fn parse_suffix(&mut self) -> Parsed<Suffix> {
        if self.get_adjacent_delimiter(".")?.is_none() {
            return Ok(None);
        }
        let name = self.expect_token(TokenKind::Name, "Suffix")?;
        Ok(Some(Suffix::new(name.value())))
    }

    /// Arguments ::= "[" Argument AdditionalArgument* "]"
    fn parse_arguments(&mut self) -> Parsed<Arguments> {
        if self.get_adjacent_delimiter("[")?.is_none() {
            return Ok(None);
        }
        let argument = self.expect(Self::parse_abstraction, "Abstraction", "Argument")?;
        let mut additional_arguments = Vec::new();
        while self.get_delimiter(",")?.is_some() {
            let abstraction =
                self.expect(Self::parse_abstraction, "Abstraction", "AdditionalArgument")?;
            additional_arguments.push(AdditionalArgument::new(Argument::new(abstraction)));
        }
        self.expect_delimiter("]", "Arguments")?;
        Ok(Some(Arguments::new(
            Argument::new(argument),
            additional_arguments,
        )))
    }

    /// Parameter ::= name Abstraction ","?
    fn parse_parameter(&mut self) -> Parsed<Parameter> {
        let Some(name) = self.get_token(TokenKind::Name)? else {
            return Ok(None);
        };
        let abstraction = self.expect(Self::parse_abstraction, "Abstraction", "Parameter")?;
        self.get_delimiter(",")?;
        Ok(Some(Parameter::new(name.value(), abstraction)))
    }

    /// Result ::= newline | Abstraction | Parameterized
    fn parse_result(&mut self) -> Parsed<MethodResult> {
        if let Some(newline) = self.get_token(TokenKind::Newline)? {
            return Ok(Some(MethodResult::None(newline.value().to_string())));
        }
        self.parse_method_result()
    }

    /// The optional result of a method has no newline alternative.
    fn parse_method_result(&mut self) -> Parsed<MethodResult> {
        if let Some(abstraction) = self.parse_abstraction()? {
            return Ok(Some(MethodResult::Abstraction(abstraction)));
        }
        Ok(self.parse_parameterized()?.map(MethodResult::Parameterized))
    }

    /// Parameterized ::= "(" Parameter+ ")"
    fn parse_parameterized(&mut self) -> Parsed<Parameterized> {
        if self.get_delimiter("(")?.is_none() {
            return Ok(None);
        }
        let parameters = self.one_or_more(Self::parse_parameter, "Parameter", "Parameterized")?;
        self.expect_delimiter(")", "Parameterized")?;
        Ok(Some(Parameterized::new(parameters)))
    }

    /// InterfaceDefinitions ::= ClassSection InstanceSection AspectSection?
    fn parse_interface_definitions(&mut self) -> Parsed<InterfaceDefinitions> {
        let Some(class_section) = self.parse_class_section()? else {
            return Ok(None);
        };
        let instance_section = self.expect(
            Self::parse_instance_section,
            "// Instance Definitions",
            "InterfaceDefinitions",
        )?;
        let aspect_section = self.parse_aspect_section()?;
        Ok(Some(InterfaceDefinitions::new(
            class_section,
            instance_section,
            aspect_section,
        )))
    }

    /// ClassSection ::= "// Class Definitions" ClassDefinition+
    fn parse_class_section(&mut self) -> Parsed<ClassSection> {
        if self.get_delimiter("// Class Definitions")?.is_none() {
            return Ok(None);
        }
        let class_definitions =
            self.one_or_more(Self::parse_class_definition, "ClassDefinition", "ClassSection")?;
        Ok(Some(ClassSection::new(class_definitions)))
    }

    /// ClassDefinition ::= Declaration "interface" "{" ClassMethods "}"
    fn parse_class_definition(&mut self) -> Parsed<ClassDefinition> {
        let Some(declaration) = self.parse_declaration()? else {
            return Ok(None);
        };
        self.expect_delimiter("interface", "ClassDefinition")?;
        self.expect_delimiter("{", "ClassDefinition")?;
        let class_methods =
            self.expect(Self::parse_class_methods, "// Constructor Methods", "ClassMethods")?;
        self.expect_delimiter("}", "ClassDefinition")?;
        Ok(Some(ClassDefinition::new(declaration, class_methods)))
    }

    /// ClassMethods ::= ConstructorSubsection ConstantSubsection? FunctionSubsection?
    fn parse_class_methods(&mut self) -> Parsed<ClassMethods> {
        let Some(constructor_subsection) = self.parse_constructor_subsection()? else {
            return Ok(None);
        };
        let constant_subsection = self.parse_constant_subsection()?;
        let function_subsection = self.parse_function_subsection()?;
        Ok(Some(ClassMethods::new(
            constructor_subsection,
            constant_subsection,
            function_subsection,
        )))
    }

    /// ConstructorSubsection ::= "// Constructor Methods" ConstructorMethod+
    fn parse_constructor_subsection(&mut self) -> Parsed<ConstructorSubsection> {
        if self.get_delimiter("// Constructor Methods")?.is_none() {
            return Ok(None);
        }
        let constructor_methods = self.one_or_more(
            Self::parse_constructor_method,
            "ConstructorMethod",
            "ConstructorSubsection",
        )?;
        Ok(Some(ConstructorSubsection::new(constructor_methods)))
    }

    /// ConstructorMethod ::= name "(" Parameter* ")" Abstraction
    fn parse_constructor_method(&mut self) -> Parsed<ConstructorMethod> {
        let Some(name) = self.get_token(TokenKind::Name)? else {
            return Ok(None);
        };
        self.expect_delimiter("(", "ConstructorMethod")?;
        let parameters = self.zero_or_more(Self::parse_parameter)?;
        self.expect_delimiter(")", "ConstructorMethod")?;
        let abstraction =
            self.expect(Self::parse_abstraction, "Abstraction", "ConstructorMethod")?;
        Ok(Some(ConstructorMethod::new(
            name.value(),
            parameters,
            abstraction,
        )))
    }

    /// ConstantSubsection ::= "// Constant Methods" ConstantMethod+
    fn parse_constant_subsection(&mut self) -> Parsed<ConstantSubsection> {
        if self.get_delimiter("// Constant Methods")?.is_none() {
            return Ok(None);
        }
        let constant_methods = self.one_or_more(
            Self::parse_constant_method,
            "ConstantMethod",
            "ConstantSubsection",
        )?;
        Ok(Some(ConstantSubsection::new(constant_methods)))
    }

    /// ConstantMethod ::= name "(" ")" Abstraction
    fn parse_constant_method(&mut self) -> Parsed<ConstantMethod> {
        let Some(name) = self.get_token(TokenKind::Name)? else {
            return Ok(None);
        };
        self.expect_delimiter("(", "ConstantMethod")?;
        self.expect_delimiter(")", "ConstantMethod")?;
        let abstraction = self.expect(Self::parse_abstraction, "Abstraction", "ConstantMethod")?;
        Ok(Some(ConstantMethod::new(name.value(), abstraction)))
    }

    /// FunctionSubsection ::= "// Function Methods" FunctionMethod+
    fn parse_function_subsection(&mut self) -> Parsed<FunctionSubsection> {
        if self.get_delimiter("// Function Methods")?.is_none() {
            return Ok(None);
        }
        let function_methods = self.one_or_more(
            Self::parse_function_method,
            "FunctionMethod",
            "FunctionSubsection",
        )?;
        Ok(Some(FunctionSubsection::new(function_methods)))
    }

    /// FunctionMethod ::= name "(" Parameter* ")" Result
    fn parse_function_method(&mut self) -> Parsed<FunctionMethod> {
        let Some(name) = self.get_token(TokenKind::Name)? else {
            return Ok(None);
        };
        self.expect_delimiter("(", "FunctionMethod")?;
        let parameters = self.zero_or_more(Self::parse_parameter)?;
        self.expect_delimiter(")", "FunctionMethod")?;
        let result = self.expect(Self::parse_result, "Result", "FunctionMethod")?;
        Ok(Some(FunctionMethod::new(name.value(), parameters, result)))
    }

    /// InstanceSection ::= "// Instance Definitions" InstanceDefinition+
    fn parse_instance_section(&mut self) -> Parsed<InstanceSection> {
        if self.get_delimiter("// Instance Definitions")?.is_none() {
            return Ok(None);
        }
        let instance_definitions = self.one_or_more(
            Self::parse_instance_definition,
            "InstanceDefinition",
            "InstanceSection",
        )?;
        Ok(Some(InstanceSection::new(instance_definitions)))
    }

    /// InstanceDefinition ::= Declaration "interface" "{" InstanceMethods "}"
    fn parse_instance_definition(&mut self) -> Parsed<InstanceDefinition> {
        let Some(declaration) = self.parse_declaration()? else {
            return Ok(None);
        };
        self.expect_delimiter("interface", "InstanceDefinition")?;
        self.expect_delimiter("{", "InstanceDefinition")?;
        let instance_methods =
            self.expect(Self::parse_instance_methods, "// Public Methods", "InstanceMethods")?;
        self.expect_delimiter("}", "InstanceDefinition")?;
        Ok(Some(InstanceDefinition::new(declaration, instance_methods)))
    }

    /// InstanceMethods ::= PublicSubsection AttributeSubsection? AspectSubsection?
    fn parse_instance_methods(&mut self) -> Parsed<InstanceMethods> {
        let Some(public_subsection) = self.parse_public_subsection()? else {
            return Ok(None);
        };
        let attribute_subsection = self.parse_attribute_subsection()?;
        let aspect_subsection = self.parse_aspect_subsection()?;
        Ok(Some(InstanceMethods::new(
            public_subsection,
            attribute_subsection,
            aspect_subsection,
        )))
    }

    /// PublicSubsection ::= "// Public Methods" PublicMethod+
    fn parse_public_subsection(&mut self) -> Parsed<PublicSubsection> {
        if self.get_delimiter("// Public Methods")?.is_none() {
            return Ok(None);
        }
        let public_methods = self.one_or_more(
            |parser: &mut Self| Ok(parser.parse_method()?.map(PublicMethod::new)),
            "Method",
            "PublicSubsection",
        )?;
        Ok(Some(PublicSubsection::new(public_methods)))
    }

    /// Method ::= name "(" Parameter* ")" Result?
    fn parse_method(&mut self) -> Parsed<Method> {
        let Some(name) = self.get_token(TokenKind::Name)? else {
            return Ok(None);
        };
        self.expect_delimiter("(", "Method")?;
        let parameters = self.zero_or_more(Self::parse_parameter)?;
        self.expect_delimiter(")", "Method")?;
        let result = self.parse_method_result()?;
        Ok(Some(Method::new(name.value(), parameters, result)))
    }

    /// AttributeSubsection ::= "// Attribute Methods" AttributeMethod+
    fn parse_attribute_subsection(&mut self) -> Parsed<AttributeSubsection> {
        if self.get_delimiter("// Attribute Methods")?.is_none() {
            return Ok(None);
        }
        let attribute_methods = self.one_or_more(
            Self::parse_attribute_method,
            "AttributeMethod",
            "AttributeSubsection",
        )?;
        Ok(Some(AttributeSubsection::new(attribute_methods)))
    }

    /// AttributeMethod ::= GetterMethod | SetterMethod
    fn parse_attribute_method(&mut self) -> Parsed<AttributeMethod> {
        let Some(name) = self.get_token(TokenKind::Name)? else {
            return Ok(None);
        };
        self.expect_delimiter("(", "AttributeMethod")?;
        if self.get_delimiter(")")?.is_some() {
            let abstraction = self.expect(Self::parse_abstraction, "Abstraction", "GetterMethod")?;
            let getter = GetterMethod::new(name.value(), abstraction);
            return Ok(Some(AttributeMethod::Getter(getter)));
        }
        let parameter = self.expect(Self::parse_parameter, "Parameter", "SetterMethod")?;
        self.expect_delimiter(")", "SetterMethod")?;
        let setter = SetterMethod::new(name.value(), parameter);
        Ok(Some(AttributeMethod::Setter(setter)))
    }

    /// AspectSubsection ::= ("// Aspect Interfaces" | "// Aspect Methods") AspectInterface+
    fn parse_aspect_subsection(&mut self) -> Parsed<AspectSubsection> {
        if self.get_delimiter("// Aspect Interfaces")?.is_none()
            && self.get_delimiter("// Aspect Methods")?.is_none()
        {
            return Ok(None);
        }
        let aspect_interfaces = self.one_or_more(
            |parser: &mut Self| Ok(parser.parse_abstraction()?.map(AspectInterface::new)),
            "AspectInterface",
            "AspectSubsection",
        )?;
        Ok(Some(AspectSubsection::new(aspect_interfaces)))
    }

    /// AspectSection ::= "// Aspect Definitions" AspectDefinition+
    fn parse_aspect_section(&mut self) -> Parsed<AspectSection> {
        if self.get_delimiter("// Aspect Definitions")?.is_none() {
            return Ok(None);
        }
        let aspect_definitions = self.one_or_more(
            Self::parse_aspect_definition,
            "AspectDefinition",
            "AspectSection",
        )?;
        Ok(Some(AspectSection::new(aspect_definitions)))
    }

    /// AspectDefinition ::= Declaration "interface" "{" AspectMethod+ "}"
    fn parse_aspect_definition(&mut self) -> Parsed<AspectDefinition> {
        let Some(declaration) = self.parse_declaration()? else {
            return Ok(None);
        };
        self.expect_delimiter("interface", "AspectDefinition")?;
        self.expect_delimiter("{", "AspectDefinition")?;
        let aspect_methods = self.one_or_more(
            |parser: &mut Self| Ok(parser.parse_method()?.map(AspectMethod::new)),
            "AspectMethod",
            "AspectDefinition",
        )?;
        self.expect_delimiter("}", "AspectDefinition")?;
        Ok(Some(AspectDefinition::new(declaration, aspect_methods)))
    }

    // === Repetition Helpers ===

    fn expect<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Parsed<T>,
        expected: &str,
        rule: &str,
    ) -> Result<T, ParserError> {
        match parse(self)? {
            Some(value) => Ok(value),
            None => Err(self.unexpected(expected, rule)),
        }
    }

    fn zero_or_more<T>(
        &mut self,
        mut parse: impl FnMut(&mut Self) -> Parsed<T>,
    ) -> Result<Vec<T>, ParserError> {
        let mut items = Vec::new();
        while let Some(item) = parse(self)? {
            items.push(item);
        }
        Ok(items)
    }

    fn one_or_more<T>(
        &mut self,
        parse: impl FnMut(&mut Self) -> Parsed<T>,
        expected: &str,
        rule: &str,
    ) -> Result<Vec<T>, ParserError> {
        let items = self.zero_or_more(parse)?;
        if items.is_empty() {
            return Err(self.unexpected(expected, rule));
        }
        Ok(items)
    }

    // === Tokenizer Helper Methods ===

    /// Takes the next token from the push-back stack, or blocks on the queue.
    /// A closed and drained queue yields `None`.
    fn next_token(&mut self) -> Result<Option<Token>, ParserError> {
        let token = match self.next.pop() {
            Some(token) => Some(token),
            None => self.tokens.as_ref().and_then(|tokens| tokens.recv().ok()),
        };
        match token {
            Some(token) if token.kind() == TokenKind::Error => Err(self.unrecognized(&token)),
            token => Ok(token),
        }
    }

    fn put_back(&mut self, token: Token) {
        self.next.push(token);
    }

    fn next_significant(&mut self, skip_newlines: bool) -> Result<Option<Token>, ParserError> {
        while let Some(token) = self.next_token()? {
            match token.kind() {
                TokenKind::Space => continue,
                TokenKind::Newline if skip_newlines => continue,
                _ => return Ok(Some(token)),
            }
        }
        Ok(None)
    }

    fn get_token(&mut self, kind: TokenKind) -> Parsed<Token> {
        let Some(token) = self.next_significant(kind != TokenKind::Newline)? else {
            return Ok(None);
        };
        if token.kind() == kind {
            return Ok(Some(token));
        }
        self.put_back(token);
        Ok(None)
    }

    fn get_delimiter(&mut self, delimiter: &str) -> Parsed<Token> {
        self.match_delimiter(delimiter, true)
    }

    /// Like `get_delimiter` but the delimiter must be on the current line.
    fn get_adjacent_delimiter(&mut self, delimiter: &str) -> Parsed<Token> {
        self.match_delimiter(delimiter, false)
    }

    fn match_delimiter(&mut self, delimiter: &str, skip_newlines: bool) -> Parsed<Token> {
        let Some(token) = self.next_significant(skip_newlines)? else {
            return Ok(None);
        };
        if token.is_delimiter(delimiter) {
            return Ok(Some(token));
        }
        self.put_back(token);
        Ok(None)
    }

    fn expect_delimiter(&mut self, delimiter: &str, rule: &str) -> Result<(), ParserError> {
        match self.get_delimiter(delimiter)? {
            Some(_) => Ok(()),
            None => Err(self.unexpected(delimiter, rule)),
        }
    }

    fn expect_token(&mut self, kind: TokenKind, rule: &str) -> Result<Token, ParserError> {
        match self.get_token(kind)? {
            Some(token) => Ok(token),
            None => Err(self.unexpected(&kind.to_string().to_lowercase(), rule)),
        }
    }

    // === Diagnostics ===

    fn unexpected(&mut self, expected: &str, rule: &str) -> ParserError {
        let token = match self.next_significant(true) {
            Ok(token) => token,
            Err(error) => return error,
        };
        let body = grammar::rule_body(rule).unwrap_or_default();
        let help = format!("Was expecting '{expected}' from:\n  {rule}: {body}");
        match token {
            Some(token) => {
                let context = source_context(self.source_text, token.line(), token.position());
                let message = format!(
                    "An unexpected token was received by the parser: {token} (line {}, column {})\n{context}{help}",
                    token.line(),
                    token.position()
                );
                ParserError::UnexpectedToken {
                    message,
                    src: (*self.source).clone(),
                    span: (token.offset(), token.value().len()).into(),
                    rule: rule.to_string(),
                    expected: help,
                }
            }
            None => {
                let offset = self.source_text.len();
                let (line, column) = get_line_and_column(self.source_text, offset);
                let context = source_context(self.source_text, line, column);
                let message = format!(
                    "The parser reached the end of the source unexpectedly (line {line}, column {column})\n{context}{help}"
                );
                ParserError::UnexpectedEof {
                    message,
                    src: (*self.source).clone(),
                    span: (offset, 0).into(),
                    rule: rule.to_string(),
                    expected: help,
                }
            }
        }
    }

    fn unrecognized(&self, token: &Token) -> ParserError {
        let context = source_context(self.source_text, token.line(), token.position());
        let message = format!(
            "An unrecognized character was found by the scanner: {:?} (line {}, column {})\n{context}",
            token.value(),
            token.line(),
            token.position()
        );
        ParserError::UnrecognizedInput {
            message,
            src: (*self.source).clone(),
            span: (token.offset(), token.value().len()).into(),
        }
    }
}
