use crate::ast::*;
use crate::processor::Processor;

/// Walks a model depth first, left to right, and reports every node, slot and
/// leaf token to a [`Processor`].
pub struct Visitor<'p, P: Processor + ?Sized> {
    processor: &'p mut P,
}

impl<'p, P: Processor + ?Sized> Visitor<'p, P> {
    pub fn new(processor: &'p mut P) -> Self {
        Self { processor }
    }

    pub fn visit_model(&mut self, model: &Model) {
        self.processor.preprocess_model(model);
        self.visit_module_definition(model.module_definition());
        self.processor.process_model_slot(1);
        self.visit_primitive_definitions(model.primitive_definitions());
        self.processor.process_model_slot(2);
        self.visit_interface_definitions(model.interface_definitions());
        self.processor.postprocess_model(model);
    }

    // Module

    pub fn visit_module_definition(&mut self, module_definition: &ModuleDefinition) {
        self.processor.preprocess_module_definition(module_definition);
        self.visit_notice(module_definition.notice());
        self.processor.process_module_definition_slot(1);
        self.visit_header(module_definition.header());
        self.processor.process_module_definition_slot(2);
        if let Some(imports) = module_definition.imports() {
            self.visit_imports(imports);
        }
        self.processor.postprocess_module_definition(module_definition);
    }

    pub fn visit_notice(&mut self, notice: &Notice) {
        self.processor.preprocess_notice(notice);
        self.processor.process_comment(notice.comment());
        self.processor.postprocess_notice(notice);
    }

    pub fn visit_header(&mut self, header: &Header) {
        self.processor.preprocess_header(header);
        self.processor.process_comment(header.comment());
        self.processor.process_header_slot(1);
        self.processor.process_name(header.name());
        self.processor.postprocess_header(header);
    }

    pub fn visit_imports(&mut self, imports: &Imports) {
        self.processor.preprocess_imports(imports);
        let size = imports.modules().len();
        for (index, module) in imports.modules().iter().enumerate() {
            self.visit_module(module, index + 1, size);
        }
        self.processor.postprocess_imports(imports);
    }

    pub fn visit_module(&mut self, module: &Module, index: usize, size: usize) {
        self.processor.preprocess_module(module, index, size);
        self.processor.process_name(module.name());
        self.processor.process_module_slot(1);
        self.processor.process_path(module.path());
        self.processor.postprocess_module(module, index, size);
    }

    // Primitives

    pub fn visit_primitive_definitions(&mut self, primitive_definitions: &PrimitiveDefinitions) {
        self.processor
            .preprocess_primitive_definitions(primitive_definitions);
        if let Some(type_section) = primitive_definitions.type_section() {
            self.visit_type_section(type_section);
        }
        self.processor.process_primitive_definitions_slot(1);
        if let Some(functional_section) = primitive_definitions.functional_section() {
            self.visit_functional_section(functional_section);
        }
        self.processor
            .postprocess_primitive_definitions(primitive_definitions);
    }

    pub fn visit_type_section(&mut self, type_section: &TypeSection) {
        self.processor.preprocess_type_section(type_section);
        let size = type_section.type_definitions().len();
        for (index, type_definition) in type_section.type_definitions().iter().enumerate() {
            self.visit_type_definition(type_definition, index + 1, size);
        }
        self.processor.postprocess_type_section(type_section);
    }

    pub fn visit_type_definition(
        &mut self,
        type_definition: &TypeDefinition,
        index: usize,
        size: usize,
    ) {
        self.processor
            .preprocess_type_definition(type_definition, index, size);
        self.visit_declaration(type_definition.declaration());
        self.processor.process_type_definition_slot(1);
        self.visit_abstraction(type_definition.abstraction());
        self.processor.process_type_definition_slot(2);
        if let Some(enumeration) = type_definition.enumeration() {
            self.visit_enumeration(enumeration);
        }
        self.processor
            .postprocess_type_definition(type_definition, index, size);
    }

    pub fn visit_enumeration(&mut self, enumeration: &Enumeration) {
        self.processor.preprocess_enumeration(enumeration);
        self.visit_value(enumeration.value());
        self.processor.process_enumeration_slot(1);
        let size = enumeration.additional_values().len();
        for (index, additional_value) in enumeration.additional_values().iter().enumerate() {
            self.visit_additional_value(additional_value, index + 1, size);
        }
        self.processor.postprocess_enumeration(enumeration);
    }

    pub fn visit_value(&mut self, value: &Value) {
        self.processor.preprocess_value(value);
        self.processor.process_name(value.name());
        self.processor.process_value_slot(1);
        self.visit_abstraction(value.abstraction());
        self.processor.postprocess_value(value);
    }

    pub fn visit_additional_value(
        &mut self,
        additional_value: &AdditionalValue,
        index: usize,
        size: usize,
    ) {
        self.processor
            .preprocess_additional_value(additional_value, index, size);
        self.processor.process_name(additional_value.name());
        self.processor
            .postprocess_additional_value(additional_value, index, size);
    }

    pub fn visit_functional_section(&mut self, functional_section: &FunctionalSection) {
        self.processor.preprocess_functional_section(functional_section);
        let definitions = functional_section.functional_definitions();
        for (index, functional_definition) in definitions.iter().enumerate() {
            self.visit_functional_definition(functional_definition, index + 1, definitions.len());
        }
        self.processor.postprocess_functional_section(functional_section);
    }

    pub fn visit_functional_definition(
        &mut self,
        functional_definition: &FunctionalDefinition,
        index: usize,
        size: usize,
    ) {
        self.processor
            .preprocess_functional_definition(functional_definition, index, size);
        self.visit_declaration(functional_definition.declaration());
        self.processor.process_functional_definition_slot(1);
        self.visit_parameters(functional_definition.parameters());
        self.processor.process_functional_definition_slot(2);
        self.visit_result(functional_definition.result());
        self.processor
            .postprocess_functional_definition(functional_definition, index, size);
    }

    // Shared building blocks

    pub fn visit_declaration(&mut self, declaration: &Declaration) {
        self.processor.preprocess_declaration(declaration);
        self.processor.process_comment(declaration.comment());
        self.processor.process_declaration_slot(1);
        self.processor.process_name(declaration.name());
        self.processor.process_declaration_slot(2);
        if let Some(constraints) = declaration.constraints() {
            self.visit_constraints(constraints);
        }
        self.processor.postprocess_declaration(declaration);
    }

    pub fn visit_constraints(&mut self, constraints: &Constraints) {
        self.processor.preprocess_constraints(constraints);
        self.visit_constraint(constraints.constraint());
        self.processor.process_constraints_slot(1);
        let size = constraints.additional_constraints().len();
        for (index, additional) in constraints.additional_constraints().iter().enumerate() {
            self.visit_additional_constraint(additional, index + 1, size);
        }
        self.processor.postprocess_constraints(constraints);
    }

    pub fn visit_constraint(&mut self, constraint: &Constraint) {
        self.processor.preprocess_constraint(constraint);
        self.processor.process_name(constraint.name());
        self.processor.process_constraint_slot(1);
        self.visit_abstraction(constraint.abstraction());
        self.processor.postprocess_constraint(constraint);
    }

    pub fn visit_additional_constraint(
        &mut self,
        additional_constraint: &AdditionalConstraint,
        index: usize,
        size: usize,
    ) {
        self.processor
            .preprocess_additional_constraint(additional_constraint, index, size);
        self.visit_constraint(additional_constraint.constraint());
        self.processor
            .postprocess_additional_constraint(additional_constraint, index, size);
    }

    pub fn visit_abstraction(&mut self, abstraction: &Abstraction) {
        self.processor.preprocess_abstraction(abstraction);
        if let Some(prefix) = abstraction.prefix() {
            self.visit_prefix(prefix);
        }
        self.processor.process_abstraction_slot(1);
        self.processor.process_name(abstraction.name());
        self.processor.process_abstraction_slot(2);
        if let Some(suffix) = abstraction.suffix() {
            self.visit_suffix(suffix);
        }
        self.processor.process_abstraction_slot(3);
        if let Some(arguments) = abstraction.arguments() {
            self.visit_arguments(arguments);
        }
        self.processor.postprocess_abstraction(abstraction);
    }

    pub fn visit_prefix(&mut self, prefix: &Prefix) {
        self.processor.preprocess_prefix(prefix);
        match prefix {
            Prefix::Array | Prefix::Channel => {}
            Prefix::Map(map) => self.visit_map(map),
        }
        self.processor.postprocess_prefix(prefix);
    }

    pub fn visit_map(&mut self, map: &Map) {
        self.processor.preprocess_map(map);
        self.processor.process_name(map.name());
        self.processor.postprocess_map(map);
    }

    pub fn visit_suffix(&mut self, suffix: &Suffix) {
        self.processor.preprocess_suffix(suffix);
        self.processor.process_name(suffix.name());
        self.processor.postprocess_suffix(suffix);
    }

    pub fn visit_arguments(&mut self, arguments: &Arguments) {
        self.processor.preprocess_arguments(arguments);
        self.visit_argument(arguments.argument());
        self.processor.process_arguments_slot(1);
        let size = arguments.additional_arguments().len();
        for (index, additional) in arguments.additional_arguments().iter().enumerate() {
            self.visit_additional_argument(additional, index + 1, size);
        }
        self.processor.postprocess_arguments(arguments);
    }

    pub fn visit_argument(&mut self, argument: &Argument) {
        self.processor.preprocess_argument(argument);
        self.visit_abstraction(argument.abstraction());
        self.processor.postprocess_argument(argument);
    }

    pub fn visit_additional_argument(
        &mut self,
        additional_argument: &AdditionalArgument,
        index: usize,
        size: usize,
    ) {
        self.processor
            .preprocess_additional_argument(additional_argument, index, size);
        self.visit_argument(additional_argument.argument());
        self.processor
            .postprocess_additional_argument(additional_argument, index, size);
    }

    pub fn visit_parameters(&mut self, parameters: &[Parameter]) {
        let size = parameters.len();
        for (index, parameter) in parameters.iter().enumerate() {
            self.visit_parameter(parameter, index + 1, size);
        }
    }

    pub fn visit_parameter(&mut self, parameter: &Parameter, index: usize, size: usize) {
        self.processor.preprocess_parameter(parameter, index, size);
        self.processor.process_name(parameter.name());
        self.processor.process_parameter_slot(1);
        self.visit_abstraction(parameter.abstraction());
        self.processor.postprocess_parameter(parameter, index, size);
    }

    pub fn visit_result(&mut self, result: &MethodResult) {
        self.processor.preprocess_result(result);
        match result {
            MethodResult::None(newline) => self.processor.process_newline(newline),
            MethodResult::Abstraction(abstraction) => self.visit_abstraction(abstraction),
            MethodResult::Parameterized(parameterized) => self.visit_parameterized(parameterized),
        }
        self.processor.postprocess_result(result);
    }

    pub fn visit_parameterized(&mut self, parameterized: &Parameterized) {
        self.processor.preprocess_parameterized(parameterized);
        self.visit_parameters(parameterized.parameters());
        self.processor.postprocess_parameterized(parameterized);
    }

    // Interfaces

    pub fn visit_interface_definitions(&mut self, interface_definitions: &InterfaceDefinitions) {
        self.processor
            .preprocess_interface_definitions(interface_definitions);
        self.visit_class_section(interface_definitions.class_section());
        self.processor.process_interface_definitions_slot(1);
        self.visit_instance_section(interface_definitions.instance_section());
        self.processor.process_interface_definitions_slot(2);
        if let Some(aspect_section) = interface_definitions.aspect_section() {
            self.visit_aspect_section(aspect_section);
        }
        self.processor
            .postprocess_interface_definitions(interface_definitions);
    }

    pub fn visit_class_section(&mut self, class_section: &ClassSection) {
        self.processor.preprocess_class_section(class_section);
        let size = class_section.class_definitions().len();
        for (index, class_definition) in class_section.class_definitions().iter().enumerate() {
            self.visit_class_definition(class_definition, index + 1, size);
        }
        self.processor.postprocess_class_section(class_section);
    }

    pub fn visit_class_definition(
        &mut self,
        class_definition: &ClassDefinition,
        index: usize,
        size: usize,
    ) {
        self.processor
            .preprocess_class_definition(class_definition, index, size);
        self.visit_declaration(class_definition.declaration());
        self.processor.process_class_definition_slot(1);
        self.visit_class_methods(class_definition.class_methods());
        self.processor
            .postprocess_class_definition(class_definition, index, size);
    }

    pub fn visit_class_methods(&mut self, class_methods: &ClassMethods) {
        self.processor.preprocess_class_methods(class_methods);
        self.visit_constructor_subsection(class_methods.constructor_subsection());
        self.processor.process_class_methods_slot(1);
        if let Some(constant_subsection) = class_methods.constant_subsection() {
            self.visit_constant_subsection(constant_subsection);
        }
        self.processor.process_class_methods_slot(2);
        if let Some(function_subsection) = class_methods.function_subsection() {
            self.visit_function_subsection(function_subsection);
        }
        self.processor.postprocess_class_methods(class_methods);
    }

    pub fn visit_constructor_subsection(&mut self, constructor_subsection: &ConstructorSubsection) {
        self.processor
            .preprocess_constructor_subsection(constructor_subsection);
        let methods = constructor_subsection.constructor_methods();
        for (index, constructor_method) in methods.iter().enumerate() {
            self.visit_constructor_method(constructor_method, index + 1, methods.len());
        }
        self.processor
            .postprocess_constructor_subsection(constructor_subsection);
    }

    pub fn visit_constructor_method(
        &mut self,
        constructor_method: &ConstructorMethod,
        index: usize,
        size: usize,
    ) {
        self.processor
            .preprocess_constructor_method(constructor_method, index, size);
        self.processor.process_name(constructor_method.name());
        self.processor.process_constructor_method_slot(1);
        self.visit_parameters(constructor_method.parameters());
        self.processor.process_constructor_method_slot(2);
        self.visit_abstraction(constructor_method.abstraction());
        self.processor
            .postprocess_constructor_method(constructor_method, index, size);
    }

    pub fn visit_constant_subsection(&mut self, constant_subsection: &ConstantSubsection) {
        self.processor.preprocess_constant_subsection(constant_subsection);
        let methods = constant_subsection.constant_methods();
        for (index, constant_method) in methods.iter().enumerate() {
            self.visit_constant_method(constant_method, index + 1, methods.len());
        }
        self.processor.postprocess_constant_subsection(constant_subsection);
    }

    pub fn visit_constant_method(
        &mut self,
        constant_method: &ConstantMethod,
        index: usize,
        size: usize,
    ) {
        self.processor
            .preprocess_constant_method(constant_method, index, size);
        self.processor.process_name(constant_method.name());
        self.processor.process_constant_method_slot(1);
        self.visit_abstraction(constant_method.abstraction());
        self.processor
            .postprocess_constant_method(constant_method, index, size);
    }

    pub fn visit_function_subsection(&mut self, function_subsection: &FunctionSubsection) {
        self.processor.preprocess_function_subsection(function_subsection);
        let methods = function_subsection.function_methods();
        for (index, function_method) in methods.iter().enumerate() {
            self.visit_function_method(function_method, index + 1, methods.len());
        }
        self.processor.postprocess_function_subsection(function_subsection);
    }

    pub fn visit_function_method(
        &mut self,
        function_method: &FunctionMethod,
        index: usize,
        size: usize,
    ) {
        self.processor
            .preprocess_function_method(function_method, index, size);
        self.processor.process_name(function_method.name());
        self.processor.process_function_method_slot(1);
        self.visit_parameters(function_method.parameters());
        self.processor.process_function_method_slot(2);
        self.visit_result(function_method.result());
        self.processor
            .postprocess_function_method(function_method, index, size);
    }

    pub fn visit_instance_section(&mut self, instance_section: &InstanceSection) {
        self.processor.preprocess_instance_section(instance_section);
        let definitions = instance_section.instance_definitions();
        for (index, instance_definition) in definitions.iter().enumerate() {
            self.visit_instance_definition(instance_definition, index + 1, definitions.len());
        }
        self.processor.postprocess_instance_section(instance_section);
    }

    pub fn visit_instance_definition(
        &mut self,
        instance_definition: &InstanceDefinition,
        index: usize,
        size: usize,
    ) {
        self.processor
            .preprocess_instance_definition(instance_definition, index, size);
        self.visit_declaration(instance_definition.declaration());
        self.processor.process_instance_definition_slot(1);
        self.visit_instance_methods(instance_definition.instance_methods());
        self.processor
            .postprocess_instance_definition(instance_definition, index, size);
    }

    pub fn visit_instance_methods(&mut self, instance_methods: &InstanceMethods) {
        self.processor.preprocess_instance_methods(instance_methods);
        self.visit_public_subsection(instance_methods.public_subsection());
        self.processor.process_instance_methods_slot(1);
        if let Some(attribute_subsection) = instance_methods.attribute_subsection() {
            self.visit_attribute_subsection(attribute_subsection);
        }
        self.processor.process_instance_methods_slot(2);
        if let Some(aspect_subsection) = instance_methods.aspect_subsection() {
            self.visit_aspect_subsection(aspect_subsection);
        }
        self.processor.postprocess_instance_methods(instance_methods);
    }

    pub fn visit_public_subsection(&mut self, public_subsection: &PublicSubsection) {
        self.processor.preprocess_public_subsection(public_subsection);
        let methods = public_subsection.public_methods();
        for (index, public_method) in methods.iter().enumerate() {
            self.visit_public_method(public_method, index + 1, methods.len());
        }
        self.processor.postprocess_public_subsection(public_subsection);
    }

    pub fn visit_public_method(&mut self, public_method: &PublicMethod, index: usize, size: usize) {
        self.processor
            .preprocess_public_method(public_method, index, size);
        self.visit_method(public_method.method());
        self.processor
            .postprocess_public_method(public_method, index, size);
    }

    pub fn visit_method(&mut self, method: &Method) {
        self.processor.preprocess_method(method);
        self.processor.process_name(method.name());
        self.processor.process_method_slot(1);
        self.visit_parameters(method.parameters());
        self.processor.process_method_slot(2);
        if let Some(result) = method.result() {
            self.visit_result(result);
        }
        self.processor.postprocess_method(method);
    }

    pub fn visit_attribute_subsection(&mut self, attribute_subsection: &AttributeSubsection) {
        self.processor
            .preprocess_attribute_subsection(attribute_subsection);
        let methods = attribute_subsection.attribute_methods();
        for (index, attribute_method) in methods.iter().enumerate() {
            self.visit_attribute_method(attribute_method, index + 1, methods.len());
        }
        self.processor
            .postprocess_attribute_subsection(attribute_subsection);
    }

    pub fn visit_attribute_method(
        &mut self,
        attribute_method: &AttributeMethod,
        index: usize,
        size: usize,
    ) {
        self.processor
            .preprocess_attribute_method(attribute_method, index, size);
        match attribute_method {
            AttributeMethod::Getter(getter_method) => self.visit_getter_method(getter_method),
            AttributeMethod::Setter(setter_method) => self.visit_setter_method(setter_method),
        }
        self.processor
            .postprocess_attribute_method(attribute_method, index, size);
    }

    pub fn visit_getter_method(&mut self, getter_method: &GetterMethod) {
        self.processor.preprocess_getter_method(getter_method);
        self.processor.process_name(getter_method.name());
        self.processor.process_getter_method_slot(1);
        self.visit_abstraction(getter_method.abstraction());
        self.processor.postprocess_getter_method(getter_method);
    }

    pub fn visit_setter_method(&mut self, setter_method: &SetterMethod) {
        self.processor.preprocess_setter_method(setter_method);
        self.processor.process_name(setter_method.name());
        self.processor.process_setter_method_slot(1);
        self.visit_parameter(setter_method.parameter(), 1, 1);
        self.processor.postprocess_setter_method(setter_method);
    }

    pub fn visit_aspect_subsection(&mut self, aspect_subsection: &AspectSubsection) {
        self.processor.preprocess_aspect_subsection(aspect_subsection);
        let interfaces = aspect_subsection.aspect_interfaces();
        for (index, aspect_interface) in interfaces.iter().enumerate() {
            self.visit_aspect_interface(aspect_interface, index + 1, interfaces.len());
        }
        self.processor.postprocess_aspect_subsection(aspect_subsection);
    }

    pub fn visit_aspect_interface(
        &mut self,
        aspect_interface: &AspectInterface,
        index: usize,
        size: usize,
    ) {
        self.processor
            .preprocess_aspect_interface(aspect_interface, index, size);
        self.visit_abstraction(aspect_interface.abstraction());
        self.processor
            .postprocess_aspect_interface(aspect_interface, index, size);
    }

    pub fn visit_aspect_section(&mut self, aspect_section: &AspectSection) {
        self.processor.preprocess_aspect_section(aspect_section);
        let definitions = aspect_section.aspect_definitions();
        for (index, aspect_definition) in definitions.iter().enumerate() {
            self.visit_aspect_definition(aspect_definition, index + 1, definitions.len());
        }
        self.processor.postprocess_aspect_section(aspect_section);
    }

    pub fn visit_aspect_definition(
        &mut self,
        aspect_definition: &AspectDefinition,
        index: usize,
        size: usize,
    ) {
        self.processor
            .preprocess_aspect_definition(aspect_definition, index, size);
        self.visit_declaration(aspect_definition.declaration());
        self.processor.process_aspect_definition_slot(1);
        let methods = aspect_definition.aspect_methods();
        for (position, aspect_method) in methods.iter().enumerate() {
            self.visit_aspect_method(aspect_method, position + 1, methods.len());
        }
        self.processor
            .postprocess_aspect_definition(aspect_definition, index, size);
    }

    pub fn visit_aspect_method(&mut self, aspect_method: &AspectMethod, index: usize, size: usize) {
        self.processor
            .preprocess_aspect_method(aspect_method, index, size);
        self.visit_method(aspect_method.method());
        self.processor
            .postprocess_aspect_method(aspect_method, index, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the order of a few callbacks.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Processor for Recorder {
        fn process_name(&mut self, name: &str) {
            self.events.push(format!("name {name}"));
        }

        fn preprocess_parameter(&mut self, _: &Parameter, index: usize, size: usize) {
            self.events.push(format!("parameter {index}/{size}"));
        }

        fn process_abstraction_slot(&mut self, slot: usize) {
            self.events.push(format!("slot {slot}"));
        }

        fn preprocess_prefix(&mut self, prefix: &Prefix) {
            self.events.push(format!("prefix {prefix:?}"));
        }
    }

    #[test]
    fn test_parameters_are_indexed_and_slots_fire() {
        let parameters = vec![
            Parameter::new("first", Abstraction::new(Some(Prefix::Array), "V", None, None)),
            Parameter::new("second", Abstraction::named("int")),
        ];
        let mut recorder = Recorder::default();
        Visitor::new(&mut recorder).visit_parameters(&parameters);
        assert_eq!(
            recorder.events,
            vec![
                "parameter 1/2",
                "name first",
                "prefix Array",
                "slot 1",
                "name V",
                "slot 2",
                "slot 3",
                "parameter 2/2",
                "name second",
                "slot 1",
                "name int",
                "slot 2",
                "slot 3",
            ]
        );
    }

    #[test]
    fn test_spaces_are_not_reported_as_leaves() {
        let source = "/*\nNotice\n*/\n\n/*\nPackage foo.\n*/\npackage foo\n\n// Class Definitions\n\n/*\nClass.\n*/\ntype FooClassLike interface {\n\t// Constructor Methods\n\tMakeWithSize(size int) FooLike\n}\n\n// Instance Definitions\n\n/*\nInstance.\n*/\ntype FooLike interface {\n\t// Public Methods\n\tGetClass() FooClassLike\n}\n";
        let model = crate::parser::Parser::new(source).parse_model().unwrap();
        let mut recorder = Recorder::default();
        Visitor::new(&mut recorder).visit_model(&model);
        let names: Vec<&str> = recorder
            .events
            .iter()
            .filter_map(|event| event.strip_prefix("name "))
            .collect();
        assert!(names.contains(&"MakeWithSize"));
        assert!(names.contains(&"size"));
        assert!(names.contains(&"FooLike"));
        assert!(names.iter().all(|name| !name.is_empty() && !name.contains(char::is_whitespace)));
    }

    #[test]
    fn test_setter_parameter_is_a_single_item_list() {
        let setter = SetterMethod::new("SetName", Parameter::new("name", Abstraction::named("string")));
        let mut recorder = Recorder::default();
        Visitor::new(&mut recorder).visit_setter_method(&setter);
        assert_eq!(recorder.events[0], "name SetName");
        assert_eq!(recorder.events[1], "parameter 1/1");
    }
}
