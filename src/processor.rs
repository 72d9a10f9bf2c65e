use crate::ast::*;

/// Callbacks invoked by the [`Visitor`](crate::visitor::Visitor) while it walks a
/// model. Every callback does nothing by default so implementors only override
/// the ones they care about.
///
/// `preprocess_*` fires when a node is entered and `postprocess_*` when it is
/// left. Nodes that are items of a list also receive their 1-based `index` and
/// the `size` of the list. `process_*_slot` fires between two children of a
/// node; `slot` is the ordinal of the child just visited, and it fires whether
/// or not an optional child is present.
#[allow(unused_variables)]
pub trait Processor {
    // Leaf tokens

    fn process_comment(&mut self, comment: &str) {}

    fn process_name(&mut self, name: &str) {}

    fn process_newline(&mut self, newline: &str) {}

    fn process_path(&mut self, path: &str) {}

    // Module

    fn preprocess_model(&mut self, model: &Model) {}

    fn process_model_slot(&mut self, slot: usize) {}

    fn postprocess_model(&mut self, model: &Model) {}

    fn preprocess_module_definition(&mut self, module_definition: &ModuleDefinition) {}

    fn process_module_definition_slot(&mut self, slot: usize) {}

    fn postprocess_module_definition(&mut self, module_definition: &ModuleDefinition) {}

    fn preprocess_notice(&mut self, notice: &Notice) {}

    fn postprocess_notice(&mut self, notice: &Notice) {}

    fn preprocess_header(&mut self, header: &Header) {}

    fn process_header_slot(&mut self, slot: usize) {}

    fn postprocess_header(&mut self, header: &Header) {}

    fn preprocess_imports(&mut self, imports: &Imports) {}

    fn postprocess_imports(&mut self, imports: &Imports) {}

    fn preprocess_module(&mut self, module: &Module, index: usize, size: usize) {}

    fn process_module_slot(&mut self, slot: usize) {}

    fn postprocess_module(&mut self, module: &Module, index: usize, size: usize) {}

    // Primitives

    fn preprocess_primitive_definitions(&mut self, primitive_definitions: &PrimitiveDefinitions) {}

    fn process_primitive_definitions_slot(&mut self, slot: usize) {}

    fn postprocess_primitive_definitions(&mut self, primitive_definitions: &PrimitiveDefinitions) {
    }

    fn preprocess_type_section(&mut self, type_section: &TypeSection) {}

    fn postprocess_type_section(&mut self, type_section: &TypeSection) {}

    fn preprocess_type_definition(
        &mut self,
        type_definition: &TypeDefinition,
        index: usize,
        size: usize,
    ) {
    }

    fn process_type_definition_slot(&mut self, slot: usize) {}

    fn postprocess_type_definition(
        &mut self,
        type_definition: &TypeDefinition,
        index: usize,
        size: usize,
    ) {
    }

    fn preprocess_enumeration(&mut self, enumeration: &Enumeration) {}

    fn process_enumeration_slot(&mut self, slot: usize) {}

    fn postprocess_enumeration(&mut self, enumeration: &Enumeration) {}

    fn preprocess_value(&mut self, value: &Value) {}

    fn process_value_slot(&mut self, slot: usize) {}

    fn postprocess_value(&mut self, value: &Value) {}

    fn preprocess_additional_value(
        &mut self,
        additional_value: &AdditionalValue,
        index: usize,
        size: usize,
    ) {
    }

    fn postprocess_additional_value(
        &mut self,
        additional_value: &AdditionalValue,
        index: usize,
        size: usize,
    ) {
    }

    fn preprocess_functional_section(&mut self, functional_section: &FunctionalSection) {}

    fn postprocess_functional_section(&mut self, functional_section: &FunctionalSection) {}

    fn preprocess_functional_definition(
        &mut self,
        functional_definition: &FunctionalDefinition,
        index: usize,
        size: usize,
    ) {
    }

    fn process_functional_definition_slot(&mut self, slot: usize) {}

    fn postprocess_functional_definition(
        &mut self,
        functional_definition: &FunctionalDefinition,
        index: usize,
        size: usize,
    ) {
    }

    // Shared building blocks

    fn preprocess_declaration(&mut self, declaration: &Declaration) {}

    fn process_declaration_slot(&mut self, slot: usize) {}

    fn postprocess_declaration(&mut self, declaration: &Declaration) {}

    fn preprocess_constraints(&mut self, constraints: &Constraints) {}

    fn process_constraints_slot(&mut self, slot: usize) {}

    fn postprocess_constraints(&mut self, constraints: &Constraints) {}

    fn preprocess_constraint(&mut self, constraint: &Constraint) {}

    fn process_constraint_slot(&mut self, slot: usize) {}

    fn postprocess_constraint(&mut self, constraint: &Constraint) {}

    fn preprocess_additional_constraint(
        &mut self,
        additional_constraint: &AdditionalConstraint,
        index: usize,
        size: usize,
    ) {
    }

    fn postprocess_additional_constraint(
        &mut self,
        additional_constraint: &AdditionalConstraint,
        index: usize,
        size: usize,
    ) {
    }

    fn preprocess_abstraction(&mut self, abstraction: &Abstraction) {}

    fn process_abstraction_slot(&mut self, slot: usize) {}

    fn postprocess_abstraction(&mut self, abstraction: &Abstraction) {}

    fn preprocess_prefix(&mut self, prefix: &Prefix) {}

    fn postprocess_prefix(&mut self, prefix: &Prefix) {}

    fn preprocess_map(&mut self, map: &Map) {}

    fn postprocess_map(&mut self, map: &Map) {}

    fn preprocess_suffix(&mut self, suffix: &Suffix) {}

    fn postprocess_suffix(&mut self, suffix: &Suffix) {}

    fn preprocess_arguments(&mut self, arguments: &Arguments) {}

    fn process_arguments_slot(&mut self, slot: usize) {}

    fn postprocess_arguments(&mut self, arguments: &Arguments) {}

    fn preprocess_argument(&mut self, argument: &Argument) {}

    fn postprocess_argument(&mut self, argument: &Argument) {}

    fn preprocess_additional_argument(
        &mut self,
        additional_argument: &AdditionalArgument,
        index: usize,
        size: usize,
    ) {
    }

    fn postprocess_additional_argument(
        &mut self,
        additional_argument: &AdditionalArgument,
        index: usize,
        size: usize,
    ) {
    }

    fn preprocess_parameter(&mut self, parameter: &Parameter, index: usize, size: usize) {}

    fn process_parameter_slot(&mut self, slot: usize) {}

    fn postprocess_parameter(&mut self, parameter: &Parameter, index: usize, size: usize) {}

    fn preprocess_result(&mut self, result: &MethodResult) {}

    fn postprocess_result(&mut self, result: &MethodResult) {}

    fn preprocess_parameterized(&mut self, parameterized: &Parameterized) {}

    fn postprocess_parameterized(&mut self, parameterized: &Parameterized) {}

    // Interfaces

    fn preprocess_interface_definitions(&mut self, interface_definitions: &InterfaceDefinitions) {}

    fn process_interface_definitions_slot(&mut self, slot: usize) {}

    fn postprocess_interface_definitions(&mut self, interface_definitions: &InterfaceDefinitions) {
    }

    fn preprocess_class_section(&mut self, class_section: &ClassSection) {}

    fn postprocess_class_section(&mut self, class_section: &ClassSection) {}

    fn preprocess_class_definition(
        &mut self,
        class_definition: &ClassDefinition,
        index: usize,
        size: usize,
    ) {
    }

    fn process_class_definition_slot(&mut self, slot: usize) {}

    fn postprocess_class_definition(
        &mut self,
        class_definition: &ClassDefinition,
        index: usize,
        size: usize,
    ) {
    }

    fn preprocess_class_methods(&mut self, class_methods: &ClassMethods) {}

    fn process_class_methods_slot(&mut self, slot: usize) {}

    fn postprocess_class_methods(&mut self, class_methods: &ClassMethods) {}

    fn preprocess_constructor_subsection(&mut self, constructor_subsection: &ConstructorSubsection) {
    }

    fn postprocess_constructor_subsection(
        &mut self,
        constructor_subsection: &ConstructorSubsection,
    ) {
    }

    fn preprocess_constructor_method(
        &mut self,
        constructor_method: &ConstructorMethod,
        index: usize,
        size: usize,
    ) {
    }

    fn process_constructor_method_slot(&mut self, slot: usize) {}

    fn postprocess_constructor_method(
        &mut self,
        constructor_method: &ConstructorMethod,
        index: usize,
        size: usize,
    ) {
    }

    fn preprocess_constant_subsection(&mut self, constant_subsection: &ConstantSubsection) {}

    fn postprocess_constant_subsection(&mut self, constant_subsection: &ConstantSubsection) {}

    fn preprocess_constant_method(
        &mut self,
        constant_method: &ConstantMethod,
        index: usize,
        size: usize,
    ) {
    }

    fn process_constant_method_slot(&mut self, slot: usize) {}

    fn postprocess_constant_method(
        &mut self,
        constant_method: &ConstantMethod,
        index: usize,
        size: usize,
    ) {
    }

    fn preprocess_function_subsection(&mut self, function_subsection: &FunctionSubsection) {}

    fn postprocess_function_subsection(&mut self, function_subsection: &FunctionSubsection) {}

    fn preprocess_function_method(
        &mut self,
        function_method: &FunctionMethod,
        index: usize,
        size: usize,
    ) {
    }

    fn process_function_method_slot(&mut self, slot: usize) {}

    fn postprocess_function_method(
        &mut self,
        function_method: &FunctionMethod,
        index: usize,
        size: usize,
    ) {
    }

    fn preprocess_instance_section(&mut self, instance_section: &InstanceSection) {}

    fn postprocess_instance_section(&mut self, instance_section: &InstanceSection) {}

    fn preprocess_instance_definition(
        &mut self,
        instance_definition: &InstanceDefinition,
        index: usize,
        size: usize,
    ) {
    }

    fn process_instance_definition_slot(&mut self, slot: usize) {}

    fn postprocess_instance_definition(
        &mut self,
        instance_definition: &InstanceDefinition,
        index: usize,
        size: usize,
    ) {
    }

    fn preprocess_instance_methods(&mut self, instance_methods: &InstanceMethods) {}

    fn process_instance_methods_slot(&mut self, slot: usize) {}

    fn postprocess_instance_methods(&mut self, instance_methods: &InstanceMethods) {}

    fn preprocess_public_subsection(&mut self, public_subsection: &PublicSubsection) {}

    fn postprocess_public_subsection(&mut self, public_subsection: &PublicSubsection) {}

    fn preprocess_public_method(&mut self, public_method: &PublicMethod, index: usize, size: usize) {
    }

    fn postprocess_public_method(
        &mut self,
        public_method: &PublicMethod,
        index: usize,
        size: usize,
    ) {
    }

    fn preprocess_method(&mut self, method: &Method) {}

    fn process_method_slot(&mut self, slot: usize) {}

    fn postprocess_method(&mut self, method: &Method) {}

    fn preprocess_attribute_subsection(&mut self, attribute_subsection: &AttributeSubsection) {}

    fn postprocess_attribute_subsection(&mut self, attribute_subsection: &AttributeSubsection) {}

    fn preprocess_attribute_method(
        &mut self,
        attribute_method: &AttributeMethod,
        index: usize,
        size: usize,
    ) {
    }

    fn postprocess_attribute_method(
        &mut self,
        attribute_method: &AttributeMethod,
        index: usize,
        size: usize,
    ) {
    }

    fn preprocess_getter_method(&mut self, getter_method: &GetterMethod) {}

    fn process_getter_method_slot(&mut self, slot: usize) {}

    fn postprocess_getter_method(&mut self, getter_method: &GetterMethod) {}

    fn preprocess_setter_method(&mut self, setter_method: &SetterMethod) {}

    fn process_setter_method_slot(&mut self, slot: usize) {}

    fn postprocess_setter_method(&mut self, setter_method: &SetterMethod) {}

    fn preprocess_aspect_subsection(&mut self, aspect_subsection: &AspectSubsection) {}

    fn postprocess_aspect_subsection(&mut self, aspect_subsection: &AspectSubsection) {}

    fn preprocess_aspect_interface(
        &mut self,
        aspect_interface: &AspectInterface,
        index: usize,
        size: usize,
    ) {
    }

    fn postprocess_aspect_interface(
        &mut self,
        aspect_interface: &AspectInterface,
        index: usize,
        size: usize,
    ) {
    }

    fn preprocess_aspect_section(&mut self, aspect_section: &AspectSection) {}

    fn postprocess_aspect_section(&mut self, aspect_section: &AspectSection) {}

    fn preprocess_aspect_definition(
        &mut self,
        aspect_definition: &AspectDefinition,
        index: usize,
        size: usize,
    ) {
    }

    fn process_aspect_definition_slot(&mut self, slot: usize) {}

    fn postprocess_aspect_definition(
        &mut self,
        aspect_definition: &AspectDefinition,
        index: usize,
        size: usize,
    ) {
    }

    fn preprocess_aspect_method(&mut self, aspect_method: &AspectMethod, index: usize, size: usize) {
    }

    fn postprocess_aspect_method(
        &mut self,
        aspect_method: &AspectMethod,
        index: usize,
        size: usize,
    ) {
    }
}
