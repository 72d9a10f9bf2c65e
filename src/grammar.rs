//! The grammar of the class model language, one entry per rule. The parser
//! quotes the body of the rule it was pursuing when it reports a syntax error.

pub const RULES: &[(&str, &str)] = &[
    ("Model", "ModuleDefinition PrimitiveDefinitions InterfaceDefinitions"),
    ("ModuleDefinition", "Notice Header Imports?"),
    ("Notice", "comment"),
    ("Header", "comment \"package\" name"),
    ("Imports", "\"import\" \"(\" Module+ \")\""),
    ("Module", "name path"),
    ("PrimitiveDefinitions", "TypeSection? FunctionalSection?"),
    ("TypeSection", "\"// Type Definitions\" TypeDefinition+"),
    ("TypeDefinition", "Declaration Abstraction Enumeration?"),
    ("Declaration", "comment \"type\" name Constraints?"),
    ("Constraints", "\"[\" Constraint AdditionalConstraint* \"]\""),
    ("Constraint", "name Abstraction"),
    ("AdditionalConstraint", "\",\" Constraint"),
    ("Abstraction", "Prefix? name Suffix? Arguments?"),
    ("Prefix", "Array | Map | Channel"),
    ("Array", "\"[\" \"]\""),
    ("Map", "\"map\" \"[\" name \"]\""),
    ("Channel", "\"chan\""),
    ("Suffix", "\".\" name"),
    ("Arguments", "\"[\" Argument AdditionalArgument* \"]\""),
    ("Argument", "Abstraction"),
    ("AdditionalArgument", "\",\" Argument"),
    ("Enumeration", "\"const\" \"(\" Value AdditionalValue* \")\""),
    ("Value", "name Abstraction \"=\" \"iota\""),
    ("AdditionalValue", "name"),
    ("FunctionalSection", "\"// Functional Definitions\" FunctionalDefinition+"),
    ("FunctionalDefinition", "Declaration \"func\" \"(\" Parameter* \")\" Result"),
    ("Parameter", "name Abstraction \",\"?"),
    ("Result", "newline | Abstraction | Parameterized"),
    ("Parameterized", "\"(\" Parameter+ \")\""),
    ("InterfaceDefinitions", "ClassSection InstanceSection AspectSection?"),
    ("ClassSection", "\"// Class Definitions\" ClassDefinition+"),
    ("ClassDefinition", "Declaration \"interface\" \"{\" ClassMethods \"}\""),
    ("ClassMethods", "ConstructorSubsection ConstantSubsection? FunctionSubsection?"),
    ("ConstructorSubsection", "\"// Constructor Methods\" ConstructorMethod+"),
    ("ConstructorMethod", "name \"(\" Parameter* \")\" Abstraction"),
    ("ConstantSubsection", "\"// Constant Methods\" ConstantMethod+"),
    ("ConstantMethod", "name \"(\" \")\" Abstraction"),
    ("FunctionSubsection", "\"// Function Methods\" FunctionMethod+"),
    ("FunctionMethod", "name \"(\" Parameter* \")\" Result"),
    ("InstanceSection", "\"// Instance Definitions\" InstanceDefinition+"),
    ("InstanceDefinition", "Declaration \"interface\" \"{\" InstanceMethods \"}\""),
    ("InstanceMethods", "PublicSubsection AttributeSubsection? AspectSubsection?"),
    ("PublicSubsection", "\"// Public Methods\" PublicMethod+"),
    ("Method", "name \"(\" Parameter* \")\" Result?"),
    ("AttributeSubsection", "\"// Attribute Methods\" AttributeMethod+"),
    ("AttributeMethod", "GetterMethod | SetterMethod"),
    ("GetterMethod", "name \"(\" \")\" Abstraction"),
    ("SetterMethod", "name \"(\" Parameter \")\""),
    ("AspectSubsection", "(\"// Aspect Interfaces\" | \"// Aspect Methods\") AspectInterface+"),
    ("AspectSection", "\"// Aspect Definitions\" AspectDefinition+"),
    ("AspectDefinition", "Declaration \"interface\" \"{\" AspectMethod+ \"}\""),
];

/// Returns the body of the named grammar rule.
pub fn rule_body(rule: &str) -> Option<&'static str> {
    RULES
        .iter()
        .find(|(name, _)| *name == rule)
        .map(|(_, body)| *body)
}
