//! Synthesis of concrete class skeletons from the class and instance
//! interfaces of a model, and creation of new models from built-in templates.

mod models;
mod templates;

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::*;
use crate::error::GeneratorError;
use crate::formatter::Formatter;
use crate::utils::{accessor_prefix, class_key, instance_key, make_lower_case};
use templates::*;

pub use models::MAXIMUM_COPYRIGHT_LENGTH;

static MODULE_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([a-z][a-z0-9]*)\.").expect("the module reference pattern is a valid regular expression")
});

/// Generates class skeletons. A generator holds no state, so one instance can
/// serve any number of models.
#[derive(Debug, Default, Clone, Copy)]
pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Self
    }

    /// Generates the source of one class. `name` is the name shared by the
    /// class interface and its instance interface, `Foo` for `FooClassLike`,
    /// and may also be given with a lower case first letter.
    pub fn generate_class(&self, model: &Model, name: &str) -> Result<String, GeneratorError> {
        let (key, class) = model
            .class_definitions()
            .iter()
            .find_map(|class| {
                let key = class_key(class.name())?;
                (key == name || make_lower_case(key) == name).then_some((key, class))
            })
            .ok_or_else(|| GeneratorError::UnknownClass {
                name: name.to_string(),
            })?;
        let instance = model
            .instance_definitions()
            .iter()
            .find(|instance| instance_key(instance.name()) == Some(key))
            .ok_or_else(|| GeneratorError::MissingInstance {
                name: class.name().to_string(),
            })?;
        let source = ClassSynthesis::new(model, key, class, instance)?.generate()?;
        info!("Generated the {} class of the {} package", key, model.package_name());
        Ok(source)
    }

    /// Generates every class in the model, keyed by the class name with a lower
    /// case first letter.
    pub fn generate_model_classes(
        &self,
        model: &Model,
    ) -> Result<BTreeMap<String, String>, GeneratorError> {
        let mut classes = BTreeMap::new();
        for class in model.class_definitions() {
            let Some(key) = class_key(class.name()) else {
                warn!("Skipping {}, its name does not end with ClassLike", class.name());
                continue;
            };
            classes.insert(make_lower_case(key), self.generate_class(model, key)?);
        }
        Ok(classes)
    }
}

/// Everything needed to render one class, gathered up front from its class and
/// instance interfaces.
struct ClassSynthesis<'m> {
    model: &'m Model,
    key: &'m str,
    class: &'m ClassDefinition,
    instance: &'m InstanceDefinition,
    constraints: String,
    arguments: String,
    attributes: Vec<(String, String)>,
}

impl<'m> ClassSynthesis<'m> {
    fn new(
        model: &'m Model,
        key: &'m str,
        class: &'m ClassDefinition,
        instance: &'m InstanceDefinition,
    ) -> Result<Self, GeneratorError> {
        let declared = class.declaration().constraints();
        let constraints = declared
            .map(|constraints| Formatter::new().format_constraints(constraints))
            .unwrap_or_default();
        let arguments = declared
            .map(|constraints| format!("[{}]", constraints.names().join(", ")))
            .unwrap_or_default();
        Ok(Self {
            model,
            key,
            class,
            instance,
            constraints,
            arguments,
            attributes: collect_attributes(class, instance)?,
        })
    }

    fn generate(&self) -> Result<String, GeneratorError> {
        let body = Template::new(CLASS_BODY)
            .with("Reference", &self.reference())
            .with("AccessFunction", &self.access_function())
            .with("ClassStructure", &self.class_structure())
            .with("ConstantMethods", &self.constant_methods())
            .with("ConstructorMethods", &self.constructor_methods())
            .with("FunctionMethods", &self.function_methods())
            .with("InstanceStructure", &self.instance_structure())
            .with("AttributeMethods", &self.attribute_methods()?)
            .with("AspectInterfaces", &self.aspect_interfaces()?)
            .with("PublicMethods", &self.public_methods())
            .render();
        let imports = self.imports(&body);
        Ok(Template::new(CLASS_TEMPLATE)
            .with("Notice", self.model.module_definition().notice().comment())
            .with("PackageName", self.model.package_name())
            .with("Imports", &imports)
            .with("Body", &body)
            .render())
    }

    fn is_generic(&self) -> bool {
        self.class.declaration().is_generic()
    }

    fn fill(&self, template: &str) -> Template {
        Template::new(template)
            .with("ClassName", self.key)
            .with("Constraints", &self.constraints)
            .with("Arguments", &self.arguments)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(attribute, _)| attribute == name)
    }

    // Class access

    fn reference(&self) -> String {
        if self.is_generic() {
            return self.fill(GENERIC_REFERENCE).render();
        }
        self.fill(SIMPLE_REFERENCE)
            .with("ConstantInitializations", &self.constant_initializations("\t"))
            .render()
    }

    fn access_function(&self) -> String {
        if self.is_generic() {
            return self
                .fill(GENERIC_ACCESS_FUNCTION)
                .with("ConstantInitializations", &self.constant_initializations("\t\t\t"))
                .render();
        }
        self.fill(SIMPLE_ACCESS_FUNCTION).render()
    }

    fn constant_initializations(&self, indentation: &str) -> String {
        self.class
            .class_methods()
            .constant_methods()
            .iter()
            .map(|constant| {
                Template::new(CONSTANT_INITIALIZATION)
                    .with("Indentation", indentation)
                    .with("ConstantName", constant.name())
                    .render()
            })
            .collect()
    }

    // Class methods

    fn class_structure(&self) -> String {
        let fields: String = self
            .class
            .class_methods()
            .constant_methods()
            .iter()
            .map(|constant| {
                Template::new(CONSTANT_FIELD)
                    .with("ConstantName", constant.name())
                    .with("ConstantType", &constant.abstraction().to_string())
                    .render()
            })
            .collect();
        self.fill(CLASS_STRUCTURE)
            .with("ConstantFields", &fields)
            .render()
    }

    fn constant_methods(&self) -> String {
        self.class
            .class_methods()
            .constant_methods()
            .iter()
            .map(|constant| {
                self.fill(CONSTANT_METHOD)
                    .with("ConstantName", constant.name())
                    .with("ConstantType", &constant.abstraction().to_string())
                    .render()
            })
            .collect()
    }

    fn constructor_methods(&self) -> String {
        self.class
            .class_methods()
            .constructor_methods()
            .iter()
            .map(|constructor| {
                let attributes = constructor
                    .parameters()
                    .iter()
                    .filter(|parameter| self.has_attribute(parameter.name()));
                let checks: String = attributes
                    .clone()
                    .map(|parameter| parameter_check(parameter.name()))
                    .collect();
                let initializations: String = attributes
                    .map(|parameter| {
                        Template::new(ATTRIBUTE_INITIALIZATION)
                            .with("AttributeName", parameter.name())
                            .with("ParameterName", parameter.name())
                            .render()
                    })
                    .collect();
                self.fill(CONSTRUCTOR_METHOD)
                    .with("MethodName", constructor.name())
                    .with("Parameters", &format_parameters(constructor.parameters()))
                    .with("ResultType", &constructor.abstraction().to_string())
                    .with("ParameterChecks", &checks)
                    .with("AttributeInitializations", &initializations)
                    .render()
            })
            .collect()
    }

    fn function_methods(&self) -> String {
        self.class
            .class_methods()
            .function_methods()
            .iter()
            .map(|function| {
                self.fill(FUNCTION_METHOD)
                    .with("MethodName", function.name())
                    .with("Parameters", &format_parameters(function.parameters()))
                    .with("ResultType", &format_result(Some(function.result())))
                    .with("Body", &method_body(Some(function.result())))
                    .render()
            })
            .collect()
    }

    // Instance methods

    fn instance_structure(&self) -> String {
        let fields: String = self
            .attributes
            .iter()
            .map(|(name, kind)| {
                Template::new(ATTRIBUTE_FIELD)
                    .with("AttributeName", name)
                    .with("AttributeType", kind)
                    .render()
            })
            .collect();
        self.fill(INSTANCE_STRUCTURE)
            .with("AttributeFields", &fields)
            .render()
    }

    fn attribute_methods(&self) -> Result<String, GeneratorError> {
        let mut methods = String::new();
        for method in self.instance.instance_methods().attribute_methods() {
            let rendered = match method {
                AttributeMethod::Getter(getter) if getter.name() == "GetClass" => self
                    .fill(GET_CLASS_METHOD)
                    .with("ResultType", &getter.abstraction().to_string())
                    .render(),
                AttributeMethod::Getter(getter) => self
                    .fill(GETTER_METHOD)
                    .with("MethodName", getter.name())
                    .with("AttributeName", &attribute_name(getter.name())?)
                    .with("AttributeType", &getter.abstraction().to_string())
                    .render(),
                AttributeMethod::Setter(setter) => {
                    let parameter = setter.parameter();
                    self.fill(SETTER_METHOD)
                        .with("MethodName", setter.name())
                        .with("ParameterChecks", &parameter_check(parameter.name()))
                        .with("AttributeName", &attribute_name(setter.name())?)
                        .with("ParameterName", parameter.name())
                        .with("AttributeType", &parameter.abstraction().to_string())
                        .render()
                }
            };
            methods.push_str(&rendered);
        }
        Ok(methods)
    }

    fn aspect_interfaces(&self) -> Result<String, GeneratorError> {
        let mut interfaces = String::new();
        for interface in self.instance.instance_methods().aspect_interfaces() {
            let abstraction = interface.abstraction();
            let aspect = self
                .model
                .aspect_definitions()
                .iter()
                .find(|aspect| abstraction.suffix().is_none() && aspect.name() == abstraction.name());
            let Some(aspect) = aspect else {
                warn!(
                    "The {} aspect is not defined in this model, its methods are not generated",
                    abstraction
                );
                continue;
            };
            let bindings = bind_arguments(aspect, abstraction)?;
            let methods = aspect
                .aspect_methods()
                .iter()
                .map(|method| {
                    bind_method(method.method(), &bindings, aspect.name())
                        .map(|method| self.instance_method(&method))
                })
                .collect::<Result<String, _>>()?;
            interfaces.push_str(
                &Template::new(ASPECT_INTERFACE)
                    .with("AspectType", aspect.name())
                    .with("Methods", &methods)
                    .render(),
            );
        }
        Ok(interfaces)
    }

    fn public_methods(&self) -> String {
        self.instance
            .instance_methods()
            .public_methods()
            .iter()
            .map(|method| {
                let method = method.method();
                match method.result() {
                    Some(MethodResult::Abstraction(result))
                        if method.name() == "GetClass" && method.parameters().is_empty() =>
                    {
                        self.fill(GET_CLASS_METHOD)
                            .with("ResultType", &result.to_string())
                            .render()
                    }
                    _ => self.instance_method(method),
                }
            })
            .collect()
    }

    fn instance_method(&self, method: &Method) -> String {
        self.fill(INSTANCE_METHOD)
            .with("MethodName", method.name())
            .with("Parameters", &format_parameters(method.parameters()))
            .with("ResultType", &format_result(method.result()))
            .with("Body", &method_body(method.result()))
            .render()
    }

    /// Builds the import block for every module alias referenced by `body`.
    /// Aliases imported by the model take precedence over the standard ones.
    fn imports(&self, body: &str) -> String {
        let mut known: BTreeMap<&str, &str> = STANDARD_MODULES.iter().copied().collect();
        for module in self.model.modules() {
            known.insert(module.name(), module.path());
        }
        let used: BTreeSet<&str> = MODULE_REFERENCE
            .captures_iter(body)
            .filter_map(|captures| captures.get(1))
            .map(|alias| alias.as_str())
            .filter(|alias| known.contains_key(alias))
            .collect();
        debug!("The {} class references the modules {:?}", self.key, used);
        if used.is_empty() {
            return String::new();
        }
        let mut imports = String::from("\nimport (");
        for alias in used {
            imports.push_str(&format!("\n\t{alias} {}", known[alias]));
        }
        imports.push_str("\n)\n");
        imports
    }
}

/// The attributes of a class, in order of first appearance: those named by its
/// attribute methods followed by the parameters of its `MakeWith` constructors.
fn collect_attributes(
    class: &ClassDefinition,
    instance: &InstanceDefinition,
) -> Result<Vec<(String, String)>, GeneratorError> {
    let mut attributes = Vec::new();
    for method in instance.instance_methods().attribute_methods() {
        match method {
            AttributeMethod::Getter(getter) if getter.name() == "GetClass" => {}
            AttributeMethod::Getter(getter) => add_attribute(
                &mut attributes,
                attribute_name(getter.name())?,
                getter.abstraction().to_string(),
            ),
            AttributeMethod::Setter(setter) => add_attribute(
                &mut attributes,
                attribute_name(setter.name())?,
                setter.parameter().abstraction().to_string(),
            ),
        }
    }
    for constructor in class.class_methods().constructor_methods() {
        if !constructor.name().starts_with("MakeWith") {
            continue;
        }
        for parameter in constructor.parameters() {
            add_attribute(
                &mut attributes,
                parameter.name().to_string(),
                parameter.abstraction().to_string(),
            );
        }
    }
    Ok(attributes)
}

fn add_attribute(attributes: &mut Vec<(String, String)>, name: String, kind: String) {
    if !attributes.iter().any(|(existing, _)| *existing == name) {
        attributes.push((name, kind));
    }
}

/// `GetFirstName` and `SetFirstName` both name the `firstName` attribute.
fn attribute_name(method_name: &str) -> Result<String, GeneratorError> {
    let prefix = accessor_prefix(method_name).ok_or_else(|| GeneratorError::UnknownAccessor {
        name: method_name.to_string(),
    })?;
    Ok(make_lower_case(&method_name[prefix.len()..]))
}

fn parameter_check(parameter_name: &str) -> String {
    Template::new(PARAMETER_CHECK)
        .with("ParameterName", parameter_name)
        .render()
}

fn format_parameters(parameters: &[Parameter]) -> String {
    Formatter::new().format_parameters(parameters, 0)
}

fn format_result(result: Option<&MethodResult>) -> String {
    result
        .map(|result| Formatter::new().format_result(result, 0))
        .unwrap_or_default()
}

fn method_body(result: Option<&MethodResult>) -> String {
    match result {
        Some(MethodResult::Abstraction(abstraction)) => Template::new(RESULT_BODY)
            .with("ResultType", &abstraction.to_string())
            .render(),
        Some(MethodResult::Parameterized(_)) => RETURN_BODY.to_string(),
        Some(MethodResult::None(_)) | None => METHOD_BODY.to_string(),
    }
}

fn mismatch(aspect: &str, reason: String) -> GeneratorError {
    GeneratorError::GenericMismatch {
        aspect: aspect.to_string(),
        reason,
    }
}

/// Pairs the type parameters of an aspect with the arguments it is composed with.
fn bind_arguments<'m>(
    aspect: &'m AspectDefinition,
    abstraction: &'m Abstraction,
) -> Result<BTreeMap<&'m str, &'m Abstraction>, GeneratorError> {
    let names = aspect
        .declaration()
        .constraints()
        .map(Constraints::names)
        .unwrap_or_default();
    let arguments: Vec<&Abstraction> = abstraction
        .arguments()
        .map(|arguments| arguments.iter().collect())
        .unwrap_or_default();
    if names.len() != arguments.len() {
        return Err(mismatch(
            aspect.name(),
            format!(
                "{} type arguments were supplied but {} are declared",
                arguments.len(),
                names.len()
            ),
        ));
    }
    Ok(names.into_iter().zip(arguments).collect())
}

fn bind_method(
    method: &Method,
    bindings: &BTreeMap<&str, &Abstraction>,
    aspect: &str,
) -> Result<Method, GeneratorError> {
    let parameters = bind_parameters(method.parameters(), bindings, aspect)?;
    let result = match method.result() {
        Some(MethodResult::Abstraction(abstraction)) => Some(MethodResult::Abstraction(
            bind_abstraction(abstraction, bindings, aspect)?,
        )),
        Some(MethodResult::Parameterized(parameterized)) => {
            Some(MethodResult::Parameterized(Parameterized::new(bind_parameters(
                parameterized.parameters(),
                bindings,
                aspect,
            )?)))
        }
        other => other.cloned(),
    };
    Ok(Method::new(method.name(), parameters, result))
}

fn bind_parameters(
    parameters: &[Parameter],
    bindings: &BTreeMap<&str, &Abstraction>,
    aspect: &str,
) -> Result<Vec<Parameter>, GeneratorError> {
    parameters
        .iter()
        .map(|parameter| {
            Ok(Parameter::new(
                parameter.name(),
                bind_abstraction(parameter.abstraction(), bindings, aspect)?,
            ))
        })
        .collect()
}

/// Replaces the type parameters of an aspect with their bound arguments,
/// recursing into map keys and type arguments.
fn bind_abstraction(
    abstraction: &Abstraction,
    bindings: &BTreeMap<&str, &Abstraction>,
    aspect: &str,
) -> Result<Abstraction, GeneratorError> {
    let prefix = match abstraction.prefix() {
        Some(Prefix::Map(map)) => match bindings.get(map.name()) {
            Some(bound) if bound.is_plain(bound.name()) => Some(Prefix::Map(Map::new(bound.name()))),
            Some(bound) => {
                return Err(mismatch(
                    aspect,
                    format!("the map key {} cannot be bound to {bound}", map.name()),
                ))
            }
            None => Some(Prefix::Map(map.clone())),
        },
        prefix => prefix.cloned(),
    };
    let arguments = match abstraction.arguments() {
        Some(arguments) => Arguments::from_abstractions(
            arguments
                .iter()
                .map(|argument| bind_abstraction(argument, bindings, aspect))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        None => None,
    };
    let bound = match abstraction.suffix() {
        Some(_) => None,
        None => bindings.get(abstraction.name()),
    };
    let Some(bound) = bound else {
        return Ok(Abstraction::new(
            prefix,
            abstraction.name(),
            abstraction.suffix().cloned(),
            arguments,
        ));
    };
    if prefix.is_some() && bound.prefix().is_some() {
        return Err(mismatch(
            aspect,
            format!("{bound} cannot take the prefix of {abstraction}"),
        ));
    }
    if arguments.is_some() {
        return Err(mismatch(
            aspect,
            format!("the type parameter {} cannot take arguments", abstraction.name()),
        ));
    }
    Ok(Abstraction::new(
        prefix.or_else(|| bound.prefix().cloned()),
        bound.name(),
        bound.suffix().cloned(),
        bound.arguments().cloned(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    const HEADER: &str = "/*\nNotice\n*/\n\n/*\nPackage foo.\n*/\npackage foo\n";

    fn model(definitions: &str) -> Model {
        let source = format!("{HEADER}{definitions}");
        Parser::new(&source).parse_model().unwrap()
    }

    const FOO: &str = r#"
// Class Definitions

/*
FooClassLike is a class interface.
*/
type FooClassLike interface {
	// Constructor Methods
	Make() FooLike
}

// Instance Definitions

/*
FooLike is an instance interface.
*/
type FooLike interface {
	// Public Methods
	GetClass() FooClassLike
}
"#;

    const FOO_CLASS: &str = r#"/*
Notice
*/

package foo

// CLASS ACCESS

// Reference

var fooClass = &fooClass_{
	// Initialize the class constants.
}

// Function

func Foo() FooClassLike {
	return fooClass
}

// CLASS METHODS

// Target

type fooClass_ struct {
	// Define the class constants.
}

// Constants

// Constructors

func (c *fooClass_) Make() FooLike {
	return &foo_{
		// Initialize the instance attributes.
		class_: c,
	}
}

// Functions

// INSTANCE METHODS

// Target

type foo_ struct {
	// Define the instance attributes.
	class_ *fooClass_
}

// Attributes

// Public

func (v *foo_) GetClass() FooClassLike {
	return v.class_
}

// Private
"#;

    const SET: &str = r#"
// Class Definitions

/*
SetClassLike is a class interface.
*/
type SetClassLike[V any] interface {
	// Constructor Methods
	Make() SetLike[V]
}

// Instance Definitions

/*
SetLike is an instance interface.
*/
type SetLike[V any] interface {
	// Public Methods
	GetClass() SetClassLike[V]

	// Aspect Methods
	Sequential[V]
}

// Aspect Definitions

/*
Sequential is an aspect interface.
*/
type Sequential[V any] interface {
	AsArray() []V
}
"#;

    const POINT: &str = r#"
// Class Definitions

/*
PointClassLike is a class interface.
*/
type PointClassLike interface {
	// Constructor Methods
	MakeWithCoordinates(
		x float64,
		y float64,
	) PointLike

	// Constant Methods
	Origin() PointLike

	// Function Methods
	Distance(
		first PointLike,
		second PointLike,
	) float64
}

// Instance Definitions

/*
PointLike is an instance interface.
*/
type PointLike interface {
	// Public Methods
	GetClass() PointClassLike
	Scale(factor float64)

	// Attribute Methods
	GetX() float64
	GetY() float64
	SetLabel(label string)
	IsVisible() bool
}
"#;

    #[test]
    fn test_simple_class() {
        let generator = Generator::new();
        let model = model(FOO);
        assert_eq!(generator.generate_class(&model, "foo").unwrap(), FOO_CLASS);
        assert_eq!(generator.generate_class(&model, "Foo").unwrap(), FOO_CLASS);
    }

    #[test]
    fn test_generic_class() {
        let class = Generator::new().generate_class(&model(SET), "set").unwrap();
        assert!(class.contains("\nimport (\n\tfmt \"fmt\"\n\tsyn \"sync\"\n)\n"));
        assert!(class.contains("var setClass = map[string]any{}\nvar setMutex syn.Mutex\n"));
        assert!(class.contains("func Set[V any]() SetClassLike[V] {\n"));
        assert!(class.contains("\tvar name = fmt.Sprintf(\"%T\", class)\n"));
        assert!(class.contains("type setClass_[V any] struct {\n"));
        assert!(class.contains("func (c *setClass_[V]) Make() SetLike[V] {\n\treturn &set_[V]{\n"));
        assert!(class.contains("type set_[V any] struct {\n\t// Define the instance attributes.\n\tclass_ *setClass_[V]\n}\n"));
        assert!(class.contains("func (v *set_[V]) GetClass() SetClassLike[V] {\n\treturn v.class_\n}\n"));
    }

    #[test]
    fn test_aspect_methods_are_bound() {
        let source = SET.replace("\tSequential[V]\n}", "\tSequential[string]\n}");
        let class = Generator::new().generate_class(&model(&source), "set").unwrap();
        assert!(class.contains(
            "// Sequential Methods\n\nfunc (v *set_[V]) AsArray() []string {\n\tvar result_ []string\n\t// TBD - Add the method implementation.\n\treturn result_\n}\n\n// Public\n"
        ));

        let class = Generator::new().generate_class(&model(SET), "set").unwrap();
        assert!(class.contains("func (v *set_[V]) AsArray() []V {\n"));
    }

    #[test]
    fn test_generic_mismatch() {
        let generator = Generator::new();
        let missing = SET.replace("\tSequential[V]\n}", "\tSequential\n}");
        let err = generator.generate_class(&model(&missing), "set").unwrap_err();
        assert!(matches!(err, GeneratorError::GenericMismatch { ref aspect, .. } if aspect == "Sequential"));

        let prefixed = SET.replace("\tSequential[V]\n}", "\tSequential[[]V]\n}");
        let err = generator.generate_class(&model(&prefixed), "set").unwrap_err();
        assert!(matches!(err, GeneratorError::GenericMismatch { .. }));
    }

    #[test]
    fn test_attributes_constants_and_functions() {
        let class = Generator::new().generate_class(&model(POINT), "point").unwrap();
        assert!(class.contains("\nimport (\n\tuti \"github.com/craterdog/go-missing-utilities/v2\"\n)\n"));
        assert!(class.contains("\t// Initialize the class constants.\n\t// origin_: constantValue,\n}\n"));
        assert!(class.contains("type pointClass_ struct {\n\t// Define the class constants.\n\torigin_ PointLike\n}\n"));
        assert!(class.contains("func (c *pointClass_) Origin() PointLike {\n\treturn c.origin_\n}\n"));
        assert!(class.contains(
            "func (c *pointClass_) MakeWithCoordinates(\n\tx float64,\n\ty float64,\n) PointLike {\n\tif uti.IsUndefined(x) {\n"
        ));
        assert!(class.contains("\t\tclass_: c,\n\t\tx_: x,\n\t\ty_: y,\n\t}\n"));
        assert!(class.contains(
            "func (c *pointClass_) Distance(\n\tfirst PointLike,\n\tsecond PointLike,\n) float64 {\n\tvar result_ float64\n"
        ));
        assert!(class.contains(
            "\tclass_ *pointClass_\n\tx_ float64\n\ty_ float64\n\tlabel_ string\n\tvisible_ bool\n}\n"
        ));
        assert!(class.contains("func (v *point_) GetX() float64 {\n\treturn v.x_\n}\n"));
        assert!(class.contains("func (v *point_) IsVisible() bool {\n\treturn v.visible_\n}\n"));
        assert!(class.contains(
            "func (v *point_) SetLabel(label string) {\n\tif uti.IsUndefined(label) {\n\t\tpanic(\"The \\\"label\\\" attribute is required by this class.\")\n\t}\n\tv.label_ = label\n}\n"
        ));
        assert!(class.contains(
            "func (v *point_) Scale(factor float64) {\n\t// TBD - Add the method implementation.\n}\n"
        ));
    }

    #[test]
    fn test_model_imports_take_precedence() {
        let source = format!(
            "\nimport (\n\tcol \"example.com/collections\"\n)\n{}",
            FOO.replace(
                "\tGetClass() FooClassLike\n",
                "\tGetClass() FooClassLike\n\tGetItems() col.ListLike[string]\n"
            )
        );
        let class = Generator::new().generate_class(&model(&source), "foo").unwrap();
        assert!(class.contains("\nimport (\n\tcol \"example.com/collections\"\n)\n"));
        assert!(class.contains("func (v *foo_) GetItems() col.ListLike[string] {\n"));
    }

    #[test]
    fn test_unknown_class_and_missing_instance() {
        let generator = Generator::new();
        let err = generator.generate_class(&model(FOO), "bar").unwrap_err();
        assert_eq!(err, GeneratorError::UnknownClass { name: "bar".into() });

        let unpaired = FOO.replace("FooLike is", "BarLike is").replace("type FooLike", "type BarLike");
        let err = generator.generate_class(&model(&unpaired), "foo").unwrap_err();
        assert_eq!(err, GeneratorError::MissingInstance { name: "FooClassLike".into() });
    }

    #[test]
    fn test_notice_is_copied_literally() {
        let notice = "/*\nSee <Body> in <~packageName> with <Imports>.\n*/\n";
        let source = format!("{}{FOO}", HEADER.replacen("/*\nNotice\n*/\n", notice, 1));
        let model = Parser::new(&source).parse_model().unwrap();
        let class = Generator::new().generate_class(&model, "foo").unwrap();
        assert!(class.starts_with(&format!("{notice}\npackage foo\n")));
        assert_eq!(class.matches("func Foo() FooClassLike").count(), 1);
    }

    #[test]
    fn test_template_renders_in_one_pass() {
        let rendered = Template::new("<A> <~b> <C>")
            .with("A", "<B>")
            .with("B", "Value")
            .render();
        assert_eq!(rendered, "<B> value <C>");
    }

    #[test]
    fn test_generate_model_classes() {
        let source = POINT
            .replace(
                "// Class Definitions\n",
                "// Class Definitions\n\n/*\nFooClassLike.\n*/\ntype FooClassLike interface {\n\t// Constructor Methods\n\tMake() FooLike\n}\n",
            )
            .replace(
                "// Instance Definitions\n",
                "// Instance Definitions\n\n/*\nFooLike.\n*/\ntype FooLike interface {\n\t// Public Methods\n\tGetClass() FooClassLike\n}\n",
            );
        let classes = Generator::new().generate_model_classes(&model(&source)).unwrap();
        assert_eq!(classes.keys().map(String::as_str).collect::<Vec<_>>(), ["foo", "point"]);
        assert!(classes["foo"].contains("func Foo() FooClassLike {"));
        assert!(classes["point"].contains("func Point() PointClassLike {"));
    }
}
