//! Source templates for generated classes. Placeholders are written `<Name>`
//! and are replaced verbatim; `<~name>` receives the same value with its first
//! character in lower case.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::utils::make_lower_case;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(~?)([A-Za-z]+)>").expect("the placeholder pattern is a valid regular expression")
});

/// A template together with the values of its placeholders. Every placeholder
/// is replaced in a single pass when the template is rendered, so text that was
/// substituted in is never scanned for placeholders again.
pub(crate) struct Template {
    text: String,
    values: Vec<(String, String)>,
}

impl Template {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            values: Vec::new(),
        }
    }

    pub(crate) fn with(mut self, name: &str, value: &str) -> Self {
        self.values.push((name.to_string(), value.to_string()));
        self
    }

    /// Placeholders without a value are left as they are.
    pub(crate) fn render(self) -> String {
        PLACEHOLDER
            .replace_all(&self.text, |captures: &Captures| {
                let lowered = !captures[1].is_empty();
                let placeholder = &captures[2];
                let value = self.values.iter().find(|(name, _)| {
                    if lowered {
                        make_lower_case(name) == placeholder
                    } else {
                        name == placeholder
                    }
                });
                match value {
                    Some((_, value)) if lowered => make_lower_case(value),
                    Some((_, value)) => value.clone(),
                    None => captures[0].to_string(),
                }
            })
            .into_owned()
    }
}

/// Module aliases that generated code may use without the model importing them.
pub const STANDARD_MODULES: [(&str, &str); 5] = [
    ("abs", "\"github.com/craterdog/go-collection-framework/v4\""),
    ("col", "\"github.com/craterdog/go-collection-framework/v4/collection\""),
    ("fmt", "\"fmt\""),
    ("syn", "\"sync\""),
    ("uti", "\"github.com/craterdog/go-missing-utilities/v2\""),
];

pub const CLASS_TEMPLATE: &str = "<Notice>
package <~packageName>
<Imports><Body>";

pub const CLASS_BODY: &str = "
// CLASS ACCESS

// Reference
<Reference>
// Function
<AccessFunction>
// CLASS METHODS

// Target
<ClassStructure>
// Constants
<ConstantMethods>
// Constructors
<ConstructorMethods>
// Functions
<FunctionMethods>
// INSTANCE METHODS

// Target
<InstanceStructure>
// Attributes
<AttributeMethods>
<AspectInterfaces>// Public
<PublicMethods>
// Private
";

pub const SIMPLE_REFERENCE: &str = "
var <~className>Class = &<~className>Class_{
	// Initialize the class constants.<ConstantInitializations>
}
";

pub const GENERIC_REFERENCE: &str = "
var <~className>Class = map[string]any{}
var <~className>Mutex syn.Mutex
";

pub const SIMPLE_ACCESS_FUNCTION: &str = "
func <ClassName>() <ClassName>ClassLike {
	return <~className>Class
}
";

pub const GENERIC_ACCESS_FUNCTION: &str = "
func <ClassName><Constraints>() <ClassName>ClassLike<Arguments> {
	// Generate the name of the bound class type.
	var class *<~className>Class_<Arguments>
	var name = fmt.Sprintf(\"%T\", class)

	// Check for an existing bound class type.
	<~className>Mutex.Lock()
	var value = <~className>Class[name]
	switch actual := value.(type) {
	case *<~className>Class_<Arguments>:
		// This bound class type already exists.
		class = actual
	default:
		// Add a new bound class type.
		class = &<~className>Class_<Arguments>{
			// Initialize the class constants.<ConstantInitializations>
		}
		<~className>Class[name] = class
	}
	<~className>Mutex.Unlock()

	// Return a reference to the bound class type.
	return class
}
";

pub const CONSTANT_INITIALIZATION: &str = "
<Indentation>// <~constantName>_: constantValue,";

pub const CLASS_STRUCTURE: &str = "
type <~className>Class_<Constraints> struct {
	// Define the class constants.<ConstantFields>
}
";

pub const CONSTANT_FIELD: &str = "
	<~constantName>_ <ConstantType>";

pub const CONSTANT_METHOD: &str = "
func (c *<~className>Class_<Arguments>) <ConstantName>() <ConstantType> {
	return c.<~constantName>_
}
";

pub const CONSTRUCTOR_METHOD: &str = "
func (c *<~className>Class_<Arguments>) <MethodName>(<Parameters>) <ResultType> {<ParameterChecks>
	return &<~className>_<Arguments>{
		// Initialize the instance attributes.
		class_: c,<AttributeInitializations>
	}
}
";

pub const PARAMETER_CHECK: &str = "
	if uti.IsUndefined(<ParameterName>) {
		panic(\"The \\\"<ParameterName>\\\" attribute is required by this class.\")
	}";

pub const ATTRIBUTE_INITIALIZATION: &str = "
		<~attributeName>_: <ParameterName>,";

pub const FUNCTION_METHOD: &str = "
func (c *<~className>Class_<Arguments>) <MethodName>(<Parameters>)<ResultType> {
<Body>}
";

pub const INSTANCE_STRUCTURE: &str = "
type <~className>_<Constraints> struct {
	// Define the instance attributes.
	class_ *<~className>Class_<Arguments><AttributeFields>
}
";

pub const ATTRIBUTE_FIELD: &str = "
	<~attributeName>_ <AttributeType>";

pub const GET_CLASS_METHOD: &str = "
func (v *<~className>_<Arguments>) GetClass() <ResultType> {
	return v.class_
}
";

pub const GETTER_METHOD: &str = "
func (v *<~className>_<Arguments>) <MethodName>() <AttributeType> {
	return v.<~attributeName>_
}
";

pub const SETTER_METHOD: &str = "
func (v *<~className>_<Arguments>) <MethodName>(<ParameterName> <AttributeType>) {<ParameterChecks>
	v.<~attributeName>_ = <ParameterName>
}
";

pub const ASPECT_INTERFACE: &str = "// <AspectType> Methods
<Methods>
";

pub const INSTANCE_METHOD: &str = "
func (v *<~className>_<Arguments>) <MethodName>(<Parameters>)<ResultType> {
<Body>}
";

pub const METHOD_BODY: &str = "	// TBD - Add the method implementation.
";

pub const RESULT_BODY: &str = "	var result_ <ResultType>
	// TBD - Add the method implementation.
	return result_
";

pub const RETURN_BODY: &str = "	// TBD - Add the method implementation.
	return
";
