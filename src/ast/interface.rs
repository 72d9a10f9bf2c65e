use super::{
    Abstraction, AspectMethod, AttributeMethod, ConstantMethod, ConstructorMethod, Declaration,
    FunctionMethod, PublicMethod,
};
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ClassSection {
    class_definitions: Vec<ClassDefinition>,
}

impl ClassSection {
    pub fn new(class_definitions: Vec<ClassDefinition>) -> Self {
        Self { class_definitions }
    }

    pub fn class_definitions(&self) -> &[ClassDefinition] {
        &self.class_definitions
    }
}

/// `type FooClassLike interface { ... }`
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ClassDefinition {
    declaration: Declaration,
    class_methods: ClassMethods,
}

impl ClassDefinition {
    pub fn new(declaration: Declaration, class_methods: ClassMethods) -> Self {
        Self {
            declaration,
            class_methods,
        }
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn class_methods(&self) -> &ClassMethods {
        &self.class_methods
    }

    pub fn name(&self) -> &str {
        self.declaration.name()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ClassMethods {
    constructor_subsection: ConstructorSubsection,
    constant_subsection: Option<ConstantSubsection>,
    function_subsection: Option<FunctionSubsection>,
}

impl ClassMethods {
    pub fn new(
        constructor_subsection: ConstructorSubsection,
        constant_subsection: Option<ConstantSubsection>,
        function_subsection: Option<FunctionSubsection>,
    ) -> Self {
        Self {
            constructor_subsection,
            constant_subsection,
            function_subsection,
        }
    }

    pub fn constructor_subsection(&self) -> &ConstructorSubsection {
        &self.constructor_subsection
    }

    pub fn constant_subsection(&self) -> Option<&ConstantSubsection> {
        self.constant_subsection.as_ref()
    }

    pub fn function_subsection(&self) -> Option<&FunctionSubsection> {
        self.function_subsection.as_ref()
    }

    pub fn constructor_methods(&self) -> &[ConstructorMethod] {
        self.constructor_subsection.constructor_methods()
    }

    pub fn constant_methods(&self) -> &[ConstantMethod] {
        self.constant_subsection
            .as_ref()
            .map(ConstantSubsection::constant_methods)
            .unwrap_or_default()
    }

    pub fn function_methods(&self) -> &[FunctionMethod] {
        self.function_subsection
            .as_ref()
            .map(FunctionSubsection::function_methods)
            .unwrap_or_default()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ConstructorSubsection {
    constructor_methods: Vec<ConstructorMethod>,
}

impl ConstructorSubsection {
    pub fn new(constructor_methods: Vec<ConstructorMethod>) -> Self {
        Self {
            constructor_methods,
        }
    }

    pub fn constructor_methods(&self) -> &[ConstructorMethod] {
        &self.constructor_methods
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ConstantSubsection {
    constant_methods: Vec<ConstantMethod>,
}

impl ConstantSubsection {
    pub fn new(constant_methods: Vec<ConstantMethod>) -> Self {
        Self { constant_methods }
    }

    pub fn constant_methods(&self) -> &[ConstantMethod] {
        &self.constant_methods
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct FunctionSubsection {
    function_methods: Vec<FunctionMethod>,
}

impl FunctionSubsection {
    pub fn new(function_methods: Vec<FunctionMethod>) -> Self {
        Self { function_methods }
    }

    pub fn function_methods(&self) -> &[FunctionMethod] {
        &self.function_methods
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct InstanceSection {
    instance_definitions: Vec<InstanceDefinition>,
}

impl InstanceSection {
    pub fn new(instance_definitions: Vec<InstanceDefinition>) -> Self {
        Self {
            instance_definitions,
        }
    }

    pub fn instance_definitions(&self) -> &[InstanceDefinition] {
        &self.instance_definitions
    }
}

/// `type FooLike interface { ... }`
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct InstanceDefinition {
    declaration: Declaration,
    instance_methods: InstanceMethods,
}

impl InstanceDefinition {
    pub fn new(declaration: Declaration, instance_methods: InstanceMethods) -> Self {
        Self {
            declaration,
            instance_methods,
        }
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn instance_methods(&self) -> &InstanceMethods {
        &self.instance_methods
    }

    pub fn name(&self) -> &str {
        self.declaration.name()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct InstanceMethods {
    public_subsection: PublicSubsection,
    attribute_subsection: Option<AttributeSubsection>,
    aspect_subsection: Option<AspectSubsection>,
}

impl InstanceMethods {
    pub fn new(
        public_subsection: PublicSubsection,
        attribute_subsection: Option<AttributeSubsection>,
        aspect_subsection: Option<AspectSubsection>,
    ) -> Self {
        Self {
            public_subsection,
            attribute_subsection,
            aspect_subsection,
        }
    }

    pub fn public_subsection(&self) -> &PublicSubsection {
        &self.public_subsection
    }

    pub fn attribute_subsection(&self) -> Option<&AttributeSubsection> {
        self.attribute_subsection.as_ref()
    }

    pub fn aspect_subsection(&self) -> Option<&AspectSubsection> {
        self.aspect_subsection.as_ref()
    }

    pub fn public_methods(&self) -> &[PublicMethod] {
        self.public_subsection.public_methods()
    }

    pub fn attribute_methods(&self) -> &[AttributeMethod] {
        self.attribute_subsection
            .as_ref()
            .map(AttributeSubsection::attribute_methods)
            .unwrap_or_default()
    }

    pub fn aspect_interfaces(&self) -> &[AspectInterface] {
        self.aspect_subsection
            .as_ref()
            .map(AspectSubsection::aspect_interfaces)
            .unwrap_or_default()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct PublicSubsection {
    public_methods: Vec<PublicMethod>,
}

impl PublicSubsection {
    pub fn new(public_methods: Vec<PublicMethod>) -> Self {
        Self { public_methods }
    }

    pub fn public_methods(&self) -> &[PublicMethod] {
        &self.public_methods
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct AttributeSubsection {
    attribute_methods: Vec<AttributeMethod>,
}

impl AttributeSubsection {
    pub fn new(attribute_methods: Vec<AttributeMethod>) -> Self {
        Self { attribute_methods }
    }

    pub fn attribute_methods(&self) -> &[AttributeMethod] {
        &self.attribute_methods
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct AspectSubsection {
    aspect_interfaces: Vec<AspectInterface>,
}

impl AspectSubsection {
    pub fn new(aspect_interfaces: Vec<AspectInterface>) -> Self {
        Self { aspect_interfaces }
    }

    pub fn aspect_interfaces(&self) -> &[AspectInterface] {
        &self.aspect_interfaces
    }
}

/// An aspect composed into an instance interface, e.g. `Sequential[V]`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct AspectInterface {
    abstraction: Abstraction,
}

impl AspectInterface {
    pub fn new(abstraction: Abstraction) -> Self {
        Self { abstraction }
    }

    pub fn abstraction(&self) -> &Abstraction {
        &self.abstraction
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct AspectSection {
    aspect_definitions: Vec<AspectDefinition>,
}

impl AspectSection {
    pub fn new(aspect_definitions: Vec<AspectDefinition>) -> Self {
        Self { aspect_definitions }
    }

    pub fn aspect_definitions(&self) -> &[AspectDefinition] {
        &self.aspect_definitions
    }
}

/// `type Sequential[V any] interface { ... }`
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct AspectDefinition {
    declaration: Declaration,
    aspect_methods: Vec<AspectMethod>,
}

impl AspectDefinition {
    pub fn new(declaration: Declaration, aspect_methods: Vec<AspectMethod>) -> Self {
        Self {
            declaration,
            aspect_methods,
        }
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn aspect_methods(&self) -> &[AspectMethod] {
        &self.aspect_methods
    }

    pub fn name(&self) -> &str {
        self.declaration.name()
    }
}
