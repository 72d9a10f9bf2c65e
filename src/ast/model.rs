use super::{
    AspectDefinition, AspectSection, ClassDefinition, ClassSection, FunctionalDefinition,
    FunctionalSection, InstanceDefinition, InstanceSection, TypeDefinition, TypeSection,
};
use serde::Serialize;

/// The root of the syntax tree for one model source file.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Model {
    module_definition: ModuleDefinition,
    primitive_definitions: PrimitiveDefinitions,
    interface_definitions: InterfaceDefinitions,
}

impl Model {
    pub fn new(
        module_definition: ModuleDefinition,
        primitive_definitions: PrimitiveDefinitions,
        interface_definitions: InterfaceDefinitions,
    ) -> Self {
        Self {
            module_definition,
            primitive_definitions,
            interface_definitions,
        }
    }

    pub fn module_definition(&self) -> &ModuleDefinition {
        &self.module_definition
    }

    pub fn primitive_definitions(&self) -> &PrimitiveDefinitions {
        &self.primitive_definitions
    }

    pub fn interface_definitions(&self) -> &InterfaceDefinitions {
        &self.interface_definitions
    }

    pub fn package_name(&self) -> &str {
        self.module_definition.header().name()
    }

    pub fn modules(&self) -> &[Module] {
        self.module_definition
            .imports()
            .map(Imports::modules)
            .unwrap_or_default()
    }

    pub fn type_definitions(&self) -> &[TypeDefinition] {
        self.primitive_definitions
            .type_section()
            .map(TypeSection::type_definitions)
            .unwrap_or_default()
    }

    pub fn functional_definitions(&self) -> &[FunctionalDefinition] {
        self.primitive_definitions
            .functional_section()
            .map(FunctionalSection::functional_definitions)
            .unwrap_or_default()
    }

    pub fn class_definitions(&self) -> &[ClassDefinition] {
        self.interface_definitions.class_section().class_definitions()
    }

    pub fn instance_definitions(&self) -> &[InstanceDefinition] {
        self.interface_definitions
            .instance_section()
            .instance_definitions()
    }

    pub fn aspect_definitions(&self) -> &[AspectDefinition] {
        self.interface_definitions
            .aspect_section()
            .map(AspectSection::aspect_definitions)
            .unwrap_or_default()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ModuleDefinition {
    notice: Notice,
    header: Header,
    imports: Option<Imports>,
}

impl ModuleDefinition {
    pub fn new(notice: Notice, header: Header, imports: Option<Imports>) -> Self {
        Self {
            notice,
            header,
            imports,
        }
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn imports(&self) -> Option<&Imports> {
        self.imports.as_ref()
    }
}

/// The copyright notice comment at the top of a model.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Notice {
    comment: String,
}

impl Notice {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// The package documentation comment and the `package` clause.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Header {
    comment: String,
    name: String,
}

impl Header {
    pub fn new(comment: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            name: name.into(),
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Imports {
    modules: Vec<Module>,
}

impl Imports {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }
}

/// An imported module: its three letter alias and its quoted path.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Module {
    name: String,
    path: String,
}

impl Module {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The path including its surrounding double quotes.
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct PrimitiveDefinitions {
    type_section: Option<TypeSection>,
    functional_section: Option<FunctionalSection>,
}

impl PrimitiveDefinitions {
    pub fn new(
        type_section: Option<TypeSection>,
        functional_section: Option<FunctionalSection>,
    ) -> Self {
        Self {
            type_section,
            functional_section,
        }
    }

    pub fn type_section(&self) -> Option<&TypeSection> {
        self.type_section.as_ref()
    }

    pub fn functional_section(&self) -> Option<&FunctionalSection> {
        self.functional_section.as_ref()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct InterfaceDefinitions {
    class_section: ClassSection,
    instance_section: InstanceSection,
    aspect_section: Option<AspectSection>,
}

impl InterfaceDefinitions {
    pub fn new(
        class_section: ClassSection,
        instance_section: InstanceSection,
        aspect_section: Option<AspectSection>,
    ) -> Self {
        Self {
            class_section,
            instance_section,
            aspect_section,
        }
    }

    pub fn class_section(&self) -> &ClassSection {
        &self.class_section
    }

    pub fn instance_section(&self) -> &InstanceSection {
        &self.instance_section
    }

    pub fn aspect_section(&self) -> Option<&AspectSection> {
        self.aspect_section.as_ref()
    }
}
