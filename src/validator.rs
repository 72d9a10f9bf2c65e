use crate::ast::*;
use crate::error::{ModelError, ValidationError};
use crate::processor::Processor;
use crate::utils::{accessor_prefix, class_key, instance_key, is_interrogative, SETTER_PREFIX};
use crate::visitor::Visitor;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Checks the semantic rules of a model that the grammar cannot express and
/// produces a copy of the model with its sections in canonical order.
#[derive(Debug, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Validates `model` and returns a copy whose imports are sorted by path,
    /// type and aspect definitions by name and class and instance definitions
    /// by their shared name. The given model is left untouched.
    ///
    /// # Errors
    /// Returns a `ModelError::Validation` naming the first rule that is violated.
    pub fn validate_model(&self, model: &Model) -> Result<Model, ModelError> {
        let mut extractor = Extractor::default();
        Visitor::new(&mut extractor).visit_model(model);
        debug!(
            "extracted {} imports, {} types, {} classes and {} references",
            extractor.imports.len(),
            extractor.types.len(),
            extractor.classes.len(),
            extractor.references.len()
        );

        extractor.check_duplicates()?;
        extractor.check_imports()?;
        check_pairing(model)?;
        check_instances(model)?;
        extractor.check_usage()?;

        debug!("model {} is valid", model.package_name());
        Ok(normalize(model))
    }
}

/// Gathers the declared names and every referenced name of a model.
#[derive(Debug, Default)]
struct Extractor {
    imports: BTreeMap<String, String>,
    types: BTreeSet<String>,
    functionals: BTreeSet<String>,
    classes: BTreeSet<String>,
    instances: BTreeSet<String>,
    aspects: BTreeSet<String>,
    references: BTreeSet<String>,
    aliases: Vec<String>,
    duplicates: Vec<(&'static str, String)>,
    in_enumeration: bool,
}

impl Extractor {
    fn declare(&mut self, section: &'static str, name: &str) {
        let names = match section {
            "type" => &mut self.types,
            "functional" => &mut self.functionals,
            "class" => &mut self.classes,
            "instance" => &mut self.instances,
            _ => &mut self.aspects,
        };
        if !names.insert(name.to_string()) {
            self.duplicates.push((section, name.to_string()));
        }
    }

    fn check_duplicates(&self) -> Result<(), ValidationError> {
        match self.duplicates.first() {
            Some((section, name)) => Err(ValidationError::DuplicateName {
                section: section.to_string(),
                name: name.clone(),
            }),
            None => Ok(()),
        }
    }

    fn check_imports(&self) -> Result<(), ValidationError> {
        if let Some(alias) = self.imports.keys().find(|alias| alias.chars().count() != 3) {
            return Err(ValidationError::InvalidModuleAlias {
                name: alias.clone(),
            });
        }
        if let Some(alias) = self
            .aliases
            .iter()
            .find(|alias| !self.imports.contains_key(*alias))
        {
            return Err(ValidationError::UnknownModuleAlias {
                name: alias.clone(),
            });
        }
        Ok(())
    }

    fn check_usage(&self) -> Result<(), ValidationError> {
        if let Some(name) = self.unreferenced(&self.types) {
            return Err(ValidationError::UnusedType { name });
        }
        if let Some(name) = self.unreferenced(&self.functionals) {
            return Err(ValidationError::UnusedFunctional { name });
        }
        if let Some(name) = self.unreferenced(&self.aspects) {
            return Err(ValidationError::UnusedAspect { name });
        }
        Ok(())
    }

    fn unreferenced(&self, declared: &BTreeSet<String>) -> Option<String> {
        declared
            .iter()
            .find(|name| !self.references.contains(*name))
            .cloned()
    }
}

impl Processor for Extractor {
    fn preprocess_module(&mut self, module: &Module, _: usize, _: usize) {
        if self
            .imports
            .insert(module.name().to_string(), module.path().to_string())
            .is_some()
        {
            self.duplicates.push(("module", module.name().to_string()));
        }
    }

    fn preprocess_type_definition(&mut self, type_definition: &TypeDefinition, _: usize, _: usize) {
        self.declare("type", type_definition.name());
    }

    fn preprocess_enumeration(&mut self, _: &Enumeration) {
        self.in_enumeration = true;
    }

    fn postprocess_enumeration(&mut self, _: &Enumeration) {
        self.in_enumeration = false;
    }

    fn preprocess_functional_definition(
        &mut self,
        functional_definition: &FunctionalDefinition,
        _: usize,
        _: usize,
    ) {
        self.declare("functional", functional_definition.name());
    }

    fn preprocess_class_definition(
        &mut self,
        class_definition: &ClassDefinition,
        _: usize,
        _: usize,
    ) {
        self.declare("class", class_definition.name());
    }

    fn preprocess_instance_definition(
        &mut self,
        instance_definition: &InstanceDefinition,
        _: usize,
        _: usize,
    ) {
        self.declare("instance", instance_definition.name());
    }

    fn preprocess_aspect_definition(
        &mut self,
        aspect_definition: &AspectDefinition,
        _: usize,
        _: usize,
    ) {
        self.declare("aspect", aspect_definition.name());
    }

    fn preprocess_abstraction(&mut self, abstraction: &Abstraction) {
        if let Some(alias) = abstraction.module_alias() {
            // A qualified name refers to a type in another module.
            self.aliases.push(alias.to_string());
            return;
        }
        if !self.in_enumeration {
            self.references.insert(abstraction.name().to_string());
        }
    }

    fn preprocess_map(&mut self, map: &Map) {
        self.references.insert(map.name().to_string());
    }
}

/// Every class interface needs an instance interface with the same shared name
/// and vice versa.
fn check_pairing(model: &Model) -> Result<(), ValidationError> {
    let mut classes = BTreeSet::new();
    for class in model.class_definitions() {
        let key = class_key(class.name()).ok_or_else(|| ValidationError::InvalidClassName {
            name: class.name().to_string(),
        })?;
        classes.insert(key);
    }
    let mut instances = BTreeSet::new();
    for instance in model.instance_definitions() {
        let key = instance_key(instance.name()).ok_or_else(|| {
            ValidationError::InvalidInstanceName {
                name: instance.name().to_string(),
            }
        })?;
        instances.insert(key);
    }
    if let Some(key) = classes.difference(&instances).next() {
        return Err(ValidationError::MissingInstance {
            name: format!("{key}ClassLike"),
        });
    }
    if let Some(key) = instances.difference(&classes).next() {
        return Err(ValidationError::MissingClass {
            name: format!("{key}Like"),
        });
    }
    Ok(())
}

fn check_instances(model: &Model) -> Result<(), ValidationError> {
    for instance in model.instance_definitions() {
        check_get_class(instance)?;
        for attribute in instance.instance_methods().attribute_methods() {
            check_attribute(attribute)?;
        }
    }
    Ok(())
}

/// The instance interface `FooLike` must declare `GetClass() FooClassLike`,
/// either as a public method or as an attribute getter.
fn check_get_class(instance: &InstanceDefinition) -> Result<(), ValidationError> {
    let methods = instance.instance_methods();
    let public = methods
        .public_methods()
        .iter()
        .map(PublicMethod::method)
        .find(|method| method.name() == "GetClass" && method.parameters().is_empty())
        .map(|method| match method.result() {
            Some(MethodResult::Abstraction(abstraction)) => Some(abstraction),
            _ => None,
        });
    let getter = methods
        .attribute_methods()
        .iter()
        .find_map(|attribute| match attribute {
            AttributeMethod::Getter(getter) if getter.name() == "GetClass" => {
                Some(Some(getter.abstraction()))
            }
            _ => None,
        });
    let Some(result) = public.or(getter) else {
        return Err(ValidationError::MissingGetClass {
            name: instance.name().to_string(),
        });
    };
    let key = instance_key(instance.name()).unwrap_or_default();
    let expected = format!("{key}ClassLike");
    let matches = result.is_some_and(|abstraction| {
        abstraction.prefix().is_none()
            && abstraction.suffix().is_none()
            && abstraction.name() == expected
    });
    if !matches {
        return Err(ValidationError::InvalidGetClass {
            name: instance.name().to_string(),
            expected,
        });
    }
    Ok(())
}

fn check_attribute(attribute: &AttributeMethod) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidAttributeName {
        name: attribute.name().to_string(),
    };
    let prefix = accessor_prefix(attribute.name()).ok_or_else(invalid)?;
    match attribute {
        AttributeMethod::Getter(getter) => {
            if prefix == SETTER_PREFIX {
                return Err(invalid());
            }
            if is_interrogative(prefix) && !getter.abstraction().is_plain("bool") {
                return Err(ValidationError::NonBooleanAttribute {
                    name: getter.name().to_string(),
                });
            }
        }
        AttributeMethod::Setter(_) => {
            if prefix != SETTER_PREFIX {
                return Err(invalid());
            }
        }
    }
    Ok(())
}

/// Rebuilds `model` with its sections in canonical order.
fn normalize(model: &Model) -> Model {
    let module_definition = model.module_definition();
    let imports = module_definition.imports().map(|imports| {
        let mut modules = imports.modules().to_vec();
        modules.sort_by(|a, b| a.path().cmp(b.path()));
        Imports::new(modules)
    });

    let primitive_definitions = model.primitive_definitions();
    let type_section = primitive_definitions.type_section().map(|section| {
        let mut type_definitions = section.type_definitions().to_vec();
        type_definitions.sort_by(|a, b| a.name().cmp(b.name()));
        TypeSection::new(type_definitions)
    });

    let mut class_definitions = model.class_definitions().to_vec();
    class_definitions.sort_by(|a, b| shared_name(a.name(), class_key).cmp(shared_name(b.name(), class_key)));
    let mut instance_definitions = model.instance_definitions().to_vec();
    instance_definitions
        .sort_by(|a, b| shared_name(a.name(), instance_key).cmp(shared_name(b.name(), instance_key)));
    let aspect_section = model.interface_definitions().aspect_section().map(|section| {
        let mut aspect_definitions = section.aspect_definitions().to_vec();
        aspect_definitions.sort_by(|a, b| a.name().cmp(b.name()));
        AspectSection::new(aspect_definitions)
    });

    Model::new(
        ModuleDefinition::new(
            module_definition.notice().clone(),
            module_definition.header().clone(),
            imports,
        ),
        PrimitiveDefinitions::new(
            type_section,
            primitive_definitions.functional_section().cloned(),
        ),
        InterfaceDefinitions::new(
            ClassSection::new(class_definitions),
            InstanceSection::new(instance_definitions),
            aspect_section,
        ),
    )
}

fn shared_name<'n>(name: &'n str, key: fn(&str) -> Option<&str>) -> &'n str {
    key(name).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    const MODEL: &str = "/*\nNotice\n*/\n\n/*\nPackage foo.\n*/\npackage foo\n\n// Class Definitions\n\n/*\nClass.\n*/\ntype FooClassLike interface {\n\t// Constructor Methods\n\tMake() FooLike\n}\n\n// Instance Definitions\n\n/*\nInstance.\n*/\ntype FooLike interface {\n\t// Public Methods\n\tGetClass() FooClassLike\n}\n";

    fn validate(source: &str) -> Result<Model, ValidationError> {
        let model = Parser::new(source).parse_model().unwrap();
        match Validator::new().validate_model(&model) {
            Ok(model) => Ok(model),
            Err(ModelError::Validation(err)) => Err(err),
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    fn with_types(types: &str) -> String {
        MODEL.replace(
            "package foo\n",
            &format!("package foo\n\n// Type Definitions\n{types}"),
        )
    }

    #[test]
    fn test_minimal_model_is_valid() {
        let model = Parser::new(MODEL).parse_model().unwrap();
        assert_eq!(validate(MODEL).unwrap(), model);
    }

    #[test]
    fn test_unknown_module_alias() {
        let source = MODEL
            .replace(
                "package foo\n",
                "package foo\n\nimport (\n\tcol \"github.com/craterdog/go-collection-framework/v4/collection\"\n)\n",
            )
            .replace("\tGetClass() FooClassLike\n", "\tGetClass() FooClassLike\n\tGetList() abs.Foo\n");
        let err = validate(&source).unwrap_err();
        assert_eq!(err.to_string(), "Found an unknown module alias name: abs");
    }

    #[test]
    fn test_module_alias_length() {
        let source = MODEL.replace(
            "package foo\n",
            "package foo\n\nimport (\n\tcollection \"github.com/craterdog/go-collection-framework/v4/collection\"\n)\n",
        );
        assert_eq!(
            validate(&source).unwrap_err(),
            ValidationError::InvalidModuleAlias {
                name: "collection".to_string()
            }
        );
    }

    #[test]
    fn test_unused_type() {
        let source = with_types("\n/*\nTokenType.\n*/\ntype TokenType uint8\n");
        let err = validate(&source).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The following type is never used in this model: TokenType"
        );
    }

    #[test]
    fn test_qualified_name_does_not_count_as_use() {
        let source = with_types("\n/*\nItem.\n*/\ntype Item string\n")
            .replace(
                "package foo\n",
                "package foo\n\nimport (\n\tabs \"github.com/craterdog/go-collection-framework/v4\"\n)\n",
            )
            .replace("\tGetClass() FooClassLike\n", "\tGetClass() FooClassLike\n\tGetItem() abs.Item\n");
        assert_eq!(
            validate(&source).unwrap_err(),
            ValidationError::UnusedType {
                name: "Item".to_string()
            }
        );

        let source = source.replace("GetItem() abs.Item", "GetItem() Item");
        assert!(validate(&source).is_ok());
    }

    #[test]
    fn test_enumeration_does_not_count_as_use() {
        let source = with_types(
            "\n/*\nRank.\n*/\ntype Rank uint8\n\nconst (\n\tLesserRank Rank = iota\n\tGreaterRank\n)\n",
        );
        assert_eq!(
            validate(&source).unwrap_err(),
            ValidationError::UnusedType {
                name: "Rank".to_string()
            }
        );

        let used = source.replace("\tMake() FooLike\n", "\tMake() FooLike\n\tMakeWithRank(rank Rank) FooLike\n");
        assert!(validate(&used).is_ok());
    }

    #[test]
    fn test_duplicate_type() {
        let source = with_types("\n/*\nA.\n*/\ntype Name string\n\n/*\nB.\n*/\ntype Name string\n");
        assert_eq!(
            validate(&source).unwrap_err(),
            ValidationError::DuplicateName {
                section: "type".to_string(),
                name: "Name".to_string()
            }
        );
    }

    #[test]
    fn test_missing_instance() {
        let source = MODEL.replace("type FooLike interface", "type BarLike interface");
        assert_eq!(
            validate(&source).unwrap_err(),
            ValidationError::MissingInstance {
                name: "FooClassLike".to_string()
            }
        );
    }

    #[test]
    fn test_missing_get_class() {
        let source = MODEL.replace("\tGetClass() FooClassLike\n", "\tDoIt()\n");
        assert_eq!(
            validate(&source).unwrap_err(),
            ValidationError::MissingGetClass {
                name: "FooLike".to_string()
            }
        );
        let source = MODEL.replace("GetClass() FooClassLike", "GetClass() BarClassLike");
        assert!(matches!(
            validate(&source).unwrap_err(),
            ValidationError::InvalidGetClass { .. }
        ));
    }

    #[test]
    fn test_attribute_rules() {
        let with_attribute = |attribute: &str| {
            MODEL.replace(
                "\tGetClass() FooClassLike\n",
                &format!("\tGetClass() FooClassLike\n\n\t// Attribute Methods\n\t{attribute}\n"),
            )
        };
        assert!(validate(&with_attribute("IsEmpty() bool")).is_ok());
        assert!(validate(&with_attribute("SetName(name string)")).is_ok());
        assert_eq!(
            validate(&with_attribute("IsEmpty() int")).unwrap_err(),
            ValidationError::NonBooleanAttribute {
                name: "IsEmpty".to_string()
            }
        );
        assert_eq!(
            validate(&with_attribute("FetchName() string")).unwrap_err(),
            ValidationError::InvalidAttributeName {
                name: "FetchName".to_string()
            }
        );
        assert_eq!(
            validate(&with_attribute("GetName(name string)")).unwrap_err(),
            ValidationError::InvalidAttributeName {
                name: "GetName".to_string()
            }
        );
    }

    #[test]
    fn test_sections_are_reordered() {
        let source = format!(
            "{}\n// Aspect Definitions\n\n/*\nZ.\n*/\ntype Zed interface {{\n\tZ()\n}}\n\n/*\nA.\n*/\ntype Alpha interface {{\n\tA()\n}}\n",
            MODEL
                .replace(
                    "\tGetClass() FooClassLike\n",
                    "\tGetClass() FooClassLike\n\n\t// Aspect Methods\n\tZed\n\tAlpha\n",
                )
                .replace(
                    "// Class Definitions\n",
                    "// Class Definitions\n\n/*\nB.\n*/\ntype FooBarClassLike interface {\n\t// Constructor Methods\n\tMake() FooBarLike\n}\n",
                )
                .replace(
                    "// Instance Definitions\n",
                    "// Instance Definitions\n\n/*\nB.\n*/\ntype FooBarLike interface {\n\t// Public Methods\n\tGetClass() FooBarClassLike\n}\n",
                )
        );
        let original = Parser::new(&source).parse_model().unwrap();
        let model = validate(&source).unwrap();
        let classes: Vec<&str> = model.class_definitions().iter().map(ClassDefinition::name).collect();
        assert_eq!(classes, vec!["FooClassLike", "FooBarClassLike"]);
        let aspects: Vec<&str> = model.aspect_definitions().iter().map(AspectDefinition::name).collect();
        assert_eq!(aspects, vec!["Alpha", "Zed"]);
        assert_eq!(original.aspect_definitions()[0].name(), "Zed");
    }
}
