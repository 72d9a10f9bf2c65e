// Validation scenarios over complete models
use class_model::error::ValidationError;
use class_model::{format_model, parse_model, validate_model, ModelError};

const MINIMAL: &str = include_str!("ok/minimal.model");
const COLLECTION: &str = include_str!("ok/collection.model");

fn validation_error(source: &str) -> ValidationError {
    let model = parse_model(source).unwrap();
    match validate_model(&model) {
        Err(ModelError::Validation(error)) => error,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn test_canonical_fixtures_validate_unchanged() {
    for source in [
        MINIMAL,
        COLLECTION,
        include_str!("ok/angle.model"),
        include_str!("ok/entry.model"),
    ] {
        let model = parse_model(source).unwrap();
        let normalized = validate_model(&model).unwrap();
        assert_eq!(normalized, model);
        assert_eq!(format_model(&normalized), source);
    }
}

#[test]
fn test_classes_and_instances_are_paired() {
    let model = validate_model(&parse_model(COLLECTION).unwrap()).unwrap();
    let classes: Vec<&str> = model
        .class_definitions()
        .iter()
        .map(|class| class.name().trim_end_matches("ClassLike"))
        .collect();
    let instances: Vec<&str> = model
        .instance_definitions()
        .iter()
        .map(|instance| instance.name().trim_end_matches("Like"))
        .collect();
    assert_eq!(classes, instances);
    assert!(model.modules().iter().all(|module| module.name().chars().count() == 3));
}

#[test]
fn test_unknown_module_alias() {
    let source = MINIMAL
        .replace(
            "package foo\n",
            "package foo\n\nimport (\n\tcol \"github.com/craterdog/go-collection-framework/v4/collection\"\n)\n",
        )
        .replace(
            "\tGetClass() FooClassLike\n",
            "\tGetClass() FooClassLike\n\tGetItems() col.ListLike[abs.Foo]\n",
        );
    let error = validation_error(&source);
    assert_eq!(error.to_string(), "Found an unknown module alias name: abs");
}

#[test]
fn test_unused_type() {
    let source = MINIMAL.replace(
        "package foo\n",
        "package foo\n\n// Type Definitions\n\n/*\nTokenType is a constrained type.\n*/\ntype TokenType uint8\n",
    );
    let error = validation_error(&source);
    assert_eq!(
        error.to_string(),
        "The following type is never used in this model: TokenType"
    );
}

#[test]
fn test_unused_functional_and_aspect() {
    let functional = COLLECTION
        .replace("\tSortValuesWithRanker(ranker RankingFunction[V])\n", "\tSortValues()\n")
        .replace("\n\n\t// Constant Methods\n\tDefaultRanker() RankingFunction[V]", "");
    assert_eq!(
        validation_error(&functional),
        ValidationError::UnusedFunctional {
            name: "RankingFunction".into()
        }
    );

    let aspect = COLLECTION.replace("\tSequential[V]\n\tabs.", "\tabs.").replace(
        "\tIsEmpty() bool\n\n\t// Aspect Methods\n\tSequential[V]\n",
        "\tIsEmpty() bool\n",
    );
    assert_eq!(
        validation_error(&aspect),
        ValidationError::UnusedAspect {
            name: "Sequential".into()
        }
    );
}

#[test]
fn test_missing_counterparts() {
    let without_instance = MINIMAL
        .replace("FooLike is", "BarLike is")
        .replace("type FooLike", "type BarLike");
    assert!(matches!(
        validation_error(&without_instance),
        ValidationError::MissingInstance { .. } | ValidationError::MissingClass { .. }
    ));
}

#[test]
fn test_attribute_naming() {
    let source = COLLECTION.replace("\tGetCapacity() uint\n", "\tCapacity() uint\n");
    assert_eq!(
        validation_error(&source),
        ValidationError::InvalidAttributeName {
            name: "Capacity".into()
        }
    );

    let source = COLLECTION.replace("\tIsEmpty() bool\n", "\tIsEmpty() int\n");
    assert_eq!(
        validation_error(&source),
        ValidationError::NonBooleanAttribute {
            name: "IsEmpty".into()
        }
    );
}

#[test]
fn test_module_alias_length() {
    let source = COLLECTION.replace("\tabs \"", "\tabst \"").replace("abs.", "abst.");
    assert_eq!(
        validation_error(&source),
        ValidationError::InvalidModuleAlias {
            name: "abst".into()
        }
    );
}

#[test]
fn test_sections_are_normalized_without_mutation() {
    let bar = "\n/*\nBarClassLike is a class interface.\n*/\ntype BarClassLike interface {\n\t// Constructor Methods\n\tMake() BarLike\n}\n";
    let bar_like = "\n/*\nBarLike is an instance interface.\n*/\ntype BarLike interface {\n\t// Public Methods\n\tGetClass() BarClassLike\n}\n";
    let source = MINIMAL
        .replace("\n// Instance Definitions\n", &format!("{bar}\n// Instance Definitions\n"))
        .trim_end()
        .to_string()
        + "\n"
        + bar_like;
    let model = parse_model(&source).unwrap();
    let original = model.clone();
    let normalized = validate_model(&model).unwrap();
    assert_eq!(model, original);
    assert_eq!(model.class_definitions()[0].name(), "FooClassLike");
    assert_eq!(normalized.class_definitions()[0].name(), "BarClassLike");
    assert_eq!(normalized.instance_definitions()[0].name(), "BarLike");
    assert_eq!(validate_model(&normalized).unwrap(), normalized);
}
