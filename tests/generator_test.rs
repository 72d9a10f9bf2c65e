// Class generation over the canonical fixtures in tests/ok
use class_model::generator::Generator;
use class_model::{generate_class, generate_model_classes, parse_model, validate_model};
use std::fs;
use std::path::PathBuf;

const COPYRIGHT: &str = "Copyright (c) 2026.  All Rights Reserved.";

fn read_test_file(filename: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("ok")
        .join(filename);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {:?}", path))
}

/// The aliases listed in the import block of a generated class.
fn imported_aliases(class: &str) -> Vec<String> {
    let Some(start) = class.find("\nimport (\n") else {
        return Vec::new();
    };
    let block = &class[start + "\nimport (\n".len()..];
    let end = block.find("\n)\n").expect("the import block is closed");
    block[..end]
        .lines()
        .map(|line| line.trim().split(' ').next().unwrap_or_default().to_string())
        .collect()
}

fn assert_well_formed(class: &str, package: &str) {
    assert!(class.starts_with("/*\n"));
    assert!(class.contains(&format!("*/\n\npackage {package}\n")));
    assert_eq!(
        class.matches('{').count(),
        class.matches('}').count(),
        "unbalanced braces in\n{class}"
    );
    for alias in imported_aliases(class) {
        let body = &class[class.find("\n)\n").unwrap()..];
        assert!(body.contains(&format!("{alias}.")), "{alias} is imported but never used");
    }
    assert!(class.ends_with("// Private\n"));
}

#[test]
fn test_collection_classes() {
    let model = validate_model(&parse_model(&read_test_file("collection.model")).unwrap()).unwrap();
    let classes = generate_model_classes(&model).unwrap();
    assert_eq!(classes.keys().map(String::as_str).collect::<Vec<_>>(), ["list", "stack"]);
    for class in classes.values() {
        assert_well_formed(class, "collection");
    }

    let list = &classes["list"];
    assert_eq!(imported_aliases(list), ["abs", "fmt", "syn"]);
    assert!(list.contains("\n\tabs \"github.com/craterdog/go-collection-framework/v4\"\n"));
    assert!(list.contains("var listClass = map[string]any{}\nvar listMutex syn.Mutex\n"));
    assert!(list.contains("func List[V any]() ListClassLike[V] {\n"));
    assert!(list.contains("\t\t\t// defaultRanker_: constantValue,\n"));
    assert!(list.contains("type listClass_[V any] struct {\n\t// Define the class constants.\n\tdefaultRanker_ RankingFunction[V]\n}\n"));
    assert!(list.contains("func (c *listClass_[V]) DefaultRanker() RankingFunction[V] {\n\treturn c.defaultRanker_\n}\n"));
    assert!(list.contains("func (c *listClass_[V]) MakeFromArray(values []V) ListLike[V] {\n\treturn &list_[V]{\n"));
    assert!(list.contains(
        "func (c *listClass_[V]) Concatenate(\n\tfirst ListLike[V],\n\tsecond ListLike[V],\n) ListLike[V] {\n\tvar result_ ListLike[V]\n"
    ));
    assert!(list.contains(
        "func (v *list_[V]) InsertValue(\n\tslot Slot,\n\tvalue V,\n) {\n\t// TBD - Add the method implementation.\n}\n"
    ));
    assert!(list.contains("// Sequential Methods\n"));
    assert!(list.contains("func (v *list_[V]) GetIterator() abs.IteratorLike[V] {\n"));
    assert!(!list.contains("Searchable"));

    let stack = &classes["stack"];
    assert_eq!(imported_aliases(stack), ["abs", "fmt", "syn", "uti"]);
    assert!(stack.contains(
        "func (c *stackClass_[V]) MakeWithCapacity(capacity uint) StackLike[V] {\n\tif uti.IsUndefined(capacity) {\n"
    ));
    assert!(stack.contains("\t\tclass_: c,\n\t\tcapacity_: capacity,\n\t}\n"));
    assert!(stack.contains("\tclass_ *stackClass_[V]\n\tcapacity_ uint\n\tempty_ bool\n}\n"));
    assert!(stack.contains("func (v *stack_[V]) IsEmpty() bool {\n\treturn v.empty_\n}\n"));
    assert!(stack.contains("func (v *stack_[V]) RemoveTop() V {\n\tvar result_ V\n"));
}

#[test]
fn test_every_declared_method_is_rendered() {
    let model = parse_model(&read_test_file("collection.model")).unwrap();
    let stack = generate_class(&model, "Stack").unwrap();
    for method in [
        "MakeWithCapacity(",
        "GetClass()",
        "AddValue(",
        "RemoveTop()",
        "GetCapacity()",
        "IsEmpty()",
        "GetSize()",
        "AsArray()",
        "GetIterator()",
    ] {
        assert!(stack.contains(&format!(") {method}")), "{method} is missing");
    }
}

#[test]
fn test_simple_type_class() {
    let generator = Generator::new();
    let model = generator.create_simple_type("angle", COPYRIGHT).unwrap();
    let angle = generator.generate_class(&model, "angle").unwrap();
    assert_well_formed(&angle, "angle");
    assert!(imported_aliases(&angle).is_empty());
    assert!(angle.contains("package angle\n\n// CLASS ACCESS\n"));
    assert!(angle.contains("var angleClass = &angleClass_{\n\t// Initialize the class constants.\n\t// zero_: constantValue,\n}\n"));
    assert!(angle.contains("func Angle() AngleClassLike {\n\treturn angleClass\n}\n"));
    assert!(angle.contains("func (v *angle_) InUnits(units Units) float64 {\n\tvar result_ float64\n"));
    assert!(angle.contains("func (v *angle_) GetClass() AngleClassLike {\n\treturn v.class_\n}\n"));
}

#[test]
fn test_generic_structure_class() {
    let generator = Generator::new();
    let model = generator.create_generic_structure("entry", COPYRIGHT).unwrap();
    let classes = generator.generate_model_classes(&model).unwrap();
    assert_eq!(classes.len(), 1);
    let entry = &classes["entry"];
    assert_well_formed(entry, "entry");
    assert_eq!(imported_aliases(entry), ["fmt", "syn", "uti"]);
    assert!(entry.contains("func Entry[K comparable, V any]() EntryClassLike[K, V] {\n"));
    assert!(entry.contains("type entry_[K comparable, V any] struct {\n"));
    assert!(entry.contains("\tclass_ *entryClass_[K, V]\n\tkey_ K\n\tvalue_ V\n\tmode_ Mode\n}\n"));
    assert!(entry.contains("\t\tclass_: c,\n\t\tkey_: key,\n\t\tvalue_: value,\n\t\tmode_: mode,\n\t}\n"));
    assert!(entry.contains("func (v *entry_[K, V]) SetMode(mode Mode) {\n\tif uti.IsUndefined(mode) {\n"));
    assert!(entry.contains("\tv.mode_ = mode\n}\n"));
}

#[test]
fn test_every_template_generates() {
    let generator = Generator::new();
    for (name, model) in [
        ("angle", generator.create_simple_type("angle", COPYRIGHT)),
        ("tally", generator.create_generic_type("tally", COPYRIGHT)),
        ("person", generator.create_simple_structure("person", COPYRIGHT)),
        ("entry", generator.create_generic_structure("entry", COPYRIGHT)),
    ] {
        let model = validate_model(&model.unwrap()).unwrap();
        let classes = generator.generate_model_classes(&model).unwrap();
        assert_eq!(classes.keys().collect::<Vec<_>>(), [name]);
        assert_well_formed(&classes[name], name);
    }
}
