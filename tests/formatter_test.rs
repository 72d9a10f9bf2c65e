// Round trip tests over the canonical fixtures in tests/ok
use class_model::formatter::Formatter;
use class_model::generator::Generator;
use class_model::{format_model, parse_model};
use std::fs;
use std::path::PathBuf;

const COPYRIGHT: &str = "Copyright (c) 2026.  All Rights Reserved.";

fn get_test_file_path(subdir: &str, filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join(subdir)
        .join(filename)
}

fn read_test_file(subdir: &str, filename: &str) -> String {
    let path = get_test_file_path(subdir, filename);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {:?}", path))
}

fn fixtures() -> Vec<(String, String)> {
    let mut names: Vec<String> = fs::read_dir(get_test_file_path("ok", ""))
        .expect("the fixture directory exists")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".model"))
        .collect();
    names.sort();
    names
        .into_iter()
        .map(|name| {
            let source = read_test_file("ok", &name);
            (name, source)
        })
        .collect()
}

#[test]
fn test_fixtures_round_trip() {
    let fixtures = fixtures();
    assert!(fixtures.len() >= 4);
    for (name, source) in fixtures {
        let model = parse_model(&source).unwrap_or_else(|error| panic!("{name}: {error}"));
        assert_eq!(format_model(&model), source, "{name} is not canonical");
    }
}

#[test]
fn test_fixtures_double_round_trip() {
    for (name, source) in fixtures() {
        let model = parse_model(&source).unwrap();
        let reparsed = parse_model(&format_model(&model)).unwrap();
        assert_eq!(reparsed, model, "{name}");
    }
}

#[test]
fn test_formatter_is_reusable() {
    let mut formatter = Formatter::new();
    let minimal = parse_model(&read_test_file("ok", "minimal.model")).unwrap();
    let collection = parse_model(&read_test_file("ok", "collection.model")).unwrap();
    let first = formatter.format_model(&minimal);
    assert_eq!(formatter.format_model(&collection), read_test_file("ok", "collection.model"));
    assert_eq!(formatter.format_model(&minimal), first);
}

#[test]
fn test_layout_is_normalized() {
    let canonical = read_test_file("ok", "collection.model");
    let sloppy = canonical
        .replace("\tAppendValue(value V)\n", "\tAppendValue(value V,)\n")
        .replace("\tMake() ListLike[V]\n", "\tMake()   ListLike[V]\n")
        .replace("\t// Aspect Methods\n\tSequential[V]\n\tabs", "\t// Aspect Interfaces\n\tSequential[V]\n\tabs")
        .replace(
            "\tConcatenate(\n\t\tfirst ListLike[V],\n\t\tsecond ListLike[V],\n\t) ListLike[V]",
            "\tConcatenate(first ListLike[V], second ListLike[V]) ListLike[V]",
        );
    assert_ne!(sloppy, canonical);
    let model = parse_model(&sloppy).unwrap();
    assert_eq!(format_model(&model), canonical);
}

#[test]
fn test_model_templates_match_fixtures() {
    let generator = Generator::new();
    let angle = generator.create_simple_type("angle", COPYRIGHT).unwrap();
    assert_eq!(format_model(&angle), read_test_file("ok", "angle.model"));
    let entry = generator.create_generic_structure("entry", COPYRIGHT).unwrap();
    assert_eq!(format_model(&entry), read_test_file("ok", "entry.model"));
}
