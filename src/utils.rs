/// Accessor prefixes recognized on attribute getters.
pub const GETTER_PREFIXES: [&str; 8] = ["Get", "Is", "Was", "Are", "Were", "Has", "Had", "Have"];

/// Getter prefixes that form a yes/no question and therefore return `bool`.
pub const INTERROGATIVE_PREFIXES: [&str; 7] = ["Is", "Was", "Are", "Were", "Has", "Had", "Have"];

/// The accessor prefix recognized on attribute setters.
pub const SETTER_PREFIX: &str = "Set";

pub const CLASS_SUFFIX: &str = "ClassLike";

pub const INSTANCE_SUFFIX: &str = "Like";

/// The name shared by a class interface and its instance interface: `Foo` for
/// `FooClassLike`.
pub fn class_key(class_name: &str) -> Option<&str> {
    class_name
        .strip_suffix(CLASS_SUFFIX)
        .filter(|key| !key.is_empty())
}

/// The name shared by an instance interface and its class interface: `Foo` for
/// `FooLike`.
pub fn instance_key(instance_name: &str) -> Option<&str> {
    instance_name
        .strip_suffix(INSTANCE_SUFFIX)
        .filter(|key| !key.is_empty() && !instance_name.ends_with(CLASS_SUFFIX))
}

/// Returns the accessor prefix that `name` starts with, if any. The prefix must
/// be followed by an upper case letter, so `Issue` does not count as `Is`.
pub fn accessor_prefix(name: &str) -> Option<&'static str> {
    GETTER_PREFIXES
        .iter()
        .chain(std::iter::once(&SETTER_PREFIX))
        .find(|prefix| {
            name.strip_prefix(**prefix)
                .and_then(|rest| rest.chars().next())
                .is_some_and(char::is_uppercase)
        })
        .copied()
}

pub fn is_interrogative(prefix: &str) -> bool {
    INTERROGATIVE_PREFIXES.contains(&prefix)
}

/// Upper cases the first character of `text`.
pub fn make_upper_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower cases the first character of `text`.
pub fn make_lower_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Calculates the 1-based line and column number for a given byte offset in the source text.
/// This function is designed to be called only when an error occurs, as it iterates through
/// the source text to determine the position.
pub fn get_line_and_column(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

/// Renders the source line holding an error together with the lines just before
/// and after it. A caret is drawn under `column` of `line`; tabs in the error line
/// are preserved in the caret line so the caret stays aligned.
pub fn source_context(source: &str, line: usize, column: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let mut context = String::new();
    if lines.is_empty() {
        return context;
    }
    let line = line.clamp(1, lines.len());
    let first = line.saturating_sub(1).max(1);
    let last = (line + 1).min(lines.len());
    for number in first..=last {
        let text = lines[number - 1];
        context.push_str(&format!("{number:04}: {text}\n"));
        if number == line {
            context.push_str(" >>>─");
            for c in text.chars().take(column.saturating_sub(1)) {
                context.push(if c == '\t' { '\t' } else { '─' });
            }
            context.push_str("⌃\n");
        }
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_prefix() {
        assert_eq!(accessor_prefix("GetName"), Some("Get"));
        assert_eq!(accessor_prefix("SetName"), Some("Set"));
        assert_eq!(accessor_prefix("IsEmpty"), Some("Is"));
        assert_eq!(accessor_prefix("HaveChildren"), Some("Have"));
        assert_eq!(accessor_prefix("HasValue"), Some("Has"));
        assert_eq!(accessor_prefix("Issue"), None);
        assert_eq!(accessor_prefix("Get"), None);
        assert_eq!(accessor_prefix("FetchName"), None);
    }

    #[test]
    fn test_class_and_instance_keys() {
        assert_eq!(class_key("FooClassLike"), Some("Foo"));
        assert_eq!(class_key("ClassLike"), None);
        assert_eq!(class_key("FooLike"), None);
        assert_eq!(instance_key("FooLike"), Some("Foo"));
        assert_eq!(instance_key("FooClassLike"), None);
        assert_eq!(instance_key("Foo"), None);
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(make_upper_case("foo"), "Foo");
        assert_eq!(make_lower_case("FooBar"), "fooBar");
        assert_eq!(make_lower_case(""), "");
    }

    #[test]
    fn test_line_and_column() {
        let source = "abc\ndef\n\tghi";
        assert_eq!(get_line_and_column(source, 0), (1, 1));
        assert_eq!(get_line_and_column(source, 5), (2, 2));
        assert_eq!(get_line_and_column(source, 9), (3, 2));
    }

    #[test]
    fn test_source_context() {
        let source = "one\ntwo\nthree\nfour";
        let context = source_context(source, 3, 3);
        assert_eq!(context, "0002: two\n0003: three\n >>>───⌃\n0004: four\n");

        let context = source_context(source, 1, 1);
        assert_eq!(context, "0001: one\n >>>─⌃\n0002: two\n");
    }
}
