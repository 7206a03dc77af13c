//! Naming helpers shared by the generators.
//!
//! Document names are free-form JSON keys; generated names must be valid
//! identifiers. These helpers do the conversion.

/// Rust keywords that need a raw-identifier prefix when used as a member name.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "gen",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Identifiers that cannot be raw identifiers and get a trailing underscore instead.
const RESERVED: &[&str] = &["self", "Self", "crate", "super"];

/// Converts a string to snake_case.
///
/// Word boundaries are uppercase letters, `-`, `_`, `.` and spaces. Runs of
/// uppercase letters stay one word (`HTTPMethod` becomes `http_method`).
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }

    while result.ends_with('_') {
        result.pop();
    }
    result
}

/// Converts a string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if !c.is_alphanumeric() {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Returns a class name for a document name, or `None` if nothing usable is left.
#[must_use]
pub fn class_name(name: &str) -> Option<String> {
    let pascal = to_pascal_case(name);
    if pascal.is_empty() {
        return None;
    }
    if pascal.starts_with(|c: char| c.is_ascii_digit()) {
        return Some(format!("_{}", pascal));
    }
    Some(pascal)
}

/// Returns a member (field or method) name for a document name.
#[must_use]
pub fn member_name(name: &str) -> String {
    let snake = to_snake_case(name);
    if snake.is_empty() {
        return "_".to_string();
    }
    if snake.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{}", snake);
    }
    if RESERVED.contains(&snake.as_str()) {
        return format!("{}_", snake);
    }
    if KEYWORDS.contains(&snake.as_str()) {
        return format!("r#{}", snake);
    }
    snake
}

/// Returns a module name for a class name.
#[must_use]
pub fn module_name(class_name: &str) -> String {
    member_name(class_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("etag"), "etag");
        assert_eq!(to_snake_case("selfLink"), "self_link");
        assert_eq!(to_snake_case("HTTPMethod"), "http_method");
        assert_eq!(to_snake_case("NestedClass1_2"), "nested_class1_2");
        assert_eq!(to_snake_case("max-results"), "max_results");
        assert_eq!(to_snake_case("__private"), "private");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("sub"), "Sub");
        assert_eq!(to_pascal_case("url_shortener"), "UrlShortener");
        assert_eq!(to_pascal_case("order-type"), "OrderType");
        assert_eq!(to_pascal_case("Pet"), "Pet");
    }

    #[test]
    fn test_class_name() {
        assert_eq!(class_name("pet"), Some("Pet".to_string()));
        assert_eq!(class_name("3dModel"), Some("_3dModel".to_string()));
        assert_eq!(class_name("--"), None);
    }

    #[test]
    fn test_member_name() {
        assert_eq!(member_name("type"), "r#type");
        assert_eq!(member_name("self"), "self_");
        assert_eq!(member_name("1st"), "_1st");
        assert_eq!(member_name("kind"), "kind");
        assert_eq!(member_name(""), "_");
    }
}
