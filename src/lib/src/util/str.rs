/// `blogPost` -> `blog-post`, `HTTPLink` -> `h-t-t-p-link`.
///
/// Every uppercase letter becomes a dash plus its lowercase form, a leading
/// dash is dropped.
pub fn camel_to_kebab(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for c in input.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out.trim_start_matches('-').to_string()
}

/// A valid JavaScript identifier derived from a content type id.
/// `blog-post` -> `blogPost`, `2col` -> `_2col`.
pub fn to_js_identifier(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 1);
    let mut upper_next = false;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
            if upper_next && !out.is_empty() {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }
    match out.chars().next() {
        None => "contentType".to_string(),
        Some(first) if first.is_ascii_digit() => format!("_{out}"),
        Some(_) => out,
    }
}

const JS_RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Words that cannot name a binding in strict mode JavaScript.
pub fn is_js_reserved_word(input: &str) -> bool {
    JS_RESERVED_WORDS.contains(&input)
}

pub fn is_js_identifier(input: &str) -> bool {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
