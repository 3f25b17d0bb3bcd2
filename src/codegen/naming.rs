//! Identifier conversions between wire names and Rust names.

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn",
    "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let", "loop",
    "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "static",
    "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual",
    "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers either.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// `MCPToolsetId` -> `mcp_toolset_id`, `CpuMilli` -> `cpu_milli`.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' || c == '.' {
            if !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out.trim_matches('_').to_string()
}

/// What serde's `rename_all = "PascalCase"` produces for a snake_case field.
pub fn serde_pascal(snake: &str) -> String {
    snake
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// Field identifier, raw when it collides with a keyword.
pub fn field_ident(snake: &str) -> String {
    if PATH_KEYWORDS.contains(&snake) {
        format!("{}_", snake)
    } else if RUST_KEYWORDS.contains(&snake) {
        format!("r#{}", snake)
    } else if snake.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", snake)
    } else {
        snake.to_string()
    }
}

/// Whether `field_ident` suffixes `snake`, so the wire name must be spelled out.
pub fn is_renamed_ident(snake: &str) -> bool {
    PATH_KEYWORDS.contains(&snake)
}

/// Whether the field needs an explicit `#[serde(rename)]`.
pub fn needs_rename(wire: &str, snake: &str) -> bool {
    let ident = snake.trim_start_matches('_');
    serde_pascal(ident) != wire
}

/// `snake_case` -> `PascalCase` for type names built from property names.
pub fn type_segment(wire: &str) -> String {
    let mut chars = wire.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.filter(|c| c.is_alphanumeric()))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("RuntimeId"), "runtime_id");
        assert_eq!(snake_case("MCPToolsetId"), "mcp_toolset_id");
        assert_eq!(snake_case("AgentKitRuntimes"), "agent_kit_runtimes");
        assert_eq!(snake_case("Ttl"), "ttl");
        assert_eq!(snake_case("Type"), "type");
        assert_eq!(snake_case("Ipv4Address"), "ipv4_address");
    }

    #[test]
    fn test_needs_rename() {
        assert!(!needs_rename("RuntimeId", "runtime_id"));
        assert!(needs_rename("MCPToolsetId", "mcp_toolset_id"));
        assert!(!needs_rename("Type", "type"));
    }

    #[test]
    fn test_field_ident() {
        assert_eq!(field_ident("type"), "r#type");
        assert_eq!(field_ident("try"), "r#try");
        assert_eq!(field_ident("name"), "name");
        assert_eq!(field_ident("crate"), "crate_");
        assert_eq!(field_ident(&snake_case("Self")), "self_");
        assert_eq!(field_ident("super"), "super_");
        assert!(is_renamed_ident("crate"));
        assert!(!is_renamed_ident("type"));
    }

    #[test]
    fn test_type_segment() {
        assert_eq!(type_segment("envs"), "Envs");
        assert_eq!(type_segment("KeyAuth"), "KeyAuth");
    }
}
