//! Identifier naming rules for generated code.

/// Convert a schema name to a CamelCase identifier.
///
/// Follows protoc-gen-go's rules: `_x` and `.x` join words when `x` is
/// lowercase, a remaining `.` becomes `_`, and a leading `_` becomes `X`
/// so the result always starts with a capital letter.
///
/// ```
/// use protoweave_core::camel_case;
///
/// assert_eq!(camel_case("order_id"), "OrderId");
/// assert_eq!(camel_case("Outer.Inner"), "Outer_Inner");
/// ```
pub fn camel_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());

        match c {
            '.' if next_is_lower => {}
            '.' => out.push('_'),
            '_' if i == 0 || chars[i - 1] == '.' => out.push('X'),
            '_' if next_is_lower => {}
            c if c.is_ascii_digit() => out.push(c),
            c => {
                out.push(c.to_ascii_uppercase());
                while chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase()) {
                    i += 1;
                    out.push(chars[i]);
                }
            }
        }
        i += 1;
    }

    out
}

/// Replace every character that cannot appear in an identifier with `_`.
///
/// A leading digit gets a `_` prefix and an empty input becomes `_`.
pub fn sanitize_ident(s: &str) -> String {
    let mut out: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    match out.chars().next() {
        None => out.push('_'),
        Some(c) if c.is_ascii_digit() => out.insert(0, '_'),
        Some(_) => {}
    }

    out
}
