/// Redact an appId for display.
///
/// At most the first four characters are revealed; the rest become one
/// `*` each. Anything shorter than four characters renders as a fixed
/// `****` so no partial credential ever leaks. Counts characters, not
/// bytes, so multi-byte credentials cannot split a code point.
pub fn mask_app_id(app_id: &str) -> String {
    let chars: Vec<char> = app_id.chars().collect();
    if chars.len() < 4 {
        "****".to_string()
    } else {
        let head: String = chars[..4].iter().collect();
        format!("{}{}", head, "*".repeat(chars.len() - 4))
    }
}
