//! Case restoration and replacement templates for inflection rules
//!
//! All functions are **pure**.

use regex::Captures;

/// Rewrites `token` to follow the casing of `word`
///
/// - identical: returned as is
/// - `word` lowercase: `token` lowercased
/// - `word` uppercase: `token` uppercased
/// - `word` capitalized: `token` capitalized
/// - anything else: `token` lowercased
pub(super) fn restore_case(word: &str, token: &str) -> String {
    if word == token {
        return token.to_string();
    }

    if word == word.to_lowercase() {
        return token.to_lowercase();
    }

    if word == word.to_uppercase() {
        return token.to_uppercase();
    }

    match word.chars().next() {
        Some(first) if first.to_uppercase().eq(std::iter::once(first)) => capitalize(token),
        _ => token.to_lowercase(),
    }
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Expands `$n` group references (one or two digits) in a replacement template
///
/// Groups that did not participate in the match expand to nothing.
pub(super) fn interpolate(template: &str, captures: &Captures<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let digits = after
            .bytes()
            .take(2)
            .take_while(u8::is_ascii_digit)
            .count();

        if digits == 0 {
            out.push('$');
            rest = after;
            continue;
        }

        let index: usize = after[..digits].parse().unwrap_or_default();
        if let Some(group) = captures.get(index) {
            out.push_str(group.as_str());
        }
        rest = &after[digits..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_restore_case_identity() {
        assert_eq!(restore_case("user", "user"), "user");
    }

    #[test]
    fn test_restore_case_lower() {
        assert_eq!(restore_case("users", "USER"), "user");
    }

    #[test]
    fn test_restore_case_upper() {
        assert_eq!(restore_case("USERS", "user"), "USER");
    }

    #[test]
    fn test_restore_case_capitalized() {
        assert_eq!(restore_case("People", "person"), "Person");
    }

    #[test]
    fn test_restore_case_mixed() {
        assert_eq!(restore_case("uSeRs", "User"), "user");
    }

    #[test]
    fn test_interpolate_groups() {
        let re = Regex::new(r"(?:(kni|wi|li)fe|(ar|l|ea|eo|oa|hoo)f)$").unwrap();
        let caps = re.captures("wolf").unwrap();
        assert_eq!(interpolate("$1$2ves", &caps), "lves");
    }

    #[test]
    fn test_interpolate_whole_match() {
        let re = Regex::new(r"eaux$").unwrap();
        let caps = re.captures("chateaux").unwrap();
        assert_eq!(interpolate("$0", &caps), "eaux");
    }

    #[test]
    fn test_interpolate_literal_dollar() {
        let re = Regex::new(r"a").unwrap();
        let caps = re.captures("a").unwrap();
        assert_eq!(interpolate("$x$", &caps), "$x$");
    }
}
