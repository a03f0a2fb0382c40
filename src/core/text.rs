/// Unicode whitespace plus the byte order mark, which typed or pasted text
/// sometimes carries.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Collapses every whitespace run (newlines included) to one space and trims
/// both ends.
pub fn normalize_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split(is_whitespace).filter(|s| !s.is_empty()) {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(&chars.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

/// First character upper-cased, the rest untouched.
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First character lower-cased, the rest untouched.
pub fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase, whitespace runs replaced with `-`. Empty input falls back to
/// `impact-statement`.
pub fn slugify(project: &str) -> String {
    let slug = project
        .split(is_whitespace)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "impact-statement".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Removed  \n legacy \n line breaks  "), "Removed legacy line breaks");
        assert_eq!(normalize_whitespace("\t\n "), "");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_normalize_whitespace_treats_bom_as_space() {
        assert_eq!(normalize_whitespace("a\u{FEFF}b"), "a b");
        assert_eq!(normalize_whitespace("\u{FEFF} a \u{FEFF}"), "a");
    }

    #[test]
    fn test_normalize_whitespace_is_idempotent() {
        let samples = ["  a \t b\n\nc ", "already normal", "", "   ", "x\u{00A0}y", "x\u{FEFF}\u{FEFF}y"];
        for sample in samples {
            let once = normalize_whitespace(sample);
            assert_eq!(normalize_whitespace(&once), once);
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("rEFACTORED"), "Refactored");
        assert_eq!(capitalize("é"), "É");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_first_character_helpers_leave_rest_alone() {
        assert_eq!(upper_first("refactored FTW"), "Refactored FTW");
        assert_eq!(lower_first("Output GENERATED"), "output GENERATED");
        assert_eq!(upper_first(""), "");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Upgrade EKS"), "upgrade-eks");
        assert_eq!(slugify("  Code   cleanup "), "code-cleanup");
        assert_eq!(slugify(""), "impact-statement");
        assert_eq!(slugify("   "), "impact-statement");
    }
}
