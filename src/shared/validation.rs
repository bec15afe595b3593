use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Canonical note slug: lowercase alphanumeric words joined by single hyphens
    /// - Valid: "soil-mechanics-1a2b3c4d", "note-0f9e8d7c"
    /// - Invalid: "-soil", "soil-", "soil--mechanics", "Soil", "soil_mechanics"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    /// Runs of anything that cannot appear inside a slug word
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Fallback stem for titles with no ASCII alphanumerics
const EMPTY_SLUG_STEM: &str = "note";

/// Lowercase `text` and collapse every non-alphanumeric run into a single hyphen.
///
/// Non-ASCII letters are dropped rather than transliterated.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let slug = NON_SLUG_CHARS.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        EMPTY_SLUG_STEM.to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("soil-mechanics-1a2b3c4d000040008000000000000000"));
        assert!(SLUG_REGEX.is_match("note-0f9e8d7c000040008000000000000000"));
        assert!(SLUG_REGEX.is_match("a"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-soil")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("soil-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("soil--mechanics")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Soil")); // uppercase
        assert!(!SLUG_REGEX.is_match("soil_mechanics")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Soil Mechanics"), "soil-mechanics");
        assert_eq!(slugify("  Plant Pathology: Unit 3 (Notes)  "), "plant-pathology-unit-3-notes");
        assert_eq!(slugify("Agronomy--101"), "agronomy-101");
        assert_eq!(slugify("Pédologie"), "p-dologie");
    }

    #[test]
    fn test_slugify_empty_falls_back() {
        assert_eq!(slugify(""), "note");
        assert_eq!(slugify("???"), "note");
        assert!(SLUG_REGEX.is_match(&slugify("!!! ###")));
    }
}
