//! Pre-flight checks on user-supplied input.
//!
//! These run before any filesystem mutation. The project name ends up both as
//! a directory name and as an identifier inside generated manifests, so the
//! accepted charset is the intersection of what is safe in both places.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    error::DomainError,
    value_objects::{Language, Template},
};

pub const MAX_NAME_LEN: usize = 50;

/// Names that collide with common tool directories. Compared case-insensitively.
pub const RESERVED_NAMES: [&str; 5] = ["test", "build", "dist", "env", "venv"];

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("name regex is valid"));

/// Validate a project name, returning it unchanged on success.
pub fn validate_name(name: &str) -> Result<&str, DomainError> {
    let invalid = |reason: &str| DomainError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(invalid("name is longer than 50 characters"));
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(invalid(
            "must start with a letter or underscore and contain only letters, digits, '-' or '_'",
        ));
    }
    if RESERVED_NAMES.contains(&name.to_ascii_lowercase().as_str()) {
        return Err(invalid("name is reserved"));
    }

    Ok(name)
}

/// Accept exactly one of the supported language names.
pub fn validate_language(language: &str) -> Result<Language, DomainError> {
    Language::ALL
        .into_iter()
        .find(|l| l.as_str() == language)
        .ok_or_else(|| DomainError::UnsupportedLanguage {
            language: language.to_string(),
            artifact: None,
            suggestion: closest_match(language, Language::ALL.iter().map(|l| l.as_str()))
                .map(str::to_string),
        })
}

/// Check a template against the per-language allow-list. `None` always passes.
pub fn validate_template(
    template: Option<&str>,
    language: Language,
) -> Result<Option<Template>, DomainError> {
    let Some(raw) = template else {
        return Ok(None);
    };

    Template::ALL
        .into_iter()
        .find(|t| t.as_str() == raw && t.supports(language))
        .map(Some)
        .ok_or_else(|| DomainError::UnsupportedTemplate {
            template: raw.to_string(),
            language: language.to_string(),
            suggestion: closest_match(raw, language.templates().map(|t| t.as_str()))
                .filter(|s| *s != raw)
                .map(str::to_string),
        })
}

/// Closest candidate within an edit distance of two, if any.
pub(crate) fn closest_match<'a>(
    input: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    candidates
        .into_iter()
        .map(|c| (strsim::levenshtein(input, c), c))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, c)| c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_names() {
        for name in ["my-project_1", "_private", "demo1", "A", "Game-Of-Life"] {
            assert_eq!(validate_name(name), Ok(name), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            validate_name(""),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn length_limit_is_fifty() {
        let ok = "a".repeat(50);
        let too_long = "a".repeat(51);
        assert!(validate_name(&ok).is_ok());
        assert!(validate_name(&too_long).is_err());
    }

    #[test]
    fn rejects_bad_characters() {
        for name in ["1project", "my project", "-dash", "dots.here", "slash/name", "ünï"] {
            assert!(validate_name(name).is_err(), "{name} should be rejected");
        }
    }

    #[test]
    fn rejects_reserved_names_in_any_case() {
        for name in ["test", "TEST", "Build", "dist", "env", "venv"] {
            assert!(validate_name(name).is_err(), "{name} should be reserved");
        }
        assert!(validate_name("tests").is_ok());
    }

    #[test]
    fn template_allow_list() {
        assert_eq!(
            validate_template(Some("pygame"), Language::Python),
            Ok(Some(Template::Pygame))
        );
        assert_eq!(validate_template(None, Language::Cpp), Ok(None));

        let err = validate_template(Some("pygame"), Language::Rust).unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedTemplate { .. }));
    }

    #[test]
    fn template_typo_gets_a_suggestion() {
        let err = validate_template(Some("pygam"), Language::Python).unwrap_err();
        match err {
            DomainError::UnsupportedTemplate { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("pygame"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn language_must_match_exactly() {
        assert_eq!(validate_language("javascript"), Ok(Language::JavaScript));
        for raw in ["Python", "py", "node", " CXX ", "go", ""] {
            assert!(
                matches!(
                    validate_language(raw),
                    Err(DomainError::UnsupportedLanguage { .. })
                ),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn wrong_case_language_suggests_canonical_name() {
        match validate_language("Python") {
            Err(DomainError::UnsupportedLanguage { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("python"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn template_must_match_exactly() {
        for raw in ["Pygame", " pygame", "PYGAME"] {
            assert!(validate_template(Some(raw), Language::Python).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn closest_match_respects_distance() {
        let langs = ["python", "rust", "javascript", "cpp"];
        assert_eq!(closest_match("rsut", langs), Some("rust"));
        assert_eq!(closest_match("haskell", langs), None);
    }
}
