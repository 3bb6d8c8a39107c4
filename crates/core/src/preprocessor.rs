//! Preprocessing strategy trait and style resolution.

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::google::GooglePreprocessor;
use crate::section::Section;

/// A docstring preprocessing strategy.
///
/// Each docstring style is an independent implementation with a single
/// operation; there is no shared base behavior between styles.
pub trait Preprocessor: std::fmt::Debug {
    /// Rewrite `section.content` in place.
    fn preprocess_section(&self, section: &mut Section);
}

/// Errors emitted while resolving a preprocessing strategy.
#[derive(Debug, Error)]
pub enum PreprocessorError {
    /// The configured style name is not recognized.
    #[error("Unknown docstring style: {0:?}")]
    UnknownStyle(String),
}

/// Resolve a preprocessor implementation from a configured style name.
///
/// The optional configuration value is handed to the resolved strategy
/// as-is; whether it is read is up to the strategy.
pub fn preprocessor_for_style(
    name: &str,
    config: Option<JsonValue>,
) -> Result<Box<dyn Preprocessor>, PreprocessorError> {
    match name {
        "google" => Ok(Box::new(GooglePreprocessor::new(config))),
        other => Err(PreprocessorError::UnknownStyle(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_google_style() {
        let preprocessor =
            preprocessor_for_style("google", None).expect("google style should resolve");
        let mut section = Section::new("Args:\nfoo: the foo value");
        preprocessor.preprocess_section(&mut section);
        assert!(section.content.contains("**Arguments**:"));
    }

    #[test]
    fn rejects_unknown_style() {
        let err = preprocessor_for_style("numpy", None).unwrap_err();
        assert!(matches!(err, PreprocessorError::UnknownStyle(name) if name == "numpy"));
    }

    #[test]
    fn style_names_are_case_sensitive() {
        assert!(preprocessor_for_style("Google", None).is_err());
    }
}
