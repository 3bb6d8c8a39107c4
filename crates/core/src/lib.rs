#![deny(missing_docs)]
//! Docmd core: docstring section preprocessing for Markdown doc generation.

/// Fenced-code-block tracking for section preprocessing.
pub mod fence;
/// Google-style docstring section preprocessing.
pub mod google;
/// Preprocessing strategy trait and style resolution.
pub mod preprocessor;
/// Section data model shared with the doc-generation driver.
pub mod section;

pub use fence::{FenceState, LineOutcome, advance_fence};
pub use google::GooglePreprocessor;
pub use preprocessor::{Preprocessor, PreprocessorError, preprocessor_for_style};
pub use section::Section;
