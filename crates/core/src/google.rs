//! Google-style docstring section preprocessing.
//!
//! Rewrites `Args:` / `Returns:` / `Raises:` blocks inside a section into
//! Markdown bullet lists grouped under bolded labels. Text before the first
//! marker and fenced code examples pass through untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value as JsonValue;

use crate::fence::{FenceState, advance_fence};
use crate::preprocessor::Preprocessor;
use crate::section::Section;

/// Literal marker lines mapped to their canonical Markdown labels.
const KEYWORDS: &[(&str, &str)] = &[
    ("Args:", "Arguments"),
    ("Arguments:", "Arguments"),
    ("Keyword Arguments:", "Arguments"),
    ("Returns:", "Returns"),
    ("Raises:", "Raises"),
];

/// Ordered param-line patterns; the first match wins.
///
/// Patterns that capture a `type` group always bind it, so a `None` from
/// `captures.name("type")` means the matching pattern is untyped.
static PARAM_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^(?P<param>\S+): (?P<desc>.+)$",
        r"^(?P<param>\S+)\s(?P<type>\S+): (?P<desc>.+)$",
        r"^(?P<param>\S+)\s+-- (?P<desc>.+)$",
        r"^(?P<param>\S+)\s+\{\[(?P<type>\S+)\]\}\s+-- (?P<desc>.+)$",
        r"^(?P<param>\S+)\s+\{(?P<type>\S+)\}\s+-- (?P<desc>.+)$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("param pattern must compile"))
    .collect()
});

/// Preprocessor for Google-style docstring sections.
#[derive(Debug, Default)]
pub struct GooglePreprocessor {
    config: Option<JsonValue>,
}

impl GooglePreprocessor {
    /// Create a preprocessor, optionally carrying an opaque configuration
    /// value. The value is held for uniformity with other styles; this
    /// strategy never reads it.
    pub fn new(config: Option<JsonValue>) -> Self {
        Self { config }
    }

    /// The configuration value supplied at construction, if any.
    pub fn config(&self) -> Option<&JsonValue> {
        self.config.as_ref()
    }
}

impl Preprocessor for GooglePreprocessor {
    /// Split the section into a preamble and labeled components, then
    /// rewrite its content with the components serialized as Markdown.
    fn preprocess_section(&self, section: &mut Section) {
        let mut lines: Vec<String> = Vec::new();
        let mut fence = FenceState::default();
        let mut keyword: Option<&'static str> = None;
        let mut components: Vec<(&'static str, Vec<String>)> = Vec::new();

        for raw in section.content.split('\n') {
            let line = raw.trim();

            let outcome = advance_fence(line, fence);
            fence = outcome.next_state;
            if outcome.verbatim {
                lines.push(line.to_string());
                continue;
            }

            if let Some(label) = canonical_label(line) {
                log::debug!("section marker {line:?} starts component {label:?}");
                keyword = Some(label);
                continue;
            }

            let Some(label) = keyword else {
                lines.push(line.to_string());
                continue;
            };

            // Components keep first-insertion order for serialization.
            let index = match components.iter().position(|(key, _)| *key == label) {
                Some(index) => index,
                None => {
                    components.push((label, Vec::new()));
                    components.len() - 1
                }
            };
            let bullet = format_param_line(line)
                .unwrap_or_else(|| format!("  {line}"));
            components[index].1.push(bullet);
        }

        for (label, bullets) in &components {
            append_component(&mut lines, label, bullets);
        }

        section.content = lines.join("\n");
    }
}

/// Look up the canonical label for an exact marker line.
fn canonical_label(line: &str) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .find(|(marker, _)| *marker == line)
        .map(|(_, label)| *label)
}

/// Format a param line as a Markdown bullet, or `None` when no pattern
/// matches (the caller falls back to an indented continuation).
fn format_param_line(line: &str) -> Option<String> {
    for pattern in PARAM_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(line) {
            let param = &caps["param"];
            let desc = &caps["desc"];
            return Some(match caps.name("type") {
                Some(ty) => format!("- `{param}` _{}_ - {desc}", ty.as_str()),
                None => format!("- `{param}` - {desc}"),
            });
        }
    }
    None
}

/// Append one component under its bolded label, separated from prior
/// output by a single blank line. Empty components emit nothing.
fn append_component(lines: &mut Vec<String>, label: &str, bullets: &[String]) {
    if bullets.is_empty() {
        return;
    }

    if lines.last().is_some_and(|last| !last.is_empty()) {
        lines.push(String::new());
    }

    // Markdown needs the blank line for the bullets to render as a list.
    lines.push(format!("**{label}**:"));
    lines.push(String::new());
    lines.extend(bullets.iter().cloned());
}
