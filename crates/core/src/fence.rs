//! Fenced-code-block tracking for section preprocessing.
//!
//! Docstring sections may embed fenced examples; lines inside a fence must
//! be copied through verbatim and never classified as markers or param
//! lines. Docstring fences are far simpler than CommonMark's: a trimmed
//! line starting with three backticks toggles the state, with no indent or
//! marker-length rules.

/// Fence state carried across the lines of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceState {
    /// Not currently inside a fenced block.
    #[default]
    Outside,
    /// Within fence contents.
    Inside,
}

/// Outcome of processing a single line for fence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOutcome {
    /// State to carry into the next line.
    pub next_state: FenceState,
    /// Whether this line belongs to a fence (copy verbatim, skip
    /// classification). True for both delimiter lines.
    pub verbatim: bool,
}

/// Advance fence state based on a single trimmed line.
pub fn advance_fence(line: &str, state: FenceState) -> LineOutcome {
    if line.starts_with("```") {
        let next_state = match state {
            FenceState::Outside => FenceState::Inside,
            FenceState::Inside => FenceState::Outside,
        };
        return LineOutcome {
            next_state,
            verbatim: true,
        };
    }

    LineOutcome {
        next_state: state,
        verbatim: matches!(state, FenceState::Inside),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_and_closes_fence() {
        let open = advance_fence("```python", FenceState::default());
        assert!(open.verbatim);
        assert_eq!(open.next_state, FenceState::Inside);

        let inner = advance_fence("print('hi')", open.next_state);
        assert!(inner.verbatim);
        assert_eq!(inner.next_state, FenceState::Inside);

        let close = advance_fence("```", inner.next_state);
        assert!(close.verbatim);
        assert_eq!(close.next_state, FenceState::Outside);
    }

    #[test]
    fn plain_line_outside_is_not_verbatim() {
        let outcome = advance_fence("Args:", FenceState::Outside);
        assert!(!outcome.verbatim);
        assert_eq!(outcome.next_state, FenceState::Outside);
    }

    #[test]
    fn marker_like_line_inside_fence_stays_verbatim() {
        let outcome = advance_fence("Args:", FenceState::Inside);
        assert!(outcome.verbatim);
        assert_eq!(outcome.next_state, FenceState::Inside);
    }

    #[test]
    fn state_persists_across_lines() {
        let mut state = FenceState::default();
        for line in ["text", "```", "code", "more code"] {
            state = advance_fence(line, state).next_state;
        }
        assert_eq!(state, FenceState::Inside);
    }
}
