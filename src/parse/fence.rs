//! Code fence tracking.

/// The fence delimiter recognized by the parser and renderer.
pub const FENCE: &str = "```";

/// Update the "inside a code fence" state for one fragment of text.
///
/// An odd number of fence markers toggles the state; an even number
/// (including zero) leaves it unchanged.
///
/// # Examples
///
/// ```
/// use mdqti::parse::update_fence_state;
///
/// assert!(update_fence_state("```python", false));
/// assert!(!update_fence_state("```", true));
/// assert!(!update_fence_state("inline ```x``` pair", false));
/// ```
pub fn update_fence_state(text: &str, in_fence: bool) -> bool {
    if text.matches(FENCE).count() % 2 == 1 {
        !in_fence
    } else {
        in_fence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fence_keeps_state() {
        assert!(!update_fence_state("plain text", false));
        assert!(update_fence_state("plain text", true));
    }

    #[test]
    fn test_single_fence_toggles() {
        assert!(update_fence_state("```", false));
        assert!(update_fence_state("   ```rust", false));
        assert!(!update_fence_state("```", true));
    }

    #[test]
    fn test_paired_fences_cancel() {
        assert!(!update_fence_state("```a``` and ```b```", false));
        assert!(update_fence_state("``` ```", true));
    }

    #[test]
    fn test_six_backticks_count_as_two_markers() {
        assert!(!update_fence_state("``````", false));
    }

    #[test]
    fn test_short_backtick_runs_ignored() {
        assert!(!update_fence_state("use `x` or ``y``", false));
    }
}
