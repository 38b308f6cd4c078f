//! Nesting bound applied to raw input before it reaches the parser.
//!
//! Views embed views several levels deep, but legitimate payloads stay well
//! under a few dozen levels. Scanning the bytes first turns pathological
//! nesting into [`SchemaError::DepthExceeded`] instead of relying on the
//! parser's own recursion guard.

use tracing::warn;

use crate::error::SchemaError;

/// Depth bound used when no override is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Largest accepted bound. The JSON parser itself refuses a 128th level.
pub const MAX_DEPTH_CEILING: usize = 127;

/// Rejects input whose object/array nesting is deeper than `limit`.
///
/// Brackets inside string literals are ignored, including escaped quotes.
/// The scan does not validate JSON syntax; that is left to the parser.
pub(crate) fn ensure_depth_within(bytes: &[u8], limit: usize) -> Result<(), SchemaError> {
    let mut depth = 0_usize;
    let mut in_string = false;
    let mut escaped = false;

    for &byte in bytes {
        if in_string {
            match (escaped, byte) {
                (true, _) => escaped = false,
                (false, b'\\') => escaped = true,
                (false, b'"') => in_string = false,
                (false, _) => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > limit {
                    warn!(limit, "rejecting payload nested beyond depth bound");
                    return Err(SchemaError::DepthExceeded { limit });
                }
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn nested_arrays(levels: usize) -> String {
        format!("{}{}", "[".repeat(levels), "]".repeat(levels))
    }

    #[rstest]
    #[case::flat(r#"{"a": 1}"#, 1)]
    #[case::scalar("42", 0)]
    #[case::siblings_do_not_accumulate(r#"[{"a": []}, {"b": []}]"#, 3)]
    #[case::brackets_in_strings(r#"{"text": "[[[[{{{{"}"#, 1)]
    #[case::escaped_quote(r#"{"text": "quote \" [[[["}"#, 1)]
    #[case::escaped_backslash(r#"{"text": "slash \\", "n": [1]}"#, 2)]
    fn accepts_payloads_at_bound(#[case] json: &str, #[case] limit: usize) {
        assert_eq!(ensure_depth_within(json.as_bytes(), limit), Ok(()));
    }

    #[rstest]
    #[case::one_level_too_deep(r#"{"a": {"b": 1}}"#, 1)]
    #[case::escape_closes_before_bracket(r#"{"text": "slash \\", "n": [1]}"#, 1)]
    fn rejects_payloads_beyond_bound(#[case] json: &str, #[case] limit: usize) {
        assert_eq!(
            ensure_depth_within(json.as_bytes(), limit),
            Err(SchemaError::DepthExceeded { limit })
        );
    }

    #[test]
    fn rejects_deeply_nested_arrays() {
        let json = nested_arrays(10_000);
        assert_eq!(
            ensure_depth_within(json.as_bytes(), DEFAULT_MAX_DEPTH),
            Err(SchemaError::DepthExceeded {
                limit: DEFAULT_MAX_DEPTH
            })
        );
    }

    #[test]
    fn accepts_nesting_exactly_at_default_bound() {
        let json = nested_arrays(DEFAULT_MAX_DEPTH);
        assert_eq!(ensure_depth_within(json.as_bytes(), DEFAULT_MAX_DEPTH), Ok(()));
    }
}
