//! Recovery of a JSON object from loosely formatted model output.
//!
//! Models sometimes wrap their answer in a fenced block or stop one brace
//! short. This module undoes exactly those two things and nothing else.

use serde_json::Value as JsonValue;

use crate::result::AiError;

const FENCE_OPEN: &str = "```json";
const FENCE: &str = "```";
const LANGUAGE_LABEL: &str = "json";

/// Strip fence tokens and balance at most one missing closing brace.
///
/// Removal is a blunt find-and-replace over the whole text, so a literal
/// `json` inside a string value is removed as well.
pub fn normalize(raw: &str) -> String {
    let mut s = raw
        .trim()
        .replace(FENCE_OPEN, "")
        .replace(FENCE, "")
        .replace(LANGUAGE_LABEL, "");

    let open = s.matches('{').count();
    let close = s.matches('}').count();
    if open > close {
        s.push('}');
    }

    s
}

/// Normalize and parse. On failure the error carries `raw` unmodified.
pub fn parse_response(raw: &str) -> Result<JsonValue, AiError> {
    let normalized = normalize(raw);
    serde_json::from_str(&normalized).map_err(|e| AiError::malformed_response(raw, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clean_json_is_unchanged_up_to_trimming() {
        let clean = r#"{"a": 1, "b": {"c": [1, 2]}}"#;
        assert_eq!(normalize(clean), clean);
        assert_eq!(normalize(&format!("  \n{clean}\n\t")), clean);
    }

    #[test]
    fn normalize_is_idempotent_on_its_output() {
        let once = normalize("```json\n{\"a\": 1\n```");
        assert_eq!(normalize(&once), once.trim());
    }

    #[test]
    fn fenced_block_is_unwrapped() {
        let v = parse_response("```json\n{\"a\":1}\n```").unwrap();
        assert_eq!(v, json!({"a": 1}));
    }

    #[test]
    fn bare_fence_and_inline_label_are_removed() {
        let v = parse_response("json\n```\n{\"a\":1}\n```").unwrap();
        assert_eq!(v, json!({"a": 1}));
    }

    #[test]
    fn label_inside_values_is_also_removed() {
        let v = parse_response(r#"{"note": "jsonic"}"#).unwrap();
        assert_eq!(v, json!({"note": "ic"}));
    }

    #[test]
    fn one_missing_brace_is_appended() {
        let raw = r#"{"a": 1, "b": 2"#;
        assert_eq!(normalize(raw), format!("{raw}}}"));
        assert_eq!(parse_response(raw).unwrap(), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn two_missing_braces_fail_with_original_text() {
        let raw = r#"{"a": {"b": 1"#;
        assert_eq!(normalize(raw).matches('}').count(), 1);

        let err = parse_response(raw).unwrap_err();
        match err {
            AiError::MalformedResponse { raw: got, .. } => assert_eq!(got, raw),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn extra_closing_braces_are_left_alone() {
        let raw = r#"{"a": 1}}"#;
        assert_eq!(normalize(raw), raw);
        assert!(parse_response(raw).is_err());
    }

    #[test]
    fn raw_text_is_kept_verbatim_including_whitespace() {
        let raw = "  I'm sorry, I can't help with that.  \n";
        let err = parse_response(raw).unwrap_err();
        assert_eq!(err.raw_response(), Some(raw));
    }

    #[test]
    fn missing_comma_is_not_repaired() {
        assert!(parse_response(r#"{"a": 1 "b": 2}"#).is_err());
    }
}
