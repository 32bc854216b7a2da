//! Locating JSON inside free-form completion text.
//!
//! Completions often wrap JSON in markdown fences or surround it with
//! commentary. [`extract_json`] finds the payload without parsing it.

use page2prompt_error::{CodecError, CodecErrorKind};

/// Extract a JSON object or array from a response.
///
/// Strategies, in order:
/// 1. Markdown code blocks: ```json ... ``` or a bare fence
/// 2. The first balanced `{ ... }` or `[ ... ]`, whichever opens first
///
/// # Errors
///
/// Returns [`CodecErrorKind::NoJson`] when neither strategy finds anything.
///
/// # Examples
///
/// ```
/// use page2prompt_codec::extract_json;
///
/// let response = "Sure:\n```json\n{\"subjects\": []}\n```\nDone.";
/// assert_eq!(extract_json(response).unwrap(), "{\"subjects\": []}");
/// ```
pub fn extract_json(response: &str) -> Result<String, CodecError> {
    if let Some(json) = extract_from_code_block(response) {
        if json.starts_with('{') || json.starts_with('[') {
            return Ok(json);
        }
    }

    let bracket_pos = response.find('[');
    let brace_pos = response.find('{');

    let order = match (bracket_pos, brace_pos) {
        (Some(b), Some(c)) if b < c => [('[', ']'), ('{', '}')],
        (Some(_), None) => [('[', ']'), ('{', '}')],
        _ => [('{', '}'), ('[', ']')],
    };

    for (open, close) in order {
        if let Some(json) = extract_balanced(response, open, close) {
            return Ok(json);
        }
    }

    tracing::warn!(response_length = response.len(), "No JSON found in completion");
    Err(CodecError::new(CodecErrorKind::NoJson(response.len())))
}

/// Content of the first fenced code block, preferring a `json` fence.
fn extract_from_code_block(response: &str) -> Option<String> {
    if let Some(start) = response.find("```json") {
        let content_start = start + "```json".len();
        return Some(until_fence(&response[content_start..]));
    }

    let start = response.find("```")?;
    let content_start = start + 3;
    // Skip a language tag on the fence line
    let skip_to = response[content_start..]
        .find('\n')
        .map(|n| content_start + n + 1)
        .unwrap_or(content_start);
    Some(until_fence(&response[skip_to..]))
}

/// Text up to the closing fence, or to the end for a truncated response.
fn until_fence(rest: &str) -> String {
    match rest.find("```") {
        Some(end) => rest[..end].trim().to_string(),
        None => rest.trim().to_string(),
    }
}

/// First `open ... close` span with nesting, ignoring delimiters in strings.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(response[start..start + i + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_object_with_surrounding_text() {
        let response = r#"Here you go {"a": {"b": "}"}} trailing"#;
        assert_eq!(extract_json(response).unwrap(), r#"{"a": {"b": "}"}}"#);
    }

    #[test]
    fn test_array_first_when_it_opens_first() {
        let response = r#"[{"name": "Ann"}] and {"x": 1}"#;
        assert_eq!(extract_json(response).unwrap(), r#"[{"name": "Ann"}]"#);
    }

    #[test]
    fn test_unlabelled_fence() {
        let response = "```\n{\"k\": 1}\n```";
        assert_eq!(extract_json(response).unwrap(), "{\"k\": 1}");
    }

    #[test]
    fn test_no_json() {
        let err = extract_json("Ann: a detective").unwrap_err();
        assert_eq!(err.kind, CodecErrorKind::NoJson(16));
    }
}
