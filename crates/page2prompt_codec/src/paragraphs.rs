//! Paragraph splitting for multi-length prompt responses.

const LENGTH_LABELS: [&str; 5] = ["concise", "normal", "medium", "detailed", "long"];

/// Split a completion into blank-line separated paragraphs, in order.
///
/// Each paragraph is trimmed and stripped of a leading length label such
/// as `Concise:` or `**Detailed:**`. Empty paragraphs between others keep
/// their position as empty strings; leading and trailing ones are dropped.
///
/// # Examples
///
/// ```
/// use page2prompt_codec::split_paragraphs;
///
/// let parts = split_paragraphs("Concise: A dock.\n\nNormal: A dock at night.");
/// assert_eq!(parts, vec!["A dock.", "A dock at night."]);
/// ```
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut parts: Vec<String> = text
        .replace("\r\n", "\n")
        .split("\n\n")
        .map(strip_label)
        .skip_while(|p| p.is_empty())
        .collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

fn strip_label(paragraph: &str) -> String {
    let trimmed = paragraph.trim();
    let unmarked = trimmed.trim_start_matches(['*', '#', '-', ' ']);
    let Some((head, rest)) = unmarked.split_once(':') else {
        return trimmed.to_string();
    };

    let label = head
        .trim_matches(|c: char| c == '*' || c.is_whitespace() || c.is_ascii_digit() || c == '.')
        .to_ascii_lowercase();
    let label = label.strip_suffix(" prompt").unwrap_or(&label);

    if LENGTH_LABELS.contains(&label) {
        rest.trim_start_matches('*').trim().to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraphs_kept_positionally() {
        let parts = split_paragraphs("one\n\ntwo\n\nthree");
        assert_eq!(parts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_markdown_labels_removed() {
        let parts = split_paragraphs("**Concise Prompt:** Ann waits.\n\n2. Detailed: Rain.");
        assert_eq!(parts, vec!["Ann waits.", "Rain."]);
    }

    #[test]
    fn test_other_colons_untouched() {
        let parts = split_paragraphs("Ann: waiting at the dock");
        assert_eq!(parts, vec!["Ann: waiting at the dock"]);
    }

    #[test]
    fn test_interior_gap_keeps_position() {
        let parts = split_paragraphs("\n\nShort.\n\n\n\nLong detailed.\n\n");
        assert_eq!(parts, vec!["Short.", "", "Long detailed."]);
    }

    #[test]
    fn test_empty_text() {
        assert!(split_paragraphs("   ").is_empty());
    }
}
