//! Locates a JSON object embedded in free-form model output.
//!
//! Models often wrap the requested object in prose or code fences. The scanner
//! walks the text once per candidate `{`, tracking brace depth while skipping
//! over string literals, and returns the first span whose braces balance.

/// Returns the first balanced `{ ... }` substring, or `None`.
///
/// Braces inside JSON string literals (including escaped quotes) do not count.
/// If an opening brace never closes, scanning resumes at the next `{`.
pub fn first_json_object(text: &str) -> Option<&str> {
    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find('{') {
        let start = search_from + offset;
        if let Some(end) = balanced_end(&text[start..]) {
            return Some(&text[start..start + end]);
        }
        search_from = start + 1;
    }
    None
}

/// Byte length of the balanced object starting at `s[0] == '{'`.
fn balanced_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + c.len_utf8());
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
    fn test_bare_object() {
        assert_eq!(first_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_object_wrapped_in_prose() {
        let text = "Tentu! Berikut hasilnya:\n{\"translation\": \"x\"}\nSemoga membantu.";
        assert_eq!(first_json_object(text), Some("{\"translation\": \"x\"}"));
    }

    #[test]
    fn test_object_inside_code_fence() {
        let text = "```json\n{\"a\": {\"b\": [1, 2]}}\n```";
        assert_eq!(first_json_object(text), Some("{\"a\": {\"b\": [1, 2]}}"));
    }

    #[test]
    fn test_braces_inside_strings_ignored() {
        let text = r#"{"text": "pakai } dan { di sini", "reason": "kutip \" lolos }"} ekor"#;
        assert_eq!(
            first_json_object(text),
            Some(r#"{"text": "pakai } dan { di sini", "reason": "kutip \" lolos }"}"#)
        );
    }

    #[test]
    fn test_first_of_two_objects() {
        assert_eq!(first_json_object(r#"{"a":1} {"b":2}"#), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_unclosed_brace_then_valid_object() {
        // The first `{` never closes, so the scanner retries from the next one.
        let text = r#"catatan {tidak ditutup dan {"ok": true}"#;
        assert_eq!(first_json_object(text), Some(r#"{"ok": true}"#));
    }

    #[test]
    fn test_no_object() {
        assert_eq!(first_json_object("Saya merasa kesal..."), None);
        assert_eq!(first_json_object("hanya kurung tutup }"), None);
        assert_eq!(first_json_object(""), None);
    }

    #[test]
    fn test_multibyte_text_around_object() {
        let text = "hasil 😊 {\"t\": \"é\"} ✓";
        assert_eq!(first_json_object(text), Some("{\"t\": \"é\"}"));
    }
}
