use unicode_width::UnicodeWidthChar;

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

/// Simulate ratatui's `Wrap { trim: true }` over a string: explicit newlines
/// force a break, anything wider than `max_width` wraps. Returns each visual
/// line with the byte range it covers in the source text.
fn simulate_wrapped_lines(text: &str, max_width: usize) -> Vec<(String, usize, usize)> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    let mut line_start = 0;

    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            lines.push((current.trim_end().to_string(), line_start, idx));
            current = String::new();
            current_width = 0;
            line_start = idx + 1;
        } else {
            let w = ch.width().unwrap_or(1);
            if current_width + w > max_width && current_width > 0 {
                lines.push((current.trim_end().to_string(), line_start, idx));
                current = ch.to_string();
                current_width = w;
                line_start = idx;
            } else {
                current.push(ch);
                current_width += w;
            }
        }
    }

    if !current.is_empty() || text.ends_with('\n') {
        lines.push((current.trim_end().to_string(), line_start, text.len()));
    }

    lines
}

/// Visual (line, column) of a byte cursor inside wrapped text. Used to place
/// the terminal cursor in the editor's input box.
pub fn calculate_wrapped_cursor_position(
    text: &str,
    cursor_index: usize,
    max_width: usize,
) -> (usize, usize) {
    if text.is_empty() || cursor_index == 0 {
        return (0, 0);
    }

    let wrapped = simulate_wrapped_lines(text, max_width);

    for (line_idx, (_, start, end)) in wrapped.iter().enumerate() {
        if cursor_index >= *start && cursor_index <= *end {
            return (line_idx, cursor_index.saturating_sub(*start));
        }
    }

    // Cursor past the last line (e.g. right after a trailing newline).
    if let Some((last_text, _, last_end)) = wrapped.last() {
        if cursor_index >= *last_end {
            return (wrapped.len() - 1, last_text.chars().count());
        }
    }

    (0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.len() <= 20);
    }

    #[test]
    fn test_cursor_at_start() {
        assert_eq!(calculate_wrapped_cursor_position("Hello world", 0, 10), (0, 0));
        assert_eq!(calculate_wrapped_cursor_position("", 0, 10), (0, 0));
    }

    #[test]
    fn test_cursor_single_line() {
        assert_eq!(calculate_wrapped_cursor_position("Hello", 3, 10), (0, 3));
    }

    #[test]
    fn test_cursor_wraps_to_second_line() {
        let text = "This is a long line that should wrap";
        assert_eq!(calculate_wrapped_cursor_position(text, 15, 10), (1, 5));
    }

    #[test]
    fn test_cursor_beyond_text_clamps_to_end() {
        assert_eq!(calculate_wrapped_cursor_position("Hi", 10, 10), (0, 2));
    }

    #[test]
    fn test_cursor_follows_explicit_newlines() {
        let text = "Line 1\nLine 2";
        assert_eq!(calculate_wrapped_cursor_position(text, 8, 20), (1, 1));
    }

    #[test]
    fn test_wrapped_lines_split_on_newlines() {
        let lines = simulate_wrapped_lines("Line 1\nLine 2\nLine 3", 20);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].0, "Line 1");
        assert_eq!(lines[2].0, "Line 3");
    }

}
