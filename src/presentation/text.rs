use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Cut `s` to at most `width` terminal columns, marking the cut with an ellipsis
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(s.len());
    let mut used = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        // Keep one column for the ellipsis
        if used + char_width > width - 1 {
            break;
        }
        used += char_width;
        result.push(c);
    }
    result.push(ELLIPSIS);
    result
}

/// Hard-wrap `s` at `width` terminal columns
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(s.len() + s.len() / width);
    let mut current_line_width = 0;

    for c in s.chars() {
        if c == '\n' {
            result.push(c);
            current_line_width = 0;
            continue;
        }
        let char_width = c.width().unwrap_or(0);
        if current_line_width + char_width > width {
            result.push('\n');
            current_line_width = char_width;
        } else {
            current_line_width += char_width;
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate_to_width("The Bedroom", 11), "The Bedroom");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("Nighthawks at the diner", 10), "Nighthawk…");
    }

    #[test]
    fn test_truncate_double_width() {
        assert_eq!(truncate_to_width("こんにちは、世界！", 7), "こんに…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_wrap_text_wrap_alnum() {
        assert_eq!(wrap_text("hello, world!", 4), "hell\no, w\norld\n!");
    }

    #[test]
    fn test_wrap_text_double_width() {
        assert_eq!(wrap_text("こんにちは、世界！", 7), "こんに\nちは、\n世界！");
    }

    #[test]
    fn test_wrap_text_keeps_newlines() {
        assert_eq!(wrap_text("ab\ncdef", 3), "ab\ncde\nf");
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello, world!", 0), "");
    }
}
