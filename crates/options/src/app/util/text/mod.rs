use unicode_width::UnicodeWidthChar;

pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0).max(1)
}

const TAB_WIDTH: usize = 4;

pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut rows = vec![String::new()];
    let mut row_width = 0;
    for ch in line.chars() {
        let ch_width = char_width(ch);
        if row_width > 0 && row_width + ch_width > width {
            rows.push(String::new());
            row_width = 0;
        }
        if let Some(row) = rows.last_mut() {
            row.push(ch);
        }
        row_width += ch_width;
    }
    rows
}

/// Makes one line of host-provided text safe to draw inside the dialog box.
/// Colour sequences (`ESC [ ... final`) are removed, tabs become spaces, and
/// any other control character, a lone ESC included, becomes a single space.
pub fn sanitize_for_tui(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut col = 0_usize;
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\x1b' if chars.peek() == Some(&'[') => {
                chars.next();
                let _ = chars.find(|code| ('\x40'..='\x7e').contains(code));
            }
            '\r' => {}
            '\t' => {
                let spaces = TAB_WIDTH - col % TAB_WIDTH;
                out.extend(std::iter::repeat(' ').take(spaces));
                col += spaces;
            }
            c if c.is_control() => {
                out.push(' ');
                col += 1;
            }
            c => {
                out.push(c);
                col += char_width(c);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{sanitize_for_tui, wrap_line};

    #[test]
    fn wrap_line_splits_on_display_width() {
        assert_eq!(wrap_line("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_line("リセット", 4), vec!["リセ", "ット"]);
        assert!(wrap_line("abc", 0).is_empty());
    }

    #[test]
    fn wrap_line_keeps_empty_line() {
        assert_eq!(wrap_line("", 10), vec![String::new()]);
    }

    #[test]
    fn sanitize_strips_colour_sequences() {
        let value = "\x1b[1;31mdisk full\x1b[0m: quota";
        assert_eq!(sanitize_for_tui(value), "disk full: quota");
    }

    #[test]
    fn sanitize_blanks_lone_escape() {
        assert_eq!(sanitize_for_tui("a\x1bb\x1b"), "a b ");
    }

    #[test]
    fn sanitize_expands_tabs_and_drops_carriage_returns() {
        assert_eq!(sanitize_for_tui("a\tb\r"), "a   b");
        assert_eq!(sanitize_for_tui("\tx"), "    x");
    }

    #[test]
    fn sanitize_replaces_other_controls() {
        assert_eq!(sanitize_for_tui("a\x07b"), "a b");
    }
}
