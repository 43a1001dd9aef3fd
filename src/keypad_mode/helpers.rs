use ratatui::style::{Color, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Button colors as laid out on the calculator surface: operators green,
/// equals red, clear blue, digits dark gray.
pub fn button_style(label: &str) -> Style {
    match label {
        "/" | "*" | "-" | "+" => Style::default().fg(Color::White).bg(Color::Green),
        "=" => Style::default().fg(Color::White).bg(Color::Red),
        "C" => Style::default().fg(Color::White).bg(Color::Blue),
        _ => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

/// Width-aware wrapping for history lines. Words longer than the pane
/// (e.g. one long digit run) are split into display-width chunks.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if word.width() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut chunk = String::new();
            let mut chunk_width = 0;
            for c in word.chars() {
                let w = UnicodeWidthChar::width(c).unwrap_or(1);
                if chunk_width + w > width {
                    lines.push(std::mem::take(&mut chunk));
                    chunk_width = 0;
                }
                chunk.push(c);
                chunk_width += w;
            }
            if !chunk.is_empty() {
                lines.push(chunk);
            }
            continue;
        }

        if !current.is_empty() && current.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(wrap_text("12+3 = 15.0", 6), vec!["12+3 =", "15.0"]);
    }

    #[test]
    fn splits_overlong_words() {
        assert_eq!(wrap_text("123456789", 4), vec!["1234", "5678", "9"]);
    }

    #[test]
    fn zero_width_yields_a_single_empty_line() {
        assert_eq!(wrap_text("anything", 0), vec![String::new()]);
    }
}
