// file: src/render/card.rs
// description: Boxed quote card layout for terminal output

use crate::models::Quote;

pub const DEFAULT_CARD_WIDTH: usize = 64;

/// Greedy word wrap on char counts. Words longer than `width` get their own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
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

    lines
}

fn pad(line: &str, width: usize) -> String {
    let len = line.chars().count();
    format!("{}{}", line, " ".repeat(width.saturating_sub(len)))
}

/// Plain lines of a card: border, quoted text, right-aligned topic, border.
pub fn layout(quote: &Quote, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(4).max(8);
    let mut lines = Vec::new();

    lines.push(format!("╭{}╮", "─".repeat(inner + 2)));

    let quoted = format!("“{}”", quote.text.trim());
    for line in wrap(&quoted, inner) {
        lines.push(format!("│ {} │", pad(&line, inner)));
    }

    let label = format!("— {}", quote.topic);
    let label_len = label.chars().count();
    let label = if label_len < inner {
        format!("{}{}", " ".repeat(inner - label_len), label)
    } else {
        label
    };
    lines.push(format!("│ {} │", pad(&label, inner)));

    lines.push(format!("╰{}╯", "─".repeat(inner + 2)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("a bb ccc dddd", 6), vec!["a bb", "ccc", "dddd"]);
        assert_eq!(wrap("supercalifragilistic", 5), vec!["supercalifragilistic"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_layout_lines_have_equal_width() {
        let quote = Quote::new(
            "wisdom",
            "The only true wisdom is in knowing you know nothing.",
        );
        let lines = layout(&quote, 30);

        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == 30), "{:?}", widths);
        assert!(lines[1].starts_with("│ “The only"));
        assert!(lines[lines.len() - 2].ends_with("— wisdom │"));
    }
}
