use ratatui::text::Span;

pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Display width in terminal cells (`⭐` takes two).
pub fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Truncate to `width` cells and right-pad with spaces to exactly `width`.
pub fn fit(text: &str, width: usize) -> String {
    let mut fitted = truncate(text, width);
    while display_width(&fitted) > width {
        fitted.pop();
    }
    let pad = width.saturating_sub(display_width(&fitted));
    fitted.extend(std::iter::repeat_n(' ', pad));
    fitted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Laptop", 10), "Laptop");
        assert_eq!(truncate("Wireless Mouse", 10), "Wireles...");
        assert_eq!(truncate("Wireless Mouse", 3), "Wir");
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("Desk", 6), "Desk  ");
        assert_eq!(fit("Coffee Maker", 8), "Coffe...");
        assert_eq!(fit("", 2), "  ");
    }

    #[test]
    fn test_fit_counts_wide_glyphs() {
        let fitted = fit("⭐ 4.5", 8);
        assert_eq!(display_width(&fitted), 8);
        assert!(fitted.starts_with("⭐ 4.5"));
    }
}
