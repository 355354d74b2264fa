//! Report formatting utilities for terminal output

use crate::models::Money;

/// Formats money with the configured symbol and optional ANSI color
#[derive(Debug, Clone)]
pub struct MoneyFormatter {
    symbol: String,
    color: bool,
}

impl MoneyFormatter {
    pub fn new(symbol: impl Into<String>, color: bool) -> Self {
        Self {
            symbol: symbol.into(),
            color,
        }
    }

    pub fn plain(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.symbol)
    }

    /// Green when `good`, red otherwise; uncolored for zero
    pub fn signal(&self, amount: Money, good: bool) -> String {
        let text = self.plain(amount);
        if !self.color || amount.is_zero() {
            return text;
        }
        if good {
            format!("\x1b[32m{}\x1b[0m", text)
        } else {
            format!("\x1b[31m{}\x1b[0m", text)
        }
    }
}

impl Default for MoneyFormatter {
    fn default() -> Self {
        Self::new("$", false)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        return format!("{:.2}%", pct);
    }

    let text = format!("{:.1}", pct);
    // Whole percentages of two digits or more drop the trailing ".0"
    match text.strip_suffix(".0") {
        Some(whole) if pct.abs() >= 10.0 => format!("{}%", whole),
        _ => format!("{}%", text),
    }
}

/// Draw a bar of `ratio * width` filled cells, clamped to `[0, width]`
pub fn format_bar(ratio: f64, width: usize) -> String {
    let filled = if ratio.is_finite() && ratio > 0.0 {
        ((ratio * width as f64).round() as usize).min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
