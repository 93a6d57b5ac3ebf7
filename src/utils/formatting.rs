//! Formatting utilities used for CLI and report outputs.

use unicode_width::UnicodeWidthStr;

/// Left-align `s` in `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// Right-align `s` in `width` terminal columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{s}", " ".repeat(pad))
}

pub fn mins2readable(mins: u64, short: bool) -> String {
    let hours = mins / 60;
    let minutes = mins % 60;

    if short {
        // es: 02:25
        format!("{:02}:{:02}", hours, minutes)
    } else {
        // es: 02h 25m
        format!("{:02}h {:02}m", hours, minutes)
    }
}

/// Escape text for HTML element content and attribute values.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
