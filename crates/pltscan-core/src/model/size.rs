//! Size formatting utilities for the run summary.
//!
//! Byte counts are `u64`; floating point is only used at the
//! display-formatting boundary.

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Binary units (KiB = 1024) labelled with the common short forms.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else if b < GB {
        format!("{:.1} MB", b / MB)
    } else {
        format!("{:.2} GB", b / GB)
    }
}

/// Format a file count with thousand separators.
pub fn format_count(count: u64) -> String {
    let s = count.to_string();
    if s.len() <= 3 {
        return s;
    }
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}
