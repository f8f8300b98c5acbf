//! Formatting utilities for sizes and ratios shown in the panels.

/// Format a byte count the way the panels report file sizes ("10.00 KB").
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Format a compression ratio percentage ("41.41%").
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kb() {
        assert_eq!(format_kb(10_240), "10.00 KB");
        assert_eq!(format_kb(1_536), "1.50 KB");
        assert_eq!(format_kb(0), "0.00 KB");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(41.40625), "41.41%");
        assert_eq!(format_percent(25.0), "25.00%");
    }
}
