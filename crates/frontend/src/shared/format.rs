//! Display formatting shared by the dashboard widgets

/// Formats a duration as `45s` or `2m30s`.
pub fn format_duration(secs: u32) -> String {
    let minutes = secs / 60;
    let seconds = secs % 60;
    if minutes == 0 {
        format!("{}s", seconds)
    } else if seconds == 0 {
        format!("{}m", minutes)
    } else {
        format!("{}m{}s", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(12), "12s");
        assert_eq!(format_duration(150), "2m30s");
        assert_eq!(format_duration(195), "3m15s");
        assert_eq!(format_duration(120), "2m");
    }
}
