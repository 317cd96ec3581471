use std::path::{Path, PathBuf};
use std::time::Duration;

const UNITS: &[&str] = &["KB", "MB", "GB", "TB", "PB", "EB"];

/// Home directory, if the platform can tell us.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Format byte count as human-readable string.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// Parse a human-readable age ("90s", "30m", "24h", "7d") into a duration.
/// A bare number is taken as seconds and "0" disables the age filter.
pub fn parse_age(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('d') {
        (n, 86_400u64)
    } else if let Some(n) = s.strip_suffix('h') {
        (n, 3_600)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1)
    } else {
        (s, 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid age: '{s}'"))?;

    num.checked_mul(multiplier)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("Age too large: '{s}'"))
}

/// Render a duration the way `parse_age` reads it back.
pub fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    if secs == 0 {
        "any age".to_string()
    } else if secs % 86_400 == 0 {
        format!("{}d", secs / 86_400)
    } else if secs % 3_600 == 0 {
        format!("{}h", secs / 3_600)
    } else if secs % 60 == 0 {
        format!("{}m", secs / 60)
    } else {
        format!("{secs}s")
    }
}

/// Shorten a path for display by replacing home dir with ~.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_size_boundaries() {
        let cases = [
            (0, "0 B"),
            (512, "512 B"),
            (1023, "1023 B"),
            (1024, "1.00 KB"),
            (1536, "1.50 KB"),
            (1_048_576, "1.00 MB"),
            (1_073_741_824, "1.00 GB"),
            (1_099_511_627_776, "1.00 TB"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_size(input), expected, "format_size({input})");
        }
    }

    #[test]
    fn format_size_max_stays_in_exabytes() {
        assert_eq!(format_size(u64::MAX), "16.00 EB");
    }

    #[test]
    fn parse_age_suffixes() {
        assert_eq!(parse_age("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_age("90s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_age("30m").unwrap(), Duration::from_secs(1_800));
        assert_eq!(parse_age(" 24h ").unwrap(), Duration::from_secs(86_400));
        assert_eq!(parse_age("7d").unwrap(), Duration::from_secs(604_800));
        assert_eq!(parse_age("45").unwrap(), Duration::from_secs(45));
    }

    #[test]
    fn parse_age_rejects_garbage() {
        assert!(parse_age("").is_err());
        assert!(parse_age("soon").is_err());
        assert!(parse_age("-1d").is_err());
        assert!(parse_age("1.5h").is_err());
        assert!(parse_age(&format!("{}d", u64::MAX)).is_err());
    }

    #[test]
    fn format_age_picks_largest_whole_unit() {
        assert_eq!(format_age(Duration::ZERO), "any age");
        assert_eq!(format_age(Duration::from_secs(604_800)), "7d");
        assert_eq!(format_age(Duration::from_secs(7_200)), "2h");
        assert_eq!(format_age(Duration::from_secs(120)), "2m");
        assert_eq!(format_age(Duration::from_secs(61)), "61s");
    }
}
