//! User-adjustable session settings.

pub const DEFAULT_THRESHOLD: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    /// Correct attempts needed before a card leaves rotation.
    pub threshold: u32,
    /// How many incomplete cards are drawn into the review set.
    pub sample_size: u32,
}

impl SessionSettings {
    pub fn new(threshold: u32, sample_size: u32) -> Self {
        Self {
            threshold,
            sample_size,
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, 0)
    }
}

/// Reads a count typed by the user from its leading digits.
///
/// Empty, non-numeric and negative input becomes 0; values past `u32::MAX` saturate.
pub fn parse_count(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..digits_len];
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("12"), 12);
        assert_eq!(parse_count(" 3 "), 3);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count("-4"), 0);
        assert_eq!(parse_count("2.5"), 2);
        assert_eq!(parse_count("7 cards"), 7);
        assert_eq!(parse_count("99999999999"), u32::MAX);
    }

    #[test]
    fn test_default_settings() {
        let settings = SessionSettings::default();
        assert_eq!(settings.threshold, DEFAULT_THRESHOLD);
        assert_eq!(settings.sample_size, 0);
    }
}
