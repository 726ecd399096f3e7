//! Progress-bar fill: a single width write on first enter.
//!
//! The engine sets the stored percentage in one step; the visual sweep is
//! the stylesheet's transition, not ours. Everything interesting here is
//! parsing the stored value strictly enough to fail closed at mount.

/// Parse a stored width percentage: "75", "75%", "62.5%". Values outside
/// [0, 100] or non-finite are rejected rather than clamped.
pub fn parse_percent(raw: &str) -> Option<f32> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    let value: f32 = number.parse().ok()?;
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_suffixed_forms() {
        assert_eq!(parse_percent("75"), Some(75.0));
        assert_eq!(parse_percent("75%"), Some(75.0));
        assert_eq!(parse_percent(" 62.5% "), Some(62.5));
        assert_eq!(parse_percent("0"), Some(0.0));
        assert_eq!(parse_percent("100%"), Some(100.0));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert_eq!(parse_percent("120"), None);
        assert_eq!(parse_percent("-5%"), None);
        assert_eq!(parse_percent("wide"), None);
        assert_eq!(parse_percent(""), None);
        assert_eq!(parse_percent("%"), None);
        assert_eq!(parse_percent("inf"), None);
    }
}
