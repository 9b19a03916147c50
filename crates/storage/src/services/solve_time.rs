use std::sync::LazyLock;

use regex::Regex;

/// Sentinel for an invalid attempt.
pub const DNF: i64 = -1;

/// `(H:)?(MM:)?SS.CC`, 1-2 digits per field.
static DISPLAY_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d{1,2}):)?(?:(\d{1,2}):)?(\d{1,2})\.(\d{1,2})$")
        .expect("display time regex is valid")
});

/// Decodes the packed timer form `hours*1_000_000 + minutes*10_000 +
/// seconds*100 + centiseconds` into milliseconds. Negative input is a DNF.
/// Returns `None` when the hour field would overflow the millisecond range;
/// the caller keeps the old value, same as for a malformed display string.
pub fn parse_compressed(packed: i64) -> Option<i64> {
    if packed < 0 {
        return Some(DNF);
    }

    let hours = packed / 1_000_000;
    let minutes = packed / 10_000 % 100;
    let seconds = packed / 100 % 100;
    let centis = packed % 100;

    hours
        .checked_mul(3_600_000)?
        .checked_add(minutes * 60_000 + seconds * 1_000 + centis * 10)
}

/// Parses a punctuated time string into milliseconds. A single fraction
/// digit is tenths, two digits are hundredths. Returns `None` for anything
/// that does not match the accepted shape; the caller keeps the old value.
pub fn parse_display(input: &str) -> Option<i64> {
    let caps = DISPLAY_TIME.captures(input.trim())?;

    let field = |i: usize| -> i64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    // With one colon the leading field is minutes, with two it is hours.
    let (hours, minutes) = if caps.get(2).is_some() {
        (field(1), field(2))
    } else {
        (0, field(1))
    };
    let seconds = field(3);

    let frac = caps.get(4)?.as_str();
    let centis: i64 = frac.parse().ok()?;
    let centis = if frac.len() == 1 { centis * 10 } else { centis };

    Some(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + centis * 10)
}

/// Renders milliseconds as `H:MM:SS.C`, `M:SS.C` or `S.C`, truncated to a
/// decisecond. `None` is a DNS, negative a DNF.
pub fn format_ms(value: Option<i64>) -> String {
    let Some(ms) = value else {
        return "DNS".to_string();
    };
    if ms < 0 {
        return "DNF".to_string();
    }

    let total_seconds = ms / 1_000;
    let deci = ms % 1_000 / 100;
    let hours = total_seconds / 3_600;
    let minutes = total_seconds % 3_600 / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}.{deci}")
    } else if minutes > 0 {
        format!("{minutes}:{seconds:02}.{deci}")
    } else {
        format!("{seconds}.{deci}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compressed_packs_units() {
        // 1h 01m 05s 00cs
        assert_eq!(parse_compressed(1_010_500), Some(3_665_000));
        // 1m 05s
        assert_eq!(parse_compressed(10_500), Some(65_000));
        // 12.34s
        assert_eq!(parse_compressed(1_234), Some(12_340));
    }

    #[test]
    fn test_parse_compressed_negative_is_dnf() {
        assert_eq!(parse_compressed(-1), Some(DNF));
        assert_eq!(parse_compressed(-1_234), Some(DNF));
    }

    #[test]
    fn test_parse_compressed_rejects_overflowing_hours() {
        assert_eq!(parse_compressed(i64::MAX), None);
        assert_eq!(parse_compressed(3_000_000_000_000_000_000), None);
    }

    #[test]
    fn test_parse_display_forms() {
        assert_eq!(parse_display("12.34"), Some(12_340));
        assert_eq!(parse_display("0.5"), Some(500));
        assert_eq!(parse_display("1:05.0"), Some(65_000));
        assert_eq!(parse_display("1:01:05.0"), Some(3_665_000));
    }

    #[test]
    fn test_parse_display_rejects_malformed() {
        assert_eq!(parse_display(""), None);
        assert_eq!(parse_display("abc"), None);
        assert_eq!(parse_display("12"), None);
        assert_eq!(parse_display("1:2:3:4.5"), None);
        assert_eq!(parse_display("12.345"), None);
    }

    #[test]
    fn test_format_sentinels() {
        assert_eq!(format_ms(None), "DNS");
        assert_eq!(format_ms(Some(DNF)), "DNF");
    }

    #[test]
    fn test_format_drops_leading_zero_units() {
        assert_eq!(format_ms(Some(500)), "0.5");
        assert_eq!(format_ms(Some(12_340)), "12.3");
        assert_eq!(format_ms(Some(65_000)), "1:05.0");
        assert_eq!(format_ms(Some(3_665_000)), "1:01:05.0");
    }

    #[test]
    fn test_round_trip_within_decisecond() {
        for ms in [500i64, 65_000, 3_665_000] {
            let parsed = parse_display(&format_ms(Some(ms))).unwrap();
            assert!((parsed - ms).abs() < 100, "{ms} -> {parsed}");
        }
    }
}
