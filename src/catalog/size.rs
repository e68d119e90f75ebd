//! src/catalog/size.rs
//! ============================================================================
//! # Size Codec: Human-Readable Size Literals
//!
//! Seed catalogs carry sizes as display literals ("2.1 GB", "145 MB"). The
//! codec converts them to byte counts for sorting/aggregation and back for
//! display. Malformed literals are *not* errors: they parse to zero bytes,
//! which keeps sorting total over arbitrary seed data.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Parse a size literal of the form `<number><optional space><unit>` into a
/// byte count. Unit is case-insensitive, multiplier is 1024^index.
///
/// Anything that does not match the form yields `0` (silent-failure policy).
pub fn parse_size(text: &str) -> u64 {
    let text = text.trim();
    let split = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let (number, rest) = text.split_at(split);

    let Ok(value) = number.parse::<f64>() else {
        return 0;
    };
    let Some(index) = UNITS
        .iter()
        .position(|u| u.eq_ignore_ascii_case(rest.trim()))
    else {
        return 0;
    };

    (value * 1024f64.powi(index as i32)).round() as u64
}

/// Format a byte count as a size literal with one decimal place, using the
/// largest unit whose scaled value is >= 1. Inverts [`parse_size`] for
/// well-formed inputs up to one-decimal rounding.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_owned();
    }
    let index = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let index = index.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(index as i32);
    format!("{value:.1} {}", UNITS[index])
}

// ------------------------------------------------------------------------- //
// Tests
// ------------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_units() {
        assert_eq!(parse_size("512 B"), 512);
        assert_eq!(parse_size("4 KB"), 4 * 1024);
        assert_eq!(parse_size("145 MB"), 145 * 1024 * 1024);
        assert_eq!(parse_size("2.1 GB"), (2.1f64 * 1024f64.powi(3)).round() as u64);
        assert_eq!(parse_size("1 TB"), 1024u64.pow(4));
    }

    #[test]
    fn unit_is_case_insensitive_and_space_optional() {
        assert_eq!(parse_size("4kb"), 4 * 1024);
        assert_eq!(parse_size("4 Kb"), 4 * 1024);
        assert_eq!(parse_size("  4 KB  "), 4 * 1024);
    }

    #[test]
    fn malformed_literals_parse_to_zero() {
        assert_eq!(parse_size("garbage"), 0);
        assert_eq!(parse_size(""), 0);
        assert_eq!(parse_size("123"), 0);
        assert_eq!(parse_size("MB"), 0);
        assert_eq!(parse_size("1.2.3 GB"), 0);
        assert_eq!(parse_size("4 PB"), 0);
    }

    #[test]
    fn formats_zero_as_zero_bytes() {
        assert_eq!(format_size(0), "0 B");
    }

    #[test]
    fn format_picks_largest_unit() {
        assert_eq!(format_size(512), "512.0 B");
        assert_eq!(format_size(4 * 1024), "4.0 KB");
        assert_eq!(format_size(1024u64.pow(3)), "1.0 GB");
        assert_eq!(format_size(1024u64.pow(3) - 1), "1024.0 MB");
    }

    #[test]
    fn round_trips_within_one_decimal() {
        for literal in ["2.1 GB", "24.5 GB", "145.0 MB", "4.0 KB", "8.4 GB"] {
            let bytes = parse_size(literal);
            assert_eq!(format_size(bytes), literal, "round trip of {literal}");
        }
    }
}
