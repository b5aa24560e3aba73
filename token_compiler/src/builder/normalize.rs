//! Value normalization for raw captures

use crate::tokens::Offset;

/// Normalize Flutter hex digits to CSS notation
///
/// `RRGGBB` becomes `#RRGGBB`. `AARRGGBB` becomes `#RRGGBB` when the alpha is
/// `FF`, otherwise `#RRGGBBAA`. Output is always uppercase. Translucent
/// values are deliberately reordered from Flutter's ARGB into CSS `#RRGGBBAA`
/// rather than kept in source order.
pub fn normalize_hex(raw: &str) -> Option<String> {
    if !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digits = raw.to_ascii_uppercase();

    match digits.len() {
        6 => Some(format!("#{}", digits)),
        8 => {
            let (alpha, rgb) = digits.split_at(2);
            if alpha == "FF" {
                Some(format!("#{}", rgb))
            } else {
                Some(format!("#{}{}", rgb, alpha))
            }
        }
        _ => None,
    }
}

/// Parse a decimal literal; rejects `.`, `1.2.3` and non-finite values
pub fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whole milliseconds only
pub fn parse_millis(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Parse the argument list of `Offset(<x>, <y>)`
pub fn parse_offset(raw: &str) -> Option<Offset> {
    let mut parts = raw.split(',').map(str::trim).filter(|p| !p.is_empty());
    let x = parse_signed(parts.next()?)?;
    let y = parse_signed(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Offset { x, y })
}

fn parse_signed(raw: &str) -> Option<f64> {
    match raw.strip_prefix('-') {
        Some(rest) => parse_number(rest).map(|n| -n),
        None => parse_number(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize_hex("FF336699").as_deref(), Some("#336699"));
        assert_eq!(normalize_hex("ff336699").as_deref(), Some("#336699"));
        assert_eq!(normalize_hex("80000000").as_deref(), Some("#00000080"));
        assert_eq!(normalize_hex("1aFFFFFF").as_deref(), Some("#FFFFFF1A"));
        assert_eq!(normalize_hex("12ab34").as_deref(), Some("#12AB34"));
        assert_eq!(normalize_hex("12345"), None);
        assert_eq!(normalize_hex("GG336699"), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("8.0"), Some(8.0));
        assert_eq!(parse_number("16"), Some(16.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("1.2.3"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_millis("300"), Some(300));
        assert_eq!(parse_millis("150.5"), None);
        assert_eq!(parse_millis("."), None);
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset("0, 2"), Some(Offset { x: 0.0, y: 2.0 }));
        assert_eq!(parse_offset("1.5,-4"), Some(Offset { x: 1.5, y: -4.0 }));
        assert_eq!(parse_offset("0"), None);
        assert_eq!(parse_offset("0, 2, 3"), None);
        assert_eq!(parse_offset("dx, dy"), None);
    }
}
