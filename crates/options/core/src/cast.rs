//! Total coercion rules for block arguments.
//!
//! Both casts are total: every [`ArgValue`] maps to a `bool` or a finite-or-
//! infinite `f64`, and nothing here can fail. Malformed input degrades to
//! `false` / `0` so a running project is never halted by a bad argument.

use crate::value::ArgValue;

/// Casts a block argument to a boolean.
///
/// - booleans pass through
/// - numbers are `false` when zero or NaN
/// - text is `false` when empty, `"0"`, or `"false"` in any letter case
/// - an empty argument is `false`
pub fn to_boolean(value: &ArgValue) -> bool {
    match value {
        ArgValue::Bool(flag) => *flag,
        ArgValue::Number(number) => *number != 0.0 && !number.is_nan(),
        ArgValue::Text(text) => {
            !(text.is_empty() || text == "0" || text.eq_ignore_ascii_case("false"))
        }
        ArgValue::Empty => false,
    }
}

/// Casts a block argument to a number, substituting `0` for anything that
/// does not parse or parses to NaN.
///
/// Infinities survive the cast; callers that accept an unbounded sentinel
/// (see [`crate::CloneLimit`]) rely on that.
pub fn to_number(value: &ArgValue) -> f64 {
    let number = match value {
        ArgValue::Bool(true) => 1.0,
        ArgValue::Bool(false) | ArgValue::Empty => 0.0,
        ArgValue::Number(number) => *number,
        ArgValue::Text(text) => parse_number(text),
    };

    if number.is_nan() { 0.0 } else { number }
}

/// Formats a number the way the editor displays reporter output.
pub fn format_number(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_owned()
    } else if number == f64::INFINITY {
        "Infinity".to_owned()
    } else if number == f64::NEG_INFINITY {
        "-Infinity".to_owned()
    } else if number == 0.0 {
        // Covers negative zero.
        "0".to_owned()
    } else if number.abs() >= 1e21 || number.abs() < 1e-6 {
        exponential(number)
    } else {
        number.to_string()
    }
}

/// Shortest exponential form with an explicit exponent sign: `1e+21`, `1.5e-7`.
fn exponential(number: f64) -> String {
    let formatted = format!("{number:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Parses numeric text, returning NaN on failure.
///
/// Accepts surrounding whitespace, decimal literals with optional sign and
/// exponent, unsigned `0x`/`0o`/`0b` integers, and `Infinity` with optional
/// sign. Empty text is zero. Rust-only spellings (`inf`, `nan`, `1_000`) are
/// rejected.
fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(number) = parse_radix(trimmed) {
        return number;
    }

    let (sign, body) = match trimmed.as_bytes()[0] {
        b'+' => (1.0, &trimmed[1..]),
        b'-' => (-1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    if body == "Infinity" {
        return sign * f64::INFINITY;
    }

    let well_formed = body
        .bytes()
        .next()
        .is_some_and(|first| first.is_ascii_digit() || first == b'.')
        && body
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !well_formed {
        return f64::NAN;
    }

    body.parse::<f64>().map_or(f64::NAN, |number| sign * number)
}

fn parse_radix(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    // Accumulated in f64 so literals wider than 64 bits still round.
    let number = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|digit| acc * f64::from(radix) + f64::from(digit))
    });
    Some(number.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> ArgValue {
        ArgValue::text(value)
    }

    #[test]
    fn boolean_cast_of_text() {
        assert!(to_boolean(&text("true")));
        assert!(to_boolean(&text("enabled")));
        assert!(to_boolean(&text("1")));
        assert!(to_boolean(&text(" ")));
        assert!(!to_boolean(&text("false")));
        assert!(!to_boolean(&text("FALSE")));
        assert!(!to_boolean(&text("False")));
        assert!(!to_boolean(&text("0")));
        assert!(!to_boolean(&text("")));
    }

    #[test]
    fn boolean_cast_of_numbers_and_empty() {
        assert!(to_boolean(&ArgValue::Number(1.0)));
        assert!(to_boolean(&ArgValue::Number(-0.5)));
        assert!(!to_boolean(&ArgValue::Number(0.0)));
        assert!(!to_boolean(&ArgValue::Number(f64::NAN)));
        assert!(to_boolean(&ArgValue::Bool(true)));
        assert!(!to_boolean(&ArgValue::Bool(false)));
        assert!(!to_boolean(&ArgValue::Empty));
    }

    #[test]
    fn number_cast_of_decimal_text() {
        assert_eq!(to_number(&text("30")), 30.0);
        assert_eq!(to_number(&text("  60 ")), 60.0);
        assert_eq!(to_number(&text("-12.5")), -12.5);
        assert_eq!(to_number(&text("+4")), 4.0);
        assert_eq!(to_number(&text(".5")), 0.5);
        assert_eq!(to_number(&text("5.")), 5.0);
        assert_eq!(to_number(&text("1e3")), 1000.0);
    }

    #[test]
    fn number_cast_of_radix_text() {
        assert_eq!(to_number(&text("0x1F")), 31.0);
        assert_eq!(to_number(&text("0o17")), 15.0);
        assert_eq!(to_number(&text("0b101")), 5.0);
        assert_eq!(to_number(&text("0xZZ")), 0.0);
        assert_eq!(to_number(&text("0x+1")), 0.0);
        assert_eq!(to_number(&text("0x")), 0.0);
    }

    #[test]
    fn radix_text_wider_than_64_bits() {
        assert_eq!(to_number(&text("0x10000000000000000")), 18446744073709551616.0);
        assert_eq!(format_number(to_number(&text("0x10000000000000000"))), "18446744073709552000");
        let wide_binary = format!("0b1{}", "0".repeat(70));
        assert_eq!(to_number(&text(&wide_binary)), 2f64.powi(70));
    }

    #[test]
    fn number_cast_substitutes_zero() {
        assert_eq!(to_number(&text("not-a-number")), 0.0);
        assert_eq!(to_number(&text("")), 0.0);
        assert_eq!(to_number(&text(".")), 0.0);
        assert_eq!(to_number(&text("1e")), 0.0);
        assert_eq!(to_number(&text("NaN")), 0.0);
        assert_eq!(to_number(&text("inf")), 0.0);
        assert_eq!(to_number(&text("infinity")), 0.0);
        assert_eq!(to_number(&text("1_000")), 0.0);
        assert_eq!(to_number(&ArgValue::Number(f64::NAN)), 0.0);
        assert_eq!(to_number(&ArgValue::Empty), 0.0);
    }

    #[test]
    fn number_cast_keeps_infinity() {
        assert_eq!(to_number(&text("Infinity")), f64::INFINITY);
        assert_eq!(to_number(&text("+Infinity")), f64::INFINITY);
        assert_eq!(to_number(&text("-Infinity")), f64::NEG_INFINITY);
        assert_eq!(to_number(&ArgValue::Number(f64::INFINITY)), f64::INFINITY);
    }

    #[test]
    fn number_cast_of_booleans() {
        assert_eq!(to_number(&ArgValue::Bool(true)), 1.0);
        assert_eq!(to_number(&ArgValue::Bool(false)), 0.0);
    }

    #[test]
    fn formats_like_editor_output() {
        assert_eq!(format_number(30.0), "30");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn formats_extreme_magnitudes_in_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.5e300), "-1.5e+300");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(2.5e-10), "2.5e-10");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }
}
