/// Number of significant digits kept when a value is rendered.
pub const SIGNIFICANT_DIGITS: usize = 4;

/// Decimal exponent from which scientific notation takes over.
const MAX_FIXED_EXPONENT: i32 = 4;
/// Smallest decimal exponent still rendered in fixed notation.
const MIN_FIXED_EXPONENT: i32 = -4;

/// Formats a value with at most four significant digits.
///
/// The rules follow the `%.4g` conversion: the value is first rounded to four
/// significant digits; if the resulting decimal exponent lies in `[-4, 4)` it
/// is written in fixed notation, otherwise as `d.ddde±XX`. Trailing zeros of
/// the fraction and a trailing decimal point are removed in both cases.
/// Infinities render as `inf` / `-inf`, NaN as `nan`, and both zeros as `0`.
///
/// # Parameters
/// - `value`: The number to render.
///
/// # Returns
/// The textual form, never empty.
///
/// # Example
/// ```
/// use grd::util::format::format_number;
///
/// assert_eq!(format_number(10.0 / 4.0), "2.5");
/// assert_eq!(format_number(1.0 / 3.0), "0.3333");
/// assert_eq!(format_number(100.0), "100");
/// assert_eq!(format_number(123_456.0), "1.235e+05");
/// assert_eq!(format_number(0.0001), "0.0001");
/// assert_eq!(format_number(-0.000_012), "-1.2e-05");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = SIGNIFICANT_DIGITS - 1;
    let scientific = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let formatted = if (MIN_FIXED_EXPONENT..MAX_FIXED_EXPONENT).contains(&exponent) {
        let decimals = usize::try_from(MAX_FIXED_EXPONENT - 1 - exponent).unwrap_or_default();
        strip_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", strip_fraction(mantissa), exponent.unsigned_abs())
    };

    if formatted.is_empty() { "0".to_string() } else { formatted }
}

/// Removes trailing zeros after a decimal point, then the point itself.
fn strip_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
