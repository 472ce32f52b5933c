//! Number formatting shared by the text reports

/// Format `value` with `precision` significant digits in "general" notation
///
/// Follows the `%g` conversion of C's printf: fixed notation unless the
/// decimal exponent is below -4 or at least `precision`, in which case
/// scientific notation with a signed two-digit exponent is used. Trailing
/// zeros (and a trailing decimal point) are removed.
///
/// ```
/// use collocate_core::format_general;
///
/// assert_eq!(format_general(100.0, 3), "100");
/// assert_eq!(format_general(100.0 / 3.0, 3), "33.3");
/// assert_eq!(format_general(0.000012345, 3), "1.23e-05");
/// ```
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Rounding to the requested digits may bump the exponent (99.96 -> 1.00e2)
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        format!("{}e{:+03}", strip_trailing_zeros(mantissa), exponent)
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
