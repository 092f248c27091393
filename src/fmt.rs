/// Formats a reading the way the page's script would print a number:
/// integral values carry no fraction, negative zero prints as `0`, and
/// magnitudes from `1e21` up or below `1e-6` switch to exponent form.
pub fn fmt_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        return fmt_exponent(value);
    }
    format!("{value}")
}

fn fmt_exponent(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(fmt_number(22.0), "22");
        assert_eq!(fmt_number(-3.0), "-3");
    }

    #[test]
    fn fractions_keep_shortest_digits() {
        assert_eq!(fmt_number(22.5), "22.5");
        assert_eq!(fmt_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(fmt_number(1e21), "1e+21");
        assert_eq!(fmt_number(-2.5e22), "-2.5e+22");
        assert_eq!(fmt_number(1e-7), "1e-7");
        assert_eq!(fmt_number(-1.5e-7), "-1.5e-7");
    }

    #[test]
    fn exponent_thresholds_stay_positional() {
        assert_eq!(fmt_number(1e20), "100000000000000000000");
        assert_eq!(fmt_number(0.000001), "0.000001");
    }

    #[test]
    fn special_values() {
        assert_eq!(fmt_number(-0.0), "0");
        assert_eq!(fmt_number(f64::NAN), "NaN");
        assert_eq!(fmt_number(f64::INFINITY), "Infinity");
        assert_eq!(fmt_number(f64::NEG_INFINITY), "-Infinity");
    }
}
