use std::fmt;

const SIGNIFICANT_DIGITS: usize = 6;

/// Renders an `f64` in general short form: six significant digits with
/// trailing zeros dropped, switching to scientific notation (`1e-05`,
/// `1.23457e+06`) when the decimal exponent is below -4 or at least 6.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortFloat(pub f64);

impl fmt::Display for ShortFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
        }
        if v == 0.0 {
            return f.write_str(if v.is_sign_negative() { "-0" } else { "0" });
        }

        // The exponent must come from the already-rounded value: 9.999999
        // rounds to 10 and so prints in fixed form with no decimals.
        let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, v);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return f.write_str(&scientific);
        };
        let Ok(exponent) = exponent.parse::<i32>() else {
            return f.write_str(&scientific);
        };

        if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
        } else {
            let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
            let fixed = format!("{:.*}", decimals, v);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
