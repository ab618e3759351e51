use crate::error::{Error, EstimatorResult};
use error_stack::{ResultExt, report};

/// Formats an integer amount scaled by `decimals` as an exact decimal
/// string. Trailing fractional zeros are trimmed but at least one fractional
/// digit is always kept: `format_units(1_000_000, 6) == "1.0"`.
pub fn format_units(value: u128, decimals: u8) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;

    // Split the digit string instead of dividing, any decimal count stays
    // within range
    let (whole_part, fractional_str) = if digits.len() > decimals {
        let split = digits.len() - decimals;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        ("0".to_string(), format!("{digits:0>decimals$}"))
    };

    let trimmed = fractional_str.trim_end_matches('0');

    if trimmed.is_empty() {
        format!("{whole_part}.0")
    } else {
        format!("{whole_part}.{trimmed}")
    }
}

/// Inverse of [`format_units`]. Fractional digits beyond `decimals` are
/// truncated, not rounded. Amounts that cannot be represented in `u128`
/// scaled by `decimals` are a `ParseError`.
pub fn decimal_string_to_u128(s: &str, decimals: u8) -> EstimatorResult<u128> {
    let decimals: usize = decimals.into();
    let (whole_str, fractional_str) = match s.split_once('.') {
        Some((whole, fractional)) => (whole, fractional),
        None => (s, ""),
    };

    if !fractional_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(report!(Error::ParseError)
            .attach_printable(format!("Invalid fractional digits: {fractional_str}")));
    }

    let whole_part = whole_str.parse::<u128>().change_context(Error::ParseError)?;

    let scale = 10u128.checked_pow(decimals as u32).ok_or_else(|| {
        report!(Error::ParseError).attach_printable(format!("Unsupported decimal count: {decimals}"))
    })?;

    // Safe to byte-slice, the fractional part was validated as ASCII digits
    let kept = if fractional_str.len() > decimals {
        &fractional_str[..decimals]
    } else {
        fractional_str
    };

    let fractional_part = if kept.is_empty() {
        0
    } else {
        let parsed = kept.parse::<u128>().change_context(Error::ParseError)?;
        parsed * 10u128.pow((decimals - kept.len()) as u32)
    };

    whole_part
        .checked_mul(scale)
        .and_then(|scaled| scaled.checked_add(fractional_part))
        .ok_or_else(|| {
            report!(Error::ParseError).attach_printable(format!("Amount does not fit in u128: {s}"))
        })
}

pub fn u128_to_f64(value: u128, decimals: u8) -> f64 {
    // Divide in integer space first to minimize precision loss
    match 10u128.checked_pow(decimals as u32) {
        Some(divisor) => {
            let whole_part = (value / divisor) as f64;
            let fractional_part = (value % divisor) as f64 / divisor as f64;

            whole_part + fractional_part
        }
        // Past 38 decimals the scale alone exceeds u128
        None => value as f64 / 10f64.powi(decimals as i32),
    }
}
