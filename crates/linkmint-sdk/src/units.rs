//! Decimal unit formatting and parsing for token amounts

use linkmint_primitives::{U256, U512};

use crate::SdkError;

/// Decimals of the USD stablecoin
pub const USD_DECIMALS: u32 = 6;

const PERCENT_SCALE: u64 = 10_000;

fn ten_pow(decimals: u32) -> Result<U256, SdkError> {
    U256::from(10u8)
        .checked_pow(U256::from(decimals))
        .ok_or_else(|| SdkError::InvalidUnits(format!("{} decimals exceed uint256", decimals)))
}

/// Render `value` scaled down by `10^decimals`.
///
/// The fraction is truncated to `precision` digits and its trailing zeros
/// dropped; a value with nothing left after the point prints as an integer.
pub fn format_units(value: U256, decimals: u32, precision: usize) -> Result<String, SdkError> {
    if decimals == 0 {
        return Ok(value.to_string());
    }
    let base = ten_pow(decimals)?;
    Ok(format_scaled(value, base, decimals as usize, precision))
}

fn format_scaled(value: U256, base: U256, decimals: usize, precision: usize) -> String {
    let (integer, fraction) = value.div_mod(base);
    if fraction.is_zero() {
        return integer.to_string();
    }
    let digits = format!("{:0>width$}", fraction.to_string(), width = decimals);
    let truncated = digits[..precision.min(decimals)].trim_end_matches('0');
    if truncated.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, truncated)
    }
}

/// Parse a decimal amount into base units of `10^-decimals`.
///
/// Underscores are ignored. Extra fraction digits are truncated.
pub fn parse_units(text: &str, decimals: u32) -> Result<U256, SdkError> {
    let invalid = || SdkError::InvalidUnits(text.to_string());
    let cleaned: String = text.trim().chars().filter(|c| *c != '_').collect();
    let (whole, fraction) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !is_digits(whole) || !is_digits(fraction) || (whole.is_empty() && fraction.is_empty()) {
        return Err(invalid());
    }

    let base = ten_pow(decimals)?;
    let whole = if whole.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(whole).map_err(|_| invalid())?
    };
    let mut result = whole.checked_mul(base).ok_or_else(invalid)?;

    if !fraction.is_empty() && decimals > 0 {
        let padded: String = fraction
            .chars()
            .chain(std::iter::repeat('0'))
            .take(decimals as usize)
            .collect();
        let fraction = U256::from_dec_str(&padded).map_err(|_| invalid())?;
        result = result.checked_add(fraction).ok_or_else(invalid)?;
    }
    Ok(result)
}

/// USD stablecoin amount with cents, e.g. `$12.5`
pub fn format_usd(value: U256) -> String {
    let base = U256::from(10u64.pow(USD_DECIMALS));
    format!("${}", format_scaled(value, base, USD_DECIMALS as usize, 2))
}

/// `numerator / denominator` as a percentage with up to four decimals
pub fn format_percent(numerator: U256, denominator: U256) -> String {
    if denominator.is_zero() {
        return "0%".to_string();
    }
    let ratio = numerator.full_mul(U256::from(PERCENT_SCALE * 100)) / U512::from(denominator);
    let scale = U512::from(PERCENT_SCALE);
    let (whole, fractional) = (ratio / scale, ratio % scale);

    let digits = format!("{:0>4}", fractional.to_string());
    let digits = digits.trim_end_matches('0');
    if digits.is_empty() {
        format!("{}%", whole)
    } else {
        format!("{}.{}%", whole, digits)
    }
}
