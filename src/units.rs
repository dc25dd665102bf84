//! Hex and ether-unit conversions.

use crate::error::Error;
use crate::Result;

const WEI_PER_ETHER: f64 = 1e18;
const GWEI_PER_ETHER: f64 = 1e9;

pub fn add_0x(s: impl AsRef<str>) -> String {
    format!("0x{}", s.as_ref())
}

/// Signed hex to decimal. Accepts `0x10`, `10` and `-0x8`.
pub fn hex_to_dec(s: &str) -> Result<i128> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let digits = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .unwrap_or(rest);
    let value = i128::from_str_radix(digits, 16).map_err(|e| Error::InvalidHex(format!("{s:?}: {e}")))?;
    Ok(if negative { -value } else { value })
}

pub fn wei_to_ether(wei: u128) -> f64 {
    wei as f64 / WEI_PER_ETHER
}

pub fn gwei_to_ether(gwei: u128) -> f64 {
    gwei as f64 / GWEI_PER_ETHER
}

/// Rounds to the nearest wei. Negative and NaN inputs give 0; values past
/// `u128::MAX` saturate.
pub fn ether_to_wei(ether: f64) -> u128 {
    (ether * WEI_PER_ETHER).round() as u128
}

/// Same rounding and saturation as [`ether_to_wei`].
pub fn ether_to_gwei(ether: f64) -> u128 {
    (ether * GWEI_PER_ETHER).round() as u128
}
