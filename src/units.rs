//! Exact conversion between wei and decimal ETH strings.
//!
//! Display conversion is done in fixed point by scaling with 10^18 so that
//! `parse_eth(&format_eth(x)) == x` holds for every `U256`.

use ethers::{types::U256, utils::WEI_IN_ETHER};

pub const ETH_DECIMALS: usize = 18;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum UnitsError {
    #[error("malformed decimal amount: {0:?}")]
    Malformed(String),
    #[error("more than 18 fractional digits: {0:?}")]
    TooPrecise(String),
    #[error("amount does not fit in a U256: {0:?}")]
    Overflow(String),
}

/// Renders a wei quantity as a decimal ETH string, e.g. `10^18` -> `"1.0"`.
/// Trailing fractional zeros are trimmed down to a single digit.
pub fn format_eth(wei: U256) -> String {
    let (whole, frac) = wei.div_mod(WEI_IN_ETHER);
    let frac = format!("{:0>width$}", frac.to_string(), width = ETH_DECIMALS);
    let frac = frac.trim_end_matches('0');
    let frac = if frac.is_empty() { "0" } else { frac };
    format!("{whole}.{frac}")
}

/// Parses a decimal ETH string back into wei. Accepts at most 18 fractional
/// digits; anything finer has no wei representation and is rejected instead
/// of rounded.
pub fn parse_eth(amount: &str) -> Result<U256, UnitsError> {
    let (whole, frac) = match amount.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (amount, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(UnitsError::Malformed(amount.to_owned()));
    }
    if frac.len() > ETH_DECIMALS {
        return Err(UnitsError::TooPrecise(amount.to_owned()));
    }

    let whole = if whole.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(whole).map_err(|_| UnitsError::Malformed(amount.to_owned()))?
    };
    let frac = if frac.is_empty() {
        U256::zero()
    } else {
        let padded = format!("{frac:0<width$}", width = ETH_DECIMALS);
        U256::from_dec_str(&padded).map_err(|_| UnitsError::Malformed(amount.to_owned()))?
    };

    whole
        .checked_mul(WEI_IN_ETHER)
        .and_then(|wei| wei.checked_add(frac))
        .ok_or_else(|| UnitsError::Overflow(amount.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::{format_eth, parse_eth, UnitsError};
    use ethers::{types::U256, utils::WEI_IN_ETHER};

    #[test]
    fn one_ether_formats_as_one_point_zero() {
        assert_eq!(format_eth(U256::exp10(18)), "1.0");
    }

    #[test]
    fn zero_formats_as_zero_point_zero() {
        assert_eq!(format_eth(U256::zero()), "0.0");
    }

    #[test]
    fn one_wei_keeps_all_decimals() {
        assert_eq!(format_eth(U256::one()), "0.000000000000000001");
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        // 1.5 ETH
        let wei = U256::exp10(18) + U256::exp10(17) * 5_u64;
        assert_eq!(format_eth(wei), "1.5");
    }

    #[test]
    fn parse_accepts_whole_numbers() {
        assert_eq!(parse_eth("2"), Ok(U256::exp10(18) * 2_u64));
    }

    #[test]
    fn parse_accepts_bare_fraction() {
        assert_eq!(parse_eth(".5"), Ok(U256::exp10(17) * 5_u64));
    }

    #[test]
    fn parse_rejects_more_than_eighteen_decimals() {
        assert_eq!(
            parse_eth("0.0000000000000000001"),
            Err(UnitsError::TooPrecise("0.0000000000000000001".to_owned()))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse_eth("12eth"), Err(UnitsError::Malformed(_))));
        assert!(matches!(parse_eth(""), Err(UnitsError::Malformed(_))));
        assert!(matches!(parse_eth("-1"), Err(UnitsError::Malformed(_))));
    }

    #[test]
    fn parse_rejects_overflow() {
        let too_big = format!("{}", U256::MAX);
        assert!(matches!(parse_eth(&too_big), Err(UnitsError::Overflow(_))));
    }

    #[test]
    fn round_trips_exactly() {
        let samples = [
            U256::zero(),
            U256::one(),
            U256::exp10(18),
            U256::exp10(18) - 1_u64,
            U256::from(1_234_567_890_123_456_789_u64),
            U256::MAX,
        ];
        for wei in samples {
            assert_eq!(parse_eth(&format_eth(wei)), Ok(wei), "round trip of {wei}");
        }
        assert_eq!(WEI_IN_ETHER, U256::exp10(18));
    }
}
