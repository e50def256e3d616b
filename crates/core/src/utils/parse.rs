use alloy::primitives::utils::{ParseUnits, parse_units};
use alloy::primitives::{Address, B256, U256};

use crate::types::dispatch_error::DispatchError;

pub fn parse_address(value: &str) -> Result<Address, DispatchError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DispatchError::invalid("address is empty"));
    }

    // Mixed case carries an EIP-55 checksum, single case does not.
    let hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let mixed_case = hex.chars().any(|c| c.is_ascii_lowercase())
        && hex.chars().any(|c| c.is_ascii_uppercase());
    let parsed = if mixed_case {
        Address::parse_checksummed(format!("0x{hex}"), None).map_err(|e| e.to_string())
    } else {
        trimmed.parse::<Address>().map_err(|e| e.to_string())
    };
    parsed.map_err(|e| DispatchError::invalid(format!("malformed address {trimmed:?}: {e}")))
}

/// Like [`parse_address`], but an empty string means "not configured".
pub fn parse_optional_address(value: &str) -> Result<Option<Address>, DispatchError> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_address(value).map(Some)
    }
}

pub fn parse_hash(value: &str) -> Result<B256, DispatchError> {
    let trimmed = value.trim();
    trimmed
        .parse::<B256>()
        .map_err(|e| DispatchError::invalid(format!("malformed 32 byte hash {trimmed:?}: {e}")))
}

/// Parses a decimal amount in the given unit (`wei`, `gwei`, `ether`, ...)
/// into base units.
pub fn parse_amount(value: &str, unit: &str) -> Result<U256, DispatchError> {
    let trimmed = value.trim();
    match parse_units(trimmed, unit) {
        Ok(ParseUnits::U256(amount)) => Ok(amount),
        Ok(ParseUnits::I256(_)) => Err(DispatchError::invalid(format!(
            "amount must not be negative: {trimmed}"
        ))),
        Err(e) => Err(DispatchError::invalid(format!(
            "malformed amount {trimmed:?} in {unit}: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_parse_address() {
        assert_eq!(
            parse_address(" 0xCfbCCC95E48D481128783Fa962a1828f47Fc8A42 ").unwrap(),
            address!("0xCfbCCC95E48D481128783Fa962a1828f47Fc8A42")
        );
        assert!(matches!(
            parse_address(""),
            Err(DispatchError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_address("0xCfbCCC95E48D481128783Fa962a1828f47Fc8A"),
            Err(DispatchError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_address_checks_mixed_case_checksum() {
        // First letter flipped to lower case.
        assert!(matches!(
            parse_address("0xcfbCCC95E48D481128783Fa962a1828f47Fc8A42"),
            Err(DispatchError::InvalidInput(_))
        ));
        assert_eq!(
            parse_address("0xcfbccc95e48d481128783fa962a1828f47fc8a42").unwrap(),
            address!("0xCfbCCC95E48D481128783Fa962a1828f47Fc8A42")
        );
        assert_eq!(
            parse_address("0xCFBCCC95E48D481128783FA962A1828F47FC8A42").unwrap(),
            address!("0xCfbCCC95E48D481128783Fa962a1828f47Fc8A42")
        );
    }

    #[test]
    fn test_parse_optional_address() {
        assert_eq!(parse_optional_address("").unwrap(), None);
        assert!(parse_optional_address("not an address").is_err());
    }

    #[test]
    fn test_parse_hash() {
        assert_eq!(
            parse_hash("0x0000000000000000000000000000000000000000000000000000000000000000")
                .unwrap(),
            B256::ZERO
        );
        assert!(parse_hash("0x1234").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(
            parse_amount("0.0001", "ether").unwrap(),
            U256::from(100_000_000_000_000u64)
        );
        assert_eq!(parse_amount("42", "wei").unwrap(), U256::from(42));
        assert_eq!(
            parse_amount("1.5", "gwei").unwrap(),
            U256::from(1_500_000_000u64)
        );
    }

    #[test]
    fn test_parse_amount_rejects_bad_input() {
        assert!(matches!(
            parse_amount("-1", "wei"),
            Err(DispatchError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_amount("ten", "ether"),
            Err(DispatchError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_amount("1", "furlongs"),
            Err(DispatchError::InvalidInput(_))
        ));
    }
}
