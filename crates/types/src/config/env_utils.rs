use crate::ConfigError;
use alloy::{
    primitives::{Address, U256},
    signers::local::PrivateKeySigner,
};
use std::env;

/// Load a variable from the environment
pub(crate) fn load_string(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::missing(key))
}

/// Load a variable from the environment
pub(crate) fn load_string_opt(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Load a variable from the environment
pub(crate) fn load_u64(key: &str) -> Result<u64, ConfigError> {
    let val = load_string(key)?;
    val.parse::<u64>().map_err(Into::into)
}

/// Load a variable from the environment
pub(crate) fn load_u64_opt(key: &str) -> Option<u64> {
    load_string_opt(key)?.parse().ok()
}

/// Load a variable from the environment
pub(crate) fn load_u128(key: &str) -> Result<u128, ConfigError> {
    let val = load_string(key)?;
    val.parse::<u128>().map_err(Into::into)
}

/// Load a variable from the environment. Accepts decimal or 0x-prefixed hex.
pub(crate) fn load_u256(key: &str) -> Result<U256, ConfigError> {
    let val = load_string(key)?;
    val.parse::<U256>().map_err(Into::into)
}

/// Load a variable from the environment
pub(crate) fn load_address(key: &str) -> Result<Address, ConfigError> {
    load_string(key)?.parse().map_err(Into::into)
}

/// Load a signing key from the environment
pub(crate) fn load_signer(key: &str) -> Result<PrivateKeySigner, ConfigError> {
    load_string(key)?.parse().map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_names_the_key() {
        let err = load_string("BIDDER_TEST_DEFINITELY_UNSET").unwrap_err();
        assert!(matches!(err, ConfigError::Var(k) if k == "BIDDER_TEST_DEFINITELY_UNSET"));
    }

    #[test]
    fn u256_accepts_decimal_and_hex() {
        std::env::set_var("BIDDER_TEST_U256_DEC", "1000000");
        std::env::set_var("BIDDER_TEST_U256_HEX", "0xf4240");
        assert_eq!(load_u256("BIDDER_TEST_U256_DEC").unwrap(), U256::from(1_000_000u64));
        assert_eq!(load_u256("BIDDER_TEST_U256_HEX").unwrap(), U256::from(1_000_000u64));
    }

    #[test]
    fn address_parses() {
        std::env::set_var(
            "BIDDER_TEST_ADDRESS",
            "0x000000000000000000000000000000000000dead",
        );
        assert_eq!(
            load_address("BIDDER_TEST_ADDRESS").unwrap(),
            alloy::primitives::address!("000000000000000000000000000000000000dead")
        );
    }
}
