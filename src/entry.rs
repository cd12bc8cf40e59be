//! Airdrop entries and their canonical leaf encoding.
//!
//! An [`Entry`] is an `(address, amount)` pair. Its canonical byte form is the
//! `(address, uint256)` ABI tuple with the 12 padding bytes of the address word
//! stripped: 20 address bytes followed by the 32-byte big-endian amount.

use std::fmt::Display;

use primitive_types::U256;

use crate::AirdropError;

/// 20-byte account address.
pub type Address = [u8; 20];

/// Length of an encoded leaf: 20 address bytes + 32 amount bytes.
pub const ENCODED_LEN: usize = 52;

const ADDRESS_LEN: usize = 20;
const AMOUNT_LEN: usize = 32;

/// One airdrop claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Entry {
    address: Address,
    amount: U256,
}

impl Entry {
    pub fn new(address: Address, amount: U256) -> Self {
        Self { address, amount }
    }

    /// The padding filler: zero address, zero amount.
    pub fn zero() -> Self {
        Self::new([0; ADDRESS_LEN], U256::zero())
    }

    /// Parses an entry from its textual form.
    ///
    /// * `address` - 40 hex characters, with or without a `0x` prefix.
    /// * `amount` - a decimal integer, or a hex integer with a `0x` prefix.
    pub fn parse(address: &str, amount: &str) -> Result<Self, AirdropError> {
        Ok(Self::new(parse_address(address)?, parse_amount(amount)?))
    }

    /// Builds an entry from an arbitrary-length big-endian amount.
    ///
    /// Leading zero bytes are ignored; anything wider than 256 bits is rejected.
    pub fn from_be_bytes_amount(address: Address, amount: &[u8]) -> Result<Self, AirdropError> {
        let start = amount
            .iter()
            .position(|byte| *byte != 0)
            .unwrap_or(amount.len());
        let significant = &amount[start..];
        if significant.len() > AMOUNT_LEN {
            return Err(AirdropError::AmountOutOfRange(format!(
                "0x{}",
                hex::encode(significant)
            )));
        }
        Ok(Self::new(address, U256::from_big_endian(significant)))
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn amount(&self) -> U256 {
        self.amount
    }

    /// Zero-amount entries are treated as absent by the unbalanced builder.
    pub fn is_zero_amount(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns the canonical leaf input for this entry.
    pub fn encode(&self) -> [u8; ENCODED_LEN] {
        encode_leaf(&self.address, self.amount)
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Entry {{ address: 0x{}, amount: {} }}",
            hex::encode(self.address),
            self.amount
        )
    }
}

/// Packs `address` and `amount` into the 52-byte leaf input.
pub fn encode_leaf(address: &Address, amount: U256) -> [u8; ENCODED_LEN] {
    let mut encoded = [0u8; ENCODED_LEN];
    encoded[..ADDRESS_LEN].copy_from_slice(address);
    amount.to_big_endian(&mut encoded[ADDRESS_LEN..]);
    encoded
}

/// Parses a 20-byte address from hex, with or without a `0x` prefix.
pub fn parse_address(address: &str) -> Result<Address, AirdropError> {
    let trimmed = address.trim();
    let digits = strip_hex_prefix(trimmed).unwrap_or(trimmed);
    if digits.len() != 2 * ADDRESS_LEN {
        return Err(AirdropError::InvalidAddress(address.to_string()));
    }
    let mut parsed = [0u8; ADDRESS_LEN];
    hex::decode_to_slice(digits, &mut parsed)
        .map_err(|_| AirdropError::InvalidAddress(address.to_string()))?;
    Ok(parsed)
}

/// Parses a uint256 amount written in decimal, or in hex with a `0x` prefix.
pub fn parse_amount(amount: &str) -> Result<U256, AirdropError> {
    let trimmed = amount.trim();
    if trimmed.starts_with('-') {
        return Err(AirdropError::AmountOutOfRange(amount.to_string()));
    }
    match strip_hex_prefix(trimmed) {
        Some(digits) => parse_hex_amount(digits, amount),
        None => parse_decimal_amount(trimmed, amount),
    }
}

fn parse_decimal_amount(digits: &str, input: &str) -> Result<U256, AirdropError> {
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(AirdropError::InvalidAmount(input.to_string()));
    }
    // Every character is a digit, so the only remaining failure is overflow.
    U256::from_dec_str(digits).map_err(|_| AirdropError::AmountOutOfRange(input.to_string()))
}

fn parse_hex_amount(digits: &str, input: &str) -> Result<U256, AirdropError> {
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(AirdropError::InvalidAmount(input.to_string()));
    }
    let significant = digits.trim_start_matches('0');
    if significant.len() > 2 * AMOUNT_LEN {
        return Err(AirdropError::AmountOutOfRange(input.to_string()));
    }
    let padded = format!("{:0>width$}", significant, width = 2 * AMOUNT_LEN);
    let mut word = [0u8; AMOUNT_LEN];
    hex::decode_to_slice(&padded, &mut word)
        .map_err(|_| AirdropError::InvalidAmount(input.to_string()))?;
    Ok(U256::from_big_endian(&word))
}

fn strip_hex_prefix(value: &str) -> Option<&str> {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
}
