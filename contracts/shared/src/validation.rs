//! Validation helper utilities for the mission contracts
//!
//! Reusable validation and checked-arithmetic functions used by both
//! contracts to keep input handling consistent.

use soroban_sdk::String;

use crate::constants::{MAX_URI_LENGTH, MAX_VOTING_DURATION, MIN_VOTING_DURATION};
use crate::errors::ContractError;

// ===== Amount Validation =====

/// Validate that a token amount is strictly positive
pub fn validate_positive_amount(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

// ===== Time Validation =====

/// Validate that a voting duration is within the accepted bounds
pub fn validate_duration(duration: u64) -> Result<(), ContractError> {
    if !(MIN_VOTING_DURATION..=MAX_VOTING_DURATION).contains(&duration) {
        return Err(ContractError::InvalidDuration);
    }
    Ok(())
}

// ===== String Validation =====

/// Validate that a string value is non-empty
pub fn validate_not_empty(value: &String) -> Result<(), ContractError> {
    if value.len() == 0 {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// Validate that a metadata URI fits the length limit
pub fn validate_uri(uri: &String) -> Result<(), ContractError> {
    if uri.len() > MAX_URI_LENGTH {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

// ===== Arithmetic Validation =====

/// Safely add two amounts, returning error on overflow
pub fn safe_add(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Safely subtract two amounts, returning error on underflow
pub fn safe_sub(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Underflow)
}

/// Safely increment a vote tally, returning error on overflow
pub fn safe_increment(count: u32) -> Result<u32, ContractError> {
    count.checked_add(1).ok_or(ContractError::Overflow)
}
