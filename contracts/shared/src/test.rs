#![cfg(test)]

use soroban_sdk::{Env, String};

use crate::errors::ContractError;
use crate::validation::{
    safe_add, safe_increment, safe_sub, validate_duration, validate_not_empty,
    validate_positive_amount, validate_uri,
};

#[test]
fn test_positive_amount() {
    assert_eq!(validate_positive_amount(1), Ok(()));
    assert_eq!(
        validate_positive_amount(0),
        Err(ContractError::InvalidAmount)
    );
    assert_eq!(
        validate_positive_amount(-5),
        Err(ContractError::InvalidAmount)
    );
}

#[test]
fn test_duration_bounds() {
    assert_eq!(validate_duration(1), Ok(()));
    assert_eq!(validate_duration(86_400), Ok(()));
    assert_eq!(validate_duration(0), Err(ContractError::InvalidDuration));
    assert_eq!(
        validate_duration(31_536_001),
        Err(ContractError::InvalidDuration)
    );
}

#[test]
fn test_string_validation() {
    let env = Env::default();

    let title = String::from_str(&env, "New Mission Proposal");
    assert_eq!(validate_not_empty(&title), Ok(()));

    let empty = String::from_str(&env, "");
    assert_eq!(validate_not_empty(&empty), Err(ContractError::InvalidInput));

    let uri = String::from_str(&env, "https://example.com/space-mission-token");
    assert_eq!(validate_uri(&uri), Ok(()));
}

#[test]
fn test_checked_arithmetic() {
    assert_eq!(safe_add(2, 3), Ok(5));
    assert_eq!(safe_add(i128::MAX, 1), Err(ContractError::Overflow));

    assert_eq!(safe_sub(5, 3), Ok(2));
    assert_eq!(safe_sub(i128::MIN, 1), Err(ContractError::Underflow));

    assert_eq!(safe_increment(9), Ok(10));
    assert_eq!(safe_increment(u32::MAX), Err(ContractError::Overflow));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ContractError::ProposalAlreadyExists.message(),
        "Proposal already exists"
    );
    assert_eq!(ContractError::VotingClosed.message(), "Voting is closed");
    assert_eq!(
        ContractError::AlreadyVoted.message(),
        "User has already voted"
    );
    assert_eq!(
        ContractError::InsufficientBalance.message(),
        "Insufficient balance"
    );
    assert_eq!(ContractError::NotAuthorized.message(), "Not authorized");
}
