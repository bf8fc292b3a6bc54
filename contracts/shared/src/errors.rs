//! Common error types for the mission contracts
//!
//! A unified set of error codes shared by the governance and token
//! contracts. Error ranges are organized by category:
//! - 1-19: General/Authorization errors
//! - 20-39: Governance errors
//! - 40-59: Token errors

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum ContractError {
    // ===== General/Authorization Errors (1-19) =====
    /// Caller is not authorized to perform this action
    NotAuthorized = 1,

    /// Invalid input provided
    InvalidInput = 2,

    /// Contract not initialized
    NotInitialized = 3,

    /// Contract already initialized
    AlreadyInitialized = 4,

    /// Arithmetic overflow occurred
    Overflow = 5,

    /// Operation would cause underflow
    Underflow = 6,

    /// Duration out of allowed bounds
    InvalidDuration = 7,

    // ===== Governance Errors (20-39) =====
    /// Proposal not found
    ProposalNotFound = 20,

    /// A proposal with this id already exists
    ProposalAlreadyExists = 21,

    /// Voting deadline has passed
    VotingClosed = 22,

    /// Address has already voted on this proposal
    AlreadyVoted = 23,

    // ===== Token Errors (40-59) =====
    /// Amount must be positive
    InvalidAmount = 40,

    /// Sender balance is below the requested amount
    InsufficientBalance = 41,
}

impl ContractError {
    /// Get a human-readable description of the error
    pub fn message(&self) -> &str {
        match self {
            // General/Authorization
            ContractError::NotAuthorized => "Not authorized",
            ContractError::InvalidInput => "Invalid input provided",
            ContractError::NotInitialized => "Contract not initialized",
            ContractError::AlreadyInitialized => "Contract already initialized",
            ContractError::Overflow => "Arithmetic overflow",
            ContractError::Underflow => "Arithmetic underflow",
            ContractError::InvalidDuration => "Invalid duration",

            // Governance
            ContractError::ProposalNotFound => "Proposal not found",
            ContractError::ProposalAlreadyExists => "Proposal already exists",
            ContractError::VotingClosed => "Voting is closed",
            ContractError::AlreadyVoted => "User has already voted",

            // Token
            ContractError::InvalidAmount => "Amount must be positive",
            ContractError::InsufficientBalance => "Insufficient balance",
        }
    }
}
