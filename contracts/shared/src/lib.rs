#![no_std]
//! # Shared Mission Contracts Library
//!
//! Reusable error codes, constants, and validation helpers for the
//! space-mission Soroban contracts.
//!
//! ## Modules
//!
//! - `errors` - Common error type used across contracts
//! - `constants` - Limits for validation
//! - `validation` - Reusable validation and checked-arithmetic helpers
//!
//! ## Usage
//!
//! Import the shared library in your contract's Cargo.toml:
//!
//! ```toml
//! [dependencies]
//! shared = { path = "../shared" }
//! ```
//!
//! Then use it in your code:
//!
//! ```rust,ignore
//! use shared::errors::ContractError;
//! use shared::validation::validate_positive_amount;
//! use shared::constants::MAX_VOTING_DURATION;
//! ```

pub mod constants;
pub mod errors;
pub mod validation;

pub use errors::ContractError;
pub use validation::{
    safe_add, safe_increment, safe_sub, validate_duration, validate_not_empty,
    validate_positive_amount, validate_uri,
};

#[cfg(test)]
mod test;
