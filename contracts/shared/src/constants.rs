//! Configuration constants for validation and limits

/// Shortest accepted voting window, in seconds
pub const MIN_VOTING_DURATION: u64 = 1;

/// Longest accepted voting window: 365 days in seconds
pub const MAX_VOTING_DURATION: u64 = 31_536_000;

/// Longest accepted metadata URI, in bytes
pub const MAX_URI_LENGTH: u32 = 256;
