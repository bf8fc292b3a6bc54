#![no_std]

mod contract;
mod storage;
mod token;
mod types;

pub use contract::{MissionToken, MissionTokenClient};
pub use types::TokenMetadata;
