#![no_std]

mod governance;
mod storage;
mod types;

pub use governance::{MissionGovernance, MissionGovernanceClient};
pub use types::{Proposal, VoteRecord};
