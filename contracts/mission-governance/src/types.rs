use soroban_sdk::{contracttype, Address, String};

/// A governance item subject to a yes/no vote with a deadline.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub votes_for: u32,
    pub votes_against: u32,
    pub created_at: u64,
    pub voting_ends_at: u64,
}

/// One voter's recorded choice on one proposal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteRecord {
    pub voter: Address,
    pub support: bool,
    pub cast_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Proposal(u64),
    ProposalCount,
    Vote(u64, Address), // (proposal_id, voter)
}
