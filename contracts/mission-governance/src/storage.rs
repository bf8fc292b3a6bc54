use soroban_sdk::{Address, Env};

use crate::types::{DataKey, Proposal, VoteRecord};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// Proposals and votes must stay readable for the life of the mission program.
// At ~5s per ledger: 1 year ≈ 6,307,200 ledgers.
const PROPOSAL_TTL_LEDGERS: u32 = 6_307_200;
const VOTE_TTL_LEDGERS: u32 = 6_307_200;

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn has_proposal(env: &Env, proposal_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Proposal(proposal_id))
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROPOSAL_TTL_LEDGERS, PROPOSAL_TTL_LEDGERS);
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

// ── Proposal Count ───────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u64)
}

pub fn increment_proposal_count(env: &Env) -> u64 {
    let count = get_proposal_count(env) + 1;
    env.storage()
        .persistent()
        .set(&DataKey::ProposalCount, &count);
    env.storage().persistent().extend_ttl(
        &DataKey::ProposalCount,
        PROPOSAL_TTL_LEDGERS,
        PROPOSAL_TTL_LEDGERS,
    );
    count
}

// ── Votes ────────────────────────────────────────────────────────────────────

pub fn has_vote(env: &Env, proposal_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Vote(proposal_id, voter.clone()))
}

pub fn save_vote(env: &Env, proposal_id: u64, record: &VoteRecord) {
    let key = DataKey::Vote(proposal_id, record.voter.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, VOTE_TTL_LEDGERS, VOTE_TTL_LEDGERS);
}

pub fn get_vote(env: &Env, proposal_id: u64, voter: &Address) -> Option<VoteRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(proposal_id, voter.clone()))
}
