use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String};

use shared::errors::ContractError;
use shared::validation::{safe_increment, validate_duration, validate_not_empty};

use crate::storage;
use crate::types::{Proposal, VoteRecord};

#[contract]
pub struct MissionGovernance;

#[contractimpl]
impl MissionGovernance {
    // ── Proposal Creation ────────────────────────────────────────────────────

    /// Register a new proposal under a caller-chosen id.
    ///
    /// Voting opens immediately and closes `voting_duration` seconds after
    /// the current ledger timestamp.
    pub fn create_proposal(
        env: Env,
        creator: Address,
        proposal_id: u64,
        title: String,
        description: String,
        voting_duration: u64,
    ) -> Result<(), ContractError> {
        creator.require_auth();

        validate_not_empty(&title)?;
        validate_duration(voting_duration)?;

        if storage::has_proposal(&env, proposal_id) {
            return Err(ContractError::ProposalAlreadyExists);
        }

        let now = env.ledger().timestamp();
        let proposal = Proposal {
            id: proposal_id,
            creator: creator.clone(),
            title,
            description,
            votes_for: 0,
            votes_against: 0,
            created_at: now,
            voting_ends_at: now + voting_duration,
        };

        storage::save_proposal(&env, &proposal);
        storage::increment_proposal_count(&env);

        env.events()
            .publish((symbol_short!("proposal"), creator), proposal_id);

        Ok(())
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast a yes/no vote on an open proposal.
    ///
    /// Each address votes at most once per proposal; the choice is final.
    pub fn cast_vote(
        env: Env,
        voter: Address,
        proposal_id: u64,
        support: bool,
    ) -> Result<(), ContractError> {
        voter.require_auth();

        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(ContractError::ProposalNotFound)?;

        let now = env.ledger().timestamp();
        if now > proposal.voting_ends_at {
            return Err(ContractError::VotingClosed);
        }

        if storage::has_vote(&env, proposal_id, &voter) {
            return Err(ContractError::AlreadyVoted);
        }

        if support {
            proposal.votes_for = safe_increment(proposal.votes_for)?;
        } else {
            proposal.votes_against = safe_increment(proposal.votes_against)?;
        }

        let record = VoteRecord {
            voter: voter.clone(),
            support,
            cast_at: now,
        };

        storage::save_vote(&env, proposal_id, &record);
        storage::save_proposal(&env, &proposal);

        env.events()
            .publish((symbol_short!("vote"), voter), (proposal_id, support));

        Ok(())
    }

    // ── Read-only Queries ────────────────────────────────────────────────────

    /// Look up a proposal. `None` for an unknown id.
    pub fn get_proposal(env: Env, proposal_id: u64) -> Option<Proposal> {
        storage::get_proposal(&env, proposal_id)
    }

    /// Look up one voter's recorded choice. `None` if they have not voted.
    pub fn get_vote(env: Env, proposal_id: u64, voter: Address) -> Option<VoteRecord> {
        storage::get_vote(&env, proposal_id, &voter)
    }

    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        storage::has_vote(&env, proposal_id, &voter)
    }

    /// Number of proposals created so far.
    pub fn proposal_count(env: Env) -> u64 {
        storage::get_proposal_count(&env)
    }
}
