use soroban_sdk::{Address, Env};

use shared::errors::ContractError;

use crate::types::{DataKey, TokenMetadata};

// Balances and supply stay live for ~1 year of ledgers between touches.
const BALANCE_TTL_LEDGERS: u32 = 6_307_200;

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

// ── Metadata ─────────────────────────────────────────────────────────────────

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn get_metadata(env: &Env) -> Result<TokenMetadata, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(ContractError::NotInitialized)
}

// ── Balances ─────────────────────────────────────────────────────────────────

pub fn get_balance(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(account.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, account: &Address, amount: i128) {
    let key = DataKey::Balance(account.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_TTL_LEDGERS, BALANCE_TTL_LEDGERS);
}

// ── Total Supply ─────────────────────────────────────────────────────────────

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::TotalSupply, &supply);
    env.storage().persistent().extend_ttl(
        &DataKey::TotalSupply,
        BALANCE_TTL_LEDGERS,
        BALANCE_TTL_LEDGERS,
    );
}
