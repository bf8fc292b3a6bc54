use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String};

use shared::errors::ContractError;
use shared::validation::{validate_not_empty, validate_uri};

use crate::storage;
use crate::token;
use crate::types::TokenMetadata;

#[contract]
pub struct MissionToken;

#[contractimpl]
impl MissionToken {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the token with an admin and its metadata.
    /// Can only be called once.
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        decimals: u32,
        uri: String,
    ) -> Result<(), ContractError> {
        if storage::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        validate_not_empty(&name)?;
        validate_not_empty(&symbol)?;
        validate_uri(&uri)?;

        storage::set_admin(&env, &admin);
        storage::set_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals,
                uri,
            },
        );

        env.events().publish((symbol_short!("init"),), (admin,));

        Ok(())
    }

    // ── Supply Management ────────────────────────────────────────────────────

    /// Issue new tokens to `to`. Only the admin may mint.
    pub fn mint(
        env: Env,
        minter: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        minter.require_auth();

        let admin = storage::get_admin(&env)?;
        if minter != admin {
            return Err(ContractError::NotAuthorized);
        }

        token::mint(&env, &to, amount)
    }

    /// Destroy tokens held by `from`.
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();
        storage::get_admin(&env)?;
        token::burn(&env, &from, amount)
    }

    // ── Transfers ────────────────────────────────────────────────────────────

    /// Move tokens from `from` to `to`.
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        from.require_auth();
        storage::get_admin(&env)?;
        token::transfer(&env, &from, &to, amount)
    }

    // ── Read-only Queries ────────────────────────────────────────────────────

    /// Balance of `account`; 0 for accounts that never held tokens.
    pub fn balance(env: Env, account: Address) -> i128 {
        storage::get_balance(&env, &account)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn name(env: Env) -> Result<String, ContractError> {
        Ok(storage::get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, ContractError> {
        Ok(storage::get_metadata(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, ContractError> {
        Ok(storage::get_metadata(&env)?.decimals)
    }

    pub fn token_uri(env: Env) -> Result<String, ContractError> {
        Ok(storage::get_metadata(&env)?.uri)
    }

    // ── Admin ────────────────────────────────────────────────────────────────

    /// Point the token at a new off-chain metadata document. Admin only.
    pub fn set_token_uri(env: Env, caller: Address, uri: String) -> Result<(), ContractError> {
        caller.require_auth();

        let admin = storage::get_admin(&env)?;
        if caller != admin {
            return Err(ContractError::NotAuthorized);
        }
        validate_uri(&uri)?;

        let mut metadata = storage::get_metadata(&env)?;
        metadata.uri = uri.clone();
        storage::set_metadata(&env, &metadata);

        env.events().publish((symbol_short!("set_uri"),), uri);

        Ok(())
    }

    /// Transfer the admin role to a new address.
    pub fn transfer_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        let admin = storage::get_admin(&env)?;
        admin.require_auth();
        storage::set_admin(&env, &new_admin);

        env.events()
            .publish((symbol_short!("adm_xfer"),), (admin, new_admin));

        Ok(())
    }
}
