use soroban_sdk::{symbol_short, Address, Env};

use shared::errors::ContractError;
use shared::validation::{safe_add, safe_sub, validate_positive_amount};

use crate::storage;

pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), ContractError> {
    validate_positive_amount(amount)?;

    let balance = storage::get_balance(env, to);
    storage::set_balance(env, to, safe_add(balance, amount)?);

    let supply = storage::get_total_supply(env);
    storage::set_total_supply(env, safe_add(supply, amount)?);

    env.events()
        .publish((symbol_short!("mint"), to.clone()), amount);

    Ok(())
}

pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    validate_positive_amount(amount)?;

    let balance = storage::get_balance(env, from);
    if balance < amount {
        return Err(ContractError::InsufficientBalance);
    }

    storage::set_balance(env, from, balance - amount);

    let supply = storage::get_total_supply(env);
    storage::set_total_supply(env, safe_sub(supply, amount)?);

    env.events()
        .publish((symbol_short!("burn"), from.clone()), amount);

    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    validate_positive_amount(amount)?;

    let from_balance = storage::get_balance(env, from);
    if from_balance < amount {
        return Err(ContractError::InsufficientBalance);
    }

    storage::set_balance(env, from, from_balance - amount);

    let to_balance = storage::get_balance(env, to);
    storage::set_balance(env, to, safe_add(to_balance, amount)?);

    env.events()
        .publish((symbol_short!("transfer"), from.clone()), (to.clone(), amount));

    Ok(())
}
