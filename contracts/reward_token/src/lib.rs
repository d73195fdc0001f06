#![no_std]

pub mod events;
pub mod storage;

use common::address;
use soroban_sdk::{contract, contractimpl, Address, Env, String};

use storage::TokenMetadata;

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TokenError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidAddress = 3,
    InvalidAmount = 4,
    InsufficientBalance = 5,
    InsufficientAllowance = 6,
    InvalidExpiration = 7,
    ArithmeticOverflow = 8,
}

/// Mintable fungible token speaking the standard Soroban token interface.
///
/// The admin mints; holders transfer, approve and burn their own balances.
/// Hand the admin role to a staking contract to let it mint rewards.
#[contract]
pub struct RewardToken;

#[contractimpl]
impl RewardToken {
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
    ) -> Result<(), TokenError> {
        if storage::is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        if address::is_null(&env, &admin) {
            return Err(TokenError::InvalidAddress);
        }

        storage::initialize(
            &env,
            &admin,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );

        Ok(())
    }

    // ── Admin ───────────────────────────────────────────────────────────────

    /// Issue `amount` new units to `to`. Admin only.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), TokenError> {
        let admin = storage::get_admin(&env)?;
        admin.require_auth();
        check_positive(amount)?;
        if address::is_null(&env, &to) {
            return Err(TokenError::InvalidAddress);
        }

        storage::receive_balance(&env, &to, amount)?;
        storage::adjust_supply(&env, amount)?;

        events::publish_mint(&env, admin, to, amount);
        Ok(())
    }

    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), TokenError> {
        let admin = storage::get_admin(&env)?;
        admin.require_auth();
        if address::is_null(&env, &new_admin) {
            return Err(TokenError::InvalidAddress);
        }

        storage::set_admin(&env, &new_admin);

        events::publish_set_admin(&env, admin, new_admin);
        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, TokenError> {
        storage::get_admin(&env)
    }

    // ── Token interface ─────────────────────────────────────────────────────

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::read_allowance(&env, &from, &spender).amount
    }

    /// Let `spender` move up to `amount` of `from`'s balance until
    /// `expiration_ledger`. Replaces any previous allowance.
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        from.require_auth();
        if amount < 0 {
            return Err(TokenError::InvalidAmount);
        }

        storage::write_allowance(&env, &from, &spender, amount, expiration_ledger)?;

        events::publish_approve(&env, from, spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::read_supply(&env)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        check_positive(amount)?;

        storage::spend_balance(&env, &from, amount)?;
        storage::receive_balance(&env, &to, amount)?;

        events::publish_transfer(&env, from, to, amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_positive(amount)?;

        storage::spend_allowance(&env, &from, &spender, amount)?;
        storage::spend_balance(&env, &from, amount)?;
        storage::receive_balance(&env, &to, amount)?;

        events::publish_transfer(&env, from, to, amount);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        check_positive(amount)?;

        storage::spend_balance(&env, &from, amount)?;
        storage::adjust_supply(&env, -amount)?;

        events::publish_burn(&env, from, amount);
        Ok(())
    }

    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_positive(amount)?;

        storage::spend_allowance(&env, &from, &spender, amount)?;
        storage::spend_balance(&env, &from, amount)?;
        storage::adjust_supply(&env, -amount)?;

        events::publish_burn(&env, from, amount);
        Ok(())
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Ok(storage::read_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(storage::read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(storage::read_metadata(&env)?.symbol)
    }
}

fn check_positive(amount: i128) -> Result<(), TokenError> {
    if amount <= 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}
