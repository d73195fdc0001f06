use common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use crate::TokenError;

// ── Storage key constants ───────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
const METADATA: Symbol = symbol_short!("META");
const SUPPLY: Symbol = symbol_short!("SUPPLY");

// Persistent: (BALANCE, holder). Temporary: (ALLOW, from, spender).
const BALANCE: Symbol = symbol_short!("BALANCE");
const ALLOWANCE: Symbol = symbol_short!("ALLOW");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

// ── Instance storage ────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn initialize(env: &Env, admin: &Address, metadata: &TokenMetadata) {
    let instance = env.storage().instance();
    instance.set(&ADMIN, admin);
    instance.set(&METADATA, metadata);
    instance.set(&INITIALIZED, &true);
    ttl::extend_instance(env);
}

pub fn get_admin(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(TokenError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
    ttl::extend_instance(env);
}

pub fn read_metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
    env.storage()
        .instance()
        .get(&METADATA)
        .ok_or(TokenError::NotInitialized)
}

pub fn read_supply(env: &Env) -> i128 {
    env.storage().instance().get(&SUPPLY).unwrap_or(0)
}

/// Add `delta` (negative on burn) to the total supply.
pub fn adjust_supply(env: &Env, delta: i128) -> Result<(), TokenError> {
    let supply = read_supply(env)
        .checked_add(delta)
        .ok_or(TokenError::ArithmeticOverflow)?;
    env.storage().instance().set(&SUPPLY, &supply);
    ttl::extend_instance(env);
    Ok(())
}

// ── Balances ────────────────────────────────────────────────────────────────

fn balance_key(id: &Address) -> (Symbol, Address) {
    (BALANCE, id.clone())
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = balance_key(id);
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            ttl::extend_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = balance_key(id);
    env.storage().persistent().set(&key, &amount);
    ttl::extend_persistent(env, &key);
}

pub fn receive_balance(env: &Env, id: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, id)
        .checked_add(amount)
        .ok_or(TokenError::ArithmeticOverflow)?;
    write_balance(env, id, balance);
    Ok(())
}

pub fn spend_balance(env: &Env, id: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, id);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    write_balance(env, id, balance - amount);
    Ok(())
}

// ── Allowances ──────────────────────────────────────────────────────────────

fn allowance_key(from: &Address, spender: &Address) -> (Symbol, Address, Address) {
    (ALLOWANCE, from.clone(), spender.clone())
}

/// Current allowance; an expired entry reads as zero.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = allowance_key(from, spender);
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    let sequence = env.ledger().sequence();
    if amount > 0 && expiration_ledger < sequence {
        return Err(TokenError::InvalidExpiration);
    }

    let key = allowance_key(from, spender);
    env.storage().temporary().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    if amount > 0 {
        let live_for = expiration_ledger - sequence;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    write_allowance(
        env,
        from,
        spender,
        allowance.amount - amount,
        allowance.expiration_ledger,
    )
}
