use common::ttl;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::ledger::{Pool, StakerState};
use crate::StakingError;

// ── Storage key constants ───────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
const TOKEN: Symbol = symbol_short!("TOKEN");
const POOL: Symbol = symbol_short!("POOL");

// Per-staker persistent storage uses tuple keys: (prefix, staker_address)
const STAKER: Symbol = symbol_short!("STAKER");

fn staker_key(staker: &Address) -> (Symbol, Address) {
    (STAKER, staker.clone())
}

// ── Instance storage ────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn require_initialized(env: &Env) -> Result<(), StakingError> {
    if !is_initialized(env) {
        return Err(StakingError::NotInitialized);
    }
    Ok(())
}

/// Write the genesis configuration. Callers check `is_initialized` first.
pub fn initialize(env: &Env, admin: &Address, token: &Address, pool: &Pool) {
    let instance = env.storage().instance();
    instance.set(&ADMIN, admin);
    instance.set(&TOKEN, token);
    instance.set(&POOL, pool);
    instance.set(&INITIALIZED, &true);
    ttl::extend_instance(env);
}

pub fn get_admin(env: &Env) -> Result<Address, StakingError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(StakingError::NotInitialized)
}

pub fn get_token(env: &Env) -> Result<Address, StakingError> {
    env.storage()
        .instance()
        .get(&TOKEN)
        .ok_or(StakingError::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&TOKEN, token);
    ttl::extend_instance(env);
}

pub fn load_pool(env: &Env) -> Result<Pool, StakingError> {
    env.storage()
        .instance()
        .get(&POOL)
        .ok_or(StakingError::NotInitialized)
}

pub fn save_pool(env: &Env, pool: &Pool) {
    env.storage().instance().set(&POOL, pool);
    ttl::extend_instance(env);
}

// ── Persistent storage ──────────────────────────────────────────────────────

/// Load a staker's record, or the all-zero record if they never interacted.
pub fn load_staker(env: &Env, staker: &Address) -> StakerState {
    let key = staker_key(staker);
    match env.storage().persistent().get::<_, StakerState>(&key) {
        Some(state) => {
            ttl::extend_persistent(env, &key);
            state
        }
        None => StakerState::default(),
    }
}

pub fn save_staker(env: &Env, staker: &Address, state: &StakerState) {
    let key = staker_key(staker);
    env.storage().persistent().set(&key, state);
    ttl::extend_persistent(env, &key);
}
