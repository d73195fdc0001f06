#![no_std]

#[cfg(test)]
extern crate std;

pub mod events;
pub mod ledger;
pub mod rewards;
pub mod storage;
pub mod token_ledger;

use common::address;
use soroban_sdk::{contract, contractimpl, log, Address, Env};

pub use ledger::{Pool, StakerState};
use token_ledger::TokenLedger;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum StakingError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAddress = 4,
    InvalidTokenAddress = 5,
    InvalidAmount = 6,
    InsufficientFunds = 7,
    TransferFailed = 8,
    ArithmeticOverflow = 9,
    InvalidRewardRate = 10,
    ClockRegressed = 11,
}

// ── Contract ─────────────────────────────────────────────────────────────────

/// Fixed-rate reward stream shared pro rata among stakers of one token.
///
/// Every staker-facing call settles the global accumulator and the caller's
/// own record before touching balances, so each operation is O(1) no matter
/// how many stakers exist. The pool and the caller's record are updated in
/// memory and only written back once the token call has succeeded.
#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `admin`       – the only address allowed to repoint the token.
    /// * `token`       – token that is staked and minted as reward. This
    ///                   contract must be its admin for claims to succeed.
    /// * `reward_rate` – reward units emitted **per second** across all stakers.
    ///
    /// The genesis timestamp is the current ledger time.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        reward_rate: i128,
    ) -> Result<(), StakingError> {
        if storage::is_initialized(&env) {
            return Err(StakingError::AlreadyInitialized);
        }
        if address::is_null(&env, &token) {
            return Err(StakingError::InvalidTokenAddress);
        }
        if reward_rate < 0 {
            return Err(StakingError::InvalidRewardRate);
        }

        let pool = Pool::genesis(reward_rate, env.ledger().timestamp());
        storage::initialize(&env, &admin, &token, &pool);

        events::publish_initialized(&env, admin, token, reward_rate);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` tokens.
    ///
    /// Accrual is settled before the balance grows so the new tokens earn
    /// nothing retroactively. The staker must have approved this contract
    /// for at least `amount`.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), StakingError> {
        storage::require_initialized(&env)?;
        Self::require_participant(&env, &staker)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(StakingError::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        let mut pool = storage::load_pool(&env)?;
        let mut state = storage::load_staker(&env, &staker);

        // 1. Flush global accumulator then snapshot for this staker.
        pool.update_reward(&mut state, now)?;

        // 2. Pull tokens into custody.
        Self::token_ledger(&env)?.transfer_in(&staker, amount)?;

        // 3. Credit the deposit and commit.
        pool.deposit(&mut state, amount)?;
        storage::save_pool(&env, &pool);
        storage::save_staker(&env, &staker, &state);

        events::publish_staked(&env, staker, amount);

        Ok(())
    }

    /// Withdraw `amount` of previously staked tokens.
    ///
    /// Fails with `InsufficientFunds` unless `0 < amount <= staked`.
    pub fn withdraw(env: Env, staker: Address, amount: i128) -> Result<(), StakingError> {
        storage::require_initialized(&env)?;
        Self::require_participant(&env, &staker)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let mut pool = storage::load_pool(&env)?;
        let mut state = storage::load_staker(&env, &staker);

        pool.update_reward(&mut state, now)?;
        pool.withdraw(&mut state, amount).map_err(|err| {
            log!(&env, "withdraw rejected", staker.clone(), amount, state.staked);
            err
        })?;

        Self::token_ledger(&env)?.transfer_out(&staker, amount)?;

        storage::save_pool(&env, &pool);
        storage::save_staker(&env, &staker, &state);

        events::publish_withdrawn(&env, staker, amount);

        Ok(())
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Mint every settled reward to `staker` and return the amount.
    ///
    /// Claiming with nothing accrued succeeds, returns zero and still emits
    /// the claim event.
    pub fn claim(env: Env, staker: Address) -> Result<i128, StakingError> {
        storage::require_initialized(&env)?;
        Self::require_participant(&env, &staker)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let mut pool = storage::load_pool(&env)?;
        let mut state = storage::load_staker(&env, &staker);

        pool.update_reward(&mut state, now)?;
        let owed = state.take_rewards();

        if owed > 0 {
            Self::token_ledger(&env)?.mint_reward(&staker, owed)?;
        }

        storage::save_pool(&env, &pool);
        storage::save_staker(&env, &staker, &state);

        events::publish_reward_paid(&env, staker, owed);

        Ok(owed)
    }

    /// Withdraw the whole stake and claim all rewards in one call.
    ///
    /// Returns the claimed reward. A staker with nothing staked just claims.
    pub fn exit(env: Env, staker: Address) -> Result<i128, StakingError> {
        storage::require_initialized(&env)?;
        Self::require_participant(&env, &staker)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let mut pool = storage::load_pool(&env)?;
        let mut state = storage::load_staker(&env, &staker);
        let ledger = Self::token_ledger(&env)?;

        pool.update_reward(&mut state, now)?;

        let withdrawn = state.staked;
        if withdrawn > 0 {
            pool.withdraw(&mut state, withdrawn)?;
            ledger.transfer_out(&staker, withdrawn)?;
        }

        let owed = state.take_rewards();
        if owed > 0 {
            ledger.mint_reward(&staker, owed)?;
        }

        storage::save_pool(&env, &pool);
        storage::save_staker(&env, &staker, &state);

        if withdrawn > 0 {
            events::publish_withdrawn(&env, staker.clone(), withdrawn);
        }
        events::publish_reward_paid(&env, staker, owed);

        Ok(owed)
    }

    /// Real-time claimable reward for `staker`, without mutating state.
    pub fn earned(env: Env, staker: Address) -> Result<i128, StakingError> {
        Self::require_participant(&env, &staker)?;
        let pool = storage::load_pool(&env)?;
        let state = storage::load_staker(&env, &staker);

        pool.earned(&state, env.ledger().timestamp())
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Repoint the contract at a different token.
    ///
    /// Accrual state is untouched: stakes and settled rewards keep their
    /// values and are paid out in the new token from now on.
    pub fn set_token(env: Env, caller: Address, token: Address) -> Result<(), StakingError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if address::is_null(&env, &token) {
            return Err(StakingError::InvalidTokenAddress);
        }

        storage::set_token(&env, &token);

        events::publish_token_set(&env, token);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, StakingError> {
        storage::get_admin(&env)
    }

    /// Address of the tracked token.
    pub fn token(env: Env) -> Result<Address, StakingError> {
        storage::get_token(&env)
    }

    pub fn total_staked(env: Env) -> Result<i128, StakingError> {
        Ok(storage::load_pool(&env)?.total_staked)
    }

    pub fn staked_of(env: Env, staker: Address) -> i128 {
        storage::load_staker(&env, &staker).staked
    }

    pub fn reward_rate(env: Env) -> Result<i128, StakingError> {
        Ok(storage::load_pool(&env)?.reward_rate)
    }

    /// The global accumulator as of now, including growth not yet committed.
    pub fn reward_per_token(env: Env) -> Result<i128, StakingError> {
        storage::load_pool(&env)?.reward_per_token(env.ledger().timestamp())
    }

    /// The committed pool record.
    pub fn get_pool(env: Env) -> Result<Pool, StakingError> {
        storage::load_pool(&env)
    }

    /// The committed record for `staker`, as of their last interaction.
    pub fn get_staker(env: Env, staker: Address) -> StakerState {
        storage::load_staker(&env, &staker)
    }

    /// Tracked-token balance held by this contract.
    pub fn custody_balance(env: Env) -> Result<i128, StakingError> {
        let custody = env.current_contract_address();
        Ok(Self::token_ledger(&env)?.balance_of(&custody))
    }

    pub fn version() -> u32 {
        1
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn token_ledger(env: &Env) -> Result<TokenLedger<'_>, StakingError> {
        Ok(TokenLedger::new(env, storage::get_token(env)?))
    }

    /// Guard: reject the all-zero placeholder addresses.
    fn require_participant(env: &Env, staker: &Address) -> Result<(), StakingError> {
        if address::is_null(env, staker) {
            return Err(StakingError::InvalidAddress);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the stored admin.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), StakingError> {
        let admin = storage::get_admin(env)?;
        if *caller != admin {
            return Err(StakingError::Unauthorized);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_properties;
