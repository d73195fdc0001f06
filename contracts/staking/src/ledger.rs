use soroban_sdk::contracttype;

use crate::rewards;
use crate::StakingError;

// ── Records ─────────────────────────────────────────────────────────────────

/// Global accrual state, one per contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    /// Sum of every staker's `staked`.
    pub total_staked: i128,
    /// Reward units emitted per second, shared by all stakers.
    pub reward_rate: i128,
    /// Reward earned by one staked unit since genesis, scaled by `PRECISION`.
    pub reward_per_token_stored: i128,
    /// Ledger timestamp at which `reward_per_token_stored` was last advanced.
    pub last_update_time: u64,
}

/// Per-staker accrual state. Absent records read as all-zero.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakerState {
    pub staked: i128,
    /// Snapshot of `reward_per_token_stored` at the last settlement.
    pub reward_per_token_paid: i128,
    /// Settled, unclaimed rewards.
    pub rewards: i128,
}

// ── Accrual ─────────────────────────────────────────────────────────────────

impl Pool {
    pub fn genesis(reward_rate: i128, now: u64) -> Self {
        Pool {
            total_staked: 0,
            reward_rate,
            reward_per_token_stored: 0,
            last_update_time: now,
        }
    }

    /// The accumulator as it would read at `now`, without committing it.
    pub fn reward_per_token(&self, now: u64) -> Result<i128, StakingError> {
        let elapsed = now
            .checked_sub(self.last_update_time)
            .ok_or(StakingError::ClockRegressed)?;

        rewards::compute_reward_per_token(
            self.reward_per_token_stored,
            self.reward_rate,
            elapsed,
            self.total_staked,
        )
        .ok_or(StakingError::ArithmeticOverflow)
    }

    /// Advance the global accumulator to `now`.
    pub fn update(&mut self, now: u64) -> Result<(), StakingError> {
        self.reward_per_token_stored = self.reward_per_token(now)?;
        self.last_update_time = now;
        Ok(())
    }

    /// Credit `staker` with everything accrued since their last snapshot
    /// and move the snapshot up to the stored accumulator.
    pub fn settle(&self, staker: &mut StakerState) -> Result<(), StakingError> {
        staker.rewards = rewards::earned(
            staker.staked,
            self.reward_per_token_stored,
            staker.reward_per_token_paid,
            staker.rewards,
        )
        .ok_or(StakingError::ArithmeticOverflow)?;
        staker.reward_per_token_paid = self.reward_per_token_stored;
        Ok(())
    }

    /// Global update followed by settlement of one staker. Runs first in
    /// every staker-facing mutation.
    pub fn update_reward(&mut self, staker: &mut StakerState, now: u64) -> Result<(), StakingError> {
        self.update(now)?;
        self.settle(staker)
    }

    /// What `staker.rewards` would be after an `update_reward` at `now`.
    pub fn earned(&self, staker: &StakerState, now: u64) -> Result<i128, StakingError> {
        let current = self.reward_per_token(now)?;
        rewards::earned(
            staker.staked,
            current,
            staker.reward_per_token_paid,
            staker.rewards,
        )
        .ok_or(StakingError::ArithmeticOverflow)
    }

    // ── Balance changes ─────────────────────────────────────────────────────
    // Callers settle first; these only move principal.

    pub fn deposit(&mut self, staker: &mut StakerState, amount: i128) -> Result<(), StakingError> {
        if amount <= 0 {
            return Err(StakingError::InvalidAmount);
        }
        let staked = staker
            .staked
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        let total = self
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;

        staker.staked = staked;
        self.total_staked = total;
        Ok(())
    }

    pub fn withdraw(&mut self, staker: &mut StakerState, amount: i128) -> Result<(), StakingError> {
        if amount <= 0 || amount > staker.staked {
            return Err(StakingError::InsufficientFunds);
        }
        // staker.staked <= total_staked, so neither subtraction can underflow.
        staker.staked -= amount;
        self.total_staked -= amount;
        Ok(())
    }
}

impl StakerState {
    /// Zero the settled rewards and return what was owed.
    pub fn take_rewards(&mut self) -> i128 {
        core::mem::take(&mut self.rewards)
    }
}
