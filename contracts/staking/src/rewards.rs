/// Fixed-point scaling factor for reward-per-token values.
///
/// Every reward-per-token figure is stored multiplied by this constant so a
/// single second of emission spread over a large stake does not truncate to
/// zero. 10^18 keeps 18 decimal places; with `staked <= total_staked` a
/// settlement can never exceed `reward_rate × elapsed`, so `i128` only
/// overflows once more than ~1.7 × 10^20 reward units are emitted between
/// two synchronizations.
///
/// Both divisions floor. A single staker with balance `b` over `t` seconds
/// receives `reward_rate × t` exactly when `b` divides
/// `reward_rate × t × PRECISION`, and one unit less otherwise.
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

// ── Core reward engine ──────────────────────────────────────────────────────

/// Advance the global `reward_per_token_stored` accumulator.
///
/// ```text
/// Δrpt = reward_rate × elapsed_seconds × PRECISION / total_staked
/// new_rpt = stored_rpt + Δrpt
/// ```
///
/// With nothing staked the accumulator does not move; emission for that
/// interval is not owed to anyone.
///
/// Returns `None` on `i128` overflow.
///
/// # Arguments
/// * `stored`       – current `reward_per_token_stored` (scaled by PRECISION)
/// * `reward_rate`  – tokens emitted per second across *all* stakers
/// * `elapsed`      – seconds since the last update
/// * `total_staked` – sum of all active stakes
pub fn compute_reward_per_token(
    stored: i128,
    reward_rate: i128,
    elapsed: u64,
    total_staked: i128,
) -> Option<i128> {
    if total_staked <= 0 || elapsed == 0 {
        return Some(stored);
    }

    let delta = reward_rate
        .checked_mul(i128::from(elapsed))?
        .checked_mul(PRECISION)?
        .checked_div(total_staked)?;

    stored.checked_add(delta)
}

/// Rewards owed to one staker after applying the accumulator growth since
/// their last snapshot.
///
/// ```text
/// earned = staked × (current_rpt − user_rpt_paid) / PRECISION + user_earned
/// ```
///
/// Only the growth since `user_rpt_paid` is credited, so a snapshot is
/// never counted twice.
pub fn earned(
    staked: i128,
    current_rpt: i128,
    user_rpt_paid: i128,
    user_earned: i128,
) -> Option<i128> {
    let growth = current_rpt.checked_sub(user_rpt_paid)?;
    let new_rewards = staked.checked_mul(growth)?.checked_div(PRECISION)?;

    user_earned.checked_add(new_rewards)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure math, no Soroban environment.
