use soroban_sdk::{Env, IntoVal, Val};

/// Ledgers per day at a ~5 second close time.
pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;

pub const PERSISTENT_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS; // ~30 days
pub const PERSISTENT_TTL_EXTEND_TO: u32 = 60 * DAY_IN_LEDGERS; // ~60 days

/// Keeps the contract instance (and every instance-storage entry) alive.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

/// Extends a persistent entry. The entry must exist.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}
