use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub token: Address,
    pub reward_rate: i128,
}

/// StakeRecorded notification.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub amount: i128,
}

/// WithdrawalRecorded notification.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub staker: Address,
    pub amount: i128,
}

/// RewardClaimed notification. `amount` may be zero.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub staker: Address,
    pub amount: i128,
}

/// TrackedAssetChanged notification.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenSetEvent {
    pub token: Address,
}

pub fn publish_initialized(env: &Env, admin: Address, token: Address, reward_rate: i128) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            token,
            reward_rate,
        },
    );
}

pub fn publish_staked(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("STAKE"), staker.clone()),
        StakedEvent { staker, amount },
    );
}

pub fn publish_withdrawn(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), staker.clone()),
        WithdrawnEvent { staker, amount },
    );
}

pub fn publish_reward_paid(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("REWARD"), staker.clone()),
        RewardPaidEvent { staker, amount },
    );
}

pub fn publish_token_set(env: &Env, token: Address) {
    env.events()
        .publish((symbol_short!("TOKEN_SET"),), TokenSetEvent { token });
}
