#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use reward_token::{RewardToken, RewardTokenClient};
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::{Address, Env, String};
use staking::{StakingContract, StakingContractClient};

const FUNDED: i128 = 1_000_000;
const START: u64 = 1_000;

#[derive(Arbitrary, Debug)]
enum Action {
    Stake { who: u8, amount: u16 },
    Withdraw { who: u8, amount: u16 },
    Claim { who: u8 },
    Exit { who: u8 },
    Wait { seconds: u8 },
}

#[derive(Arbitrary, Debug)]
struct Input {
    rate: u16,
    actions: Vec<Action>,
}

fuzz_target!(|input: Input| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let admin = Address::generate(&env);
    let token_id = env.register(RewardToken, ());
    let token = RewardTokenClient::new(&env, &token_id);
    token.initialize(
        &admin,
        &7,
        &String::from_str(&env, "Reward Token"),
        &String::from_str(&env, "RWD"),
    );

    let rate = i128::from(input.rate);
    let staking_id = env.register(StakingContract, ());
    let staking = StakingContractClient::new(&env, &staking_id);
    staking.initialize(&admin, &token_id, &rate);

    let stakers: Vec<Address> = (0..4).map(|_| Address::generate(&env)).collect();
    for staker in &stakers {
        token.mint(staker, &FUNDED);
        token.approve(staker, &staking_id, &FUNDED, &100_000);
    }
    token.set_admin(&staking_id);

    let mut claimed = 0i128;
    for action in input.actions.iter().take(64) {
        match action {
            Action::Stake { who, amount } => {
                let staker = &stakers[usize::from(*who) % stakers.len()];
                let _ = staking.try_stake(staker, &i128::from(*amount));
            }
            Action::Withdraw { who, amount } => {
                let staker = &stakers[usize::from(*who) % stakers.len()];
                let _ = staking.try_withdraw(staker, &i128::from(*amount));
            }
            Action::Claim { who } => {
                claimed += staking.claim(&stakers[usize::from(*who) % stakers.len()]);
            }
            Action::Exit { who } => {
                claimed += staking.exit(&stakers[usize::from(*who) % stakers.len()]);
            }
            Action::Wait { seconds } => {
                env.ledger()
                    .set_timestamp(env.ledger().timestamp() + u64::from(*seconds));
            }
        }

        let staked: i128 = stakers.iter().map(|s| staking.staked_of(s)).sum();
        assert_eq!(staking.total_staked(), staked, "principal drifted");
        assert_eq!(staking.custody_balance(), staked, "custody drifted");
    }

    let pending: i128 = stakers.iter().map(|s| staking.earned(s)).sum();
    let elapsed = i128::from(env.ledger().timestamp() - START);
    assert!(claimed + pending <= rate * elapsed, "over-emission");
});
