//! Randomised checks of the accrual ledger: conservation of principal,
//! bounded emission, single-staker linearity and the pro-rata split.

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use reward_token::{RewardToken, RewardTokenClient};
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::{Address, Env, String};
use std::vec::Vec;

use crate::ledger::{Pool, StakerState};
use crate::rewards;
use crate::{StakingContract, StakingContractClient};

const RATE: i128 = 10;
const START: u64 = 1_000;
const FUNDED: i128 = 100_000;
const STAKERS: usize = 3;

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Stake(
        #[proptest(strategy = "0..STAKERS")] usize,
        #[proptest(strategy = "1i128..5_000")] i128,
    ),
    Withdraw(
        #[proptest(strategy = "0..STAKERS")] usize,
        #[proptest(strategy = "1i128..5_000")] i128,
    ),
    Claim(#[proptest(strategy = "0..STAKERS")] usize),
    Exit(#[proptest(strategy = "0..STAKERS")] usize),
    Advance(#[proptest(strategy = "0u64..30")] u64),
}

struct Harness<'a> {
    env: &'a Env,
    staking: StakingContractClient<'a>,
    token: RewardTokenClient<'a>,
    stakers: Vec<Address>,
}

impl<'a> Harness<'a> {
    fn new(env: &'a Env, rate: i128) -> Self {
        env.mock_all_auths();
        env.ledger().set_timestamp(START);

        let admin = Address::generate(env);
        let token_id = env.register(RewardToken, ());
        let token = RewardTokenClient::new(env, &token_id);
        token.initialize(
            &admin,
            &7,
            &String::from_str(env, "Reward Token"),
            &String::from_str(env, "RWD"),
        );

        let staking_id = env.register(StakingContract, ());
        let staking = StakingContractClient::new(env, &staking_id);
        staking.initialize(&admin, &token_id, &rate);

        let stakers: Vec<Address> = (0..STAKERS).map(|_| Address::generate(env)).collect();
        for staker in &stakers {
            token.mint(staker, &FUNDED);
            token.approve(staker, &staking_id, &FUNDED, &10_000);
        }
        token.set_admin(&staking_id);

        Harness {
            env,
            staking,
            token,
            stakers,
        }
    }

    fn advance(&self, seconds: u64) {
        self.env
            .ledger()
            .set_timestamp(self.env.ledger().timestamp() + seconds);
    }

    /// Applies `op`, returning the reward paid out if it was a successful claim.
    fn apply(&self, op: &Op) -> i128 {
        match op {
            Op::Stake(i, amount) => {
                let _ = self.staking.try_stake(&self.stakers[*i], amount);
                0
            }
            Op::Withdraw(i, amount) => {
                let _ = self.staking.try_withdraw(&self.stakers[*i], amount);
                0
            }
            Op::Claim(i) => self.staking.claim(&self.stakers[*i]),
            Op::Exit(i) => self.staking.exit(&self.stakers[*i]),
            Op::Advance(seconds) => {
                self.advance(*seconds);
                0
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn principal_is_conserved(ops in prop::collection::vec(any::<Op>(), 1..40)) {
        let env = Env::default();
        let harness = Harness::new(&env, RATE);

        for op in &ops {
            harness.apply(op);

            let sum: i128 = harness
                .stakers
                .iter()
                .map(|s| harness.staking.staked_of(s))
                .sum();
            prop_assert_eq!(harness.staking.total_staked(), sum);
            prop_assert_eq!(harness.staking.custody_balance(), sum);

            for staker in &harness.stakers {
                let state = harness.staking.get_staker(staker);
                prop_assert!(state.reward_per_token_paid <= harness.staking.get_pool().reward_per_token_stored);
                prop_assert!(state.rewards >= 0);
            }
        }
    }

    #[test]
    fn emission_never_exceeds_rate_times_elapsed(ops in prop::collection::vec(any::<Op>(), 1..40)) {
        let env = Env::default();
        let harness = Harness::new(&env, RATE);

        let mut claimed = 0i128;
        for op in &ops {
            claimed += harness.apply(op);
        }

        let pending: i128 = harness
            .stakers
            .iter()
            .map(|s| harness.staking.earned(s))
            .sum();
        let elapsed = i128::from(env.ledger().timestamp() - START);

        prop_assert!(claimed + pending <= RATE * elapsed);
        let minted: i128 = harness
            .stakers
            .iter()
            .map(|s| harness.token.balance(s) + harness.staking.staked_of(s))
            .sum();
        prop_assert_eq!(minted, FUNDED * STAKERS as i128 + claimed);
    }

    #[test]
    fn single_staker_earns_full_rate(
        balance in 1i128..FUNDED,
        seconds in 1u64..10_000,
        rate in 0i128..1_000,
    ) {
        let env = Env::default();
        let harness = Harness::new(&env, rate);
        let alice = harness.stakers[0].clone();

        harness.staking.stake(&alice, &balance);
        harness.advance(seconds);

        // Scaling by the stake truncates at most one unit away.
        let claimed = harness.staking.claim(&alice);
        let emitted = rate * i128::from(seconds);
        prop_assert!(claimed <= emitted && claimed >= emitted - 1);
    }

    #[test]
    fn two_stakers_split_pro_rata(
        b1 in 1i128..1_000_000_000,
        b2 in 1i128..1_000_000_000,
        seconds in 1u64..100_000,
    ) {
        let mut pool = Pool::genesis(RATE, 0);
        let mut alice = StakerState::default();
        let mut bob = StakerState::default();

        pool.update_reward(&mut alice, 0).unwrap();
        pool.deposit(&mut alice, b1).unwrap();
        pool.update_reward(&mut bob, 0).unwrap();
        pool.deposit(&mut bob, b2).unwrap();

        pool.update_reward(&mut alice, seconds).unwrap();
        pool.settle(&mut bob).unwrap();

        let emitted = RATE * i128::from(seconds);
        let total = b1 + b2;

        // Each share is within two units of the exact rational split.
        prop_assert!((alice.rewards * total - emitted * b1).abs() <= 2 * total);
        prop_assert!((bob.rewards * total - emitted * b2).abs() <= 2 * total);

        let paid = alice.rewards + bob.rewards;
        prop_assert!(paid <= emitted && paid >= emitted - 2);
    }

    #[test]
    fn accrual_is_additive_over_time_partitions(
        staked in 1i128..1_000_000_000_000,
        steps in prop::collection::vec(1u64..1_000, 1..50),
    ) {
        let whole_elapsed: u64 = steps.iter().sum();

        let whole = rewards::compute_reward_per_token(0, RATE, whole_elapsed, staked).unwrap();
        let split = steps.iter().fold(0i128, |rpt, dt| {
            rewards::compute_reward_per_token(rpt, RATE, *dt, staked).unwrap()
        });

        // Truncation loses under one scaled unit per step.
        prop_assert!(whole - split >= 0);
        prop_assert!(whole - split < steps.len() as i128);

        let whole_reward = rewards::earned(staked, whole, 0, 0).unwrap();
        let split_reward = rewards::earned(staked, split, 0, 0).unwrap();
        prop_assert!(whole_reward - split_reward <= 1);
    }
}
