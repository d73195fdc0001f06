use soroban_sdk::{contractclient, log, token, Address, Env};

use crate::StakingError;

/// The minting half of the token interface. Matches both the reward token
/// in this workspace and the Stellar Asset Contract's admin `mint`.
#[allow(dead_code)]
#[contractclient(name = "MintClient")]
pub trait Mintable {
    fn mint(env: Env, to: Address, amount: i128);
}

/// Adapter over the tracked token contract.
///
/// Every call goes through the generated `try_*` client so a declined
/// transfer surfaces as `TransferFailed` rather than trapping, and the
/// caller decides whether to commit.
pub struct TokenLedger<'a> {
    env: &'a Env,
    address: Address,
}

impl<'a> TokenLedger<'a> {
    pub fn new(env: &'a Env, address: Address) -> Self {
        TokenLedger { env, address }
    }

    /// Pull `amount` from `from` into this contract's custody.
    ///
    /// Spends the allowance `from` granted to this contract, so the staker
    /// must have called `approve` beforehand.
    pub fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), StakingError> {
        let custody = self.env.current_contract_address();
        let client = token::Client::new(self.env, &self.address);
        match client.try_transfer_from(&custody, from, &custody, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "token transfer_from declined", from.clone(), amount);
                Err(StakingError::TransferFailed)
            }
        }
    }

    /// Return `amount` from custody to `to`.
    pub fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), StakingError> {
        let custody = self.env.current_contract_address();
        let client = token::Client::new(self.env, &self.address);
        match client.try_transfer(&custody, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "token transfer declined", to.clone(), amount);
                Err(StakingError::TransferFailed)
            }
        }
    }

    /// Issue `amount` fresh reward units to `to`. This contract must be the
    /// token admin.
    pub fn mint_reward(&self, to: &Address, amount: i128) -> Result<(), StakingError> {
        let client = MintClient::new(self.env, &self.address);
        match client.try_mint(to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "token mint declined", to.clone(), amount);
                Err(StakingError::TransferFailed)
            }
        }
    }

    pub fn balance_of(&self, who: &Address) -> i128 {
        token::Client::new(self.env, &self.address).balance(who)
    }
}
