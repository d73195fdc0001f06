use soroban_sdk::{symbol_short, Address, Env};

// Topic layout follows the Stellar Asset Contract so indexers can treat
// this token like any other.

pub fn publish_mint(env: &Env, admin: Address, to: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("mint"), admin, to), amount);
}

pub fn publish_burn(env: &Env, from: Address, amount: i128) {
    env.events().publish((symbol_short!("burn"), from), amount);
}

pub fn publish_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("transfer"), from, to), amount);
}

pub fn publish_approve(
    env: &Env,
    from: Address,
    spender: Address,
    amount: i128,
    expiration_ledger: u32,
) {
    env.events().publish(
        (symbol_short!("approve"), from, spender),
        (amount, expiration_ledger),
    );
}

pub fn publish_set_admin(env: &Env, admin: Address, new_admin: Address) {
    env.events()
        .publish((symbol_short!("set_admin"), admin), new_admin);
}
