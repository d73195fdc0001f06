use soroban_sdk::{Address, Env, String};

/// Strkey of the ed25519 account whose public key is all zero bytes.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Strkey of the contract whose id is all zero bytes.
pub const NULL_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

/// Returns the all-zero account address.
pub fn null_account(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ACCOUNT))
}

/// Returns the all-zero contract address.
pub fn null_contract(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_CONTRACT))
}

/// Returns whether `address` is one of the all-zero placeholder addresses.
///
/// Nobody holds keys for these, so they are rejected wherever a real
/// participant or token is required. The address is encoded once and
/// compared as text; the placeholders are never parsed.
pub fn is_null(env: &Env, address: &Address) -> bool {
    let strkey = address.to_string();
    strkey == String::from_str(env, NULL_ACCOUNT) || strkey == String::from_str(env, NULL_CONTRACT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn null_strkeys_have_full_length() {
        assert_eq!(NULL_ACCOUNT.len(), 56);
        assert_eq!(NULL_CONTRACT.len(), 56);
    }

    #[test]
    fn null_strkeys_round_trip() {
        let env = Env::default();
        assert_eq!(
            null_account(&env).to_string(),
            String::from_str(&env, NULL_ACCOUNT)
        );
        assert_eq!(
            null_contract(&env).to_string(),
            String::from_str(&env, NULL_CONTRACT)
        );
    }

    #[test]
    fn zero_strkeys_are_null() {
        let env = Env::default();
        assert!(is_null(&env, &null_account(&env)));
        assert!(is_null(&env, &null_contract(&env)));
    }

    #[test]
    fn generated_address_is_not_null() {
        let env = Env::default();
        let address = Address::generate(&env);
        assert!(!is_null(&env, &address));
    }
}
