use near_workspaces::result::ExecutionFinalResult;
use near_workspaces::types::{KeyType, SecretKey};

pub fn generate_keypairs(num_keys: u16) -> Vec<SecretKey> {
    let mut sks = vec![];

    for _ in 0..num_keys {
        // Generate a keypair
        sks.push(SecretKey::from_random(KeyType::ED25519));
    }

    sks
}

/// A transaction signed with a consumed drop key must fail, either at the
/// access key check (the key was deleted) or inside the contract.
pub fn assert_claim_rejected(res: Result<ExecutionFinalResult, near_workspaces::error::Error>) {
    let rejected = match res {
        Ok(outcome) => outcome.is_failure(),
        Err(_) => true,
    };
    assert!(rejected, "a consumed drop key must not claim again");
}
