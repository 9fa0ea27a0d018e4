/*!
Linkdrop is an escrow contract for onboarding users with a link instead of an
account. A creator funds a *drop* (some $NEAR, or a single fungible token
unit) and ties it to a one-time keypair. The private key travels inside a
link; whoever opens the link can redeem the drop with:
- An **existing** NEAR account through the `claim_for` function.
- A new account that doesn't exist yet, created through the
  `create_account_and_claim` function.

Each drop key is added to this contract as a function call access key that
can only invoke those two methods, so presenting the key *is* the
authorization. A key authorizes exactly one claim: the first successful use
removes it, and every later use fails with the same missing-key error.

# Custody

The creator's attached deposit must cover the reward plus a fixed overhead
(account creation fee, access key storage and gas allowance, and the bytes
the drop record occupies on this contract). The contract therefore always
holds at least enough balance to settle every open drop. When a claim
resolves, whatever overhead was not consumed flows back to the funder; when
a payout fails after the key was spent, the reward itself flows back too.

# Fungible token drops

Token drops are funded in two legs. `create_ft_drop` registers the key and
escrows the overhead, then the creator pushes the token through the token
contract's `ft_transfer_call`, whose `msg` carries the drop's public key.
At claim time the contract fronts the recipient's storage registration on
the token contract before transferring the token.
!*/

use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LookupMap, UnorderedMap};
use near_sdk::json_types::U128;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::serde_json::json;
use near_sdk::{
    env, near_bindgen, require, AccountId, Balance, BorshStorageKey, PanicOnDefault, Promise,
    PromiseError, PromiseOrValue, PublicKey,
};

mod claim;
mod drop_creation;
mod ft;
mod internals;
mod models;
mod views;

use internals::*;
use models::*;

#[derive(BorshSerialize, BorshStorageKey)]
enum StorageKey {
    DropIdForPk,
    DropForId,
}

#[near_bindgen]
#[derive(PanicOnDefault, BorshDeserialize, BorshSerialize)]
pub struct Linkdrop {
    /// Account factory that `create_account_and_claim` asks for new accounts
    /// (i.e. `near` or `testnet`)
    pub top_level_account: AccountId,

    // Map each one-time key to the drop it authorizes
    pub drop_id_for_pk: UnorderedMap<PublicKey, DropId>,
    // Map the id to the escrowed reward itself
    pub drop_for_id: LookupMap<DropId, Drop>,

    // Nonce handing out drop ids
    pub next_drop_id: DropId,
}

#[near_bindgen]
impl Linkdrop {
    /// Initialize the contract with the account factory new accounts will be
    /// created under. Can only run once.
    #[init]
    #[private]
    pub fn new(top_level_account: AccountId) -> Self {
        Self {
            top_level_account,
            drop_id_for_pk: UnorderedMap::new(StorageKey::DropIdForPk),
            drop_for_id: LookupMap::new(StorageKey::DropForId),
            next_drop_id: 0,
        }
    }
}
