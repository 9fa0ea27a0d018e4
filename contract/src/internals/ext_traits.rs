use near_sdk::ext_contract;

use crate::*;

/// Account factory living on the top level account
#[ext_contract(ext_account_creation)]
pub trait ExtAccountCreation {
    fn create_account(&mut self, new_account_id: AccountId, new_public_key: PublicKey) -> Promise;
}

/// NEP-141 token contract drops pay out on
#[ext_contract(ext_ft_contract)]
pub trait ExtFtContract {
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>);

    fn storage_deposit(&mut self, account_id: Option<AccountId>, registration_only: Option<bool>);

    fn storage_balance_of(&self, account_id: AccountId) -> Option<StorageBalance>;
}

/// Returned from the storage balance query on the token contract
#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct StorageBalance {
    pub total: U128,
    pub available: U128,
}
