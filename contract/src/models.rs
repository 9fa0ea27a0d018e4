use crate::*;

/// Reward escrowed behind a single one-time key.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Drop {
    /// Who funded the drop; receives refunds whenever a claim falls through
    pub funder_id: AccountId,
    pub kind: DropKind,
}

/// Closed set of reward kinds. Every payout and refund path matches on this
/// exhaustively so a new kind can never silently fall through a claim.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub enum DropKind {
    Near {
        tokens: Balance,
    },
    Ft {
        ft_contract: AccountId,
        tokens: Balance,
    },
}

impl Drop {
    /// Deposit a creator must attach to open this drop: the reward (native
    /// drops only, token drops are funded separately) plus the fixed
    /// overhead the contract fronts on the claimer's behalf.
    pub fn required_deposit(&self) -> Balance {
        match &self.kind {
            DropKind::Near { tokens } => {
                tokens + CREATE_ACCOUNT_FEE + ACCESS_KEY_ALLOWANCE + ACCESS_KEY_STORAGE
                    + NEAR_DROP_STORAGE
            }
            DropKind::Ft { .. } => {
                CREATE_ACCOUNT_FEE + FT_ACCESS_KEY_ALLOWANCE + ACCESS_KEY_STORAGE + FT_DROP_STORAGE
            }
        }
    }

    /// Gas allowance granted to the drop's access key.
    pub fn key_allowance(&self) -> Balance {
        match &self.kind {
            DropKind::Near { .. } => ACCESS_KEY_ALLOWANCE,
            DropKind::Ft { .. } => FT_ACCESS_KEY_ALLOWANCE,
        }
    }

    /// Bytes cost of the drop record, released back to the funder on close.
    pub fn storage_cost(&self) -> Balance {
        match &self.kind {
            DropKind::Near { .. } => NEAR_DROP_STORAGE,
            DropKind::Ft { .. } => FT_DROP_STORAGE,
        }
    }

    /// Promise that pays the reward out to `account_id`.
    pub fn promise_for_claiming(&self, account_id: AccountId) -> Promise {
        match &self.kind {
            DropKind::Near { tokens } => Promise::new(account_id).transfer(*tokens),
            DropKind::Ft { ft_contract, tokens } => {
                require!(*tokens > 0, "Drop has not been funded with tokens");

                // One batch: the recipient is storage-registered before the
                // token moves, and a failure of either action fails both.
                Promise::new(ft_contract.clone())
                    .function_call(
                        "storage_deposit".to_string(),
                        json!({ "account_id": account_id })
                            .to_string()
                            .into_bytes(),
                        FT_REGISTRATION_DEPOSIT,
                        MIN_GAS_FOR_STORAGE_DEPOSIT,
                    )
                    .function_call(
                        "ft_transfer".to_string(),
                        json!({ "receiver_id": account_id, "amount": U128(*tokens) })
                            .to_string()
                            .into_bytes(),
                        ONE_YOCTO,
                        MIN_GAS_FOR_FT_TRANSFER,
                    )
            }
        }
    }

    /// Callback that settles refunds once the payout outcome is known.
    pub fn promise_to_resolve_claim(&self, created: bool) -> Promise {
        let gas = match &self.kind {
            DropKind::Near { .. } => CLAIM_CALLBACK_GAS,
            DropKind::Ft { .. } => FT_CLAIM_CALLBACK_GAS,
        };

        Linkdrop::ext(env::current_account_id())
            .with_static_gas(gas)
            .with_unused_gas_weight(0)
            .resolve_claim(created, self.clone())
    }

    /// Return everything still escrowed for this drop to its funder. Used
    /// once a claim has consumed the key but the reward never went out.
    pub fn refund_unclaimed(&self, created: bool) {
        let mut to_refund = ACCESS_KEY_STORAGE + self.storage_cost();
        if !created {
            to_refund += CREATE_ACCOUNT_FEE;
        }

        match &self.kind {
            DropKind::Near { tokens } => to_refund += *tokens,
            DropKind::Ft { ft_contract, tokens } => {
                // The tokens never left this contract's balance on the token
                // contract, send them back where they came from.
                if *tokens > 0 {
                    ext_ft_contract::ext(ft_contract.clone())
                        .with_attached_deposit(ONE_YOCTO)
                        .with_static_gas(MIN_GAS_FOR_FT_TRANSFER)
                        .ft_transfer(
                            self.funder_id.clone(),
                            U128(*tokens),
                            Some("Linkdrop refund".to_string()),
                        );
                }
            }
        }

        Promise::new(self.funder_id.clone()).transfer(to_refund);
    }
}
