use crate::*;

#[near_bindgen]
impl Linkdrop {
    /// Pay the reward behind the signing key out to an existing account.
    ///
    /// Callable only through the drop's function call access key (the key
    /// targets this contract, so the predecessor is the contract itself).
    /// The key is consumed before the payout is issued; a second call with
    /// the same key always fails with the missing-key error.
    #[private]
    pub fn claim_for(&mut self, account_id: AccountId) -> Promise {
        let public_key = env::signer_account_pk();
        let (drop_id, drop) = self.internal_consume_key(&public_key);

        log_event(EventLogVariant::Claim(ClaimLog {
            account_id: account_id.to_string(),
            drop_id,
            public_key: String::from(&public_key),
        }));

        drop.promise_for_claiming(account_id)
            .then(drop.promise_to_resolve_claim(false))
    }

    /// Create `account_id` under the top level account, seed it with the
    /// drop key as its full access key, then pay the reward out to it.
    /// The account name is validated (and rejected on collision) by the
    /// factory, whose verdict arrives in `on_account_created`.
    #[private]
    pub fn create_account_and_claim(&mut self, account_id: AccountId) -> Promise {
        let public_key = env::signer_account_pk();
        let (drop_id, drop) = self.internal_consume_key(&public_key);

        log_event(EventLogVariant::CreateAccountAndClaim(
            CreateAccountAndClaimLog {
                new_account_id: account_id.to_string(),
                drop_id,
                public_key: String::from(&public_key),
            },
        ));

        ext_account_creation::ext(self.top_level_account.clone())
            .with_attached_deposit(CREATE_ACCOUNT_FEE)
            .with_static_gas(GAS_FOR_CREATE_ACCOUNT)
            .with_unused_gas_weight(0)
            .create_account(account_id.clone(), public_key)
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(CREATE_CALLBACK_GAS)
                    .with_unused_gas_weight(0)
                    .on_account_created(account_id, drop),
            )
    }

    /// Continue a claim once the account factory reports its outcome.
    #[private]
    pub fn on_account_created(
        &mut self,
        account_id: AccountId,
        drop: Drop,
        #[callback_result] created: Result<bool, PromiseError>,
    ) -> PromiseOrValue<bool> {
        if !created.unwrap_or(false) {
            // The name collided, was invalid, or the factory failed. The key
            // is spent either way; the escrow goes back to the funder.
            near_sdk::log!(
                "Creating {} failed, refunding drop to {}",
                account_id,
                drop.funder_id
            );
            drop.refund_unclaimed(false);
            return PromiseOrValue::Value(false);
        }

        PromiseOrValue::Promise(
            drop.promise_for_claiming(account_id)
                .then(drop.promise_to_resolve_claim(true)),
        )
    }

    /// Final step of every claim: refund the funder what the payout did not
    /// consume, and the reward itself if the payout failed. Returns whether
    /// the reward was delivered.
    #[private]
    pub fn resolve_claim(
        &mut self,
        created: bool,
        drop: Drop,
        #[callback_result] result: Result<(), PromiseError>,
    ) -> bool {
        if result.is_err() {
            drop.refund_unclaimed(created);
            return false;
        }

        // Payout went through: only the overheads flow back.
        let mut to_refund = ACCESS_KEY_STORAGE + drop.storage_cost();
        if !created {
            to_refund += CREATE_ACCOUNT_FEE;
        }
        Promise::new(drop.funder_id).transfer(to_refund);
        true
    }
}
