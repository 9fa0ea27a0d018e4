use crate::*;

#[near_bindgen]
impl Linkdrop {
    /// Escrow `tokens` of $NEAR behind `public_key`. The attached deposit
    /// must cover the reward plus the fixed claim overhead; anything above
    /// that stays with the contract as surplus.
    #[payable]
    pub fn create_near_drop(&mut self, public_key: PublicKey, tokens: U128) -> Promise {
        require!(tokens.0 >= 1, "Give at least 1 yoctoNEAR");

        let drop = Drop {
            funder_id: env::predecessor_account_id(),
            kind: DropKind::Near { tokens: tokens.0 },
        };
        self.assert_required_deposit(&drop);

        let (drop_id, promise) = self.internal_register_key(public_key.clone(), &drop);
        log_event(EventLogVariant::DropCreation(DropCreationLog {
            funder_id: drop.funder_id.to_string(),
            drop_id,
            public_key: String::from(&public_key),
            kind: "near".to_string(),
        }));

        promise
    }

    /// Register a fungible token drop behind `public_key`. The deposit only
    /// covers overhead; the token itself arrives later through the token
    /// contract's `ft_transfer_call` (see [`Linkdrop::ft_on_transfer`]).
    ///
    /// A creator that never storage-registered this contract on the token
    /// contract could otherwise only find out when a claim fails, so a
    /// registration probe is fired here and the drop is revoked (deposit
    /// returned) if the probe comes back empty.
    #[payable]
    pub fn create_ft_drop(&mut self, public_key: PublicKey, ft_contract: AccountId) -> Promise {
        let drop = Drop {
            funder_id: env::predecessor_account_id(),
            kind: DropKind::Ft {
                ft_contract: ft_contract.clone(),
                tokens: 0,
            },
        };
        self.assert_required_deposit(&drop);

        let (drop_id, _) = self.internal_register_key(public_key.clone(), &drop);
        log_event(EventLogVariant::DropCreation(DropCreationLog {
            funder_id: drop.funder_id.to_string(),
            drop_id,
            public_key: String::from(&public_key),
            kind: "ft".to_string(),
        }));

        ext_ft_contract::ext(ft_contract)
            .with_static_gas(GAS_FOR_STORAGE_BALANCE_OF)
            .storage_balance_of(env::current_account_id())
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(REGISTRATION_CHECK_CALLBACK_GAS)
                    .with_unused_gas_weight(0)
                    .resolve_contract_registered(public_key, U128(env::attached_deposit())),
            )
    }

    /// Callback for the registration probe fired by `create_ft_drop`.
    #[private]
    pub fn resolve_contract_registered(
        &mut self,
        public_key: PublicKey,
        attached: U128,
        #[callback_result] balance: Result<Option<StorageBalance>, PromiseError>,
    ) -> bool {
        if matches!(balance, Ok(Some(_))) {
            return true;
        }

        // The token contract cannot pay this contract out, so the drop can
        // never be funded. Revoke it now and return the creator's deposit.
        let (drop_id, drop) = self.internal_consume_key(&public_key);
        Promise::new(drop.funder_id.clone()).transfer(attached.0);

        log_event(EventLogVariant::DropRevocation(DropRevocationLog {
            funder_id: drop.funder_id.to_string(),
            drop_id,
            public_key: String::from(&public_key),
            reason: "linkdrop contract is not registered on the token contract".to_string(),
        }));
        false
    }

    fn assert_required_deposit(&self, drop: &Drop) {
        let required = drop.required_deposit();
        require!(
            env::attached_deposit() >= required,
            format!("Attach at least {required} yoctoNEAR")
        );
    }
}
