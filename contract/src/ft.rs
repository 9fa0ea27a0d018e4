use crate::*;

#[near_bindgen]
impl Linkdrop {
    /// NEP-141 hook: tokens arrived with a drop key as the message. This is
    /// the funding leg of a drop opened by `create_ft_drop`.
    ///
    /// Any panic here makes the token contract return the full amount to
    /// `sender_id`, which is exactly the refund-on-reject behavior wanted
    /// for a malformed funding attempt.
    pub fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: PublicKey,
    ) -> PromiseOrValue<U128> {
        let drop_id = self
            .drop_id_for_pk
            .get(&msg)
            .expect("No drop for public key");
        let mut drop = self.drop_for_id.get(&drop_id).expect("No drop for id");

        match &mut drop.kind {
            DropKind::Ft { ft_contract, tokens } => {
                require!(
                    *ft_contract == env::predecessor_account_id(),
                    format!("Wrong token contract, expected {ft_contract}")
                );
                require!(*tokens == 0, "Drop is already funded");
                // The drop carries one indivisible token unit, nothing else.
                require!(
                    amount.0 == 1,
                    "Drop must be funded with exactly one token unit"
                );
                *tokens = amount.0;
            }
            DropKind::Near { .. } => env::panic_str("Not a fungible token drop"),
        }
        self.drop_for_id.insert(&drop_id, &drop);

        near_sdk::log!("Drop {} funded by {}", drop_id, sender_id);

        // The whole transfer is kept
        PromiseOrValue::Value(U128(0))
    }
}
