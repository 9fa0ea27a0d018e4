use crate::*;

impl Linkdrop {
    /// Register `public_key` as the one-time credential for `drop` and add
    /// it to the contract as a function call access key scoped to the two
    /// claim methods. Panics if the key already backs a live drop.
    pub(crate) fn internal_register_key(
        &mut self,
        public_key: PublicKey,
        drop: &Drop,
    ) -> (DropId, Promise) {
        let drop_id = self.next_drop_id;
        self.next_drop_id += 1;

        require!(
            self.drop_id_for_pk.insert(&public_key, &drop_id).is_none(),
            "Public key is already registered for a drop"
        );
        self.drop_for_id.insert(&drop_id, drop);

        let promise = Promise::new(env::current_account_id()).add_access_key(
            public_key,
            drop.key_allowance(),
            env::current_account_id(),
            ACCESS_KEY_METHOD_NAMES.to_string(),
        );
        (drop_id, promise)
    }

    /// The single path by which a key stops working. Removes the key, its
    /// drop, and the access key together, in the current call, so an
    /// observer can never see one without the other. Panics with the
    /// missing-key error if the key was never registered or already spent.
    pub(crate) fn internal_consume_key(&mut self, public_key: &PublicKey) -> (DropId, Drop) {
        let drop_id = self
            .drop_id_for_pk
            .remove(public_key)
            .expect("No drop for public key");
        let drop = self.drop_for_id.remove(&drop_id).expect("No drop for id");

        Promise::new(env::current_account_id()).delete_key(public_key.clone());
        (drop_id, drop)
    }
}
