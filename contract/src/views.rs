use crate::*;

/// Struct to return in views to query for specific data related to a key.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct JsonKeyInfo {
    pub public_key: PublicKey,
    pub drop_id: DropId,
    pub funder_id: AccountId,
    /// Native reward behind the key; zero for token drops
    pub balance: U128,
    /// Set for token drops only
    pub ft_contract: Option<AccountId>,
    pub ft_tokens: Option<U128>,
}

#[near_bindgen]
impl Linkdrop {
    /// Returns the $NEAR behind a key. Wallets query this to render the
    /// amount a link is worth.
    pub fn get_key_balance(&self, key: PublicKey) -> U128 {
        match self.key_info(&key).1.kind {
            DropKind::Near { tokens } => U128(tokens),
            DropKind::Ft { .. } => U128(0),
        }
    }

    /// Full record behind a live key.
    pub fn get_key_information(&self, key: PublicKey) -> JsonKeyInfo {
        let (drop_id, drop) = self.key_info(&key);
        let (balance, ft_contract, ft_tokens) = match drop.kind {
            DropKind::Near { tokens } => (U128(tokens), None, None),
            DropKind::Ft { ft_contract, tokens } => {
                (U128(0), Some(ft_contract), Some(U128(tokens)))
            }
        };

        JsonKeyInfo {
            public_key: key,
            drop_id,
            funder_id: drop.funder_id,
            balance,
            ft_contract,
            ft_tokens,
        }
    }

    /// Number of keys that can still claim.
    pub fn key_total_supply(&self) -> u64 {
        self.drop_id_for_pk.len()
    }

    /// Paginate through all live keys on the contract.
    pub fn get_keys(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<JsonKeyInfo> {
        let start = u128::from(from_index.unwrap_or(U128(0)));

        self.drop_id_for_pk
            .keys_as_vector()
            .iter()
            .skip(start as usize)
            .take(limit.unwrap_or(50) as usize)
            .map(|pk| self.get_key_information(pk))
            .collect()
    }

    /// Account factory new accounts are created under.
    pub fn get_top_level_account(&self) -> AccountId {
        self.top_level_account.clone()
    }

    /// Deposit required to open a native drop of `tokens`.
    pub fn near_drop_required_deposit(&self, tokens: U128) -> U128 {
        U128(
            tokens.0
                + CREATE_ACCOUNT_FEE
                + ACCESS_KEY_ALLOWANCE
                + ACCESS_KEY_STORAGE
                + NEAR_DROP_STORAGE,
        )
    }

    /// Deposit required to open a fungible token drop.
    pub fn ft_drop_required_deposit(&self) -> U128 {
        U128(CREATE_ACCOUNT_FEE + FT_ACCESS_KEY_ALLOWANCE + ACCESS_KEY_STORAGE + FT_DROP_STORAGE)
    }

    fn key_info(&self, key: &PublicKey) -> (DropId, Drop) {
        let drop_id = self.drop_id_for_pk.get(key).expect("No drop for public key");
        let drop = self.drop_for_id.get(&drop_id).expect("No drop for id");
        (drop_id, drop)
    }
}
