use near_sdk::{Balance, Gas};

/// Identifier handed out for each drop. Keys map to ids, ids map to the
/// escrowed reward, so consuming one mapping can never leave a dangling
/// pointer in the other.
pub type DropId = u64;

/// Minimum storage required to keep an access key on the contract
pub const ACCESS_KEY_STORAGE: Balance = 1_000_000_000_000_000_000_000; // 0.001 N

// Allowance the access key gets to cover gas when a drop is claimed. This
// amount is not reserved on the contract but must be available when gas is
// burnt using the key.
pub const ACCESS_KEY_ALLOWANCE: Balance = 20_000_000_000_000_000_000_000; // 0.02 N (200 TGas)
// Token claims batch a storage registration with the transfer and burn more
// gas, so their keys carry a larger allowance.
pub const FT_ACCESS_KEY_ALLOWANCE: Balance = 40_000_000_000_000_000_000_000; // 0.04 N (400 TGas)

/// Cost of creating a new account with the longest possible name
pub const CREATE_ACCOUNT_FEE: Balance = 1_840_000_000_000_000_000_000; // 0.00184 N

// Bytes occupied by one drop record: 32 (public key) + 96 (account id)
// + 128 (amounts and bookkeeping), at 10^19 yocto per byte. Token drops
// carry a second account id.
pub const NEAR_DROP_STORAGE: Balance = 2_560_000_000_000_000_000_000; // 256 bytes
pub const FT_DROP_STORAGE: Balance = 3_200_000_000_000_000_000_000; // 320 bytes

/// storage_deposit fronted on the token contract when the recipient of a
/// token payout is not registered there yet
pub const FT_REGISTRATION_DEPOSIT: Balance = 12_500_000_000_000_000_000_000; // 0.0125 N

/// Attached to ft_transfer calls, per NEP-141
pub const ONE_YOCTO: Balance = 1;

// Actual amount of gas to attach when creating a new account. No unspent gas
// is added on top of this (weight of 0)
pub const GAS_FOR_CREATE_ACCOUNT: Gas = Gas(28_000_000_000_000); // 28 TGas

// Minimum gas for the callbacks. Unspent gas is added according to weights.
pub const CREATE_CALLBACK_GAS: Gas = Gas(55_000_000_000_000); // 55 TGas
pub const CLAIM_CALLBACK_GAS: Gas = Gas(5_000_000_000_000); // 5 TGas
pub const FT_CLAIM_CALLBACK_GAS: Gas = Gas(15_000_000_000_000); // 15 TGas

// Token contract interactions
pub const MIN_GAS_FOR_STORAGE_DEPOSIT: Gas = Gas(5_000_000_000_000); // 5 TGas
pub const MIN_GAS_FOR_FT_TRANSFER: Gas = Gas(5_000_000_000_000); // 5 TGas
pub const GAS_FOR_STORAGE_BALANCE_OF: Gas = Gas(5_000_000_000_000); // 5 TGas
pub const REGISTRATION_CHECK_CALLBACK_GAS: Gas = Gas(10_000_000_000_000); // 10 TGas

/// Methods a drop key is allowed to call on this contract
pub const ACCESS_KEY_METHOD_NAMES: &str = "claim_for,create_account_and_claim";

/// Name and version stamped on every `EVENT_JSON` log line
pub const LINKDROP_STANDARD_NAME: &str = "linkdrop";
pub const LINKDROP_STANDARD_VERSION: &str = "1.0.0";
