use std::fmt;

use crate::*;

/// Enum that represents the data type of the EventLog.
#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
#[serde(crate = "near_sdk::serde")]
#[non_exhaustive]
pub enum EventLogVariant {
    DropCreation(DropCreationLog),
    DropRevocation(DropRevocationLog),
    Claim(ClaimLog),
    CreateAccountAndClaim(CreateAccountAndClaimLog),
}

/// Interface to capture data about an event
///
/// Arguments:
/// * `standard`: name of standard e.g. linkdrop
/// * `version`: e.g. 1.0.0
/// * `event`: associate event data
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct EventLog {
    pub standard: String,
    pub version: String,

    // `flatten` to not have "event": {<EventLogVariant>} in the JSON, just
    // have the contents of {<EventLogVariant>}.
    #[serde(flatten)]
    pub event: EventLogVariant,
}

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "EVENT_JSON:{}",
            &near_sdk::serde_json::to_string(self).map_err(|_| fmt::Error)?
        ))
    }
}

/// An event log to capture whenever a new drop is created
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct DropCreationLog {
    pub funder_id: String,
    pub drop_id: DropId,
    pub public_key: String,
    /// "near" or "ft"
    pub kind: String,
}

/// An event log to capture a drop being rolled back before it could be
/// claimed (e.g. the registration probe on the token contract failed)
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct DropRevocationLog {
    pub funder_id: String,
    pub drop_id: DropId,
    pub public_key: String,
    pub reason: String,
}

/// An event log to capture whenever a key is used to call `claim_for`
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct ClaimLog {
    pub account_id: String,
    pub drop_id: DropId,
    pub public_key: String,
}

/// An event log to capture whenever a key is used to call
/// `create_account_and_claim`
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct CreateAccountAndClaimLog {
    pub new_account_id: String,
    pub drop_id: DropId,
    pub public_key: String,
}

/// Helper to construct and log a single event.
pub(crate) fn log_event(event: EventLogVariant) {
    let log = EventLog {
        standard: LINKDROP_STANDARD_NAME.to_string(),
        version: LINKDROP_STANDARD_VERSION.to_string(),
        event,
    };
    env::log_str(&log.to_string());
}
