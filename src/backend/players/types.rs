/**
 * Player Handler Types
 *
 * Request and response bodies for `POST /api/login`.
 */

use serde::{Deserialize, Serialize};

use crate::shared::{Identity, Outcome};

/// Login request
///
/// Both fields are optional at the decoding stage so that a missing phone is
/// reported as a validation error rather than a decoding failure.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct LoginRequest {
    /// Display name, only stored on first login
    pub name: Option<String>,
    /// Phone number, the player's identity
    pub phone: Option<String>,
}

/// Login response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub user: Identity,
    /// Whether a result has already been recorded for this phone
    pub has_played: bool,
    /// The recorded outcome, `null` until played
    pub status: Option<Outcome>,
}
