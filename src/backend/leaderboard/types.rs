/**
 * Leaderboard Handler Types
 *
 * Request and response bodies for `POST /api/leaderboard/record`.
 */

use serde::{Deserialize, Serialize};

use crate::shared::Attempt;

/// Record result request
///
/// Every field is optional at the decoding stage; the handler reports what is
/// missing as a validation error.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecordRequest {
    /// Accepted and length-checked, but the attempt keeps the name given at login
    pub name: Option<String>,
    pub phone: Option<String>,
    /// `"win"` or `"draw"`
    pub result: Option<String>,
    /// Seconds the game took
    pub time_used: Option<f64>,
}

/// Record result response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RecordResponse {
    pub message: String,
    pub entry: Attempt,
}
