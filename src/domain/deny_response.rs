use serde::{Deserialize, Serialize};

/// Body returned whenever the gate rejects a request.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct DenyResponse {
    pub code: u16,
    pub message: String,
    pub date: String,
}
