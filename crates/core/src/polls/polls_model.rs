//! Poll domain models.

use serde::{Deserialize, Serialize};

/// One selectable answer. Option ids are 1-based and sequential
/// within their poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub id: i64,
    pub text: String,
    pub votes: u32,
}

/// Domain model representing a group poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: i64,
    pub question: String,
    pub options: Vec<PollOption>,
}
