//! Reservation records.

use serde::{Deserialize, Serialize};

/// A single booking of one unit of a tool.
///
/// `return_date` is an opaque label ("June 01"); it is stored and shown
/// verbatim with no calendar semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    username: String,
    return_date: String,
}

impl Reservation {
    pub fn new(username: impl Into<String>, return_date: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            return_date: return_date.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn return_date(&self) -> &str {
        &self.return_date
    }
}
