use serde::{Deserialize, Serialize};

use crate::protocol::Protocol;

/// Quick-setup instructions for one protocol: the one-line install command
/// plus a short positioning summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupCard {
    pub protocol: Protocol,
    pub title: String,
    pub icon: String,
    pub install: String,
    pub summary: String,
}
