//! Custom-action payloads round-tripped through the host.
//!
//! A result item can carry one of these as an opaque payload; the host
//! hands it back unchanged in an `activate` event.

use serde::{Deserialize, Serialize};

/// Item-activation actions dispatched back into the extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ItemAction {
    /// Start the container with this ID.
    Start { id: String },
    /// Stop the container with this ID.
    Stop { id: String },
    /// Restart the container with this ID.
    Restart { id: String },
    /// Show the details view for this ID.
    Details { id: String },
}

impl ItemAction {
    /// Serializes the action as an opaque host payload.
    #[must_use]
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Parses an action back out of a host payload.
    pub fn from_payload(payload: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(payload)
    }

    /// The container ID this action targets.
    #[must_use]
    pub fn container_id(&self) -> &str {
        match self {
            Self::Start { id } | Self::Stop { id } | Self::Restart { id } | Self::Details { id } => {
                id
            }
        }
    }
}
