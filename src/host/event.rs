//! Events received from the plugin host.

use serde::{Deserialize, Serialize};

/// An event delivered by the host, one JSON object per stdin line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// The user typed `<trigger-word> <argument>` into the search box.
    Query {
        /// The trigger word as configured by the user (not the logical ID).
        keyword: String,
        /// Free text after the trigger word. Empty when the user typed
        /// only the keyword.
        #[serde(default)]
        argument: String,
    },
    /// The user activated a result item that carried a custom payload.
    Activate {
        /// Opaque payload attached to the item when it was rendered.
        payload: serde_json::Value,
    },
}
