//! Responses and item actions sent to the plugin host.

use serde::{Deserialize, Serialize};

use super::item::ResultItem;

/// A response primitive understood by the host.
///
/// The same set doubles as item actions: a `Response` is attached to a
/// result item as its `on_enter`/`on_alt_enter`, and is also what the
/// plugin writes back for a whole event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    /// Render a flat list of result items.
    Render { items: Vec<ResultItem> },
    /// Hide the launcher window.
    Hide,
    /// Open a URL with the default handler.
    OpenUrl { url: String },
    /// Copy text to the clipboard.
    Copy { text: String },
    /// Run a shell command (terminal spawn goes through this).
    RunScript { command: String },
    /// Re-enter the plugin with an opaque payload via an `activate` event.
    Custom {
        payload: serde_json::Value,
        /// Keep the launcher window open after activation.
        #[serde(default)]
        keep_open: bool,
    },
    /// No visible response.
    None,
}

impl Response {
    /// Renders a list of items.
    #[must_use]
    pub fn render(items: Vec<ResultItem>) -> Self {
        Self::Render { items }
    }

    /// Renders a single item.
    #[must_use]
    pub fn render_one(item: ResultItem) -> Self {
        Self::Render { items: vec![item] }
    }

    /// Opens a URL.
    #[must_use]
    pub fn open_url(url: impl Into<String>) -> Self {
        Self::OpenUrl { url: url.into() }
    }

    /// Copies text to the clipboard.
    #[must_use]
    pub fn copy(text: impl Into<String>) -> Self {
        Self::Copy { text: text.into() }
    }

    /// Runs a shell command.
    #[must_use]
    pub fn run_script(command: impl Into<String>) -> Self {
        Self::RunScript {
            command: command.into(),
        }
    }

    /// Wraps an opaque payload as a custom action.
    #[must_use]
    pub fn custom(payload: serde_json::Value, keep_open: bool) -> Self {
        Self::Custom { payload, keep_open }
    }

    /// Returns the rendered items, if this is a render response.
    #[must_use]
    pub fn items(&self) -> Option<&[ResultItem]> {
        match self {
            Self::Render { items } => Some(items),
            _ => None,
        }
    }
}
