//! Result items rendered by the plugin host.

use serde::{Deserialize, Serialize};

use super::response::Response;

/// A single row in the rendered result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Icon path relative to the plugin directory.
    pub icon: String,
    /// Primary row text.
    pub name: String,
    /// Secondary row text.
    #[serde(default)]
    pub description: String,
    /// Whether the host may fuzzy-highlight the row against the query.
    #[serde(default = "default_highlightable")]
    pub highlightable: bool,
    /// Action to run when the item is activated.
    pub on_enter: Response,
    /// Optional action for alt-activation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_alt_enter: Option<Response>,
}

fn default_highlightable() -> bool {
    true
}

impl ResultItem {
    /// Creates an item with the given icon and name, hiding the window
    /// on activation.
    #[must_use]
    pub fn new(icon: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            name: name.into(),
            description: String::new(),
            highlightable: true,
            on_enter: Response::Hide,
            on_alt_enter: None,
        }
    }

    /// Sets the description text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the row as not highlightable.
    #[must_use]
    pub fn not_highlightable(mut self) -> Self {
        self.highlightable = false;
        self
    }

    /// Sets the activation action.
    #[must_use]
    pub fn on_enter(mut self, action: Response) -> Self {
        self.on_enter = action;
        self
    }

    /// Sets the alt-activation action.
    #[must_use]
    pub fn on_alt_enter(mut self, action: Response) -> Self {
        self.on_alt_enter = Some(action);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_item_defaults() {
        let item = ResultItem::new("images/icon.png", "Nginx");
        assert!(item.highlightable);
        assert_eq!(item.on_enter, Response::Hide);
        assert!(item.on_alt_enter.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let item = ResultItem::new("images/icon_ip.png", "IP Address")
            .description("172.17.0.2")
            .not_highlightable()
            .on_enter(Response::open_url("172.17.0.2"))
            .on_alt_enter(Response::copy("172.17.0.2"));
        assert_eq!(item.description, "172.17.0.2");
        assert!(!item.highlightable);
        assert!(item.on_alt_enter.is_some());
    }

    #[test]
    fn test_alt_enter_omitted_from_json() {
        let item = ResultItem::new("images/icon.png", "row");
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("on_alt_enter"));
    }
}
