//! Extension entry point.
//!
//! Owns the (possibly absent) daemon client handle and the availability
//! flag probed once at startup, classifies host events into intents, and
//! dispatches item activations back into daemon operations.
//!
//! The one invariant that matters: when the startup probe did not report
//! the daemon as available, no code path reaches the client. The handle
//! is simply not constructed, so every action short-circuits with a
//! rendered row or a notification.

pub mod actions;

use std::process::{Command, Stdio};

pub use actions::ItemAction;

use crate::config::{Config, KeywordId};
use crate::docker::{DockerAvailability, DockerClient, DockerError};
use crate::host::{HostEvent, Response, ResultItem};
use crate::validate;
use crate::views;

/// Maximum rows in the container list.
const MAX_LIST_ITEMS: usize = 8;

/// Maximum notification body length.
const MAX_NOTIFICATION_LEN: usize = 200;

/// Documentation search URL prefix.
const DOCS_SEARCH_URL: &str = "https://docs.docker.com/search/?q=";

/// Truncates a notification body to a displayable length.
#[must_use]
pub(crate) fn truncate_notification(text: &str) -> String {
    if text.len() > MAX_NOTIFICATION_LEN {
        let mut end = MAX_NOTIFICATION_LEN;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    } else {
        text.to_string()
    }
}

/// The extension entry point.
pub struct Extension {
    config: Config,
    availability: DockerAvailability,
    client: Option<DockerClient>,
}

impl Extension {
    /// Creates the extension, probing the daemon once.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let availability = DockerClient::check_availability();
        if !availability.is_available() {
            tracing::warn!("Docker daemon not available: {:?}", availability);
        }
        Self::with_availability(config, availability)
    }

    /// Creates the extension with a pre-determined availability.
    ///
    /// The client handle exists only when the daemon is available.
    #[must_use]
    pub fn with_availability(config: Config, availability: DockerAvailability) -> Self {
        let client = availability.is_available().then(DockerClient::new);
        Self {
            config,
            availability,
            client,
        }
    }

    /// The availability recorded at startup.
    #[must_use]
    pub fn availability(&self) -> &DockerAvailability {
        &self.availability
    }

    /// Handles one host event.
    pub fn handle_event(&mut self, event: HostEvent) -> Response {
        match event {
            HostEvent::Query { keyword, argument } => self.handle_query(&keyword, &argument),
            HostEvent::Activate { payload } => self.handle_activate(&payload),
        }
    }

    /// Classifies a query into an intent and dispatches it.
    fn handle_query(&mut self, keyword: &str, argument: &str) -> Response {
        if !validate::is_valid_query(argument) {
            return views::invalid_query("Query contains invalid characters");
        }

        let kw = self.config.keyword_id(keyword);
        tracing::debug!(
            "query keyword={} ({}) argument={:?}",
            keyword,
            kw.as_str(),
            argument
        );

        match kw {
            KeywordId::Info => self.show_docker_info(),
            KeywordId::Prune => self.prune(),
            KeywordId::Documentation => self.search_documentation(argument),
            KeywordId::Containers => self.list_containers(argument),
        }
    }

    /// Dispatches an item-activation payload.
    fn handle_activate(&mut self, payload: &serde_json::Value) -> Response {
        let action = match ItemAction::from_payload(payload) {
            Ok(action) => action,
            Err(e) => {
                tracing::warn!("unrecognized activation payload: {}", e);
                return Response::None;
            }
        };

        match action {
            ItemAction::Start { id } => self.start_container(&id),
            ItemAction::Stop { id } => self.stop_container(&id),
            ItemAction::Restart { id } => self.restart_container(&id),
            ItemAction::Details { id } => self.show_container_details(&id),
        }
    }

    /// Shows daemon information.
    pub fn show_docker_info(&self) -> Response {
        let Some(client) = self.client.as_ref() else {
            return views::daemon_unavailable();
        };

        match client.server_version() {
            Ok(info) => views::info::render(&info),
            Err(e) => {
                tracing::error!("failed to query daemon version: {}", e);
                self.notify(&format!("Failed to query Docker daemon: {}", e));
                Response::Hide
            }
        }
    }

    /// Lists running containers, filtered by name.
    pub fn list_containers(&self, query: &str) -> Response {
        let name_filter = if query.is_empty() {
            None
        } else if validate::is_valid_name_filter(query) {
            Some(query)
        } else {
            return views::invalid_container_name();
        };

        let Some(client) = self.client.as_ref() else {
            return views::daemon_unavailable();
        };

        match client.list_containers(name_filter, true, MAX_LIST_ITEMS) {
            Ok(containers) => views::list_containers::render(&containers, query),
            Err(e) => {
                tracing::error!("container listing failed: {}", e);
                self.notify(&format!("Failed to list containers: {}", e));
                Response::Hide
            }
        }
    }

    /// Shows the details view for a container.
    pub fn show_container_details(&self, container_id: &str) -> Response {
        let Some(client) = self.client.as_ref() else {
            return views::daemon_unavailable();
        };

        match client.inspect(container_id) {
            Ok(details) => {
                views::container_details::render(&details, &self.config.default_terminal)
            }
            Err(DockerError::NotFound(_)) => views::container_details::not_found(container_id),
            Err(e) => {
                tracing::error!("inspect failed for {}: {}", container_id, e);
                self.notify(&format!("Failed to inspect container: {}", e));
                Response::Hide
            }
        }
    }

    /// Starts a container.
    pub fn start_container(&self, container_id: &str) -> Response {
        self.container_action(container_id, "start", "started", DockerClient::start)
    }

    /// Stops a container.
    pub fn stop_container(&self, container_id: &str) -> Response {
        self.container_action(container_id, "stop", "stopped", DockerClient::stop)
    }

    /// Restarts a container.
    pub fn restart_container(&self, container_id: &str) -> Response {
        self.container_action(container_id, "restart", "restarted", DockerClient::restart)
    }

    /// Shared start/stop/restart flow: validate the ID, require the
    /// daemon, run the operation, notify the outcome.
    fn container_action(
        &self,
        container_id: &str,
        verb: &str,
        done: &str,
        op: impl Fn(&DockerClient, &str) -> Result<(), DockerError>,
    ) -> Response {
        if !validate::is_valid_container_id(container_id) {
            tracing::error!("invalid container id format: {}", container_id);
            self.notify("Invalid container ID format");
            return Response::None;
        }

        let Some(client) = self.client.as_ref() else {
            tracing::error!("docker not available, cannot {} container", verb);
            self.notify("Docker daemon is not running");
            return Response::None;
        };

        let short_id = &container_id[..container_id.len().min(12)];
        match op(client, container_id) {
            Ok(()) => {
                self.notify(&format!("Container {} {} successfully", short_id, done));
            }
            Err(DockerError::NotFound(_)) => {
                tracing::error!("container not found: {}", container_id);
                self.notify("Container not found");
            }
            Err(e) => {
                tracing::error!("failed to {} container {}: {}", verb, container_id, e);
                self.notify(&format!("Failed to {} container {}", verb, short_id));
            }
        }

        Response::None
    }

    /// Runs `docker system prune -a -f`.
    pub fn prune(&self) -> Response {
        let Some(client) = self.client.as_ref() else {
            return views::daemon_unavailable();
        };

        match client.system_prune() {
            Ok(output) => {
                self.notify(&format!("Prune completed successfully: {}", output.trim()));
                Response::Hide
            }
            Err(e) => {
                tracing::error!("prune failed: {}", e);
                self.notify(&format!("Prune command failed with error: {}", e));
                Response::None
            }
        }
    }

    /// Renders the documentation search row.
    pub fn search_documentation(&self, query: &str) -> Response {
        Response::render_one(
            ResultItem::new(
                views::ICON_MAIN,
                format!("Press enter to search for {}", query),
            )
            .not_highlightable()
            .on_enter(Response::open_url(format!("{}{}", DOCS_SEARCH_URL, query))),
        )
    }

    /// Raises a desktop notification; failures are logged and swallowed.
    fn notify(&self, text: &str) {
        let body = truncate_notification(text);

        let result = Command::new("notify-send")
            .arg("Docker")
            .arg(&body)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        if let Err(e) = result {
            tracing::warn!("failed to show notification: {}", e);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncate_notification_short_text_untouched() {
        assert_eq!(truncate_notification("hello"), "hello");
    }

    #[test]
    fn test_truncate_notification_long_text() {
        let long = "x".repeat(300);
        let truncated = truncate_notification(&long);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let long = "é".repeat(150); // 300 bytes, boundary falls mid-char
        let truncated = truncate_notification(&long);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_documentation_search_row() {
        let ext = Extension::with_availability(Config::default(), DockerAvailability::NotRunning);
        let response = ext.search_documentation("compose");
        let items = response.items().unwrap();
        assert_eq!(items[0].name, "Press enter to search for compose");
        assert_eq!(
            items[0].on_enter,
            Response::open_url("https://docs.docker.com/search/?q=compose")
        );
    }
}
