//! View formatters.
//!
//! Each view is a pure function from already-fetched daemon state to a
//! flat list of result rows. Nothing in here talks to the daemon.

pub mod container_details;
pub mod info;
pub mod list_containers;

use crate::host::{Response, ResultItem};

/// Main plugin icon.
pub const ICON_MAIN: &str = "images/icon.png";
/// Start-action icon.
pub const ICON_START: &str = "images/icon_start.png";
/// Stop-action icon.
pub const ICON_STOP: &str = "images/icon_stop.png";
/// Restart-action icon.
pub const ICON_RESTART: &str = "images/icon_restart.png";
/// Network/IP icon.
pub const ICON_IP: &str = "images/icon_ip.png";
/// Terminal icon.
pub const ICON_TERMINAL: &str = "images/icon_terminal.png";
/// Logs icon.
pub const ICON_LOGS: &str = "images/icon_logs.png";

/// Row shown when the daemon is unreachable.
#[must_use]
pub fn daemon_unavailable() -> Response {
    Response::render_one(
        ResultItem::new(ICON_MAIN, "Docker is not running")
            .description("Please start the Docker daemon")
            .not_highlightable(),
    )
}

/// Row shown when free-text input fails validation.
#[must_use]
pub fn invalid_query(description: &str) -> Response {
    Response::render_one(
        ResultItem::new(ICON_MAIN, "Invalid query")
            .description(description)
            .not_highlightable(),
    )
}

/// Row shown when a container name filter fails validation.
#[must_use]
pub fn invalid_container_name() -> Response {
    Response::render_one(
        ResultItem::new(ICON_MAIN, "Invalid container name")
            .description(
                "Container names can only contain letters, numbers, hyphens, underscores, and dots",
            )
            .not_highlightable(),
    )
}
