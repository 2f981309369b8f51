//! Container details view.
//!
//! Renders one row per fact or action: title, then start for stopped
//! containers, or IP/ports/shell/stop/restart/logs for running ones.

use crate::docker::ContainerDetails;
use crate::extension::ItemAction;
use crate::host::{Response, ResultItem};
use crate::terminal;

use super::{ICON_IP, ICON_LOGS, ICON_MAIN, ICON_RESTART, ICON_START, ICON_STOP, ICON_TERMINAL};

/// Renders the row list for a "no such container" lookup.
#[must_use]
pub fn not_found(container_id: &str) -> Response {
    Response::render_one(
        ResultItem::new(
            ICON_MAIN,
            format!("No container found with id {}", container_id),
        )
        .not_highlightable(),
    )
}

/// Renders the details view for a fetched container.
#[must_use]
pub fn render(details: &ContainerDetails, default_terminal: &str) -> Response {
    let mut items = Vec::new();
    let short_id = details.short_id().to_string();

    items.push(
        ResultItem::new(ICON_MAIN, details.name())
            .description(details.image())
            .not_highlightable(),
    );

    if !details.is_running() {
        let payload = ItemAction::Start {
            id: short_id.clone(),
        }
        .to_payload();
        items.push(
            ResultItem::new(ICON_START, "Start")
                .description("Start the specified container")
                .not_highlightable()
                .on_enter(Response::custom(payload, false)),
        );
        return Response::render(items);
    }

    let ip_address = details.ip_address();
    items.push(
        ResultItem::new(ICON_IP, "IP Address")
            .description(&ip_address)
            .not_highlightable()
            .on_enter(Response::open_url(ip_address.clone()))
            .on_alt_enter(Response::copy(ip_address)),
    );

    let port_lines = details.port_lines();
    if !port_lines.is_empty() {
        items.push(
            ResultItem::new(ICON_IP, "Ports")
                .description(port_lines.join("\n"))
                .not_highlightable(),
        );
    }

    let shell_cmd = terminal::container_shell_command(default_terminal, &short_id);
    items.push(
        ResultItem::new(ICON_TERMINAL, "Open container shell")
            .description(format!(
                "Opens a new sh shell in the container ({})",
                default_terminal
            ))
            .not_highlightable()
            .on_enter(Response::run_script(shell_cmd)),
    );

    let stop_payload = ItemAction::Stop {
        id: short_id.clone(),
    }
    .to_payload();
    items.push(
        ResultItem::new(ICON_STOP, "Stop")
            .description("Stops the container")
            .not_highlightable()
            .on_enter(Response::custom(stop_payload, false)),
    );

    let restart_payload = ItemAction::Restart {
        id: short_id.clone(),
    }
    .to_payload();
    items.push(
        ResultItem::new(ICON_RESTART, "Restart")
            .description("Restarts the container")
            .not_highlightable()
            .on_enter(Response::custom(restart_payload, false)),
    );

    let logs_cmd = terminal::container_logs_command(default_terminal, &short_id);
    items.push(
        ResultItem::new(ICON_LOGS, "Logs")
            .description("Show logs of the container")
            .not_highlightable()
            .on_enter(Response::run_script(logs_cmd)),
    );

    Response::render(items)
}
