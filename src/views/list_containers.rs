//! Container list view.

use crate::docker::ContainerSummary;
use crate::extension::ItemAction;
use crate::host::{Response, ResultItem};

use super::ICON_MAIN;

/// Renders the container list.
///
/// Each row activates a `details` payload and keeps the launcher open so
/// the details view can replace the list.
#[must_use]
pub fn render(containers: &[ContainerSummary], query: &str) -> Response {
    if containers.is_empty() {
        return Response::render_one(
            ResultItem::new(
                ICON_MAIN,
                format!("No containers found that match: {}", query),
            )
            .not_highlightable(),
        );
    }

    let items = containers
        .iter()
        .map(|container| {
            let payload = ItemAction::Details {
                id: container.id.clone(),
            }
            .to_payload();

            ResultItem::new(ICON_MAIN, &container.name)
                .description(&container.status_text)
                .on_enter(Response::custom(payload, true))
        })
        .collect();

    Response::render(items)
}
