//! Daemon information view.

use crate::docker::DaemonInfo;
use crate::host::{Response, ResultItem};

use super::ICON_MAIN;

/// Docker documentation landing page.
const DOCS_URL: &str = "https://docs.docker.com/";

/// Curated list of Docker resources.
const AWESOME_URL: &str = "https://list.community/veggiemonk/awesome-docker";

/// Renders daemon information and documentation links.
#[must_use]
pub fn render(info: &DaemonInfo) -> Response {
    Response::render(vec![
        ResultItem::new(ICON_MAIN, "Docker Version")
            .description(&info.version)
            .not_highlightable(),
        ResultItem::new(ICON_MAIN, "Documentation")
            .description("Open Docker documentation")
            .not_highlightable()
            .on_enter(Response::open_url(DOCS_URL)),
        ResultItem::new(ICON_MAIN, "Awesome Docker")
            .description("Awesome Docker")
            .not_highlightable()
            .on_enter(Response::open_url(AWESOME_URL)),
    ])
}
