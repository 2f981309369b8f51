//! Integration tests for keyword dispatch and activation handling.
//!
//! These tests verify that:
//! - Every daemon-touching path short-circuits when the startup probe
//!   reported the daemon as unavailable
//! - Unknown keywords fall back to the container list
//! - Queries and container IDs are validated before dispatch
//! - The documentation view never touches the daemon

use dockhand::config::Config;
use dockhand::docker::DockerAvailability;
use dockhand::extension::Extension;
use dockhand::host::{HostEvent, Response};

use pretty_assertions::assert_eq;

fn unavailable_extension() -> Extension {
    Extension::with_availability(Config::default(), DockerAvailability::NotRunning)
}

fn query(keyword: &str, argument: &str) -> HostEvent {
    HostEvent::Query {
        keyword: keyword.to_string(),
        argument: argument.to_string(),
    }
}

// ============================================================================
// Daemon-unavailable short circuits
// ============================================================================

#[test]
#[allow(clippy::unwrap_used)]
fn test_info_renders_unavailable_row_without_daemon() {
    let mut ext = unavailable_extension();
    let response = ext.handle_event(query("dki", ""));

    let items = response.items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Docker is not running");
    assert_eq!(items[0].description, "Please start the Docker daemon");
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_list_renders_unavailable_row_without_daemon() {
    let mut ext = unavailable_extension();
    let response = ext.handle_event(query("dk", ""));

    let items = response.items().unwrap();
    assert_eq!(items[0].name, "Docker is not running");
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_prune_renders_unavailable_row_without_daemon() {
    let mut ext = unavailable_extension();
    let response = ext.handle_event(query("dkprune", ""));

    let items = response.items().unwrap();
    assert_eq!(items[0].name, "Docker is not running");
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_details_renders_unavailable_row_without_daemon() {
    let mut ext = unavailable_extension();
    let response = ext.show_container_details(&"a".repeat(12));

    let items = response.items().unwrap();
    assert_eq!(items[0].name, "Docker is not running");
}

#[test]
fn test_lifecycle_actions_return_none_without_daemon() {
    let ext = unavailable_extension();
    let id = "a".repeat(12);

    assert_eq!(ext.start_container(&id), Response::None);
    assert_eq!(ext.stop_container(&id), Response::None);
    assert_eq!(ext.restart_container(&id), Response::None);
}

#[test]
fn test_activate_with_valid_payload_short_circuits() {
    let mut ext = unavailable_extension();
    let payload = serde_json::json!({"action": "stop", "id": "a".repeat(12)});

    let response = ext.handle_event(HostEvent::Activate { payload });
    assert_eq!(response, Response::None);
}

// ============================================================================
// Keyword resolution
// ============================================================================

#[test]
#[allow(clippy::unwrap_used)]
fn test_unknown_keyword_falls_back_to_container_list() {
    let mut ext = unavailable_extension();
    let response = ext.handle_event(query("nonsense", ""));

    // Fallback reaches the container list, which short-circuits here.
    let items = response.items().unwrap();
    assert_eq!(items[0].name, "Docker is not running");
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_custom_keywords_resolve() {
    let mut config = Config::default();
    config.keywords.info = "whale".to_string();

    let mut ext = Extension::with_availability(config, DockerAvailability::NotRunning);
    let response = ext.handle_event(query("whale", ""));

    let items = response.items().unwrap();
    assert_eq!(items[0].name, "Docker is not running");
}

// ============================================================================
// Input validation
// ============================================================================

#[test]
#[allow(clippy::unwrap_used)]
fn test_query_with_metacharacters_rejected_before_dispatch() {
    let mut ext = unavailable_extension();
    let response = ext.handle_event(query("dk", "web; rm -rf /"));

    let items = response.items().unwrap();
    assert_eq!(items[0].name, "Invalid query");
    assert_eq!(items[0].description, "Query contains invalid characters");
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_bad_name_filter_renders_invalid_container_name_row() {
    let mut ext = unavailable_extension();
    // Spaces pass the free-text check but not the name-filter one, and
    // the filter is rejected before the daemon check runs.
    let response = ext.handle_event(query("dk", "web server"));

    let items = response.items().unwrap();
    assert_eq!(items[0].name, "Invalid container name");
    assert_eq!(
        items[0].description,
        "Container names can only contain letters, numbers, hyphens, underscores, and dots"
    );
}

#[test]
fn test_action_with_bad_container_id_returns_none() {
    let ext = unavailable_extension();
    // Too short and not hex, rejected before the daemon check.
    assert_eq!(ext.start_container("abc"), Response::None);
    assert_eq!(ext.start_container("$(reboot)"), Response::None);
}

#[test]
fn test_activate_with_garbage_payload_returns_none() {
    let mut ext = unavailable_extension();
    let payload = serde_json::json!({"what": "is this"});

    let response = ext.handle_event(HostEvent::Activate { payload });
    assert_eq!(response, Response::None);
}

// ============================================================================
// Documentation search
// ============================================================================

#[test]
#[allow(clippy::unwrap_used)]
fn test_documentation_search_needs_no_daemon() {
    let mut ext = unavailable_extension();
    let response = ext.handle_event(query("dkdocs", "volumes"));

    let items = response.items().unwrap();
    assert_eq!(items[0].name, "Press enter to search for volumes");
    assert_eq!(
        items[0].on_enter,
        Response::open_url("https://docs.docker.com/search/?q=volumes")
    );
}
