//! Input validation allow-lists.
//!
//! Everything the user types can end up in a daemon-side filter or a
//! subprocess argument, so free text is checked against strict allow-lists
//! before it leaves the dispatch layer.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)]
static QUERY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s._-]+$").unwrap());

#[allow(clippy::unwrap_used)]
static NAME_FILTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._-]+$").unwrap());

#[allow(clippy::unwrap_used)]
static CONTAINER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-f0-9]{12,64}$").unwrap());

/// Returns true if a free-text query is safe to process.
///
/// Empty queries are valid (keyword typed with no argument).
#[must_use]
pub fn is_valid_query(query: &str) -> bool {
    query.is_empty() || QUERY_RE.is_match(query)
}

/// Returns true if a non-empty string is usable as a daemon-side
/// container name filter.
#[must_use]
pub fn is_valid_name_filter(filter: &str) -> bool {
    NAME_FILTER_RE.is_match(filter)
}

/// Returns true if a string looks like a container ID (12 to 64 lowercase
/// hex characters).
#[must_use]
pub fn is_valid_container_id(id: &str) -> bool {
    CONTAINER_ID_RE.is_match(id)
}
