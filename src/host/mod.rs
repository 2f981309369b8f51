//! Plugin-host protocol.
//!
//! The launcher host drives the plugin with a JSON-lines protocol: one
//! event object per line on stdin, one response object per line on stdout.
//! This module defines both sides of that contract plus the result-item
//! shape rendered by the host.
//!
//! The host owns rendering, the window, the clipboard, and URL opening;
//! the plugin only names which primitive to run.

pub mod event;
pub mod item;
pub mod response;

pub use event::HostEvent;
pub use item::ResultItem;
pub use response::Response;
