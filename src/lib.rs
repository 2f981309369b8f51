//! Dockhand
//!
//! A keyword-driven launcher extension for querying and controlling
//! local Docker containers.
//!
//! # Architecture
//!
//! - **Host Module**: Line-delimited JSON protocol with the launcher host
//! - **Docker Module**: Daemon access through the `docker` CLI
//! - **Extension Module**: Keyword dispatch and activation handling
//! - **Views Module**: Result-row rendering for each screen
//!
//! # Usage
//!
//! ```no_run
//! use dockhand::config::Config;
//! use dockhand::extension::Extension;
//!
//! let mut extension = Extension::new(Config::load_or_default());
//! // Feed host events from stdin...
//! ```

// Clippy configuration - allow common patterns
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod docker;
pub mod extension;
pub mod host;
pub mod logging;
pub mod terminal;
pub mod validate;
pub mod views;

// Re-export main types
pub use config::Config;
pub use docker::{DockerAvailability, DockerClient, DockerError};
pub use extension::Extension;
pub use host::{HostEvent, Response, ResultItem};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
