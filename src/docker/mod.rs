//! Docker daemon access.
//!
//! Provides:
//! - A CLI-backed client for the handful of daemon operations the plugin
//!   needs (list, inspect, start/stop/restart, prune, version)
//! - A one-shot availability probe cached by the extension at startup
//! - Pass-through container/daemon data types

pub mod client;
pub mod container;

pub use client::{DockerAvailability, DockerClient, DockerError};
pub use container::{
    ContainerDetails, ContainerStatus, ContainerSummary, DaemonInfo, NO_IP,
    NetworkEndpoint, NetworkSettings, PortBinding, parse_ps_output,
};
