//! Container and daemon data structures.
//!
//! Pass-through representations of daemon state: nothing here is created
//! or mutated locally, the daemon owns every entity. Parsing covers the
//! two CLI output shapes this plugin consumes: `docker ps --format
//! '{{json .}}'` lines and a single `docker inspect` document.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Maximum list rows parsed from `docker ps` output.
const MAX_PARSE_ITEMS: usize = 500;

/// Sentinel shown when a container has no network at all.
pub const NO_IP: &str = "No IP";

/// Length of a short container ID.
const SHORT_ID_LEN: usize = 12;

/// Container status, parsed from daemon status strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerStatus {
    /// Status unknown.
    #[default]
    Unknown,
    /// Container is running.
    Running,
    /// Container has exited.
    Exited,
    /// Container is paused.
    Paused,
    /// Container is restarting.
    Restarting,
    /// Container is being created.
    Created,
    /// Container is dead (abnormal state).
    Dead,
}

impl ContainerStatus {
    /// Parses a status from either a `docker ps` status text
    /// ("Up 5 minutes") or an inspect `State.Status` value ("running").
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let lower = s.to_lowercase();
        if lower.starts_with("up") || lower.contains("running") {
            Self::Running
        } else if lower.starts_with("exited") {
            Self::Exited
        } else if lower.contains("paused") {
            Self::Paused
        } else if lower.contains("restarting") {
            Self::Restarting
        } else if lower.contains("created") {
            Self::Created
        } else if lower.contains("dead") {
            Self::Dead
        } else {
            Self::Unknown
        }
    }

    /// Returns true if the container is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// One row of `docker ps` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    /// Short container ID.
    pub id: String,
    /// Container name (without leading slash).
    pub name: String,
    /// Image the container was created from.
    pub image: String,
    /// Parsed status.
    pub status: ContainerStatus,
    /// Full status text from the daemon.
    pub status_text: String,
}

/// Raw `docker ps --format '{{json .}}'` line.
#[derive(Debug, Deserialize)]
struct PsLine {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Names", default)]
    names: String,
    #[serde(rename = "Image", default)]
    image: String,
    #[serde(rename = "Status", default)]
    status: String,
}

/// Parses `docker ps --format '{{json .}}'` output into summaries.
///
/// Malformed lines are skipped; at most [`MAX_PARSE_ITEMS`] rows are kept.
#[must_use]
pub fn parse_ps_output(output: &str) -> Vec<ContainerSummary> {
    let mut containers = Vec::new();

    for line in output.lines() {
        if containers.len() >= MAX_PARSE_ITEMS {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<PsLine>(line) {
            Ok(row) if !row.id.is_empty() => {
                containers.push(ContainerSummary {
                    id: row.id,
                    name: row.names.trim_start_matches('/').to_string(),
                    image: row.image,
                    status: ContainerStatus::parse(&row.status),
                    status_text: row.status,
                });
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!("skipping unparseable ps line: {}", e);
            }
        }
    }

    containers
}

/// Daemon information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonInfo {
    /// Server version string.
    pub version: String,
}

/// One host binding of a published container port.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortBinding {
    /// Host interface the port is bound to.
    #[serde(rename = "HostIp", default)]
    pub host_ip: String,
    /// Host port number (string, as the daemon reports it).
    #[serde(rename = "HostPort", default)]
    pub host_port: String,
}

/// Per-network endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct NetworkEndpoint {
    /// IP address inside this network, if assigned.
    #[serde(rename = "IPAddress")]
    pub ip_address: Option<String>,
}

/// Network block of an inspect document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct NetworkSettings {
    /// Direct IP on the default bridge; empty for custom networks.
    #[serde(rename = "IPAddress", default)]
    pub ip_address: String,
    /// Published port map, container port -> host bindings.
    #[serde(rename = "Ports", default)]
    pub ports: BTreeMap<String, Option<Vec<PortBinding>>>,
    /// Per-network endpoints for containers on custom networks.
    #[serde(rename = "Networks", default)]
    pub networks: BTreeMap<String, NetworkEndpoint>,
}

#[derive(Debug, Clone, Deserialize)]
struct InspectState {
    #[serde(rename = "Status", default)]
    status: String,
}

#[derive(Debug, Clone, Deserialize)]
struct InspectConfig {
    #[serde(rename = "Image", default)]
    image: String,
}

/// Full container details from `docker inspect`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContainerDetails {
    /// Full 64-character container ID.
    #[serde(rename = "Id")]
    pub id: String,
    /// Container name; the daemon reports it with a leading slash.
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "State")]
    state: InspectState,
    #[serde(rename = "Config")]
    config: InspectConfig,
    /// Network settings block.
    #[serde(rename = "NetworkSettings", default)]
    pub network_settings: NetworkSettings,
}

impl ContainerDetails {
    /// Parses a single inspect document from
    /// `docker inspect --format '{{json .}}' <id>`.
    pub fn from_inspect_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Container name without the daemon's leading slash.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.trim_start_matches('/')
    }

    /// Image the container was created from.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.config.image
    }

    /// Parsed container status.
    #[must_use]
    pub fn status(&self) -> ContainerStatus {
        ContainerStatus::parse(&self.state.status)
    }

    /// Returns true if the container is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status().is_running()
    }

    /// Short form of the container ID.
    #[must_use]
    pub fn short_id(&self) -> &str {
        if self.id.len() > SHORT_ID_LEN {
            &self.id[..SHORT_ID_LEN]
        } else {
            &self.id
        }
    }

    /// Resolves the container's IP address.
    ///
    /// Falls back from the direct bridge address to the first entry of the
    /// networks map ("Unknown" when that entry carries no address), then
    /// to the [`NO_IP`] sentinel when the container has no networks.
    #[must_use]
    pub fn ip_address(&self) -> String {
        if !self.network_settings.ip_address.is_empty() {
            return self.network_settings.ip_address.clone();
        }

        if let Some((_, endpoint)) = self.network_settings.networks.iter().next() {
            return endpoint
                .ip_address
                .clone()
                .filter(|ip| !ip.is_empty())
                .unwrap_or_else(|| "Unknown".to_string());
        }

        NO_IP.to_string()
    }

    /// Formats published port mappings as display lines, one per
    /// container port with a host binding ("80/tcp -> 0.0.0.0:8080").
    #[must_use]
    pub fn port_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        for (container_port, bindings) in &self.network_settings.ports {
            let Some(bindings) = bindings else { continue };
            let Some(first) = bindings.first() else {
                continue;
            };
            lines.push(format!(
                "{} -> {}:{}",
                container_port, first.host_ip, first.host_port
            ));
        }

        lines
    }
}
