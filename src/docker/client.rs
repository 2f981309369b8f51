//! Docker daemon boundary via the CLI.
//!
//! Every operation spawns a `docker` subprocess with a fixed internal
//! timeout and captured output. The daemon protocol itself is the CLI's
//! problem; this layer only builds argument lists and parses what comes
//! back.

use std::process::{Command, Output, Stdio};
use std::time::{Duration, Instant};

use thiserror::Error;

use super::container::{
    ContainerDetails, ContainerSummary, DaemonInfo, parse_ps_output,
};

/// Timeout for ordinary Docker commands in milliseconds.
const COMMAND_TIMEOUT_MS: u64 = 2000;

/// Quick timeout for availability checks in milliseconds.
const QUICK_TIMEOUT_MS: u64 = 1000;

/// Timeout for `docker system prune` in milliseconds. Prune reclaims
/// disk space and can legitimately run for a while.
const PRUNE_TIMEOUT_MS: u64 = 60_000;

/// Poll interval for checking if a spawned process completed.
const POLL_INTERVAL_MS: u64 = 50;

/// Maximum stderr length carried into an error message.
const MAX_STDERR_LEN: usize = 200;

/// Docker client error.
#[derive(Debug, Error)]
pub enum DockerError {
    /// The command did not finish in time or could not be spawned.
    #[error("Docker command timed out")]
    Timeout,

    /// The daemon knows no container with this ID.
    #[error("No container found with id {0}")]
    NotFound(String),

    /// The command ran but the daemon reported a failure.
    #[error("docker {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// The daemon's output could not be parsed.
    #[error("Failed to parse docker output: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Daemon availability, probed once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DockerAvailability {
    /// Not yet checked.
    #[default]
    Unknown,
    /// Docker CLI is not installed on the system.
    NotInstalled,
    /// Docker is installed but the daemon is not running.
    NotRunning,
    /// The daemon returned an error.
    DaemonError(String),
    /// Docker is available and running.
    Available,
}

impl DockerAvailability {
    /// Returns true if Docker is available and running.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Truncates daemon stderr to a displayable length, never splitting a
/// multi-byte character.
fn truncate_stderr(stderr: &str) -> String {
    if stderr.len() > MAX_STDERR_LEN {
        let mut end = MAX_STDERR_LEN;
        while !stderr.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &stderr[..end])
    } else {
        stderr.to_string()
    }
}

/// Handle to the local Docker daemon.
///
/// The extension holds at most one of these, and only while the startup
/// probe reported the daemon as available.
#[derive(Debug, Default)]
pub struct DockerClient;

impl DockerClient {
    /// Creates a client handle.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the docker command name for the current platform.
    fn docker_cmd() -> &'static str {
        if cfg!(target_os = "windows") {
            "docker.exe"
        } else {
            "docker"
        }
    }

    /// Runs a command with a timeout, killing the process on expiry.
    /// Returns None if the command times out or fails to start.
    fn run_with_timeout(cmd: &mut Command, timeout_ms: u64) -> Option<Output> {
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

        let mut child = match cmd.spawn() {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!("failed to spawn docker command: {}", e);
                return None;
            }
        };

        // Drain both pipes on reader threads while polling. A child that
        // writes more than the OS pipe buffer would otherwise block on
        // write and never exit.
        let mut stdout_reader = child.stdout.take().map(|mut s| {
            std::thread::spawn(move || {
                let mut buf = Vec::new();
                std::io::Read::read_to_end(&mut s, &mut buf).ok();
                buf
            })
        });

        let mut stderr_reader = child.stderr.take().map(|mut s| {
            std::thread::spawn(move || {
                let mut buf = Vec::new();
                std::io::Read::read_to_end(&mut s, &mut buf).ok();
                buf
            })
        });

        let start = Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        loop {
            match child.try_wait() {
                Ok(Some(status)) => {
                    let stdout = stdout_reader
                        .take()
                        .and_then(|reader| reader.join().ok())
                        .unwrap_or_default();
                    let stderr = stderr_reader
                        .take()
                        .and_then(|reader| reader.join().ok())
                        .unwrap_or_default();

                    return Some(Output {
                        status,
                        stdout,
                        stderr,
                    });
                }
                Ok(None) => {
                    if start.elapsed() >= timeout {
                        let _ = child.kill();
                        let _ = child.wait(); // Reap the zombie
                        return None;
                    }
                    std::thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
                }
                Err(_) => {
                    let _ = child.kill();
                    return None;
                }
            }
        }
    }

    /// Runs a docker subcommand and returns its stdout on success.
    fn run_docker(args: &[&str], timeout_ms: u64) -> Result<String, DockerError> {
        let mut cmd = Command::new(Self::docker_cmd());
        cmd.args(args);

        let output =
            Self::run_with_timeout(&mut cmd, timeout_ms).ok_or(DockerError::Timeout)?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(DockerError::CommandFailed {
                command: args.first().unwrap_or(&"").to_string(),
                stderr: truncate_stderr(stderr.trim()),
            })
        }
    }

    /// Probes daemon availability with detailed status.
    ///
    /// Checks the CLI first (quick `--version`), then the daemon itself
    /// with a cheap `ps -q`.
    #[must_use]
    pub fn check_availability() -> DockerAvailability {
        let mut cmd = Command::new(Self::docker_cmd());
        cmd.arg("--version");

        let cli_exists = Self::run_with_timeout(&mut cmd, QUICK_TIMEOUT_MS)
            .map(|o| o.status.success())
            .unwrap_or(false);

        if !cli_exists {
            return DockerAvailability::NotInstalled;
        }

        let mut cmd = Command::new(Self::docker_cmd());
        cmd.args(["ps", "-q", "--no-trunc"]);

        match Self::run_with_timeout(&mut cmd, COMMAND_TIMEOUT_MS) {
            Some(output) if output.status.success() => DockerAvailability::Available,
            Some(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let stderr_trimmed = stderr.trim();

                if stderr_trimmed.contains("Cannot connect to the Docker daemon")
                    || stderr_trimmed.contains("Is the docker daemon running")
                    || stderr_trimmed.contains("docker daemon is not running")
                {
                    DockerAvailability::NotRunning
                } else if stderr_trimmed.is_empty() {
                    DockerAvailability::NotRunning
                } else {
                    DockerAvailability::DaemonError(truncate_stderr(stderr_trimmed))
                }
            }
            None => DockerAvailability::DaemonError("Docker command timed out".to_string()),
        }
    }

    /// Returns daemon information.
    pub fn server_version(&self) -> Result<DaemonInfo, DockerError> {
        let stdout = Self::run_docker(
            &["version", "--format", "{{.Server.Version}}"],
            QUICK_TIMEOUT_MS,
        )?;

        Ok(DaemonInfo {
            version: stdout.trim().to_string(),
        })
    }

    /// Lists containers, optionally filtered by name, optionally running
    /// only, truncated to `limit` rows.
    ///
    /// The name filter must already be validated; it goes into the
    /// daemon-side `--filter name=` argument verbatim.
    pub fn list_containers(
        &self,
        name_filter: Option<&str>,
        running_only: bool,
        limit: usize,
    ) -> Result<Vec<ContainerSummary>, DockerError> {
        let mut args: Vec<String> = vec!["ps".to_string()];

        if !running_only {
            args.push("-a".to_string());
        }
        if let Some(name) = name_filter {
            args.push("--filter".to_string());
            args.push(format!("name={}", name));
        }
        args.push("--format".to_string());
        args.push("{{json .}}".to_string());

        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let stdout = Self::run_docker(&arg_refs, COMMAND_TIMEOUT_MS)?;

        let mut containers = parse_ps_output(&stdout);
        containers.truncate(limit);
        Ok(containers)
    }

    /// Inspects a single container.
    pub fn inspect(&self, container_id: &str) -> Result<ContainerDetails, DockerError> {
        match Self::run_docker(
            &["inspect", "--format", "{{json .}}", container_id],
            COMMAND_TIMEOUT_MS,
        ) {
            Ok(stdout) => Ok(ContainerDetails::from_inspect_json(stdout.trim())?),
            Err(DockerError::CommandFailed { stderr, .. })
                if stderr.contains("No such object") || stderr.contains("No such container") =>
            {
                Err(DockerError::NotFound(container_id.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    /// Starts a container.
    pub fn start(&self, container_id: &str) -> Result<(), DockerError> {
        Self::run_docker(&["start", container_id], COMMAND_TIMEOUT_MS).map(|_| ())
    }

    /// Stops a container.
    pub fn stop(&self, container_id: &str) -> Result<(), DockerError> {
        // docker stop waits up to 10s for the container to exit
        Self::run_docker(&["stop", container_id], 15_000).map(|_| ())
    }

    /// Restarts a container.
    pub fn restart(&self, container_id: &str) -> Result<(), DockerError> {
        Self::run_docker(&["restart", container_id], 15_000).map(|_| ())
    }

    /// Runs `docker system prune -a -f` and returns its output.
    pub fn system_prune(&self) -> Result<String, DockerError> {
        Self::run_docker(&["system", "prune", "-a", "-f"], PRUNE_TIMEOUT_MS)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_default_is_unknown() {
        assert_eq!(DockerAvailability::default(), DockerAvailability::Unknown);
        assert!(!DockerAvailability::Unknown.is_available());
        assert!(DockerAvailability::Available.is_available());
        assert!(!DockerAvailability::NotRunning.is_available());
    }

    #[test]
    fn test_run_docker_missing_binary_is_timeout() {
        // Spawn failure and timeout collapse into the same error.
        let mut cmd = Command::new("definitely-not-a-real-binary-xyz");
        assert!(DockerClient::run_with_timeout(&mut cmd, 100).is_none());
    }

    #[test]
    fn test_command_failed_display_truncates_nothing_short() {
        let err = DockerError::CommandFailed {
            command: "ps".to_string(),
            stderr: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "docker ps failed: boom");
    }

    #[test]
    fn test_truncate_stderr_short_text_untouched() {
        assert_eq!(truncate_stderr("permission denied"), "permission denied");
    }

    #[test]
    fn test_truncate_stderr_long_ascii() {
        let long = "x".repeat(300);
        let truncated = truncate_stderr(&long);
        assert_eq!(truncated.len(), MAX_STDERR_LEN + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_stderr_respects_char_boundaries() {
        // Byte 200 lands inside a two-byte character.
        let stderr = format!("{}{}", "e".repeat(199), "é".repeat(40));
        let truncated = truncate_stderr(&stderr);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= MAX_STDERR_LEN + 3);
        assert!(truncated.starts_with(&"e".repeat(199)));
    }

    #[test]
    #[cfg(unix)]
    fn test_large_output_drained_before_exit() {
        // 256 KiB is well past the OS pipe buffer; the child must not
        // deadlock on write and get misreported as a timeout.
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "head -c 262144 /dev/zero"]);

        let output = DockerClient::run_with_timeout(&mut cmd, 5000).unwrap();
        assert!(output.status.success());
        assert_eq!(output.stdout.len(), 262_144);
    }
}
