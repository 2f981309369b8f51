//! Dockhand - Main entry point.
//!
//! A keyword-driven launcher extension for querying and controlling
//! local Docker containers.
//!
//! Usage: dockhand [OPTIONS]
//!
//! Options:
//!   --version, -v    Show version
//!
//! Reads line-delimited JSON events from stdin and writes one JSON
//! response per event to stdout.

use std::env;
use std::io::{self, BufRead, Write};

use dockhand::config::Config;
use dockhand::extension::Extension;
use dockhand::host::{HostEvent, Response};
use dockhand::{logging, VERSION};

/// Maximum events processed in one session (safety bound).
const MAX_EVENTS: usize = 1_000_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("dockhand v{}", VERSION);
        return Ok(());
    }

    let config = Config::load_or_default();

    if let Err(e) = logging::init(&config.log) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    tracing::info!("dockhand v{} starting", VERSION);

    let mut extension = Extension::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    let mut events = 0;
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event: HostEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("skipping malformed event: {}", e);
                continue;
            }
        };

        let response = extension.handle_event(event);
        write_response(&mut writer, &response)?;

        events += 1;
        if events >= MAX_EVENTS {
            tracing::warn!("event limit reached, exiting");
            break;
        }
    }

    tracing::info!("host closed stdin, exiting");
    Ok(())
}

/// Serializes one response as a single line and flushes it.
fn write_response(writer: &mut impl Write, response: &Response) -> io::Result<()> {
    let json = serde_json::to_string(response).map_err(io::Error::other)?;
    writeln!(writer, "{}", json)?;
    writer.flush()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_write_response_is_one_line() {
        let mut buf = Vec::new();
        write_response(&mut buf, &Response::Hide).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "{\"type\":\"hide\"}\n");
    }
}
