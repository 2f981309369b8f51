//! Terminal-emulator command construction.
//!
//! Opening a shell or a log stream inside a container means spawning the
//! user's terminal emulator around a `docker exec`/`docker logs` command.
//! Emulators disagree on the flag that introduces the command to run, so
//! a small fixed table maps program name to flag convention.

/// Terminals that take the command after `-x`.
const DASH_X_TERMINALS: &[&str] = &["xfce4-terminal", "terminator"];

/// Terminals that take the command after `--`.
const DASH_DASH_TERMINALS: &[&str] = &["kitty"];

/// Returns the command-introducer flag for a terminal program.
///
/// Defaults to `-e`, which covers gnome-terminal, tilix, alacritty,
/// konsole, xterm and most others.
#[must_use]
pub fn command_flag(terminal_prog: &str) -> &'static str {
    if DASH_X_TERMINALS.contains(&terminal_prog) {
        "-x"
    } else if DASH_DASH_TERMINALS.contains(&terminal_prog) {
        "--"
    } else {
        "-e"
    }
}

/// Wraps a command line in a terminal-emulator invocation.
#[must_use]
pub fn wrap_in_terminal(terminal_prog: &str, command: &str) -> String {
    format!("{} {} {}", terminal_prog, command_flag(terminal_prog), command)
}

/// Quotes an argument for POSIX shell interpolation.
///
/// Always single-quotes, with embedded single quotes escaped as `'\''`.
#[must_use]
pub fn shell_quote(arg: &str) -> String {
    format!("'{}'", arg.replace('\'', "'\\''"))
}

/// Builds the terminal command that opens an `sh` shell in a container.
#[must_use]
pub fn container_shell_command(terminal_prog: &str, container_id: &str) -> String {
    let exec = format!("docker exec -it {} sh", shell_quote(container_id));
    wrap_in_terminal(terminal_prog, &exec)
}

/// Builds the terminal command that follows a container's logs.
#[must_use]
pub fn container_logs_command(terminal_prog: &str, container_id: &str) -> String {
    let logs = format!("docker logs -f {}", shell_quote(container_id));
    wrap_in_terminal(terminal_prog, &logs)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flag_table() {
        assert_eq!(command_flag("xfce4-terminal"), "-x");
        assert_eq!(command_flag("terminator"), "-x");
        assert_eq!(command_flag("kitty"), "--");
        assert_eq!(command_flag("gnome-terminal"), "-e");
        assert_eq!(command_flag("tilix"), "-e");
        assert_eq!(command_flag("alacritty"), "-e");
        assert_eq!(command_flag("konsole"), "-e");
        assert_eq!(command_flag("xterm"), "-e");
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("abc123"), "'abc123'");
        assert_eq!(shell_quote("a'b"), "'a'\\''b'");
    }

    #[test]
    fn test_shell_command_uses_flag_convention() {
        assert_eq!(
            container_shell_command("kitty", "abc123def456"),
            "kitty -- docker exec -it 'abc123def456' sh"
        );
        assert_eq!(
            container_shell_command("xfce4-terminal", "abc123def456"),
            "xfce4-terminal -x docker exec -it 'abc123def456' sh"
        );
    }

    #[test]
    fn test_logs_command() {
        assert_eq!(
            container_logs_command("gnome-terminal", "abc123def456"),
            "gnome-terminal -e docker logs -f 'abc123def456'"
        );
    }
}
