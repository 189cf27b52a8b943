//! Azure CLI command execution.
//!
//! Provides utilities for running Azure CLI commands and parsing their output.

use colored::Colorize;
use regex::Regex;
use std::error::Error;
use std::sync::OnceLock;
use tokio::process::Command;

/// Largest stdout accepted from a single command.
const MAX_OUTPUT_BYTES: usize = 500_000;

/// One argument: single-quoted, double-quoted, or a bare word.
static ARG_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_arg_regex() -> &'static Regex {
    ARG_REGEX.get_or_init(|| Regex::new(r#"'([^']*)'|"([^"]*)"|([^'"\s]+)"#).expect("Invalid Regex"))
}

/// Run a shell command and return its stdout.
///
/// The command string is split with [`split_args`], so a quoted KQL query
/// reaches `az` as a single argument.
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err` - If the command fails, produces invalid UTF-8 or more than 500KB
pub async fn run(cmd: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_args(cmd);
    log::trace!("split cmds={:?}", cmds);

    let (program, args) = cmds.split_first().ok_or("Empty command")?;
    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|e| {
            log::error!("Command execution failed: {}", e);
            format!("Failed to execute command: {}", e)
        })?;

    if output.status.success() {
        log::debug!("Success cmd: {cmd}");
        log::debug!("Success output.stdout.len(): {}", output.stdout.len());

        if output.stdout.len() > MAX_OUTPUT_BYTES {
            return Err(format!(
                "Response too large: {} bytes for command: {:?}",
                output.stdout.len(),
                cmds
            )
            .into());
        }
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(format!("ERROR running: {stderr}").into());
    }

    let stdout = String::from_utf8(output.stdout).map_err(|e| format!("Invalid UTF-8: {}", e))?;

    Ok(stdout)
}

/// Split a command line into arguments.
///
/// Runs of whitespace separate arguments. Quotes are removed and their
/// content is kept verbatim, including newlines and the other quote kind.
pub(crate) fn split_args(cmd: &str) -> Vec<&str> {
    get_arg_regex()
        .captures_iter(cmd)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| m.as_str())
        .collect()
}
