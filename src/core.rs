//! Demo program driving the registry end to end

use std::io::{self, Write};
use std::path::Path;

use tracing::warn;

use crate::config::{merge_default_options, Config};
use crate::errors::{ArgError, Result};
use crate::registry::{ParseOutcome, Registry};
use crate::status::ExitStatus;

/// Default for the `-d` option, held outside the registry
#[allow(clippy::approx_constant)]
pub const DEFAULT_DOUBLE: f64 = 3.14;

/// Default for the `-g` option, held outside the registry
pub const DEFAULT_GLOBAL_INT: i64 = 2911939;

/// Main entry point for the CLI.
///
/// Loads the config, merges its default options in front of the user's
/// arguments and runs the demo program against stdout/stderr.
pub fn run(args: Vec<String>) -> ExitStatus {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "falling back to default config");
            eprintln!("Warning: Failed to load config: {}", e);
            Config::default()
        }
    };

    let merged_args = merge_default_options(args, &config);

    let stdout = io::stdout();
    let stderr = io::stderr();
    program(&merged_args, &mut stdout.lock(), &mut stderr.lock())
}

/// Run the demo with explicit output streams
pub fn program<O: Write, E: Write>(args: &[String], out: &mut O, err: &mut E) -> ExitStatus {
    match demo(args, out, err) {
        Ok(status) => status,
        Err(e) => handle_error(e, err),
    }
}

fn demo<O: Write, E: Write>(args: &[String], out: &mut O, err: &mut E) -> Result<ExitStatus> {
    let program_name = args
        .first()
        .and_then(|name| Path::new(name).file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let mut d_glob = DEFAULT_DOUBLE;
    let mut g_glob = DEFAULT_GLOBAL_INT;

    let mut registry = Registry::with_help();
    registry.bind("-d", "global double", &mut d_glob)?;
    let f = registry.declare("-f", "boolean flag", false)?;
    registry.bind("-g", "global int", &mut g_glob)?;
    let n = registry.declare("-n", "integer", 42_i64)?;
    let s = registry.declare("-s", "string", String::from("hello"))?;

    if registry.try_parse_from(args)? == ParseOutcome::Help {
        registry.write_usage(err, &program_name)?;
        return Ok(ExitStatus::Success);
    }

    let n = registry.get(&n).copied().unwrap_or_default();
    let f = registry.get(&f).copied().unwrap_or_default();
    let len = registry.get(&s).map(String::len).unwrap_or_default();
    drop(registry);

    writeln!(out, "n: {}", n)?;
    writeln!(out, "len(s): {}", len)?;
    writeln!(out, "f: {}", if f { "On" } else { "Off" })?;
    writeln!(out, "d: {}", d_glob)?;
    writeln!(out, "g: {}", g_glob)?;

    Ok(ExitStatus::Success)
}

fn handle_error<E: Write>(error: ArgError, err: &mut E) -> ExitStatus {
    writeln!(err, "Error: {}", error).ok();

    // All errors return the same exit code (1) following Unix conventions
    ExitStatus::Error
}
