//! Gauntlet CLI - front end for the embeddable test execution engine
//!
//! This crate turns command-line arguments into selection requests,
//! drives a caller-supplied registry through the engine, and maps the
//! batch result to a process exit code. Host test binaries embed it
//! with a one-line `main`:
//!
//! ```no_run
//! use std::process::ExitCode;
//!
//! fn main() -> ExitCode {
//!     gauntlet_cli::main_with(&my_suite::registry())
//! }
//! # mod my_suite {
//! #     pub fn registry() -> gauntlet_engine::Registry {
//! #         gauntlet_engine::Registry::new(vec![])
//! #     }
//! # }
//! ```
//!
//! COMMANDS:
//!     gauntlet run                     Run all registered modules
//!     gauntlet run <module> [NUM...]   Run one module, optionally by test number
//!     gauntlet run <module> --range 2:5
//!     gauntlet list [<module>...]      List modules or their tests
//!
//! Module names and test numbers can be mixed in one invocation
//! (`gauntlet run net 3 7 fs`); each module's request is processed
//! independently and a bad name or number never stops the rest.

use anyhow::{bail, ensure, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use gauntlet_engine::{run_batch, NullReporter, Registry, SelectionError, SelectionRequest};
use std::io;
use std::process::ExitCode;

pub mod console;
pub mod demo;

use console::ConsoleReporter;

/// Gauntlet unit-test harness.
///
/// Runs statically registered test modules: all of them, one module,
/// or a subset of a module's tests by 1-based number or range.
///
/// ENVIRONMENT VARIABLES:
///     GAUNTLET_JSON  Set to '1' for JSON output by default
///     NO_COLOR       Set to disable colored output
#[derive(Parser)]
#[command(name = "gauntlet")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true)]
    no_color: bool,

    /// Output a machine-readable JSON summary
    #[arg(long, env = "GAUNTLET_JSON", global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run registered tests
    ///
    /// With no arguments every module runs in registration order.
    /// Arguments are module names, each optionally followed by
    /// 1-based test numbers selecting a subset of that module.
    ///
    /// EXAMPLES:
    ///     gauntlet run                 Run everything
    ///     gauntlet run net             Run one module
    ///     gauntlet run net 3 7         Run tests 3 and 7 of 'net'
    ///     gauntlet run net --range 2:5 Run tests 2 through 5
    ///     gauntlet run net 3 fs        Batch across modules
    #[command(visible_alias = "r")]
    Run {
        /// Module names, each optionally followed by test numbers
        args: Vec<String>,
        /// Contiguous 1-based range FROM:TO (single module only)
        #[arg(long)]
        range: Option<String>,
    },

    /// List modules or their tests
    ///
    /// EXAMPLES:
    ///     gauntlet list                One row per module
    ///     gauntlet list net fs         Detailed test listing
    #[command(visible_alias = "l")]
    List {
        /// Module names to list in detail; empty lists all modules
        modules: Vec<String>,
    },

    /// Generate shell completions
    ///
    /// EXAMPLES:
    ///     gauntlet completions bash > ~/.bash_completions/gauntlet.bash
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Parse `std::env::args` and drive the registry. This is the whole
/// front end; host binaries call it from `main`.
pub fn main_with(registry: &Registry) -> ExitCode {
    execute(registry, Cli::parse())
}

/// Drive the registry with an already-parsed command line.
pub fn execute(registry: &Registry, cli: Cli) -> ExitCode {
    match dispatch(registry, cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn dispatch(registry: &Registry, cli: Cli) -> Result<bool> {
    // No subcommand behaves like a bare `run`: run everything.
    let command = cli.command.unwrap_or(Commands::Run {
        args: Vec::new(),
        range: None,
    });

    match command {
        Commands::Run { args, range } => {
            run_command(registry, &args, range.as_deref(), cli.no_color, cli.json)
        }
        Commands::List { modules } => list_command(registry, &modules, cli.no_color, cli.json),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "gauntlet", &mut io::stdout());
            Ok(true)
        }
    }
}

fn run_command(
    registry: &Registry,
    args: &[String],
    range: Option<&str>,
    no_color: bool,
    json: bool,
) -> Result<bool> {
    let requests = build_run_requests(args, range)?;

    let report = if json {
        run_batch(registry, &requests, &mut NullReporter)
    } else {
        run_batch(registry, &requests, &mut ConsoleReporter::new(no_color))
    };

    if json {
        let errors: Vec<String> = report
            .selection_errors
            .iter()
            .map(ToString::to_string)
            .chain(report.module_errors.iter().map(ToString::to_string))
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "modules": report.outcomes,
                "combined": report.combined(),
                "errors": errors,
                "success": report.exit_success(),
            })
        );
    }

    Ok(report.exit_success())
}

fn list_command(
    registry: &Registry,
    modules: &[String],
    no_color: bool,
    json: bool,
) -> Result<bool> {
    if json {
        return list_json(registry, modules);
    }

    let requests = if modules.is_empty() {
        vec![SelectionRequest::ListModules]
    } else {
        vec![SelectionRequest::ListTests {
            ids: modules.to_vec(),
        }]
    };
    let report = run_batch(registry, &requests, &mut ConsoleReporter::new(no_color));
    Ok(report.exit_success())
}

fn list_json(registry: &Registry, modules: &[String]) -> Result<bool> {
    if modules.is_empty() {
        println!(
            "{}",
            serde_json::json!({ "modules": registry.modules(), "success": true })
        );
        return Ok(true);
    }

    let mut listed = Vec::new();
    let mut errors = Vec::new();
    for id in modules {
        match registry.lookup(id) {
            Some(catalog) => listed.push(serde_json::json!({
                "module": catalog.id(),
                "description": catalog.description(),
                "comment": catalog.list_comment(),
                "tests": catalog.list(),
            })),
            None => errors.push(SelectionError::UnknownModule(id.clone()).to_string()),
        }
    }

    let success = errors.is_empty();
    println!(
        "{}",
        serde_json::json!({ "modules": listed, "errors": errors, "success": success })
    );
    Ok(success)
}

/// Translate raw `run` arguments into selection requests.
///
/// Tokens that parse as integers are test numbers for the most recent
/// module name; everything else starts a new module group. `--range`
/// is only compatible with exactly one bare module name.
fn build_run_requests(args: &[String], range: Option<&str>) -> Result<Vec<SelectionRequest>> {
    let groups = group_tokens(args)?;

    if let Some(range) = range {
        ensure!(
            groups.len() == 1 && groups[0].1.is_empty(),
            "--range requires exactly one module name and no test numbers"
        );
        let (from, to) = parse_range(range)?;
        return Ok(vec![SelectionRequest::RunRange {
            id: groups[0].0.clone(),
            from,
            to,
        }]);
    }

    if groups.is_empty() {
        return Ok(vec![SelectionRequest::RunAll]);
    }

    Ok(groups
        .into_iter()
        .map(|(id, tokens)| {
            if tokens.is_empty() {
                SelectionRequest::RunModule { id }
            } else {
                SelectionRequest::RunTests { id, tokens }
            }
        })
        .collect())
}

fn group_tokens(args: &[String]) -> Result<Vec<(String, Vec<String>)>> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for token in args {
        if token.parse::<usize>().is_ok() {
            match groups.last_mut() {
                Some((_, tokens)) => tokens.push(token.clone()),
                None => bail!("test number '{token}' given before any module name"),
            }
        } else {
            groups.push((token.clone(), Vec::new()));
        }
    }
    Ok(groups)
}

fn parse_range(range: &str) -> Result<(usize, usize)> {
    let (from, to) = range
        .split_once(':')
        .with_context(|| format!("range '{range}' must be FROM:TO"))?;
    let from: usize = from
        .parse()
        .with_context(|| format!("invalid range start '{from}'"))?;
    let to: usize = to
        .parse()
        .with_context(|| format!("invalid range end '{to}'"))?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_cli_smoke() {
        let _cli = Cli::parse_from(["gauntlet", "run"]);
    }

    #[test]
    fn test_alias_r_for_run() {
        let cli = Cli::parse_from(["gauntlet", "r", "net"]);
        matches!(cli.command, Some(Commands::Run { .. }));
    }

    #[test]
    fn test_json_flag() {
        let cli = Cli::parse_from(["gauntlet", "run", "--json"]);
        assert!(cli.json);
    }

    #[test]
    fn test_no_subcommand_means_run_all() {
        let cli = Cli::parse_from(["gauntlet"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_group_tokens_splits_per_module() {
        let groups = group_tokens(&strings(&["net", "3", "7", "fs", "1"])).unwrap();
        assert_eq!(
            groups,
            vec![
                ("net".to_string(), strings(&["3", "7"])),
                ("fs".to_string(), strings(&["1"])),
            ]
        );
    }

    #[test]
    fn test_group_tokens_rejects_leading_number() {
        assert!(group_tokens(&strings(&["3", "net"])).is_err());
    }

    #[test]
    fn test_build_requests_empty_is_run_all() {
        let requests = build_run_requests(&[], None).unwrap();
        assert_eq!(requests, vec![SelectionRequest::RunAll]);
    }

    #[test]
    fn test_build_requests_bare_module() {
        let requests = build_run_requests(&strings(&["net"]), None).unwrap();
        assert_eq!(
            requests,
            vec![SelectionRequest::RunModule {
                id: "net".to_string()
            }]
        );
    }

    #[test]
    fn test_build_requests_with_numbers() {
        let requests = build_run_requests(&strings(&["net", "2", "5"]), None).unwrap();
        assert_eq!(
            requests,
            vec![SelectionRequest::RunTests {
                id: "net".to_string(),
                tokens: strings(&["2", "5"]),
            }]
        );
    }

    #[test]
    fn test_build_requests_range() {
        let requests = build_run_requests(&strings(&["net"]), Some("2:5")).unwrap();
        assert_eq!(
            requests,
            vec![SelectionRequest::RunRange {
                id: "net".to_string(),
                from: 2,
                to: 5,
            }]
        );
    }

    #[test]
    fn test_range_incompatible_with_numbers() {
        // Mixing explicit numbers with --range is an incompatible
        // combination of selection requests.
        assert!(build_run_requests(&strings(&["net", "3"]), Some("2:5")).is_err());
        assert!(build_run_requests(&strings(&["net", "fs"]), Some("2:5")).is_err());
        assert!(build_run_requests(&[], Some("2:5")).is_err());
    }

    #[test]
    fn test_parse_range_shapes() {
        assert_eq!(parse_range("2:5").unwrap(), (2, 5));
        assert!(parse_range("2-5").is_err());
        assert!(parse_range("x:5").is_err());
        assert!(parse_range("5").is_err());
    }
}
