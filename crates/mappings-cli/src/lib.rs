// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod commands;
mod helpers;

use clap::{error::ErrorKind, ArgAction, Parser, Subcommand};
use commands::{ConvertCommand, IndexCommand, ValidateCommand};
use helpers::{emit_payload, OutputMode};
use mappings_core::{ExitCode, MachineError};
use mappings_index::{scan_servers, write_csv_index, write_json_index, ScanOptions, SchemaValidator};
use mappings_media::{convert_all, validate_server_media, ConvertOptions};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

const MAPPINGS_HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
Usage: {usage}

Options:
{options}

Commands:
{subcommands}
{after-help}";

#[derive(Parser)]
#[command(name = "mappings")]
#[command(about = "ServerMappings maintenance CLI")]
#[command(version)]
#[command(help_template = MAPPINGS_HELP_TEMPLATE)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,
    #[arg(long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Validate {
        #[command(subcommand)]
        command: ValidateCommand,
    },
    Convert {
        #[command(subcommand)]
        command: ConvertCommand,
    },
    Index {
        #[command(subcommand)]
        command: IndexCommand,
    },
    Version,
}

#[derive(Debug)]
pub struct CliError {
    exit: ExitCode,
    error: MachineError,
}

impl CliError {
    fn new(exit: ExitCode, code: &str, message: impl std::fmt::Display) -> Self {
        Self {
            exit,
            error: MachineError::new(code, &message.to_string()),
        }
    }

    fn validation(message: impl std::fmt::Display) -> Self {
        Self::new(ExitCode::Validation, "validation", message)
    }

    fn dependency(message: impl std::fmt::Display) -> Self {
        Self::new(ExitCode::DependencyFailure, "dependency_failure", message)
    }

    fn internal(message: impl std::fmt::Display) -> Self {
        Self::new(ExitCode::Internal, "internal", message)
    }

    fn report(&self, output_mode: OutputMode) {
        if output_mode.json {
            if let Ok(payload) = serde_json::to_string(&self.error) {
                eprintln!("{payload}");
            }
        } else {
            eprintln!("error: {}", self.error);
        }
    }
}

#[must_use]
pub fn run() -> ProcessExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let exit = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::Usage,
            };
            let _ = err.print();
            return ProcessExitCode::from(exit as u8);
        }
    };
    let output_mode = OutputMode {
        json: cli.json,
        quiet: cli.quiet,
        verbose: cli.verbose,
    };
    match dispatch(cli.command, output_mode) {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            err.report(output_mode);
            ProcessExitCode::from(err.exit as u8)
        }
    }
}

fn dispatch(command: Commands, output_mode: OutputMode) -> Result<(), CliError> {
    match command {
        Commands::Validate { command } => match command {
            ValidateCommand::Json {
                servers_dir,
                schema,
                inactive_file,
            } => run_validate_json(servers_dir, schema, inactive_file, output_mode),
            ValidateCommand::Media {
                servers_dir,
                inactive_file,
            } => run_validate_media(servers_dir, inactive_file, output_mode),
        },
        Commands::Convert { command } => match command {
            ConvertCommand::Media {
                servers_dir,
                logos_out,
                backgrounds_out,
                banners_out,
                sizes,
                lossless,
                inactive_file,
            } => run_convert_media(
                ConvertOptions {
                    servers_dir,
                    logos_out,
                    backgrounds_out,
                    banners_out,
                    sizes,
                    lossless,
                },
                inactive_file,
                output_mode,
            ),
        },
        Commands::Index { command } => match command {
            IndexCommand::Write {
                servers_dir,
                out,
                format,
                include_inactive,
                pretty,
                inactive_file,
            } => run_index_write(
                servers_dir,
                out,
                format,
                include_inactive,
                pretty,
                inactive_file,
                output_mode,
            ),
        },
        Commands::Version => {
            emit_payload(
                output_mode,
                true,
                json!({
                    "command": "mappings version",
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                }),
            );
            Ok(())
        }
    }
}

fn scan(
    servers_dir: PathBuf,
    inactive_file: Option<PathBuf>,
) -> Result<mappings_index::ScanReport, CliError> {
    scan_servers(&ScanOptions {
        servers_dir,
        inactive_path: inactive_file,
    })
    .map_err(CliError::dependency)
}

fn run_validate_json(
    servers_dir: PathBuf,
    schema: PathBuf,
    inactive_file: Option<PathBuf>,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let validator = SchemaValidator::from_file(&schema).map_err(CliError::dependency)?;
    let mut violations = validator
        .validate_dir(&servers_dir)
        .map_err(CliError::dependency)?;

    // Record-level rules the schema cannot express (folder/id match, wildcard
    // aliases, primary address/version listing).
    let report = scan(servers_dir, inactive_file)?;
    for failure in &report.failures {
        violations.push(format!("{}: {}", failure.folder, failure.message));
    }

    let ok = violations.is_empty();
    emit_payload(
        output_mode,
        ok,
        json!({
            "command": "mappings validate json",
            "status": if ok { "ok" } else { "failed" },
            "servers": report.servers.len(),
            "violations": violations,
        }),
    );
    if ok {
        Ok(())
    } else {
        Err(CliError::validation(format!(
            "{} metadata violation(s)",
            violations.len()
        )))
    }
}

fn run_validate_media(
    servers_dir: PathBuf,
    inactive_file: Option<PathBuf>,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let report = scan(servers_dir.clone(), inactive_file)?;
    if !report.ok() {
        let folders: Vec<String> = report
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.folder, f.message))
            .collect();
        return Err(CliError::validation(format!(
            "cannot validate media, metadata failed to load: {}",
            folders.join("; ")
        )));
    }

    let mut violations = Vec::new();
    let mut backgrounds = 0usize;
    let mut banners = 0usize;
    for server in &report.servers {
        let server_dir = servers_dir.join(server.id.as_str());
        let result = validate_server_media(server.id.as_str(), &server_dir);
        if result.has(mappings_model::AssetKind::Background) {
            backgrounds += 1;
        }
        if result.has(mappings_model::AssetKind::Banner) {
            banners += 1;
        }
        violations.extend(result.violations);
    }

    let ok = violations.is_empty();
    emit_payload(
        output_mode,
        ok,
        json!({
            "command": "mappings validate media",
            "status": if ok { "ok" } else { "failed" },
            "servers": report.servers.len(),
            "backgrounds": backgrounds,
            "banners": banners,
            "violations": violations,
        }),
    );
    if ok {
        Ok(())
    } else {
        Err(CliError::validation(format!(
            "{} media violation(s)",
            violations.len()
        )))
    }
}

fn run_convert_media(
    options: ConvertOptions,
    inactive_file: Option<PathBuf>,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let report = scan(options.servers_dir.clone(), inactive_file)?;
    if !report.ok() {
        return Err(CliError::validation(format!(
            "cannot convert media, {} folder(s) failed to load",
            report.failures.len()
        )));
    }

    let (converted, log) = convert_all(&report.servers, &options).map_err(CliError::dependency)?;

    let mut payload = json!({
        "command": "mappings convert media",
        "status": "ok",
        "servers": report.servers.len(),
        "logos": converted.logos,
        "backgrounds": converted.backgrounds,
        "banners": converted.banners,
        "animated_banners": converted.animated_banners,
    });
    if output_mode.verbose > 0 {
        payload["events"] = serde_json::to_value(log.events())
            .map_err(|e| CliError::internal(format!("failed to serialize events: {e}")))?;
    }
    emit_payload(output_mode, true, payload);
    Ok(())
}

fn run_index_write(
    servers_dir: PathBuf,
    out: PathBuf,
    format: commands::IndexFormat,
    include_inactive: bool,
    pretty: bool,
    inactive_file: Option<PathBuf>,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let report = scan(servers_dir, inactive_file)?;
    if !report.ok() {
        let folders: Vec<String> = report
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.folder, f.message))
            .collect();
        return Err(CliError::validation(format!(
            "index not written, metadata failed to load: {}",
            folders.join("; ")
        )));
    }

    let written = match format {
        commands::IndexFormat::Json => {
            write_json_index(&report.servers, &out, include_inactive, pretty)
        }
        commands::IndexFormat::Csv => write_csv_index(&report.servers, &out, include_inactive),
    }
    .map_err(CliError::internal)?;

    emit_payload(
        output_mode,
        true,
        json!({
            "command": "mappings index write",
            "status": "ok",
            "format": format.as_str(),
            "out": out,
            "written": written,
        }),
    );
    Ok(())
}
