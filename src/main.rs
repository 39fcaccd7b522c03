// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Mai - token inspector for the Mai scripting language
//!
//! This is the main entry point for the mai CLI/REPL.
//!
//! ## Features
//!
//! - Interactive REPL with syntax highlighting and history
//! - Async file loading with tokio
//! - Parallel scanning of multiple files

mod cli;
mod output;
mod repl;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, OutputOptions};
use futures::future::join_all;
use mai_syntax::lexer::{scan_parallel, tokenize};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point - uses tokio runtime for async operations.
#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so token output stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let options = cli.output_options();

    if let Some(code) = &cli.eval {
        return run_eval(code, options);
    }

    if cli.files.is_empty() {
        return run_repl(options, !cli.no_banner);
    }

    run_files(&cli.files, options).await
}

/// Start the interactive REPL
fn run_repl(options: OutputOptions, show_banner: bool) -> ExitCode {
    match repl::Repl::new(options, show_banner) {
        Ok(mut repl) => {
            if let Err(e) = repl.run() {
                eprintln!("{}: {:?}", "REPL Error".red().bold(), e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{}: Failed to initialize REPL: {:?}",
                "Error".red().bold(),
                e
            );
            ExitCode::FAILURE
        }
    }
}

/// Scan code given on the command line.
fn run_eval(code: &str, options: OutputOptions) -> ExitCode {
    let scanned = tokenize(code);
    exit_code(output::print_scanned("<eval>", &scanned, options))
}

/// Read every file concurrently, then scan them in parallel.
async fn run_files(paths: &[PathBuf], options: OutputOptions) -> ExitCode {
    let results = read_sources(paths).await;

    let mut ok = true;
    let mut names = Vec::with_capacity(paths.len());
    let mut sources = Vec::with_capacity(paths.len());
    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(source) => {
                names.push(path.display().to_string());
                sources.push(source);
            }
            Err(e) => {
                eprintln!("{}: {:#}", "Error".red().bold(), e);
                ok = false;
            }
        }
    }

    let borrowed: Vec<&str> = sources.iter().map(String::as_str).collect();
    let scanned = scan_parallel(&borrowed);
    info!(files = scanned.len(), "scanned sources");

    for (name, scanned) in names.iter().zip(&scanned) {
        if paths.len() > 1 {
            println!("{}", format!("==> {} <==", name).white().bold());
        }
        ok &= output::print_scanned(name, scanned, options);
    }

    exit_code(ok)
}

/// Reads all `paths`, keeping one result per path in order.
async fn read_sources(paths: &[PathBuf]) -> Vec<anyhow::Result<String>> {
    join_all(paths.iter().map(|path| read_source(path))).await
}

async fn read_source(path: &Path) -> anyhow::Result<String> {
    debug!("reading {}", path.display());
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("cannot read '{}'", path.display()))
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
