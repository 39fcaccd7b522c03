// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Mai token inspector.
///
/// Scans Mai source and prints the token stream. With no files and no
/// `--eval`, starts an interactive REPL.
#[derive(Debug, Parser)]
#[command(name = "mai", version, about, long_about = None)]
pub struct Cli {
    /// Source files to scan
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Scan the given code instead of files
    #[arg(short, long, value_name = "CODE", conflicts_with = "files")]
    pub eval: Option<String>,

    /// Only print diagnostics, not tokens
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not print the REPL banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Cli {
    /// What to print for each scanned source.
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            show_tokens: !self.quiet,
        }
    }
}

/// Controls how scan results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// Print every token, not only diagnostics
    pub show_tokens: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { show_tokens: true }
    }
}
