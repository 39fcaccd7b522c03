// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Coloured rendering of tokens and diagnostics.

use mai_syntax::lexer::{LexError, Literal, Scanned, Token, TokenKind};
use owo_colors::OwoColorize;

use crate::cli::OutputOptions;

/// Prints a scan result. Returns true if the source had no lexical errors.
pub fn print_scanned(name: &str, scanned: &Scanned, options: OutputOptions) -> bool {
    if options.show_tokens {
        for token in &scanned.tokens {
            println!("{}", format_token(token));
        }
    }

    for error in &scanned.errors {
        eprintln!("{}", format_error(name, error));
    }

    !scanned.has_errors()
}

/// One token per line: line number, kind, lexeme, literal.
pub fn format_token(token: &Token) -> String {
    let line = format!("{:>4}", token.line);
    let kind = format!("{:<14}", token.kind.name());
    let kind = if token.kind.is_keyword() {
        kind.magenta().bold().to_string()
    } else if token.kind.is_literal() {
        kind.yellow().to_string()
    } else if matches!(token.kind, TokenKind::Newline | TokenKind::Eof) {
        kind.dimmed().to_string()
    } else {
        kind.cyan().to_string()
    };

    let mut out = format!("{} {} {:?}", line.dimmed(), kind, token.lexeme);
    match &token.literal {
        Literal::None => {}
        Literal::Number(n) => out.push_str(&format!(" {}", n.yellow())),
        Literal::String(s) => out.push_str(&format!(" {}", format!("{:?}", s).green())),
    }
    out
}

/// `name:[line N] Error: message`
pub fn format_error(name: &str, error: &LexError) -> String {
    format!(
        "{}:{} {}: {}",
        name.cyan(),
        format!("[line {}]", error.line()).dimmed(),
        "Error".red().bold(),
        error
    )
}
