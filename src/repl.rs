// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL (Read-Scan-Print Loop) for Mai.

use mai_syntax::lexer::{tokenize, TokenKind};
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::debug;

use crate::cli::OutputOptions;
use crate::output::print_scanned;

/// REPL configuration constants
const HISTORY_FILE: &str = ".mai_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// Reserved words offered for completion and highlighted in the prompt.
const KEYWORDS: &[&str] = &[
    "and", "or", "class", "else", "false", "for", "func", "if", "nil", "print", "return", "super",
    "this", "true", "while", "do", "break", "pass",
];

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let rest = input.trim().strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "load" | "l" => Some((ReplCommand::Load, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Scan a Mai source file"),
        ]
    }
}

/// Helper struct for rustyline that provides completion, hints, and validation
#[derive(Default)]
struct MaiHelper {
    /// Keywords and REPL commands for completion
    words: Vec<String>,
}

impl MaiHelper {
    fn new() -> Self {
        let words = KEYWORDS
            .iter()
            .copied()
            .chain([".help", ".exit", ".clear", ".version", ".load"])
            .map(String::from)
            .collect();

        Self { words }
    }

    fn word_start(line: &str) -> usize {
        line.rfind(|c: char| !c.is_alphanumeric() && c != '_' && c != '.')
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

impl Completer for MaiHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = Self::word_start(&line[..pos]);
        let word = &line[start..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches: Vec<Pair> = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for MaiHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[Self::word_start(line)..];
        if word.len() < 2 {
            return None;
        }

        self.words
            .iter()
            .find(|w| w.starts_with(word) && w.len() > word.len())
            .map(|w| w[word.len()..].to_string().dimmed().to_string())
    }
}

impl Highlighter for MaiHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut result = String::with_capacity(line.len() * 2);
        let mut current_word = String::new();

        for c in line.chars() {
            if c.is_alphanumeric() || c == '_' {
                current_word.push(c);
                continue;
            }
            if !current_word.is_empty() {
                result.push_str(&highlight_word(&current_word));
                current_word.clear();
            }
            let colored = match c {
                '(' | ')' | '{' | '}' => c.to_string().yellow().to_string(),
                '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!' => c.to_string().cyan().to_string(),
                '"' | '\'' => c.to_string().green().to_string(),
                _ => c.to_string(),
            };
            result.push_str(&colored);
        }

        if !current_word.is_empty() {
            result.push_str(&highlight_word(&current_word));
        }

        Cow::Owned(result)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

fn highlight_word(word: &str) -> String {
    match TokenKind::keyword(word) {
        Some(TokenKind::True | TokenKind::False | TokenKind::Nil | TokenKind::This) => {
            word.blue().to_string()
        }
        Some(_) => word.magenta().bold().to_string(),
        None if word.chars().all(|c| c.is_ascii_digit()) => word.yellow().to_string(),
        None => word.to_string(),
    }
}

impl Validator for MaiHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        let input = ctx.input();

        if !is_balanced(input) {
            return Ok(ValidationResult::Incomplete);
        }

        // A trailing operator expects more input.
        let trimmed = input.trim_end();
        if trimmed.ends_with(['+', '-', '*', '/', '=', ',', '{', '(']) {
            return Ok(ValidationResult::Incomplete);
        }

        Ok(ValidationResult::Valid(None))
    }
}

/// Check if braces and parentheses are balanced and strings are closed
fn is_balanced(input: &str) -> bool {
    let mut stack = Vec::new();
    let mut in_string = false;

    for c in input.chars() {
        match in_string {
            // Strings open on either quote and close on `"`
            true if c == '"' => in_string = false,
            true => {}
            false => match c {
                '"' | '\'' => in_string = true,
                '(' => stack.push(')'),
                '{' => stack.push('}'),
                ')' | '}' => {
                    if stack.pop() != Some(c) {
                        // Unbalanced, but the scanner output shows the problem
                        return true;
                    }
                }
                _ => {}
            },
        }
    }

    stack.is_empty() && !in_string
}

impl Helper for MaiHelper {}

/// The interactive REPL for the Mai scanner
pub struct Repl {
    editor: Editor<MaiHelper, DefaultHistory>,
    history_path: PathBuf,
    options: OutputOptions,
    show_banner: bool,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(options: OutputOptions, show_banner: bool) -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(MaiHelper::new()));

        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mai")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                debug!("Cannot create history directory {}: {}", parent.display(), e);
            }
        }

        if let Err(e) = editor.load_history(&history_path) {
            debug!("No history loaded from {}: {}", history_path.display(), e);
        }

        Ok(Self {
            editor,
            history_path,
            options,
            show_banner,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> rustyline::Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let prompt = format!("{} ", "mai>".bright_green().bold());

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();

                    if trimmed.is_empty() {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(trimmed) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    self.scan_and_print("<repl>", &line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => {
                    eprintln!("{}: {:?}", "Error".red().bold(), err);
                    break;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            debug!("Cannot save history to {}: {}", self.history_path.display(), e);
        }

        println!();
        Ok(())
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "  {} {} {}",
            "Mai token inspector".white().bold(),
            "v".dimmed(),
            version.bright_yellow()
        );
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => {
                self.print_help();
                CommandResult::Continue
            }
            ReplCommand::Exit => CommandResult::Exit,
            ReplCommand::Clear => {
                print!("\x1B[2J\x1B[H");
                CommandResult::Continue
            }
            ReplCommand::Version => {
                println!(
                    "{} {}",
                    "mai".bright_cyan().bold(),
                    env!("CARGO_PKG_VERSION").yellow()
                );
                CommandResult::Continue
            }
            ReplCommand::Load => {
                match arg {
                    Some(path) => self.load_file(path),
                    None => eprintln!(
                        "{}: {} {}",
                        "Error".red().bold(),
                        ".load".cyan(),
                        "requires a file path".dimmed()
                    ),
                }
                CommandResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!("  {:16} {}", "Ctrl+C".yellow(), "Cancel current input".dimmed());
        println!("  {:16} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:16} {}", "Tab".yellow(), "Autocomplete".dimmed());
        println!();
    }

    fn load_file(&mut self, path: &str) {
        match std::fs::read_to_string(path) {
            Ok(source) => self.scan_and_print(path, &source),
            Err(e) => eprintln!("{}: cannot read '{}': {}", "Error".red().bold(), path.cyan(), e),
        }
    }

    fn scan_and_print(&self, name: &str, source: &str) {
        let scanned = tokenize(source);
        print_scanned(name, &scanned, self.options);
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repl_command_parse() {
        assert_eq!(ReplCommand::parse(".help"), Some((ReplCommand::Help, None)));
        assert_eq!(ReplCommand::parse(".exit"), Some((ReplCommand::Exit, None)));
        assert_eq!(ReplCommand::parse("  .q  "), Some((ReplCommand::Exit, None)));
        assert_eq!(
            ReplCommand::parse(".load test.mai"),
            Some((ReplCommand::Load, Some("test.mai")))
        );
        assert_eq!(ReplCommand::parse(".load   "), Some((ReplCommand::Load, None)));
        assert!(ReplCommand::parse(".unknown").is_none());
        assert!(ReplCommand::parse("not a command").is_none());
    }

    #[test]
    fn test_dot_alone_is_not_a_command() {
        assert!(ReplCommand::parse(".").is_none());
    }

    #[test]
    fn test_is_balanced() {
        assert!(is_balanced("(1 + 2)"));
        assert!(is_balanced("while (a) { print a }"));
        assert!(!is_balanced("(1 + 2"));
        assert!(!is_balanced("if (a) {"));
        assert!(!is_balanced("print \"open"));
        assert!(is_balanced("'string with (unbalanced\""));
        assert!(!is_balanced("'still open'"));
        assert!(is_balanced("\"mixed ' quotes\""));
    }

    #[test]
    fn test_highlight_word() {
        assert!(highlight_word("while").contains("while"));
        assert_ne!(highlight_word("while"), "while");
        assert_ne!(highlight_word("nil"), "nil");
        assert_eq!(highlight_word("counter"), "counter");
    }

    #[test]
    fn test_helper_words_include_keywords_and_commands() {
        let helper = MaiHelper::new();
        assert!(helper.words.iter().any(|w| w == "pass"));
        assert!(helper.words.iter().any(|w| w == ".load"));
        assert_eq!(helper.words.len(), KEYWORDS.len() + 5);
    }

    #[test]
    fn test_keywords_match_scanner() {
        for word in KEYWORDS {
            assert!(TokenKind::keyword(word).is_some(), "{} is not a keyword", word);
        }
    }
}
