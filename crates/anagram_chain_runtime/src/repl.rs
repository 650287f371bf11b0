//! The interactive REPL.
//!
//! Each input line selects a root and prints its longest chain, or runs one
//! of a handful of inspection commands.

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::{Session, format_word_list};
use anagram_chain_foundation::{Error, Result};
use std::io::{self, Write};
use tracing::debug;

/// Command names, offered for completion alongside root words.
const COMMANDS: [&str; 8] = [
    "roots", "words", "chain", "longest", "stats", "help", "quit", "exit",
];

/// What the REPL should do after evaluating one line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Print this text and continue.
    Print(String),
    /// Nothing to print; continue.
    Silent,
    /// Leave the loop.
    Exit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The loaded dictionary.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        let mut completions: Vec<String> = COMMANDS.iter().map(ToString::to_string).collect();
        completions.extend(session.handle().list_roots().into_iter().map(String::from));
        editor.set_completions(completions);
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "root> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop until EOF or `quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Outcome::Print(text)) => println!("{text}"),
            Ok(Outcome::Silent) => {}
            Ok(Outcome::Exit) => return Ok(false),
            Err(e) => self.print_error(&e),
        }
        Ok(true)
    }

    /// Evaluates one input line.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown command or a selector that names no root.
    pub fn eval(&self, input: &str) -> Result<Outcome> {
        let mut parts = input.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(Outcome::Silent);
        };
        let args: Vec<&str> = parts.collect();
        debug!(command, ?args, "repl command");

        match (command, args.as_slice()) {
            ("quit" | "exit", []) => Ok(Outcome::Exit),
            ("help", []) => Ok(Outcome::Print(help_text())),
            ("roots", []) => Ok(Outcome::Print(self.roots_text())),
            ("words", []) => Ok(Outcome::Print(self.session.word_list())),
            ("stats", []) => Ok(Outcome::Print(self.stats_text())),
            ("longest", []) => Ok(Outcome::Print(self.all_chains_text())),
            ("chain", [selector]) => self.session.chain_text(selector).map(Outcome::Print),
            ("chain", _) => Err(Error::internal("chain requires exactly 1 argument: chain <root>")),
            (selector, []) => self.session.chain_text(selector).map(Outcome::Print),
            _ => Err(Error::internal(format!("unknown command: {command}"))),
        }
    }

    fn roots_text(&self) -> String {
        let roots = self.session.roots();
        if roots.is_empty() {
            return "(no root words)".to_string();
        }
        roots
            .iter()
            .map(|(position, word)| format!("{position:>4}: {word}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn all_chains_text(&self) -> String {
        let lines = self.session.chain_summary();
        if lines.is_empty() {
            return "(no root words)".to_string();
        }
        lines.join("\n")
    }

    fn stats_text(&self) -> String {
        let stats = self.session.handle().stats();
        format!(
            "words: {}, roots: {}, linked: {}, unlinked: {}, comparisons: {}",
            stats.words, stats.roots, stats.linked, stats.unlinked, stats.comparisons
        )
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36managram-chain\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        if let Some(source) = self.session.source() {
            println!("Dictionary: {}", source.display());
        }
        let words: Vec<&str> = self.session.handle().list_roots();
        println!("Roots: {}", format_word_list(&words));
        println!("Type a root word or number to see its longest chain, `help` for commands.\n");

        let _ = io::stdout().flush();
    }
}

fn help_text() -> String {
    "\
roots            List root words with their numbers
words            List every dictionary word
chain <root>     Longest chain for a root word or number
<root>           Same as chain <root>
longest          Longest chain for every root
stats            Graph statistics
help             Show this help
quit, exit       Leave"
        .to_string()
}
