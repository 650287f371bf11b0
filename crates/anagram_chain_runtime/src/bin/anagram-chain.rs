//! anagram-chain CLI entry point.

use anagram_chain_graph::{BuildStrategy, GraphConfig};
use anagram_chain_runtime::{DEFAULT_WORDS_FILE, LoaderOptions, Repl, Session};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    words_file: Option<PathBuf>,
    root: Option<String>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    pairwise: bool,
    skip_blank: bool,
    comments: bool,
    verbose: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-v" | "--verbose" => config.verbose = true,
            "--pairwise" => config.pairwise = true,
            "--skip-blank" => config.skip_blank = true,
            "--comments" => config.comments = true,
            "-w" | "--words" => {
                i += 1;
                let path = args.get(i).ok_or("--words requires a file path")?;
                config.words_file = Some(PathBuf::from(path));
            }
            "-r" | "--root" => {
                i += 1;
                let root = args.get(i).ok_or("--root requires a root word or number")?;
                config.root = Some(root.clone());
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path if config.words_file.is_none() => config.words_file = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument: {extra}").into()),
        }
        i += 1;
    }

    Ok(config)
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "anagram_chain_graph=debug,anagram_chain_runtime=debug"
    } else {
        "warn"
    };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("anagram-chain {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.verbose);

    let words_file = config
        .words_file
        .unwrap_or_else(|| env::current_dir().unwrap_or_default().join(DEFAULT_WORDS_FILE));
    let options = LoaderOptions::new()
        .with_skip_blank_lines(config.skip_blank)
        .with_comment_prefix(config.comments.then_some('#'));
    let graph_config = GraphConfig::new().with_strategy(if config.pairwise {
        BuildStrategy::Pairwise
    } else {
        BuildStrategy::Bucketed
    });

    let session = Session::from_file(&words_file, &options, graph_config)?;

    // Single root: print its chain and exit
    if let Some(root) = &config.root {
        println!("{}", session.chain_text(root)?);
        return Ok(());
    }

    // Batch mode: every root's chain, then exit
    if config.batch_mode {
        for line in session.chain_summary() {
            println!("{line}");
        }
        return Ok(());
    }

    let mut repl = Repl::new(session)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1managram-chain\x1b[0m - Longest anagram-derivation chains in a word list

\x1b[1mUSAGE:\x1b[0m
    anagram-chain [OPTIONS] [WORDS_FILE]

\x1b[1mARGUMENTS:\x1b[0m
    [WORDS_FILE]       Dictionary, one word per line (default: ./{DEFAULT_WORDS_FILE})

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -w, --words FILE   Dictionary file (same as WORDS_FILE)
    -r, --root ROOT    Print the longest chain for ROOT (word or number) and exit
    -b, --batch        Print the longest chain for every root and exit
    --pairwise         Build the graph by comparing every pair of words
    --skip-blank       Ignore blank lines in the dictionary
    --comments         Ignore lines starting with '#'
    -v, --verbose      Debug logging (RUST_LOG overrides)

\x1b[1mEXAMPLES:\x1b[0m
    anagram-chain                    Load ./words.txt, then start REPL
    anagram-chain -b words.txt       Print every root's chain
    anagram-chain -r ate words.txt   Print the chain starting at \"ate\"

\x1b[1mREPL COMMANDS:\x1b[0m
    <root>, chain <root>   Longest chain for a root word or number
    roots                  List root words with their numbers
    words                  List every dictionary word
    longest                Longest chain for every root
    stats                  Graph statistics
    Ctrl+D, quit           Exit REPL"
    );
}
