//! Olelo Dictionary - Main entrypoint.
//!
//! Loads configuration, initializes logging, seeds the dictionary and runs
//! the requested command.

use clap::{Parser, Subcommand};
use olelo_dictionary_lib::config::{self, LogConfig, OleloConfig};
use olelo_dictionary_lib::data_structures::LanaiTrie;
use olelo_dictionary_lib::error::{
    ErrorContext, ErrorReporter, OleloError, OleloResult, TracingErrorReporter,
};
use olelo_dictionary_lib::session::{Keystroke, TypingSession, BACKSPACE_KEYSYM};
use olelo_dictionary_lib::wordlist;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Character that stands for a backspace key in interactive input.
const BACKSPACE_CHAR: char = '-';

/// Command line arguments for the Olelo dictionary.
#[derive(Parser, Debug)]
#[clap(name = "Olelo Dictionary", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the completions of a prefix
    Suggest {
        /// The typed prefix
        prefix: String,

        /// Print the suggestions as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Report whether a word is stored, is only a prefix, or is absent
    Lookup {
        /// The word to look up
        word: String,
    },

    /// Print every stored word in alphabetical order
    Words,

    /// Type letters line by line and see live suggestions
    Interactive,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so command output on stdout stays machine-readable.
fn init_logging(log: &LogConfig) -> OleloResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_writer(io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| OleloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = <Args as clap::Parser>::parse();
    let reporter = TracingErrorReporter;

    let loader = config::ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let loaded = loader.load();

    // Logging comes up with defaults when the configuration itself is broken
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let command = args.command.unwrap_or(Command::Interactive);
    let outcome = loaded
        .map_err(OleloError::from)
        .and_then(|config| run(command, &config));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let config_source = args
                .config
                .as_deref()
                .map_or_else(|| "defaults".to_string(), |path| path.display().to_string());
            reporter.report(
                ErrorContext::new(e, "olelo_dictionary")
                    .with_details(format!("configuration: {config_source}")),
            );
            ExitCode::FAILURE
        }
    }
}

/// Runs a command against the loaded configuration.
fn run(command: Command, config: &OleloConfig) -> OleloResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Suggest { prefix, json } => {
            let trie = wordlist::build_dictionary(&config.dictionary)?;
            write_suggestions(&trie, &prefix, config.dictionary.max_suggestions, json, &mut out)
        }
        Command::Lookup { word } => {
            let trie = wordlist::build_dictionary(&config.dictionary)?;
            write_lookup(&trie, &word, &mut out)
        }
        Command::Words => {
            let trie = wordlist::build_dictionary(&config.dictionary)?;
            for word in trie.words() {
                writeln!(out, "{word}")?;
            }
            Ok(())
        }
        Command::Interactive => {
            let trie = wordlist::build_dictionary(&config.dictionary)?;
            let session = TypingSession::new().with_max_suggestions(config.dictionary.max_suggestions);
            run_interactive(&trie, session, io::stdin().lock(), &mut out)
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            writeln!(out, "Configuration is valid")?;
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = OleloConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| OleloError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Prints the completions of `prefix`, one per line or as a JSON array,
/// capped at `max_suggestions` when set.
fn write_suggestions<W: Write>(
    trie: &LanaiTrie,
    prefix: &str,
    max_suggestions: Option<usize>,
    json: bool,
    out: &mut W,
) -> OleloResult<()> {
    let mut suggestions = trie.suggest(prefix);
    if let Some(max) = max_suggestions {
        suggestions.truncate(max);
    }

    if json {
        writeln!(out, "{}", serde_json::to_string(&suggestions)?)?;
    } else {
        for suggestion in suggestions {
            writeln!(out, "{suggestion}")?;
        }
    }
    Ok(())
}

/// Reports whether `word` is a stored word, only a prefix, or absent.
fn write_lookup<W: Write>(trie: &LanaiTrie, word: &str, out: &mut W) -> OleloResult<()> {
    let status = match trie.lookup(word) {
        Some(node) if node.is_end_of_word() => "word",
        Some(_) => "prefix",
        None => "absent",
    };
    writeln!(out, "{word}: {status}")?;
    Ok(())
}

/// Feeds each input line through the typing session, one key per character,
/// and prints the suggestions for the resulting text.
fn run_interactive<R: BufRead, W: Write>(
    trie: &LanaiTrie,
    mut session: TypingSession,
    input: R,
    out: &mut W,
) -> OleloResult<()> {
    writeln!(
        out,
        "Type letters and press enter ('{BACKSPACE_CHAR}' deletes, :q quits)"
    )?;

    for line in input.lines() {
        let line = line?;
        if line.trim() == ":q" {
            break;
        }

        for c in line.chars() {
            let keystroke = if c == BACKSPACE_CHAR {
                Keystroke::parse(BACKSPACE_KEYSYM)
            } else {
                Keystroke::parse(c.encode_utf8(&mut [0; 4]))
            };
            session.record(keystroke);
        }

        let suggestions = session.suggestions(trie);
        writeln!(out, "Typed: {}", session.text())?;
        writeln!(out, "Suggestions: {}", suggestions.join(", "))?;
    }

    Ok(())
}
