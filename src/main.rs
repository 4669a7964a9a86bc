use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cmdprefix::matching::{find_all_prefixes, find_commands, find_first_prefix};
use cmdprefix::output::{self, LineMatches};
use cmdprefix::utils::{normalize_phrase, resolve_config_path, AppConfig, PhraseOptions};
use cmdprefix::{Dictionary, MatchResult, ResultCollection};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cmdprefix", version)]
#[command(about = "Detect bot prefixes and commands in chat messages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Search phrases as given, without first-line/width/case normalization
    #[arg(long, global = true)]
    raw: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find dictionary commands that end a word of the phrase
    Commands {
        /// Dictionary file, one command per line
        dict: PathBuf,

        /// Phrase to search
        #[arg(required = true, trailing_var_arg = true)]
        phrase: Vec<String>,
    },
    /// Find every dictionary prefix the content starts with, longest first
    Prefixes {
        /// Dictionary file, one prefix per line
        dict: PathBuf,

        /// Content to search
        content: String,
    },
    /// Find the longest dictionary prefix the content starts with
    First {
        /// Dictionary file, one prefix per line
        dict: PathBuf,

        /// Content to search
        content: String,
    },
    /// Search every line of a file (or stdin)
    Scan {
        /// Dictionary file
        dict: PathBuf,

        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,

        /// What to look for on each line
        #[arg(short, long, value_enum, default_value_t = ScanMode::Commands)]
        mode: ScanMode,
    },
    /// Show or initialize the configuration
    Config {
        /// Write the resolved configuration to the config path
        #[arg(long)]
        init: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ScanMode {
    Commands,
    Prefixes,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = AppConfig::load_from(&config_path)?;
    debug!(path = %config_path.display(), "configuration loaded");

    let phrase_options = if cli.raw {
        PhraseOptions::raw()
    } else {
        config.phrase.clone()
    };
    let color = !cli.no_color;

    match cli.command {
        Commands::Commands { dict, phrase } => {
            let dictionary = Dictionary::load(&dict)?;
            let phrase = normalize_phrase(&phrase.join(" "), &phrase_options);
            let found = find_commands(&dictionary, &phrase)?;
            emit(&found, cli.json, color)?;
        }
        Commands::Prefixes { dict, content } => {
            let dictionary = Dictionary::load(&dict)?;
            let found = find_all_prefixes(&dictionary, &content)?;
            emit(&found, cli.json, color)?;
        }
        Commands::First { dict, content } => {
            let dictionary = Dictionary::load(&dict)?;
            let found = find_first_prefix(&dictionary, &content)?;
            if found.is_empty() {
                return Ok(ExitCode::from(1));
            }
            if cli.json {
                output::print_json(&mut io::stdout().lock(), &found)?;
            } else {
                emit(&ResultCollection::from(vec![found]), false, color)?;
            }
        }
        Commands::Scan { dict, input, mode } => {
            let dictionary = Dictionary::load(&dict)?;
            let lines = read_lines(input.as_deref())?;
            let results = scan_lines(&dictionary, &lines, mode, &phrase_options, &config)?;
            info!(lines = lines.len(), "scan complete");

            if cli.json {
                let mut out = io::stdout().lock();
                for entry in &results {
                    output::print_json(&mut out, entry)?;
                }
            } else {
                output::print_line_matches(&mut output::stdout(color), &results)?;
            }
        }
        Commands::Config { init } => {
            if init {
                config.save_to(&config_path)?;
                println!("Wrote {}", config_path.display());
            } else {
                let content = serde_json::to_string_pretty(&config)
                    .context("Failed to serialize config")?;
                println!("# {}", config_path.display());
                println!("{}", content);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn emit(found: &ResultCollection, json: bool, color: bool) -> Result<()> {
    if json {
        output::print_json(&mut io::stdout().lock(), found)?;
    } else {
        let mut out = output::stdout(color);
        output::print_matches(&mut out, found)?;
        out.flush()?;
    }
    Ok(())
}

fn read_lines(input: Option<&Path>) -> Result<Vec<String>> {
    let reader: Box<dyn Read> = match input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        ),
        None => Box::new(io::stdin()),
    };

    BufReader::new(reader)
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read input")
}

/// Run one independent match per line, keeping input order
fn scan_lines(
    dictionary: &Dictionary,
    lines: &[String],
    mode: ScanMode,
    phrase_options: &PhraseOptions,
    config: &AppConfig,
) -> Result<Vec<LineMatches>> {
    let match_line = |(index, line): (usize, &String)| -> MatchResult<LineMatches> {
        let (phrase, matches) = match mode {
            ScanMode::Commands => {
                let phrase = normalize_phrase(line, phrase_options);
                let matches = find_commands(dictionary, &phrase)?;
                (phrase, matches)
            }
            ScanMode::Prefixes => (line.clone(), find_all_prefixes(dictionary, line)?),
        };
        Ok(LineMatches {
            line: index + 1,
            phrase,
            matches,
        })
    };

    if !config.parallel_batch {
        return Ok(lines
            .iter()
            .enumerate()
            .map(match_line)
            .collect::<MatchResult<Vec<_>>>()?);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.effective_batch_threads())
        .build()
        .context("Failed to build scan thread pool")?;

    let results = pool.install(|| {
        lines
            .par_iter()
            .enumerate()
            .map(match_line)
            .collect::<MatchResult<Vec<_>>>()
    })?;
    Ok(results)
}
