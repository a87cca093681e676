//! Word Hop - CLI
//!
//! Spelling game over a word-edit graph with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use wordhop::{
    builder::WordGraphBuilder,
    commands::{
        Game, GameConfig, check_file, compute_stats, describe_word, export_graph, find_path,
        run_simple,
    },
    core::{Alphabet, WordGraph},
    logging,
    output::{
        print_check_result, print_export_result, print_path_result, print_stats,
        print_word_report,
    },
    wire,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordhop",
    about = "Spelling game over single-letter edits between dictionary words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'default' (embedded dictionary) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Letters tried for inserts and replacements: characters like 'abc',
    /// or 'auto' for every character in the wordlist (default: a-z)
    #[arg(short, long, global = true)]
    alphabet: Option<String>,

    /// Load a pre-built graph in the JSON wire format instead of building one
    #[arg(short, long, global = true, conflicts_with_all = ["wordlist", "alphabet"])]
    graph: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play(GameArgs),

    /// Simple CLI mode (interactive game without TUI)
    Simple(GameArgs),

    /// Show every edit available on a word
    Show {
        /// Word to inspect
        word: String,
    },

    /// Find the shortest ladder between two words
    Path {
        from: String,
        to: String,
    },

    /// Write the graph in the JSON wire format
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a JSON wire-format file
    Check {
        /// File to validate
        file: PathBuf,
    },

    /// Print graph statistics
    Stats,
}

#[derive(clap::Args, Clone, Default)]
struct GameArgs {
    /// Start word (default: random)
    #[arg(short, long)]
    start: Option<String>,

    /// Target word (default: random, a few edits away)
    #[arg(short, long)]
    target: Option<String>,

    /// Play without a target
    #[arg(short, long, conflicts_with = "target")]
    free: bool,
}

impl From<GameArgs> for GameConfig {
    fn from(args: GameArgs) -> Self {
        Self::new(args.start, args.target, args.free)
    }
}

/// Load the word list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "default" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("failed to read wordlist {path}")),
    }
}

/// Pick the alphabet based on the -a flag
fn choose_alphabet(letters: Option<&str>, words: &[String]) -> Result<Alphabet> {
    match letters {
        None => Ok(Alphabet::lowercase_ascii()),
        Some("auto") => Alphabet::from_words(words).context("wordlist has no letters"),
        Some(chars) => Alphabet::new(chars.chars()).context("alphabet is empty"),
    }
}

fn load_graph(cli: &Cli) -> Result<WordGraph> {
    if let Some(path) = &cli.graph {
        return read_graph(path);
    }

    let words = load_wordlist(&cli.wordlist)?;
    let alphabet = choose_alphabet(cli.alphabet.as_deref(), &words)?;
    let graph = WordGraphBuilder::with_alphabet(alphabet)
        .build(&words)
        .context("failed to build word graph")?;
    Ok(graph)
}

fn read_graph(path: &Path) -> Result<WordGraph> {
    let json =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let graph = wire::decode(&json)
        .with_context(|| format!("{} is not a valid graph", path.display()))?;
    info!(path = %path.display(), words = graph.len(), "loaded graph");
    Ok(graph)
}

fn main() -> Result<()> {
    logging::init();
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli
        .command
        .take()
        .unwrap_or_else(|| Commands::Play(GameArgs::default()));

    run_command(&cli, command)
}

fn run_command(cli: &Cli, command: Commands) -> Result<()> {
    match command {
        // Check reads its own file; everything else needs the graph
        Commands::Check { file } => {
            let result = check_file(&file)?;
            print_check_result(&file, &result);
            Ok(())
        }
        Commands::Play(args) => run_play_command(&load_graph(cli)?, args.into()),
        Commands::Simple(args) => run_simple_command(&load_graph(cli)?, args.into()),
        Commands::Show { word } => {
            let report = describe_word(&load_graph(cli)?, &word)?;
            print_word_report(&report);
            Ok(())
        }
        Commands::Path { from, to } => {
            let result = find_path(&load_graph(cli)?, &from, &to)?;
            print_path_result(&result);
            Ok(())
        }
        Commands::Export { output } => {
            let result = export_graph(&load_graph(cli)?, output.as_deref())?;
            print_export_result(&result);
            Ok(())
        }
        Commands::Stats => {
            let stats = compute_stats(&load_graph(cli)?, true);
            print_stats(&stats);
            Ok(())
        }
    }
}

/// Resolve the first game eagerly so a bad start or target word is an error
fn first_game<'g>(graph: &'g WordGraph, config: &GameConfig) -> Result<Game<'g>> {
    Game::resolve(graph, config).context("cannot start a game")
}

/// Game source for restarts: named words stay, random ones are drawn again
fn game_source<'g>(
    graph: &'g WordGraph,
    config: GameConfig,
    first: Game<'g>,
) -> impl FnMut() -> Option<Game<'g>> + 'g {
    let mut first = Some(first);
    move || first.take().or_else(|| Game::resolve(graph, &config).ok())
}

fn run_simple_command(graph: &WordGraph, config: GameConfig) -> Result<()> {
    let first = first_game(graph, &config)?;
    run_simple(graph, game_source(graph, config, first)).context("input error")
}

fn run_play_command(graph: &WordGraph, config: GameConfig) -> Result<()> {
    use wordhop::interactive::{App, run_tui};

    let first = first_game(graph, &config)?;
    let app = App::new(graph, game_source(graph, config, first))
        .context("no playable word in the dictionary")?;
    run_tui(app)
}
