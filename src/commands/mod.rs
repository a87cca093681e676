//! Command implementations

pub mod check;
pub mod export;
pub mod game;
pub mod path;
pub mod show;
pub mod simple;
pub mod stats;

pub use check::{CheckResult, check_file, check_json};
pub use export::{ExportResult, export_graph};
pub use game::{Game, GameConfig, GameState};
pub use path::{PathResult, PathStep, describe_edit, find_path};
pub use show::{GapReport, LetterReport, WordReport, describe_word};
pub use simple::{SimpleCommand, apply_edit, parse_command, run_simple};
pub use stats::{GraphStats, compute_stats};
