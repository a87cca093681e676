//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_current_word, print_export_result, print_path_result, print_stats,
    print_win, print_word_report,
};
