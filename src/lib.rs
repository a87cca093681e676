//! Word Hop
//!
//! A spelling game engine over a word-edit graph: every dictionary word is a
//! node, and every single-letter delete, insert or replace that yields
//! another dictionary word is an edge. Learners move through the graph one
//! edit at a time.
//!
//! # Quick Start
//!
//! ```rust
//! use wordhop::builder::WordGraphBuilder;
//!
//! let graph = WordGraphBuilder::new()
//!     .build(&["cat", "bat", "at", "rats", "rat"])
//!     .unwrap();
//!
//! let cat = graph.get("cat").unwrap();
//! let options: String = cat.letter(0).unwrap().replacement_letters().collect();
//! assert_eq!(options, "br");
//! assert!(cat.letter(0).unwrap().can_delete());
//! ```

// Core domain types
pub mod core;

// Graph construction
pub mod builder;

// JSON wire format
pub mod wire;

// Menus, commits and undo
pub mod interaction;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
