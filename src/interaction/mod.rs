//! Stateful interaction layer
//!
//! Everything a front-end needs to let a learner edit the current word:
//! per-letter and per-gap menus with a single-open-menu rule, the commit
//! protocol that moves to a new word, and undo.
//!
//! # Example
//! ```
//! use std::cell::Cell;
//! use wordhop::builder::WordGraphBuilder;
//! use wordhop::core::Word;
//! use wordhop::interaction::{Session, SilentSayer};
//!
//! let graph = WordGraphBuilder::new().build(&["cat", "at", "bat"]).unwrap();
//! let current = Cell::new(graph.get("cat").unwrap());
//! let session = Session::new(&graph, SilentSayer, |w: &Word| println!("now at {w}"));
//!
//! let cat = session.interact(current.get());
//! cat.letter(0).unwrap().open();
//! let at = cat.letter(0).unwrap().choose_delete().unwrap();
//! current.set(at);
//!
//! assert_eq!(current.get().value(), "at");
//! assert_eq!(session.undo().unwrap().value(), "cat");
//! ```

mod collaborators;
mod history;
mod menu;
mod session;
mod word;

pub use collaborators::{NewWordHandler, SilentSayer, TracingSayer, WordSayer};
pub use history::History;
pub use menu::{InteractionId, MenuEvent, MenuManager, MenuState, MenuTarget};
pub use session::Session;
pub use word::{InteractionError, LetterInteraction, PositionInteraction, WordInteraction};
