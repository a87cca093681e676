//! Interactive TUI interface
//!
//! The current word is drawn as alternating gap and letter slots. Moving
//! the cursor onto a slot and pressing Enter opens that slot's menu; only
//! one menu is open at a time.

mod app;
mod rendering;

pub use app::{App, InputMode, MenuItem, Message, MessageStyle, Statistics, run_tui};
