//! TUI application state and logic

use crate::commands::{Game, GameState};
use crate::core::{Change, Word, WordGraph};
use crate::interaction::MenuTarget;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Supplies a fresh game on start and on every "new game"
type GameSource<'g> = Box<dyn FnMut() -> Option<Game<'g>> + 'g>;

/// Application state
pub struct App<'g> {
    pub state: GameState<'g>,
    new_game: GameSource<'g>,
    /// Slot under the cursor: even slots are gaps, odd slots are letters
    pub cursor: usize,
    /// Highlighted entry of the open menu
    pub selection: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    WinCelebration,
}

/// One entry of an open menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Delete(String),
    Replace(char, String),
    Insert(char, String),
}

impl MenuItem {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Delete(word) => format!("-  delete  → {word}"),
            Self::Replace(c, word) => format!("{c}  replace → {word}"),
            Self::Insert(c, word) => format!("{c}  insert  → {word}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins that matched the shortest ladder
    pub perfect_games: usize,
}

impl<'g> App<'g> {
    /// Build the app around the first game from `new_game`
    ///
    /// Returns `None` if no game can be started.
    pub fn new(
        graph: &'g WordGraph,
        mut new_game: impl FnMut() -> Option<Game<'g>> + 'g,
    ) -> Option<Self> {
        let game = new_game()?;
        let mut app = Self {
            state: GameState::new(graph, game),
            new_game: Box::new(new_game),
            cursor: 1,
            selection: 0,
            messages: Vec::new(),
            stats: Statistics {
                total_games: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Playing,
        };
        app.announce();
        Some(app)
    }

    #[must_use]
    pub fn current(&self) -> &'g Word {
        self.state.current()
    }

    /// Number of slots: one per gap and one per letter
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.current().len() * 2 + 1
    }

    /// Menu target under the cursor
    #[must_use]
    pub const fn cursor_target(&self) -> MenuTarget {
        if self.cursor % 2 == 0 {
            MenuTarget::Position(self.cursor / 2)
        } else {
            MenuTarget::Letter(self.cursor / 2)
        }
    }

    /// Entries of the open menu, empty when no menu is open
    #[must_use]
    pub fn menu_items(&self) -> Vec<MenuItem> {
        let graph_value = |change: Change| self.state.graph().resolve(change).value().to_string();
        match self.state.interaction().open_menu() {
            Some(MenuTarget::Letter(i)) => {
                let Some(letter) = self.current().letter(i) else {
                    return Vec::new();
                };
                letter
                    .delete_change()
                    .map(|c| MenuItem::Delete(graph_value(c)))
                    .into_iter()
                    .chain(letter.replacements().iter().filter_map(|&c| {
                        Some(MenuItem::Replace(c.letter()?, graph_value(c)))
                    }))
                    .collect()
            }
            Some(MenuTarget::Position(j)) => self
                .current()
                .position(j)
                .map(|position| {
                    position
                        .inserts()
                        .iter()
                        .filter_map(|&c| Some(MenuItem::Insert(c.letter()?, graph_value(c))))
                        .collect()
                })
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.state.interaction().open_menu().is_some()
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.start_new_game(),
                _ => {}
            },
            InputMode::Playing if self.is_menu_open() => self.handle_menu_key(key.code),
            InputMode::Playing => self.handle_word_key(key.code),
        }
    }

    fn handle_word_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.slot_count() - 1),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.slot_count() - 1,
            KeyCode::Enter | KeyCode::Char(' ') => self.open_at_cursor(),
            KeyCode::Char('u') => self.undo_last(),
            KeyCode::Char('n') => self.start_new_game(),
            KeyCode::Char('s') => self.state.say(),
            KeyCode::Char('h') => match self.state.hint() {
                Some(hint) => self.add_message(&format!("Hint: {hint}"), MessageStyle::Info),
                None => self.add_message("No hint available", MessageStyle::Error),
            },
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        let items = self.menu_items();
        match code {
            KeyCode::Esc => {
                self.state.close_menu();
                self.selection = 0;
            }
            KeyCode::Up => self.selection = self.selection.saturating_sub(1),
            KeyCode::Down => {
                self.selection = (self.selection + 1).min(items.len().saturating_sub(1));
            }
            KeyCode::Enter => {
                if let Some(item) = items.get(self.selection) {
                    self.choose(item);
                }
            }
            KeyCode::Char('-') | KeyCode::Delete | KeyCode::Backspace => {
                match items.iter().find(|item| matches!(item, MenuItem::Delete(_))) {
                    Some(item) => self.choose(item),
                    None => self.add_message("Deleting here is not a word", MessageStyle::Error),
                }
            }
            KeyCode::Char(c) => {
                let found = items.iter().find(|item| {
                    matches!(item, MenuItem::Replace(l, _) | MenuItem::Insert(l, _) if *l == c)
                });
                match found {
                    Some(item) => self.choose(item),
                    None => {
                        self.add_message(&format!("'{c}' is not an option here"), MessageStyle::Error);
                    }
                }
            }
            _ => {}
        }
    }

    fn open_at_cursor(&mut self) {
        let target = self.cursor_target();
        self.state.open_menu(target);
        self.selection = 0;
        if self.menu_items().is_empty() {
            self.state.close_menu();
            let text = match target {
                MenuTarget::Letter(_) => "No edits for this letter",
                MenuTarget::Position(_) => "Nothing can be inserted here",
            };
            self.add_message(text, MessageStyle::Error);
        }
    }

    fn choose(&mut self, item: &MenuItem) {
        let result = match (self.cursor_target(), item) {
            (MenuTarget::Letter(i), MenuItem::Delete(_)) => self.state.delete(i),
            (MenuTarget::Letter(i), MenuItem::Replace(c, _)) => self.state.replace(i, *c),
            (MenuTarget::Position(j), MenuItem::Insert(c, _)) => self.state.insert(j, *c),
            _ => return,
        };

        match result {
            Ok(word) => {
                self.selection = 0;
                self.cursor = self.cursor.min(self.slot_count() - 1);
                self.add_message(&format!("→ {}", word.value()), MessageStyle::Info);
                if self.state.is_won() {
                    self.celebrate();
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn celebrate(&mut self) {
        let moves = self.state.moves();
        let par = self.state.game().par;
        self.stats.games_won += 1;
        if par.is_some_and(|p| moves <= p) {
            self.stats.perfect_games += 1;
        }
        self.input_mode = InputMode::WinCelebration;

        let celebration = match par {
            Some(p) if moves <= p => "🏆 PERFECT! Shortest possible ladder! 🏆",
            Some(p) if moves <= p + 2 => "✨ SPLENDID! Very close to the best! ✨",
            _ => "🎊 TARGET REACHED! 🎊",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn start_new_game(&mut self) {
        let Some(game) = (self.new_game)() else {
            self.add_message("No playable word available", MessageStyle::Error);
            return;
        };
        self.state.restart(game);
        self.stats.total_games += 1;
        self.cursor = 1;
        self.selection = 0;
        self.input_mode = InputMode::Playing;
        self.messages.clear();
        self.announce();
    }

    pub fn undo_last(&mut self) {
        if let Some(word) = self.state.undo() {
            self.cursor = self.cursor.min(self.slot_count() - 1);
            self.selection = 0;
            self.add_message(&format!("Undone! Back to {}", word.value()), MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn announce(&mut self) {
        let game = *self.state.game();
        let text = match (game.target, game.par) {
            (Some(target), Some(par)) => format!(
                "Turn '{}' into '{}' ({par} edits at best)",
                game.start.value(),
                target.value()
            ),
            (Some(target), None) => format!(
                "Turn '{}' into '{}' (no known ladder)",
                game.start.value(),
                target.value()
            ),
            (None, _) => format!("Free play from '{}'", game.start.value()),
        };
        self.add_message(&text, MessageStyle::Info);
        self.add_message("←/→ move, Enter opens a menu, Esc closes it", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App<'_>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<'_>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
