//! Game setup and state shared by the interactive modes
//!
//! Resolves the start and target words of a game, picking them at random
//! when not given, and tracks the current word through a session.

use super::path::describe_edit;
use crate::core::{ChangeKind, GraphError, Word, WordGraph};
use crate::interaction::{
    InteractionError, MenuTarget, Session, TracingSayer, WordInteraction,
};
use rand::prelude::IndexedRandom;
use std::cell::Cell;
use std::rc::Rc;

/// Fewest edits between a random start and target, when the graph allows
const MIN_TARGET_DISTANCE: usize = 3;

/// Start/target selection for a game
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Start word; random if `None`
    pub start: Option<String>,
    /// Target word; random if `None` and `free_play` is false
    pub target: Option<String>,
    /// Play without a target
    pub free_play: bool,
}

impl GameConfig {
    #[must_use]
    pub fn new(start: Option<String>, target: Option<String>, free_play: bool) -> Self {
        Self {
            start,
            target,
            free_play,
        }
    }
}

/// A resolved game: where the learner starts and where they are heading
#[derive(Debug, Clone, Copy)]
pub struct Game<'g> {
    pub start: &'g Word,
    pub target: Option<&'g Word>,
    /// Fewest edits from start to target, if a target is reachable
    pub par: Option<usize>,
}

impl<'g> Game<'g> {
    /// Resolve a config against a graph
    ///
    /// # Errors
    /// Returns `GraphError::NotFound` if a named word is not in the graph, or
    /// if the graph has no word with any edits to start from.
    pub fn resolve(graph: &'g WordGraph, config: &GameConfig) -> Result<Self, GraphError> {
        let start = match &config.start {
            Some(value) => graph.get_required_word(value)?,
            None => random_start(graph)?,
        };

        let target = match (&config.target, config.free_play) {
            (_, true) => None,
            (Some(value), false) => Some(graph.get_required_word(value)?),
            (None, false) => random_target(graph, start),
        };

        let par = target
            .and_then(|t| graph.shortest_path(start, t))
            .map(|path| path.len() - 1);

        Ok(Self { start, target, par })
    }

    /// Whether `current` completes the game
    #[must_use]
    pub fn is_won(&self, current: &Word) -> bool {
        self.target.is_some_and(|t| t.id() == current.id())
    }
}

/// A random word that has at least one edit
fn random_start(graph: &WordGraph) -> Result<&Word, GraphError> {
    let playable: Vec<&Word> = graph.iter().filter(|w| !w.changes().is_empty()).collect();
    playable
        .choose(&mut rand::rng())
        .copied()
        .ok_or_else(|| GraphError::NotFound("<any playable word>".to_string()))
}

/// A random reachable word, preferring ones a few edits away
fn random_target<'g>(graph: &'g WordGraph, start: &Word) -> Option<&'g Word> {
    let distances = graph.distances_from(start);
    let distance = |w: &Word| distances[w.id().index()];

    let reachable: Vec<&Word> = graph
        .iter()
        .filter(|&w| distance(w).is_some_and(|d| d > 0))
        .collect();
    let far: Vec<&Word> = reachable
        .iter()
        .copied()
        .filter(|&w| distance(w).is_some_and(|d| d >= MIN_TARGET_DISTANCE))
        .collect();

    let pool = if far.is_empty() { &reachable } else { &far };
    pool.choose(&mut rand::rng()).copied()
}

/// A game in progress
///
/// The session's new-word handler writes each committed word into
/// `current`; the state then rebuilds its interactions around it. Letter
/// and gap indices are zero-based.
pub struct GameState<'g> {
    session: Session<'g>,
    current: Rc<Cell<&'g Word>>,
    interaction: WordInteraction<'g>,
    game: Game<'g>,
}

impl<'g> GameState<'g> {
    #[must_use]
    pub fn new(graph: &'g WordGraph, game: Game<'g>) -> Self {
        let current = Rc::new(Cell::new(game.start));
        let sink = Rc::clone(&current);
        let session = Session::new(graph, TracingSayer, move |word: &'g Word| sink.set(word));
        let interaction = session.interact(game.start);

        Self {
            session,
            current,
            interaction,
            game,
        }
    }

    #[must_use]
    pub fn current(&self) -> &'g Word {
        self.current.get()
    }

    #[must_use]
    pub const fn game(&self) -> &Game<'g> {
        &self.game
    }

    #[must_use]
    pub fn graph(&self) -> &'g WordGraph {
        self.session.graph()
    }

    #[must_use]
    pub const fn interaction(&self) -> &WordInteraction<'g> {
        &self.interaction
    }

    /// Edits made so far, net of undos
    #[must_use]
    pub fn moves(&self) -> usize {
        self.session.history().len()
    }

    /// Words left behind, oldest first
    #[must_use]
    pub fn trail(&self) -> Vec<&'g Word> {
        self.session.history().iter().collect()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.game.is_won(self.current())
    }

    /// Fewest edits from the current word to the target
    #[must_use]
    pub fn distance_to_target(&self) -> Option<usize> {
        let target = self.game.target?;
        self.session
            .graph()
            .shortest_path(self.current(), target)
            .map(|path| path.len() - 1)
    }

    /// Delete the letter at `index`
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::InvalidChoice` if there is no such letter
    /// or deleting it does not give a dictionary word.
    pub fn delete(&mut self, index: usize) -> Result<&'g Word, InteractionError> {
        // Validate before opening so a rejected edit leaves the menus alone
        let letter = self
            .interaction
            .letter(index)
            .filter(|l| l.letter().can_delete())
            .ok_or_else(|| self.invalid(index, ChangeKind::Delete))?;
        letter.open();
        letter.choose_delete()?;
        Ok(self.advance())
    }

    /// Replace the letter at `index` with `letter`
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::InvalidChoice` if there is no such letter
    /// or the replacement is not a dictionary word.
    pub fn replace(&mut self, index: usize, letter: char) -> Result<&'g Word, InteractionError> {
        let interaction = self
            .interaction
            .letter(index)
            .filter(|l| l.letter().replacement(letter).is_some())
            .ok_or_else(|| self.invalid(index, ChangeKind::Replace(letter)))?;
        interaction.open();
        interaction.choose_replacement(letter)?;
        Ok(self.advance())
    }

    /// Insert `letter` at gap `index`
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::InvalidChoice` if there is no such gap or
    /// the insert is not a dictionary word.
    pub fn insert(&mut self, index: usize, letter: char) -> Result<&'g Word, InteractionError> {
        let position = self
            .interaction
            .position(index)
            .filter(|p| p.position().insert(letter).is_some())
            .ok_or_else(|| self.invalid(index, ChangeKind::Insert(letter)))?;
        position.open();
        position.choose_insert(letter)?;
        Ok(self.advance())
    }

    /// Open the menu for a letter or gap of the current word
    pub fn open_menu(&self, target: MenuTarget) {
        match target {
            MenuTarget::Letter(i) => {
                if let Some(letter) = self.interaction.letter(i) {
                    letter.open();
                }
            }
            MenuTarget::Position(j) => {
                if let Some(position) = self.interaction.position(j) {
                    position.open();
                }
            }
        }
    }

    /// Close whichever menu of the current word is open
    pub fn close_menu(&self) {
        match self.interaction.open_menu() {
            Some(MenuTarget::Letter(i)) => {
                if let Some(letter) = self.interaction.letter(i) {
                    letter.close();
                }
            }
            Some(MenuTarget::Position(j)) => {
                if let Some(position) = self.interaction.position(j) {
                    position.close();
                }
            }
            None => {}
        }
    }

    /// Step back one edit
    pub fn undo(&mut self) -> Option<&'g Word> {
        let previous = self.session.undo()?;
        self.current.set(previous);
        self.interaction = self.session.interact(previous);
        Some(previous)
    }

    /// Start over with a new game on the same graph
    pub fn restart(&mut self, game: Game<'g>) {
        self.session.new_game();
        self.game = game;
        self.current.set(game.start);
        self.interaction = self.session.interact(game.start);
    }

    /// Describe the next edit on a shortest path to the target
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        let target = self.game.target?;
        let path = self.session.graph().shortest_path(self.current(), target)?;
        describe_edit(path.first()?, path.get(1)?)
    }

    pub fn say(&self) {
        self.interaction.say();
    }

    fn advance(&mut self) -> &'g Word {
        let word = self.current();
        self.interaction = self.session.interact(word);
        word
    }

    fn invalid(&self, index: usize, kind: ChangeKind) -> InteractionError {
        InteractionError::InvalidChoice {
            word: self.current().value().to_string(),
            index,
            kind,
        }
    }
}
