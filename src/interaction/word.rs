//! Interactions over the current word
//!
//! A `WordInteraction` pairs the current word with one `LetterInteraction`
//! per letter and one `PositionInteraction` per gap. Each of those owns a
//! menu (replace/delete for letters, insert for gaps) and commits a chosen
//! edit through the session.

use super::menu::{InteractionId, MenuTarget};
use super::session::SessionContext;
use crate::core::{ChangeKind, Letter, Position, Word};
use std::rc::Rc;
use tracing::debug;

/// Error type for edit selection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InteractionError {
    /// The selection matches no recorded change; nothing was modified
    #[error("cannot {kind} at {index} in '{word}'")]
    InvalidChoice {
        word: String,
        index: usize,
        kind: ChangeKind,
    },

    /// The interaction belongs to a word the session has moved away from
    #[error("'{word}' is no longer the current word")]
    Stale { word: String },
}

/// The current word and its per-letter and per-gap interactions
pub struct WordInteraction<'g> {
    word: &'g Word,
    letters: Vec<LetterInteraction<'g>>,
    positions: Vec<PositionInteraction<'g>>,
    ctx: Rc<SessionContext<'g>>,
}

impl<'g> WordInteraction<'g> {
    pub(super) fn new(word: &'g Word, ctx: Rc<SessionContext<'g>>) -> Self {
        let generation = ctx.generation();

        let letters = word
            .letters()
            .iter()
            .map(|letter| LetterInteraction {
                id: InteractionId::new(generation, MenuTarget::Letter(letter.position())),
                word,
                letter,
                ctx: Rc::clone(&ctx),
            })
            .collect();

        let positions = word
            .positions()
            .iter()
            .map(|position| PositionInteraction {
                id: InteractionId::new(generation, MenuTarget::Position(position.index())),
                word,
                position,
                ctx: Rc::clone(&ctx),
            })
            .collect();

        for neighbor in ctx.graph().neighbors(word) {
            ctx.sayer().preload(neighbor.value());
        }

        Self {
            word,
            letters,
            positions,
            ctx,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &'g Word {
        self.word
    }

    #[must_use]
    pub fn letters(&self) -> &[LetterInteraction<'g>] {
        &self.letters
    }

    #[must_use]
    pub fn positions(&self) -> &[PositionInteraction<'g>] {
        &self.positions
    }

    #[must_use]
    pub fn letter(&self, index: usize) -> Option<&LetterInteraction<'g>> {
        self.letters.get(index)
    }

    #[must_use]
    pub fn position(&self, index: usize) -> Option<&PositionInteraction<'g>> {
        self.positions.get(index)
    }

    /// Which of this word's menus is open, if any
    #[must_use]
    pub fn open_menu(&self) -> Option<MenuTarget> {
        let letters = self
            .letters
            .iter()
            .filter(|l| l.is_replace_menu_open())
            .map(|l| l.id.target());
        let gaps = self
            .positions
            .iter()
            .filter(|p| p.is_insert_menu_open())
            .map(|p| p.id.target());
        letters.chain(gaps).next()
    }

    /// Announce the current word
    pub fn say(&self) {
        self.ctx.sayer().say(self.word.value());
    }
}

/// Menu and commit protocol for one letter
pub struct LetterInteraction<'g> {
    id: InteractionId,
    word: &'g Word,
    letter: &'g Letter,
    ctx: Rc<SessionContext<'g>>,
}

impl<'g> LetterInteraction<'g> {
    #[inline]
    #[must_use]
    pub const fn id(&self) -> InteractionId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> &'g Letter {
        self.letter
    }

    #[must_use]
    pub fn is_replace_menu_open(&self) -> bool {
        self.ctx.is_open(self.id)
    }

    /// Open this letter's menu, closing any other
    pub fn open(&self) {
        if self.ctx.is_current(self.id) {
            self.ctx.request_open(self.id);
        } else {
            debug!(word = self.word.value(), "ignoring open on stale letter");
        }
    }

    pub fn close(&self) {
        self.ctx.close(self.id);
    }

    /// Commit a replacement
    ///
    /// # Errors
    /// `InvalidChoice` if `letter` is not among this letter's replacements;
    /// `Stale` if the session has moved to another word. Neither modifies
    /// any state.
    pub fn choose_replacement(&self, letter: char) -> Result<&'g Word, InteractionError> {
        self.ensure_current()?;
        let change = self
            .letter
            .replacement(letter)
            .ok_or_else(|| self.invalid(ChangeKind::Replace(letter)))?;
        Ok(self.ctx.commit(self.word, self.id, change))
    }

    /// Commit deleting this letter
    ///
    /// # Errors
    /// `InvalidChoice` if deleting does not give a dictionary word; `Stale`
    /// if the session has moved on.
    pub fn choose_delete(&self) -> Result<&'g Word, InteractionError> {
        self.ensure_current()?;
        let change = self
            .letter
            .delete_change()
            .ok_or_else(|| self.invalid(ChangeKind::Delete))?;
        Ok(self.ctx.commit(self.word, self.id, change))
    }

    fn ensure_current(&self) -> Result<(), InteractionError> {
        ensure_current(&self.ctx, self.id, self.word)
    }

    fn invalid(&self, kind: ChangeKind) -> InteractionError {
        InteractionError::InvalidChoice {
            word: self.word.value().to_string(),
            index: self.letter.position(),
            kind,
        }
    }
}

/// Menu and commit protocol for one gap
pub struct PositionInteraction<'g> {
    id: InteractionId,
    word: &'g Word,
    position: &'g Position,
    ctx: Rc<SessionContext<'g>>,
}

impl<'g> PositionInteraction<'g> {
    #[inline]
    #[must_use]
    pub const fn id(&self) -> InteractionId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> &'g Position {
        self.position
    }

    #[must_use]
    pub fn is_insert_menu_open(&self) -> bool {
        self.ctx.is_open(self.id)
    }

    /// Open this gap's menu, closing any other
    pub fn open(&self) {
        if self.ctx.is_current(self.id) {
            self.ctx.request_open(self.id);
        } else {
            debug!(word = self.word.value(), "ignoring open on stale position");
        }
    }

    pub fn close(&self) {
        self.ctx.close(self.id);
    }

    /// Commit inserting `letter` at this gap
    ///
    /// # Errors
    /// `InvalidChoice` if `letter` is not an insert option here; `Stale` if
    /// the session has moved on.
    pub fn choose_insert(&self, letter: char) -> Result<&'g Word, InteractionError> {
        ensure_current(&self.ctx, self.id, self.word)?;
        let change = self
            .position
            .insert(letter)
            .ok_or_else(|| InteractionError::InvalidChoice {
                word: self.word.value().to_string(),
                index: self.position.index(),
                kind: ChangeKind::Insert(letter),
            })?;
        Ok(self.ctx.commit(self.word, self.id, change))
    }
}

fn ensure_current(
    ctx: &SessionContext<'_>,
    id: InteractionId,
    word: &Word,
) -> Result<(), InteractionError> {
    if ctx.is_current(id) {
        Ok(())
    } else {
        Err(InteractionError::Stale {
            word: word.value().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::WordGraphBuilder;
    use crate::core::WordGraph;
    use crate::interaction::{MenuEvent, Session, SilentSayer, WordSayer};
    use std::cell::RefCell;

    fn scenario() -> WordGraph {
        WordGraphBuilder::new()
            .build(&["cat", "bat", "rat", "hat", "mat", "sat", "at", "rats"])
            .unwrap()
    }

    /// Session whose handler records every word it receives
    fn recording_session(graph: &WordGraph) -> (Session<'_>, Rc<RefCell<Vec<String>>>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let session = Session::new(graph, SilentSayer, move |w: &Word| {
            sink.borrow_mut().push(w.value().to_string());
        });
        (session, received)
    }

    #[test]
    fn builds_one_interaction_per_letter_and_gap() {
        let graph = scenario();
        let (session, _) = recording_session(&graph);
        let cat = session.interact(graph.get("cat").unwrap());

        assert_eq!(cat.letters().len(), 3);
        assert_eq!(cat.positions().len(), 4);
        for (i, letter) in cat.letters().iter().enumerate() {
            assert_eq!(letter.letter().position(), i);
            assert_eq!(letter.id().target(), MenuTarget::Letter(i));
        }
        for (i, position) in cat.positions().iter().enumerate() {
            assert_eq!(position.position().index(), i);
        }
    }

    #[test]
    #[should_panic(expected = "word must come from the session graph")]
    fn interact_rejects_word_from_another_graph() {
        let graph = scenario();
        let other = WordGraphBuilder::new().build(&["cat", "cot"]).unwrap();
        let (session, _) = recording_session(&graph);
        let _ = session.interact(other.get("cat").unwrap());
    }

    #[test]
    fn choose_delete_commits_cat_to_at() {
        let graph = scenario();
        let (session, received) = recording_session(&graph);
        let cat = session.interact(graph.get("cat").unwrap());
        let first = cat.letter(0).unwrap();

        first.open();
        assert!(first.is_replace_menu_open());

        let result = first.choose_delete().unwrap();

        assert_eq!(result.value(), "at");
        assert_eq!(*received.borrow(), vec!["at".to_string()]);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().peek().unwrap().value(), "cat");
        assert!(!first.is_replace_menu_open());
        assert_eq!(session.menu().open_id(), None);
    }

    #[test]
    fn choose_replacement_commits() {
        let graph = scenario();
        let (session, received) = recording_session(&graph);
        let cat = session.interact(graph.get("cat").unwrap());

        let result = cat.letter(0).unwrap().choose_replacement('h').unwrap();
        assert_eq!(result.value(), "hat");
        assert_eq!(*received.borrow(), vec!["hat".to_string()]);
        assert!(session.can_undo());
    }

    #[test]
    fn choose_insert_commits() {
        let graph = scenario();
        let (session, received) = recording_session(&graph);
        let rat = session.interact(graph.get("rat").unwrap());
        let end = rat.position(3).unwrap();

        end.open();
        assert!(end.is_insert_menu_open());
        assert_eq!(end.choose_insert('s').unwrap().value(), "rats");
        assert!(!end.is_insert_menu_open());
        assert_eq!(*received.borrow(), vec!["rats".to_string()]);
    }

    #[test]
    fn invalid_choices_have_no_side_effects() {
        let graph = scenario();
        let (session, received) = recording_session(&graph);
        let cat = session.interact(graph.get("cat").unwrap());

        let middle = cat.letter(1).unwrap();
        middle.open();

        let err = middle.choose_delete().unwrap_err();
        assert_eq!(
            err,
            InteractionError::InvalidChoice {
                word: "cat".to_string(),
                index: 1,
                kind: ChangeKind::Delete,
            }
        );
        assert_eq!(err.to_string(), "cannot delete at 1 in 'cat'");

        assert!(cat.letter(0).unwrap().choose_replacement('z').is_err());
        assert!(cat.letter(0).unwrap().choose_replacement('c').is_err());
        assert!(cat.position(0).unwrap().choose_insert('s').is_err());

        assert!(received.borrow().is_empty());
        assert!(!session.can_undo());
        assert!(middle.is_replace_menu_open());
    }

    #[test]
    fn one_menu_open_across_word() {
        let graph = scenario();
        let (session, _) = recording_session(&graph);
        let cat = session.interact(graph.get("cat").unwrap());

        cat.letter(0).unwrap().open();
        cat.position(3).unwrap().open();
        cat.letter(2).unwrap().open();

        let open_letters = cat.letters().iter().filter(|l| l.is_replace_menu_open()).count();
        let open_gaps = cat.positions().iter().filter(|p| p.is_insert_menu_open()).count();
        assert_eq!(open_letters + open_gaps, 1);
        assert_eq!(cat.open_menu(), Some(MenuTarget::Letter(2)));

        cat.letter(2).unwrap().close();
        assert_eq!(cat.open_menu(), None);
    }

    #[test]
    fn close_on_other_interaction_is_noop() {
        let graph = scenario();
        let (session, _) = recording_session(&graph);
        let cat = session.interact(graph.get("cat").unwrap());

        cat.letter(0).unwrap().open();
        cat.letter(1).unwrap().close();
        assert!(cat.letter(0).unwrap().is_replace_menu_open());
    }

    #[test]
    fn history_round_trip_through_session() {
        let graph = scenario();
        let (session, received) = recording_session(&graph);
        assert!(!session.can_undo());

        let cat = session.interact(graph.get("cat").unwrap());
        let bat = cat.letter(0).unwrap().choose_replacement('b').unwrap();
        let bat = session.interact(bat);
        bat.letter(0).unwrap().open();

        let previous = session.undo().unwrap();
        assert_eq!(previous.value(), "cat");
        assert!(!session.can_undo());
        assert!(session.undo().is_none());
        assert_eq!(session.menu().open_id(), None);
        // Undo does not call the handler
        assert_eq!(received.borrow().len(), 1);
    }

    #[test]
    fn stale_interactions_are_inert() {
        let graph = scenario();
        let (session, received) = recording_session(&graph);

        let cat = session.interact(graph.get("cat").unwrap());
        let at = session.interact(cat.letter(0).unwrap().choose_delete().unwrap());

        at.position(0).unwrap().open();
        cat.letter(0).unwrap().open();
        cat.position(0).unwrap().close();

        assert!(at.position(0).unwrap().is_insert_menu_open());
        assert!(!cat.letter(0).unwrap().is_replace_menu_open());
        assert_eq!(
            cat.letter(0).unwrap().choose_replacement('b'),
            Err(InteractionError::Stale {
                word: "cat".to_string()
            })
        );
        assert_eq!(received.borrow().len(), 1);
    }

    #[test]
    fn moving_to_new_word_closes_menu() {
        let graph = scenario();
        let (session, _) = recording_session(&graph);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        session.subscribe_menu(move |e| sink.borrow_mut().push(e));

        let cat = session.interact(graph.get("cat").unwrap());
        let first = cat.letter(0).unwrap();
        first.open();
        let _hat = session.interact(graph.get("hat").unwrap());

        assert_eq!(
            *events.borrow(),
            vec![MenuEvent::Opened(first.id()), MenuEvent::Closed(first.id())]
        );
    }

    #[test]
    fn new_game_clears_history() {
        let graph = scenario();
        let (session, _) = recording_session(&graph);
        let cat = session.interact(graph.get("cat").unwrap());
        cat.letter(0).unwrap().choose_delete().unwrap();
        assert!(session.can_undo());

        session.new_game();
        assert!(!session.can_undo());
    }

    #[derive(Default)]
    struct RecordingSayer {
        said: RefCell<Vec<String>>,
        preloaded: RefCell<Vec<String>>,
    }

    impl WordSayer for &RecordingSayer {
        fn say(&self, word: &str) {
            self.said.borrow_mut().push(word.to_string());
        }

        fn preload(&self, word: &str) {
            self.preloaded.borrow_mut().push(word.to_string());
        }
    }

    #[test]
    fn sayer_preloads_neighbors_and_says_word() {
        let graph = scenario();
        let sayer = RecordingSayer::default();
        let session = Session::new(&graph, &sayer, |_: &Word| {});

        let cat = session.interact(graph.get("cat").unwrap());
        cat.say();

        assert_eq!(*sayer.said.borrow(), vec!["cat".to_string()]);
        let mut preloaded = sayer.preloaded.borrow().clone();
        preloaded.sort();
        assert_eq!(preloaded, vec!["at", "bat", "hat", "mat", "rat", "sat"]);
    }
}
