//! Game session
//!
//! Holds the collaborators every interaction of a game shares: the graph, the
//! menu manager, the undo history, the word sayer and the new-word handler.
//! Sessions are single-threaded; each concurrent game gets its own.

use super::collaborators::{NewWordHandler, WordSayer};
use super::history::History;
use super::menu::{InteractionId, MenuEvent, MenuManager};
use super::word::WordInteraction;
use crate::core::{Change, Word, WordGraph};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;
use tracing::debug;

/// State shared by a session and the interactions it hands out
pub(super) struct SessionContext<'g> {
    graph: &'g WordGraph,
    menu: RefCell<MenuManager>,
    history: RefCell<History<'g>>,
    sayer: Box<dyn WordSayer + 'g>,
    handler: RefCell<Box<dyn NewWordHandler<'g> + 'g>>,
    generation: Cell<u64>,
}

impl<'g> SessionContext<'g> {
    pub(super) const fn graph(&self) -> &'g WordGraph {
        self.graph
    }

    pub(super) fn sayer(&self) -> &dyn WordSayer {
        self.sayer.as_ref()
    }

    pub(super) fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub(super) fn is_current(&self, id: InteractionId) -> bool {
        id.generation() == self.generation.get()
    }

    pub(super) fn is_open(&self, id: InteractionId) -> bool {
        self.menu.borrow().is_open(id)
    }

    pub(super) fn request_open(&self, id: InteractionId) {
        self.menu.borrow_mut().request_open(id);
    }

    pub(super) fn close(&self, id: InteractionId) {
        self.menu.borrow_mut().close(id);
    }

    /// Apply a validated change: record `from`, close the menu, hand over
    /// the result
    pub(super) fn commit(&self, from: &'g Word, id: InteractionId, change: Change) -> &'g Word {
        let result = self.graph.resolve(change);

        self.history.borrow_mut().push(from);
        self.menu.borrow_mut().close(id);

        debug!(from = from.value(), to = result.value(), kind = %change.kind(), "commit");
        self.handler.borrow_mut().handle(result);

        result
    }
}

/// One learner's game over a shared graph
pub struct Session<'g> {
    ctx: Rc<SessionContext<'g>>,
}

impl<'g> Session<'g> {
    /// Start a session with an empty history and no open menu
    pub fn new(
        graph: &'g WordGraph,
        sayer: impl WordSayer + 'g,
        handler: impl NewWordHandler<'g> + 'g,
    ) -> Self {
        Self {
            ctx: Rc::new(SessionContext {
                graph,
                menu: RefCell::new(MenuManager::new()),
                history: RefCell::new(History::new()),
                sayer: Box::new(sayer),
                handler: RefCell::new(Box::new(handler)),
                generation: Cell::new(0),
            }),
        }
    }

    #[must_use]
    pub fn graph(&self) -> &'g WordGraph {
        self.ctx.graph
    }

    /// Build the interactions for the current word
    ///
    /// Any menu left open on the previous word is closed, and interactions
    /// created for earlier words stop responding.
    ///
    /// # Panics
    ///
    /// Panics if `word` does not belong to this session's graph. Its change
    /// ids would otherwise resolve against the wrong arena.
    pub fn interact(&self, word: &'g Word) -> WordInteraction<'g> {
        assert!(
            self.ctx
                .graph
                .get(word.value())
                .is_some_and(|w| std::ptr::eq(w, word)),
            "word must come from the session graph"
        );

        self.ctx.menu.borrow_mut().close_any();
        self.ctx.generation.set(self.ctx.generation.get() + 1);

        WordInteraction::new(word, Rc::clone(&self.ctx))
    }

    /// Step back to the previous word
    ///
    /// Closes any open menu. The popped word is not pushed again and the
    /// new-word handler is not called; the caller makes it current.
    pub fn undo(&self) -> Option<&'g Word> {
        self.ctx.menu.borrow_mut().close_any();
        let previous = self.ctx.history.borrow_mut().undo();
        if let Some(word) = previous {
            debug!(to = word.value(), "undo");
        }
        previous
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.ctx.history.borrow().can_undo()
    }

    /// Forget the history and close menus for a fresh game
    pub fn new_game(&self) {
        self.ctx.menu.borrow_mut().close_any();
        self.ctx.history.borrow_mut().clear();
        debug!("new game");
    }

    /// Read access to the undo history
    ///
    /// # Panics
    /// Panics if called from inside the new-word handler while a commit is
    /// pushing history; the handler should not inspect the session.
    #[must_use]
    pub fn history(&self) -> Ref<'_, History<'g>> {
        self.ctx.history.borrow()
    }

    /// Read access to the menu state
    #[must_use]
    pub fn menu(&self) -> Ref<'_, MenuManager> {
        self.ctx.menu.borrow()
    }

    /// Observe menu transitions
    pub fn subscribe_menu(&self, subscriber: impl FnMut(MenuEvent) + 'static) {
        self.ctx.menu.borrow_mut().subscribe(subscriber);
    }

    /// Pronounce a word through the session's sayer
    pub fn say(&self, word: &str) {
        self.ctx.sayer.say(word);
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.ctx.generation()
    }
}
