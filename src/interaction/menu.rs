//! Single-open-menu tracking
//!
//! At most one edit menu is open per session. Opening a menu while another
//! is open closes the other first; subscribers see both transitions in order.

use std::fmt;
use tracing::trace;

/// What a menu is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuTarget {
    /// Replace/delete menu of the letter at this index
    Letter(usize),
    /// Insert menu of the gap at this index
    Position(usize),
}

/// Identity of one letter or position interaction
///
/// The generation changes every time the session moves to a new word, so ids
/// from an earlier word never match the current word's interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteractionId {
    generation: u64,
    target: MenuTarget,
}

impl InteractionId {
    #[must_use]
    pub const fn new(generation: u64, target: MenuTarget) -> Self {
        Self { generation, target }
    }

    #[inline]
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }

    #[inline]
    #[must_use]
    pub const fn target(self) -> MenuTarget {
        self.target
    }
}

/// Menu state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Idle,
    Open(InteractionId),
}

/// Notification of a menu transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Opened(InteractionId),
    Closed(InteractionId),
}

type Subscriber = Box<dyn FnMut(MenuEvent)>;

/// Enforces that at most one interaction's menu is open
///
/// Subscribers are called synchronously on every transition and must not
/// call back into the manager.
#[derive(Default)]
pub struct MenuManager {
    state: MenuState,
    subscribers: Vec<Subscriber>,
}

impl MenuManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> MenuState {
        self.state
    }

    /// The interaction whose menu is open, if any
    #[must_use]
    pub const fn open_id(&self) -> Option<InteractionId> {
        match self.state {
            MenuState::Idle => None,
            MenuState::Open(id) => Some(id),
        }
    }

    #[must_use]
    pub fn is_open(&self, id: InteractionId) -> bool {
        self.state == MenuState::Open(id)
    }

    /// Register a callback for menu transitions
    pub fn subscribe(&mut self, subscriber: impl FnMut(MenuEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Open the menu for `id`, closing any other open menu first
    ///
    /// Requesting an already-open menu does nothing.
    pub fn request_open(&mut self, id: InteractionId) {
        match self.state {
            MenuState::Open(current) if current == id => return,
            MenuState::Open(other) => {
                self.state = MenuState::Idle;
                self.emit(MenuEvent::Closed(other));
            }
            MenuState::Idle => {}
        }

        self.state = MenuState::Open(id);
        self.emit(MenuEvent::Opened(id));
    }

    /// Close the menu for `id` if it is the open one
    ///
    /// Returns whether anything closed. Closing a menu that is not open is
    /// not an error.
    pub fn close(&mut self, id: InteractionId) -> bool {
        if self.is_open(id) {
            self.state = MenuState::Idle;
            self.emit(MenuEvent::Closed(id));
            true
        } else {
            false
        }
    }

    /// Close whatever menu is open
    pub fn close_any(&mut self) -> Option<InteractionId> {
        let open = self.open_id()?;
        self.state = MenuState::Idle;
        self.emit(MenuEvent::Closed(open));
        Some(open)
    }

    fn emit(&mut self, event: MenuEvent) {
        trace!(?event, "menu transition");
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }
}

impl fmt::Debug for MenuManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuManager")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
