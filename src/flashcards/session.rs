//! Study session state machine
//!
//! A session is a cursor over the card store with a two-sided flip state.
//! It only exists while study mode is active; see [`StudyMode`].
//!
//! The cursor assumes the store does not shrink while a session is active.
//! The workspace enforces that by refusing deletions during study.

use super::models::Card;
use super::store::CardStore;

/// Which side of the current card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudySession {
    card_index: usize,
    is_flipped: bool,
}

impl StudySession {
    /// Start a session on the first card, unflipped.
    /// Returns `None` for an empty store.
    pub fn start(store: &CardStore) -> Option<Self> {
        if store.is_empty() {
            return None;
        }
        Some(Self {
            card_index: 0,
            is_flipped: false,
        })
    }

    pub fn card_index(&self) -> usize {
        self.card_index
    }

    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    pub fn flip(&mut self) {
        self.is_flipped = !self.is_flipped;
    }

    /// Advance to the next card, wrapping to the first after the last
    pub fn next(&mut self, store: &CardStore) {
        let len = store.len();
        if len == 0 {
            return;
        }
        self.card_index = (self.card_index + 1) % len;
        self.is_flipped = false;
    }

    /// Step back to the previous card, wrapping to the last before the first
    pub fn previous(&mut self, store: &CardStore) {
        let len = store.len();
        if len == 0 {
            return;
        }
        self.card_index = if self.card_index == 0 {
            len - 1
        } else {
            self.card_index - 1
        };
        self.is_flipped = false;
    }

    pub fn current<'a>(&self, store: &'a CardStore) -> Option<&'a Card> {
        store.get(self.card_index)
    }

    pub fn face(&self) -> Face {
        if self.is_flipped {
            Face::Back
        } else {
            Face::Front
        }
    }

    /// Text of the side currently showing
    pub fn visible_text<'a>(&self, store: &'a CardStore) -> Option<&'a str> {
        self.current(store).map(|card| match self.face() {
            Face::Front => card.front.as_str(),
            Face::Back => card.back.as_str(),
        })
    }

    /// One-based position label, e.g. "Card 2 of 5"
    pub fn position_label(&self, store: &CardStore) -> String {
        format!("Card {} of {}", self.card_index + 1, store.len())
    }
}

/// Whether the user is currently studying
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StudyMode {
    #[default]
    Inactive,
    Active(StudySession),
}

impl StudyMode {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn session(&self) -> Option<&StudySession> {
        match self {
            Self::Active(session) => Some(session),
            Self::Inactive => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut StudySession> {
        match self {
            Self::Active(session) => Some(session),
            Self::Inactive => None,
        }
    }
}
