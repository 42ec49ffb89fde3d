//! Flashcard deck use cases and study-mode navigation.

use crate::clock::{Clock, SystemClock};
use crate::model::flashcard::{Flashcard, FlashcardDraft};
use crate::repo::{RecordList, RepoResult};
use crate::store::KeyValueStore;

pub struct FlashcardService<S, C = SystemClock> {
    list: RecordList<Flashcard, S, C>,
}

impl<S: KeyValueStore> FlashcardService<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self {
            list: RecordList::new(store),
        }
    }
}

impl<S: KeyValueStore, C: Clock> FlashcardService<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            list: RecordList::with_clock(store, clock),
        }
    }

    pub fn add(&self, front: &str, back: &str) -> RepoResult<Flashcard> {
        self.list.create(FlashcardDraft::new(front, back))
    }

    pub fn update(&self, id: &str, front: &str, back: &str) -> RepoResult<Flashcard> {
        self.list.update(id, FlashcardDraft::new(front, back))
    }

    pub fn remove(&self, id: &str) -> RepoResult<()> {
        self.list.remove(id)
    }

    pub fn cards(&self) -> RepoResult<Vec<Flashcard>> {
        self.list.load()
    }
}

/// Which side of the current card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSide {
    Front,
    Back,
}

/// Cursor over a deck in study mode.
///
/// Navigation wraps around both ends and always turns the card face up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudySession {
    index: usize,
    deck_len: usize,
    side: CardSide,
}

impl StudySession {
    /// Starts at the first card; `None` for an empty deck.
    pub fn start(deck_len: usize) -> Option<Self> {
        if deck_len == 0 {
            return None;
        }
        Some(Self {
            index: 0,
            deck_len,
            side: CardSide::Front,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn side(&self) -> CardSide {
        self.side
    }

    /// One-based position label, e.g. `(2, 5)` for "Card 2 of 5".
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.deck_len)
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.deck_len;
        self.side = CardSide::Front;
    }

    pub fn prev(&mut self) {
        self.index = if self.index == 0 {
            self.deck_len - 1
        } else {
            self.index - 1
        };
        self.side = CardSide::Front;
    }

    pub fn flip(&mut self) {
        self.side = match self.side {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        };
    }

    /// Text on the visible side of the current card.
    pub fn visible_text<'a>(&self, cards: &'a [Flashcard]) -> Option<&'a str> {
        let card = cards.get(self.index)?;
        Some(match self.side {
            CardSide::Front => card.front.as_str(),
            CardSide::Back => card.back.as_str(),
        })
    }

    /// Adjusts the cursor after one card was deleted from the deck.
    ///
    /// Returns `None` when the deck became empty and study mode must end.
    pub fn card_removed(mut self) -> Option<Self> {
        let old_len = self.deck_len;
        if old_len <= 1 {
            return None;
        }
        if self.index >= old_len - 1 {
            self.index = old_len.saturating_sub(2);
        }
        self.deck_len = old_len - 1;
        Some(self)
    }
}
