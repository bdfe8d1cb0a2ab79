use tracing::debug;
use crate::deck::Deck;
use crate::state::SlideState;

/// Snapshot handed to observers after a successful transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub cursor: usize,
    pub total: usize,
    pub title: String,
}

pub trait TransitionObserver {
    fn on_transition(&mut self, transition: &Transition);
}

impl<T: TransitionObserver + ?Sized> TransitionObserver for Box<T> {
    fn on_transition(&mut self, transition: &Transition) {
        (**self).on_transition(transition);
    }
}

// Members are notified in registration order
impl<T: TransitionObserver> TransitionObserver for Vec<T> {
    fn on_transition(&mut self, transition: &Transition) {
        for observer in self.iter_mut() {
            observer.on_transition(transition);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideInfo {
    pub current: usize,
    pub total: usize,
    pub title: String,
}

/// Bounded cursor over a deck. The cursor is always within `[1, len]`.
pub struct DeckNavigator<O> {
    deck: Deck,
    cursor: usize,
    states: Vec<SlideState>,
    observer: O,
}

impl<O: TransitionObserver> DeckNavigator<O> {
    /// Builds the navigator and forces slide 1 active, notifying `observer`
    /// once so derived chrome starts out consistent.
    pub fn new(deck: Deck, observer: O) -> Self {
        let states = vec![SlideState::Upcoming; deck.len()];
        let mut navigator = Self { deck, cursor: 1, states, observer };
        navigator.go_to(1);
        navigator
    }

    /// Moves to `target`. Out-of-range targets are ignored and return `false`.
    pub fn go_to(&mut self, target: i64) -> bool {
        let total = self.deck.len();
        let target = match usize::try_from(target) {
            Ok(t) if (1..=total).contains(&t) => t,
            _ => {
                debug!(requested = target, total, "navigation target out of range, ignored");
                return false;
            }
        };

        for (index, state) in self.states.iter_mut().enumerate() {
            *state = SlideState::for_position(index + 1, target);
        }
        self.cursor = target;

        let transition = Transition {
            cursor: target,
            total,
            title: self.current_title(),
        };
        debug!(cursor = target, total, "transition");
        self.observer.on_transition(&transition);
        true
    }

    pub fn advance(&mut self) -> bool {
        if self.cursor < self.deck.len() {
            self.go_to(self.cursor as i64 + 1)
        } else {
            false
        }
    }

    pub fn retreat(&mut self) -> bool {
        if self.cursor > 1 {
            self.go_to(self.cursor as i64 - 1)
        } else {
            false
        }
    }

    pub fn first(&mut self) -> bool {
        self.go_to(1)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.deck.len() as i64)
    }
}

impl<O> DeckNavigator<O> {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.deck.len()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// State of the slide at a 1-based position.
    pub fn slide_state(&self, position: usize) -> Option<SlideState> {
        position.checked_sub(1).and_then(|i| self.states.get(i).copied())
    }

    pub fn states(&self) -> &[SlideState] {
        &self.states
    }

    pub fn slide_info(&self) -> SlideInfo {
        SlideInfo {
            current: self.cursor,
            total: self.deck.len(),
            title: self.current_title(),
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn current_title(&self) -> String {
        self.deck
            .get(self.cursor)
            .map(|slide| slide.display_title())
            .unwrap_or_else(|| format!("Slide {}", self.cursor))
    }
}
