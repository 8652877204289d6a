use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// How far a clue has been revealed. Only ever moves forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Showing {
    Hidden,
    Question,
    Answer,
    Removed,
}

impl Showing {
    /// The state a click moves to, `None` once removed.
    pub const fn next(self) -> Option<Self> {
        use Showing::*;
        match self {
            Hidden => Some(Question),
            Question => Some(Answer),
            Answer => Some(Removed),
            Removed => None,
        }
    }

    pub const fn is_removed(self) -> bool {
        matches!(self, Self::Removed)
    }
}

impl Default for Showing {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    showing: Showing,
    category_id: CategoryId,
}

impl Clue {
    pub fn new(category_id: CategoryId, question: String, answer: String) -> Self {
        Self {
            question,
            answer,
            showing: Showing::Hidden,
            category_id,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn showing(&self) -> Showing {
        self.showing
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    /// Moves one step forward, returning the new state.
    pub(crate) fn advance(&mut self) -> Option<Showing> {
        let next = self.showing.next()?;
        self.showing = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn advance_walks_every_state_once() {
        let mut clue = Clue::new(CategoryId(1), "2+2".to_string(), "4".to_string());

        assert_eq!(clue.showing(), Showing::Hidden);
        assert_eq!(clue.advance(), Some(Showing::Question));
        assert_eq!(clue.advance(), Some(Showing::Answer));
        assert_eq!(clue.advance(), Some(Showing::Removed));
        assert_eq!(clue.advance(), None);
        assert_eq!(clue.showing(), Showing::Removed);
    }

    #[test]
    fn states_are_ordered_by_progress() {
        assert!(Showing::Hidden < Showing::Question);
        assert!(Showing::Question < Showing::Answer);
        assert!(Showing::Answer < Showing::Removed);
    }
}
