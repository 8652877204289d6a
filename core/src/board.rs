use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    title: String,
}

impl Category {
    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// What the shared answer region below the grid currently displays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerSlot {
    Hidden,
    Question(usize),
    Answer(usize),
}

impl AnswerSlot {
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

impl Default for AnswerSlot {
    fn default() -> Self {
        Self::Hidden
    }
}

/// The 6x2 game board.
///
/// Clues live in a standard layout `(CATEGORY_COUNT, CLUES_PER_CATEGORY)` grid, so row `k` holds the clues of
/// category `k` and the flattened index `2k + j` addresses `(k, j)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
    clues: Array2<Clue>,
    headers_visible: [bool; CATEGORY_COUNT],
    cells_visible: [bool; CLUE_COUNT],
    answer_slot: AnswerSlot,
    finished: bool,
}

impl Board {
    /// Builds a board from the first `CATEGORY_COUNT` records, picking `CLUES_PER_CATEGORY` clues from each.
    ///
    /// Each slot is picked uniformly and independently, so the same clue may fill both slots of a category. A
    /// record with exactly `CLUES_PER_CATEGORY` clues leaves no choice and is laid out in order.
    pub fn build<R: Rng + ?Sized>(records: Vec<CategoryRecord>, rng: &mut R) -> Result<Self> {
        if records.len() < CATEGORY_COUNT {
            return Err(TriviaError::InsufficientCategories {
                found: records.len(),
            });
        }
        if records.len() > CATEGORY_COUNT {
            log::warn!(
                "Got {} categories but the board only fits {}, ignoring the rest",
                records.len(),
                CATEGORY_COUNT
            );
        }

        let mut categories = Vec::with_capacity(CATEGORY_COUNT);
        let mut clues = Vec::with_capacity(CLUE_COUNT);
        for CategoryRecord {
            id,
            title,
            clues: available,
        } in records.into_iter().take(CATEGORY_COUNT)
        {
            if available.is_empty() {
                return Err(TriviaError::EmptyCategory(id));
            }
            for slot in 0..CLUES_PER_CATEGORY {
                let ClueRecord { question, answer } = &available[pick_clue(available.len(), slot, rng)];
                clues.push(Clue::new(id, question.clone(), answer.clone()));
            }
            categories.push(Category { id, title });
        }

        let clues = Array2::from_shape_vec((CATEGORY_COUNT, CLUES_PER_CATEGORY), clues)
            .expect("one row of clues per category");
        Ok(Self::new(categories, clues))
    }

    fn new(categories: Vec<Category>, clues: Array2<Clue>) -> Self {
        let mut headers_visible = [false; CATEGORY_COUNT];
        let mut cells_visible = [false; CLUE_COUNT];
        headers_visible[0] = true;
        cells_visible[0] = true;
        Self {
            categories,
            clues,
            headers_visible,
            cells_visible,
            answer_slot: AnswerSlot::Hidden,
            finished: false,
        }
    }

    pub fn validate_index(&self, index: usize) -> Result<usize> {
        if index < CLUE_COUNT {
            Ok(index)
        } else {
            Err(TriviaError::InvalidClueIndex(index))
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, position: usize) -> Option<&Category> {
        self.categories.get(position)
    }

    /// First category with the given id; a sampled id may appear more than once.
    pub fn category_by_id(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn category_of(&self, index: usize) -> Result<&Category> {
        let index = self.validate_index(index)?;
        Ok(&self.categories[category_position(index)])
    }

    pub fn clue(&self, index: usize) -> Result<&Clue> {
        let index = self.validate_index(index)?;
        Ok(&self.clues[to_slot(index)])
    }

    pub(crate) fn clue_mut(&mut self, index: usize) -> &mut Clue {
        &mut self.clues[to_slot(index)]
    }

    /// Every clue in flattened order.
    pub fn clues(&self) -> impl Iterator<Item = &Clue> + '_ {
        self.clues.iter()
    }

    /// Clues of the category at `position`, `None` past the last column.
    pub fn clues_of(&self, position: usize) -> Option<impl Iterator<Item = &Clue> + '_> {
        (position < CATEGORY_COUNT).then(|| self.clues.row(position).into_iter())
    }

    pub fn is_header_visible(&self, position: usize) -> bool {
        self.headers_visible.get(position).copied().unwrap_or(false)
    }

    pub fn is_cell_visible(&self, index: usize) -> bool {
        self.cells_visible.get(index).copied().unwrap_or(false)
    }

    /// A cell takes clicks while it is shown and its clue has not been removed.
    pub fn can_interact_at(&self, index: usize) -> bool {
        !self.finished
            && self.is_cell_visible(index)
            && self
                .clue(index)
                .is_ok_and(|clue| !clue.showing().is_removed())
    }

    pub fn answer_slot(&self) -> AnswerSlot {
        self.answer_slot
    }

    /// Text currently displayed in the shared answer region.
    pub fn answer_text(&self) -> Option<&str> {
        match self.answer_slot {
            AnswerSlot::Hidden => None,
            AnswerSlot::Question(index) => Some(self[index].question()),
            AnswerSlot::Answer(index) => Some(self[index].answer()),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub(crate) fn set_answer_slot(&mut self, slot: AnswerSlot) {
        self.answer_slot = slot;
    }

    pub(crate) fn set_header_visible(&mut self, position: usize, visible: bool) {
        if let Some(header) = self.headers_visible.get_mut(position) {
            *header = visible;
        }
    }

    pub(crate) fn set_cell_visible(&mut self, index: usize, visible: bool) {
        if let Some(cell) = self.cells_visible.get_mut(index) {
            *cell = visible;
        }
    }

    pub(crate) fn finish(&mut self) {
        self.finished = true;
    }
}

impl Index<usize> for Board {
    type Output = Clue;

    fn index(&self, index: usize) -> &Self::Output {
        &self.clues[to_slot(index)]
    }
}

fn pick_clue<R: Rng + ?Sized>(available: usize, slot: usize, rng: &mut R) -> usize {
    if available == CLUES_PER_CATEGORY {
        slot
    } else {
        rng.random_range(0..available)
    }
}
