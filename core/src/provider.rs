use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of probing the provider for one random category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySample {
    pub id: CategoryId,
    pub clues_count: usize,
}

impl CategorySample {
    /// Accepts the sample only when it can fill a whole column.
    pub fn check(self) -> Result<CategoryId> {
        if self.clues_count >= MIN_CLUES_PER_CATEGORY {
            Ok(self.id)
        } else {
            Err(TriviaError::InsufficientCategoryData {
                id: self.id,
                clues: self.clues_count,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub title: String,
    pub clues: Vec<ClueRecord>,
}

/// Source of trivia data. Calls are awaited one at a time, never concurrently.
#[allow(async_fn_in_trait)]
pub trait DataProvider {
    /// Picks one category at random and reports how many clues it has.
    async fn sample_category(&self) -> Result<CategorySample>;

    /// Fetches the title and every clue of a category.
    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryRecord>;
}
