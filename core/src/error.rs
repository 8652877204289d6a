use alloc::string::String;
use thiserror::Error;

use crate::CategoryId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Category {id} has only {clues} clues")]
    InsufficientCategoryData { id: CategoryId, clues: usize },
    #[error("Data provider failed: {0}")]
    ProviderFailure(String),
    #[error("Invalid clue index {0}")]
    InvalidClueIndex(usize),
    #[error("Not enough categories to fill the board, got {found}")]
    InsufficientCategories { found: usize },
    #[error("Category {0} has no clues")]
    EmptyCategory(CategoryId),
    #[error("A board is already being loaded")]
    AlreadyLoading,
    #[error("Gave up sampling categories after {attempts} attempts")]
    SamplingExhausted { attempts: usize },
}

impl TriviaError {
    /// Whether the sampling loop can recover from this error by drawing another category.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InsufficientCategoryData { .. })
    }
}

pub type Result<T> = core::result::Result<T, TriviaError>;
