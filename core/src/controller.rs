use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerState {
    Idle,
    Loading,
    Ready,
    GameOver,
}

impl ControllerState {
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Upper bound on category probes before giving up on filling the board.
    pub max_sample_attempts: usize,
}

impl ControllerConfig {
    pub const DEFAULT_MAX_SAMPLE_ATTEMPTS: usize = 100;
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_sample_attempts: Self::DEFAULT_MAX_SAMPLE_ATTEMPTS,
        }
    }
}

/// Drives a game from loading through reveals to game over and back.
///
/// Loading is split in three steps so a UI can own the controller while the fetches run elsewhere:
/// [`Controller::begin_loading`], [`load_board`], then [`Controller::finish_loading`]. [`Controller::start`]
/// runs all three in sequence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Controller {
    config: ControllerConfig,
    state: ControllerState,
    board: Option<Board>,
}

impl Controller {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            state: ControllerState::Idle,
            board: None,
        }
    }

    pub fn config(&self) -> ControllerConfig {
        self.config
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn can_start(&self) -> bool {
        !self.state.is_loading()
    }

    /// Drops the current board and enters `Loading`, refusing while a load is already running.
    pub fn begin_loading(&mut self) -> Result<()> {
        if self.state.is_loading() {
            return Err(TriviaError::AlreadyLoading);
        }
        self.board = None;
        self.state = ControllerState::Loading;
        log::info!("loading a new board");
        Ok(())
    }

    /// Installs the loaded board, or on failure returns to `Idle` with no board and hands the error back.
    pub fn finish_loading(&mut self, result: Result<Board>) -> Result<()> {
        if !self.state.is_loading() {
            log::warn!("board finished loading while in {:?}, ignored", self.state);
            return Ok(());
        }

        match result {
            Ok(board) => {
                self.board = Some(board);
                self.state = ControllerState::Ready;
                log::info!("board ready");
                Ok(())
            }
            Err(err) => {
                self.board = None;
                self.state = ControllerState::Idle;
                log::error!("failed to load board: {}", err);
                Err(err)
            }
        }
    }

    pub async fn start<P, R>(&mut self, provider: &P, rng: &mut R) -> Result<()>
    where
        P: DataProvider,
        R: Rng + ?Sized,
    {
        self.begin_loading()?;
        let result = load_board(provider, rng, self.config).await;
        self.finish_loading(result)
    }

    /// Forwards a click to the board; only a `Ready` game takes clicks.
    pub fn handle_reveal(&mut self, index: usize) -> Result<RevealOutcome> {
        if !self.state.is_playing() {
            return Ok(RevealOutcome::NoChange);
        }
        let Some(board) = self.board.as_mut() else {
            return Ok(RevealOutcome::NoChange);
        };

        let outcome = board.reveal(index)?;
        if outcome.is_game_over() {
            self.state = ControllerState::GameOver;
            log::info!("game over");
        }
        Ok(outcome)
    }
}

/// Probes one random category at a time until `CATEGORY_COUNT` usable ones are found.
///
/// Categories with too few clues are dropped and their id is skipped from then on. Provider failures end the
/// search immediately.
pub async fn sample_category_ids<P: DataProvider>(
    provider: &P,
    config: ControllerConfig,
) -> Result<Vec<CategoryId>> {
    let mut accepted = Vec::with_capacity(CATEGORY_COUNT);
    let mut discarded = BTreeSet::new();
    let mut attempts = 0;

    while accepted.len() < CATEGORY_COUNT {
        if attempts >= config.max_sample_attempts {
            return Err(TriviaError::SamplingExhausted { attempts });
        }
        attempts += 1;

        let sample = provider.sample_category().await?;
        if discarded.contains(&sample.id) {
            log::debug!("category {} already discarded, skipping", sample.id);
            continue;
        }
        match sample.check() {
            Ok(id) => {
                log::debug!("accepted category {}", id);
                accepted.push(id);
            }
            Err(err) if err.is_recoverable() => {
                log::debug!("{}, sampling again", err);
                discarded.insert(sample.id);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(accepted)
}

pub async fn fetch_categories<P: DataProvider>(
    provider: &P,
    ids: &[CategoryId],
) -> Result<Vec<CategoryRecord>> {
    let mut records = Vec::with_capacity(ids.len());
    for &id in ids {
        records.push(provider.fetch_category(id).await?);
    }
    Ok(records)
}

/// Samples, fetches and builds a fresh board.
pub async fn load_board<P, R>(provider: &P, rng: &mut R, config: ControllerConfig) -> Result<Board>
where
    P: DataProvider,
    R: Rng + ?Sized,
{
    let ids = sample_category_ids(provider, config).await?;
    let records = fetch_categories(provider, &ids).await?;
    Board::build(records, rng)
}
