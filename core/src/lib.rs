#![no_std]

extern crate alloc;

pub use board::*;
pub use clue::*;
pub use controller::*;
pub use error::*;
pub use provider::*;
pub use reveal::*;
pub use types::*;

mod board;
mod clue;
mod controller;
mod error;
mod provider;
mod reveal;
mod types;
