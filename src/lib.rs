#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod cellset;
mod common;
mod config;
mod game;
mod geometry;
mod notation;
mod ship;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod persist;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use board::*;
pub use cellset::{CellSet, Cells};
pub use common::*;
pub use config::*;
pub use game::*;
pub use geometry::*;
pub use notation::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
