#![warn(missing_docs)]

//! Tile-grid map compositor with pan/zoom view state for Macroquad.
//!
//! A [`TileMap`] assigns one [`TileKind`] from a fixed [`Palette`] to every
//! cell of a row-major grid. [`compose`] flattens the whole grid into a
//! single CPU-side image at a uniform scale factor, ready to upload as a
//! texture. [`ViewState`] tracks the pan offset and scale the demo binary
//! presents that composite with.

mod compose;
mod error;
mod map;
mod tile;
mod view;

pub use compose::compose;
pub use error::Error;
pub use map::{demo_map, TileMap};
pub use tile::{Palette, Tile, TileKind};
pub use view::{poll_commands, Step, ViewCommand, ViewState};
