//! A toolkit for outlining groups of tiles on hexagonal maps, e.g.
//! to draw the borders of regions as map overlays.

#[macro_use]
extern crate num_derive;
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
extern crate rand;

pub mod error;
pub mod geo;
pub mod grid;
pub mod outline;
pub mod svg;

pub use error::{ Error, Result };
pub use grid::Tile;
pub use outline::{ compute_outlines, BaseId, Outline, OutlineConfig, Outliner, Precision };
