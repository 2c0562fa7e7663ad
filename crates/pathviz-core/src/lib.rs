//! **pathviz-core**: grid model for the pathviz search engine.
//!
//! This crate provides the types shared by the search engine and its
//! drivers: geometry primitives, cell classification, and the square
//! [`Grid`] the algorithms walk over.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellKind};
pub use geom::{Point, Range};
pub use grid::{CARDINALS, DEFAULT_SIZE, Grid, GridError, Neighbors4};
