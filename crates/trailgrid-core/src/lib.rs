//! **trailgrid-core** — data model for the grid pathfinding visualizer.
//!
//! This crate provides the types the search engine operates on: geometry
//! ([`Point`]), cell classifications ([`CellState`]), neighbor connectivity
//! ([`DirectionSet`]) and the shared-storage [`Board`] with its per-cell
//! change stream.
//!
//! Rendering, pointer tools and UI controls are external collaborators:
//! they edit the board through its model API and subscribe to changes via
//! [`Board::watch`], nothing more.

pub mod board;
pub mod cell;
pub mod directions;
pub mod geom;

pub use board::{Board, ParseBoardError};
pub use cell::CellState;
pub use directions::{CARDINAL, DirectionSet, OCTILE};
pub use geom::Point;
