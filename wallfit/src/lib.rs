//! One-dimensional fitting engine for modular smart walls.
//!
//! A [`Wall`](entities::Wall) is covered edge-to-edge by fixed-width [`Module`](entities::Module)s.
//! A [`Layout`](entities::Layout) tracks which modules are placed and in which order,
//! and refuses any placement that would overflow the wall.
//! The [`fitting`] module rates candidate modules against the remaining width of a layout.

/// Walls, modules, finishes and the layouts built from them
pub mod entities;

/// Fit checks and candidate ranking
pub mod fitting;

/// Importing, exporting and visualizing layouts
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
