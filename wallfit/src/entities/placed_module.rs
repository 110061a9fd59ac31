use slotmap::new_key_type;
use std::fmt::{Display, Formatter};

use crate::entities::Module;

new_key_type! {
    /// Unique key for each [`PlacedModule`] in a [`Layout`](crate::entities::Layout)
    pub struct PModKey;
}

/// Represents a [`Module`] that has been placed in a [`Layout`](crate::entities::Layout)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedModule {
    /// The id of the [`Module`] that was placed
    pub module_id: usize,
    /// Width of the module at the moment it was placed
    pub width: u32,
    pub height: u32,
    /// The finish applied to the module, `None` if no finish was chosen yet
    pub finish_id: Option<usize>,
}

impl PlacedModule {
    pub fn new(module: &Module) -> Self {
        PlacedModule {
            module_id: module.id,
            width: module.width,
            height: module.height,
            finish_id: None,
        }
    }
}

/// Closed-open interval `[start, end)` along the wall, in mm from the left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "invalid span: [{start}, {end})");
        Span { start, end }
    }

    pub fn length(&self) -> u32 {
        self.end - self.start
    }

    pub fn contains(&self, x: u32) -> bool {
        self.start <= x && x < self.end
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
