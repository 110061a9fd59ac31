use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::util::FitConfig;

/// How well a module of a certain width fits into a remaining width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitQuality {
    /// The module fills the remaining width exactly
    Perfect,
    /// The module fits and leaves at most [`FitConfig::optimal_margin`] uncovered
    Optimal,
    /// The module fits, but leaves a larger gap
    Fits,
    /// The module is wider than the remaining width
    Overflow,
}

impl FitQuality {
    pub fn fits(&self) -> bool {
        !matches!(self, FitQuality::Overflow)
    }

    /// Whether the module should be highlighted as a recommended next choice
    pub fn is_recommended(&self) -> bool {
        matches!(self, FitQuality::Perfect | FitQuality::Optimal)
    }
}

impl Display for FitQuality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FitQuality::Perfect => "perfect fit",
            FitQuality::Optimal => "optimal fit",
            FitQuality::Fits => "fits",
            FitQuality::Overflow => "too wide",
        };
        write!(f, "{s}")
    }
}

/// Outcome of checking a single width against the remaining width of a wall. All values in mm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FitCheck {
    pub width: u32,
    pub remaining_before: u32,
    /// Width left uncovered after placing the module, 0 on overflow
    pub waste: u32,
    /// Width by which the module exceeds the remaining width, 0 if it fits
    pub overflow: u32,
    pub quality: FitQuality,
}

impl FitCheck {
    pub fn fits(&self) -> bool {
        self.quality.fits()
    }

    /// Remaining width after placement, negative on overflow
    pub fn remaining_after(&self) -> i64 {
        self.remaining_before as i64 - self.width as i64
    }
}

/// Checks whether a module of `width` fits into `remaining` mm of wall.
pub fn check_fit(remaining: u32, width: u32, config: &FitConfig) -> FitCheck {
    let (waste, overflow, quality) = match remaining.checked_sub(width) {
        None => (0, width - remaining, FitQuality::Overflow),
        Some(0) => (0, 0, FitQuality::Perfect),
        Some(w) if w <= config.optimal_margin => (w, 0, FitQuality::Optimal),
        Some(w) => (w, 0, FitQuality::Fits),
    };
    FitCheck {
        width,
        remaining_before: remaining,
        waste,
        overflow,
        quality,
    }
}
