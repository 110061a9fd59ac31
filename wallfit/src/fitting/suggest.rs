use itertools::Itertools;
use std::cmp::Reverse;

use crate::entities::{Layout, Module};
use crate::fitting::{FitCheck, check_fit};
use crate::util::FitConfig;
use crate::util::assertions;

/// A candidate module rated against the remaining width of a layout.
#[derive(Clone, Debug, PartialEq)]
pub struct FitSuggestion {
    pub module_id: usize,
    pub check: FitCheck,
    /// Utilization of the layout if this module were appended, in [0, 1]
    pub projected_utilization: f32,
}

impl FitSuggestion {
    /// Modules that fit come first, ordered by the width they leave uncovered.
    /// Overflowing modules follow, ordered by how much they overflow.
    /// Remaining ties favour wider modules, then lower ids.
    pub fn rank_key(&self) -> (bool, u32, Reverse<u32>, usize) {
        let c = &self.check;
        (!c.fits(), c.waste.max(c.overflow), Reverse(c.width), self.module_id)
    }
}

/// Rates every candidate against the remaining width of `layout`, best candidates first.
pub fn rank_candidates<'a>(
    layout: &Layout,
    candidates: impl IntoIterator<Item = &'a Module>,
    config: &FitConfig,
) -> Vec<FitSuggestion> {
    let remaining = layout.remaining_width();
    let occupied = layout.occupied_width();
    let wall_width = layout.wall.width.max(1) as f32;

    let suggestions = candidates
        .into_iter()
        .map(|m| {
            let check = check_fit(remaining, m.width, config);
            let projected_utilization = match check.fits() {
                true => (occupied + m.width) as f32 / wall_width,
                false => occupied as f32 / wall_width,
            };
            FitSuggestion {
                module_id: m.id,
                check,
                projected_utilization,
            }
        })
        .sorted_by_key(FitSuggestion::rank_key)
        .collect_vec();

    debug_assert!(assertions::suggestions_sorted_correctly(&suggestions));
    suggestions
}

/// The best recommended candidate (perfect or optimal fit), if any.
pub fn best_fit<'a>(
    layout: &Layout,
    candidates: impl IntoIterator<Item = &'a Module>,
    config: &FitConfig,
) -> Option<FitSuggestion> {
    rank_candidates(layout, candidates, config)
        .into_iter()
        .next()
        .filter(|s| s.check.quality.is_recommended())
}
