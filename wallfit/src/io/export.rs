use crate::entities::Layout;
use crate::fitting::FitSuggestion;
use crate::io::ext_repr::{ExtFitSuggestion, ExtLayout, ExtPlacedModule};
use itertools::Itertools;

/// Exports a [`Layout`] by composing an [`ExtLayout`] from it.
pub fn export_layout(layout: &Layout) -> ExtLayout {
    let placed_modules = layout
        .spans()
        .map(|(_, pm, span)| ExtPlacedModule {
            module_id: pm.module_id as u64,
            offset: span.start,
            width: span.length(),
            finish_id: pm.finish_id.map(|f| f as u64),
        })
        .collect_vec();

    ExtLayout {
        wall_id: layout.wall.id as u64,
        wall_width: layout.wall.width,
        placed_modules,
        remaining_width: layout.remaining_width(),
        utilization: layout.utilization(),
        coverage: layout.coverage(),
    }
}

pub fn export_suggestions(suggestions: &[FitSuggestion]) -> Vec<ExtFitSuggestion> {
    suggestions
        .iter()
        .map(|s| ExtFitSuggestion {
            module_id: s.module_id as u64,
            quality: s.check.quality,
            waste: s.check.waste,
            overflow: s.check.overflow,
            projected_utilization: s.projected_utilization,
        })
        .collect()
}
