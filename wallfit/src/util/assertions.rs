use crate::entities::{Finish, Layout, LayoutSnapshot, Module};
use crate::fitting::FitSuggestion;
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn catalog_ids_correct(modules: &[Module], finishes: &[Finish]) -> bool {
    modules.iter().enumerate().all(|(i, m)| m.id == i)
        && finishes.iter().enumerate().all(|(i, f)| f.id == i)
}

pub fn layout_is_consistent(layout: &Layout) -> bool {
    let keys = layout.keys();
    if keys.iter().unique().count() != keys.len() {
        error!("layout order contains duplicate keys: {keys:?}");
        return false;
    }
    if keys.iter().any(|&pk| layout.placed_module(pk).is_none()) {
        error!("layout order contains dangling keys: {keys:?}");
        return false;
    }
    if !layout.is_feasible() {
        error!(
            "layout overflows: {} mm placed on a {} mm wall",
            layout.occupied_width(),
            layout.wall.width
        );
        return false;
    }
    spans_are_contiguous(layout)
}

pub fn spans_are_contiguous(layout: &Layout) -> bool {
    let mut expected_start = 0;
    for (_, pm, span) in layout.spans() {
        if span.start != expected_start || span.length() != pm.width {
            error!("span {span} of module {} is not contiguous", pm.module_id);
            return false;
        }
        expected_start = span.end;
    }
    expected_start <= layout.wall.width
}

pub fn snapshot_matches_layout(layout: &Layout, ls: &LayoutSnapshot) -> bool {
    if layout.wall != ls.wall || layout.keys() != ls.order.as_slice() {
        return false;
    }
    ls.order.iter().all(|&pk| layout.placed_module(pk) == ls.placed_modules.get(pk))
}

pub fn suggestions_sorted_correctly(suggestions: &[FitSuggestion]) -> bool {
    suggestions
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.rank_key() <= b.rank_key())
}
