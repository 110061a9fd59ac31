use clap::ValueEnum;
use itertools::Itertools;
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use wallfit::entities::Module;

/// How the remaining width of a wall is filled up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FillStrategy {
    /// Repeatedly append the widest module that still fits
    Greedy,
    /// Pick the combination of modules that covers the most width
    Exact,
}

/// Modules to append to a layout, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FillPlan {
    pub module_ids: Vec<usize>,
    /// Sum of the widths of the planned modules, in mm
    pub filled_width: u32,
    /// Width left uncovered after the plan is applied, in mm
    pub remaining_width: u32,
    /// Sum of the base prices of the planned modules, in cents
    pub price: u64,
}

impl FillPlan {
    fn from_modules(modules: &[&Module], remaining: u32) -> Self {
        let filled_width = modules.iter().map(|m| m.width).sum::<u32>();
        debug_assert!(filled_width <= remaining);
        FillPlan {
            module_ids: modules.iter().map(|m| m.id).collect(),
            filled_width,
            remaining_width: remaining - filled_width,
            price: modules.iter().map(|m| m.price).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.module_ids.is_empty()
    }
}

pub fn plan(strategy: FillStrategy, remaining: u32, candidates: &[&Module]) -> FillPlan {
    match strategy {
        FillStrategy::Greedy => plan_greedy(remaining, candidates),
        FillStrategy::Exact => plan_exact(remaining, candidates),
    }
}

/// Order in which modules are tried: widest first, cheapest per mm on equal widths.
/// Modules without a width are left out.
pub fn module_placement_order<'a>(candidates: &[&'a Module]) -> Vec<&'a Module> {
    candidates
        .iter()
        .copied()
        .filter(|m| m.width > 0)
        .sorted_by_cached_key(|m| {
            let price_per_mm = NotNan::new(m.price as f32 / m.width as f32)
                .expect("price per mm is NaN");
            (Reverse(m.width), price_per_mm, m.id)
        })
        .collect_vec()
}

/// Largest-first filling. Fast, but can leave more width uncovered than necessary.
pub fn plan_greedy(remaining: u32, candidates: &[&Module]) -> FillPlan {
    let order = module_placement_order(candidates);
    let mut left = remaining;
    let mut chosen = vec![];
    while let Some(m) = order.iter().find(|m| m.width <= left) {
        left -= m.width;
        chosen.push(*m);
    }
    FillPlan::from_modules(&chosen, remaining)
}

/// Unbounded subset-sum over the candidate widths.
/// Maximizes the covered width, ties are broken by fewer modules and then by lower price.
pub fn plan_exact(remaining: u32, candidates: &[&Module]) -> FillPlan {
    let candidates = candidates.iter().filter(|m| m.width > 0).copied().collect_vec();
    if candidates.is_empty() {
        return FillPlan::from_modules(&[], remaining);
    }

    //all sums are multiples of the gcd of the widths, work in those units
    let unit = candidates.iter().map(|m| m.width).fold(0, gcd);
    let capacity = (remaining / unit) as usize;

    //best[c]: (n_modules, price, index of last module) of the best combination summing to exactly c units
    let mut best: Vec<Option<(usize, u64, usize)>> = vec![None; capacity + 1];
    best[0] = Some((0, 0, usize::MAX));
    for c in 1..=capacity {
        for (i, m) in candidates.iter().enumerate() {
            let w = (m.width / unit) as usize;
            if w > c {
                continue;
            }
            if let Some((n, price, _)) = best[c - w] {
                let option = (n + 1, price + m.price, i);
                let improves = match best[c] {
                    None => true,
                    Some((bn, bp, _)) => (option.0, option.1) < (bn, bp),
                };
                if improves {
                    best[c] = Some(option);
                }
            }
        }
    }

    let top = (0..=capacity)
        .rev()
        .find(|&c| best[c].is_some())
        .unwrap_or(0);

    let mut chosen = vec![];
    let mut c = top;
    while c > 0 {
        let (_, _, i) = best[c].expect("reachable capacity should have a predecessor");
        let m = candidates[i];
        chosen.push(m);
        c -= (m.width / unit) as usize;
    }

    //present the plan widest first, like the greedy one
    let chosen = chosen
        .into_iter()
        .sorted_by_key(|m| (Reverse(m.width), m.id))
        .collect_vec();
    FillPlan::from_modules(&chosen, remaining)
}

fn gcd(a: u32, b: u32) -> u32 {
    match b {
        0 => a,
        _ => gcd(b, a % b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use wallfit::entities::ModuleCategory;

    fn modules(widths: &[u32]) -> Vec<Module> {
        widths
            .iter()
            .enumerate()
            .map(|(id, &w)| Module::new(id, format!("w{w}"), ModuleCategory::Storage, w, 2000, w as u64 * 100))
            .collect()
    }

    #[test]
    fn greedy_takes_widest_first() {
        let ms = modules(&[400, 600, 1200]);
        let refs = ms.iter().collect_vec();
        let plan = plan_greedy(3000, &refs);
        assert_eq!(plan.module_ids, vec![2, 2, 1]);
        assert_eq!((plan.filled_width, plan.remaining_width), (3000, 0));
    }

    #[test_case(FillStrategy::Greedy; "greedy")]
    #[test_case(FillStrategy::Exact; "exact")]
    fn widthless_modules_are_never_chosen(strategy: FillStrategy) {
        let mut ms = modules(&[0, 800]);
        ms[0].price = 0;
        let refs = ms.iter().collect_vec();
        let plan = plan(strategy, 2000, &refs);
        assert_eq!(plan.module_ids, vec![1, 1]);
        assert_eq!(plan.remaining_width, 400);
    }

    #[test]
    fn exact_beats_greedy_when_greedy_gets_stuck() {
        // greedy: 1000 + 1000 = 2000, leaving 400 unusable; exact: 3 x 800 = 2400
        let ms = modules(&[800, 1000]);
        let refs = ms.iter().collect_vec();
        let greedy = plan_greedy(2400, &refs);
        let exact = plan_exact(2400, &refs);
        assert_eq!(greedy.filled_width, 2000);
        assert_eq!(exact.filled_width, 2400);
        assert_eq!(exact.module_ids, vec![0, 0, 0]);
    }

    #[test]
    fn exact_prefers_fewer_modules() {
        let ms = modules(&[400, 800, 1200]);
        let refs = ms.iter().collect_vec();
        let plan = plan_exact(2400, &refs);
        assert_eq!(plan.module_ids, vec![2, 2]);
    }

    #[test]
    fn exact_prefers_cheaper_on_equal_count() {
        let mut ms = modules(&[600, 600]);
        ms[1].price = 1;
        let refs = ms.iter().collect_vec();
        let plan = plan_exact(1200, &refs);
        assert_eq!(plan.module_ids, vec![1, 1]);
        assert_eq!(plan.price, 2);
    }

    #[test_case(0; "no room")]
    #[test_case(399; "narrower than any module")]
    fn nothing_fits(remaining: u32) {
        let ms = modules(&[400, 600]);
        let refs = ms.iter().collect_vec();
        for strategy in [FillStrategy::Greedy, FillStrategy::Exact] {
            let plan = plan(strategy, remaining, &refs);
            assert!(plan.is_empty());
            assert_eq!(plan.remaining_width, remaining);
        }
    }

    #[test_case(2950; "bedroom")]
    #[test_case(4130; "restaurant")]
    #[test_case(5770; "events hall")]
    fn exact_never_worse_than_greedy(remaining: u32) {
        let ms = modules(&[450, 600, 750, 900, 1200]);
        let refs = ms.iter().collect_vec();
        let greedy = plan_greedy(remaining, &refs);
        let exact = plan_exact(remaining, &refs);
        assert!(exact.filled_width >= greedy.filled_width);
        assert!(exact.filled_width <= remaining);
    }

    #[test]
    fn no_candidates() {
        let plan = plan_exact(1000, &[]);
        assert_eq!(plan, FillPlan { remaining_width: 1000, ..FillPlan::default() });
    }
}
