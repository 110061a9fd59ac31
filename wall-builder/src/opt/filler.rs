use std::time::Instant;

use anyhow::Result;
use itertools::Itertools;
use log::{debug, info};
use wallfit::entities::{Catalog, Layout, LayoutSnapshot, Module};

use crate::config::BuilderConfig;
use crate::opt::strategy::{self, FillPlan};

/// Completes a layout by appending modules until the remaining width is used up as well as possible.
pub struct WallFiller {
    pub catalog: Catalog,
    pub layout: Layout,
    pub config: BuilderConfig,
}

impl WallFiller {
    pub fn new(catalog: Catalog, layout: Layout, config: BuilderConfig) -> Self {
        assert_eq!(catalog.wall.id, layout.wall.id);
        Self {
            catalog,
            layout,
            config,
        }
    }

    /// Modules the filler is allowed to use
    pub fn candidates(&self) -> Vec<&Module> {
        candidates(&self.catalog, &self.config)
    }

    /// Computes which modules to append, without modifying the layout.
    pub fn plan(&self) -> FillPlan {
        let remaining = self.layout.remaining_width();
        let candidates = self.candidates();
        debug!(
            "[FILL] planning {:?} fill of {remaining} mm with {} candidates",
            self.config.fill_strategy,
            candidates.len()
        );
        strategy::plan(self.config.fill_strategy, remaining, &candidates)
    }

    pub fn solve(&mut self) -> Result<LayoutSnapshot> {
        let start = Instant::now();
        let plan = self.plan();

        for &module_id in &plan.module_ids {
            let module = self.catalog.module(module_id);
            let pk = self.layout.push_module(module)?;
            info!(
                "[FILL] placing module {} ({} mm) at position {}, {} mm remaining",
                module.name,
                module.width,
                self.layout.position(pk)?,
                self.layout.remaining_width()
            );
        }

        info!(
            "[FILL] finished in {:.3}ms, appended {} modules, utilization {:.1}%",
            start.elapsed().as_secs_f64() * 1000.0,
            plan.module_ids.len(),
            self.layout.utilization_pct()
        );

        Ok(self.layout.save())
    }
}

pub fn candidates<'a>(catalog: &'a Catalog, config: &BuilderConfig) -> Vec<&'a Module> {
    catalog
        .modules
        .iter()
        .filter(|m| match &config.fill_categories {
            None => true,
            Some(categories) => categories.contains(&m.category),
        })
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opt::FillStrategy;
    use wallfit::entities::{ModuleCategory, Wall};

    fn catalog() -> Catalog {
        let modules = vec![
            Module::new(0, "tall cabinet", ModuleCategory::Storage, 800, 2400, 80_000),
            Module::new(1, "open shelf", ModuleCategory::Shelving, 1000, 2000, 40_000),
        ];
        Catalog::new("office".into(), Wall::new(0, "back wall", 3400, 2600), modules, vec![])
    }

    #[test]
    fn fills_existing_layout() {
        let catalog = catalog();
        let mut layout = Layout::new(catalog.wall.clone());
        layout.push_module(catalog.module(1)).unwrap();

        let mut filler = WallFiller::new(catalog, layout, BuilderConfig::default());
        let solution = filler.solve().unwrap();
        // 2400 mm left: 3 x 800
        assert_eq!(solution.occupied_width(), 3400);
        assert_eq!(filler.layout.len(), 4);
    }

    #[test]
    fn respects_category_filter() {
        let config = BuilderConfig {
            fill_categories: Some(vec![ModuleCategory::Shelving]),
            fill_strategy: FillStrategy::Greedy,
            ..BuilderConfig::default()
        };
        let catalog = catalog();
        let layout = Layout::new(catalog.wall.clone());
        let mut filler = WallFiller::new(catalog, layout, config);
        filler.solve().unwrap();
        assert!(filler.layout.placed_modules().all(|(_, pm)| pm.module_id == 1));
        assert_eq!(filler.layout.remaining_width(), 400);
    }
}
