use crate::entities::{Catalog, Finish, Layout, Module, Wall};
use crate::io::ext_repr::{ExtCatalog, ExtFinish, ExtModule, ExtPlacement, ExtWall};
use crate::util::DimensionLimits;
use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;
use log::{debug, warn};

/// Converts external representations of walls, modules and finishes into internal ones.
#[derive(Clone, Debug, Copy, Default)]
pub struct Importer {
    pub limits: DimensionLimits,
}

impl Importer {
    pub fn new(limits: DimensionLimits) -> Importer {
        Importer { limits }
    }

    pub fn import_wall(&self, ext_wall: &ExtWall) -> Result<Wall> {
        let (min_w, max_w) = self.limits.wall_width;
        let (min_h, max_h) = self.limits.wall_height;
        ensure!(
            (min_w..=max_w).contains(&ext_wall.width),
            "wall width {} mm outside of supported range [{min_w}, {max_w}]",
            ext_wall.width
        );
        ensure!(
            (min_h..=max_h).contains(&ext_wall.height),
            "wall height {} mm outside of supported range [{min_h}, {max_h}]",
            ext_wall.height
        );
        Ok(Wall::new(
            ext_wall.id as usize,
            ext_wall.name.clone(),
            ext_wall.width,
            ext_wall.height,
        ))
    }

    pub fn import_module(&self, ext_module: &ExtModule, wall: &Wall) -> Result<Module> {
        let (min_w, max_w) = self.limits.module_width;
        ensure!(ext_module.width > 0, "module {} has no width", ext_module.id);
        ensure!(
            (min_w..=max_w).contains(&ext_module.width),
            "module {} width {} mm outside of supported range [{min_w}, {max_w}]",
            ext_module.id,
            ext_module.width
        );
        ensure!(
            ext_module.width <= wall.width,
            "module {} ({} mm) is wider than the wall ({} mm)",
            ext_module.id,
            ext_module.width,
            wall.width
        );
        ensure!(ext_module.height > 0, "module {} has no height", ext_module.id);
        if ext_module.height > wall.height {
            warn!(
                "module {} ({} mm) is taller than the wall ({} mm)",
                ext_module.id, ext_module.height, wall.height
            );
        }
        Ok(Module::new(
            ext_module.id as usize,
            ext_module.name.clone(),
            ext_module.category,
            ext_module.width,
            ext_module.height,
            ext_module.price,
        ))
    }

    pub fn import_finish(&self, ext_finish: &ExtFinish) -> Finish {
        Finish::new(
            ext_finish.id as usize,
            ext_finish.name.clone(),
            ext_finish.surcharge_per_m2,
        )
    }

    pub fn import_catalog(&self, ext_catalog: &ExtCatalog) -> Result<Catalog> {
        let wall = self.import_wall(&ext_catalog.wall).context("invalid wall")?;

        let modules = {
            let modules = ext_catalog
                .modules
                .iter()
                .map(|m| self.import_module(m, &wall))
                .collect::<Result<Vec<Module>>>()?
                .into_iter()
                .sorted_by_key(|m| m.id)
                .collect_vec();
            ensure!(
                modules.iter().enumerate().all(|(i, m)| m.id == i),
                "all modules should have consecutive ids starting from 0. ids: {:?}",
                modules.iter().map(|m| m.id).collect_vec()
            );
            modules
        };

        let finishes = {
            let finishes = ext_catalog
                .finishes
                .iter()
                .map(|f| self.import_finish(f))
                .sorted_by_key(|f| f.id)
                .collect_vec();
            ensure!(
                finishes.iter().enumerate().all(|(i, f)| f.id == i),
                "all finishes should have consecutive ids starting from 0. ids: {:?}",
                finishes.iter().map(|f| f.id).collect_vec()
            );
            finishes
        };

        debug!(
            "imported catalog '{}': {} mm wall, {} modules, {} finishes",
            ext_catalog.name,
            wall.width,
            modules.len(),
            finishes.len()
        );

        Ok(Catalog::new(ext_catalog.name.clone(), wall, modules, finishes))
    }

    /// Replays a list of placements (left to right) onto an empty layout of the catalog's wall.
    pub fn import_layout(&self, catalog: &Catalog, placements: &[ExtPlacement]) -> Result<Layout> {
        let mut layout = Layout::new(catalog.wall.clone());
        for (i, p) in placements.iter().enumerate() {
            let Some(module) = catalog.get_module(p.module_id as usize) else {
                bail!("placement {i} refers to unknown module {}", p.module_id)
            };
            let finish_id = match p.finish_id {
                Some(f) if catalog.get_finish(f as usize).is_none() => {
                    bail!("placement {i} refers to unknown finish {f}")
                }
                f => f.map(|f| f as usize),
            };
            let pk = layout
                .push_module(module)
                .with_context(|| format!("placement {i} does not fit"))?;
            layout.set_finish(pk, finish_id)?;
        }
        Ok(layout)
    }
}
