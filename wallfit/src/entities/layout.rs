use crate::entities::{MM2_PER_M2, Module, PModKey, PlacedModule, Span, Wall};
use crate::util::assertions;
use anyhow::{Result, bail, ensure};
use slotmap::SlotMap;

/// A [`Layout`] is a dynamic representation of modules placed side by side on a [`Wall`].
/// Modules can be placed, moved and removed. The wall can be swapped. Snapshots can be taken and restored to.
/// A layout never holds more module width than the wall is wide.
#[derive(Clone, Debug)]
pub struct Layout {
    /// The wall used for this layout
    pub wall: Wall,
    /// All the modules that have been placed in this layout, indexed by a unique key
    placed_modules: SlotMap<PModKey, PlacedModule>,
    /// Left-to-right order of the placed modules
    order: Vec<PModKey>,
}

impl Layout {
    pub fn new(wall: Wall) -> Self {
        Layout {
            wall,
            placed_modules: SlotMap::with_key(),
            order: vec![],
        }
    }

    pub fn from_snapshot(ls: &LayoutSnapshot) -> Self {
        let mut layout = Layout::new(ls.wall.clone());
        layout.restore(ls);
        layout
    }

    /// Places a module at position `index` in the row (0 is the left edge, `len()` appends).
    /// Returns the unique key of the placed module.
    pub fn place_module(&mut self, module: &Module, index: usize) -> Result<PModKey> {
        ensure!(
            index <= self.order.len(),
            "insertion index {index} out of range (layout holds {} modules)",
            self.order.len()
        );
        let remaining = self.remaining_width();
        if module.width > remaining {
            bail!(
                "module {} ({} mm) overflows the remaining {remaining} mm by {} mm",
                module.id,
                module.width,
                module.width - remaining
            );
        }

        let pk = self.placed_modules.insert(PlacedModule::new(module));
        self.order.insert(index, pk);

        debug_assert!(assertions::layout_is_consistent(self));

        Ok(pk)
    }

    /// Places a module at the right end of the row.
    pub fn push_module(&mut self, module: &Module) -> Result<PModKey> {
        self.place_module(module, self.order.len())
    }

    /// Moves a placed module to position `index`, as if it were removed first and then inserted at `index`.
    pub fn move_module(&mut self, pk: PModKey, index: usize) -> Result<()> {
        let current = self.position(pk)?;
        ensure!(
            index < self.order.len(),
            "target index {index} out of range (layout holds {} modules)",
            self.order.len()
        );
        let key = self.order.remove(current);
        self.order.insert(index, key);

        debug_assert!(assertions::layout_is_consistent(self));
        Ok(())
    }

    /// Removes a module from the layout by its unique key and returns the removed [`PlacedModule`].
    pub fn remove_module(&mut self, pk: PModKey) -> Result<PlacedModule> {
        let idx = self.position(pk)?;
        self.order.remove(idx);
        let pm = self
            .placed_modules
            .remove(pk)
            .expect("ordered key should be present in the slotmap");

        debug_assert!(assertions::layout_is_consistent(self));
        Ok(pm)
    }

    /// Applies (or clears) a finish on a placed module.
    pub fn set_finish(&mut self, pk: PModKey, finish_id: Option<usize>) -> Result<()> {
        match self.placed_modules.get_mut(pk) {
            Some(pm) => {
                pm.finish_id = finish_id;
                Ok(())
            }
            None => bail!("no placed module with key {pk:?}"),
        }
    }

    /// Removes all modules from the layout.
    pub fn clear(&mut self) {
        self.placed_modules.clear();
        self.order.clear();
    }

    /// Replaces the wall. Fails if the modules currently placed would not fit on the new wall.
    pub fn swap_wall(&mut self, wall: Wall) -> Result<()> {
        let occupied = self.occupied_width();
        ensure!(
            occupied <= wall.width,
            "placed modules ({occupied} mm) do not fit on the new wall ({} mm)",
            wall.width
        );
        self.wall = wall;
        Ok(())
    }

    /// Saves the current state of the layout to be potentially restored to later.
    pub fn save(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            wall: self.wall.clone(),
            placed_modules: self.placed_modules.clone(),
            order: self.order.clone(),
        }
    }

    /// Restores the layout to a previous state using a snapshot.
    pub fn restore(&mut self, layout_snapshot: &LayoutSnapshot) {
        assert_eq!(self.wall.id, layout_snapshot.wall.id);

        self.wall = layout_snapshot.wall.clone();
        self.placed_modules = layout_snapshot.placed_modules.clone();
        self.order = layout_snapshot.order.clone();

        debug_assert!(assertions::snapshot_matches_layout(self, layout_snapshot));
    }

    pub fn placed_module(&self, pk: PModKey) -> Option<&PlacedModule> {
        self.placed_modules.get(pk)
    }

    /// Placed modules in left-to-right order
    pub fn placed_modules(&self) -> impl Iterator<Item = (PModKey, &PlacedModule)> {
        self.order.iter().map(|&pk| (pk, &self.placed_modules[pk]))
    }

    /// Placed modules in left-to-right order, together with the interval each one occupies
    pub fn spans(&self) -> impl Iterator<Item = (PModKey, &PlacedModule, Span)> {
        self.placed_modules()
            .scan(0, |offset, (pk, pm)| {
                let span = Span::new(*offset, *offset + pm.width);
                *offset = span.end;
                Some((pk, pm, span))
            })
    }

    /// Position of a placed module in the row
    pub fn position(&self, pk: PModKey) -> Result<usize> {
        match self.order.iter().position(|&k| k == pk) {
            Some(idx) => Ok(idx),
            None => bail!("no placed module with key {pk:?}"),
        }
    }

    pub fn keys(&self) -> &[PModKey] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no modules are placed
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of the widths of all placed modules, in mm
    pub fn occupied_width(&self) -> u32 {
        self.placed_modules.values().map(|pm| pm.width).sum()
    }

    /// Width of the wall not yet covered by modules, in mm
    pub fn remaining_width(&self) -> u32 {
        self.wall.width.saturating_sub(self.occupied_width())
    }

    /// Ratio of placed module width to wall width, in [0, 1]
    pub fn utilization(&self) -> f32 {
        match self.wall.width {
            0 => 0.0,
            w => self.occupied_width() as f32 / w as f32,
        }
    }

    /// [`Layout::utilization`] expressed as a percentage
    pub fn utilization_pct(&self) -> f32 {
        self.utilization() * 100.0
    }

    /// Face area covered by the placed modules in m². Modules taller than the wall only count up to the wall height.
    pub fn covered_area(&self) -> f32 {
        self.placed_modules
            .values()
            .map(|pm| pm.width as f32 * pm.height.min(self.wall.height) as f32)
            .sum::<f32>()
            / MM2_PER_M2
    }

    /// Ratio of covered face area to wall area, in [0, 1]
    pub fn coverage(&self) -> f32 {
        match self.wall.area() {
            a if a > 0.0 => self.covered_area() / a,
            _ => 0.0,
        }
    }

    /// True if every placed module has a finish applied
    pub fn is_fully_finished(&self) -> bool {
        self.placed_modules.values().all(|pm| pm.finish_id.is_some())
    }

    /// True if the placed modules fit on the wall
    pub fn is_feasible(&self) -> bool {
        self.occupied_width() <= self.wall.width
    }
}

/// Immutable and compact representation of a [`Layout`].
/// Can be used to restore a [`Layout`] back to a previous state.
#[derive(Clone, Debug)]
pub struct LayoutSnapshot {
    /// A copy of the wall used in the layout
    pub wall: Wall,
    /// A copy of the placed modules in the layout
    pub placed_modules: SlotMap<PModKey, PlacedModule>,
    /// A copy of the left-to-right order
    pub order: Vec<PModKey>,
}

impl LayoutSnapshot {
    /// Equivalent to [`Layout::occupied_width`]
    pub fn occupied_width(&self) -> u32 {
        self.placed_modules.values().map(|pm| pm.width).sum()
    }

    /// Equivalent to [`Layout::utilization`]
    pub fn utilization(&self) -> f32 {
        match self.wall.width {
            0 => 0.0,
            w => self.occupied_width() as f32 / w as f32,
        }
    }
}
