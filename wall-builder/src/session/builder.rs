use anyhow::{Context, Result, bail, ensure};
use jiff::Timestamp;
use log::{debug, info, warn};
use wallfit::entities::{Catalog, Layout, PModKey, PlacedModule, Wall};
use wallfit::fitting::{FitSuggestion, rank_candidates};
use wallfit::io::export::export_layout;
use wallfit::io::ext_repr::ExtWall;
use wallfit::io::import::Importer;

use crate::config::BuilderConfig;
use crate::opt::filler;
use crate::opt::strategy::{self, FillPlan};
use crate::session::{
    BuilderStep, ContactDetails, DragSource, DropOutcome, DropPreview, DropZone, ExtQuote,
    History, ModuleCard, ModulePalette, QuoteError, QuoteEstimate, estimate,
};

/// The Smart Wall Builder: lay out modules on a wall, pick finishes and request a quote.
///
/// Every successful change to the layout can be undone.
/// Once a quote has been submitted the builder is frozen and rejects further changes.
pub struct SmartWallBuilder {
    pub catalog: Catalog,
    layout: Layout,
    config: BuilderConfig,
    pub palette: ModulePalette,
    drop_zone: DropZone,
    history: History,
    step: BuilderStep,
    pub contact: ContactDetails,
    submitted: Option<ExtQuote>,
}

impl SmartWallBuilder {
    pub fn new(catalog: Catalog, config: BuilderConfig) -> Self {
        let layout = Layout::new(catalog.wall.clone());
        Self::with_layout(catalog, layout, config)
    }

    /// Starts from an existing layout, e.g. one imported from a saved configuration.
    pub fn with_layout(catalog: Catalog, layout: Layout, config: BuilderConfig) -> Self {
        assert_eq!(catalog.wall.id, layout.wall.id);
        let history = History::new(config.history_depth);
        Self {
            catalog,
            layout,
            config,
            palette: ModulePalette::new(),
            drop_zone: DropZone::new(),
            history,
            step: BuilderStep::Layout,
            contact: ContactDetails::default(),
            submitted: None,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn step(&self) -> BuilderStep {
        self.step
    }

    pub fn drop_zone(&self) -> &DropZone {
        &self.drop_zone
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    pub fn submitted_quote(&self) -> Option<&ExtQuote> {
        self.submitted.as_ref()
    }

    pub fn cards(&self) -> Vec<ModuleCard> {
        self.palette
            .cards(&self.catalog, &self.layout, &self.config.fit_config)
    }

    /// Every module of the catalog rated against the remaining width, best first
    pub fn suggestions(&self) -> Vec<FitSuggestion> {
        rank_candidates(&self.layout, &self.catalog.modules, &self.config.fit_config)
    }

    pub fn start_drag(&mut self, source: DragSource) -> Result<()> {
        self.ensure_editable()?;
        self.drop_zone.start_drag(source)
    }

    pub fn hover(&mut self, index: usize) -> Result<DropPreview> {
        self.drop_zone
            .hover(&self.layout, &self.catalog, index, &self.config.fit_config)
    }

    pub fn drop_at(&mut self, index: usize) -> Result<DropOutcome> {
        if let Err(e) = self.ensure_editable() {
            self.drop_zone.cancel();
            return Err(e);
        }
        let before = self.layout.save();
        let outcome = self.drop_zone.drop(
            &mut self.layout,
            &self.catalog,
            index,
            &self.config.fit_config,
        )?;
        match outcome {
            DropOutcome::Placed(_) | DropOutcome::Moved(_) => self.history.record(before),
            DropOutcome::Rejected(reason) => warn!("[BUILDER] drop rejected: {reason}"),
        }
        Ok(outcome)
    }

    pub fn cancel_drag(&mut self) {
        self.drop_zone.cancel();
    }

    /// Appends a module at the right end of the wall (click instead of drag).
    pub fn add_module(&mut self, module_id: usize) -> Result<PModKey> {
        self.ensure_editable()?;
        let module = self
            .catalog
            .get_module(module_id)
            .with_context(|| format!("unknown module {module_id}"))?;
        let before = self.layout.save();
        let pk = self.layout.push_module(module)?;
        self.history.record(before);
        Ok(pk)
    }

    pub fn remove_module(&mut self, pk: PModKey) -> Result<PlacedModule> {
        self.ensure_editable()?;
        let before = self.layout.save();
        let pm = self.layout.remove_module(pk)?;
        self.history.record(before);
        Ok(pm)
    }

    pub fn set_finish(&mut self, pk: PModKey, finish_id: usize) -> Result<()> {
        self.ensure_editable()?;
        ensure!(
            self.catalog.get_finish(finish_id).is_some(),
            "unknown finish {finish_id}"
        );
        let before = self.layout.save();
        self.layout.set_finish(pk, Some(finish_id))?;
        self.history.record(before);
        Ok(())
    }

    pub fn apply_finish_to_all(&mut self, finish_id: usize) -> Result<()> {
        self.ensure_editable()?;
        ensure!(
            self.catalog.get_finish(finish_id).is_some(),
            "unknown finish {finish_id}"
        );
        if self.layout.is_empty() {
            return Ok(());
        }
        let before = self.layout.save();
        for pk in self.layout.keys().to_vec() {
            self.layout.set_finish(pk, Some(finish_id))?;
        }
        self.history.record(before);
        Ok(())
    }

    /// Changes the wall dimensions. Fails if the placed modules would no longer fit.
    pub fn resize_wall(&mut self, width: u32, height: u32) -> Result<()> {
        self.ensure_editable()?;
        let current = &self.layout.wall;
        let ext_wall = ExtWall {
            id: current.id as u64,
            name: current.name.clone(),
            width,
            height,
        };
        let wall: Wall = Importer::new(self.config.limits).import_wall(&ext_wall)?;
        let before = self.layout.save();
        self.layout.swap_wall(wall.clone())?;
        self.catalog.wall = wall;
        self.history.record(before);
        info!("[BUILDER] wall resized to {width} x {height} mm");
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.ensure_editable()?;
        if !self.layout.is_empty() {
            self.history.record(self.layout.save());
            self.layout.clear();
        }
        Ok(())
    }

    /// Completes the layout with modules from the palette, according to the configured strategy.
    pub fn auto_fill(&mut self) -> Result<FillPlan> {
        self.ensure_editable()?;
        let candidates = filler::candidates(&self.catalog, &self.config);
        let plan = strategy::plan(
            self.config.fill_strategy,
            self.layout.remaining_width(),
            &candidates,
        );
        if plan.is_empty() {
            debug!(
                "[BUILDER] auto-fill found nothing to add: {} mm left, narrowest module {:?} mm",
                self.layout.remaining_width(),
                self.catalog.narrowest_module_width()
            );
            return Ok(plan);
        }
        let before = self.layout.save();
        for &module_id in &plan.module_ids {
            self.layout.push_module(self.catalog.module(module_id))?;
        }
        self.history.record(before);
        info!(
            "[BUILDER] auto-fill added {} modules ({} mm), utilization {:.1}%",
            plan.module_ids.len(),
            plan.filled_width,
            self.layout.utilization_pct()
        );
        Ok(plan)
    }

    pub fn undo(&mut self) -> bool {
        if self.is_submitted() {
            return false;
        }
        match self.history.undo(self.layout.save()) {
            Some(snapshot) => {
                self.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        if self.is_submitted() {
            return false;
        }
        match self.history.redo(self.layout.save()) {
            Some(snapshot) => {
                self.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.is_submitted() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.is_submitted() && self.history.can_redo()
    }

    /// Advances to the next step if the current one is complete.
    pub fn next_step(&mut self) -> Result<BuilderStep, QuoteError> {
        if self.is_submitted() {
            return Err(QuoteError::AlreadySubmitted);
        }
        self.check_step(self.step)?;
        if let Some(next) = self.step.next() {
            debug!("[BUILDER] step {} -> {next}", self.step);
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn back_step(&mut self) -> BuilderStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    pub fn estimate(&self) -> QuoteEstimate {
        estimate(&self.layout, &self.catalog, &self.config.pricing)
    }

    /// Validates the whole configuration and freezes it into a quote request.
    pub fn submit_quote(&mut self) -> Result<ExtQuote, QuoteError> {
        if self.is_submitted() {
            return Err(QuoteError::AlreadySubmitted);
        }
        if self.step != BuilderStep::Review {
            return Err(QuoteError::NotReviewed(self.step));
        }
        for step in [BuilderStep::Layout, BuilderStep::Finishes, BuilderStep::Contact] {
            self.check_step(step)?;
        }

        let quote = ExtQuote {
            catalog: self.catalog.name.clone(),
            contact: self.contact.clone(),
            layout: export_layout(&self.layout),
            estimate: self.estimate(),
            submitted_at: Timestamp::now().to_string(),
        };
        info!(
            "[BUILDER] quote submitted: {} modules, {}",
            self.layout.len(),
            quote.estimate.formatted_total()
        );
        self.submitted = Some(quote.clone());
        Ok(quote)
    }

    fn check_step(&self, step: BuilderStep) -> Result<(), QuoteError> {
        match step {
            BuilderStep::Layout if self.layout.is_empty() => Err(QuoteError::EmptyLayout),
            BuilderStep::Finishes if !self.layout.is_fully_finished() => {
                let n = self
                    .layout
                    .placed_modules()
                    .filter(|(_, pm)| pm.finish_id.is_none())
                    .count();
                Err(QuoteError::UnfinishedModules(n))
            }
            BuilderStep::Contact => self.contact.validate().map_err(QuoteError::InvalidContact),
            _ => Ok(()),
        }
    }

    fn restore(&mut self, snapshot: &wallfit::entities::LayoutSnapshot) {
        self.layout.restore(snapshot);
        self.catalog.wall = snapshot.wall.clone();
        self.drop_zone.cancel();
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.is_submitted() {
            bail!("the quote was already submitted, the layout can no longer change");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallfit::entities::{Finish, Module, ModuleCategory};
    use wallfit::fitting::FitQuality;

    fn builder() -> SmartWallBuilder {
        let catalog = Catalog::new(
            "office".into(),
            Wall::new(0, "study", 2400, 2600),
            vec![
                Module::new(0, "desk", ModuleCategory::Desk, 1200, 750, 45_000),
                Module::new(1, "bookcase", ModuleCategory::Shelving, 800, 2200, 35_000),
                Module::new(2, "filing", ModuleCategory::Storage, 400, 1000, 15_000),
            ],
            vec![Finish::new(0, "oak", 4_000), Finish::new(1, "white", 0)],
        );
        SmartWallBuilder::new(catalog, BuilderConfig::default())
    }

    fn contact() -> ContactDetails {
        ContactDetails {
            name: "Sam".into(),
            email: "sam@example.org".into(),
            phone: None,
            message: None,
        }
    }

    #[test]
    fn full_flow() {
        let mut b = builder();
        assert_eq!(b.next_step(), Err(QuoteError::EmptyLayout));

        b.start_drag(DragSource::Palette(1)).unwrap();
        b.cancel_drag();
        assert!(!b.drop_zone().is_dragging());

        b.start_drag(DragSource::Palette(0)).unwrap();
        assert!(matches!(b.drop_at(0).unwrap(), DropOutcome::Placed(_)));
        let plan = b.auto_fill().unwrap();
        assert_eq!(plan.filled_width, 1200);
        assert_eq!(b.layout().remaining_width(), 0);

        assert_eq!(b.next_step(), Ok(BuilderStep::Finishes));
        assert!(matches!(b.next_step(), Err(QuoteError::UnfinishedModules(_))));
        b.apply_finish_to_all(0).unwrap();
        assert_eq!(b.next_step(), Ok(BuilderStep::Contact));
        assert!(matches!(b.next_step(), Err(QuoteError::InvalidContact(_))));
        b.contact = contact();
        assert_eq!(b.next_step(), Ok(BuilderStep::Review));
        assert_eq!(b.back_step(), BuilderStep::Contact);
        assert_eq!(b.next_step(), Ok(BuilderStep::Review));

        let quote = b.submit_quote().unwrap();
        assert_eq!(
            b.submitted_quote().map(|q| q.estimate.total),
            Some(quote.estimate.total)
        );
        assert_eq!(quote.layout.remaining_width, 0);
        assert_eq!(quote.estimate.lines.len(), b.layout().len());
        assert!(b.is_submitted());
        assert!(b.add_module(2).is_err());
        assert_eq!(b.submit_quote().unwrap_err(), QuoteError::AlreadySubmitted);
        assert!(!b.undo());
    }

    #[test]
    fn submit_requires_review_step() {
        let mut b = builder();
        b.add_module(1).unwrap();
        assert_eq!(
            b.submit_quote().unwrap_err(),
            QuoteError::NotReviewed(BuilderStep::Layout)
        );
    }

    #[test]
    fn undo_and_redo() {
        let mut b = builder();
        let pk = b.add_module(0).unwrap();
        b.add_module(1).unwrap();
        b.set_finish(pk, 1).unwrap();

        assert!(b.undo());
        assert_eq!(b.layout().placed_module(pk).unwrap().finish_id, None);
        assert!(b.undo());
        assert_eq!(b.layout().len(), 1);
        assert!(b.redo());
        assert_eq!(b.layout().len(), 2);

        b.remove_module(pk).unwrap();
        assert!(!b.can_redo());
        assert!(b.undo());
        assert!(b.layout().placed_module(pk).is_some());
    }

    #[test]
    fn rejected_drop_is_not_recorded() {
        let mut b = builder();
        b.add_module(0).unwrap();
        b.add_module(0).unwrap();
        b.start_drag(DragSource::Palette(2)).unwrap();
        assert_eq!(b.hover(2).unwrap().fit.quality, FitQuality::Overflow);
        assert!(matches!(b.drop_at(2).unwrap(), DropOutcome::Rejected(_)));
        assert!(b.undo());
        assert_eq!(b.layout().len(), 1);
    }

    #[test]
    fn resize_wall() {
        let mut b = builder();
        b.add_module(0).unwrap();
        b.add_module(0).unwrap();
        assert!(b.resize_wall(2000, 2600).is_err());
        assert!(b.resize_wall(500, 2600).is_err());
        b.resize_wall(3000, 2600).unwrap();
        assert_eq!(b.layout().remaining_width(), 600);
        assert_eq!(b.suggestions()[0].check.quality, FitQuality::Fits);
        assert!(b.undo());
        assert_eq!(b.layout().wall.width, 2400);
        assert_eq!(b.catalog.wall.width, 2400);
    }

    #[test]
    fn finishing_an_empty_wall_is_not_recorded() {
        let mut b = builder();
        b.apply_finish_to_all(0).unwrap();
        assert!(!b.can_undo());
        assert!(!b.undo());
    }

    #[test]
    fn unknown_finish() {
        let mut b = builder();
        let pk = b.add_module(0).unwrap();
        assert!(b.set_finish(pk, 5).is_err());
        assert!(b.apply_finish_to_all(5).is_err());
    }
}
