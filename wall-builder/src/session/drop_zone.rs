use anyhow::{Result, bail};
use log::debug;
use std::fmt::{Display, Formatter};
use wallfit::entities::{Catalog, Layout, PModKey};
use wallfit::fitting::{FitCheck, check_fit};
use wallfit::util::FitConfig;

/// What is being dragged onto the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// A new module, dragged from the palette
    Palette(usize),
    /// A module already on the wall, being repositioned
    Placed(PModKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: DragSource,
        /// Index of the slot currently hovered, if any
        hover: Option<usize>,
    },
}

/// What would happen if the dragged module were dropped at a specific slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropPreview {
    pub index: usize,
    pub fit: FitCheck,
    /// Utilization after the drop, in [0, 1]
    pub projected_utilization: f32,
}

impl DropPreview {
    pub fn accepts(&self) -> bool {
        self.fit.fits()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Placed(PModKey),
    Moved(PModKey),
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The module is this many mm too wide for the remaining width
    Overflow(u32),
    InvalidIndex(usize),
    UnknownModule(usize),
    /// The dragged placed module no longer exists (e.g. after an undo)
    UnknownPlacedModule,
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::Overflow(mm) => write!(f, "module is {mm} mm too wide"),
            RejectReason::InvalidIndex(i) => write!(f, "no slot at position {i}"),
            RejectReason::UnknownModule(id) => write!(f, "unknown module {id}"),
            RejectReason::UnknownPlacedModule => write!(f, "module is no longer on the wall"),
        }
    }
}

/// Drag and drop state machine of the wall.
/// A drag starts from the palette or from a placed module and always ends in [`DragState::Idle`],
/// either by dropping or by cancelling.
#[derive(Debug, Clone, Default)]
pub struct DropZone {
    state: DragState,
}

impl DropZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn start_drag(&mut self, source: DragSource) -> Result<()> {
        if let DragState::Dragging { source: current, .. } = self.state {
            bail!("already dragging {current:?}");
        }
        debug!("[DND] start dragging {source:?}");
        self.state = DragState::Dragging {
            source,
            hover: None,
        };
        Ok(())
    }

    /// Previews a drop of the dragged module at slot `index`.
    pub fn hover(
        &mut self,
        layout: &Layout,
        catalog: &Catalog,
        index: usize,
        config: &FitConfig,
    ) -> Result<DropPreview> {
        let DragState::Dragging { source, .. } = self.state else {
            bail!("nothing is being dragged")
        };
        let preview = preview(layout, catalog, source, index, config)?;
        self.state = DragState::Dragging {
            source,
            hover: Some(index),
        };
        Ok(preview)
    }

    /// Drops the dragged module at slot `index`. The drag ends, whatever the outcome.
    pub fn drop(
        &mut self,
        layout: &mut Layout,
        catalog: &Catalog,
        index: usize,
        config: &FitConfig,
    ) -> Result<DropOutcome> {
        let DragState::Dragging { source, .. } = self.state else {
            bail!("nothing is being dragged")
        };
        self.state = DragState::Idle;

        if let Err(reason) = validate(layout, catalog, source, index) {
            debug!("[DND] rejected drop of {source:?} at {index}: {reason}");
            return Ok(DropOutcome::Rejected(reason));
        }
        let fit = preview(layout, catalog, source, index, config)?.fit;
        if !fit.fits() {
            debug!("[DND] rejected drop of {source:?} at {index}: overflow of {} mm", fit.overflow);
            return Ok(DropOutcome::Rejected(RejectReason::Overflow(fit.overflow)));
        }

        let outcome = match source {
            DragSource::Palette(module_id) => {
                let pk = layout.place_module(catalog.module(module_id), index)?;
                DropOutcome::Placed(pk)
            }
            DragSource::Placed(pk) => {
                layout.move_module(pk, index)?;
                DropOutcome::Moved(pk)
            }
        };
        debug!("[DND] dropped {source:?} at {index}: {outcome:?}");
        Ok(outcome)
    }

    pub fn cancel(&mut self) {
        if let DragState::Dragging { source, .. } = self.state {
            debug!("[DND] cancelled dragging {source:?}");
        }
        self.state = DragState::Idle;
    }
}

fn validate(
    layout: &Layout,
    catalog: &Catalog,
    source: DragSource,
    index: usize,
) -> Result<(), RejectReason> {
    match source {
        DragSource::Palette(module_id) => {
            if catalog.get_module(module_id).is_none() {
                return Err(RejectReason::UnknownModule(module_id));
            }
            if index > layout.len() {
                return Err(RejectReason::InvalidIndex(index));
            }
        }
        DragSource::Placed(pk) => {
            if layout.placed_module(pk).is_none() {
                return Err(RejectReason::UnknownPlacedModule);
            }
            if index >= layout.len() {
                return Err(RejectReason::InvalidIndex(index));
            }
        }
    }
    Ok(())
}

fn preview(
    layout: &Layout,
    catalog: &Catalog,
    source: DragSource,
    index: usize,
    config: &FitConfig,
) -> Result<DropPreview> {
    if let Err(reason) = validate(layout, catalog, source, index) {
        bail!("cannot preview {source:?} at {index}: {reason}");
    }
    let wall_width = layout.wall.width.max(1) as f32;
    let (fit, occupied_after) = match source {
        DragSource::Palette(module_id) => {
            let width = catalog.module(module_id).width;
            let fit = check_fit(layout.remaining_width(), width, config);
            let occupied_after = match fit.fits() {
                true => layout.occupied_width() + width,
                false => layout.occupied_width(),
            };
            (fit, occupied_after)
        }
        DragSource::Placed(pk) => {
            //the module is lifted off the wall while being moved, it always fits back
            let width = layout.placed_module(pk).map_or(0, |pm| pm.width);
            let fit = check_fit(layout.remaining_width() + width, width, config);
            (fit, layout.occupied_width())
        }
    };
    Ok(DropPreview {
        index,
        fit,
        projected_utilization: occupied_after as f32 / wall_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallfit::entities::{Module, ModuleCategory, Wall};
    use wallfit::fitting::FitQuality;
    use wallfit::util::FPA;

    fn catalog() -> Catalog {
        Catalog::new(
            "bathroom".into(),
            Wall::new(0, "vanity wall", 2000, 2400),
            vec![
                Module::new(0, "vanity", ModuleCategory::Storage, 1200, 900, 60_000),
                Module::new(1, "mirror cabinet", ModuleCategory::Storage, 800, 700, 30_000),
            ],
            vec![],
        )
    }

    #[test]
    fn drag_from_palette_and_drop() {
        let catalog = catalog();
        let config = FitConfig::default();
        let mut layout = Layout::new(catalog.wall.clone());
        let mut dz = DropZone::new();

        dz.start_drag(DragSource::Palette(0)).unwrap();
        let preview = dz.hover(&layout, &catalog, 0, &config).unwrap();
        assert!(preview.accepts());
        assert_eq!(FPA(preview.projected_utilization), FPA(0.6));
        assert_eq!(
            dz.state(),
            DragState::Dragging {
                source: DragSource::Palette(0),
                hover: Some(0)
            }
        );

        let outcome = dz.drop(&mut layout, &catalog, 0, &config).unwrap();
        assert!(matches!(outcome, DropOutcome::Placed(_)));
        assert_eq!(dz.state(), DragState::Idle);

        dz.start_drag(DragSource::Palette(1)).unwrap();
        let preview = dz.hover(&layout, &catalog, 1, &config).unwrap();
        assert_eq!(preview.fit.quality, FitQuality::Perfect);
        dz.drop(&mut layout, &catalog, 1, &config).unwrap();
        assert_eq!(layout.remaining_width(), 0);
    }

    #[test]
    fn overflowing_drop_is_rejected() {
        let catalog = catalog();
        let config = FitConfig::default();
        let mut layout = Layout::new(catalog.wall.clone());
        layout.push_module(catalog.module(0)).unwrap();

        let mut dz = DropZone::new();
        dz.start_drag(DragSource::Palette(0)).unwrap();
        let preview = dz.hover(&layout, &catalog, 1, &config).unwrap();
        assert!(!preview.accepts());
        assert_eq!(FPA(preview.projected_utilization), FPA(0.6));

        let outcome = dz.drop(&mut layout, &catalog, 1, &config).unwrap();
        assert_eq!(outcome, DropOutcome::Rejected(RejectReason::Overflow(400)));
        assert_eq!(dz.state(), DragState::Idle);
        assert_eq!(layout.len(), 1);
    }

    #[test]
    fn moving_a_full_wall_is_allowed() {
        let catalog = catalog();
        let config = FitConfig::default();
        let mut layout = Layout::new(catalog.wall.clone());
        let a = layout.push_module(catalog.module(0)).unwrap();
        let b = layout.push_module(catalog.module(1)).unwrap();

        let mut dz = DropZone::new();
        dz.start_drag(DragSource::Placed(a)).unwrap();
        assert!(dz.hover(&layout, &catalog, 1, &config).unwrap().accepts());
        let outcome = dz.drop(&mut layout, &catalog, 1, &config).unwrap();
        assert_eq!(outcome, DropOutcome::Moved(a));
        assert_eq!(layout.keys(), &[b, a]);
    }

    #[test]
    fn invalid_drops() {
        let catalog = catalog();
        let config = FitConfig::default();
        let mut layout = Layout::new(catalog.wall.clone());
        let mut dz = DropZone::new();

        assert!(dz.drop(&mut layout, &catalog, 0, &config).is_err());
        assert!(dz.hover(&layout, &catalog, 0, &config).is_err());

        dz.start_drag(DragSource::Palette(9)).unwrap();
        assert!(dz.start_drag(DragSource::Palette(0)).is_err());
        let outcome = dz.drop(&mut layout, &catalog, 0, &config).unwrap();
        assert_eq!(outcome, DropOutcome::Rejected(RejectReason::UnknownModule(9)));

        dz.start_drag(DragSource::Palette(0)).unwrap();
        let outcome = dz.drop(&mut layout, &catalog, 3, &config).unwrap();
        assert_eq!(outcome, DropOutcome::Rejected(RejectReason::InvalidIndex(3)));

        dz.start_drag(DragSource::Palette(1)).unwrap();
        dz.cancel();
        assert!(!dz.is_dragging());
        assert!(layout.is_empty());
    }
}
