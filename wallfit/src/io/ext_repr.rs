use crate::entities::ModuleCategory;
use crate::fitting::FitQuality;
use serde::{Deserialize, Serialize};

/// External representation of a [`Catalog`](crate::entities::Catalog):
/// the wall to be configured, the module palette, the finishes and optionally a starting layout.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCatalog {
    /// Name of the configuration, e.g. the room it is meant for
    pub name: String,
    pub wall: ExtWall,
    pub modules: Vec<ExtModule>,
    #[serde(default)]
    pub finishes: Vec<ExtFinish>,
    /// Modules already on the wall, from left to right
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub placements: Vec<ExtPlacement>,
}

/// External representation of a [`Wall`](crate::entities::Wall). Dimensions in mm.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtWall {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// External representation of a [`Module`](crate::entities::Module).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtModule {
    /// Unique identifier of the module
    pub id: u64,
    pub name: String,
    pub category: ModuleCategory,
    /// Width in mm
    pub width: u32,
    /// Height in mm
    pub height: u32,
    /// Base price in cents
    pub price: u64,
}

/// External representation of a [`Finish`](crate::entities::Finish).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtFinish {
    pub id: u64,
    pub name: String,
    /// Surcharge in cents per m² of module face
    #[serde(default)]
    pub surcharge_per_m2: u64,
}

/// A module to be placed on the wall, in left-to-right order.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    pub module_id: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub finish_id: Option<u64>,
}

/// External representation of a [`Layout`](crate::entities::Layout).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLayout {
    /// The wall that was used
    pub wall_id: u64,
    pub wall_width: u32,
    /// The modules placed on the wall and where they were placed
    pub placed_modules: Vec<ExtPlacedModule>,
    pub remaining_width: u32,
    /// Placed width divided by wall width
    pub utilization: f32,
    /// Covered face area divided by wall area
    pub coverage: f32,
}

/// External representation of a [`PlacedModule`](crate::entities::PlacedModule).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedModule {
    pub module_id: u64,
    /// Distance from the left edge of the wall in mm
    pub offset: u32,
    pub width: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub finish_id: Option<u64>,
}

/// External representation of a [`FitSuggestion`](crate::fitting::FitSuggestion).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtFitSuggestion {
    pub module_id: u64,
    pub quality: FitQuality,
    pub waste: u32,
    pub overflow: u32,
    pub projected_utilization: f32,
}
