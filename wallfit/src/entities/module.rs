use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A fixed-width wall panel, placed edge-to-edge with other modules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    pub id: usize,
    pub name: String,
    pub category: ModuleCategory,
    /// Width in mm, the only dimension that matters for fitting
    pub width: u32,
    /// Height in mm
    pub height: u32,
    /// Base price in cents, without finish
    pub price: u64,
}

impl Module {
    pub fn new(
        id: usize,
        name: impl Into<String>,
        category: ModuleCategory,
        width: u32,
        height: u32,
        price: u64,
    ) -> Self {
        Module {
            id,
            name: name.into(),
            category,
            width,
            height,
            price,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleCategory {
    Storage,
    Shelving,
    Media,
    Desk,
    Bed,
    Seating,
    Panel,
}

impl Display for ModuleCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModuleCategory::Storage => "storage",
            ModuleCategory::Shelving => "shelving",
            ModuleCategory::Media => "media",
            ModuleCategory::Desk => "desk",
            ModuleCategory::Bed => "bed",
            ModuleCategory::Seating => "seating",
            ModuleCategory::Panel => "panel",
        };
        write!(f, "{name}")
    }
}
