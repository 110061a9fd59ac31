use serde::{Deserialize, Serialize};

/// Configuration of the fit check
#[derive(Clone, Debug, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FitConfig {
    /// Largest leftover width (in mm) for which a fitting module is still signaled as an optimal fit.
    pub optimal_margin: u32,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            optimal_margin: 100,
        }
    }
}

/// Bounds on the dimensions accepted during import, all in mm.
#[derive(Clone, Debug, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DimensionLimits {
    pub wall_width: (u32, u32),
    pub wall_height: (u32, u32),
    pub module_width: (u32, u32),
}

impl Default for DimensionLimits {
    fn default() -> Self {
        Self {
            wall_width: (1000, 12000),
            wall_height: (1000, 4000),
            module_width: (400, 1200),
        }
    }
}
