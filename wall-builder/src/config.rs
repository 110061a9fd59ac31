use serde::{Deserialize, Serialize};

use wallfit::entities::ModuleCategory;
use wallfit::io::svg::SvgDrawOptions;
use wallfit::util::{DimensionLimits, FitConfig};

use crate::opt::FillStrategy;
use crate::session::PricingConfig;

/// Configuration of the Smart Wall Builder
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BuilderConfig {
    /// Configuration of the fit check and optimal fit signaling
    pub fit_config: FitConfig,
    /// Accepted wall and module dimensions
    pub limits: DimensionLimits,
    /// Strategy used to complete a layout automatically
    pub fill_strategy: FillStrategy,
    /// Restricts the auto-fill to these categories. If undefined, every module in the palette can be used
    #[serde(default)]
    pub fill_categories: Option<Vec<ModuleCategory>>,
    pub pricing: PricingConfig,
    /// Maximum number of undo steps kept in memory
    pub history_depth: usize,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            fit_config: FitConfig::default(),
            limits: DimensionLimits::default(),
            fill_strategy: FillStrategy::Exact,
            fill_categories: None,
            pricing: PricingConfig::default(),
            history_depth: 50,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
