use crate::config::BuilderConfig;
use crate::session::QuoteEstimate;
use serde::Serialize;
use wallfit::io::ext_repr::{ExtCatalog, ExtFitSuggestion, ExtLayout};

#[derive(Serialize, Clone)]
pub struct BuilderOutput {
    #[serde(flatten)]
    pub catalog: ExtCatalog,
    pub layout: ExtLayout,
    /// Palette modules rated against the remaining width of the layout, best first
    pub suggestions: Vec<ExtFitSuggestion>,
    pub estimate: QuoteEstimate,
    pub config: BuilderConfig,
    pub run_time_ms: u64,
}
