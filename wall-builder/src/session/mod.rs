mod builder;
mod drop_zone;
mod history;
mod palette;
mod pricing;
mod quote;
mod stepper;

pub use builder::SmartWallBuilder;
pub use drop_zone::{DragSource, DragState, DropOutcome, DropPreview, DropZone, RejectReason};
pub use history::History;
pub use palette::{ModuleCard, ModulePalette};
pub use pricing::{PricingConfig, QuoteEstimate, QuoteLine, estimate, format_cents};
pub use quote::{ContactDetails, ExtQuote, QuoteError};
pub use stepper::BuilderStep;
