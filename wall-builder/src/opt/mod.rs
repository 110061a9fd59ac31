pub mod filler;
pub mod strategy;

#[doc(inline)]
pub use filler::WallFiller;
#[doc(inline)]
pub use strategy::{FillPlan, FillStrategy};
