mod catalog;
mod finish;
mod layout;
mod module;
mod placed_module;
mod wall;

#[doc(inline)]
pub use catalog::Catalog;

#[doc(inline)]
pub use finish::Finish;

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use layout::LayoutSnapshot;

#[doc(inline)]
pub use module::Module;

#[doc(inline)]
pub use module::ModuleCategory;

#[doc(inline)]
pub use placed_module::PModKey;

#[doc(inline)]
pub use placed_module::PlacedModule;

#[doc(inline)]
pub use placed_module::Span;

#[doc(inline)]
pub use wall::Wall;

/// Square millimetres in a square metre
pub const MM2_PER_M2: f32 = 1_000_000.0;
