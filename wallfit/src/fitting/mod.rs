mod fit;
mod suggest;

#[doc(inline)]
pub use fit::FitCheck;
#[doc(inline)]
pub use fit::FitQuality;
#[doc(inline)]
pub use fit::check_fit;

#[doc(inline)]
pub use suggest::FitSuggestion;
#[doc(inline)]
pub use suggest::best_fit;
#[doc(inline)]
pub use suggest::rank_candidates;
