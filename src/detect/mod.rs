pub mod ambiguity;
pub mod assumption;

pub use ambiguity::detect_ambiguities;
pub use assumption::detect_assumptions;
