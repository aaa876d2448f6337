//! Score sections
//!
//! Each section turns one aspect of an analyzed password into points. The
//! scorer adds them up and clamps the total to 0-100.

mod entropy;
mod length;
mod pattern;
mod variety;

pub use entropy::entropy_section;
pub use length::length_section;
pub use pattern::pattern_section;
pub use variety::{CharacterClasses, variety_section};

/// Points contributed by one section. Only the pattern section goes negative.
pub type SectionScore = i32;
