//! Core domain types for Fishdle
//!
//! Fish records, the region adjacency table and the attribute comparison engine.
//! Everything here is pure and synchronous.

mod comparison;
mod fish;
mod region;

pub use comparison::{AttributeComparison, Comparison, Direction, MatchKind, compare};
pub use fish::{Attribute, Attributes, FishEntity, SizeClass};
pub use region::{known_regions, region_group};

#[cfg(test)]
pub(crate) use fish::fixtures;
