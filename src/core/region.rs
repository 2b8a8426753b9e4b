//! Region adjacency table
//!
//! Regions in the same group are "close" to each other. Freshwater regions each
//! form their own group, so they are only ever an exact match or wrong.

/// (region, group) pairs
const REGION_GROUPS: &[(&str, u8)] = &[
    ("Atlantic", 0),
    ("Arctic", 0),
    ("Mediterranean", 0),
    ("Pacific", 1),
    ("Indian", 1),
    ("Indo-Pacific", 1),
    ("Southern", 2),
    ("Freshwater Americas", 3),
    ("Freshwater Europe", 4),
    ("Freshwater Asia", 5),
    ("Freshwater Africa", 6),
    ("Freshwater Oceania", 7),
];

/// Group id of a region, or `None` if the region is not in the table
#[must_use]
pub fn region_group(region: &str) -> Option<u8> {
    REGION_GROUPS
        .iter()
        .find(|(name, _)| *name == region)
        .map(|&(_, group)| group)
}

/// All regions known to the adjacency table
pub fn known_regions() -> impl Iterator<Item = &'static str> {
    REGION_GROUPS.iter().map(|&(name, _)| name)
}
