//! Attribute comparison between a guessed fish and the target
//!
//! Each attribute is classified into one of three tiers:
//! - Exact (🟩): same value
//! - Close (🟨): adjacent size, or a region in the same adjacency group
//! - Wrong (⬜): anything else
//!
//! Size additionally carries a direction telling the player which way to move.

use super::fish::{Attribute, FishEntity, SizeClass};
use super::region::region_group;
use crate::error::{FishdleError, Result};
use serde::{Deserialize, Serialize};

/// Three-tier match classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Close,
    Wrong,
}

impl MatchKind {
    /// Share-grid square for this tier
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Close => '🟨',
            Self::Wrong => '⬜',
        }
    }
}

/// Which way the player should move on the size scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Target is larger than the guess
    Up,
    /// Target is smaller than the guess
    Down,
}

impl Direction {
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '↑',
            Self::Down => '↓',
        }
    }
}

/// Result for a single attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeComparison {
    /// The guessed fish's value for this attribute
    pub value: String,
    #[serde(rename = "match")]
    pub kind: MatchKind,
    #[serde(default)]
    pub direction: Option<Direction>,
}

impl AttributeComparison {
    fn plain(value: &str, kind: MatchKind) -> Self {
        Self {
            value: value.to_string(),
            kind,
            direction: None,
        }
    }
}

/// Per-attribute comparison of a guess against the target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub habitat: AttributeComparison,
    pub size: AttributeComparison,
    pub family: AttributeComparison,
    pub region: AttributeComparison,
}

impl Comparison {
    #[must_use]
    pub const fn get(&self, attribute: Attribute) -> &AttributeComparison {
        match attribute {
            Attribute::Habitat => &self.habitat,
            Attribute::Size => &self.size,
            Attribute::Family => &self.family,
            Attribute::Region => &self.region,
        }
    }

    /// Match tiers in share-grid order
    #[must_use]
    pub const fn kinds(&self) -> [MatchKind; 4] {
        [
            self.habitat.kind,
            self.size.kind,
            self.family.kind,
            self.region.kind,
        ]
    }

    /// Check if every attribute matched exactly
    #[must_use]
    pub fn is_all_exact(&self) -> bool {
        self.kinds().iter().all(|&k| k == MatchKind::Exact)
    }

    /// Convert to an emoji row like "⬜🟩⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.kinds().iter().map(|k| k.emoji()).collect()
    }
}

/// Compare `guessed` against `target` on all four attributes
///
/// # Errors
/// Returns `FishdleError::InvalidAttribute` if either fish has a size outside the
/// five-point scale or a region missing from the adjacency table.
///
/// # Examples
/// ```
/// use fishdle::core::{Attributes, FishEntity, MatchKind, compare};
///
/// let fish = |name: &str, size: &str, region: &str| FishEntity {
///     id: name.to_lowercase(),
///     name: name.to_string(),
///     scientific_name: String::new(),
///     attributes: Attributes {
///         habitat: "Open Ocean".to_string(),
///         size: size.to_string(),
///         family: "Scombridae".to_string(),
///         region: region.to_string(),
///     },
///     silhouette_ref: None,
/// };
///
/// let result = compare(&fish("Mackerel", "medium", "Atlantic"), &fish("Tuna", "large", "Arctic")).unwrap();
/// assert_eq!(result.size.kind, MatchKind::Close);
/// assert_eq!(result.region.kind, MatchKind::Close);
/// assert_eq!(result.to_emoji(), "🟩🟨🟩🟨");
/// ```
pub fn compare(guessed: &FishEntity, target: &FishEntity) -> Result<Comparison> {
    Ok(Comparison {
        habitat: compare_categorical(guessed, target, Attribute::Habitat),
        size: compare_size(guessed, target)?,
        family: compare_categorical(guessed, target, Attribute::Family),
        region: compare_region(guessed, target)?,
    })
}

fn compare_categorical(
    guessed: &FishEntity,
    target: &FishEntity,
    attribute: Attribute,
) -> AttributeComparison {
    let value = guessed.attribute(attribute);
    let kind = if value == target.attribute(attribute) {
        MatchKind::Exact
    } else {
        MatchKind::Wrong
    };
    AttributeComparison::plain(value, kind)
}

fn parse_size(fish: &FishEntity) -> Result<SizeClass> {
    SizeClass::parse(&fish.attributes.size).ok_or_else(|| FishdleError::InvalidAttribute {
        attribute: Attribute::Size,
        value: fish.attributes.size.clone(),
    })
}

fn compare_size(guessed: &FishEntity, target: &FishEntity) -> Result<AttributeComparison> {
    let delta = parse_size(guessed)?.ordinal() - parse_size(target)?.ordinal();

    let kind = match delta.abs() {
        0 => MatchKind::Exact,
        1 => MatchKind::Close,
        _ => MatchKind::Wrong,
    };
    let direction = match delta.signum() {
        1 => Some(Direction::Down),
        -1 => Some(Direction::Up),
        _ => None,
    };

    Ok(AttributeComparison {
        value: guessed.attributes.size.clone(),
        kind,
        direction,
    })
}

fn group_of(fish: &FishEntity) -> Result<u8> {
    region_group(&fish.attributes.region).ok_or_else(|| FishdleError::InvalidAttribute {
        attribute: Attribute::Region,
        value: fish.attributes.region.clone(),
    })
}

fn compare_region(guessed: &FishEntity, target: &FishEntity) -> Result<AttributeComparison> {
    let guessed_group = group_of(guessed)?;
    let target_group = group_of(target)?;

    let value = &guessed.attributes.region;
    let kind = if *value == target.attributes.region {
        MatchKind::Exact
    } else if guessed_group == target_group {
        MatchKind::Close
    } else {
        MatchKind::Wrong
    };
    Ok(AttributeComparison::plain(value, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fish::fixtures::{clownfish, fish, goldfish};

    fn sized(size: &str) -> FishEntity {
        fish(size, size, ["Reef", size, "Family", "Pacific"])
    }

    fn located(region: &str) -> FishEntity {
        fish(region, region, ["Reef", "small", "Family", region])
    }

    #[test]
    fn same_fish_is_all_exact() {
        let target = clownfish();
        let result = compare(&target, &target).unwrap();
        assert!(result.is_all_exact());
        assert_eq!(result.to_emoji(), "🟩🟩🟩🟩");
        assert_eq!(result.size.direction, None);
    }

    #[test]
    fn one_size_step_above_is_close_pointing_down() {
        let result = compare(&sized("medium"), &sized("small")).unwrap();
        assert_eq!(result.size.kind, MatchKind::Close);
        assert_eq!(result.size.direction, Some(Direction::Down));
    }

    #[test]
    fn two_size_steps_above_is_wrong() {
        let result = compare(&sized("large"), &sized("small")).unwrap();
        assert_eq!(result.size.kind, MatchKind::Wrong);
        assert_eq!(result.size.direction, Some(Direction::Down));
    }

    #[test]
    fn smaller_guess_points_up() {
        let result = compare(&sized("tiny"), &sized("giant")).unwrap();
        assert_eq!(result.size.kind, MatchKind::Wrong);
        assert_eq!(result.size.direction, Some(Direction::Up));

        let result = compare(&sized("large"), &sized("giant")).unwrap();
        assert_eq!(result.size.kind, MatchKind::Close);
        assert_eq!(result.size.direction, Some(Direction::Up));
    }

    #[test]
    fn atlantic_is_close_to_arctic() {
        let result = compare(&located("Atlantic"), &located("Arctic")).unwrap();
        assert_eq!(result.region.kind, MatchKind::Close);
        assert_eq!(result.region.direction, None);
    }

    #[test]
    fn freshwater_americas_is_wrong_for_pacific() {
        let result = compare(&located("Freshwater Americas"), &located("Pacific")).unwrap();
        assert_eq!(result.region.kind, MatchKind::Wrong);
    }

    #[test]
    fn distinct_freshwater_regions_are_wrong() {
        let result = compare(&located("Freshwater Asia"), &located("Freshwater Europe")).unwrap();
        assert_eq!(result.region.kind, MatchKind::Wrong);
    }

    #[test]
    fn goldfish_against_clownfish() {
        let result = compare(&goldfish(), &clownfish()).unwrap();
        assert_eq!(
            result.kinds(),
            [
                MatchKind::Wrong,
                MatchKind::Exact,
                MatchKind::Wrong,
                MatchKind::Wrong
            ]
        );
        assert_eq!(result.habitat.value, "Freshwater");
        assert_eq!(result.to_emoji(), "⬜🟩⬜⬜");
    }

    #[test]
    fn unknown_size_is_rejected() {
        let err = compare(&sized("colossal"), &sized("small")).unwrap_err();
        assert!(matches!(
            err,
            FishdleError::InvalidAttribute {
                attribute: Attribute::Size,
                ..
            }
        ));
    }

    #[test]
    fn unknown_target_region_is_rejected() {
        let err = compare(&located("Pacific"), &located("Atlantis")).unwrap_err();
        assert!(matches!(
            err,
            FishdleError::InvalidAttribute {
                attribute: Attribute::Region,
                ref value,
            } if value == "Atlantis"
        ));
    }

    #[test]
    fn comparison_serializes_with_match_key() {
        let result = compare(&sized("medium"), &sized("small")).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["size"]["match"], "close");
        assert_eq!(json["size"]["direction"], "down");
        assert_eq!(json["habitat"]["direction"], serde_json::Value::Null);
    }
}
