//! Fish entity representation
//!
//! A `FishEntity` is an immutable record loaded once from the database. Its four
//! comparable attributes are kept as the raw strings from the data file; domain
//! checks (size scale, region table) happen at comparison time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four comparable attributes, in fixed display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Habitat,
    Size,
    Family,
    Region,
}

impl Attribute {
    /// All attributes in share-grid order
    pub const ALL: [Self; 4] = [Self::Habitat, Self::Size, Self::Family, Self::Region];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Habitat => "habitat",
            Self::Size => "size",
            Self::Family => "family",
            Self::Region => "region",
        }
    }

    /// Parse a lowercase or capitalised attribute name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Position of this attribute in `ALL`
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Five-point ordinal size scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeClass {
    Tiny,
    Small,
    Medium,
    Large,
    Giant,
}

impl SizeClass {
    /// Parse a size value as written in the database (`"tiny"` .. `"giant"`)
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tiny" => Some(Self::Tiny),
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "giant" => Some(Self::Giant),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> i8 {
        self as i8
    }
}

/// The comparable attribute values of a fish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub habitat: String,
    pub size: String,
    pub family: String,
    pub region: String,
}

impl Attributes {
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Habitat => &self.habitat,
            Attribute::Size => &self.size,
            Attribute::Family => &self.family,
            Attribute::Region => &self.region,
        }
    }
}

/// A fish species record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishEntity {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    pub attributes: Attributes,
    /// Reference to a silhouette asset, relative to the asset root
    #[serde(default, rename = "silhouette", skip_serializing_if = "Option::is_none")]
    pub silhouette_ref: Option<String>,
}

impl FishEntity {
    #[must_use]
    pub fn attribute(&self, attribute: Attribute) -> &str {
        self.attributes.get(attribute)
    }

    /// Whether `text` names this fish (common or scientific name, case-insensitive)
    #[must_use]
    pub fn is_named(&self, text: &str) -> bool {
        let text = text.trim();
        self.name.eq_ignore_ascii_case(text) || self.scientific_name.eq_ignore_ascii_case(text)
    }
}

impl fmt::Display for FishEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Attributes, FishEntity};

    pub fn fish(id: &str, name: &str, attrs: [&str; 4]) -> FishEntity {
        FishEntity {
            id: id.to_string(),
            name: name.to_string(),
            scientific_name: format!("{name} scientificus"),
            attributes: Attributes {
                habitat: attrs[0].to_string(),
                size: attrs[1].to_string(),
                family: attrs[2].to_string(),
                region: attrs[3].to_string(),
            },
            silhouette_ref: None,
        }
    }

    pub fn clownfish() -> FishEntity {
        fish("clownfish", "Clownfish", ["Reef", "small", "Pomacentridae", "Pacific"])
    }

    pub fn goldfish() -> FishEntity {
        fish(
            "goldfish",
            "Goldfish",
            ["Freshwater", "small", "Cyprinidae", "Freshwater Americas"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::clownfish;
    use super::*;

    #[test]
    fn attribute_order_is_fixed() {
        let names: Vec<_> = Attribute::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["habitat", "size", "family", "region"]);
        assert_eq!(Attribute::Family.index(), 2);
    }

    #[test]
    fn attribute_from_name_ignores_case() {
        assert_eq!(Attribute::from_name("Region"), Some(Attribute::Region));
        assert_eq!(Attribute::from_name(" size "), Some(Attribute::Size));
        assert_eq!(Attribute::from_name("colour"), None);
    }

    #[test]
    fn size_scale_is_ordered() {
        assert!(SizeClass::Tiny < SizeClass::Giant);
        assert_eq!(SizeClass::parse("Medium"), Some(SizeClass::Medium));
        assert_eq!(SizeClass::parse("huge"), None);
        assert_eq!(SizeClass::Large.ordinal() - SizeClass::Small.ordinal(), 2);
    }

    #[test]
    fn entity_deserializes_from_database_shape() {
        let json = r#"{
            "id": "clownfish",
            "name": "Clownfish",
            "scientificName": "Amphiprion ocellaris",
            "attributes": {"habitat": "Reef", "size": "small", "family": "Pomacentridae", "region": "Pacific"},
            "silhouette": "clownfish.svg"
        }"#;
        let fish: FishEntity = serde_json::from_str(json).unwrap();
        assert_eq!(fish.scientific_name, "Amphiprion ocellaris");
        assert_eq!(fish.attribute(Attribute::Region), "Pacific");
        assert_eq!(fish.silhouette_ref.as_deref(), Some("clownfish.svg"));
    }

    #[test]
    fn entity_matches_common_and_scientific_names() {
        let fish = clownfish();
        assert!(fish.is_named("clownfish"));
        assert!(fish.is_named("  CLOWNFISH "));
        assert!(fish.is_named("clownfish scientificus"));
        assert!(!fish.is_named("clown"));
    }
}
