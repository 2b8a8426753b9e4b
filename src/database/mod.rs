//! Fish database
//!
//! An ordered, read-only collection of fish. Order matters: the daily
//! selector indexes into it, so reordering the data file changes every
//! day's target.

mod embedded;
pub mod loader;

pub use embedded::EMBEDDED_DATABASE;

use crate::core::{Attribute, FishEntity, SizeClass, region_group};
use crate::error::{FishdleError, Result};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct FishDatabase {
    fish: Vec<FishEntity>,
    by_id: FxHashMap<String, usize>,
}

impl FishDatabase {
    /// Build a database, rejecting empty or duplicate ids
    ///
    /// # Errors
    /// Returns `FishdleError::Configuration` if an id is empty or repeated.
    pub fn new(fish: Vec<FishEntity>) -> Result<Self> {
        let mut by_id = FxHashMap::default();
        for (index, entity) in fish.iter().enumerate() {
            if entity.id.trim().is_empty() {
                return Err(FishdleError::Configuration(format!(
                    "fish at position {index} ('{}') has an empty id",
                    entity.name
                )));
            }
            if by_id.insert(entity.id.clone(), index).is_some() {
                return Err(FishdleError::Configuration(format!(
                    "duplicate fish id '{}'",
                    entity.id
                )));
            }
        }
        Ok(Self { fish, by_id })
    }

    /// A database with no fish; selecting from it is a configuration error
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[FishEntity] {
        &self.fish
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FishEntity> {
        self.fish.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fish.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    /// Look up a fish by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FishEntity> {
        self.by_id.get(id).map(|&i| &self.fish[i])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Resolve free text to a fish by common or scientific name
    ///
    /// # Errors
    /// Returns `FishdleError::NotFound` if no fish has that name.
    pub fn find_by_name(&self, text: &str) -> Result<&FishEntity> {
        self.fish
            .iter()
            .find(|f| f.is_named(text))
            .ok_or_else(|| FishdleError::NotFound(text.trim().to_string()))
    }

    /// Autocomplete suggestions for a partial name
    ///
    /// Prefix matches come first, then names containing the query elsewhere,
    /// each group in database order. Matching is case-insensitive.
    #[must_use]
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&FishEntity> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let (mut prefix, contains): (Vec<_>, Vec<_>) = self
            .fish
            .iter()
            .filter_map(|f| {
                let name = f.name.to_lowercase();
                name.find(&query).map(|pos| (pos == 0, f))
            })
            .partition(|&(is_prefix, _)| is_prefix);

        prefix.extend(contains);
        prefix.into_iter().take(limit).map(|(_, f)| f).collect()
    }

    /// Every size or region value that falls outside its domain
    ///
    /// Such values make comparisons against that fish fail, so they are data
    /// authoring bugs to fix in the database file.
    #[must_use]
    pub fn attribute_issues(&self) -> Vec<(&FishEntity, FishdleError)> {
        let mut issues = Vec::new();
        for fish in &self.fish {
            if SizeClass::parse(&fish.attributes.size).is_none() {
                issues.push((
                    fish,
                    FishdleError::InvalidAttribute {
                        attribute: Attribute::Size,
                        value: fish.attributes.size.clone(),
                    },
                ));
            }
            if region_group(&fish.attributes.region).is_none() {
                issues.push((
                    fish,
                    FishdleError::InvalidAttribute {
                        attribute: Attribute::Region,
                        value: fish.attributes.region.clone(),
                    },
                ));
            }
        }
        issues
    }
}

impl<'a> IntoIterator for &'a FishDatabase {
    type Item = &'a FishEntity;
    type IntoIter = std::slice::Iter<'a, FishEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.fish.iter()
    }
}
