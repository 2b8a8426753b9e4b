//! Silhouette assets
//!
//! A fish's `silhouette` reference is fetched from an [`AssetSource`]. When the
//! reference is missing or unreadable a procedural SVG is used instead, picked
//! from the fish's common name so every fish still gets a plausible outline.

use crate::core::FishEntity;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Somewhere silhouette markup can be read from
pub trait AssetSource {
    /// Fetch the markup stored under `reference`
    ///
    /// # Errors
    /// Returns an I/O error when the asset does not exist or cannot be read.
    fn fetch(&self, reference: &str) -> io::Result<String>;
}

/// Assets stored as files under a root directory
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for DirAssetSource {
    fn fetch(&self, reference: &str) -> io::Result<String> {
        let relative = Path::new(reference);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("asset reference '{reference}' escapes the asset root"),
            ));
        }
        fs::read_to_string(self.root.join(relative))
    }
}

/// Procedural outline families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Shark,
    Ray,
    Eel,
    Puffer,
    Seahorse,
    Flatfish,
    Fish,
}

impl Shape {
    /// Word-prefix rules, checked in order
    const RULES: &'static [(&'static [&'static str], Self)] = &[
        (&["shark"], Self::Shark),
        (&["ray", "stingray", "skate", "manta"], Self::Ray),
        (&["eel"], Self::Eel),
        (&["puffer"], Self::Puffer),
        (&["seahorse"], Self::Seahorse),
        (&["flounder", "halibut", "sole", "flatfish"], Self::Flatfish),
    ];

    /// Pick a shape from a common name
    ///
    /// A rule applies when any word of the name starts with one of its needles,
    /// ignoring case, so "Pufferfish" is a puffer while "Murray Cod" is not a ray.
    ///
    /// # Examples
    /// ```
    /// use fishdle::silhouette::Shape;
    ///
    /// assert_eq!(Shape::for_name("Great White Shark"), Shape::Shark);
    /// assert_eq!(Shape::for_name("Manta Ray"), Shape::Ray);
    /// assert_eq!(Shape::for_name("Clownfish"), Shape::Fish);
    /// ```
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        let name = name.to_lowercase();
        let words: Vec<&str> = name
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        Self::RULES
            .iter()
            .find(|(needles, _)| {
                needles
                    .iter()
                    .any(|n| words.iter().any(|w| w.starts_with(n)))
            })
            .map_or(Self::Fish, |&(_, shape)| shape)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shark => "shark",
            Self::Ray => "ray",
            Self::Eel => "eel",
            Self::Puffer => "puffer",
            Self::Seahorse => "seahorse",
            Self::Flatfish => "flatfish",
            Self::Fish => "fish",
        }
    }

    const fn path(self) -> &'static str {
        match self {
            Self::Shark => {
                "M10 55 Q60 30 120 40 L135 10 L145 42 Q170 45 190 30 L182 55 L190 80 Q170 65 145 68 Q90 80 10 55 Z"
            }
            Self::Ray => "M100 20 Q140 40 190 60 Q140 75 105 90 L100 140 L95 90 Q60 75 10 60 Q60 40 100 20 Z",
            Self::Eel => "M10 60 Q40 40 70 60 T130 60 T190 55 Q180 70 130 68 T70 68 T10 60 Z",
            Self::Puffer => "M40 60 A45 40 0 1 1 130 60 A45 40 0 1 1 40 60 Z M130 60 L165 40 L160 60 L165 80 Z",
            Self::Seahorse => "M90 15 Q120 15 115 40 L135 45 L115 55 Q130 90 105 115 Q90 135 110 145 Q80 145 90 115 Q100 80 85 55 Q70 35 90 15 Z",
            Self::Flatfish => "M20 60 Q80 15 150 45 L185 25 L180 60 L185 95 L150 75 Q80 105 20 60 Z",
            Self::Fish => "M20 60 Q70 20 130 50 L175 25 L165 60 L175 95 L130 70 Q70 100 20 60 Z",
        }
    }

    /// Standalone SVG document for this shape
    #[must_use]
    pub fn svg(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 200 150\" data-shape=\"{}\">\
             <path d=\"{}\" fill=\"currentColor\"/></svg>",
            self.label(),
            self.path()
        )
    }
}

/// Resolved silhouette for one fish
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Silhouette {
    Asset { reference: String, markup: String },
    Fallback { shape: Shape, markup: String },
}

impl Silhouette {
    #[must_use]
    pub fn markup(&self) -> &str {
        match self {
            Self::Asset { markup, .. } | Self::Fallback { markup, .. } => markup,
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Procedural silhouette for a fish
#[must_use]
pub fn fallback(entity: &FishEntity) -> Silhouette {
    let shape = Shape::for_name(&entity.name);
    Silhouette::Fallback {
        shape,
        markup: shape.svg(),
    }
}

/// Resolve the silhouette of `entity`, falling back to a procedural outline
pub fn resolve<A: AssetSource + ?Sized>(source: &A, entity: &FishEntity) -> Silhouette {
    let Some(reference) = entity.silhouette_ref.as_deref() else {
        log::debug!("{} has no silhouette asset", entity.id);
        return fallback(entity);
    };

    match source.fetch(reference) {
        Ok(markup) => Silhouette::Asset {
            reference: reference.to_string(),
            markup,
        },
        Err(e) => {
            log::warn!("silhouette '{reference}' for {} unavailable: {e}", entity.id);
            fallback(entity)
        }
    }
}
