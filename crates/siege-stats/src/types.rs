//! Core data types for the preloaded stats state and the reshaped output.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Logical output category, independent of the versioned upstream keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Seasons,
    Ranks,
    Operators,
    Weapons,
    Maps,
}

impl Category {
    /// Every category, in response order.
    pub const ALL: [Category; 5] = [
        Category::Seasons,
        Category::Ranks,
        Category::Operators,
        Category::Weapons,
        Category::Maps,
    ];

    /// The slug used both as upstream sub-field name and output key.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Seasons => "seasons",
            Category::Ranks => "ranks",
            Category::Operators => "operators",
            Category::Weapons => "weapons",
            Category::Maps => "maps",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Weapon classification used to bucket loadouts and weapons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeaponType {
    Primary,
    Secondary,
    Gadget,
    UniqueAbility,
}

impl WeaponType {
    /// Parse an upstream tag. Returns `None` for anything outside the
    /// supported set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "primary" => Some(WeaponType::Primary),
            "secondary" => Some(WeaponType::Secondary),
            "gadget" => Some(WeaponType::Gadget),
            "unique-ability" => Some(WeaponType::UniqueAbility),
            _ => None,
        }
    }
}

/// Entries grouped by weapon type. Only types that occur in the input appear.
pub type WeaponBucket<T> = BTreeMap<WeaponType, Vec<T>>;

/// The `ContentfulGraphQl` object: versioned keys mapped to content objects.
#[derive(Debug, Clone, Default)]
pub struct RawPayload {
    entries: Map<String, Value>,
}

impl RawPayload {
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One routed slice of the payload, waiting for its category mapper.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedEntry {
    pub category: Category,
    /// The raw key this entry was taken from.
    pub source_key: String,
    pub data: Value,
}

/// A season (operation) summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub slug: String,
    pub title: String,
    /// Passed through as published, `null` included.
    pub start_date: Value,
}

/// A ranked tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rank {
    pub slug: String,
    /// Absent when upstream publishes localized text without a title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub picture: String,
}

/// An operator and their loadout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub slug: String,
    pub name: String,
    pub icon: String,
    /// Loadout slugs grouped by weapon type.
    pub loadouts: WeaponBucket<String>,
    /// Role tags, passed through as published.
    pub roles: Value,
    pub organization: Organization,
}

/// The faction an operator belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub icon: String,
}

/// A weapon or gadget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A playable map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameMap {
    pub slug: String,
    pub title: String,
    pub image: String,
    pub background: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sites: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlists: Option<Value>,
    pub details: MapDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
}

/// Output of one category mapper, tagged with its category.
#[derive(Debug, Clone, PartialEq)]
pub enum MappedCategory {
    Seasons(Vec<Season>),
    Ranks(Vec<Rank>),
    Operators(Vec<Operator>),
    Weapons(WeaponBucket<Weapon>),
    Maps(Vec<GameMap>),
}

impl MappedCategory {
    pub fn category(&self) -> Category {
        match self {
            MappedCategory::Seasons(_) => Category::Seasons,
            MappedCategory::Ranks(_) => Category::Ranks,
            MappedCategory::Operators(_) => Category::Operators,
            MappedCategory::Weapons(_) => Category::Weapons,
            MappedCategory::Maps(_) => Category::Maps,
        }
    }
}

/// The aggregate response served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub seasons: Vec<Season>,
    pub ranks: Vec<Rank>,
    pub operators: Vec<Operator>,
    pub weapons: WeaponBucket<Weapon>,
    pub maps: Vec<GameMap>,
}

/// Errors that can occur anywhere in the stats pipeline.
#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    #[error("Fetch error for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Extraction error: no `window.{0}` assignment found in page")]
    Extraction(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Unexpected {category} shape: {source}")]
    Shape {
        category: Category,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported weapon type [{weapon_type}] in {context}")]
    UnsupportedWeaponType {
        weapon_type: String,
        context: &'static str,
    },

    #[error("Missing category: {0}")]
    MissingCategory(Category),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenience result type.
pub type StatsResult<T> = Result<T, StatsError>;
