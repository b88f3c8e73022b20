//! The on-disk shape of the multi-partition news document.

use serde::{Deserialize, Serialize};

use newsroom_entity::{NewsItem, Region};

/// One partition's collections: news items plus the category list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartitionData {
    /// News items, in insertion order.
    #[serde(default)]
    pub news: Vec<NewsItem>,
    /// Category names, in insertion order, unique within the partition.
    #[serde(default, rename = "newsCategories")]
    pub news_categories: Vec<String>,
}

/// The whole store as persisted in one JSON document.
///
/// The global partition's collections sit flattened at the top level and
/// each continental region under its kebab-case key, so an existing
/// `db.json` round-trips byte-compatibly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsDocument {
    /// Global partition (top-level `news`/`newsCategories` keys).
    #[serde(flatten)]
    pub global: PartitionData,
    #[serde(default)]
    pub africa: PartitionData,
    #[serde(default)]
    pub asia: PartitionData,
    #[serde(default)]
    pub australia: PartitionData,
    #[serde(default)]
    pub europe: PartitionData,
    #[serde(default, rename = "north-america")]
    pub north_america: PartitionData,
    #[serde(default, rename = "south-america")]
    pub south_america: PartitionData,
}

impl NewsDocument {
    /// The partition owned by `region`.
    pub fn partition(&self, region: Region) -> &PartitionData {
        match region {
            Region::Global => &self.global,
            Region::Africa => &self.africa,
            Region::Asia => &self.asia,
            Region::Australia => &self.australia,
            Region::Europe => &self.europe,
            Region::NorthAmerica => &self.north_america,
            Region::SouthAmerica => &self.south_america,
        }
    }

    /// Mutable access to the partition owned by `region`.
    pub fn partition_mut(&mut self, region: Region) -> &mut PartitionData {
        match region {
            Region::Global => &mut self.global,
            Region::Africa => &mut self.africa,
            Region::Asia => &mut self.asia,
            Region::Australia => &mut self.australia,
            Region::Europe => &mut self.europe,
            Region::NorthAmerica => &mut self.north_america,
            Region::SouthAmerica => &mut self.south_america,
        }
    }
}
