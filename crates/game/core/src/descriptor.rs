//! Identity and flavor metadata for named entities.

use std::collections::BTreeSet;

/// Name, description and classification of an item or character.
///
/// `name` is the identity key inside every container: two items with the same
/// name occupy the same entry even when they are distinct instances.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Descriptor {
    pub name: String,
    pub description: String,
    pub category: String,
    pub sub_category: String,
    pub tags: BTreeSet<String>,
}

impl Descriptor {
    pub const UNKNOWN_NAME: &'static str = "Unknown";
    pub const NO_CATEGORY: &'static str = "NO_CATEGORY";

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = sub_category.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// True when `label` is this entity's category or sub-category.
    pub fn is_a(&self, label: &str) -> bool {
        self.category == label || self.sub_category == label
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

impl Default for Descriptor {
    fn default() -> Self {
        Self {
            name: Self::UNKNOWN_NAME.to_owned(),
            description: String::new(),
            category: Self::NO_CATEGORY.to_owned(),
            sub_category: String::new(),
            tags: BTreeSet::new(),
        }
    }
}
