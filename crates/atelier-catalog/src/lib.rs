//! atelier-catalog: the built-in block and template gallery.
//!
//! Catalog entries are immutable source material: placing one clones it into
//! an [`Artifact`] draft via [`CatalogBlock::to_artifact`], and the store
//! mints the placement id. Nothing here mutates studio state.

mod blocks;
mod templates;

use atelier_core::{Artifact, Category};
use serde::{Deserialize, Serialize};

pub use blocks::builtin_blocks;
pub use templates::builtin_templates;

/// Publication state of a community-submitted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    OnReview,
    Posted,
    Featured,
}

/// Attribution shown on gallery cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

/// Display-only popularity counters for a template card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateStats {
    pub installs: String,
    pub views: String,
    pub likes: String,
}

/// One reusable UI block in the gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogBlock {
    /// Catalog id; placements derive their own id from it.
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub markup: String,
    pub free: bool,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

impl CatalogBlock {
    /// Clones this block into an artifact draft. The draft keeps the catalog
    /// id; `StudioStore::add_artifact` mints the placement id from it.
    pub fn to_artifact(&self) -> Artifact {
        Artifact {
            id: self.id.clone(),
            category: self.category,
            name: self.name.clone(),
            description: self.description.clone(),
            markup: self.markup.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// A curated multi-block page assembly in the gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub blocks: Vec<CatalogBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<TemplateStats>,
    #[serde(default)]
    pub featured: bool,
}
