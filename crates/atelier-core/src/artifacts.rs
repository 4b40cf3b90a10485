//! Placed artifacts and the ordered collection that manages them.
//!
//! Order is meaningful: it is the vertical stacking of blocks on the canvas.
//! Content is immutable after placement; only position changes (adjacent
//! swaps) and removal are allowed. Missing ids and boundary moves degrade to
//! no-ops with a `false` return, never errors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ident;

/// Closed category set for catalog blocks and placed artifacts.
///
/// Informational grouping only; nothing validates an artifact's category
/// against collection membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Blog,
    Card,
    #[serde(rename = "CTA")]
    Cta,
    Dashboard,
    Footer,
    Gallery,
    Hero,
    Navbar,
    Pricing,
    Product,
    Stat,
    Table,
    Mobile,
    Geo,
    #[serde(rename = "API")]
    Api,
    Storage,
    Link,
    Docs,
    Form,
    Nav,
    Feedback,
    Interview,
    Visuals,
    Build,
    Skeleton,
    StyleGuide,
    ImageLab,
    Present,
    Quality,
    Interaction,
    Config,
    TypeScript,
    Styling,
    Orchestra,
    CrossPlatform,
    DashboardPro,
    MicroUtils,
    Overlay,
    Scaffold,
    Inspector,
    Random,
    RemoteTesting,
    Gesture,
    CloudOps,
    MessageBox,
    Toast,
    SmartGesture,
    DataVis,
    Revisioning,
    SlushBuild,
    ImageCropper,
    DatePicker,
    #[serde(rename = "ReactiveUI")]
    ReactiveUi,
    Community,
    Function,
    Gateway,
}

/// Direction of a single-step reorder on the canvas stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    /// Toward index 0 (top of the stack).
    Up,
    /// Away from index 0 (bottom of the stack).
    Down,
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveDirection::Up => write!(f, "up"),
            MoveDirection::Down => write!(f, "down"),
        }
    }
}

/// One placed UI block instance on the canvas.
///
/// The `id` is assigned at placement time and is distinct from the catalog
/// id the block was cloned from. Everything except position is immutable
/// after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    pub category: Category,
    pub name: String,
    pub description: String,
    pub markup: String,
    pub tags: Vec<String>,
}

/// Ordered sequence of placed artifacts. Ids are pairwise distinct.
#[derive(Debug, Default)]
pub struct ArtifactCollection {
    items: Vec<Artifact>,
}

impl ArtifactCollection {
    /// Appends `artifact` at the end of the stack, minting a fresh placement
    /// id (prefixed by the incoming id, usually the catalog id it was cloned
    /// from). Returns the stored copy. Always succeeds.
    pub fn append(&mut self, mut artifact: Artifact) -> Artifact {
        let minted = if artifact.id.is_empty() {
            ident::next_id(None)
        } else {
            ident::next_id(Some(&artifact.id))
        };
        artifact.id = minted;
        self.items.push(artifact.clone());
        artifact
    }

    /// Removes the artifact with `id`. Returns whether anything was removed;
    /// an unknown id is a no-op, not an error.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        match self.items.iter().position(|a| a.id == id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Swaps the artifact with `id` with its neighbor in `direction`.
    /// Returns whether a move occurred; boundary moves and unknown ids are
    /// no-ops returning `false`.
    pub fn move_by_id(&mut self, id: &str, direction: MoveDirection) -> bool {
        let Some(idx) = self.items.iter().position(|a| a.id == id) else {
            return false;
        };
        let target = match direction {
            MoveDirection::Up => idx.checked_sub(1),
            MoveDirection::Down => (idx + 1 < self.items.len()).then_some(idx + 1),
        };
        let Some(target) = target else {
            return false;
        };
        self.items.swap(idx, target);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Order-preserving copy of the stack.
    pub fn snapshot(&self) -> Vec<Artifact> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn draft(catalog_id: &str, name: &str) -> Artifact {
        Artifact {
            id: catalog_id.to_string(),
            category: Category::Hero,
            name: name.to_string(),
            description: "test block".to_string(),
            markup: "<section></section>".to_string(),
            tags: vec!["Hero".to_string()],
        }
    }

    #[test]
    fn test_append_assigns_fresh_distinct_ids() {
        let mut coll = ArtifactCollection::default();
        let mut ids = HashSet::new();
        for i in 0..20 {
            let stored = coll.append(draft("opt-hero-alpha", &format!("HERO_{}", i)));
            assert!(stored.id.starts_with("opt-hero-alpha-"));
            assert_ne!(stored.id, "opt-hero-alpha");
            ids.insert(stored.id);
        }
        assert_eq!(coll.len(), 20);
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_remove_by_id_exactly_once() {
        let mut coll = ArtifactCollection::default();
        let stored = coll.append(draft("b", "B"));
        assert!(coll.remove_by_id(&stored.id));
        assert!(!coll.remove_by_id(&stored.id));
        assert!(coll.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut coll = ArtifactCollection::default();
        coll.append(draft("b", "B"));
        assert!(!coll.remove_by_id("no-such-id"));
        assert_eq!(coll.len(), 1);
    }

    #[test]
    fn test_move_boundaries_are_noops() {
        let mut coll = ArtifactCollection::default();
        let first = coll.append(draft("a", "A"));
        let last = coll.append(draft("b", "B"));
        assert!(!coll.move_by_id(&first.id, MoveDirection::Up));
        assert!(!coll.move_by_id(&last.id, MoveDirection::Down));
        let order: Vec<String> = coll.snapshot().into_iter().map(|a| a.name).collect();
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn test_move_unknown_id() {
        let mut coll = ArtifactCollection::default();
        coll.append(draft("a", "A"));
        assert!(!coll.move_by_id("ghost", MoveDirection::Down));
    }

    #[test]
    fn test_move_scenario_x_y_z() {
        let mut coll = ArtifactCollection::default();
        coll.append(draft("x", "X"));
        let y = coll.append(draft("y", "Y"));
        coll.append(draft("z", "Z"));

        assert!(coll.move_by_id(&y.id, MoveDirection::Up));
        let order: Vec<String> = coll.snapshot().into_iter().map(|a| a.name).collect();
        assert_eq!(order, vec!["Y", "X", "Z"]);

        assert!(coll.move_by_id(&y.id, MoveDirection::Down));
        assert!(coll.move_by_id(&y.id, MoveDirection::Down));
        let order: Vec<String> = coll.snapshot().into_iter().map(|a| a.name).collect();
        assert_eq!(order, vec!["X", "Z", "Y"]);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut coll = ArtifactCollection::default();
        coll.append(draft("a", "A"));
        let mut snap = coll.snapshot();
        snap.clear();
        assert_eq!(coll.len(), 1);
    }

    #[test]
    fn test_category_wire_spelling() {
        assert_eq!(serde_json::to_string(&Category::Cta).unwrap(), "\"CTA\"");
        assert_eq!(
            serde_json::to_string(&Category::ReactiveUi).unwrap(),
            "\"ReactiveUI\""
        );
        let back: Category = serde_json::from_str("\"Navbar\"").unwrap();
        assert_eq!(back, Category::Navbar);
    }
}
