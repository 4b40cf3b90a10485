//! Curated template gallery: multi-block page assemblies built from the
//! block catalog.

use crate::{builtin_blocks, Author, CatalogBlock, Template, TemplateStats};

/// Resolves a catalog id against the built-in gallery, falling back to the
/// first block when the id is unknown (some templates reference blocks that
/// rotate out of the catalog).
fn block_or_first(blocks: &[CatalogBlock], id: &str) -> CatalogBlock {
    blocks
        .iter()
        .find(|b| b.id == id)
        .unwrap_or(&blocks[0])
        .clone()
}

fn author(name: &str, avatar: &str) -> Option<Author> {
    Some(Author {
        name: name.to_string(),
        avatar: avatar.to_string(),
    })
}

fn stats(installs: &str, views: &str, likes: &str) -> Option<TemplateStats> {
    Some(TemplateStats {
        installs: installs.to_string(),
        views: views.to_string(),
        likes: likes.to_string(),
    })
}

/// The curated template gallery, in display order.
pub fn builtin_templates() -> Vec<Template> {
    let blocks = builtin_blocks();
    vec![
        Template {
            id: "tpl-automation-os".to_string(),
            name: "Neural Automation OS".to_string(),
            description: "Industrial cloud collaboration system with repo sync, asset management, and a neural status board.".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=800".to_string(),
            blocks: vec![
                block_or_first(&blocks, "alpine-nav-ultra"),
                block_or_first(&blocks, "git-repo-monitor"),
                block_or_first(&blocks, "drive-asset-explorer"),
                block_or_first(&blocks, "tax-bento-analytics"),
            ],
            author: author(
                "Optimer Cloud",
                "https://api.dicebear.com/7.x/shapes/svg?seed=cloud",
            ),
            stats: stats("12.4k", "35k", "1.8k"),
            featured: true,
        },
        Template {
            id: "tpl-alpine-ultra".to_string(),
            name: "Alpine Marketing Stack".to_string(),
            description: "High-performance responsive marketing site: fluid navigation, industrial landing page, AI-generated visuals.".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?auto=format&fit=crop&q=80&w=800".to_string(),
            blocks: vec![
                block_or_first(&blocks, "alpine-nav-ultra"),
                block_or_first(&blocks, "opt-hero-alpha"),
                block_or_first(&blocks, "magic-marquee-ultra"),
            ],
            author: author(
                "Alpine Team",
                "https://api.dicebear.com/7.x/shapes/svg?seed=alpine",
            ),
            stats: stats("18.2k", "65k", "2.4k"),
            featured: true,
        },
        Template {
            id: "tpl-taxonomy-neural".to_string(),
            name: "Taxonomy Neural Admin".to_string(),
            description: "Turnkey admin backend with full-matrix monitoring, neural analytics boards, and live data-flow control nodes.".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=800".to_string(),
            blocks: vec![
                block_or_first(&blocks, "alpine-nav-ultra"),
                block_or_first(&blocks, "tax-bento-analytics"),
                block_or_first(&blocks, "registry-form-ultra"),
            ],
            author: author(
                "Taxonomy Dev",
                "https://api.dicebear.com/7.x/shapes/svg?seed=taxonomy",
            ),
            stats: stats("9.4k", "42k", "1.1k"),
            featured: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_template_ids_unique() {
        let templates = builtin_templates();
        let ids: HashSet<String> = templates.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), templates.len());
    }

    #[test]
    fn test_unknown_block_id_falls_back_to_first() {
        let blocks = builtin_blocks();
        let resolved = block_or_first(&blocks, "does-not-exist");
        assert_eq!(resolved.id, blocks[0].id);
    }

    #[test]
    fn test_alpine_template_composition() {
        let templates = builtin_templates();
        let alpine = templates.iter().find(|t| t.id == "tpl-alpine-ultra").unwrap();
        assert_eq!(alpine.blocks[0].id, "alpine-nav-ultra");
        assert_eq!(alpine.blocks[1].id, "opt-hero-alpha");
    }
}
