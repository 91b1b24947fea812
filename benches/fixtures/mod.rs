// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::fmt::Write as _;

use wikiview::model::{CatalogueRecord, NodeKey, TreeNode};

fn key(value: String) -> NodeKey {
    NodeKey::new(value).expect("valid node key")
}

pub fn checksum_tree(tree: &[TreeNode]) -> u64 {
    let mut acc = 0u64;
    for node in wikiview::query::walk(tree) {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(node.key().as_str().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(node.level() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(node.content().map_or(0, str::len) as u64);
    }
    acc
}

/// A markdown document with `sections` headings, each followed by prose and, every
/// `diagram_every` sections, a fenced diagram with a grouping block.
pub fn document(sections: usize, diagram_every: usize) -> String {
    let mut out = String::from("# Generated document\n\nIntro paragraph.\n\n");
    for idx in 0..sections {
        let level = 2 + idx % 2;
        let _ = writeln!(out, "{} Section {idx}\n", "#".repeat(level));
        let _ = writeln!(out, "Body text for section {idx}, with `inline code` and a [link](#x).\n");
        if diagram_every > 0 && idx % diagram_every == 0 {
            let _ = writeln!(
                out,
                "```mermaid\nflowchart TD\n    subgraph Group {idx} (auto)\n    A{idx}[Start] --> B{idx}[End]\n    end\n```\n"
            );
        }
        if idx % 5 == 4 {
            let _ = writeln!(out, "```rust\n// # not a heading\nfn section_{idx}() {{}}\n```\n");
        }
    }
    out
}

pub mod catalogue {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ShapeParams {
        pub roots: usize,
        pub fanout: usize,
        pub depth: usize,
        pub sections: usize,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Wide,
        Deep,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Wide => "wide",
                Self::Deep => "deep",
            }
        }

        pub const fn params(self) -> ShapeParams {
            match self {
                Self::Small => ShapeParams {
                    roots: 4,
                    fanout: 3,
                    depth: 2,
                    sections: 4,
                },
                Self::Wide => ShapeParams {
                    roots: 40,
                    fanout: 12,
                    depth: 2,
                    sections: 8,
                },
                Self::Deep => ShapeParams {
                    roots: 2,
                    fanout: 2,
                    depth: 10,
                    sections: 2,
                },
            }
        }
    }

    /// Nested payload: `roots` top-level sections, each a complete `fanout`-ary tree of `depth`
    /// levels whose leaves carry a generated document.
    pub fn nested(params: ShapeParams) -> Vec<CatalogueRecord> {
        let body = document(params.sections, 3);
        (0..params.roots)
            .map(|root| subtree(format!("r{root}"), 1, params, &body))
            .collect()
    }

    fn subtree(id: String, level: usize, params: ShapeParams, body: &str) -> CatalogueRecord {
        let record = CatalogueRecord::new(key(id.clone()), format!("Node {id}"));
        if level >= params.depth {
            return record.with_content(body);
        }
        let children = (0..params.fanout)
            .map(|child| subtree(format!("{id}.{child}"), level + 1, params, body))
            .collect();
        record.with_children(children)
    }

    /// The same shape as [`nested`], flattened with `parent_id` links, children listed before
    /// their parents.
    pub fn flat(params: ShapeParams) -> Vec<CatalogueRecord> {
        let mut out = Vec::new();
        let mut stack = nested(params)
            .into_iter()
            .map(|record| (record, None::<NodeKey>))
            .collect::<Vec<_>>();
        while let Some((mut record, parent)) = stack.pop() {
            let children = std::mem::take(&mut record.children);
            for child in children {
                stack.push((child, Some(record.id.clone())));
            }
            record.parent_id = parent;
            out.push(record);
        }
        out.reverse();
        out
    }
}
