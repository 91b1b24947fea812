// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::catalogue::CatalogueRecord;
use super::ids::NodeKey;

pub(crate) fn key(value: &str) -> NodeKey {
    NodeKey::new(value).expect("node key")
}

pub(crate) fn leaf(id: &str, name: &str, content: Option<&str>) -> CatalogueRecord {
    let record = CatalogueRecord::new(key(id), name);
    match content {
        Some(content) => record.with_content(content),
        None => record,
    }
}

pub(crate) fn parent(id: &str, name: &str, children: Vec<CatalogueRecord>) -> CatalogueRecord {
    CatalogueRecord::new(key(id), name).with_children(children)
}

pub(crate) const ARCHITECTURE_DOC: &str = "\
# Architecture

Intro paragraph.

## Request flow

```mermaid
flowchart LR
    subgraph Api Layer
    A[Client] --> B[Gateway]
    end
```

## Storage

```rust
// # not a heading
fn main() {}
```

### Details
";

/// overview/{intro (empty), architecture}, modules/core/{tree, render}, faq (no content).
pub(crate) fn sample_catalogue() -> Vec<CatalogueRecord> {
    vec![
        parent(
            "overview",
            "Overview",
            vec![
                leaf("intro", "Introduction", Some("")),
                leaf("architecture", "Architecture", Some(ARCHITECTURE_DOC)),
            ],
        ),
        parent(
            "modules",
            "Modules",
            vec![parent(
                "core",
                "Core",
                vec![
                    leaf("tree", "Tree", Some("# Tree\nbuilds nodes")),
                    leaf("render", "Render", Some("# Render")),
                ],
            )],
        ),
        leaf("faq", "FAQ", None),
    ]
}

/// A linear chain `d0 -> d1 -> ... -> d{depth-1}` ending in a leaf with content.
pub(crate) fn deep_chain(depth: usize) -> Vec<CatalogueRecord> {
    let mut node = leaf(&format!("d{}", depth - 1), "deepest", Some("bottom"));
    for level in (0..depth - 1).rev() {
        node = parent(&format!("d{level}"), "level", vec![node]);
    }
    vec![node]
}

/// A flat payload where `c{n}` names `c{n-1}` as its parent, listed leaf-first.
pub(crate) fn flat_chain(len: usize) -> Vec<CatalogueRecord> {
    (0..len)
        .rev()
        .map(|idx| {
            let record = leaf(&format!("c{idx}"), "link", Some("text"));
            match idx.checked_sub(1) {
                Some(parent) => record.with_parent(key(&format!("c{parent}"))),
                None => record,
            }
        })
        .collect()
}
