// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::model::{CatalogueRecord, NodeKey, TreeNode};

pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeLimits {
    /// Maximum number of nesting levels, counting the root level.
    pub max_depth: usize,
}

impl Default for TreeLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeBuildError {
    #[error("catalogue node {key} is nested {depth} levels deep (max {max_depth})")]
    DepthExceeded {
        key: NodeKey,
        depth: usize,
        max_depth: usize,
    },
    #[error("duplicate catalogue id: {key}")]
    DuplicateKey { key: NodeKey },
}

/// Builds the navigable tree for `records`. Never fails and never mutates the input.
pub fn build_tree(records: &[CatalogueRecord]) -> Vec<TreeNode> {
    match build_with(records, |_, _| Ok::<(), Infallible>(())) {
        Ok(tree) => tree,
        Err(never) => match never {},
    }
}

/// Like [`build_tree`], but rejects over-deep nesting and duplicate ids.
pub fn build_tree_checked(
    records: &[CatalogueRecord],
    limits: TreeLimits,
) -> Result<Vec<TreeNode>, TreeBuildError> {
    let mut seen = HashSet::<NodeKey>::new();
    build_with(records, |record, level| {
        if level >= limits.max_depth {
            return Err(TreeBuildError::DepthExceeded {
                key: record.id.clone(),
                depth: level + 1,
                max_depth: limits.max_depth,
            });
        }
        if !seen.insert(record.id.clone()) {
            return Err(TreeBuildError::DuplicateKey {
                key: record.id.clone(),
            });
        }
        Ok(())
    })
}

struct Frame<'a> {
    record: &'a CatalogueRecord,
    level: usize,
    next_child: usize,
    built: Vec<TreeNode>,
}

impl<'a> Frame<'a> {
    fn new(record: &'a CatalogueRecord, level: usize) -> Self {
        Self {
            record,
            level,
            next_child: 0,
            built: Vec::with_capacity(record.children.len()),
        }
    }

    fn finish(self) -> TreeNode {
        TreeNode::new(
            self.record.id.clone(),
            self.record.display_name(),
            self.level,
            self.record.content.clone(),
            self.built,
        )
    }
}

fn build_with<E>(
    records: &[CatalogueRecord],
    mut visit: impl FnMut(&CatalogueRecord, usize) -> Result<(), E>,
) -> Result<Vec<TreeNode>, E> {
    let mut roots = Vec::with_capacity(records.len());
    let mut stack = Vec::<Frame<'_>>::new();
    let mut node_count = 0usize;

    for record in records {
        visit(record, 0)?;
        node_count += 1;
        stack.push(Frame::new(record, 0));

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.record.children.get(frame.next_child) {
                frame.next_child += 1;
                let level = frame.level + 1;
                visit(child, level)?;
                node_count += 1;
                stack.push(Frame::new(child, level));
                continue;
            }

            let Some(done) = stack.pop() else {
                break;
            };
            let node = done.finish();
            match stack.last_mut() {
                Some(parent) => parent.built.push(node),
                None => roots.push(node),
            }
        }
    }

    tracing::debug!(roots = roots.len(), nodes = node_count, "built catalogue tree");
    Ok(roots)
}
