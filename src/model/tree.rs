// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::NodeKey;

/// A navigable catalogue node.
///
/// Nodes are immutable once built. Leaf-ness is derived from `children`, so a node is a leaf
/// exactly when it has no children; only leaves carry displayable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    key: NodeKey,
    title: String,
    level: usize,
    content: Option<String>,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub(crate) fn new(
        key: NodeKey,
        title: impl Into<String>,
        level: usize,
        content: Option<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            key,
            title: title.into(),
            level,
            content,
            children,
        }
    }

    pub fn key(&self) -> &NodeKey {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Depth from the root level (`0`).
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// `true` when the node has non-empty content.
    pub fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|content| !content.is_empty())
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
