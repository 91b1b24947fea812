// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::slice;

use crate::model::{ExpansionState, NodeKey, TreeNode};

/// Result of looking up a key: the node, tagged with whether it may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Located<'a> {
    Leaf(&'a TreeNode),
    /// Parents are structural only; selecting one is a no-op.
    Parent(&'a TreeNode),
}

impl<'a> Located<'a> {
    pub fn node(self) -> &'a TreeNode {
        match self {
            Self::Leaf(node) | Self::Parent(node) => node,
        }
    }

    pub fn is_parent(self) -> bool {
        matches!(self, Self::Parent(_))
    }
}

/// Depth-first, left-to-right (pre-order) iterator over a tree.
#[derive(Debug, Clone)]
pub struct DepthFirst<'a> {
    stack: Vec<slice::Iter<'a, TreeNode>>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(node) => {
                    if !node.children().is_empty() {
                        self.stack.push(node.children().iter());
                    }
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

pub fn walk(tree: &[TreeNode]) -> DepthFirst<'_> {
    DepthFirst {
        stack: vec![tree.iter()],
    }
}

/// The first leaf (depth-first, left-to-right) whose content is non-empty.
pub fn find_first_leaf_with_content(tree: &[TreeNode]) -> Option<&TreeNode> {
    walk(tree).find(|node| node.is_leaf() && node.has_content())
}

pub fn find_by_key<'a>(tree: &'a [TreeNode], key: &NodeKey) -> Option<&'a TreeNode> {
    walk(tree).find(|node| node.key() == key)
}

/// Looks up `key` and reports whether it names a leaf or a parent.
pub fn locate<'a>(tree: &'a [TreeNode], key: &NodeKey) -> Option<Located<'a>> {
    find_by_key(tree, key).map(|node| {
        if node.is_leaf() {
            Located::Leaf(node)
        } else {
            Located::Parent(node)
        }
    })
}

/// First-level nodes that have children; the catalogue opens with these expanded.
pub fn initial_expansion(tree: &[TreeNode]) -> Vec<NodeKey> {
    tree.iter()
        .filter(|node| node.is_parent())
        .map(|node| node.key().clone())
        .collect()
}

/// Rows currently visible in the catalogue: pre-order, skipping children of collapsed parents.
pub fn visible_rows<'a>(tree: &'a [TreeNode], expansion: &ExpansionState) -> Vec<&'a TreeNode> {
    let mut rows = Vec::new();
    let mut stack = vec![tree.iter()];
    while let Some(top) = stack.last_mut() {
        let Some(node) = top.next() else {
            stack.pop();
            continue;
        };
        rows.push(node);
        if node.is_parent() && expansion.is_expanded(node.key()) {
            stack.push(node.children().iter());
        }
    }
    rows
}
