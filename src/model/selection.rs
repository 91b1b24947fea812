// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use super::ids::NodeKey;
use super::tree::TreeNode;

/// The document currently shown in the viewport.
///
/// `active_key`, when set, always names a leaf node: [`SelectionState::select_leaf`] refuses
/// parents and leaves the state untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    active_key: Option<NodeKey>,
    title: String,
    body_text: String,
}

impl SelectionState {
    pub fn active_key(&self) -> Option<&NodeKey> {
        self.active_key.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    pub fn is_empty(&self) -> bool {
        self.active_key.is_none()
    }

    /// Points the selection at `node`. Returns `false` (no-op) for parent nodes.
    pub fn select_leaf(&mut self, node: &TreeNode) -> bool {
        if node.is_parent() {
            return false;
        }
        self.active_key = Some(node.key().clone());
        self.title = node.title().to_owned();
        self.body_text = node.content().unwrap_or_default().to_owned();
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Which parent nodes are expanded in the catalogue tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<NodeKey>,
}

impl ExpansionState {
    pub fn from_keys(keys: impl IntoIterator<Item = NodeKey>) -> Self {
        Self {
            expanded: keys.into_iter().collect(),
        }
    }

    pub fn is_expanded(&self, key: &NodeKey) -> bool {
        self.expanded.contains(key)
    }

    /// Flips the expansion of `key` and returns the new state.
    pub fn toggle(&mut self, key: &NodeKey) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.clone());
            true
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &NodeKey> {
        self.expanded.iter()
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ExpansionState, SelectionState};
    use crate::model::{NodeKey, TreeNode};

    fn key(value: &str) -> NodeKey {
        NodeKey::new(value).expect("node key")
    }

    #[test]
    fn select_leaf_copies_title_and_body() {
        let leaf = TreeNode::new(key("a"), "Alpha", 1, Some("# Alpha".to_owned()), Vec::new());
        let mut selection = SelectionState::default();

        assert!(selection.select_leaf(&leaf));
        assert_eq!(selection.active_key(), Some(&key("a")));
        assert_eq!(selection.title(), "Alpha");
        assert_eq!(selection.body_text(), "# Alpha");
    }

    #[test]
    fn select_parent_is_a_no_op() {
        let leaf = TreeNode::new(key("a"), "Alpha", 1, Some("body".to_owned()), Vec::new());
        let parent = TreeNode::new(
            key("p"),
            "Parent",
            0,
            Some("ignored".to_owned()),
            vec![leaf.clone()],
        );

        let mut selection = SelectionState::default();
        selection.select_leaf(&leaf);
        let before = selection.clone();

        assert!(!selection.select_leaf(&parent));
        assert_eq!(selection, before);
    }

    #[test]
    fn toggle_flips_expansion() {
        let mut expansion = ExpansionState::from_keys([key("p")]);
        assert!(expansion.is_expanded(&key("p")));
        assert!(!expansion.toggle(&key("p")));
        assert!(!expansion.is_expanded(&key("p")));
        assert!(expansion.toggle(&key("p")));
        assert_eq!(expansion.len(), 1);
    }
}
