// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The document viewport: catalogue tree, current selection, its outline and its diagrams.
//!
//! The viewport owns one [`DiagramSlot`] per diagram block of the selected document. Slot ids are
//! `{document key}-diagram-{n}`, counting diagram blocks only, so they stay stable for as long as
//! the document is shown. Selecting another document tears every slot down first.

use futures::future::join_all;
use tracing::{debug, info};

use crate::config::ViewerConfig;
use crate::format::markdown::{
    extract_outline_with, split_blocks, CodeBlock, DocumentBlock, OutlineOptions,
};
use crate::format::mermaid::looks_like_diagram;
use crate::model::{
    AnchorEntry, CatalogueRecord, ExpansionState, NodeKey, SelectionState, SlotId, TaskDetail,
    TreeNode,
};
use crate::query::{
    find_first_leaf_with_content, initial_expansion, locate, visible_rows, walk, Located,
};
use crate::render::{DiagramRenderer, DiagramSlot, DiagramView, RenderEngine, SubmitOutcome};
use crate::store::{CatalogueSource, SourceError};
use crate::tree::{assemble_catalogue_checked, build_tree_checked, TreeBuildError};

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Tree(#[from] TreeBuildError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    /// The key names a parent; the selection is unchanged.
    IgnoredParent,
    NotFound,
}

/// A diagram block of the selected document and the slot rendering it.
#[derive(Debug)]
pub struct DiagramOccurrence {
    block_index: usize,
    source: String,
    slot: DiagramSlot,
}

impl DiagramOccurrence {
    pub fn block_index(&self) -> usize {
        self.block_index
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn slot(&self) -> &DiagramSlot {
        &self.slot
    }
}

/// One block of the selected document, ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockView<'a> {
    Markdown(&'a str),
    Code {
        language: Option<&'a str>,
        text: &'a str,
    },
    Diagram {
        slot: &'a SlotId,
        source: &'a str,
        view: DiagramView,
    },
}

/// Fenced blocks tagged `mermaid`, or whose text passes diagram pre-validation.
pub fn is_diagram_block(block: &CodeBlock) -> bool {
    block.fenced && (block.is_language("mermaid") || looks_like_diagram(&block.text))
}

#[derive(Debug)]
pub struct DocumentViewport<E> {
    tree: Vec<TreeNode>,
    task: Option<TaskDetail>,
    expansion: ExpansionState,
    selection: SelectionState,
    outline: Vec<AnchorEntry>,
    outline_options: OutlineOptions,
    blocks: Vec<DocumentBlock>,
    diagrams: Vec<DiagramOccurrence>,
    scroll_offset: usize,
    renderer: DiagramRenderer<E>,
}

impl<E: RenderEngine> DocumentViewport<E> {
    /// Loads catalogue and task from `source`.
    pub async fn open<S: CatalogueSource>(
        source: &S,
        renderer: DiagramRenderer<E>,
        config: &ViewerConfig,
    ) -> Result<Self, ViewerError> {
        let records = source.load_catalogue().await?;
        let task = source.load_task().await?;
        let mut viewport = Self::from_records(records, renderer, config)?;
        viewport.task = task;
        Ok(viewport)
    }

    /// Builds the tree, expands first-level parents and selects the first leaf with content.
    pub fn from_records(
        records: Vec<CatalogueRecord>,
        renderer: DiagramRenderer<E>,
        config: &ViewerConfig,
    ) -> Result<Self, ViewerError> {
        let records = assemble_catalogue_checked(records, config.tree)?;
        let tree = build_tree_checked(&records, config.tree)?;
        let expansion = ExpansionState::from_keys(initial_expansion(&tree));
        let initial = find_first_leaf_with_content(&tree).map(|node| node.key().clone());

        let mut viewport = Self {
            tree,
            task: None,
            expansion,
            selection: SelectionState::default(),
            outline: Vec::new(),
            outline_options: config.outline,
            blocks: Vec::new(),
            diagrams: Vec::new(),
            scroll_offset: 0,
            renderer,
        };
        if let Some(key) = &initial {
            viewport.select(key);
        }

        info!(
            nodes = walk(&viewport.tree).count(),
            selected = initial.as_ref().map_or("", NodeKey::as_str),
            "catalogue loaded"
        );
        Ok(viewport)
    }

    pub fn tree(&self) -> &[TreeNode] {
        &self.tree
    }

    pub fn task(&self) -> Option<&TaskDetail> {
        self.task.as_ref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn outline(&self) -> &[AnchorEntry] {
        &self.outline
    }

    pub fn blocks(&self) -> &[DocumentBlock] {
        &self.blocks
    }

    pub fn diagrams(&self) -> &[DiagramOccurrence] {
        &self.diagrams
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn renderer(&self) -> &DiagramRenderer<E> {
        &self.renderer
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset;
    }

    /// Catalogue rows to display, honoring the expansion state.
    pub fn visible_rows(&self) -> Vec<&TreeNode> {
        visible_rows(&self.tree, &self.expansion)
    }

    /// Flips a parent between expanded and collapsed. Returns the new state; leaves and unknown
    /// keys are never expanded.
    pub fn toggle_expanded(&mut self, key: &NodeKey) -> bool {
        match locate(&self.tree, key) {
            Some(Located::Parent(_)) => self.expansion.toggle(key),
            _ => false,
        }
    }

    pub fn select(&mut self, key: &NodeKey) -> SelectOutcome {
        let node = match locate(&self.tree, key) {
            Some(Located::Leaf(node)) => node,
            Some(Located::Parent(_)) => {
                debug!(%key, "parent selection ignored");
                return SelectOutcome::IgnoredParent;
            }
            None => {
                debug!(%key, "selection of unknown key ignored");
                return SelectOutcome::NotFound;
            }
        };
        self.selection.select_leaf(node);
        self.refresh_document();
        SelectOutcome::Selected
    }

    fn refresh_document(&mut self) {
        for occurrence in self.diagrams.drain(..) {
            occurrence.slot.teardown();
        }

        let body = self.selection.body_text();
        self.outline = extract_outline_with(body, self.outline_options);
        self.blocks = split_blocks(body);
        self.scroll_offset = 0;

        let Some(doc_key) = self.selection.active_key() else {
            return;
        };
        let mut index = 0usize;
        self.diagrams = self
            .blocks
            .iter()
            .enumerate()
            .filter_map(|(block_index, block)| match block {
                DocumentBlock::Code(code) if is_diagram_block(code) => {
                    let slot_id: SlotId = doc_key.with_suffix(format_args!("-diagram-{index}"));
                    index += 1;
                    Some(DiagramOccurrence {
                        block_index,
                        source: code.text.clone(),
                        slot: DiagramSlot::new(slot_id),
                    })
                }
                _ => None,
            })
            .collect();
        debug!(
            document = %doc_key,
            headings = self.outline.len(),
            diagrams = self.diagrams.len(),
            "document refreshed"
        );
    }

    /// Submits every diagram of the selected document to its slot and waits for all of them.
    pub async fn render_diagrams(&self) -> Vec<SubmitOutcome> {
        join_all(
            self.diagrams
                .iter()
                .map(|occurrence| occurrence.slot.submit(&self.renderer, &occurrence.source)),
        )
        .await
    }

    /// The selected document as display blocks. Empty when nothing (or an empty leaf) is selected.
    pub fn document_view(&self) -> Vec<BlockView<'_>> {
        self.blocks
            .iter()
            .enumerate()
            .map(|(block_index, block)| match block {
                DocumentBlock::Markdown(text) => BlockView::Markdown(text),
                DocumentBlock::Code(code) => {
                    match self.diagrams.iter().find(|d| d.block_index == block_index) {
                        Some(occurrence) => BlockView::Diagram {
                            slot: occurrence.slot.id(),
                            source: &occurrence.source,
                            view: occurrence.slot.result().view(),
                        },
                        None => BlockView::Code {
                            language: code.language.as_deref(),
                            text: &code.text,
                        },
                    }
                }
            })
            .collect()
    }
}
