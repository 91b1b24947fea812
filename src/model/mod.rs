// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Catalogue payloads arrive as [`CatalogueRecord`]s and are turned into immutable [`TreeNode`]s;
//! selection, expansion and outline state is derived from that tree.

pub mod catalogue;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod outline;
pub mod selection;
pub mod task;
pub mod tree;

pub use catalogue::{CatalogueRecord, GenerationStatus, UnknownGenerationStatus};
pub use ids::{AttemptId, Id, IdError, NodeKey, SlotId, TaskId};
pub use outline::AnchorEntry;
pub use selection::{ExpansionState, SelectionState};
pub use task::TaskDetail;
pub use tree::TreeNode;
