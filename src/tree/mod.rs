// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Catalogue payload → navigable tree.
//!
//! [`build_tree`] is total and never fails; [`build_tree_checked`] additionally rejects payloads
//! that nest deeper than [`TreeLimits::max_depth`] or reuse an id. Both walk the payload with an
//! explicit stack, so input depth never grows the call stack.

mod assemble;
mod build;

pub use assemble::{assemble_catalogue, assemble_catalogue_checked};
pub use build::{build_tree, build_tree_checked, TreeBuildError, TreeLimits, DEFAULT_MAX_DEPTH};
