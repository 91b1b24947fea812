// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over a built catalogue tree.
//!
//! Every query walks with an explicit stack and tolerates an empty tree.

pub mod tree;

pub use tree::{
    find_by_key, find_first_leaf_with_content, initial_expansion, locate, visible_rows, walk,
    DepthFirst, Located,
};
