// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Markdown document handling: heading outline and code-block splitting.

pub mod blocks;
pub mod outline;

pub use blocks::{split_blocks, CodeBlock, DocumentBlock};
pub use outline::{extract_outline, extract_outline_with, OutlineOptions, DEFAULT_MAX_OUTLINE_LEVEL};
