// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// One in-page jump target derived from a heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorEntry {
    id: String,
    title: String,
    level: u8,
}

impl AnchorEntry {
    pub(crate) fn new(id: String, title: impl Into<String>, level: u8) -> Self {
        Self {
            id,
            title: title.into(),
            level,
        }
    }

    /// Positional anchor id; unique within one extraction pass.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Heading depth, `1..=3`.
    pub fn level(&self) -> u8 {
        self.level
    }
}
