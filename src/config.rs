// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Viewer settings, loaded from an optional JSON file. Every field has a default, so `{}` is a
//! complete config.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::format::markdown::OutlineOptions;
use crate::render::{EngineConfig, RenderConfig};
use crate::tree::TreeLimits;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub render: RenderConfig,
    pub tree: TreeLimits,
    pub engine: EngineConfig,
    pub outline: OutlineOptions,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid config {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ViewerConfig {
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Command-line values win over file values.
    pub fn with_overrides(mut self, debounce_ms: Option<u64>, max_depth: Option<usize>) -> Self {
        if let Some(debounce_ms) = debounce_ms {
            self.render.debounce_ms = debounce_ms;
        }
        if let Some(max_depth) = max_depth {
            self.tree.max_depth = max_depth;
        }
        self
    }
}
