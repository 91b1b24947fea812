// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::{CatalogueRecord, TaskDetail};

use super::{decode_payload, CatalogueSource, SourceError};

/// Reads a catalogue file and an optional task file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCatalogueSource {
    catalogue_path: PathBuf,
    task_path: Option<PathBuf>,
}

impl FileCatalogueSource {
    pub fn new(catalogue_path: impl Into<PathBuf>) -> Self {
        Self {
            catalogue_path: catalogue_path.into(),
            task_path: None,
        }
    }

    pub fn with_task_path(mut self, task_path: impl Into<PathBuf>) -> Self {
        self.task_path = Some(task_path.into());
        self
    }

    pub fn catalogue_path(&self) -> &Path {
        &self.catalogue_path
    }

    pub fn task_path(&self) -> Option<&Path> {
        self.task_path.as_deref()
    }
}

async fn read_text(path: &Path) -> Result<String, SourceError> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(text),
        Err(source) if source.kind() == io::ErrorKind::NotFound => Err(SourceError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(SourceError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl CatalogueSource for FileCatalogueSource {
    async fn load_catalogue(&self) -> Result<Vec<CatalogueRecord>, SourceError> {
        let text = read_text(&self.catalogue_path).await?;
        let records: Vec<CatalogueRecord> = decode_payload(&self.catalogue_path, &text)?;
        debug!(
            path = %self.catalogue_path.display(),
            records = records.len(),
            "catalogue file decoded"
        );
        Ok(records)
    }

    async fn load_task(&self) -> Result<Option<TaskDetail>, SourceError> {
        let Some(path) = &self.task_path else {
            return Ok(None);
        };
        let text = read_text(path).await?;
        decode_payload(path, &text).map(Some)
    }
}
