// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Where catalogue and task payloads come from.
//!
//! Payloads use the document service's JSON shapes, optionally wrapped in its `{ code, msg, data }`
//! envelope. [`FileCatalogueSource`] reads them from disk; [`StaticSource`] serves them from
//! memory.

use std::future::Future;
use std::io;
use std::path::PathBuf;

use crate::model::{CatalogueRecord, TaskDetail};

pub mod envelope;
pub mod file_source;

pub use envelope::{decode_payload, Envelope, SUCCESS_CODE};
pub use file_source::FileCatalogueSource;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("document service rejected the request (code {code}): {msg}")]
    Rejected { code: i64, msg: String },
    #[error("{} does not exist", .path.display())]
    NotFound { path: PathBuf },
    #[error("{} carries a successful response without data", .path.display())]
    MissingData { path: PathBuf },
}

pub trait CatalogueSource {
    /// Catalogue records, nested or flat.
    fn load_catalogue(&self) -> impl Future<Output = Result<Vec<CatalogueRecord>, SourceError>>;

    /// Task metadata, when the source has any.
    fn load_task(&self) -> impl Future<Output = Result<Option<TaskDetail>, SourceError>>;
}

/// In-memory source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSource {
    records: Vec<CatalogueRecord>,
    task: Option<TaskDetail>,
}

impl StaticSource {
    pub fn new(records: Vec<CatalogueRecord>) -> Self {
        Self {
            records,
            task: None,
        }
    }

    pub fn with_task(mut self, task: TaskDetail) -> Self {
        self.task = Some(task);
        self
    }
}

impl CatalogueSource for StaticSource {
    async fn load_catalogue(&self) -> Result<Vec<CatalogueRecord>, SourceError> {
        Ok(self.records.clone())
    }

    async fn load_task(&self) -> Result<Option<TaskDetail>, SourceError> {
        Ok(self.task.clone())
    }
}
