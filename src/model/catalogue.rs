// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


use serde::{Deserialize, Deserializer, Serialize};

use super::ids::NodeKey;

/// Generation status of a task or catalogue entry, as reported by the document service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GenerationStatus {
    InProgress,
    Completed,
    Failed,
}

impl GenerationStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::InProgress => 1,
            Self::Completed => 2,
            Self::Failed => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "in progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl TryFrom<u8> for GenerationStatus {
    type Error = UnknownGenerationStatus;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Completed),
            3 => Ok(Self::Failed),
            other => Err(UnknownGenerationStatus(other)),
        }
    }
}

impl From<GenerationStatus> for u8 {
    fn from(status: GenerationStatus) -> Self {
        status.code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown generation status code: {0} (expected 1, 2 or 3)")]
pub struct UnknownGenerationStatus(pub u8);

/// One entry of a catalogue payload.
///
/// Payloads are either nested (`children` populated) or flat (every record at the top level,
/// nesting expressed through `parent_id`); see [`crate::tree::assemble_catalogue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueRecord {
    #[serde(rename = "catalogueId", deserialize_with = "key_from_string_or_number")]
    pub id: NodeKey,
    #[serde(
        rename = "parentCatalogueId",
        default,
        deserialize_with = "optional_key_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<NodeKey>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GenerationStatus>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<CatalogueRecord>,
}

impl CatalogueRecord {
    pub fn new(id: NodeKey, name: impl Into<String>) -> Self {
        Self {
            id,
            parent_id: None,
            name: name.into(),
            title: None,
            prompt: None,
            dependent_file: None,
            content: None,
            status: None,
            children: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_parent(mut self, parent_id: NodeKey) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_children(mut self, children: Vec<CatalogueRecord>) -> Self {
        self.children = children;
        self
    }

    /// Display label: `name`, falling back to `title` when the service left `name` blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            self.title.as_deref().unwrap_or_default()
        } else {
            &self.name
        }
    }
}

// Unlinks children onto a heap stack so arbitrarily deep payloads drop without recursion.
impl Drop for CatalogueRecord {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut record) = pending.pop() {
            pending.append(&mut record.children);
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Text(String),
    Number(i64),
}

impl RawKey {
    fn into_key<E: serde::de::Error>(self) -> Result<NodeKey, E> {
        let raw = match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        };
        NodeKey::new(raw).map_err(E::custom)
    }
}

fn key_from_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<NodeKey, D::Error> {
    RawKey::deserialize(deserializer)?.into_key()
}

fn optional_key_from_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NodeKey>, D::Error> {
    match Option::<RawKey>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawKey::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(raw) => raw.into_key().map(Some),
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<CatalogueRecord>, D::Error> {
    Ok(Option::<Vec<CatalogueRecord>>::deserialize(deserializer)?.unwrap_or_default())
}
