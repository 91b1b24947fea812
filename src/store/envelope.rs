// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::SourceError;

pub const SUCCESS_CODE: i64 = 200;

/// `{ code, msg, data }` wrapper used by the document service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: String::new(),
            data: Some(data),
        }
    }

    pub fn into_data(self, path: &Path) -> Result<T, SourceError> {
        if self.code != SUCCESS_CODE {
            return Err(SourceError::Rejected {
                code: self.code,
                msg: self.msg,
            });
        }
        self.data.ok_or_else(|| SourceError::MissingData {
            path: path.to_path_buf(),
        })
    }
}

/// Decodes `text` either as an [`Envelope`] (a top-level object carrying `code`) or as a bare `T`.
pub fn decode_payload<T: DeserializeOwned>(path: &Path, text: &str) -> Result<T, SourceError> {
    let json_error = |source| SourceError::Json {
        path: path.to_path_buf(),
        source,
    };

    let value: serde_json::Value = serde_json::from_str(text).map_err(json_error)?;
    let wrapped = value
        .as_object()
        .is_some_and(|object| object.contains_key("code"));
    if wrapped {
        let envelope: Envelope<T> = serde_json::from_value(value).map_err(json_error)?;
        envelope.into_data(path)
    } else {
        serde_json::from_value(value).map_err(json_error)
    }
}
