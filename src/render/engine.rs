// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The seam between the render pipeline and an external diagram engine.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Once};

use serde::{Deserialize, Serialize};

use crate::model::AttemptId;

/// Substrings that mark an engine failure as a syntax problem in the source text.
pub const SYNTAX_ERROR_MARKERS: &[&str] = &["Syntax error", "Parse error", "Lexical error"];

/// Output of one successful engine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiagram {
    pub attempt_id: AttemptId,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{0}")]
    Syntax(String),
    #[error("{0}")]
    Internal(String),
}

impl EngineError {
    pub fn message(&self) -> &str {
        match self {
            Self::Syntax(message) | Self::Internal(message) => message,
        }
    }

    /// Engines do not always tag their failures; an `Internal` error whose message carries one
    /// of the [`SYNTAX_ERROR_MARKERS`] still counts as a syntax error.
    pub fn is_syntax(&self) -> bool {
        match self {
            Self::Syntax(_) => true,
            Self::Internal(message) => SYNTAX_ERROR_MARKERS
                .iter()
                .any(|marker| message.contains(marker)),
        }
    }
}

/// Process-wide engine setup, passed to [`RenderEngine::initialize`] exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    pub start_on_load: bool,
    pub theme: String,
    pub security_level: String,
    pub theme_variables: BTreeMap<String, String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let theme_variables = [
            ("primaryColor", "#1890ff"),
            ("primaryTextColor", "#262626"),
            ("primaryBorderColor", "#d9d9d9"),
            ("lineColor", "#595959"),
            ("sectionBkgColor", "#f6f8fa"),
            ("altSectionBkgColor", "#ffffff"),
            ("gridColor", "#e1e4e8"),
            ("secondaryColor", "#f0f2f5"),
            ("tertiaryColor", "#fafafa"),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect();

        Self {
            start_on_load: false,
            theme: "default".to_owned(),
            security_level: "loose".to_owned(),
            theme_variables,
        }
    }
}

/// A diagram engine: turns normalized source text into rendered output.
///
/// Attempt ids are unique per call; engines that keep per-render scratch state (DOM nodes,
/// temp files) should key it by the attempt id. Each engine instance owns the
/// [`EngineLifecycle`] that guards its [`initialize`](Self::initialize), so renderers sharing one
/// engine (through `Arc`) initialize it once between them.
pub trait RenderEngine {
    fn lifecycle(&self) -> &EngineLifecycle;

    fn initialize(&self, config: &EngineConfig);

    fn render(
        &self,
        attempt_id: &AttemptId,
        source: &str,
    ) -> impl Future<Output = Result<RenderedDiagram, EngineError>>;
}

impl<E: RenderEngine> RenderEngine for Arc<E> {
    fn lifecycle(&self) -> &EngineLifecycle {
        (**self).lifecycle()
    }

    fn initialize(&self, config: &EngineConfig) {
        (**self).initialize(config);
    }

    async fn render(
        &self,
        attempt_id: &AttemptId,
        source: &str,
    ) -> Result<RenderedDiagram, EngineError> {
        (**self).render(attempt_id, source).await
    }
}

/// Guards one-time engine initialization.
#[derive(Debug)]
pub struct EngineLifecycle {
    once: Once,
}

impl EngineLifecycle {
    pub const fn new() -> Self {
        Self { once: Once::new() }
    }

    /// Runs `init` if no caller has yet. Returns whether this call ran it.
    pub fn ensure_initialized(&self, init: impl FnOnce()) -> bool {
        let mut ran = false;
        self.once.call_once(|| {
            init();
            ran = true;
        });
        ran
    }

    pub fn is_initialized(&self) -> bool {
        self.once.is_completed()
    }
}

impl Default for EngineLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
