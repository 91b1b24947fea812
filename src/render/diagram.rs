// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The diagram render pipeline.
//!
//! A candidate goes through two phases:
//!
//! 1. [`prepare`] (synchronous): empty text settles as [`DiagramRenderResult::Error`], text that
//!    fails pre-validation settles as [`DiagramRenderResult::Invalid`], anything else is
//!    normalized into a [`PreparedDiagram`].
//! 2. [`DiagramRenderer::execute`] (async): one primary engine attempt, and at most one recovery
//!    attempt with forced title quoting when the primary failure was not a syntax error.
//!
//! The engine is only reached in phase 2, and is initialized lazily right before its first use.
//! Debouncing and stale-result handling live in [`super::slot::DiagramSlot`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::format::mermaid::{force_quote, normalize, prevalidate, DiagramKind};
use crate::model::{AttemptId, SlotId};

use super::engine::{EngineConfig, RenderEngine, RenderedDiagram};


pub const NO_CONTENT_MESSAGE: &str = "no content";
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

static NEXT_ATTEMPT: AtomicU64 = AtomicU64::new(0);

/// Externally visible state of one diagram slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramRenderResult {
    Loading,
    /// The candidate is not a diagram, or the engine rejected it. Shown as plain code.
    Invalid,
    Error(String),
    Success(RenderedDiagram),
}

impl DiagramRenderResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub fn view(&self) -> DiagramView {
        match self {
            Self::Loading => DiagramView::Pending,
            Self::Invalid => DiagramView::FallbackCode,
            Self::Error(message) => DiagramView::Failed(message.clone()),
            Self::Success(rendered) => DiagramView::Rendered(rendered.body.clone()),
        }
    }
}

/// What a document view shows for a diagram block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramView {
    Pending,
    Rendered(String),
    Failed(String),
    FallbackCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub debounce_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl RenderConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// A candidate that passed pre-validation, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedDiagram {
    kind: DiagramKind,
    source: String,
}

impl PreparedDiagram {
    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preparation {
    Ready(PreparedDiagram),
    Settled(DiagramRenderResult),
}

pub fn prepare(candidate: &str) -> Preparation {
    let unified = candidate.trim().replace("\r\n", "\n");
    let candidate = unified.as_str();
    if candidate.is_empty() {
        return Preparation::Settled(DiagramRenderResult::Error(NO_CONTENT_MESSAGE.to_owned()));
    }

    match prevalidate(candidate) {
        Ok(kind) => {
            let source = normalize(candidate);
            debug!(%kind, "candidate validated and normalized");
            Preparation::Ready(PreparedDiagram { kind, source })
        }
        Err(reason) => {
            debug!(%reason, "candidate failed pre-validation");
            Preparation::Settled(DiagramRenderResult::Invalid)
        }
    }
}

fn next_attempt_id(slot_id: &SlotId, marker: &str) -> AttemptId {
    let seq = NEXT_ATTEMPT.fetch_add(1, Ordering::Relaxed);
    slot_id.with_suffix(format_args!("-{marker}{seq}"))
}

/// Drives one engine through the render pipeline.
#[derive(Debug)]
pub struct DiagramRenderer<E> {
    engine: E,
    engine_config: EngineConfig,
    render_config: RenderConfig,
}

impl<E: RenderEngine> DiagramRenderer<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            engine_config: EngineConfig::default(),
            render_config: RenderConfig::default(),
        }
    }

    pub fn with_engine_config(mut self, config: EngineConfig) -> Self {
        self.engine_config = config;
        self
    }

    pub fn with_render_config(mut self, config: RenderConfig) -> Self {
        self.render_config = config;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn render_config(&self) -> RenderConfig {
        self.render_config
    }

    fn ensure_engine(&self) {
        let ran = self
            .engine
            .lifecycle()
            .ensure_initialized(|| self.engine.initialize(&self.engine_config));
        if ran {
            info!(theme = %self.engine_config.theme, "diagram engine initialized");
        }
    }

    /// Runs the whole pipeline for `candidate` without debouncing.
    pub async fn render(&self, slot_id: &SlotId, candidate: &str) -> DiagramRenderResult {
        match prepare(candidate) {
            Preparation::Settled(result) => result,
            Preparation::Ready(prepared) => self.execute(slot_id, &prepared).await,
        }
    }

    /// Engine phase: a primary attempt, then a single forced-quoting retry for non-syntax
    /// failures. Never returns `Loading`.
    pub async fn execute(
        &self,
        slot_id: &SlotId,
        prepared: &PreparedDiagram,
    ) -> DiagramRenderResult {
        self.ensure_engine();

        let attempt_id = next_attempt_id(slot_id, "");
        debug!(
            slot = %slot_id,
            attempt = %attempt_id,
            kind = %prepared.kind,
            "primary render attempt"
        );
        let error = match self.engine.render(&attempt_id, &prepared.source).await {
            Ok(rendered) => return DiagramRenderResult::Success(rendered),
            Err(error) => error,
        };

        if error.is_syntax() {
            warn!(slot = %slot_id, attempt = %attempt_id, %error, "engine rejected diagram syntax");
            return DiagramRenderResult::Invalid;
        }
        warn!(
            slot = %slot_id,
            attempt = %attempt_id,
            %error,
            "primary render failed, retrying with quoted titles"
        );

        let recovered = force_quote(&prepared.source);
        let attempt_id = next_attempt_id(slot_id, "fixed-");
        debug!(slot = %slot_id, attempt = %attempt_id, "recovery render attempt");
        match self.engine.render(&attempt_id, &recovered).await {
            Ok(rendered) => DiagramRenderResult::Success(rendered),
            Err(error) => {
                warn!(slot = %slot_id, attempt = %attempt_id, %error, "recovery render failed");
                DiagramRenderResult::Invalid
            }
        }
    }
}
