// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::model::AttemptId;

use super::engine::{EngineConfig, EngineError, EngineLifecycle, RenderEngine, RenderedDiagram};
use super::{DiagramRenderer, RenderConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EngineCall {
    pub(crate) attempt_id: AttemptId,
    pub(crate) source: String,
}

#[derive(Debug)]
struct Step {
    delay: Duration,
    outcome: Result<String, EngineError>,
}

/// Replays queued outcomes in call order; once the queue is empty every call succeeds with
/// `<svg>{source}</svg>`.
#[derive(Debug, Default)]
pub(crate) struct ScriptedEngine {
    script: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<EngineCall>>,
    lifecycle: EngineLifecycle,
    initialized: AtomicUsize,
}

impl ScriptedEngine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn then_ok(self, body: &str) -> Self {
        self.then_after(Duration::ZERO, Ok(body.to_owned()))
    }

    pub(crate) fn then_err(self, error: EngineError) -> Self {
        self.then_after(Duration::ZERO, Err(error))
    }

    pub(crate) fn then_after(self, delay: Duration, outcome: Result<String, EngineError>) -> Self {
        self.script
            .lock()
            .expect("script lock")
            .push_back(Step { delay, outcome });
        self
    }

    pub(crate) fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn init_count(&self) -> usize {
        self.initialized.load(Ordering::SeqCst)
    }
}

impl RenderEngine for ScriptedEngine {
    fn lifecycle(&self) -> &EngineLifecycle {
        &self.lifecycle
    }

    fn initialize(&self, _config: &EngineConfig) {
        self.initialized.fetch_add(1, Ordering::SeqCst);
    }

    async fn render(
        &self,
        attempt_id: &AttemptId,
        source: &str,
    ) -> Result<RenderedDiagram, EngineError> {
        self.calls.lock().expect("calls lock").push(EngineCall {
            attempt_id: attempt_id.clone(),
            source: source.to_owned(),
        });
        let step = self.script.lock().expect("script lock").pop_front();
        let Step { delay, outcome } = step.unwrap_or_else(|| Step {
            delay: Duration::ZERO,
            outcome: Ok(format!("<svg>{source}</svg>")),
        });

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        outcome.map(|body| RenderedDiagram {
            attempt_id: attempt_id.clone(),
            body,
        })
    }
}

pub(crate) fn scripted_renderer(
    engine: &Arc<ScriptedEngine>,
    debounce_ms: u64,
) -> DiagramRenderer<Arc<ScriptedEngine>> {
    DiagramRenderer::new(Arc::clone(engine)).with_render_config(RenderConfig { debounce_ms })
}
