// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-occurrence render state.
//!
//! Every submission bumps the slot generation. A render only commits if the generation it started
//! with is still current, so a superseded or torn-down candidate can never overwrite newer state.
//! In-flight work for a superseded generation is dropped as soon as the bump is observed.

use tokio::sync::watch;
use tracing::trace;

use crate::model::SlotId;

use super::diagram::{prepare, DiagramRenderResult, DiagramRenderer, Preparation};
use super::engine::RenderEngine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotState {
    pub generation: u64,
    pub result: DiagramRenderResult,
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Committed(DiagramRenderResult),
    /// A newer submission or a teardown took over; nothing was published.
    Superseded,
}

#[derive(Debug)]
pub struct DiagramSlot {
    id: SlotId,
    state: watch::Sender<SlotState>,
}

impl DiagramSlot {
    pub fn new(id: SlotId) -> Self {
        let (state, _) = watch::channel(SlotState {
            generation: 0,
            result: DiagramRenderResult::Loading,
            closed: false,
        });
        Self { id, state }
    }

    pub fn id(&self) -> &SlotId {
        &self.id
    }

    pub fn result(&self) -> DiagramRenderResult {
        self.state.borrow().result.clone()
    }

    pub fn generation(&self) -> u64 {
        self.state.borrow().generation
    }

    pub fn is_torn_down(&self) -> bool {
        self.state.borrow().closed
    }

    /// Observes every published state change, e.g. to repaint a view.
    pub fn subscribe(&self) -> watch::Receiver<SlotState> {
        self.state.subscribe()
    }

    /// Renders `candidate` into this slot.
    ///
    /// Empty and non-diagram candidates settle immediately. Everything else shows `Loading`, waits
    /// out the debounce window and then goes through the engine. Returns `Superseded` when a later
    /// [`submit`](Self::submit) or [`teardown`](Self::teardown) happened before the result was
    /// ready.
    pub async fn submit<E: RenderEngine>(
        &self,
        renderer: &DiagramRenderer<E>,
        candidate: &str,
    ) -> SubmitOutcome {
        let Some(token) = self.begin() else {
            trace!(slot = %self.id, "submit on torn-down slot ignored");
            return SubmitOutcome::Superseded;
        };

        let prepared = match prepare(candidate) {
            Preparation::Settled(result) => return self.finish(token, result),
            Preparation::Ready(prepared) => prepared,
        };

        let delay = renderer.render_config().debounce();
        let work = async {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            renderer.execute(&self.id, &prepared).await
        };

        let mut watcher = self.state.subscribe();
        tokio::select! {
            result = work => self.finish(token, result),
            _ = watcher.wait_for(|state| state.generation != token) => {
                trace!(
                    slot = %self.id,
                    generation = token,
                    "render abandoned for a newer generation"
                );
                SubmitOutcome::Superseded
            }
        }
    }

    /// Abandons any in-flight render and rejects further submissions.
    pub fn teardown(&self) {
        self.state.send_modify(|state| {
            state.generation += 1;
            state.closed = true;
        });
    }

    fn begin(&self) -> Option<u64> {
        let mut token = None;
        self.state.send_if_modified(|state| {
            if state.closed {
                return false;
            }
            state.generation += 1;
            state.result = DiagramRenderResult::Loading;
            token = Some(state.generation);
            true
        });
        token
    }

    fn commit(&self, token: u64, result: DiagramRenderResult) -> bool {
        self.state.send_if_modified(|state| {
            if state.closed || state.generation != token {
                return false;
            }
            state.result = result;
            true
        })
    }

    fn finish(&self, token: u64, result: DiagramRenderResult) -> SubmitOutcome {
        if self.commit(token, result.clone()) {
            SubmitOutcome::Committed(result)
        } else {
            trace!(slot = %self.id, generation = token, "stale render result discarded");
            SubmitOutcome::Superseded
        }
    }
}
