// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram rendering.
//!
//! [`DiagramRenderer`] runs candidate text through validation, normalization and a
//! [`RenderEngine`], retrying once with forced title quoting. [`DiagramSlot`] owns the state of a
//! single diagram occurrence: it debounces submissions and makes sure only the latest one is ever
//! published.

pub mod diagram;
pub mod engine;
pub mod preview;
pub mod slot;
#[cfg(test)]
mod test_utils;
mod text;

pub use diagram::{
    prepare, DiagramRenderResult, DiagramRenderer, DiagramView, Preparation, PreparedDiagram,
    RenderConfig, DEFAULT_DEBOUNCE_MS, NO_CONTENT_MESSAGE,
};
pub use engine::{
    EngineConfig, EngineError, EngineLifecycle, RenderEngine, RenderedDiagram,
    SYNTAX_ERROR_MARKERS,
};
pub use preview::PreviewEngine;
pub use slot::{DiagramSlot, SlotState, SubmitOutcome};
