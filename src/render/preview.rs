// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! A deterministic, text-only [`RenderEngine`] for terminals and tests.
//!
//! It does not lay diagrams out; it checks the source with a few strict rules and frames it.
//! Unbalanced quotes (and unbalanced brackets in flowcharts) are syntax errors. An unquoted
//! `subgraph` title that is not a plain identifier is an internal error, which the recovery pass
//! repairs by quoting it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use tracing::warn;

use crate::format::mermaid::{detect_kind, DiagramKind};
use crate::model::AttemptId;

use super::engine::{EngineConfig, EngineError, EngineLifecycle, RenderEngine, RenderedDiagram};
use super::text::frame_block;

pub const PREVIEW_MAX_WIDTH: usize = 96;

#[derive(Debug, Default)]
pub struct PreviewEngine {
    lifecycle: EngineLifecycle,
    config: OnceLock<EngineConfig>,
    initializations: AtomicUsize,
}

impl PreviewEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initializations(&self) -> usize {
        self.initializations.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> Option<&EngineConfig> {
        self.config.get()
    }
}

impl RenderEngine for PreviewEngine {
    fn lifecycle(&self) -> &EngineLifecycle {
        &self.lifecycle
    }

    fn initialize(&self, config: &EngineConfig) {
        if self.config.set(config.clone()).is_err() {
            warn!("preview engine initialized again; keeping the first config");
        }
        self.initializations.fetch_add(1, Ordering::SeqCst);
    }

    async fn render(
        &self,
        attempt_id: &AttemptId,
        source: &str,
    ) -> Result<RenderedDiagram, EngineError> {
        let kind = detect_kind(source);
        check_balance(source, kind == Some(DiagramKind::Flowchart))?;
        check_group_titles(source)?;

        let label = kind.map_or("diagram", DiagramKind::as_str);
        Ok(RenderedDiagram {
            attempt_id: attempt_id.clone(),
            body: frame_block(label, source, PREVIEW_MAX_WIDTH),
        })
    }
}

fn check_balance(source: &str, brackets: bool) -> Result<(), EngineError> {
    for (idx, line) in source.lines().enumerate() {
        if line.trim_start().starts_with("%%") {
            continue;
        }
        let line_no = idx + 1;
        let mut open = Vec::<char>::new();
        let mut in_quotes = false;
        for ch in line.chars() {
            if ch == '"' {
                in_quotes = !in_quotes;
                continue;
            }
            if in_quotes || !brackets {
                continue;
            }
            match ch {
                '(' | '[' | '{' => open.push(ch),
                ')' | ']' | '}' => {
                    let expected = match ch {
                        ')' => '(',
                        ']' => '[',
                        _ => '{',
                    };
                    if open.pop() != Some(expected) {
                        return Err(EngineError::Syntax(format!(
                            "Parse error on line {line_no}: unexpected '{ch}'"
                        )));
                    }
                }
                _ => {}
            }
        }
        if in_quotes {
            return Err(EngineError::Syntax(format!(
                "Parse error on line {line_no}: unterminated string"
            )));
        }
        if let Some(ch) = open.pop() {
            return Err(EngineError::Syntax(format!(
                "Parse error on line {line_no}: unclosed '{ch}'"
            )));
        }
    }
    Ok(())
}

fn check_group_titles(source: &str) -> Result<(), EngineError> {
    for line in source.lines() {
        let Some(rest) = line.trim_start().strip_prefix("subgraph") else {
            continue;
        };
        if !rest.starts_with([' ', '\t']) {
            continue;
        }
        let rest = rest.trim();
        if rest.starts_with('"') {
            continue;
        }

        let id_end = rest.find([' ', '\t', '[']).unwrap_or(rest.len());
        let (id, tail) = rest.split_at(id_end);
        if let Some(ch) = id
            .chars()
            .find(|ch| !(ch.is_alphanumeric() || *ch == '_' || *ch == '-'))
        {
            return Err(EngineError::Internal(format!(
                "unsupported character '{ch}' in subgraph id '{id}'"
            )));
        }
        let tail = tail.trim_start();
        if !tail.is_empty() && !tail.starts_with('[') {
            return Err(EngineError::Internal(format!(
                "unquoted subgraph title '{rest}' contains whitespace"
            )));
        }
    }
    Ok(())
}
