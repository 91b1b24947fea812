// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::AnchorEntry;

pub const DEFAULT_MAX_OUTLINE_LEVEL: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineOptions {
    /// Deepest heading level included in the outline (clamped to `1..=6`).
    pub max_level: u8,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_OUTLINE_LEVEL,
        }
    }
}

fn heading_regex() -> &'static Regex {
    static COMPILED: OnceLock<Regex> = OnceLock::new();
    COMPILED.get_or_init(|| Regex::new(r"^(#{1,6})[ \t]+(.+)$").expect("valid heading pattern"))
}

/// Opening fence of a fenced code block: up to three spaces, then three or more backticks or
/// tildes.
fn fence_of(line: &str) -> Option<(char, usize)> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let rest = &line[indent..];
    let marker = rest.chars().next().filter(|ch| matches!(ch, '`' | '~'))?;
    let len = rest.chars().take_while(|&ch| ch == marker).count();
    (len >= 3).then_some((marker, len))
}

fn closes_fence(line: &str, open: (char, usize)) -> bool {
    match fence_of(line) {
        Some((marker, len)) => {
            marker == open.0 && len >= open.1 && line.trim().chars().all(|ch| ch == marker)
        }
        None => false,
    }
}

/// Strips an optional closing `#` sequence (`## Title ##`).
fn clean_title(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_hashes = trimmed.trim_end_matches('#');
    if without_hashes.len() < trimmed.len()
        && (without_hashes.is_empty() || without_hashes.ends_with([' ', '\t']))
    {
        without_hashes.trim_end()
    } else {
        trimmed
    }
}

/// Extracts the heading outline of `body` with the default options.
pub fn extract_outline(body: &str) -> Vec<AnchorEntry> {
    extract_outline_with(body, OutlineOptions::default())
}

/// Scans `body` line by line for `#`-style headings up to `options.max_level`.
///
/// Lines inside fenced code blocks are never headings. Anchor ids are positional
/// (`heading-0`, `heading-1`, ...), so repeated titles stay distinct.
pub fn extract_outline_with(body: &str, options: OutlineOptions) -> Vec<AnchorEntry> {
    let max_level = options.max_level.clamp(1, 6);
    let mut anchors = Vec::new();
    let mut open_fence = None::<(char, usize)>;

    for line in body.lines() {
        if let Some(open) = open_fence {
            if closes_fence(line, open) {
                open_fence = None;
            }
            continue;
        }
        if let Some(fence) = fence_of(line) {
            open_fence = Some(fence);
            continue;
        }

        let Some(caps) = heading_regex().captures(line) else {
            continue;
        };
        let level = caps[1].len() as u8;
        if level > max_level {
            continue;
        }
        let title = clean_title(&caps[2]);
        if title.is_empty() {
            continue;
        }
        let id = format!("heading-{}", anchors.len());
        anchors.push(AnchorEntry::new(id, title, level));
    }

    anchors
}
