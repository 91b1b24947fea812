// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Draws `body` inside a box whose top edge carries `label`. Lines wider than `max_width` are
/// truncated.
pub(crate) fn frame_block(label: &str, body: &str, max_width: usize) -> String {
    let lines = body
        .lines()
        .map(|line| truncate_with_ellipsis(line.trim_end(), max_width))
        .collect::<Vec<_>>();

    let label = format!(" {label} ");
    let width = lines
        .iter()
        .map(|line| text_len(line))
        .max()
        .unwrap_or(0)
        .max(text_len(&label));

    let mut out = String::new();
    out.push('┌');
    out.push('─');
    out.push_str(&label);
    out.push_str(&"─".repeat(width + 1 - text_len(&label)));
    out.push_str("┐\n");
    for line in &lines {
        out.push_str("│ ");
        out.push_str(line);
        out.push_str(&" ".repeat(width - text_len(line)));
        out.push_str(" │\n");
    }
    out.push('└');
    out.push_str(&"─".repeat(width + 2));
    out.push('┘');
    out
}
