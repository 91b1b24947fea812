// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rewrites that repair known grouping-block (`subgraph`) header defects.
//!
//! [`normalize`] runs [`PRIMARY_RULES`] before every render attempt. [`force_quote`] runs the
//! stricter [`RECOVERY_RULES`] once, after an engine failure that was not a syntax error.
//! Both are pure, line-oriented and idempotent; quoted titles are never touched.

use std::sync::OnceLock;

use regex::{Captures, Regex};

#[derive(Debug, Clone, Copy)]
pub struct RewriteRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub rewrite: fn(&Captures<'_>) -> String,
}

pub const PRIMARY_RULES: &[RewriteRule] = &[
    RewriteRule {
        name: "quote-title-with-parenthetical",
        pattern: r#"(?m)^(?P<indent>[ \t]*)subgraph[ \t]+(?P<title>[^"\n(\[]+?)(?P<paren>[ \t]*\([^)\n]*\))"#,
        rewrite: quote_title_with_parenthetical,
    },
    RewriteRule {
        name: "quote-title-with-spaces-or-brackets",
        pattern: r#"(?m)^(?P<indent>[ \t]*)subgraph[ \t]+(?P<title>[^"\n]+?)[ \t]*$"#,
        rewrite: quote_title_if_needed,
    },
];

pub const RECOVERY_RULES: &[RewriteRule] = &[RewriteRule {
    name: "force-quote-title",
    pattern: r#"(?m)^(?P<indent>[ \t]*)subgraph[ \t]+(?P<title>[^"\n;]+?)[ \t]*(?P<tail>;.*)?$"#,
    rewrite: force_quote_title,
}];

fn quote_title_with_parenthetical(caps: &Captures<'_>) -> String {
    format!(
        "{}subgraph \"{}{}\"",
        &caps["indent"],
        caps["title"].trim(),
        &caps["paren"]
    )
}

fn quote_title_if_needed(caps: &Captures<'_>) -> String {
    let title = caps["title"].trim();
    let needs_quotes = title.contains(char::is_whitespace)
        || title.contains(['(', ')', '[', ']', '{', '}']);
    if needs_quotes {
        format!("{}subgraph \"{}\"", &caps["indent"], title)
    } else {
        caps[0].to_owned()
    }
}

fn force_quote_title(caps: &Captures<'_>) -> String {
    let tail = caps.name("tail").map_or("", |tail| tail.as_str());
    format!(
        "{}subgraph \"{}\"{}",
        &caps["indent"],
        caps["title"].trim(),
        tail
    )
}

fn compile(rules: &'static [RewriteRule]) -> Vec<Regex> {
    rules
        .iter()
        .map(|rule| Regex::new(rule.pattern).expect("valid rewrite rule pattern"))
        .collect()
}

fn primary_regexes() -> &'static [Regex] {
    static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| compile(PRIMARY_RULES))
}

fn recovery_regexes() -> &'static [Regex] {
    static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| compile(RECOVERY_RULES))
}

fn apply(rules: &[RewriteRule], regexes: &[Regex], text: &str) -> String {
    let mut out = text.trim().replace("\r\n", "\n");
    for (rule, regex) in rules.iter().zip(regexes) {
        let rewritten = regex.replace_all(&out, |caps: &Captures<'_>| (rule.rewrite)(caps));
        if let std::borrow::Cow::Owned(rewritten) = rewritten {
            tracing::trace!(rule = rule.name, "rewrote subgraph header");
            out = rewritten;
        }
    }
    out
}

/// Quotes `subgraph` titles that contain whitespace or brackets, or that carry a trailing
/// parenthetical.
pub fn normalize(text: &str) -> String {
    apply(PRIMARY_RULES, primary_regexes(), text)
}

/// Quotes every unquoted `subgraph` title, whatever its shape.
pub fn force_quote(text: &str) -> String {
    apply(RECOVERY_RULES, recovery_regexes(), text)
}
