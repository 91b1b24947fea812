// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// A top-level slice of a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBlock {
    /// Markdown source between code blocks, passed through verbatim.
    Markdown(String),
    Code(CodeBlock),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// First word of the fence info string (`mermaid` for "```mermaid title"), if any.
    pub language: Option<String>,
    /// Raw block text, without the fences.
    pub text: String,
    pub fenced: bool,
    /// Byte range of the whole block (fences included) within the document.
    pub source_range: Range<usize>,
}

impl CodeBlock {
    pub fn is_language(&self, language: &str) -> bool {
        self.language.as_deref().is_some_and(|lang| lang.eq_ignore_ascii_case(language))
    }
}

fn push_markdown(blocks: &mut Vec<DocumentBlock>, body: &str, range: Range<usize>) {
    let text = body[range].trim_matches(&['\r', '\n'][..]);
    if !text.trim().is_empty() {
        blocks.push(DocumentBlock::Markdown(text.to_owned()));
    }
}

/// Splits `body` into markdown runs and code blocks, in document order.
pub fn split_blocks(body: &str) -> Vec<DocumentBlock> {
    let mut blocks = Vec::new();
    let mut cursor = 0usize;
    let mut current: Option<CodeBlock> = None;

    for (event, range) in Parser::new_ext(body, Options::empty()).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                if range.start > cursor {
                    push_markdown(&mut blocks, body, cursor..range.start);
                }
                let (language, fenced) = match kind {
                    CodeBlockKind::Fenced(info) => {
                        let language = info.split_whitespace().next().map(str::to_owned);
                        (language, true)
                    }
                    CodeBlockKind::Indented => (None, false),
                };
                current = Some(CodeBlock {
                    language,
                    text: String::new(),
                    fenced,
                    source_range: range,
                });
            }
            Event::Text(text) => {
                if let Some(block) = current.as_mut() {
                    block.text.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(block) = current.take() {
                    cursor = block.source_range.end;
                    blocks.push(DocumentBlock::Code(block));
                }
            }
            _ => {}
        }
    }

    if cursor < body.len() {
        push_markdown(&mut blocks, body, cursor..body.len());
    }
    blocks
}
