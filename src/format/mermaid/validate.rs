// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structural pre-validation of candidate diagram text.
//!
//! The policy is two pattern tables: a candidate must start with one of [`DIAGRAM_KEYWORDS`] and
//! contain at least one of [`STRUCTURAL_FEATURES`]. Candidates failing either check are "not a
//! diagram at all" and never reach a rendering engine.

use std::fmt;
use std::sync::OnceLock;

use regex::{Regex, RegexSet};

/// Candidates shorter than this (after trimming) are never diagrams.
pub const MIN_DIAGRAM_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Flowchart,
    Sequence,
    Class,
    State,
    EntityRelation,
    Gantt,
    Journey,
    Timeline,
    Pie,
    GitGraph,
}

impl DiagramKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequence",
            Self::Class => "class",
            Self::State => "state",
            Self::EntityRelation => "entity-relation",
            Self::Gantt => "gantt",
            Self::Journey => "journey",
            Self::Timeline => "timeline",
            Self::Pie => "pie",
            Self::GitGraph => "git-graph",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramKeyword {
    pub kind: DiagramKind,
    pub pattern: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralFeature {
    pub name: &'static str,
    pub pattern: &'static str,
}

pub const DIAGRAM_KEYWORDS: &[DiagramKeyword] = &[
    DiagramKeyword {
        kind: DiagramKind::Flowchart,
        pattern: r"(?i)^(?:flowchart|graph)(?:[ \t]+(?:TD|TB|BT|RL|LR))?[ \t]*(?:;|\r?\n|$)",
    },
    DiagramKeyword {
        kind: DiagramKind::Sequence,
        pattern: r"(?i)^sequenceDiagram\b",
    },
    DiagramKeyword {
        kind: DiagramKind::Class,
        pattern: r"(?i)^classDiagram(?:-v2)?\b",
    },
    DiagramKeyword {
        kind: DiagramKind::State,
        pattern: r"(?i)^stateDiagram(?:-v2)?\b",
    },
    DiagramKeyword {
        kind: DiagramKind::EntityRelation,
        pattern: r"(?i)^erDiagram\b",
    },
    DiagramKeyword {
        kind: DiagramKind::Gantt,
        pattern: r"(?i)^gantt\b",
    },
    DiagramKeyword {
        kind: DiagramKind::Journey,
        pattern: r"(?i)^journey\b",
    },
    DiagramKeyword {
        kind: DiagramKind::Timeline,
        pattern: r"(?i)^timeline\b",
    },
    DiagramKeyword {
        kind: DiagramKind::Pie,
        pattern: r"(?i)^pie\b",
    },
    DiagramKeyword {
        kind: DiagramKind::GitGraph,
        pattern: r"(?i)^gitGraph\b",
    },
];

pub const STRUCTURAL_FEATURES: &[StructuralFeature] = &[
    StructuralFeature {
        name: "arrow",
        pattern: r"-->|->>|==>|-\.->",
    },
    StructuralFeature {
        name: "line",
        pattern: r"---",
    },
    StructuralFeature {
        name: "square-node",
        pattern: r"\[[^\]\n]*\]",
    },
    StructuralFeature {
        name: "round-node",
        pattern: r"\([^)\n]*\)",
    },
    StructuralFeature {
        name: "curly-node",
        pattern: r"\{[^}\n]*\}",
    },
    StructuralFeature {
        name: "participant",
        pattern: r"(?i)\b(?:participant|actor)\s+\S",
    },
    StructuralFeature {
        name: "class-declaration",
        pattern: r"(?i)\bclass\s+\w+",
    },
    StructuralFeature {
        name: "state-declaration",
        pattern: r"(?i)\bstate\s+\w+",
    },
    StructuralFeature {
        name: "relationship-pipe",
        pattern: r"\|\w+\|",
    },
    StructuralFeature {
        name: "cardinality",
        pattern: r"[|}][|o](?:--|\.\.)[|o][|{]",
    },
    StructuralFeature {
        name: "subgraph",
        pattern: r"(?i)\bsubgraph\b",
    },
    StructuralFeature {
        name: "direction",
        pattern: r"(?i)\bdirection\s+(?:TD|TB|BT|RL|LR)\b",
    },
    StructuralFeature {
        name: "section",
        pattern: r"(?im)^[ \t]*section[ \t]+\S",
    },
    StructuralFeature {
        name: "commit",
        pattern: r"(?im)^[ \t]*(?:commit|branch|checkout|merge)\b",
    },
    StructuralFeature {
        name: "pie-slice",
        pattern: r#"(?m)^[ \t]*"[^"\n]+"[ \t]*:[ \t]*[0-9]"#,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PrevalidationError {
    #[error("candidate is shorter than {} characters", MIN_DIAGRAM_LEN)]
    TooShort,
    #[error("candidate does not start with a known diagram keyword")]
    UnknownKeyword,
    #[error("{kind} candidate contains no diagram structure")]
    NoStructure { kind: DiagramKind },
}

fn keyword_regexes() -> &'static [(DiagramKind, Regex)] {
    static COMPILED: OnceLock<Vec<(DiagramKind, Regex)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        DIAGRAM_KEYWORDS
            .iter()
            .map(|keyword| {
                let regex = Regex::new(keyword.pattern).expect("valid diagram keyword pattern");
                (keyword.kind, regex)
            })
            .collect()
    })
}

fn feature_set() -> &'static RegexSet {
    static COMPILED: OnceLock<RegexSet> = OnceLock::new();
    COMPILED.get_or_init(|| {
        RegexSet::new(STRUCTURAL_FEATURES.iter().map(|feature| feature.pattern))
            .expect("valid structural feature patterns")
    })
}

/// The diagram kind named by the leading keyword of `text`, if any.
pub fn detect_kind(text: &str) -> Option<DiagramKind> {
    let text = text.trim_start();
    keyword_regexes()
        .iter()
        .find(|(_, regex)| regex.is_match(text))
        .map(|(kind, _)| *kind)
}

/// Names of the structural features present in `text`, in table order.
pub fn structural_features(text: &str) -> Vec<&'static str> {
    feature_set()
        .matches(text)
        .into_iter()
        .map(|idx| STRUCTURAL_FEATURES[idx].name)
        .collect()
}

/// Checks that `text` plausibly is diagram source. `text` is expected to be trimmed.
pub fn prevalidate(text: &str) -> Result<DiagramKind, PrevalidationError> {
    if text.chars().count() < MIN_DIAGRAM_LEN {
        return Err(PrevalidationError::TooShort);
    }
    let kind = detect_kind(text).ok_or(PrevalidationError::UnknownKeyword)?;
    if !feature_set().is_match(text) {
        return Err(PrevalidationError::NoStructure { kind });
    }
    Ok(kind)
}

pub fn looks_like_diagram(text: &str) -> bool {
    prevalidate(text.trim()).is_ok()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{
        detect_kind, prevalidate, structural_features, DiagramKind, PrevalidationError,
        DIAGRAM_KEYWORDS, STRUCTURAL_FEATURES,
    };

    #[test]
    fn pattern_tables_compile() {
        assert_eq!(super::keyword_regexes().len(), DIAGRAM_KEYWORDS.len());
        assert_eq!(super::feature_set().len(), STRUCTURAL_FEATURES.len());
    }

    #[rstest]
    #[case("flowchart LR\nA-->B", DiagramKind::Flowchart)]
    #[case("graph TD\n  a[One] --> b[Two]", DiagramKind::Flowchart)]
    #[case("flowchart\nA-->B", DiagramKind::Flowchart)]
    #[case("flowchart LR\r\nA-->B", DiagramKind::Flowchart)]
    #[case("graph TD;\r\n  a --> b", DiagramKind::Flowchart)]
    #[case("sequenceDiagram\r\n  Alice->>Bob: hi", DiagramKind::Sequence)]
    #[case("sequenceDiagram\n  participant Alice\n  Alice->>Bob: hi", DiagramKind::Sequence)]
    #[case("classDiagram\n  class Animal", DiagramKind::Class)]
    #[case("stateDiagram-v2\n  [*] --> Idle", DiagramKind::State)]
    #[case("erDiagram\n  CUSTOMER ||--o{ ORDER : places", DiagramKind::EntityRelation)]
    #[case("gantt\n  title Plan\n  section Build\n  task :a1, 2024-01-01, 3d", DiagramKind::Gantt)]
    #[case("timeline\n  title History\n  section 2020\n  launch", DiagramKind::Timeline)]
    #[case("pie title Pets\n  \"Dogs\" : 386\n  \"Cats\" : 85", DiagramKind::Pie)]
    #[case("gitGraph\n  commit\n  branch develop", DiagramKind::GitGraph)]
    fn accepts_known_diagram_shapes(#[case] text: &str, #[case] kind: DiagramKind) {
        assert_eq!(prevalidate(text), Ok(kind));
    }

    #[rstest]
    #[case("hello world", PrevalidationError::UnknownKeyword)]
    #[case("graph of sales [2020]", PrevalidationError::UnknownKeyword)]
    #[case("A-->B", PrevalidationError::TooShort)]
    #[case(
        "flowchart LR\njust words",
        PrevalidationError::NoStructure { kind: DiagramKind::Flowchart }
    )]
    fn rejects_non_diagrams(#[case] text: &str, #[case] expected: PrevalidationError) {
        assert_eq!(prevalidate(text), Err(expected));
    }

    #[test]
    fn keyword_match_is_case_insensitive_and_ignores_leading_space() {
        assert_eq!(detect_kind("  SEQUENCEDIAGRAM\n"), Some(DiagramKind::Sequence));
        assert_eq!(detect_kind("Flowchart TB;"), Some(DiagramKind::Flowchart));
        assert_eq!(detect_kind("classDiagrams"), None);
    }

    #[test]
    fn reports_matched_features_in_table_order() {
        let features = structural_features("flowchart LR\n  subgraph Api\n  a[A] --> b\n  end");
        assert_eq!(features, vec!["arrow", "square-node", "subgraph"]);
    }
}
