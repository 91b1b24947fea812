// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid source checks and repairs applied before text reaches a rendering engine.

pub mod normalize;
pub mod validate;

pub use normalize::{force_quote, normalize, RewriteRule, PRIMARY_RULES, RECOVERY_RULES};
pub use validate::{
    detect_kind, looks_like_diagram, prevalidate, structural_features, DiagramKeyword,
    DiagramKind, PrevalidationError, StructuralFeature, DIAGRAM_KEYWORDS, MIN_DIAGRAM_LEN,
    STRUCTURAL_FEATURES,
};
