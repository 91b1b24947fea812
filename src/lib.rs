// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wikiview: navigation and rendering core for generated repository wikis.
//!
//! A catalogue payload becomes a navigable tree ([`tree`], [`query`]); the selected document is
//! split into an outline and blocks ([`format::markdown`]); diagram blocks go through the
//! validated, debounced render pipeline in [`render`]. [`viewport::DocumentViewport`] ties these
//! together for a UI.

pub mod config;
pub mod format;
pub mod model;
pub mod query;
pub mod render;
pub mod store;
pub mod tree;
pub mod viewport;
