// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus — orthogonal connector routing for database schema diagrams.
//!
//! Tables are rectangles, foreign keys are references, and routes are
//! axis-aligned polylines. This crate owns the geometry kernel, exit/entry
//! side resolution, connector distribution, and path building; rendering,
//! editing, and persistence live in the host application.
//!
//! The host is expected to call [`route::route_all`] once after loading a
//! design and again from its design-level bounds-changed notification.

pub mod geometry;
pub mod model;
pub mod route;
