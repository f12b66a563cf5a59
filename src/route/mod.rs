// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connector routing: side resolution, distribution, path building, and
//! the per-design orchestration pass.
//!
//! The router is deterministic and stateless: the same design yields the
//! same routes, and a full pass runs to completion synchronously. There is
//! no search — paths come from three fixed topology templates (lateral L,
//! wrap-around C, over/under S) with a single corrective shift when the
//! lateral template hits an obstacle.

pub mod distribution;
pub mod path;
pub mod router;
pub mod side;

pub use distribution::{clamp_offset, entry_offset};
pub use path::{build_path, RouteStyle};
pub use router::{route_all, route_one};
pub use side::{resolve_entry_side, resolve_exit_side, Side};

/// Minimum length of the first leg out of the source and the last leg into
/// the target, measured from the rectangle boundary. Keeps connectors
/// visually distinct from the shape outline before they turn.
pub const MIN_SEGMENT: f64 = 16.0;

/// Clearance kept between a corrected route and the obstacle it detours
/// around.
pub const ROUTE_GAP: f64 = 8.0;

/// Spacing between parallel connectors converging on the same target side.
pub const ENTRY_SPACING: f64 = 18.0;

/// Entry points never come closer than this to a target side's corners.
pub const ENTRY_MARGIN: f64 = 8.0;
