// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Anti-congestion distribution: connectors converging on the same side of
//! one target are spread symmetrically around the side's center so they
//! stay visually distinguishable.
//!
//! The caller assigns slot indices in reference-id order, which keeps
//! re-routing deterministic and keeps unrelated connectors in place when a
//! reference is added or removed.

/// Offset of slot `index` out of `count` from the side's center.
///
/// Offsets are symmetric around zero and monotone in `index`:
/// `(index - (count - 1) / 2) * spacing`.
pub fn entry_offset(index: usize, count: usize, spacing: f64) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    (index as f64 - (count as f64 - 1.0) / 2.0) * spacing
}

/// Clamps an offset so the entry point stays on the target's side.
///
/// The magnitude is limited to `side_length / 2 - margin`; sides shorter
/// than `2 * margin` collapse every entry to the side's center.
pub fn clamp_offset(offset: f64, side_length: f64, margin: f64) -> f64 {
    let limit = side_length / 2.0 - margin;
    if limit <= 0.0 {
        return 0.0;
    }
    offset.clamp(-limit, limit)
}
