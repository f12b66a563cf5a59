// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::geometry::{Point, Rect};

/// An edge of a rectangle where a connector leaves or arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub fn is_lateral(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

fn horizontal_overlap(a: &Rect, b: &Rect) -> f64 {
    a.right().min(b.right()) - a.left().max(b.left())
}

fn vertical_overlap(a: &Rect, b: &Rect) -> f64 {
    a.bottom().min(b.bottom()) - a.top().max(b.top())
}

/// Which lateral side of the source the connector leaves from.
///
/// Connectors always exit a table laterally, aligned with the source
/// field's row. Side-by-side tables exit toward the target. Vertically
/// stacked tables (horizontal overlap) exit on the side with the shorter
/// blocked span — the distance from the source's center to the farthest
/// edge of either rectangle — since the wrap-around detour on that side is
/// shorter. Ties go Right.
pub fn resolve_exit_side(source: &Rect, target: &Rect) -> Side {
    if horizontal_overlap(source, target) > 0.0 {
        let center_x = source.center().x();
        let left_span = center_x - source.left().min(target.left());
        let right_span = source.right().max(target.right()) - center_x;
        return if right_span <= left_span {
            Side::Right
        } else {
            Side::Left
        };
    }

    if target.center().x() > source.center().x() {
        Side::Right
    } else {
        Side::Left
    }
}

/// Which side of the target the connector enters.
///
/// Checked in order:
/// 1. Vertically stacked tables (horizontal overlap) receive on the side
///    the source exits from, giving the wrap-around C topology.
/// 2. Side-by-side tables that are mostly above/below each other (no
///    vertical overlap and a larger vertical than horizontal center
///    distance) receive on Top or Bottom, split at the target's vertical
///    center relative to the exit point.
/// 3. Otherwise the target receives on the side facing the source.
pub fn resolve_entry_side(source: &Rect, target: &Rect, exit_point: Point, exit_side: Side) -> Side {
    if horizontal_overlap(source, target) > 0.0 {
        return exit_side;
    }

    if vertical_overlap(source, target) <= 0.0 {
        let dx = (target.center().x() - source.center().x()).abs();
        let dy = (target.center().y() - source.center().y()).abs();
        if dy > dx {
            return if exit_point.y() < target.center().y() {
                Side::Top
            } else {
                Side::Bottom
            };
        }
    }

    exit_side.opposite()
}
