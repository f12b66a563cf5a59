// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Route orchestration: one synchronous pass over a design.
//!
//! Each pass resolves every reference against the live tables, groups the
//! routable ones by target side for distribution, and writes fresh
//! waypoints back. References that cannot be resolved (deleted field or
//! table) are skipped silently and keep their previous waypoints; that is
//! an editing state, not an error.

use std::collections::BTreeMap;

use crate::geometry::{Point, Rect};
use crate::model::{ReferenceId, SchemaDesign, TableId};

use super::distribution::{clamp_offset, entry_offset};
use super::path::{build_path, RouteStyle};
use super::side::{resolve_entry_side, resolve_exit_side, Side};
use super::{ENTRY_MARGIN, ENTRY_SPACING};

struct ResolvedReference {
    reference_id: ReferenceId,
    source_table: TableId,
    target_table: TableId,
    exit_point: Point,
    exit_side: Side,
    entry_side: Side,
}

fn resolve_references(
    design: &SchemaDesign,
) -> (BTreeMap<TableId, Rect>, Vec<ResolvedReference>) {
    let rects: BTreeMap<TableId, Rect> = design
        .tables()
        .iter()
        .map(|(table_id, table)| (table_id.clone(), table.visual_bounds()))
        .collect();

    let mut resolved = Vec::with_capacity(design.references().len());
    for (reference_id, reference) in design.references() {
        let Some((source_table_id, field_index)) = design.find_field(reference.source_field())
        else {
            continue;
        };
        let Some(target_rect) = rects.get(reference.target_table()) else {
            continue;
        };

        let source_table = design
            .tables()
            .get(source_table_id)
            .expect("field owner exists (resolved above)");
        let source_rect = rects
            .get(source_table_id)
            .expect("field owner exists (resolved above)");

        let exit_side = resolve_exit_side(source_rect, target_rect);
        let exit_x = match exit_side {
            Side::Right => source_rect.right(),
            _ => source_rect.left(),
        };
        let exit_point = Point::new(exit_x, source_table.field_row_y(field_index));
        let entry_side = resolve_entry_side(source_rect, target_rect, exit_point, exit_side);

        resolved.push(ResolvedReference {
            reference_id: reference_id.clone(),
            source_table: source_table_id.clone(),
            target_table: reference.target_table().clone(),
            exit_point,
            exit_side,
            entry_side,
        });
    }

    (rects, resolved)
}

fn entry_point_on(target: &Rect, side: Side, offset: f64) -> Point {
    match side {
        Side::Left => Point::new(target.left(), target.center().y() + offset),
        Side::Right => Point::new(target.right(), target.center().y() + offset),
        Side::Top => Point::new(target.center().x() + offset, target.top()),
        Side::Bottom => Point::new(target.center().x() + offset, target.bottom()),
    }
}

fn compute_routes(design: &SchemaDesign, style: &RouteStyle) -> Vec<(ReferenceId, Vec<Point>)> {
    let (rects, resolved) = resolve_references(design);

    // Distribution slots per (target, entry side), in reference-id order.
    let mut groups: BTreeMap<(TableId, Side), Vec<usize>> = BTreeMap::new();
    for (index, reference) in resolved.iter().enumerate() {
        groups
            .entry((reference.target_table.clone(), reference.entry_side))
            .or_default()
            .push(index);
    }

    let mut routes = Vec::with_capacity(resolved.len());
    for ((target_table, entry_side), members) in &groups {
        let target_rect = *rects.get(target_table).expect("target resolved above");
        let side_length = if entry_side.is_lateral() {
            target_rect.height()
        } else {
            target_rect.width()
        };

        for (slot, &index) in members.iter().enumerate() {
            let reference = &resolved[index];
            let offset = clamp_offset(
                entry_offset(slot, members.len(), ENTRY_SPACING),
                side_length,
                ENTRY_MARGIN,
            );
            let entry_point = entry_point_on(&target_rect, *entry_side, offset);

            let source_rect = *rects
                .get(&reference.source_table)
                .expect("source resolved above");
            let obstacles: Vec<Rect> = rects
                .iter()
                .filter(|(table_id, _)| {
                    *table_id != &reference.source_table && *table_id != target_table
                })
                .map(|(_, rect)| *rect)
                .collect();

            let points = build_path(
                reference.exit_point,
                reference.exit_side,
                entry_point,
                *entry_side,
                &source_rect,
                &target_rect,
                &obstacles,
                style,
            );
            routes.push((reference.reference_id.clone(), points));
        }
    }

    routes
}

/// Recomputes the waypoints of every routable reference in the design.
///
/// References whose source field or target table cannot be resolved are
/// skipped, keeping their previous (possibly stale) waypoints. The pass is
/// idempotent: re-running it over unchanged geometry writes identical
/// routes.
pub fn route_all(design: &mut SchemaDesign) {
    let routes = compute_routes(design, &RouteStyle::default());
    for (reference_id, points) in routes {
        if let Some(reference) = design.references_mut().get_mut(&reference_id) {
            reference.set_points(points);
        }
    }
}

/// Recomputes a single reference without touching the others.
///
/// The distribution slots of sibling references converging on the same
/// target side are taken into account, so the result matches what a full
/// [`route_all`] pass would produce for this reference. Returns `false`
/// when the reference is unknown or currently unroutable.
pub fn route_one(design: &mut SchemaDesign, reference_id: &ReferenceId) -> bool {
    let routes = compute_routes(design, &RouteStyle::default());
    let Some((_, points)) = routes.into_iter().find(|(id, _)| id == reference_id) else {
        return false;
    };
    let Some(reference) = design.references_mut().get_mut(reference_id) else {
        return false;
    };
    reference.set_points(points);
    true
}
