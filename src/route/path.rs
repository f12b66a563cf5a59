// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Path builder: turns resolved exit/entry points and sides into a
//! concrete orthogonal polyline.
//!
//! Three topology templates, checked in order:
//! - wrap-around C when both endpoints sit on the same-facing lateral side
//!   (vertically stacked tables),
//! - lateral L for Left/Right entries, with one corrective shift when the
//!   turning segment hits an obstacle,
//! - over/under S for Top/Bottom entries.
//!
//! Collision handling is single-shot: only the lateral turning segment is
//! corrected, and only once.

use smallvec::SmallVec;

use crate::geometry::{segment_intersects_rect, Point, Rect};

use super::side::Side;
use super::{MIN_SEGMENT, ROUTE_GAP};

/// Legs shorter than this are dropped as degenerate.
const MIN_LEG: f64 = 1.0;

/// Tunable distances of one routing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStyle {
    gap: f64,
    min_segment: f64,
}

impl RouteStyle {
    pub fn new(gap: f64, min_segment: f64) -> Self {
        Self { gap, min_segment }
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    pub fn min_segment(&self) -> f64 {
        self.min_segment
    }
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            gap: ROUTE_GAP,
            min_segment: MIN_SEGMENT,
        }
    }
}

/// Builds the waypoint list for one connector.
///
/// `exit_point` must lie on `source`'s boundary on `exit_side`, and
/// `entry_point` on `target`'s boundary on `entry_side`. `obstacles` are
/// the visual rectangles of every table except source and target. The
/// result is orthogonal, anchored on both boundaries, and honors the
/// minimum-segment rule on its first and last legs.
#[allow(clippy::too_many_arguments)]
pub fn build_path(
    exit_point: Point,
    exit_side: Side,
    entry_point: Point,
    entry_side: Side,
    source: &Rect,
    target: &Rect,
    obstacles: &[Rect],
    style: &RouteStyle,
) -> Vec<Point> {
    let mut raw: SmallVec<[Point; 8]> = SmallVec::new();
    raw.push(exit_point);

    if exit_side.is_lateral() && entry_side == exit_side {
        push_wrap_around(&mut raw, exit_point, entry_point, exit_side, source, target, style);
    } else if entry_side.is_lateral() {
        push_lateral(
            &mut raw,
            exit_point,
            exit_side,
            entry_point,
            entry_side,
            source,
            target,
            obstacles,
            style,
        );
    } else {
        push_over_under(
            &mut raw,
            exit_point,
            exit_side,
            entry_point,
            entry_side,
            source,
            style,
        );
    }

    simplify(raw)
}

/// C topology: out past the far edge of both rectangles, down/up to the
/// entry row, and in. Exactly three points beyond the start.
fn push_wrap_around(
    points: &mut SmallVec<[Point; 8]>,
    exit_point: Point,
    entry_point: Point,
    side: Side,
    source: &Rect,
    target: &Rect,
    style: &RouteStyle,
) {
    let reach = style.min_segment + style.gap;
    let outer_x = match side {
        Side::Right => source.right().max(target.right()) + reach,
        _ => source.left().min(target.left()) - reach,
    };

    points.push(Point::new(outer_x, exit_point.y()));
    points.push(Point::new(outer_x, entry_point.y()));
    points.push(entry_point);
}

/// L topology: horizontal to a midline, vertical to the entry row,
/// horizontal into the target.
///
/// When the corridor between the tables is narrower than the two stub
/// legs, the turn cannot sit between them; the route then detours around
/// the outside of both rectangles, keeping each stub at full length.
/// Aligned rows collapse to a straight segment, with a jog around the
/// first table sitting on the shared row.
#[allow(clippy::too_many_arguments)]
fn push_lateral(
    points: &mut SmallVec<[Point; 8]>,
    exit_point: Point,
    exit_side: Side,
    entry_point: Point,
    entry_side: Side,
    source: &Rect,
    target: &Rect,
    obstacles: &[Rect],
    style: &RouteStyle,
) {
    if (exit_point.y() - entry_point.y()).abs() < MIN_LEG {
        push_aligned(points, exit_point, exit_side, entry_point, obstacles, style);
        return;
    }

    let min = style.min_segment;
    let first_x = match exit_side {
        Side::Right => (exit_point.x() + min).max(source.right() + min),
        _ => (exit_point.x() - min).min(source.left() - min),
    };
    let last_x = match entry_side {
        Side::Left => (entry_point.x() - min).min(target.left() - min),
        _ => (entry_point.x() + min).max(target.right() + min),
    };

    let stubs_cross = match exit_side {
        Side::Right => first_x > last_x,
        _ => first_x < last_x,
    };
    if stubs_cross {
        push_around(points, exit_point, entry_point, first_x, last_x, source, target, style);
        return;
    }

    let mut mid_x = (first_x + last_x) / 2.0;

    // Single corrective shift: if the turning segment would cut through an
    // obstacle, move the midline past the obstacle's far edge in the
    // direction of travel.
    let travel = if exit_side == Side::Right { 1.0 } else { -1.0 };
    let turn_from = Point::new(mid_x, exit_point.y());
    let turn_to = Point::new(mid_x, entry_point.y());
    for obstacle in obstacles {
        if segment_intersects_rect(turn_from, turn_to, obstacle, style.gap) {
            let obstacle = obstacle.normalized();
            mid_x = if travel > 0.0 {
                obstacle.right() + style.gap
            } else {
                obstacle.left() - style.gap
            };
            break;
        }
    }

    points.push(Point::new(mid_x, exit_point.y()));
    points.push(Point::new(mid_x, entry_point.y()));
    points.push(entry_point);
}

/// Aligned rows: a single straight segment on the exit row, with a jog
/// around the first table sitting on that row.
fn push_aligned(
    points: &mut SmallVec<[Point; 8]>,
    exit_point: Point,
    exit_side: Side,
    entry_point: Point,
    obstacles: &[Rect],
    style: &RouteStyle,
) {
    let row_y = exit_point.y();
    let straight_end = Point::new(entry_point.x(), row_y);

    let blocking = obstacles
        .iter()
        .find(|obstacle| segment_intersects_rect(exit_point, straight_end, obstacle, style.gap));
    if let Some(obstacle) = blocking {
        let obstacle = obstacle.normalized();
        let (jog_from_x, jog_to_x) = if exit_side == Side::Right {
            (obstacle.left() - style.gap, obstacle.right() + style.gap)
        } else {
            (obstacle.right() + style.gap, obstacle.left() - style.gap)
        };
        // Duck past the nearer horizontal edge; ties go over the top.
        let jog_y = if row_y - obstacle.top() <= obstacle.bottom() - row_y {
            obstacle.top() - style.gap
        } else {
            obstacle.bottom() + style.gap
        };
        points.push(Point::new(jog_from_x, row_y));
        points.push(Point::new(jog_from_x, jog_y));
        points.push(Point::new(jog_to_x, jog_y));
        points.push(Point::new(jog_to_x, row_y));
    }

    points.push(straight_end);
}

/// The corridor between the tables cannot fit both stub legs, so the turn
/// moves outside: out the full stub, around the nearer horizontal face of
/// both rectangles, back in on the entry stub.
#[allow(clippy::too_many_arguments)]
fn push_around(
    points: &mut SmallVec<[Point; 8]>,
    exit_point: Point,
    entry_point: Point,
    first_x: f64,
    last_x: f64,
    source: &Rect,
    target: &Rect,
    style: &RouteStyle,
) {
    let hull = source.normalized().union(target);
    let above = (exit_point.y() - hull.top()) + (entry_point.y() - hull.top());
    let below = (hull.bottom() - exit_point.y()) + (hull.bottom() - entry_point.y());
    let detour_y = if above <= below {
        hull.top() - style.gap
    } else {
        hull.bottom() + style.gap
    };

    points.push(Point::new(first_x, exit_point.y()));
    points.push(Point::new(first_x, detour_y));
    points.push(Point::new(last_x, detour_y));
    points.push(Point::new(last_x, entry_point.y()));
    points.push(entry_point);
}

/// S topology: minimum-length lateral leg, vertical to an approach row
/// just outside the target's near edge, horizontal to the entry column,
/// and vertically in.
fn push_over_under(
    points: &mut SmallVec<[Point; 8]>,
    exit_point: Point,
    exit_side: Side,
    entry_point: Point,
    entry_side: Side,
    source: &Rect,
    style: &RouteStyle,
) {
    let min = style.min_segment;
    let first_x = match exit_side {
        Side::Right => (exit_point.x() + min).max(source.right() + min),
        _ => (exit_point.x() - min).min(source.left() - min),
    };

    let mut approach_y = match entry_side {
        Side::Top => entry_point.y() - min,
        _ => entry_point.y() + min,
    };

    // Keep the approach leg from cutting through the source when source
    // and target sit on the same side of the approach row.
    let approach_from = Point::new(first_x, approach_y);
    let approach_to = Point::new(entry_point.x(), approach_y);
    if segment_intersects_rect(approach_from, approach_to, source, 0.0) {
        approach_y = match entry_side {
            Side::Top => approach_y.min(source.top() - min),
            _ => approach_y.max(source.bottom() + min),
        };
    }

    points.push(Point::new(first_x, exit_point.y()));
    points.push(Point::new(first_x, approach_y));
    points.push(Point::new(entry_point.x(), approach_y));
    points.push(entry_point);
}

/// Drops near-duplicate consecutive points, then interior points that do
/// not turn.
fn simplify(raw: SmallVec<[Point; 8]>) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::with_capacity(raw.len());
    for point in raw {
        let duplicate = points.last().is_some_and(|last| {
            (point.x() - last.x()).abs() < MIN_LEG && (point.y() - last.y()).abs() < MIN_LEG
        });
        if !duplicate {
            points.push(point);
        }
    }

    let mut index = 1;
    while index + 1 < points.len() {
        let a = points[index - 1];
        let b = points[index];
        let c = points[index + 1];
        let straight_x = (a.x() - b.x()).abs() < MIN_LEG && (b.x() - c.x()).abs() < MIN_LEG;
        let straight_y = (a.y() - b.y()).abs() < MIN_LEG && (b.y() - c.y()).abs() < MIN_LEG;
        if straight_x || straight_y {
            points.remove(index);
        } else {
            index += 1;
        }
    }

    points
}
