// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Geometry kernel: points, rectangles, and the primitive tests routing
//! builds on.
//!
//! All operations are total over finite coordinates. NaN inputs propagate
//! NaN outputs; [`line_intersection`] uses a NaN point as its "no
//! intersection" sentinel.

use serde::{Deserialize, Serialize};

/// An immutable 2D coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Sentinel returned by [`line_intersection`] when no intersection
    /// exists.
    pub const NAN: Point = Point {
        x: f64::NAN,
        y: f64::NAN,
    };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

/// An axis-aligned rectangle given as left/top corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Returns an equivalent rectangle with non-negative extent.
    ///
    /// Rectangles built from drag coordinates can carry a negative width
    /// or height; every query below normalizes first.
    pub fn normalized(&self) -> Self {
        let (left, width) = if self.width < 0.0 {
            (self.left + self.width, -self.width)
        } else {
            (self.left, self.width)
        };
        let (top, height) = if self.height < 0.0 {
            (self.top + self.height, -self.height)
        } else {
            (self.top, self.height)
        };
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Grows the rectangle by `margin` on all four sides.
    pub fn inflate(&self, margin: f64) -> Self {
        let rect = self.normalized();
        Self {
            left: rect.left - margin,
            top: rect.top - margin,
            width: rect.width + margin * 2.0,
            height: rect.height + margin * 2.0,
        }
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Self {
        let a = self.normalized();
        let b = other.normalized();
        let left = a.left.min(b.left);
        let top = a.top.min(b.top);
        Self {
            left,
            top,
            width: a.right().max(b.right()) - left,
            height: a.bottom().max(b.bottom()) - top,
        }
    }

    /// Inclusive bounds test.
    pub fn contains_point(&self, point: Point) -> bool {
        let rect = self.normalized();
        point.x() >= rect.left
            && point.x() <= rect.right()
            && point.y() >= rect.top
            && point.y() <= rect.bottom()
    }
}

/// Returns true when the segment from `p1` to `p2` passes through, touches,
/// or lies inside `rect` inflated by `margin`.
///
/// This is a conservative bounding-box overlap test, not exact line
/// clipping. For axis-aligned segments the two coincide; diagonal segments
/// may over-report.
pub fn segment_intersects_rect(p1: Point, p2: Point, rect: &Rect, margin: f64) -> bool {
    let rect = rect.inflate(margin);
    p1.x().min(p2.x()) <= rect.right()
        && p1.x().max(p2.x()) >= rect.left()
        && p1.y().min(p2.y()) <= rect.bottom()
        && p1.y().max(p2.y()) >= rect.top()
}

/// Intersection of the infinite lines through `a1`..`a2` and `b1`..`b2`.
///
/// Parallel (or degenerate) lines yield [`Point::NAN`].
pub fn line_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Point {
    let adx = a2.x() - a1.x();
    let ady = a2.y() - a1.y();
    let bdx = b2.x() - b1.x();
    let bdy = b2.y() - b1.y();

    let denom = adx * bdy - ady * bdx;
    if denom == 0.0 || !denom.is_finite() {
        return Point::NAN;
    }

    let t = ((b1.x() - a1.x()) * bdy - (b1.y() - a1.y()) * bdx) / denom;
    Point::new(a1.x() + t * adx, a1.y() + t * ady)
}
