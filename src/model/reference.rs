// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

use super::ids::{FieldId, ReferenceId, TableId};

/// A foreign-key relationship: a source field pointing at a target table.
///
/// `points` holds the last computed route. It stays untouched (possibly
/// stale) when the reference cannot currently be resolved to live entities;
/// when non-empty it has at least two points and only axis-aligned
/// segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    reference_id: ReferenceId,
    source_field: FieldId,
    target_table: TableId,
    points: Vec<Point>,
}

impl Reference {
    pub fn new(reference_id: ReferenceId, source_field: FieldId, target_table: TableId) -> Self {
        Self {
            reference_id,
            source_field,
            target_table,
            points: Vec::new(),
        }
    }

    pub fn reference_id(&self) -> &ReferenceId {
        &self.reference_id
    }

    pub fn source_field(&self) -> &FieldId {
        &self.source_field
    }

    pub fn target_table(&self) -> &TableId {
        &self.target_table
    }

    pub fn set_source_field(&mut self, source_field: FieldId) {
        self.source_field = source_field;
    }

    pub fn set_target_table(&mut self, target_table: TableId) {
        self.target_table = target_table;
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    pub fn clear_points(&mut self) {
        self.points.clear();
    }
}
