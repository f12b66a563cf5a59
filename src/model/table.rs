// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

use super::ids::{FieldId, TableId};

/// Height of a table's title bar in geometry units.
pub const HEADER_HEIGHT: f64 = 28.0;
/// Height of one field row.
pub const FIELD_ROW_HEIGHT: f64 = 16.0;
/// Padding below the last field row.
pub const FIELD_PADDING: f64 = 12.0;

/// A column of a table. Its position is its index in the owning table's
/// field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    field_id: FieldId,
    name: String,
}

impl Field {
    pub fn new(field_id: FieldId, name: impl Into<String>) -> Self {
        Self {
            field_id,
            name: name.into(),
        }
    }

    pub fn field_id(&self) -> &FieldId {
        &self.field_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// A table shape on the canvas.
///
/// `bounds` is the stored drag/resize rectangle. The rectangle routing and
/// rendering agree on is [`Table::visual_bounds`], whose height is derived
/// from the field count; it is recomputed on every call rather than cached
/// so it can never go stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    table_id: TableId,
    name: String,
    bounds: Rect,
    fields: Vec<Field>,
}

impl Table {
    pub fn new(table_id: TableId, name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            table_id,
            name: name.into(),
            bounds,
            fields: Vec::new(),
        }
    }

    pub fn table_id(&self) -> &TableId {
        &self.table_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Vec<Field> {
        &mut self.fields
    }

    pub fn field_index(&self, field_id: &FieldId) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.field_id() == field_id)
    }

    /// The rectangle actually drawn for this table.
    ///
    /// Left/top/width come from the stored bounds; the height is
    /// `HEADER_HEIGHT + n * FIELD_ROW_HEIGHT + FIELD_PADDING` for `n > 0`
    /// fields, and just the header height for an empty table.
    pub fn visual_bounds(&self) -> Rect {
        let bounds = self.bounds.normalized();
        let height = if self.fields.is_empty() {
            HEADER_HEIGHT
        } else {
            HEADER_HEIGHT + self.fields.len() as f64 * FIELD_ROW_HEIGHT + FIELD_PADDING
        };
        Rect::new(bounds.left(), bounds.top(), bounds.width(), height)
    }

    /// Vertical center of the field row at `index`, in canvas coordinates.
    pub fn field_row_y(&self, index: usize) -> f64 {
        self.bounds.normalized().top()
            + HEADER_HEIGHT
            + FIELD_ROW_HEIGHT / 2.0
            + index as f64 * FIELD_ROW_HEIGHT
    }
}
