// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

use super::ids::{FieldId, ReferenceId, TableId};
use super::reference::Reference;
use super::table::Table;

/// The aggregate a routing pass runs against: all tables and all
/// references of one schema diagram.
///
/// Both maps are keyed by their typed ids, so every iteration order in the
/// crate is id order. That order doubles as the stable assignment order for
/// connector distribution: adding or removing one reference never shuffles
/// the slots of unrelated connectors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaDesign {
    tables: BTreeMap<TableId, Table>,
    references: BTreeMap<ReferenceId, Reference>,
}

impl SchemaDesign {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tables(&self) -> &BTreeMap<TableId, Table> {
        &self.tables
    }

    pub fn tables_mut(&mut self) -> &mut BTreeMap<TableId, Table> {
        &mut self.tables
    }

    pub fn references(&self) -> &BTreeMap<ReferenceId, Reference> {
        &self.references
    }

    pub fn references_mut(&mut self) -> &mut BTreeMap<ReferenceId, Reference> {
        &mut self.references
    }

    /// Resolves a field to its owning table and its index in that table's
    /// field order.
    ///
    /// A plain scan over the table map: there is no secondary index to keep
    /// in sync, and designs are tens of tables, not thousands.
    pub fn find_field(&self, field_id: &FieldId) -> Option<(&TableId, usize)> {
        self.tables.iter().find_map(|(table_id, table)| {
            table.field_index(field_id).map(|index| (table_id, index))
        })
    }

    /// Replaces a table's stored bounds. Returns whether anything changed.
    ///
    /// This is the single mutation point the host's bounds-changed event
    /// observes; a `true` result is its cue to run
    /// [`crate::route::route_all`].
    pub fn set_table_bounds(&mut self, table_id: &TableId, bounds: Rect) -> bool {
        let Some(table) = self.tables.get_mut(table_id) else {
            return false;
        };
        if table.bounds() == &bounds {
            return false;
        }
        table.set_bounds(bounds);
        true
    }
}
