// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Schema model: tables with ordered fields, references between them, and
//! the design aggregate a routing pass runs against.

pub mod design;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod reference;
pub mod table;

pub use design::SchemaDesign;
pub use ids::{FieldId, Id, IdError, ReferenceId, TableId};
pub use reference::Reference;
pub use table::{Field, Table, FIELD_PADDING, FIELD_ROW_HEIGHT, HEADER_HEIGHT};
