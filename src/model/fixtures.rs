// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::geometry::Rect;

use super::design::SchemaDesign;
use super::ids::{FieldId, ReferenceId, TableId};
use super::reference::Reference;
use super::table::{Field, Table};

pub(crate) fn tid(value: &str) -> TableId {
    TableId::new(value).expect("table id")
}

pub(crate) fn fid(value: &str) -> FieldId {
    FieldId::new(value).expect("field id")
}

pub(crate) fn rid(value: &str) -> ReferenceId {
    ReferenceId::new(value).expect("reference id")
}

pub(crate) fn table(id: &str, bounds: Rect, field_ids: &[&str]) -> Table {
    let mut table = Table::new(tid(id), id.trim_start_matches("t:"), bounds);
    for field_id in field_ids {
        table.fields_mut().push(Field::new(
            fid(field_id),
            field_id.trim_start_matches("f:"),
        ));
    }
    table
}

/// Two tables next to each other, one reference left-to-right.
pub(crate) fn side_by_side_pair() -> SchemaDesign {
    let mut design = SchemaDesign::new();

    let orders = table("t:orders", Rect::new(0.0, 0.0, 200.0, 150.0), &["f:customer_id"]);
    let customers = table("t:customers", Rect::new(500.0, 0.0, 200.0, 150.0), &["f:id"]);

    design.tables_mut().insert(tid("t:orders"), orders);
    design.tables_mut().insert(tid("t:customers"), customers);
    design.references_mut().insert(
        rid("r:1"),
        Reference::new(rid("r:1"), fid("f:customer_id"), tid("t:customers")),
    );
    design
}

/// Two tables stacked with full horizontal overlap.
pub(crate) fn stacked_pair() -> SchemaDesign {
    let mut design = SchemaDesign::new();

    let upper = table(
        "t:upper",
        Rect::new(200.0, 100.0, 200.0, 100.0),
        &["f:lower_id", "f:note"],
    );
    let lower = table(
        "t:lower",
        Rect::new(200.0, 350.0, 200.0, 100.0),
        &["f:id", "f:label"],
    );

    design.tables_mut().insert(tid("t:upper"), upper);
    design.tables_mut().insert(tid("t:lower"), lower);
    design.references_mut().insert(
        rid("r:1"),
        Reference::new(rid("r:1"), fid("f:lower_id"), tid("t:lower")),
    );
    design
}

/// Two references from the same source table converging on one target.
pub(crate) fn fan_in_pair() -> SchemaDesign {
    let mut design = SchemaDesign::new();

    let orders = table(
        "t:orders",
        Rect::new(0.0, 0.0, 200.0, 150.0),
        &["f:billing_id", "f:shipping_id"],
    );
    let addresses = table("t:addresses", Rect::new(500.0, 0.0, 200.0, 150.0), &["f:id"]);

    design.tables_mut().insert(tid("t:orders"), orders);
    design.tables_mut().insert(tid("t:addresses"), addresses);
    design.references_mut().insert(
        rid("r:1"),
        Reference::new(rid("r:1"), fid("f:billing_id"), tid("t:addresses")),
    );
    design.references_mut().insert(
        rid("r:2"),
        Reference::new(rid("r:2"), fid("f:shipping_id"), tid("t:addresses")),
    );
    design
}

/// Side-by-side pair with a third table sitting on the direct route.
pub(crate) fn obstacle_between() -> SchemaDesign {
    let mut design = side_by_side_pair();

    let blocker = table(
        "t:blocker",
        Rect::new(300.0, 0.0, 100.0, 150.0),
        &["f:a", "f:b"],
    );
    design.tables_mut().insert(tid("t:blocker"), blocker);
    design
}
