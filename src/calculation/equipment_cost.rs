//! Equipment cost aggregation.
//!
//! Equipment rows carry raw unit counts for the five equipment kinds.
//! Matching rows are summed per kind and priced with the externally
//! configured unit prices, emitting one itemized line per kind actually
//! issued.

use rust_decimal::Decimal;

use crate::config::EquipmentPricing;
use crate::models::{EquipmentBreakdown, EquipmentLine, Period};
use crate::source::RawRow;
use crate::source::schema::EquipmentRow;

use super::deduction_window::match_window;

/// Aggregates equipment cost for a supervisor and period.
///
/// Unit counts from all matching rows are summed per kind, then priced
/// with `pricing`. Kinds with a zero total quantity produce no line, so
/// the breakdown only lists equipment that was actually issued. The
/// returned total equals the exact sum of the line totals.
pub fn aggregate_equipment_cost(
    supervisor_code: &str,
    period: &Period,
    rows: &[RawRow],
    pricing: &EquipmentPricing,
) -> EquipmentBreakdown {
    let mut motorcycle_boxes: u32 = 0;
    let mut bicycle_boxes: u32 = 0;
    let mut tshirts: u32 = 0;
    let mut jackets: u32 = 0;
    let mut helmets: u32 = 0;

    for raw in rows {
        let Some(row) = EquipmentRow::from_row(raw) else {
            continue;
        };

        if row.supervisor_code != supervisor_code {
            continue;
        }

        if match_window(&row.period, period).is_none() {
            continue;
        }

        motorcycle_boxes += row.motorcycle_boxes;
        bicycle_boxes += row.bicycle_boxes;
        tshirts += row.tshirts;
        jackets += row.jackets;
        helmets += row.helmets;
    }

    let kinds = [
        ("motorcycle_box", motorcycle_boxes, pricing.motorcycle_box),
        ("bicycle_box", bicycle_boxes, pricing.bicycle_box),
        ("tshirt", tshirts, pricing.tshirt),
        ("jacket", jackets, pricing.jacket),
        ("helmet", helmets, pricing.helmet),
    ];

    let mut items = Vec::new();
    let mut total = Decimal::ZERO;

    for (name, quantity, unit_price) in kinds {
        if quantity == 0 {
            continue;
        }
        let line_total = Decimal::from(quantity) * unit_price;
        total += line_total;
        items.push(EquipmentLine {
            name: name.to_string(),
            quantity,
            unit_price,
            line_total,
        });
    }

    EquipmentBreakdown { total, items }
}
