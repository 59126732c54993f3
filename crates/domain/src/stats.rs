//! Statistics rollup over a list of plant views.

use serde::Serialize;

use crate::status::Status;
use crate::view::PlantView;

/// Counts shown in the card's summary row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    /// Plants asking for water, excluding plants in error.
    pub needs_water: usize,
    pub healthy: usize,
    /// Plants with a battery reading in critical state.
    pub low_battery: usize,
    pub irrigating: usize,
}

/// Count plants per category.
#[must_use]
pub fn aggregate(views: &[PlantView]) -> Stats {
    let count = |pred: fn(&PlantView) -> bool| views.iter().filter(|&v| pred(v)).count();

    Stats {
        total: views.len(),
        needs_water: count(|v| v.needs_water() && !v.is_error()),
        healthy: count(|v| v.status == Status::Ok),
        low_battery: count(|v| {
            v.battery().is_some() && v.battery_status() == Some(Status::Critical)
        }),
        irrigating: count(PlantView::is_irrigating),
    }
}
