//! Meeting block → display-grid coordinates.
//!
//! The display grid has one column per canonical weekday and one row per
//! whole hour starting at a fixed display hour. Fractional-hour blocks are
//! snapped to whole rows: the row start floors, the span ceils (minimum
//! one row). This snapping is display-only — conflict detection keeps
//! exact fractional hours.

use serde::{Deserialize, Serialize};

use crate::course::{MeetingBlock, Weekday};

/// Hour the display grid starts at (7 AM).
pub const DISPLAY_START_HOUR: f64 = 7.0;

/// Integer grid coordinates for one meeting block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPosition {
    /// 1-based weekday column (Mon = 1 … Fri = 5).
    pub column: u32,
    /// 1-based hour row; non-positive when the block starts before the
    /// display window (clamping is the renderer's call).
    pub row_start: i32,
    /// Whole rows spanned, at least 1.
    pub row_span: u32,
}

/// 1-based column index of a weekday in canonical display order.
pub fn column_for(day: Weekday) -> u32 {
    day as u32 + 1
}

/// Map a meeting block into grid coordinates for its first weekday.
///
/// `row_start = floor(start − display_start_hour) + 1`,
/// `row_span = max(ceil(end − start), 1)`. Returns `None` only for an
/// empty day set, which normalized blocks never have.
pub fn map_to_grid(block: &MeetingBlock, display_start_hour: f64) -> Option<GridPosition> {
    let day = *block.days.first()?;
    let row_start = (block.start - display_start_hour).floor() as i32 + 1;
    let row_span = (block.end - block.start).ceil().max(1.0) as u32;
    Some(GridPosition {
        column: column_for(day),
        row_start,
        row_span,
    })
}
