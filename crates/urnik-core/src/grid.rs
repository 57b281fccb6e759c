//! Grid arithmetic for the Ctrl+O "order" action.
//!
//! A timetable row is five day-columns wide, so the grid is 20 % of the
//! container. Offsets are percentages of the container width.

use crate::style::{format_percent, parse_number_prefix};

/// Grid pitch, in percent of the container width.
pub const GRID_STEP: f64 = 20.0;

/// Width every box gets after snapping, in percent of the container width.
pub const SNAP_WIDTH: f64 = 20.0;

/// Quantize an offset down to the nearest multiple of [`GRID_STEP`].
///
/// `47 → 40`, `19 → 0`, `20 → 20`. Idempotent.
pub fn snap_offset(offset: f64) -> f64 {
    (offset / GRID_STEP).floor() * GRID_STEP
}

/// Snap an inline `left` value such as `"47%"`, returning the new value.
///
/// The value is assumed to be a percentage; an unparseable or missing
/// value counts as `0`.
pub fn snap_offset_value(value: Option<&str>) -> String {
    let offset = value.and_then(parse_number_prefix).unwrap_or(0.0);
    format_percent(snap_offset(offset))
}

/// The inline `width` value every snapped box receives.
pub fn snap_width_value() -> String {
    format_percent(SNAP_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn snap_quantizes_down() {
        assert_eq!(snap_offset(47.0), 40.0);
        assert_eq!(snap_offset(19.0), 0.0);
        assert_eq!(snap_offset(20.0), 20.0);
        assert_eq!(snap_offset(99.9), 80.0);
        assert_eq!(snap_offset(0.0), 0.0);
    }

    #[test]
    fn snap_is_idempotent() {
        for x in [0.0, 3.5, 19.99, 20.0, 33.3, 47.0, 60.0, 81.25, 99.0] {
            let once = snap_offset(x);
            assert_eq!(snap_offset(once), once, "not idempotent for {x}");
        }
    }

    #[test]
    fn snap_value_formats_percent() {
        assert_eq!(snap_offset_value(Some("53%")), "40%");
        assert_eq!(snap_offset_value(Some("25.5%")), "20%");
    }

    #[test]
    fn snap_value_treats_garbage_as_zero() {
        assert_eq!(snap_offset_value(Some("auto")), "0%");
        assert_eq!(snap_offset_value(None), "0%");
    }

    #[test]
    fn snap_width_is_one_column() {
        assert_eq!(snap_width_value(), "20%");
    }
}
