//! The seam between interaction logic and whatever holds the boxes.
//!
//! The browser bridge implements this over live DOM elements; [`Board`]
//! implements it in memory so the controller can be tested natively.
//!
//! [`Board`]: crate::model::Board

use crate::id::BoxId;

/// Marker class of boxes eligible for hide / undo / snap.
pub const SELECTABLE_CLASS: &str = "entry-absolute-box";

/// Styling flag: the box touches the left edge of its row.
pub const LEFTMOST_CLASS: &str = "leftmost";

/// Styling flag: the box touches the right edge of its row.
pub const RIGHTMOST_CLASS: &str = "rightmost";

/// A document of positioned boxes.
pub trait BoxDocument {
    /// Every box carrying [`SELECTABLE_CLASS`], in document order.
    /// Hidden boxes are included.
    fn selectable_boxes(&mut self) -> Vec<BoxId>;

    fn contains(&self, id: BoxId) -> bool;

    /// `false` when the box has `display: none` or does not exist.
    fn is_visible(&self, id: BoxId) -> bool;

    /// Hide (`display: none`) or restore (default display) a box.
    /// Returns `false` if the box does not exist.
    fn set_visible(&mut self, id: BoxId, visible: bool) -> bool;

    fn add_classes(&mut self, id: BoxId, classes: &[&str]);

    /// Inline style value of `property`.
    fn style_property(&self, id: BoxId, property: &str) -> Option<String>;

    fn set_style_property(&mut self, id: BoxId, property: &str, value: &str);
}
