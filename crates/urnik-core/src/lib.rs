pub mod color;
pub mod document;
pub mod grid;
pub mod history;
pub mod id;
pub mod model;
pub mod style;

pub use color::{Hsla, recolor_style, replace_lightness};
pub use document::{BoxDocument, LEFTMOST_CLASS, RIGHTMOST_CLASS, SELECTABLE_CLASS};
pub use grid::{GRID_STEP, SNAP_WIDTH, snap_offset};
pub use history::HiddenStack;
pub use id::BoxId;
pub use model::{Board, SelectableBox};
pub use style::{InlineStyle, format_percent, parse_inline_style, parse_number_prefix};
