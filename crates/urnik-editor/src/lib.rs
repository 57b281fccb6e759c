pub mod controller;
pub mod input;
pub mod shortcuts;

pub use controller::BoxController;
pub use input::{EventOutcome, InputEvent, Modifiers, MouseButton};
pub use shortcuts::{ShortcutAction, ShortcutMap};
