//! Hide / undo / snap controller.
//!
//! Owns the hidden-box stack for one page session and applies the three
//! interactions to any [`BoxDocument`]. None of the operations can fail:
//! anything out of reach (unknown box, empty stack, no boxes) is a no-op.

use crate::input::{EventOutcome, InputEvent, MouseButton};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use std::collections::HashSet;
use urnik_core::grid::{snap_offset_value, snap_width_value};
use urnik_core::{BoxDocument, BoxId, HiddenStack, LEFTMOST_CLASS, RIGHTMOST_CLASS};

/// Interaction state for one page session.
#[derive(Debug, Default)]
pub struct BoxController {
    hidden: HiddenStack,
    /// Boxes that had a click handler attached at load time.
    registered: HashSet<BoxId>,
}

impl BoxController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every selectable box present in `doc`. Returns how many
    /// boxes are now clickable.
    ///
    /// Boxes added to the document later are not clickable, but they are
    /// still snapped by [`Self::on_snap_requested`].
    pub fn attach<D: BoxDocument + ?Sized>(&mut self, doc: &mut D) -> usize {
        self.registered.extend(doc.selectable_boxes());
        log::debug!("attached {} boxes", self.registered.len());
        self.registered.len()
    }

    pub fn is_registered(&self, id: BoxId) -> bool {
        self.registered.contains(&id)
    }

    pub fn hidden(&self) -> &HiddenStack {
        &self.hidden
    }

    /// Hide a clicked box. Returns `true` if it was hidden.
    ///
    /// Only registered boxes that are currently visible react, which keeps
    /// every id on the stack at most once.
    pub fn on_hide_requested<D: BoxDocument + ?Sized>(&mut self, doc: &mut D, id: BoxId) -> bool {
        if !self.registered.contains(&id) || !doc.is_visible(id) {
            log::trace!("hide {id} ignored");
            return false;
        }
        if !self.hidden.push(id) {
            return false;
        }
        doc.set_visible(id, false);
        log::debug!("hid {id} ({} hidden)", self.hidden.len());
        true
    }

    /// Restore the most recently hidden box. `None` when nothing is hidden.
    pub fn on_undo_requested<D: BoxDocument + ?Sized>(&mut self, doc: &mut D) -> Option<BoxId> {
        let id = self.hidden.pop()?;
        if doc.contains(id) {
            doc.set_visible(id, true);
        } else {
            log::warn!("undo: {id} is no longer in the document");
        }
        log::debug!("restored {id} ({} hidden)", self.hidden.len());
        Some(id)
    }

    /// Snap every selectable box, hidden or not, onto the day grid.
    /// Returns the number of boxes touched.
    pub fn on_snap_requested<D: BoxDocument + ?Sized>(&mut self, doc: &mut D) -> usize {
        let ids = doc.selectable_boxes();
        let width = snap_width_value();

        for &id in &ids {
            doc.add_classes(id, &[LEFTMOST_CLASS, RIGHTMOST_CLASS]);
            let left = snap_offset_value(doc.style_property(id, "left").as_deref());
            doc.set_style_property(id, "left", &left);
            doc.set_style_property(id, "width", &width);
        }

        log::debug!("snapped {} boxes", ids.len());
        ids.len()
    }

    /// Dispatch a normalized input event.
    pub fn handle_event<D: BoxDocument + ?Sized>(
        &mut self,
        doc: &mut D,
        event: &InputEvent,
    ) -> EventOutcome {
        match event {
            InputEvent::Click {
                target,
                button: MouseButton::Primary,
            } => EventOutcome {
                changed: self.on_hide_requested(doc, *target),
                prevent_default: false,
            },
            InputEvent::Click { .. } => EventOutcome::IGNORED,
            InputEvent::Key { key, mods } => {
                match ShortcutMap::resolve(key, mods.ctrl, mods.shift, mods.alt, mods.meta) {
                    Some(action) => self.dispatch_action(doc, action),
                    None => EventOutcome::IGNORED,
                }
            }
        }
    }

    /// Run a shortcut action. Bound shortcuts always suppress the browser
    /// default, even when they change nothing.
    pub fn dispatch_action<D: BoxDocument + ?Sized>(
        &mut self,
        doc: &mut D,
        action: ShortcutAction,
    ) -> EventOutcome {
        let changed = match action {
            ShortcutAction::Undo => self.on_undo_requested(doc).is_some(),
            ShortcutAction::Order => self.on_snap_requested(doc) > 0,
        };
        EventOutcome {
            changed,
            prevent_default: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;
    use urnik_core::Board;

    fn board() -> Board {
        Board::parse_fragment(
            "box a .entry-absolute-box { left: 5%; width: 13% }\n\
             box b .entry-absolute-box { left: 25%; width: 18% }\n",
        )
        .unwrap()
    }

    #[test]
    fn unregistered_click_is_ignored() {
        let mut doc = board();
        let mut ctl = BoxController::new();
        assert!(!ctl.on_hide_requested(&mut doc, BoxId::intern("a")));
        assert!(doc.is_visible(BoxId::intern("a")));
    }

    #[test]
    fn hiding_twice_pushes_once() {
        let mut doc = board();
        let mut ctl = BoxController::new();
        ctl.attach(&mut doc);
        let a = BoxId::intern("a");
        assert!(ctl.on_hide_requested(&mut doc, a));
        assert!(!ctl.on_hide_requested(&mut doc, a));
        assert_eq!(ctl.hidden().len(), 1);
    }

    #[test]
    fn secondary_click_does_not_hide() {
        let mut doc = board();
        let mut ctl = BoxController::new();
        ctl.attach(&mut doc);
        let event = InputEvent::Click {
            target: BoxId::intern("a"),
            button: MouseButton::Secondary,
        };
        assert_eq!(ctl.handle_event(&mut doc, &event), EventOutcome::IGNORED);
        assert!(doc.is_visible(BoxId::intern("a")));
    }

    #[test]
    fn bound_keys_prevent_default_even_as_noop() {
        let mut doc = board();
        let mut ctl = BoxController::new();
        let outcome = ctl.handle_event(&mut doc, &InputEvent::key("z", Modifiers::CTRL));
        assert_eq!(
            outcome,
            EventOutcome {
                changed: false,
                prevent_default: true
            }
        );
    }

    #[test]
    fn unbound_keys_pass_through() {
        let mut doc = board();
        let mut ctl = BoxController::new();
        let outcome = ctl.handle_event(&mut doc, &InputEvent::key("z", Modifiers::default()));
        assert_eq!(outcome, EventOutcome::IGNORED);
    }

    #[test]
    fn undo_of_removed_box_still_pops() {
        let mut doc = board();
        let mut ctl = BoxController::new();
        ctl.attach(&mut doc);
        let a = BoxId::intern("a");
        ctl.on_hide_requested(&mut doc, a);
        doc.remove(a);
        assert_eq!(ctl.on_undo_requested(&mut doc), Some(a));
        assert!(ctl.hidden().is_empty());
    }

    #[test]
    fn undo_after_removal_leaves_older_entries_alone() {
        let mut doc = board();
        let mut ctl = BoxController::new();
        ctl.attach(&mut doc);
        let (a, b) = (BoxId::intern("a"), BoxId::intern("b"));
        ctl.on_hide_requested(&mut doc, a);
        ctl.on_hide_requested(&mut doc, b);
        doc.remove(b);

        assert_eq!(ctl.on_undo_requested(&mut doc), Some(b));
        assert!(!doc.contains(b));
        assert!(!doc.is_visible(a));
        assert_eq!(ctl.hidden().peek(), Some(a));
    }
}
