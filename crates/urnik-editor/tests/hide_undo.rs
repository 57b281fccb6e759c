//! Integration tests: click-to-hide and Ctrl+Z against an in-memory board.

use pretty_assertions::assert_eq;
use urnik_core::{Board, BoxDocument, BoxId};
use urnik_editor::{BoxController, InputEvent, Modifiers};

fn setup() -> (Board, BoxController) {
    let mut board = Board::parse_fragment(include_str!("fixtures/three_boxes.board")).unwrap();
    let mut ctl = BoxController::new();
    assert_eq!(ctl.attach(&mut board), 3);
    (board, ctl)
}

fn ctrl_z() -> InputEvent {
    InputEvent::key("z", Modifiers::CTRL)
}

// ─── Scenario from the interaction contract ─────────────────────────────

#[test]
fn undo_restores_in_reverse_hide_order() {
    let (mut board, mut ctl) = setup();
    let (a, b) = (BoxId::intern("a"), BoxId::intern("b"));

    ctl.handle_event(&mut board, &InputEvent::click(a));
    ctl.handle_event(&mut board, &InputEvent::click(b));
    assert!(!board.is_visible(a));
    assert!(!board.is_visible(b));

    let outcome = ctl.handle_event(&mut board, &ctrl_z());
    assert!(outcome.changed && outcome.prevent_default);
    assert!(board.is_visible(b), "B should be back after first undo");
    assert!(!board.is_visible(a), "A should still be hidden");

    ctl.handle_event(&mut board, &ctrl_z());
    assert!(board.is_visible(a));

    let before = board.clone();
    let outcome = ctl.handle_event(&mut board, &ctrl_z());
    assert!(!outcome.changed);
    assert_eq!(board, before, "third undo must be a no-op");
}

#[test]
fn n_hides_need_n_undos() {
    let (mut board, mut ctl) = setup();
    let order = ["c", "a", "b"].map(BoxId::intern);

    for id in order {
        assert!(ctl.on_hide_requested(&mut board, id));
    }
    assert_eq!(board.hidden().len(), 3);

    let restored: Vec<BoxId> = std::iter::from_fn(|| ctl.on_undo_requested(&mut board)).collect();
    assert_eq!(restored, order.iter().rev().copied().collect::<Vec<_>>());
    assert!(board.hidden().is_empty());
}

#[test]
fn undo_on_empty_stack_changes_nothing() {
    let (mut board, mut ctl) = setup();
    let before = board.clone();
    assert_eq!(ctl.on_undo_requested(&mut board), None);
    assert_eq!(board, before);
}

#[test]
fn stack_only_holds_hidden_boxes() {
    let (mut board, mut ctl) = setup();
    ctl.on_hide_requested(&mut board, BoxId::intern("a"));
    ctl.on_hide_requested(&mut board, BoxId::intern("c"));
    ctl.on_undo_requested(&mut board);

    for id in ctl.hidden().iter() {
        assert!(!board.is_visible(id), "{id} on stack but visible");
    }
    assert_eq!(ctl.hidden().iter().collect::<Vec<_>>(), [BoxId::intern("a")]);
}

#[test]
fn unmarked_boxes_are_not_clickable() {
    let (mut board, mut ctl) = setup();
    let note = BoxId::intern("note");
    assert!(!ctl.handle_event(&mut board, &InputEvent::click(note)).changed);
    assert!(board.is_visible(note));
}

#[test]
fn hide_keeps_other_style_declarations() {
    let (mut board, mut ctl) = setup();
    let b = BoxId::intern("b");
    ctl.on_hide_requested(&mut board, b);
    ctl.on_undo_requested(&mut board);
    assert_eq!(
        board.get(b).unwrap().style.emit(),
        "left: 25%; width: 7.5%; top: 12%;"
    );
}
