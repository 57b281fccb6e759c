//! WASM bridge for urnik: wires the timetable page to the box controller.
//!
//! Compiled via `wasm-pack build --target web` and loaded by the module
//! script the CLI injects into `modified.html`. The start function runs on
//! load; there is nothing to call from JavaScript.

mod dom;

use dom::DomDocument;
use std::cell::RefCell;
use std::rc::Rc;
use urnik_editor::{BoxController, InputEvent, Modifiers, MouseButton, ShortcutMap};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, KeyboardEvent, MouseEvent};

/// Everything one page needs: the controller (which owns the hidden-box
/// stack) and the DOM it acts on.
struct PageSession {
    controller: BoxController,
    dom: DomDocument,
}

impl PageSession {
    fn handle(&mut self, event: &InputEvent) -> urnik_editor::EventOutcome {
        let PageSession { controller, dom } = self;
        controller.handle_event(dom, event)
    }
}

type SharedSession = Rc<RefCell<PageSession>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook_setup();
    let _ = console_log::init_with_level(log::Level::Info);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("urnik: no document"))?;

    let session: SharedSession = Rc::new(RefCell::new(PageSession {
        controller: BoxController::new(),
        dom: DomDocument::new(document.clone()),
    }));

    listen_keys(&document, &session)?;

    if document.ready_state() == "loading" {
        let session = session.clone();
        let on_ready = Closure::once(move || {
            if let Err(e) = attach_boxes(&session) {
                web_sys::console::error_2(&"urnik: attach failed".into(), &e);
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref::<js_sys::Function>(),
        )?;
        on_ready.forget();
    } else {
        attach_boxes(&session)?;
    }

    Ok(())
}

/// Register every selectable box present now and give it a click handler.
fn attach_boxes(session: &SharedSession) -> Result<(), JsValue> {
    let boxes: Vec<(urnik_core::BoxId, HtmlElement)> = {
        let mut s = session.borrow_mut();
        let PageSession { controller, dom } = &mut *s;
        controller.attach(dom);
        dom.elements()
    };

    for (id, element) in boxes {
        let session = session.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let input = InputEvent::Click {
                target: id,
                button: MouseButton::from_dom(event.button()),
            };
            session.borrow_mut().handle(&input);
        });
        element.add_event_listener_with_callback(
            "click",
            on_click.as_ref().unchecked_ref::<js_sys::Function>(),
        )?;
        on_click.forget();
    }

    log::info!("urnik: {} boxes ready", session.borrow().dom.len());
    Ok(())
}

/// One document-wide `keydown` listener for Ctrl+Z and Ctrl+O.
fn listen_keys(document: &Document, session: &SharedSession) -> Result<(), JsValue> {
    let session = session.clone();
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let input = InputEvent::Key {
            key: event.key(),
            mods: Modifiers {
                shift: event.shift_key(),
                ctrl: event.ctrl_key(),
                alt: event.alt_key(),
                meta: event.meta_key(),
            },
        };
        let outcome = session.borrow_mut().handle(&input);
        if outcome.prevent_default {
            event.prevent_default();
        }
    });
    document.add_event_listener_with_callback(
        "keydown",
        on_key.as_ref().unchecked_ref::<js_sys::Function>(),
    )?;
    on_key.forget();
    Ok(())
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("urnik WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone helpers (no page session needed) ─────────────────────────

/// Snap a percentage offset onto the 20 % day grid.
#[wasm_bindgen]
pub fn snap_offset_percent(offset: f64) -> f64 {
    urnik_core::snap_offset(offset)
}

/// Name of the action bound to a key combo, or `"none"`.
#[wasm_bindgen]
pub fn resolve_shortcut(key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> String {
    ShortcutMap::resolve(key, ctrl, shift, alt, meta)
        .map_or("none", |a| a.name())
        .to_string()
}
