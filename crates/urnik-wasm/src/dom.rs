//! `BoxDocument` over live DOM elements.
//!
//! Every selectable element is tagged with a `data-urnik-id` attribute the
//! first time it is seen, so later rescans map elements back to the same
//! `BoxId`.

use std::collections::HashMap;
use urnik_core::{BoxDocument, BoxId, SELECTABLE_CLASS};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const ID_ATTR: &str = "data-urnik-id";

pub(crate) struct DomDocument {
    document: Document,
    elements: HashMap<BoxId, HtmlElement>,
}

impl DomDocument {
    pub(crate) fn new(document: Document) -> Self {
        Self {
            document,
            elements: HashMap::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    /// Known elements, cloned out so listeners can be attached without
    /// holding a borrow on the session.
    pub(crate) fn elements(&self) -> Vec<(BoxId, HtmlElement)> {
        self.elements
            .iter()
            .map(|(id, el)| (*id, el.clone()))
            .collect()
    }

    fn element(&self, id: BoxId) -> Option<&HtmlElement> {
        self.elements.get(&id)
    }

    /// Query the document for selectable boxes, tagging new ones.
    fn scan(&mut self) -> Vec<BoxId> {
        let selector = format!("div.{SELECTABLE_CLASS}");
        let list = match self.document.query_selector_all(&selector) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("urnik: querySelectorAll failed: {e:?}");
                return Vec::new();
            }
        };

        let mut ids = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            let Some(element) = list.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let id = match element.get_attribute(ID_ATTR) {
                Some(existing) => BoxId::intern(&existing),
                None => {
                    let id = BoxId::untagged();
                    if let Err(e) = element.set_attribute(ID_ATTR, id.as_str()) {
                        log::warn!("urnik: could not tag {id}: {e:?}");
                    }
                    id
                }
            };
            self.elements.insert(id, element);
            ids.push(id);
        }
        ids
    }
}

impl BoxDocument for DomDocument {
    fn selectable_boxes(&mut self) -> Vec<BoxId> {
        self.scan()
    }

    fn contains(&self, id: BoxId) -> bool {
        self.element(id).is_some_and(|el| el.is_connected())
    }

    fn is_visible(&self, id: BoxId) -> bool {
        self.element(id).is_some_and(|el| {
            el.style()
                .get_property_value("display")
                .map_or(true, |display| display != "none")
        })
    }

    fn set_visible(&mut self, id: BoxId, visible: bool) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };
        let style = el.style();
        let result = if visible {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
        if let Err(e) = result {
            log::warn!("urnik: display update on {id} failed: {e:?}");
        }
        true
    }

    fn add_classes(&mut self, id: BoxId, classes: &[&str]) {
        let Some(el) = self.element(id) else {
            return;
        };
        let list = el.class_list();
        for class in classes {
            if let Err(e) = list.add_1(class) {
                log::warn!("urnik: classList.add({class}) failed: {e:?}");
            }
        }
    }

    fn style_property(&self, id: BoxId, property: &str) -> Option<String> {
        self.element(id)?
            .style()
            .get_property_value(property)
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn set_style_property(&mut self, id: BoxId, property: &str, value: &str) {
        if let Some(el) = self.element(id) {
            if let Err(e) = el.style().set_property(property, value) {
                log::warn!("urnik: style {property} on {id} failed: {e:?}");
            }
        }
    }
}
