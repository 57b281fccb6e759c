//! In-memory box model.
//!
//! A [`Board`] is the native stand-in for a timetable page: an ordered list
//! of boxes, each with a class list and an inline style. It is what the
//! controller tests run against, and what the fixture format parses into.

use crate::document::{BoxDocument, SELECTABLE_CLASS};
use crate::id::BoxId;
use crate::style::{InlineStyle, parse_inline_style};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use winnow::ascii::{space0, space1};
use winnow::combinator::{delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

/// A positioned box on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectableBox {
    pub id: BoxId,
    pub classes: SmallVec<[String; 4]>,
    pub style: InlineStyle,
}

impl SelectableBox {
    /// A selectable box with the given inline style.
    pub fn new(id: BoxId, style: &str) -> Self {
        Self {
            id,
            classes: SmallVec::from_iter([SELECTABLE_CLASS.to_string()]),
            style: parse_inline_style(style),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add `class` unless already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.has_class(SELECTABLE_CLASS)
    }

    pub fn is_visible(&self) -> bool {
        self.style.get("display") != Some("none")
    }

    pub fn hide(&mut self) {
        self.style.set("display", "none");
    }

    /// Clear the inline `display`, falling back to the stylesheet default.
    pub fn show(&mut self) {
        self.style.remove("display");
    }
}

/// An ordered collection of boxes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    boxes: Vec<SelectableBox>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a box. A box with the same id replaces the earlier one.
    pub fn push(&mut self, b: SelectableBox) {
        if let Some(existing) = self.get_mut(b.id) {
            log::trace!("BOARD replace {}", b.id);
            *existing = b;
        } else {
            self.boxes.push(b);
        }
    }

    pub fn get(&self, id: BoxId) -> Option<&SelectableBox> {
        self.boxes.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BoxId) -> Option<&mut SelectableBox> {
        self.boxes.iter_mut().find(|b| b.id == id)
    }

    /// Remove a box entirely (not the same as hiding it).
    pub fn remove(&mut self, id: BoxId) -> Option<SelectableBox> {
        let pos = self.boxes.iter().position(|b| b.id == id)?;
        Some(self.boxes.remove(pos))
    }

    pub fn boxes(&self) -> &[SelectableBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Ids of the boxes currently hidden, in document order.
    pub fn hidden(&self) -> Vec<BoxId> {
        self.boxes
            .iter()
            .filter(|b| !b.is_visible())
            .map(|b| b.id)
            .collect()
    }

    /// Parse the board fixture format.
    ///
    /// One box per line, `#` starts a comment:
    ///
    /// ```text
    /// box mon_lab .entry-absolute-box.lab { left: 5%; width: 13% }
    /// box legend  .legend                 { left: 0% }
    /// ```
    pub fn parse_fragment(input: &str) -> Result<Self, String> {
        let mut board = Board::new();

        for (lineno, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut rest = line;
            let b = box_line
                .parse_next(&mut rest)
                .map_err(|e| format!("line {}: box parse error: {e}", lineno + 1))?;
            if !rest.trim().is_empty() {
                return Err(format!("line {}: unexpected {:?}", lineno + 1, rest.trim()));
            }
            board.push(b);
        }

        Ok(board)
    }
}

impl BoxDocument for Board {
    fn selectable_boxes(&mut self) -> Vec<BoxId> {
        self.boxes
            .iter()
            .filter(|b| b.is_selectable())
            .map(|b| b.id)
            .collect()
    }

    fn contains(&self, id: BoxId) -> bool {
        self.get(id).is_some()
    }

    fn is_visible(&self, id: BoxId) -> bool {
        self.get(id).is_some_and(SelectableBox::is_visible)
    }

    fn set_visible(&mut self, id: BoxId, visible: bool) -> bool {
        let Some(b) = self.get_mut(id) else {
            return false;
        };
        if visible {
            b.show();
        } else {
            b.hide();
        }
        true
    }

    fn add_classes(&mut self, id: BoxId, classes: &[&str]) {
        if let Some(b) = self.get_mut(id) {
            for class in classes {
                b.add_class(class);
            }
        }
    }

    fn style_property(&self, id: BoxId, property: &str) -> Option<String> {
        self.get(id)?.style.get(property).map(str::to_string)
    }

    fn set_style_property(&mut self, id: BoxId, property: &str, value: &str) {
        if let Some(b) = self.get_mut(id) {
            b.style.set(property, value);
        }
    }
}

// ─── Fixture parser ──────────────────────────────────────────────────────

fn box_line(input: &mut &str) -> ModalResult<SelectableBox> {
    let _ = ("box", space1).parse_next(input)?;
    let id = identifier.parse_next(input)?;
    let _ = space0.parse_next(input)?;
    let classes: Vec<&str> = repeat(0.., preceded('.', identifier)).parse_next(input)?;
    let _ = space0.parse_next(input)?;
    let style = delimited('{', take_till(0.., '}'), '}').parse_next(input)?;

    Ok(SelectableBox {
        id: BoxId::intern(id),
        classes: classes.into_iter().map(str::to_string).collect(),
        style: parse_inline_style(style),
    })
}

fn identifier<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-').parse_next(input)
}
