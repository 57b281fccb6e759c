//! Inline `style` attribute model.
//!
//! Timetable boxes carry their geometry as inline percentages
//! (`left: 47%; width: 13%`). The parser here is lenient in the way a
//! browser's CSSOM is: malformed declarations are dropped, never reported.

use serde::{Deserialize, Serialize};
use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::{one_of, take_till};

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// Ordered list of declarations from a `style` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineStyle {
    declarations: Vec<Declaration>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `property`, if declared. Property names are case-insensitive.
    pub fn get(&self, property: &str) -> Option<&str> {
        let property = property.to_ascii_lowercase();
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Set `property`, replacing an existing declaration in place.
    pub fn set(&mut self, property: &str, value: &str) {
        let property = property.to_ascii_lowercase();
        if let Some(decl) = self.declarations.iter_mut().find(|d| d.property == property) {
            decl.value = value.to_string();
        } else {
            self.declarations.push(Declaration {
                property,
                value: value.to_string(),
            });
        }
    }

    /// Remove `property`. Returns the old value, if any.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let property = property.to_ascii_lowercase();
        let pos = self.declarations.iter().position(|d| d.property == property)?;
        Some(self.declarations.remove(pos).value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serialize back to attribute text: `left: 40%; width: 20%;`.
    pub fn emit(&self) -> String {
        let mut out = String::new();
        for decl in &self.declarations {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&decl.property);
            out.push_str(": ");
            out.push_str(&decl.value);
            out.push(';');
        }
        out
    }
}

/// Parse the text of a `style` attribute. Never fails.
pub fn parse_inline_style(text: &str) -> InlineStyle {
    let mut style = InlineStyle::new();
    let mut rest = text;

    while !rest.is_empty() {
        match declaration.parse_next(&mut rest) {
            Ok(Some((property, value))) => style.set(property, value),
            Ok(None) => {}
            Err(_) => break,
        }
    }

    style
}

/// One `;`-terminated chunk. `None` for empty or colon-less chunks.
fn declaration<'a>(input: &mut &'a str) -> ModalResult<Option<(&'a str, &'a str)>> {
    let chunk = take_till(0.., ';').parse_next(input)?;
    let _ = opt(';').parse_next(input)?;

    Ok(chunk
        .split_once(':')
        .map(|(p, v)| (p.trim(), v.trim()))
        .filter(|(p, v)| !p.is_empty() && !v.is_empty()))
}

/// A decimal number in CSS / JavaScript syntax: `-12`, `4.5`, `.5`, `1e3`.
pub(crate) fn number<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (
        opt(one_of(['+', '-'])),
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)
}

/// Leading number of `text`, ignoring anything after it.
///
/// Mirrors `parseFloat`: `"47.5%"` → `47.5`, `" 3px"` → `3`, `"abc"` → `None`.
pub fn parse_number_prefix(text: &str) -> Option<f64> {
    let mut rest = text.trim_start();
    number
        .parse_next(&mut rest)
        .ok()
        .and_then(|n| n.parse::<f64>().ok())
}

/// Format a percentage the way a browser serializes it: `40%`, `12.5%`.
pub fn format_percent(value: f64) -> String {
    // Avoid `-0%`.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}%")
}
