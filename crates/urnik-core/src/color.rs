//! `hsla()` colours as used by timetable entry backgrounds.
//!
//! The timetable tints every entry with `hsla(h, s%, l%, a)`. Recolouring
//! only touches the lightness component and keeps the rest of the text
//! byte-for-byte.

use crate::style::number;
use winnow::ascii::space0;
use winnow::prelude::*;

/// An `hsla()` colour. Saturation and lightness are percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    /// Parse `hsla(h, s%, l%, a)`. Surrounding whitespace is allowed.
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut rest = text.trim();
        let (head, lightness, tail) = hsla_parts
            .parse_next(&mut rest)
            .map_err(|e| format!("hsla parse error: {e}"))?;
        if !rest.is_empty() {
            return Err(format!("trailing input after hsla(): {rest:?}"));
        }

        let mut nums = [head, tail]
            .into_iter()
            .flat_map(|part| numbers_in(part).into_iter());
        let h = nums.next().unwrap_or(0.0);
        let s = nums.next().unwrap_or(0.0);
        let a = nums.next().unwrap_or(1.0);
        let l = lightness
            .parse::<f64>()
            .map_err(|e| format!("bad lightness {lightness:?}: {e}"))?;

        Ok(Self { h, s, l, a })
    }
}

/// `hsla(h, s%, ` / `l` / `%, a)`
fn hsla_parts<'a>(input: &mut &'a str) -> ModalResult<(&'a str, &'a str, &'a str)> {
    let head = (
        "hsla(", space0, number, space0, ',', space0, number, '%', space0, ',', space0,
    )
        .take()
        .parse_next(input)?;
    let lightness = number.parse_next(input)?;
    let tail = ('%', space0, ',', space0, number, space0, ')')
        .take()
        .parse_next(input)?;
    Ok((head, lightness, tail))
}

fn numbers_in(text: &str) -> Vec<f64> {
    let mut out = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let mut probe = rest;
        match number.parse_next(&mut probe) {
            Ok(n) => {
                if let Ok(v) = n.parse() {
                    out.push(v);
                }
                rest = probe;
            }
            Err(_) => {
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            }
        }
    }
    out
}

/// Rewrite the lightness of every `hsla()` in a CSS value to `lightness`%.
///
/// Anything that is not a well-formed `hsla()` is copied through untouched.
pub fn replace_lightness(value: &str, lightness: f64) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find("hsla(") {
        out.push_str(&rest[..pos]);
        let mut probe = &rest[pos..];
        match hsla_parts.parse_next(&mut probe) {
            Ok((head, _, tail)) => {
                out.push_str(head);
                out.push_str(&lightness.to_string());
                out.push_str(tail);
                rest = probe;
            }
            Err(_) => {
                out.push_str("hsla(");
                rest = &rest[pos + "hsla(".len()..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Recolour an entry's `style` attribute. Only the lightness of each
/// `hsla()` changes; declarations, spacing and separators stay as written.
pub fn recolor_style(style_attr: &str, lightness: f64) -> String {
    replace_lightness(style_attr, lightness)
}
