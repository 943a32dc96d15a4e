//! Stacking layout: columns place children top to bottom, rows left to right.
//!
//! Every element gets a rect in the result, including ones clipped to zero
//! size, so lookups by ID never miss for elements that are in the tree.

use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Width of a text input whose width is `Size::Auto`.
pub const DEFAULT_INPUT_WIDTH: u16 = 32;
/// Height of a multi-line input whose height is `Size::Auto`.
pub const TEXT_AREA_ROWS: u16 = 3;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let width = resolve(element.width, available.width, || intrinsic_size(element).0);
    let height = resolve(element.height, available.height, || intrinsic_size(element).1);
    layout_element(
        element,
        Rect::new(available.x, available.y, width, height),
        &mut result,
    );
    result
}

fn layout_element(element: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let children = element.content.children();
    if children.is_empty() {
        return;
    }

    let p = &element.padding;
    let inner = rect.shrink(p.top, p.right, p.bottom, p.left);
    let mut offset: u16 = 0;

    for child in children {
        let (want_w, want_h) = intrinsic_size(child);
        let child_rect = match element.direction {
            Direction::Column => {
                let y = inner.y.saturating_add(offset);
                let remaining = inner.bottom().saturating_sub(y);
                let width = resolve(child.width, inner.width, || want_w).min(inner.width);
                let height = resolve(child.height, remaining, || want_h).min(remaining);
                offset = offset.saturating_add(height).saturating_add(element.gap);
                Rect::new(inner.x, y, width, height)
            }
            Direction::Row => {
                let x = inner.x.saturating_add(offset);
                let remaining = inner.right().saturating_sub(x);
                let width = resolve(child.width, remaining, || want_w).min(remaining);
                let height = resolve(child.height, inner.height, || want_h).min(inner.height);
                offset = offset.saturating_add(width).saturating_add(element.gap);
                Rect::new(x, inner.y, width, height)
            }
        };
        layout_element(child, child_rect, result);
    }
}

fn resolve(size: Size, available: u16, intrinsic: impl FnOnce() -> u16) -> u16 {
    match size {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto => intrinsic().min(available),
    }
}

/// Natural (width, height) of an element including its padding.
pub fn intrinsic_size(element: &Element) -> (u16, u16) {
    let (w, h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => text_size(text),
        Content::TextInput {
            value, multiline, ..
        } => {
            let rows = if *multiline {
                TEXT_AREA_ROWS.max(text_size(value).1)
            } else {
                1
            };
            (DEFAULT_INPUT_WIDTH, rows)
        }
        Content::Children(children) => {
            let sizes = children.iter().map(|child| {
                let (w, h) = intrinsic_size(child);
                (fixed_or(child.width, w), fixed_or(child.height, h))
            });
            let gaps = element.gap.saturating_mul(children.len().saturating_sub(1) as u16);
            match element.direction {
                Direction::Column => sizes.fold((0u16, gaps), |(w, h), (cw, ch)| {
                    (w.max(cw), h.saturating_add(ch))
                }),
                Direction::Row => sizes.fold((gaps, 0u16), |(w, h), (cw, ch)| {
                    (w.saturating_add(cw), h.max(ch))
                }),
            }
        }
    };

    let p = &element.padding;
    (
        fixed_or(element.width, w.saturating_add(p.horizontal_total())),
        fixed_or(element.height, h.saturating_add(p.vertical_total())),
    )
}

fn fixed_or(size: Size, natural: u16) -> u16 {
    match size {
        Size::Fixed(n) => n,
        _ => natural,
    }
}

fn text_size(text: &str) -> (u16, u16) {
    let mut lines = 0u16;
    let mut widest = 0usize;
    for line in text.split('\n') {
        lines = lines.saturating_add(1);
        widest = widest.max(display_width(line));
    }
    (widest.min(u16::MAX as usize) as u16, lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_size_counts_lines_and_widest_line() {
        assert_eq!(text_size("ab\nabcd\n"), (4, 3));
        assert_eq!(text_size(""), (0, 1));
    }

    #[test]
    fn fixed_size_wins_over_content() {
        let element = Element::text("hello").width(Size::Fixed(2));
        assert_eq!(intrinsic_size(&element), (2, 1));
    }
}
