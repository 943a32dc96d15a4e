use crate::buffer::cell::{DEFAULT_BG, DEFAULT_FG};
use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::char_width;
use crate::types::{Color, Rgb, Style, TextStyle};

/// Render an element tree into a buffer using a layout computed for it.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let bounds = Rect::from_size(buf.width(), buf.height());
    render_element(root, layout, buf, &Style::default(), bounds);
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    inherited: &Style,
    clip: Rect,
) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };
    let rect = rect.intersect(clip);

    let mut style = inherited.merge(&element.style);
    if element.focused {
        if let Some(focused) = &element.style_focused {
            style = style.merge(focused);
        }
    }

    if let Some(bg) = own_background(element) {
        fill_rect(buf, rect, bg.to_rgb());
    }

    let p = &element.padding;
    let inner = rect.shrink(p.top, p.right, p.bottom, p.left);

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            for (row, line) in text.split('\n').enumerate() {
                draw_line(buf, inner, row as u16, 0, line, &style);
            }
        }
        Content::TextInput {
            value,
            cursor,
            placeholder,
            focused,
            multiline,
            ..
        } => {
            if value.is_empty() {
                if let Some(placeholder) = placeholder {
                    let dim = Style {
                        text_style: style.text_style.dim(),
                        ..style
                    };
                    draw_line(buf, inner, 0, 0, placeholder, &dim);
                }
            }
            let (cursor_row, cursor_col) = cursor_position(value, *cursor);
            // Single-line inputs scroll horizontally to keep the cursor visible
            let scroll = if *multiline {
                0
            } else {
                cursor_col.saturating_sub(inner.width.saturating_sub(1) as usize)
            };
            for (row, line) in value.split('\n').enumerate() {
                draw_line(buf, inner, row as u16, scroll, line, &style);
            }
            if *focused {
                let x = inner.x.saturating_add((cursor_col - scroll) as u16);
                let y = inner.y.saturating_add(cursor_row as u16);
                if inner.contains(x, y) {
                    if let Some(cell) = buf.get_mut(x, y) {
                        cell.style = cell.style.reverse();
                    }
                }
            }
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, &style, rect);
            }
        }
    }
}

/// Background painted by the element itself (not inherited from a parent).
fn own_background(element: &Element) -> Option<Color> {
    let focused = element
        .style_focused
        .as_ref()
        .filter(|_| element.focused)
        .and_then(|style| style.background);
    focused.or(element.style.background)
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

/// Draw one line of text at `row` inside `area`, skipping the first `skip`
/// chars and clipping at the right edge.
fn draw_line(buf: &mut Buffer, area: Rect, row: u16, skip: usize, line: &str, style: &Style) {
    let y = area.y.saturating_add(row);
    if y >= area.bottom() {
        return;
    }

    let fg = style.foreground.map(|c| c.to_rgb()).unwrap_or(DEFAULT_FG);
    let explicit_bg = style.background.map(|c| c.to_rgb());
    let mut x = area.x;

    for ch in line.chars().skip(skip) {
        let width = char_width(ch).max(1) as u16;
        if x.saturating_add(width) > area.right() {
            break;
        }
        let bg = explicit_bg
            .or_else(|| buf.get(x, y).map(|cell| cell.bg))
            .unwrap_or(DEFAULT_BG);
        buf.set(x, y, styled(Cell::new(ch), fg, bg, style.text_style));
        for extra in 1..width {
            let mut continuation = styled(Cell::new(' '), fg, bg, style.text_style);
            continuation.wide_continuation = true;
            buf.set(x + extra, y, continuation);
        }
        x += width;
    }
}

fn styled(cell: Cell, fg: Rgb, bg: Rgb, text_style: TextStyle) -> Cell {
    cell.with_fg(fg).with_bg(bg).with_style(text_style)
}

/// Row and column (in chars) of a char-indexed cursor.
fn cursor_position(value: &str, cursor: usize) -> (usize, usize) {
    let before: String = value.chars().take(cursor).collect();
    let row = before.matches('\n').count();
    let col = before
        .rsplit('\n')
        .next()
        .map(|line| line.chars().count())
        .unwrap_or(0);
    (row, col)
}
