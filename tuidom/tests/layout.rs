use tuidom::layout::{intrinsic_size, DEFAULT_INPUT_WIDTH, TEXT_AREA_ROWS};
use tuidom::{Edges, Element, LayoutResult, Rect, Size};

fn layout_root(root: &Element, width: u16, height: u16) -> LayoutResult {
    tuidom::layout::layout(root, Rect::new(0, 0, width, height))
}

// ============================================================================
// Column Stacking
// ============================================================================

#[test]
fn test_column_stacks_children_vertically() {
    let root = Element::col()
        .id("root")
        .child(Element::text("one").id("a"))
        .child(Element::text("two\nlines").id("b"))
        .child(Element::text("three").id("c"));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout["a"], Rect::new(0, 0, 3, 1));
    assert_eq!(layout["b"], Rect::new(0, 1, 5, 2));
    assert_eq!(layout["c"], Rect::new(0, 3, 5, 1));
    assert_eq!(layout["root"], Rect::new(0, 0, 5, 4));
}

#[test]
fn test_column_gap_between_children() {
    let root = Element::col()
        .id("root")
        .gap(1)
        .child(Element::text("a").id("a"))
        .child(Element::text("b").id("b"));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout["b"].y, 2, "one row of gap after a");
    assert_eq!(layout["root"].height, 3);
}

#[test]
fn test_padding_offsets_children() {
    let root = Element::col()
        .id("root")
        .padding(Edges::new(1, 2, 1, 3))
        .child(Element::text("hi").id("child"));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout["child"], Rect::new(3, 1, 2, 1));
    assert_eq!(layout["root"], Rect::new(0, 0, 7, 3));
}

// ============================================================================
// Row Stacking
// ============================================================================

#[test]
fn test_row_stacks_children_horizontally() {
    let root = Element::row()
        .id("root")
        .gap(2)
        .child(Element::text("left").id("left"))
        .child(Element::text("right").id("right"));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout["left"], Rect::new(0, 0, 4, 1));
    assert_eq!(layout["right"], Rect::new(6, 0, 5, 1));
}

// ============================================================================
// Sizing
// ============================================================================

#[test]
fn test_fill_takes_available_space() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::box_().id("child").width(Size::Fill));

    let layout = layout_root(&root, 40, 10);

    assert_eq!(layout["root"], Rect::new(0, 0, 40, 10));
    assert_eq!(layout["child"].width, 40);
}

#[test]
fn test_fixed_size_is_clipped_to_parent() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(2))
        .child(Element::box_().id("big").width(Size::Fixed(50)).height(Size::Fixed(5)));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout["big"], Rect::new(0, 0, 10, 2));
}

#[test]
fn test_overflowing_children_still_get_a_rect() {
    let root = Element::col()
        .id("root")
        .height(Size::Fixed(1))
        .child(Element::text("first").id("first"))
        .child(Element::text("second").id("second"));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout["second"].height, 0);
}

#[test]
fn test_input_sizes() {
    let input = Element::text_input("");
    let area = Element::text_area("a\nb\nc\nd");

    assert_eq!(intrinsic_size(&input), (DEFAULT_INPUT_WIDTH, 1));
    assert_eq!(intrinsic_size(&area), (DEFAULT_INPUT_WIDTH, 4));
    assert_eq!(
        intrinsic_size(&Element::text_area("")),
        (DEFAULT_INPUT_WIDTH, TEXT_AREA_ROWS)
    );
}

#[test]
fn test_wide_chars_count_double() {
    let root = Element::col().id("root").child(Element::text("日本").id("t"));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout["t"].width, 4);
}
