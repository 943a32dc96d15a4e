mod rect;
mod stack;

pub use rect::Rect;
pub use stack::{intrinsic_size, layout, LayoutResult, DEFAULT_INPUT_WIDTH, TEXT_AREA_ROWS};
