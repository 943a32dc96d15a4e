pub mod app;
pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod harness;
pub mod hit;
pub mod layout;
pub mod query;
pub mod render;
pub mod terminal;
pub mod text;
pub mod text_input;
pub mod types;

pub use app::{run, Component, View};
pub use buffer::Buffer;
pub use element::{Content, Element, Role};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use harness::Harness;
pub use hit::{hit_test, hit_test_focusable};
pub use layout::{LayoutResult, Rect};
pub use query::{By, QueryError, Screen, TextMatch};
pub use terminal::Terminal;
pub use text_input::{TextInputData, TextInputState};
pub use types::*;
