pub mod counters;
pub mod drag;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod render;
pub mod state;

pub use counters::CounterModel;
pub use geometry::{Color, Point, Rect};
pub use hit_test::{classify, Target};
pub use input::{HostCommand, InputDispatcher, PointerButton, PointerEvent};
pub use layout::Layout;
pub use render::{render, Primitive};
pub use state::WidgetState;
