pub mod app;
pub mod event;
pub mod input_buffer;
pub mod mode;
pub mod render_state;

pub use app::App;
pub use event::AppEvent;
pub use input_buffer::InputBuffer;
pub use mode::AppMode;
pub use render_state::{OutputLine, RenderState, Status};
