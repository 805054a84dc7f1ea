pub mod coordinate_mapper;
pub mod display_modes;
pub mod input_adapter;
pub mod input_state;
pub mod window;
pub mod window_state;
pub mod winit_platform;

pub use coordinate_mapper::*;
pub use display_modes::*;
pub use input_adapter::forward_window_event;
pub use input_state::InputState;
pub use window::WindowContext;
pub use window_state::WindowState;
pub use winit_platform::WinitPlatform;
