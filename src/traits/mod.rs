pub mod controller;
pub mod platform;

pub use controller::*;
pub use platform::*;
