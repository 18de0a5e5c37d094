// Display module - host window and frame presentation

mod window;

pub use window::{run_display, WindowConfig};
