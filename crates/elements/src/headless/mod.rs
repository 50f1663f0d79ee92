//! Headless mode - scripted input, CPU rendering, image output

mod pixel_renderer;
mod runner;
mod script;

pub use pixel_renderer::PixelRenderer;
pub use runner::{HeadlessRunner, RunReport};
pub use script::{Emitter, InputScript};
