pub mod map_renderer;
pub mod map_style;
pub mod screen;
